//! Registration page
//! Sign-up form, then the success card with the QR pass

use iced::widget::{Space, button, checkbox, column, container, image, pick_list, row, text};
use iced::{Alignment, Element, Fill};

use crate::app::{IssuedPass, Message, RegistrationState};
use crate::features::registration::{Field, RegistrationForm};
use crate::features::settings::CouponOption;
use crate::ui::theme::{self, BOLD_WEIGHT, MEDIUM_WEIGHT};
use crate::ui::widgets::form_field::{labeled, text_field};

const CARD_WIDTH: f32 = 480.0;
const PASS_WIDTH: f32 = 320.0;
const TAGLINE: &str = "Karnataka's Largest EV Expo";

pub fn view<'a>(
    state: &'a RegistrationState,
    options: &'a [CouponOption],
) -> Element<'a, Message> {
    let body = match &state.pass {
        Some(pass) => success_view(pass),
        None => form_view(state, options),
    };

    container(body)
        .max_width(CARD_WIDTH)
        .padding(28)
        .style(theme::card)
        .into()
}

fn header<'a>() -> Element<'a, Message> {
    column![
        text("EVready 2026")
            .size(26)
            .font(theme::font(BOLD_WEIGHT))
            .style(|theme| text::Style {
                color: Some(theme::heading(theme)),
            }),
        text(TAGLINE)
            .size(14)
            .font(theme::font(MEDIUM_WEIGHT))
            .color(theme::GREEN_700),
        Space::new().height(4),
        text("REGISTRATION FORM")
            .size(12)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
    ]
    .spacing(4)
    .align_x(Alignment::Center)
    .width(Fill)
    .into()
}

fn form_view<'a>(state: &'a RegistrationState, options: &'a [CouponOption]) -> Element<'a, Message> {
    let form: &RegistrationForm = &state.form;
    let errors = &state.errors;

    let name = labeled(
        "Name",
        true,
        text_field(
            "Enter your full name",
            &form.name,
            errors.name.is_some(),
            |v| Message::FormChanged(Field::Name, v),
        ),
        errors.name,
    );

    let email = labeled(
        "Email",
        true,
        text_field(
            "Enter email address",
            &form.email,
            errors.email.is_some(),
            |v| Message::FormChanged(Field::Email, v),
        ),
        errors.email,
    );

    let mobile = labeled(
        "Mobile",
        true,
        text_field(
            "Enter 10 digit mobile number",
            &form.mobile,
            errors.mobile.is_some(),
            |v| Message::FormChanged(Field::Mobile, v),
        ),
        errors.mobile,
    );

    let selected = options.iter().find(|o| o.value == form.coupon_id);
    let coupon = labeled(
        "How did you hear about the EVREADY expo?",
        true,
        pick_list(options, selected, |o: CouponOption| {
            Message::FormChanged(Field::Coupon, o.value)
        })
        .placeholder("Select option")
        .width(Fill)
        .padding([10, 12])
        .style(theme::field_pick_list(errors.coupon_id.is_some()))
        .menu_style(theme::pick_list_menu),
        errors.coupon_id,
    );

    let terms = checkbox(state.agreed_to_terms)
        .label("I agree to Terms & Conditions")
        .on_toggle(Message::TermsToggled)
        .size(16)
        .text_size(14)
        .style(theme::terms_checkbox);

    let submit_label = if state.submitting {
        "Registering..."
    } else {
        "Register Now"
    };
    let submit = button(
        container(text(submit_label).size(15).font(theme::font(MEDIUM_WEIGHT)))
            .center_x(Fill),
    )
    .width(Fill)
    .padding([12, 16])
    .style(theme::primary_button)
    .on_press_maybe((!state.submitting).then_some(Message::SubmitRegistration));

    column![header(), name, email, mobile, coupon, terms, submit]
        .spacing(18)
        .width(Fill)
        .into()
}

fn success_view(pass: &IssuedPass) -> Element<'_, Message> {
    let badge = container(
        text(format!("Registration No: {}", pass.reg_num))
            .size(14)
            .font(theme::font(BOLD_WEIGHT))
            .color(theme::GREEN_800),
    )
    .padding([8, 16])
    .style(theme::badge);

    let mut content = column![
        container(text("✓").size(48).color(theme::GREEN_700))
            .padding([12, 28])
            .style(theme::badge),
        text("Registration Successful 🎉")
            .size(28)
            .font(theme::font(BOLD_WEIGHT))
            .style(|theme| text::Style {
                color: Some(theme::heading(theme)),
            }),
        text("Your free pass for EVready 2026 is confirmed.")
            .size(14)
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
        badge,
    ]
    .spacing(14)
    .align_x(Alignment::Center)
    .width(Fill);

    if let Some(handle) = &pass.image {
        let download = button(
            row![text("⤓").size(16), text("Download QR Pass").size(15)]
                .spacing(8)
                .align_y(Alignment::Center),
        )
        .width(Fill)
        .padding([10, 16])
        .style(theme::secondary_button)
        .on_press(Message::SaveQrPass);

        content = content
            .push(Space::new().height(10))
            .push(image(handle.clone()).width(PASS_WIDTH))
            .push(download);
    }

    content
        .push(Space::new().height(12))
        .push(
            button(
                container(text("New Registration").size(15).font(theme::font(MEDIUM_WEIGHT)))
                    .center_x(Fill),
            )
            .width(Fill)
            .padding([12, 16])
            .style(theme::primary_button)
            .on_press(Message::NewRegistration),
        )
        .into()
}
