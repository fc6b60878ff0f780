// src/app/update/registration.rs
//! Registration form message handlers

use iced::Task;

use super::navigation::notify;
use crate::app::helpers;
use crate::app::message::Message;
use crate::app::state::{App, IssuedPass, RegistrationState};
use crate::features::registration::{DRAFT_KEY, check_terms};
use crate::ui::widgets::Toast;

const REGISTERED: &str = "Registration successful";
const PASS_SAVED: &str = "QR pass saved";

impl App {
    /// Store the form under the draft key; failures only cost the draft
    fn save_draft(&mut self) {
        if let Err(e) = self
            .core
            .drafts
            .set(DRAFT_KEY, &self.desk.registration.form)
        {
            tracing::warn!("Failed to save registration draft: {:#}", e);
        }
    }

    fn clear_draft(&mut self) {
        if let Err(e) = self.core.drafts.clear(DRAFT_KEY) {
            tracing::warn!("Failed to clear registration draft: {:#}", e);
        }
    }

    /// Handle registration-related messages
    pub fn handle_registration(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::FormChanged(field, value) => {
                let reg = &mut self.desk.registration;
                if reg.is_complete() {
                    return Some(Task::none());
                }
                reg.form.set(*field, value.clone());
                reg.errors.clear(*field);
                self.save_draft();
                Some(Task::none())
            }

            Message::TermsToggled(agreed) => {
                self.desk.registration.agreed_to_terms = *agreed;
                Some(Task::none())
            }

            Message::SubmitRegistration => {
                let reg = &mut self.desk.registration;
                if reg.submitting || reg.is_complete() {
                    return Some(Task::none());
                }

                let payload = match reg
                    .form
                    .validate(&self.core.settings.registration.coupon_options)
                {
                    Ok(payload) => payload,
                    Err(errors) => {
                        tracing::debug!("Registration form has errors");
                        reg.errors = errors;
                        return Some(Task::none());
                    }
                };
                reg.errors = Default::default();

                if let Err(msg) = check_terms(reg.agreed_to_terms) {
                    return Some(notify(Toast::error(msg)));
                }

                let Some(client) = self.core.client.clone() else {
                    return Some(notify(Toast::error("Backend is not configured")));
                };

                reg.submitting = true;
                tracing::info!("Submitting registration");
                Some(Task::perform(
                    async move { client.register(&payload).await.map_err(|e| e.to_string()) },
                    Message::RegistrationFinished,
                ))
            }

            Message::RegistrationFinished(result) => {
                self.desk.registration.submitting = false;
                match result {
                    Ok(registration) => {
                        let reg_num = registration.reg_num.clone();
                        tracing::info!("Registered as {}", reg_num);
                        self.desk.registration.pass = Some(IssuedPass::new(reg_num.clone()));
                        self.clear_draft();
                        Some(Task::batch([
                            notify(Toast::success(REGISTERED)),
                            Task::perform(
                                helpers::render_pass_delayed(reg_num.clone()),
                                move |png| Message::QrPassReady(reg_num, png),
                            ),
                        ]))
                    }
                    Err(e) => {
                        tracing::warn!("Registration failed: {}", e);
                        Some(notify(Toast::error(e.clone())))
                    }
                }
            }

            Message::QrPassReady(reg_num, result) => {
                // Ignore passes for a registration that was already dismissed
                let Some(pass) = self
                    .desk
                    .registration
                    .pass
                    .as_mut()
                    .filter(|p| &p.reg_num == reg_num)
                else {
                    return Some(Task::none());
                };
                match result {
                    Ok(png) => {
                        pass.set_png(png.clone());
                        Some(Task::none())
                    }
                    Err(e) => {
                        tracing::error!("Failed to render QR pass: {}", e);
                        Some(notify(Toast::error("Failed to generate QR pass")))
                    }
                }
            }

            Message::SaveQrPass => {
                let Some((reg_num, png)) = self
                    .desk
                    .registration
                    .pass
                    .as_ref()
                    .and_then(|p| p.png.clone().map(|png| (p.reg_num.clone(), png)))
                else {
                    return Some(Task::none());
                };
                Some(Task::perform(
                    helpers::save_pass(reg_num, png),
                    Message::QrPassSaved,
                ))
            }

            Message::QrPassSaved(result) => match result {
                Ok(Some(_)) => Some(notify(Toast::success(PASS_SAVED))),
                Ok(None) => Some(Task::none()),
                Err(e) => Some(notify(Toast::error(e.clone()))),
            },

            Message::NewRegistration => {
                self.desk.registration = RegistrationState::default();
                self.clear_draft();
                Some(Task::none())
            }

            _ => None,
        }
    }
}
