//! Attendee registration form model and validation

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::settings::CouponOption;

/// Draft store key for the registration form
pub const DRAFT_KEY: &str = "add-ev-form";

pub const MOBILE_MIN_DIGITS: usize = 10;
pub const MOBILE_MAX_DIGITS: usize = 15;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const MOBILE_TOO_SHORT: &str = "Mobile number must be at least 10 digits";
pub const MOBILE_TOO_LONG: &str = "Mobile number must not exceed 15 digits";
pub const OPTION_REQUIRED: &str = "Please select an option";
pub const TERMS_REQUIRED: &str = "Please accept Terms & Conditions.";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-]+(\.[A-Za-z0-9_'+\-]+)*@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .unwrap()
});

/// Form contents, also the shape stored in the draft cache and sent to the
/// backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub coupon_id: String,
}

/// Editable form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Mobile,
    Coupon,
}

/// Per-field validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub mobile: Option<&'static str>,
    pub coupon_id: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.mobile.is_none()
            && self.coupon_id.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Mobile => self.mobile,
            Field::Coupon => self.coupon_id,
        }
    }

    /// Clear the message for a field once the user edits it
    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Mobile => self.mobile = None,
            Field::Coupon => self.coupon_id = None,
        }
    }
}

/// Keep only ASCII digits, as typed into the mobile field
pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

impl RegistrationForm {
    /// Update one field; the mobile field drops non-digits
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Mobile => self.mobile = digits_only(&value),
            Field::Coupon => self.coupon_id = value,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.mobile.is_empty()
            && self.coupon_id.is_empty()
    }

    /// Validate against the configured coupon options
    ///
    /// Returns the trimmed payload to submit.
    pub fn validate(&self, options: &[CouponOption]) -> Result<RegistrationForm, FieldErrors> {
        let name = self.name.trim();
        let email = self.email.trim();
        let mobile = digits_only(&self.mobile);

        let mut errors = FieldErrors::default();
        if name.is_empty() {
            errors.name = Some(NAME_REQUIRED);
        }
        if !is_valid_email(email) {
            errors.email = Some(EMAIL_INVALID);
        }
        if mobile.len() < MOBILE_MIN_DIGITS {
            errors.mobile = Some(MOBILE_TOO_SHORT);
        } else if mobile.len() > MOBILE_MAX_DIGITS {
            errors.mobile = Some(MOBILE_TOO_LONG);
        }
        if !options.iter().any(|o| o.value == self.coupon_id) {
            errors.coupon_id = Some(OPTION_REQUIRED);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(RegistrationForm {
            name: name.to_string(),
            email: email.to_string(),
            mobile,
            coupon_id: self.coupon_id.clone(),
        })
    }
}

/// Terms checkbox gate, checked after field validation passes
pub fn check_terms(agreed: bool) -> Result<(), &'static str> {
    if agreed { Ok(()) } else { Err(TERMS_REQUIRED) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::settings::RegistrationSettings;

    fn options() -> Vec<CouponOption> {
        RegistrationSettings::default().coupon_options
    }

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            name: "Kavya Shetty".into(),
            email: "kavya@example.com".into(),
            mobile: "9845012345".into(),
            coupon_id: options()[0].value.clone(),
        }
    }

    #[test]
    fn valid_form_passes() {
        let payload = valid_form().validate(&options()).unwrap();
        assert_eq!(payload.name, "Kavya Shetty");
    }

    #[test]
    fn payload_is_trimmed() {
        let mut form = valid_form();
        form.name = "  Kavya  ".into();
        form.email = " kavya@example.com ".into();
        let payload = form.validate(&options()).unwrap();
        assert_eq!(payload.name, "Kavya");
        assert_eq!(payload.email, "kavya@example.com");
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = RegistrationForm::default().validate(&options()).unwrap_err();
        assert_eq!(errors.name, Some(NAME_REQUIRED));
        assert_eq!(errors.email, Some(EMAIL_INVALID));
        assert_eq!(errors.mobile, Some(MOBILE_TOO_SHORT));
        assert_eq!(errors.coupon_id, Some(OPTION_REQUIRED));
    }

    #[test]
    fn whitespace_name_is_required() {
        let mut form = valid_form();
        form.name = "   ".into();
        let errors = form.validate(&options()).unwrap_err();
        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
        assert!(errors.email.is_none());
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a.b+tag@mail.example.in"));
        assert!(is_valid_email("o'neil@example.com"));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("no-tld@example"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email(".lead@example.com"));
        assert!(!is_valid_email("dots..inside@example.com"));
        assert!(!is_valid_email("space in@example.com"));
    }

    #[test]
    fn mobile_length_bounds() {
        let mut form = valid_form();
        form.mobile = "123456789".into();
        assert_eq!(
            form.validate(&options()).unwrap_err().mobile,
            Some(MOBILE_TOO_SHORT)
        );
        form.mobile = "1234567890123456".into();
        assert_eq!(
            form.validate(&options()).unwrap_err().mobile,
            Some(MOBILE_TOO_LONG)
        );
        form.mobile = "123456789012345".into();
        assert!(form.validate(&options()).is_ok());
    }

    #[test]
    fn mobile_input_strips_non_digits() {
        let mut form = RegistrationForm::default();
        form.set(Field::Mobile, "+91 98450-12345".into());
        assert_eq!(form.mobile, "919845012345");
        assert_eq!(digits_only("abc"), "");
        assert_eq!(digits_only("٣٤٥"), "");
    }

    #[test]
    fn unknown_coupon_rejected() {
        let mut form = valid_form();
        form.coupon_id = "NOT_AN_OPTION".into();
        assert_eq!(
            form.validate(&options()).unwrap_err().coupon_id,
            Some(OPTION_REQUIRED)
        );
    }

    #[test]
    fn clearing_field_error() {
        let mut errors = RegistrationForm::default().validate(&options()).unwrap_err();
        errors.clear(Field::Email);
        assert!(errors.email.is_none());
        assert!(errors.name.is_some());
    }

    #[test]
    fn terms_must_be_accepted() {
        assert_eq!(check_terms(false), Err(TERMS_REQUIRED));
        assert_eq!(check_terms(true), Ok(()));
    }

    #[test]
    fn serializes_with_backend_keys() {
        let json = serde_json::to_value(valid_form()).unwrap();
        assert_eq!(json["couponId"], options()[0].value);
        assert_eq!(json["mobile"], "9845012345");
        assert!(json.get("coupon_id").is_none());
    }
}
