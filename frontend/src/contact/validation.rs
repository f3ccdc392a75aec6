use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::config;
use crate::contact::field::{Field, FieldKind};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9+\-\s()]{7,20}$").expect("phone pattern compiles"));

/// Why a field failed validation. `Display` is the message shown under the field.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Email address is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Phone number is required")]
    PhoneRequired,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("{} is required", capitalize(.0))]
    Required(String),
    #[error("This checkbox is required")]
    CheckboxRequired,
    #[error("Please select an option")]
    SelectionRequired,
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

/// Applies the rule for the field's kind to its current (trimmed) value.
///
/// An empty optional field is always valid, whatever its kind.
/// Kinds without a rule are always valid.
pub fn validate(field: &Field) -> Result<(), ValidationError> {
    if !field.required && field.value.is_empty() {
        return Ok(());
    }

    let value = field.value.as_text().trim();

    match field.kind {
        FieldKind::Email => {
            if value.is_empty() {
                Err(ValidationError::EmailRequired)
            } else if !is_valid_email(value) {
                Err(ValidationError::InvalidEmail)
            } else {
                Ok(())
            }
        }
        FieldKind::Tel => {
            if field.required && value.is_empty() {
                Err(ValidationError::PhoneRequired)
            } else if !value.is_empty() && !is_valid_phone(value) {
                Err(ValidationError::InvalidPhone)
            } else {
                Ok(())
            }
        }
        kind if kind.is_text_like() => {
            if field.required && value.is_empty() {
                Err(ValidationError::Required(field.name.clone()))
            } else {
                Ok(())
            }
        }
        FieldKind::Checkbox => {
            if field.required && !field.value.is_checked() {
                Err(ValidationError::CheckboxRequired)
            } else {
                Ok(())
            }
        }
        FieldKind::Select => {
            if field.required && (value.is_empty() || value == config::SELECT_SENTINEL) {
                Err(ValidationError::SelectionRequired)
            } else {
                Ok(())
            }
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::field::FieldValue;
    use proptest::prelude::*;

    fn with_value(mut field: Field, value: &str) -> Field {
        field.value = FieldValue::Text(value.to_string());
        field
    }

    #[test]
    fn email_accepts_and_rejects() {
        let email = Field::email("email", "Email").required();
        assert_eq!(validate(&with_value(email.clone(), "a@b.co")), Ok(()));
        assert_eq!(
            validate(&with_value(email.clone(), "a@b")),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            validate(&with_value(email.clone(), "a b@c.de")),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            validate(&with_value(email.clone(), "a@@b.co")),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(validate(&with_value(email, "")), Err(ValidationError::EmailRequired));
    }

    #[test]
    fn email_value_is_trimmed() {
        let email = with_value(Field::email("email", "Email").required(), "  a@b.co  ");
        assert_eq!(validate(&email), Ok(()));
    }

    #[test]
    fn phone_rules() {
        let optional = Field::tel("phone", "Phone");
        assert_eq!(validate(&optional), Ok(()));
        assert_eq!(validate(&with_value(optional.clone(), "(555) 123-4567")), Ok(()));
        assert_eq!(validate(&with_value(optional.clone(), "+358 401 2345 67")), Ok(()));
        assert_eq!(
            validate(&with_value(optional.clone(), "123")),
            Err(ValidationError::InvalidPhone)
        );
        assert_eq!(
            validate(&with_value(optional.clone(), "555-CALL-NOW")),
            Err(ValidationError::InvalidPhone)
        );
        assert_eq!(
            validate(&with_value(optional, "123456789012345678901")),
            Err(ValidationError::InvalidPhone)
        );

        let required = Field::tel("phone", "Phone").required();
        assert_eq!(validate(&required), Err(ValidationError::PhoneRequired));
    }

    #[test]
    fn required_text_message_capitalizes_field_name() {
        let err = validate(&Field::textarea("message", "Message").required()).unwrap_err();
        assert_eq!(err.to_string(), "Message is required");

        let err = validate(&with_value(Field::text("name", "Name").required(), "   ")).unwrap_err();
        assert_eq!(err.to_string(), "Name is required");
    }

    #[test]
    fn checkbox_must_be_checked_when_required() {
        let mut consent = Field::checkbox("consent", "Consent").required();
        assert_eq!(validate(&consent), Err(ValidationError::CheckboxRequired));
        assert_eq!(
            ValidationError::CheckboxRequired.to_string(),
            "This checkbox is required"
        );
        consent.value = FieldValue::Checked(true);
        assert_eq!(validate(&consent), Ok(()));
    }

    #[test]
    fn select_rejects_sentinel_when_required() {
        let service = Field::select("service", "Service", "Pick", &[("dev", "Dev")]).required();
        let err = validate(&service).unwrap_err();
        assert_eq!(err.to_string(), "Please select an option");
        assert_eq!(
            validate(&with_value(service.clone(), "")),
            Err(ValidationError::SelectionRequired)
        );
        assert_eq!(validate(&with_value(service, "dev")), Ok(()));
    }

    #[test]
    fn optional_select_accepts_sentinel() {
        let service = Field::select("service", "Service", "Pick", &[("dev", "Dev")]);
        assert_eq!(validate(&service), Ok(()));
    }

    #[test]
    fn unknown_kinds_are_never_validated() {
        let mut field = Field::text("website", "Website").required();
        field.kind = FieldKind::Other;
        assert_eq!(validate(&field), Ok(()));
    }

    proptest! {
        #[test]
        fn empty_optional_fields_are_always_valid(kind_idx in 0usize..7, blanks in "[ \t]{0,4}") {
            let mut field = match kind_idx {
                0 => Field::email("email", "Email"),
                1 => Field::tel("phone", "Phone"),
                2 => Field::text("name", "Name"),
                3 => Field::textarea("message", "Message"),
                4 => Field::checkbox("consent", "Consent"),
                5 => Field::select("service", "Service", "Pick", &[]),
                _ => {
                    let mut f = Field::text("website", "Website");
                    f.kind = FieldKind::Other;
                    f
                }
            };
            if field.kind != FieldKind::Checkbox && field.kind != FieldKind::Select {
                field.value = FieldValue::Text(blanks);
            }
            prop_assert_eq!(validate(&field), Ok(()));
        }

        #[test]
        fn well_formed_emails_pass(
            local in "[a-z0-9._%+-]{1,12}",
            domain in "[a-z0-9-]{1,12}",
            tld in "[a-z]{2,6}",
        ) {
            let address = format!("{local}@{domain}.{tld}");
            prop_assert!(is_valid_email(&address));
        }

        #[test]
        fn emails_without_dot_after_at_fail(local in "[a-z0-9]{1,12}", domain in "[a-z0-9]{1,12}") {
            let address = format!("{local}@{domain}");
            prop_assert!(!is_valid_email(&address));
        }
    }
}
