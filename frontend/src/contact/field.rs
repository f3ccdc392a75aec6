use serde::Serialize;

use crate::config;
use crate::contact::validation::ValidationError;

/// Validation category of a form control.
///
/// `Text` covers both `<input type="text">` and `<textarea>`; they share one
/// rule so the category never depends on a literal `type` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Email,
    Tel,
    Text,
    TextArea,
    Checkbox,
    Select,
    Other,
}

impl FieldKind {
    pub fn is_text_like(self) -> bool {
        matches!(self, FieldKind::Text | FieldKind::TextArea)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl FieldValue {
    /// Empty after trimming, or an unchecked box.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Checked(checked) => !checked,
        }
    }

    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Checked(_) => "",
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, FieldValue::Checked(true))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub value: FieldValue,
    pub initial: FieldValue,
    pub error: Option<ValidationError>,
    pub placeholder: Option<String>,
    pub options: Vec<SelectOption>,
}

impl Field {
    fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        let initial = match kind {
            FieldKind::Checkbox => FieldValue::Checked(false),
            FieldKind::Select => FieldValue::Text(config::SELECT_SENTINEL.to_string()),
            _ => FieldValue::Text(String::new()),
        };
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required: false,
            value: initial.clone(),
            initial,
            error: None,
            placeholder: None,
            options: Vec::new(),
        }
    }

    pub fn text(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn textarea(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::TextArea)
    }

    pub fn email(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Email)
    }

    pub fn tel(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Tel)
    }

    pub fn checkbox(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Checkbox)
    }

    /// A single select whose first option is the sentinel placeholder.
    pub fn select(name: &str, label: &str, prompt: &str, options: &[(&str, &str)]) -> Self {
        let mut field = Self::new(name, label, FieldKind::Select);
        field.options.push(SelectOption {
            value: config::SELECT_SENTINEL.to_string(),
            label: prompt.to_string(),
        });
        field.options.extend(options.iter().map(|(value, label)| SelectOption {
            value: value.to_string(),
            label: label.to_string(),
        }));
        field
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Back to the page-load value with no error, like `form.reset()`.
    pub fn reset(&mut self) {
        self.value = self.initial.clone();
        self.error = None;
    }
}

/// The fields of the site's contact form, in document order.
pub fn contact_fields() -> Vec<Field> {
    vec![
        Field::text("name", "Full Name").required().placeholder("Your name"),
        Field::email("email", "Email Address").required().placeholder("you@company.com"),
        Field::tel(config::PHONE_FIELD, "Phone Number").placeholder("(555) 123-4567"),
        Field::text("company", "Company").placeholder("Company name"),
        Field::select(
            "service",
            "Service of Interest",
            "Select a service",
            &[
                ("consulting", "Consulting"),
                ("development", "Development"),
                ("support", "Support & Maintenance"),
                ("other", "Other"),
            ],
        )
        .required(),
        Field::textarea("message", "Message").required().placeholder("How can we help?"),
        Field::checkbox("consent", "I agree to be contacted about my inquiry").required(),
    ]
}
