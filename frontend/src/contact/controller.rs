use std::collections::BTreeMap;

use log::{debug, info};
use serde::Serialize;

use crate::config;
use crate::contact::field::{contact_fields, Field, FieldKind, FieldValue};
use crate::contact::phone::format_phone;
use crate::contact::validation::validate;

/// Where the form is in its submit cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Submitting,
    Submitted,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; the simulated request is now pending.
    Started,
    /// At least one field failed. Carries the first errored field in document order.
    Invalid { first_error: Option<String> },
    /// A submission is already pending or finished.
    Ignored,
}

/// Payload a real backend would receive for this form.
#[derive(Debug, Serialize)]
pub struct Submission<'a> {
    pub form: &'a str,
    pub fields: BTreeMap<&'a str, &'a FieldValue>,
}

/// State and event handlers for one form.
///
/// Built once per page from an explicit field list. The field set is fixed
/// after construction. Handlers given a name that is not in the set do
/// nothing, so a field missing from the page never breaks the others.
#[derive(Clone, Debug, PartialEq)]
pub struct FormController {
    form_id: String,
    phone_field: Option<String>,
    fields: Vec<Field>,
    phase: Phase,
    submit_label: String,
    scroll_requests: u32,
}

impl FormController {
    pub fn new(form_id: &str, fields: Vec<Field>, phone_field: Option<&str>) -> Self {
        let phone_field = phone_field
            .filter(|name| fields.iter().any(|f| f.name == *name && f.kind == FieldKind::Tel))
            .map(str::to_string);
        if phone_field.is_none() {
            debug!("Form {} has no phone field, input mask disabled", form_id);
        }
        Self {
            form_id: form_id.to_string(),
            phone_field,
            fields,
            phase: Phase::Editing,
            submit_label: config::SUBMIT_LABEL.to_string(),
            scroll_requests: 0,
        }
    }

    /// The site's contact form.
    pub fn contact() -> Self {
        Self::new(config::FORM_ID, contact_fields(), Some(config::PHONE_FIELD))
    }

    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        let field = self.fields.iter_mut().find(|f| f.name == name);
        if field.is_none() {
            debug!("Form {} has no field named {}", self.form_id, name);
        }
        field
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn submit_disabled(&self) -> bool {
        self.phase != Phase::Editing
    }

    pub fn submit_label(&self) -> &str {
        match self.phase {
            Phase::Submitting => config::SUBMITTING_LABEL,
            _ => &self.submit_label,
        }
    }

    /// Bumped each time a failed submit wants the first error scrolled into view.
    pub fn scroll_requests(&self) -> u32 {
        self.scroll_requests
    }

    /// First field in document order currently showing an error.
    pub fn first_invalid(&self) -> Option<&Field> {
        self.fields.iter().find(|f| f.has_error())
    }

    /// Stores a typed value. The phone field goes through the input mask first.
    pub fn on_input(&mut self, name: &str, value: String) {
        let masked = self.phone_field.as_deref() == Some(name);
        if let Some(field) = self.field_mut(name) {
            let value = if masked {
                format_phone(&value).unwrap_or(value)
            } else {
                value
            };
            field.value = FieldValue::Text(value);
        }
    }

    pub fn on_toggle(&mut self, name: &str, checked: bool) {
        if let Some(field) = self.field_mut(name) {
            field.value = FieldValue::Checked(checked);
        }
    }

    /// Focus always drops the field's error, valid or not.
    pub fn on_focus(&mut self, name: &str) {
        if let Some(field) = self.field_mut(name) {
            field.error = None;
        }
    }

    /// Validates the field that lost focus. `None` if there is no such field.
    pub fn on_blur(&mut self, name: &str) -> Option<bool> {
        self.field_mut(name).map(check)
    }

    /// Validates every field, without stopping at the first failure.
    pub fn validate_all(&mut self) -> bool {
        self.fields
            .iter_mut()
            .fold(true, |all_valid, field| check(field) && all_valid)
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.phase != Phase::Editing {
            debug!("Ignoring submit of {} while {:?}", self.form_id, self.phase);
            return SubmitOutcome::Ignored;
        }

        if !self.validate_all() {
            self.scroll_requests = self.scroll_requests.wrapping_add(1);
            let first_error = self.first_invalid().map(|f| f.name.clone());
            info!(
                "Form {} has invalid fields, first: {:?}",
                self.form_id, first_error
            );
            return SubmitOutcome::Invalid { first_error };
        }

        info!("Submitting form {}", self.form_id);
        self.phase = Phase::Submitting;
        SubmitOutcome::Started
    }

    /// Called when the simulated latency has elapsed. Returns whether the
    /// form moved to the success state.
    pub fn complete_submission(&mut self) -> bool {
        if self.phase != Phase::Submitting {
            return false;
        }
        match serde_json::to_string(&self.submission()) {
            Ok(body) => debug!("Simulated submission body: {}", body),
            Err(e) => debug!("Could not serialize submission: {}", e),
        }
        self.phase = Phase::Submitted;
        info!("Form {} submitted", self.form_id);
        true
    }

    /// Back to the page-load state after the success panel is dismissed.
    pub fn restart(&mut self) -> bool {
        if self.phase != Phase::Submitted {
            return false;
        }
        self.fields.iter_mut().for_each(Field::reset);
        self.phase = Phase::Editing;
        self.scroll_requests = 0;
        info!("Form {} reset for another message", self.form_id);
        true
    }

    pub fn submission(&self) -> Submission<'_> {
        Submission {
            form: &self.form_id,
            fields: self
                .fields
                .iter()
                .map(|f| (f.name.as_str(), &f.value))
                .collect(),
        }
    }
}

fn check(field: &mut Field) -> bool {
    match validate(field) {
        Ok(()) => {
            field.error = None;
            true
        }
        Err(e) => {
            debug!("Field {} invalid: {}", field.name, e);
            field.error = Some(e);
            false
        }
    }
}
