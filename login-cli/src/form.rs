//! The login form: an email and a password field wired to form state.

use formstate::prelude::*;

use crate::auth::{EMAIL_FIELD, PASSWORD_FIELD};

/// What a text input renders for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub value: String,
    /// Only the first message is shown.
    pub error: Option<String>,
}

impl FieldView {
    pub fn is_invalid(&self) -> bool {
        self.error.is_some()
    }
}

/// Email/password form state.
///
/// Email is validated when it loses focus; password errors are cleared on
/// blur and only reappear on submit.
#[derive(Debug, Clone)]
pub struct LoginForm {
    values: ValueStore,
    errors: ErrorStore,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            values: ValueStore::with_policy(
                form_values([(EMAIL_FIELD, ""), (PASSWORD_FIELD, "")]),
                UnknownFieldPolicy::Reject,
            ),
            errors: ErrorStore::new(Self::validations()),
        }
    }

    /// Rules for the login fields.
    pub fn validations() -> FieldValidations {
        FieldValidations::builder()
            .field(EMAIL_FIELD)
            .rule(rules::required)
            .rule(rules::email)
            .rule(rules::min_length(5))
            .field(PASSWORD_FIELD)
            .rule(rules::required)
            .rule(rules::atleast_one_caps)
            .rule(rules::min_length(6))
            .build()
    }

    pub fn values(&self) -> &ValueStore {
        &self.values
    }

    pub fn errors(&self) -> &ErrorStore {
        &self.errors
    }

    /// Input changed.
    pub fn on_change(&self, change: &InputChange) -> Result<(), FormStateError> {
        self.values.update_input_value(change)
    }

    /// Input lost focus.
    pub fn on_blur(&self, name: &str) {
        match name {
            EMAIL_FIELD => {
                let value = self.values.value(name);
                self.errors.validate_input_value(name, value.as_deref());
            }
            _ => self.errors.clear_input_errors(name),
        }
    }

    /// Validate everything and return the values to submit, if valid.
    pub fn submit(&self) -> Option<FormValues> {
        let values = self.values.values();
        if self.errors.validate_form(&values) {
            Some(values)
        } else {
            log::debug!(
                "login form rejected: {} invalid field(s)",
                self.errors.number_of_errors()
            );
            None
        }
    }

    /// Server-side messages for a field, shown like rule messages.
    pub fn inject_errors(&self, name: &str, errors: Vec<String>) {
        self.errors.set_input_errors(name, errors);
    }

    /// Render data for `name`.
    pub fn field_view(&self, name: &str) -> FieldView {
        FieldView {
            value: self.values.value(name).unwrap_or_default(),
            error: self.errors.first_error(name),
        }
    }

    /// Start over with empty fields and no errors.
    pub fn reset(&self) {
        self.values.reset_form_values();
        self.errors.clear_form_errors();
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}
