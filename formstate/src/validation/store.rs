//! Error state for a form.

use crate::state::{State, Subscription};
use crate::{FormErrors, FormValues};

use super::FieldValidations;

/// Validation errors per field, derived from a [`FieldValidations`] config.
///
/// The error map always has exactly the configured field names as keys.
/// Operations only replace the message list of an existing key; names outside
/// the configuration are a caller bug and trip a debug assertion (release
/// builds log a warning and ignore the call).
///
/// Each field moves between having no messages and having some, driven by
/// the validate calls or forced by [`clear_input_errors`](Self::clear_input_errors)
/// and [`set_input_errors`](Self::set_input_errors).
#[derive(Debug, Clone)]
pub struct ErrorStore {
    validations: FieldValidations,
    initial: FormErrors,
    errors: State<FormErrors>,
}

impl ErrorStore {
    /// Create a store with an empty message list for every configured field.
    pub fn new(validations: FieldValidations) -> Self {
        let initial: FormErrors = validations
            .names()
            .map(|name| (name.to_string(), Vec::new()))
            .collect();
        Self {
            validations,
            errors: State::new(initial.clone()),
            initial,
        }
    }

    /// The rule configuration this store was built from.
    pub fn validations(&self) -> &FieldValidations {
        &self.validations
    }

    /// Snapshot of all field errors.
    pub fn errors(&self) -> FormErrors {
        self.errors.get()
    }

    /// Messages currently stored for `name`.
    pub fn input_errors(&self, name: &str) -> Vec<String> {
        self.errors
            .with(|errors| errors.get(name).cloned().unwrap_or_default())
    }

    /// First message for `name`, which is what an input displays.
    pub fn first_error(&self, name: &str) -> Option<String> {
        self.errors
            .with(|errors| errors.get(name).and_then(|msgs| msgs.first().cloned()))
    }

    /// Number of fields that have at least one message.
    pub fn number_of_errors(&self) -> usize {
        self.errors
            .with(|errors| errors.values().filter(|msgs| !msgs.is_empty()).count())
    }

    /// Whether no field currently has a message.
    pub fn is_valid(&self) -> bool {
        self.number_of_errors() == 0
    }

    /// Validate one field and store the result.
    ///
    /// Returns `true` when no rule produced a message. `name` must be a
    /// configured field; in release builds an unconfigured name stores
    /// nothing and returns `true`.
    pub fn validate_input_value<'a>(&self, name: &str, value: impl Into<Option<&'a str>>) -> bool {
        if !self.check_field(name, "validate_input_value") {
            return true;
        }

        let messages = self.validations.evaluate(name, value.into());
        let valid = messages.is_empty();

        log::debug!(
            "validated field '{}': {} message(s)",
            name,
            messages.len()
        );
        self.errors.update(|errors| {
            errors.insert(name.to_string(), messages);
        });
        valid
    }

    /// Remove all messages from `name`.
    pub fn clear_input_errors(&self, name: &str) {
        if !self.check_field(name, "clear_input_errors") {
            return;
        }
        self.errors.update(|errors| {
            errors.insert(name.to_string(), Vec::new());
        });
    }

    /// Replace `name`'s messages verbatim, without running any rule.
    ///
    /// Used to show errors that come from elsewhere, such as a server
    /// response. The list is stored as given: no merging, no dedup.
    pub fn set_input_errors(&self, name: &str, errors: Vec<String>) {
        if !self.check_field(name, "set_input_errors") {
            return;
        }
        self.errors.update(|current| {
            current.insert(name.to_string(), errors);
        });
    }

    /// Validate every configured field against `values` and store the result
    /// in one update.
    ///
    /// A configured field missing from `values` is validated as absent.
    /// Fields in `values` without configuration are ignored. Returns `true`
    /// when no field has a message afterwards.
    pub fn validate_form(&self, values: &FormValues) -> bool {
        let next: FormErrors = self
            .initial
            .keys()
            .map(|name| {
                let value = values.get(name).map(String::as_str);
                (name.clone(), self.validations.evaluate(name, value))
            })
            .collect();

        let invalid = next.values().filter(|msgs| !msgs.is_empty()).count();
        log::debug!(
            "validated form: {} of {} field(s) invalid",
            invalid,
            next.len()
        );

        self.errors.set(next);
        invalid == 0
    }

    /// Reset every field to no messages.
    pub fn clear_form_errors(&self) {
        self.errors.set(self.initial.clone());
    }

    /// Observe every change to the error map.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, f: F) -> Subscription
    where
        F: Fn(&FormErrors) + Send + Sync + 'static,
    {
        self.errors.subscribe(f)
    }

    /// The underlying observable cell.
    pub fn state(&self) -> &State<FormErrors> {
        &self.errors
    }

    fn check_field(&self, name: &str, op: &str) -> bool {
        let known = self.initial.contains_key(name);
        if !known {
            log::warn!("{} called with unconfigured field '{}'", op, name);
        }
        debug_assert!(known, "{op} called with unconfigured field '{name}'");
        known
    }
}
