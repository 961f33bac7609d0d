//! Value state for a form.

mod change;

pub use change::{InputChange, InputTarget};

use crate::FormValues;
use crate::error::FormStateError;
use crate::state::{State, Subscription};

/// What [`ValueStore::set_input_value`] does with a name that is not one of
/// the form's initial fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownFieldPolicy {
    /// Add the name to the value map (default).
    ///
    /// [`ValueStore::reset_form_values`] removes it again, since the reset
    /// target only has the initial fields.
    #[default]
    Widen,
    /// Leave the values untouched and return [`FormStateError::UnknownField`].
    Reject,
}

/// Current values of a form's named fields.
///
/// The initial values passed to [`ValueStore::new`] are kept as the reset
/// target. All mutations go through a [`State`] cell, so subscribers see
/// every change.
#[derive(Debug, Clone)]
pub struct ValueStore {
    initial: FormValues,
    values: State<FormValues>,
    policy: UnknownFieldPolicy,
}

impl ValueStore {
    /// Create a store that widens on unknown field names.
    pub fn new(initial: FormValues) -> Self {
        Self::with_policy(initial, UnknownFieldPolicy::default())
    }

    /// Create a store with an explicit unknown-field policy.
    pub fn with_policy(initial: FormValues, policy: UnknownFieldPolicy) -> Self {
        Self {
            values: State::new(initial.clone()),
            initial,
            policy,
        }
    }

    pub fn policy(&self) -> UnknownFieldPolicy {
        self.policy
    }

    /// Snapshot of all current values.
    pub fn values(&self) -> FormValues {
        self.values.get()
    }

    /// Current value of `name`.
    pub fn value(&self, name: &str) -> Option<String> {
        self.values.with(|values| values.get(name).cloned())
    }

    /// The values captured at creation.
    pub fn initial_values(&self) -> &FormValues {
        &self.initial
    }

    /// Overwrite `name` with `value`.
    ///
    /// Unknown names follow the store's [`UnknownFieldPolicy`].
    pub fn set_input_value(
        &self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), FormStateError> {
        if self.policy == UnknownFieldPolicy::Reject && !self.initial.contains_key(name) {
            log::warn!("rejected value for unknown field '{}'", name);
            return Err(FormStateError::UnknownField(name.to_string()));
        }

        let value = value.into();
        self.values.update(|values| {
            values.insert(name.to_string(), value);
        });
        Ok(())
    }

    /// Apply an input-change notification.
    pub fn update_input_value(&self, change: &InputChange) -> Result<(), FormStateError> {
        self.set_input_value(change.name(), change.value())
    }

    /// Restore `name` to its initial value, leaving other fields alone.
    ///
    /// A widened field has no initial value and is removed.
    pub fn reset_input_value(&self, name: &str) {
        match self.initial.get(name) {
            Some(initial) => {
                let initial = initial.clone();
                self.values.update(|values| {
                    values.insert(name.to_string(), initial);
                });
            }
            None => {
                let known = self.values.with(|values| values.contains_key(name));
                if !known {
                    log::warn!("reset_input_value called with unknown field '{}'", name);
                }
                debug_assert!(known, "reset_input_value called with unknown field '{name}'");
                if known {
                    self.values.update(|values| {
                        values.remove(name);
                    });
                }
            }
        }
    }

    /// Restore every field to its initial value.
    pub fn reset_form_values(&self) {
        self.values.set(self.initial.clone());
    }

    /// Replace the whole value map in one update.
    ///
    /// The reset target does not change. Under [`UnknownFieldPolicy::Reject`]
    /// the new map must have exactly the initial field names; otherwise the
    /// values are left untouched and the first offending name is returned.
    pub fn set_form_values(&self, values: FormValues) -> Result<(), FormStateError> {
        if self.policy == UnknownFieldPolicy::Reject {
            self.check_field_set(&values)?;
        }
        self.values.set(values);
        Ok(())
    }

    fn check_field_set(&self, values: &FormValues) -> Result<(), FormStateError> {
        let mut unknown: Vec<&String> = values
            .keys()
            .filter(|name| !self.initial.contains_key(*name))
            .collect();
        unknown.sort();
        if let Some(name) = unknown.first() {
            log::warn!("rejected form values with unknown field '{}'", name);
            return Err(FormStateError::UnknownField(name.to_string()));
        }

        let mut missing: Vec<&String> = self
            .initial
            .keys()
            .filter(|name| !values.contains_key(*name))
            .collect();
        missing.sort();
        if let Some(name) = missing.first() {
            log::warn!("rejected form values without field '{}'", name);
            return Err(FormStateError::MissingField(name.to_string()));
        }
        Ok(())
    }

    /// Observe every change to the value map.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, f: F) -> Subscription
    where
        F: Fn(&FormValues) + Send + Sync + 'static,
    {
        self.values.subscribe(f)
    }

    /// The underlying observable cell.
    pub fn state(&self) -> &State<FormValues> {
        &self.values
    }
}
