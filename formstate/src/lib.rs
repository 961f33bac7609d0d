//! Form value and validation state.
//!
//! A form is backed by two stores:
//!
//! - [`ValueStore`] tracks the current value of each named field and can
//!   reset fields to the values the form started with.
//! - [`ErrorStore`] tracks validation messages per field, runs the configured
//!   [`Rule`](validation::Rule)s on demand, and accepts errors injected from
//!   elsewhere.
//!
//! Both stores are synchronous and notify subscribers after every change, so
//! a UI layer can re-render from them, and headless callers can ignore
//! notifications entirely.
//!
//! ```
//! use formstate::prelude::*;
//!
//! let values = ValueStore::new(form_values([("name", ""), ("email", "")]));
//! let errors = ErrorStore::new(
//!     FieldValidations::builder()
//!         .field("name").rule(rules::required)
//!         .field("email").rule(rules::required).rule(rules::email)
//!         .build(),
//! );
//!
//! assert!(!errors.validate_form(&values.values()));
//! assert_eq!(errors.number_of_errors(), 2);
//!
//! values.update_input_value(&InputChange::new("name", "Ada")).unwrap();
//! values.set_input_value("email", "ada@example.com").unwrap();
//! assert!(errors.validate_form(&values.values()));
//! ```

use std::collections::HashMap;

pub mod error;
pub mod state;
pub mod validation;
pub mod values;

pub use error::FormStateError;
pub use state::{State, Subscription};
pub use validation::{ErrorStore, FieldValidations, Rule};
pub use values::{InputChange, UnknownFieldPolicy, ValueStore};

/// Name of a form field, unique within the form.
pub type FieldName = String;

/// Field values by name.
pub type FormValues = HashMap<FieldName, String>;

/// Validation messages by field name, in rule order.
pub type FormErrors = HashMap<FieldName, Vec<String>>;

/// Build a [`FormValues`] map from name/value pairs.
pub fn form_values<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> FormValues
where
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(name, value)| (name.into(), value.into()))
        .collect()
}

pub mod prelude {
    pub use crate::error::FormStateError;
    pub use crate::state::{State, Subscription};
    pub use crate::validation::{ErrorStore, FieldValidations, Rule, rules};
    pub use crate::values::{InputChange, UnknownFieldPolicy, ValueStore};
    pub use crate::{FieldName, FormErrors, FormValues, form_values};
}
