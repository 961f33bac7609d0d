//! Field validation for form state.
//!
//! Rules are evaluated per field in declaration order. Every rule runs, so a
//! field can carry several messages at once. Results are stored in an
//! [`ErrorStore`], which keeps one entry per configured field.
//!
//! # Example
//!
//! ```
//! use formstate::validation::{rules, ErrorStore, FieldValidations};
//!
//! let validations = FieldValidations::builder()
//!     .field("email")
//!         .rule(rules::required)
//!         .rule(rules::email)
//!     .field("password")
//!         .rule(rules::required)
//!         .rule(rules::min_length(6))
//!     .build();
//!
//! let errors = ErrorStore::new(validations);
//! assert!(!errors.validate_input_value("email", "a@b"));
//! assert_eq!(errors.first_error("email").as_deref(), Some("Please enter a valid email address."));
//! ```

mod fields;
mod rule;
pub mod rules;
mod store;

pub use fields::{FieldBuilder, FieldValidations, FieldsBuilder};
pub use rule::{Rule, RuleRef, evaluate};
pub use store::ErrorStore;
