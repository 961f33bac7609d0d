//! Error types

/// Errors raised by form-state operations that reject caller input.
///
/// Validation failures are never reported through this type. They are
/// stored as field messages and surfaced as `false` from the validate calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormStateError {
    /// The field name is not part of the form's declared fields.
    #[error("Unknown field: {0}")]
    UnknownField(String),
    /// A whole-form update left out one of the declared fields.
    #[error("Missing field: {0}")]
    MissingField(String),
}
