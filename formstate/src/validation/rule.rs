//! The rule evaluation protocol.

use std::sync::Arc;

/// A synchronous validation rule for a single field value.
///
/// A rule returns a non-empty message when the value violates it and `None`
/// when it is satisfied. Rules must not panic for any input. The value is
/// `None` when the field has no value at all.
///
/// Plain functions and closures of shape `Fn(Option<&str>) -> Option<String>`
/// are rules, so parameterised rules are closures over their parameter:
///
/// ```
/// use formstate::validation::Rule;
///
/// let no_spaces = |value: Option<&str>| {
///     value
///         .filter(|v| v.contains(' '))
///         .map(|_| "Spaces are not allowed.".to_string())
/// };
/// assert!(no_spaces.evaluate(Some("a b")).is_some());
/// assert!(no_spaces.evaluate(Some("ab")).is_none());
/// ```
pub trait Rule: Send + Sync {
    /// Check `value`, returning the violation message if any.
    fn evaluate(&self, value: Option<&str>) -> Option<String>;
}

impl<F> Rule for F
where
    F: Fn(Option<&str>) -> Option<String> + Send + Sync,
{
    fn evaluate(&self, value: Option<&str>) -> Option<String> {
        self(value)
    }
}

/// Shared handle to a rule, as stored in [`FieldValidations`](super::FieldValidations).
pub type RuleRef = Arc<dyn Rule>;

/// Run every rule against `value` and collect the messages in rule order.
///
/// There is no early exit: a value that breaks three rules yields three
/// messages.
pub fn evaluate(rules: &[RuleRef], value: Option<&str>) -> Vec<String> {
    rules
        .iter()
        .filter_map(|rule| rule.evaluate(value))
        .collect()
}
