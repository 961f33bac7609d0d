//! Per-field rule configuration.

use std::collections::HashMap;
use std::sync::Arc;

use super::rule::{Rule, RuleRef, evaluate};

/// Ordered validation rules per field name.
///
/// Cloning is cheap: rules are shared behind `Arc`.
#[derive(Clone, Default)]
pub struct FieldValidations {
    fields: HashMap<String, Vec<RuleRef>>,
}

impl FieldValidations {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fluent builder.
    ///
    /// ```
    /// use formstate::validation::{rules, FieldValidations};
    ///
    /// let validations = FieldValidations::builder()
    ///     .field("name")
    ///         .rule(rules::required)
    ///     .build();
    /// assert!(validations.contains("name"));
    /// ```
    pub fn builder() -> FieldsBuilder {
        FieldsBuilder {
            validations: Self::new(),
        }
    }

    /// Replace the rules for `name`.
    pub fn insert(&mut self, name: impl Into<String>, rules: Vec<RuleRef>) {
        self.fields.insert(name.into(), rules);
    }

    /// Append a rule to the end of `name`'s sequence, creating the field if needed.
    pub fn push(&mut self, name: impl Into<String>, rule: impl Rule + 'static) {
        self.fields
            .entry(name.into())
            .or_default()
            .push(Arc::new(rule));
    }

    /// Rules configured for `name`. Empty when the field is not configured.
    pub fn rules(&self, name: &str) -> &[RuleRef] {
        self.fields.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `name` is a configured field.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Configured field names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of configured fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no fields are configured.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Evaluate `name`'s rules against `value`.
    pub fn evaluate(&self, name: &str, value: Option<&str>) -> Vec<String> {
        evaluate(self.rules(name), value)
    }
}

impl std::fmt::Debug for FieldValidations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (name, rules) in &self.fields {
            map.entry(name, &format_args!("{} rule(s)", rules.len()));
        }
        map.finish()
    }
}

/// Builder returned by [`FieldValidations::builder`].
pub struct FieldsBuilder {
    validations: FieldValidations,
}

impl FieldsBuilder {
    /// Start configuring a field.
    ///
    /// A field declared with no rules is still part of the form's error map.
    pub fn field(self, name: impl Into<String>) -> FieldBuilder {
        let name = name.into();
        let mut validations = self.validations;
        validations.fields.entry(name.clone()).or_default();
        FieldBuilder { validations, name }
    }

    /// Finish the configuration.
    pub fn build(self) -> FieldValidations {
        self.validations
    }
}

/// Builder for adding rules to a single field.
pub struct FieldBuilder {
    validations: FieldValidations,
    name: String,
}

impl FieldBuilder {
    /// Append a rule to this field.
    pub fn rule(mut self, rule: impl Rule + 'static) -> Self {
        self.validations.push(self.name.clone(), rule);
        self
    }

    /// Continue with the next field.
    pub fn field(self, name: impl Into<String>) -> FieldBuilder {
        FieldsBuilder {
            validations: self.validations,
        }
        .field(name)
    }

    /// Finish the configuration.
    pub fn build(self) -> FieldValidations {
        self.validations
    }
}

impl From<FieldBuilder> for FieldValidations {
    fn from(builder: FieldBuilder) -> Self {
        builder.build()
    }
}
