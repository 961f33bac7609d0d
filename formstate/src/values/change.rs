use serde::{Deserialize, Serialize};

/// An input-change notification, as emitted by a text input.
///
/// This is the boundary shape UI layers hand to
/// [`ValueStore::update_input_value`](super::ValueStore::update_input_value).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputChange {
    pub target: InputTarget,
}

/// The input element that changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputTarget {
    pub name: String,
    pub value: String,
}

impl InputChange {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            target: InputTarget {
                name: name.into(),
                value: value.into(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.target.name
    }

    pub fn value(&self) -> &str {
        &self.target.value
    }
}
