//! The per-evaluation context map.
//!
//! Every provider and predicate of a registered description is a pure
//! function of a [`Variables`] context assembled by the hosting workbench
//! for a single evaluation: a read-mostly mapping from semantic role names
//! (see the key constants) to tagged [`Value`]s. Contexts are transient;
//! nothing in them outlives the evaluation call.
//!
//! Typed accessors return `None` on missing keys or kind mismatches, never
//! panic: a description must stay evaluable against any context the
//! workbench hands it.

use std::collections::HashMap;

use crate::element::{Element, ElementKind};

/// Key of the element currently being rendered or edited.
pub const SELF: &str = "self";

/// Key of the kind marker a creation predicate tests against.
pub const CLASS: &str = "class";

/// Key of the identifier of the element owning the current label.
pub const OWNER_ID: &str = "ownerId";

/// Key of the identifier of an already-materialized representation.
pub const REPRESENTATION_ID: &str = "representationId";

/// A value bound into an evaluation context.
#[derive(Debug, Clone)]
pub enum Value {
    Element(Element),
    Kind(ElementKind),
    Text(String),
    Integer(i64),
    Boolean(bool),
    List(Vec<Value>),
}

impl From<Element> for Value {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<ElementKind> for Value {
    fn from(kind: ElementKind) -> Self {
        Self::Kind(kind)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// A string-keyed evaluation context.
#[derive(Debug, Clone, Default)]
pub struct Variables {
    entries: HashMap<String, Value>,
}

impl Variables {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a value, replacing any previous binding of the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Binds a value and returns the context, for one-expression setup.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Returns the raw value bound to `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Returns true when `name` is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the element bound to `name`, if the binding is an element.
    pub fn element(&self, name: &str) -> Option<&Element> {
        match self.entries.get(name) {
            Some(Value::Element(element)) => Some(element),
            _ => None,
        }
    }

    /// Returns the kind marker bound to `name`, if the binding is a kind.
    pub fn kind(&self, name: &str) -> Option<ElementKind> {
        match self.entries.get(name) {
            Some(Value::Kind(kind)) => Some(*kind),
            _ => None,
        }
    }

    /// Returns the text bound to `name`, if the binding is text.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.entries.get(name) {
            Some(Value::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Returns the integer bound to `name`, if the binding is an integer.
    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.entries.get(name) {
            Some(Value::Integer(value)) => Some(*value),
            _ => None,
        }
    }

    /// Returns the boolean bound to `name`, if the binding is a boolean.
    pub fn boolean(&self, name: &str) -> Option<bool> {
        match self.entries.get(name) {
            Some(Value::Boolean(value)) => Some(*value),
            _ => None,
        }
    }

    /// Returns the list bound to `name`, if the binding is a list.
    pub fn list(&self, name: &str) -> Option<&[Value]> {
        match self.entries.get(name) {
            Some(Value::List(values)) => Some(values),
            _ => None,
        }
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no name is bound.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::PackageRef;

    #[test]
    fn test_missing_key_is_none_everywhere() {
        let variables = Variables::new();
        assert!(variables.get(SELF).is_none());
        assert!(variables.element(SELF).is_none());
        assert!(variables.kind(CLASS).is_none());
        assert!(variables.text(OWNER_ID).is_none());
    }

    #[test]
    fn test_typed_accessors_reject_other_kinds() {
        let variables = Variables::new().with(SELF, "not an element");
        assert!(variables.element(SELF).is_none());
        assert_eq!(variables.text(SELF), Some("not an element"));
    }

    #[test]
    fn test_element_round_trip() {
        let package = PackageRef::new("tracker", "https://example.com/tracker");
        let variables = Variables::new().with(SELF, Element::Package(package.clone()));

        let bound = variables.element(SELF).unwrap();
        assert_eq!(bound.as_package(), Some(&package));
    }

    #[test]
    fn test_insert_replaces_binding() {
        let mut variables = Variables::new();
        variables.insert(CLASS, ElementKind::Package);
        variables.insert(CLASS, ElementKind::Class);
        assert_eq!(variables.kind(CLASS), Some(ElementKind::Class));
        assert_eq!(variables.len(), 1);
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn key_strategy() -> impl Strategy<Value = String> {
        "[a-zA-Z][a-zA-Z0-9_]{0,12}"
    }

    proptest! {
        #[test]
        fn text_bindings_read_back(key in key_strategy(), text in ".{0,40}") {
            let variables = Variables::new().with(key.clone(), text.clone());
            prop_assert_eq!(variables.text(&key), Some(text.as_str()));
        }

        #[test]
        fn integer_bindings_read_back(key in key_strategy(), value in any::<i64>()) {
            let variables = Variables::new().with(key.clone(), value);
            prop_assert_eq!(variables.integer(&key), Some(value));
        }

        #[test]
        fn last_binding_wins(key in key_strategy(), first in any::<i64>(), second in any::<i64>()) {
            let variables = Variables::new().with(key.clone(), first).with(key.clone(), second);
            prop_assert_eq!(variables.integer(&key), Some(second));
            prop_assert_eq!(variables.len(), 1);
        }

        #[test]
        fn unbound_keys_stay_none(key in key_strategy(), other in key_strategy()) {
            prop_assume!(key != other);
            let variables = Variables::new().with(key, true);
            prop_assert!(variables.get(&other).is_none());
        }
    }
}
