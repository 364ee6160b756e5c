//! Declarative description value-objects.
//!
//! A description is a plain struct literal assembled once at startup and
//! immutable after registration. Dynamic behavior lives in `Arc`'d provider
//! and predicate functions over the per-evaluation
//! [`Variables`](atelier_core::variables::Variables) context; the only
//! side-effecting members are the edit and delete handlers, which report a
//! two-valued [`EditStatus`](atelier_core::status::EditStatus).
//!
//! # Overview
//!
//! - [`form`]: Property-form descriptions (pages, groups, textfields)
//! - [`diagram`]: Diagram descriptions (nodes, labels, styles)
//! - [`stereotype`]: Stereotype document templates
//!
//! Each description exposes `validate()`, checked once when the description
//! enters a registry; see [`DescriptionError`] for the possible rejections.

use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use atelier_core::element::{Element, ElementKind};
use atelier_core::variables::{self, Variables};

pub mod diagram;
pub mod form;
pub mod stereotype;

pub use diagram::{
    DiagramDescription, EdgeDescription, LabelDescription, LabelStyleDescription, LineStyle,
    NodeDescription, NodeStyle, NodeType, RectangularNodeStyle, SynchronizationPolicy,
    ToolSection,
};
pub use form::{
    ControlDescription, FormDescription, GroupDescription, PageDescription, TextfieldDescription,
};
pub use stereotype::{StereotypeBuilder, StereotypeDescription};

/// A pure function of the evaluation context.
pub type Provider<T> = Arc<dyn Fn(&Variables) -> T + Send + Sync>;

/// A provider that may have no answer for a given context.
pub type OptionProvider<T> = Arc<dyn Fn(&Variables) -> Option<T> + Send + Sync>;

/// An applicability test over the evaluation context.
pub type ContextPredicate = Arc<dyn Fn(&Variables) -> bool + Send + Sync>;

/// Provides the semantic elements a description fans out over.
pub type ElementsProvider = Provider<Vec<Element>>;

/// Applies a new textual value to the context's target element.
pub type NewValueHandler =
    Arc<dyn Fn(&Variables, &str) -> atelier_core::status::EditStatus + Send + Sync>;

/// Deletes the context's target element.
pub type DeleteHandler = Arc<dyn Fn(&Variables) -> atelier_core::status::EditStatus + Send + Sync>;

/// Validation failure raised when a description is registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptionError {
    #[error("description `{context}` has an empty {field}")]
    EmptyField {
        context: String,
        field: &'static str,
    },

    #[error("form `{form}` declares no pages")]
    NoPages { form: String },

    #[error("duplicate control id `{id}` in group `{group}`")]
    DuplicateControlId { group: String, id: String },
}

/// Returns a provider that ignores its context.
pub fn constant<T>(value: T) -> Provider<T>
where
    T: Clone + Send + Sync + 'static,
{
    Arc::new(move |_| value.clone())
}

/// Predicate: the kind marker bound to `name` equals `kind`.
pub fn kind_equals(name: &'static str, kind: ElementKind) -> ContextPredicate {
    Arc::new(move |context| context.kind(name) == Some(kind))
}

/// Predicate: `name` is bound to an element of the given kind.
pub fn has_element_of(name: &'static str, kind: ElementKind) -> ContextPredicate {
    Arc::new(move |context| {
        context
            .element(name)
            .is_some_and(|element| element.kind() == kind)
    })
}

/// Provides the context's own target element as a one-element list.
pub fn self_elements() -> ElementsProvider {
    Arc::new(|context| {
        context
            .element(variables::SELF)
            .cloned()
            .into_iter()
            .collect()
    })
}

/// Instance-id provider: reuses the representation id already bound in the
/// context, or mints a fresh random one.
pub fn representation_id(context: &Variables) -> String {
    context
        .text(variables::REPRESENTATION_ID)
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::meta::PackageRef;

    #[test]
    fn test_kind_equals_requires_exact_kind() {
        let predicate = kind_equals(variables::CLASS, ElementKind::Package);
        let matching = Variables::new().with(variables::CLASS, ElementKind::Package);
        let other = Variables::new().with(variables::CLASS, ElementKind::Class);

        assert!(predicate(&matching));
        assert!(!predicate(&other));
        assert!(!predicate(&Variables::new()));
    }

    #[test]
    fn test_has_element_of_checks_binding_kind() {
        let predicate = has_element_of(variables::SELF, ElementKind::Package);
        let package = Element::Package(PackageRef::new("p", "https://example.com/p"));

        assert!(predicate(&Variables::new().with(variables::SELF, package)));
        assert!(!predicate(&Variables::new().with(variables::SELF, "text")));
    }

    #[test]
    fn test_representation_id_prefers_bound_id() {
        let bound = Variables::new().with(variables::REPRESENTATION_ID, "existing");
        assert_eq!(representation_id(&bound), "existing");

        let minted = representation_id(&Variables::new());
        assert!(!minted.is_empty());
        assert_ne!(minted, "existing");
    }

    #[test]
    fn test_self_elements_is_empty_without_target() {
        let provider = self_elements();
        assert!(provider(&Variables::new()).is_empty());
    }
}
