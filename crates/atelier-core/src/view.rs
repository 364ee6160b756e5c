//! The view authoring meta-metamodel.
//!
//! A [`View`] holds the representation definitions a studio author attaches
//! to a domain: each [`DiagramSketch`] names a diagram to derive for some
//! domain type. Like [`crate::domain`], this slice only constructs and
//! serializes views.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;

use crate::meta::{ClassRef, Classifier, PackageRef};

/// Namespace URI of the view vocabulary.
pub const NS_URI: &str = "https://atelierworks.github.io/metamodels/view";

/// Root of a view definition document.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct View {
    pub sketches: Vec<DiagramSketch>,
}

/// A diagram to derive for a domain type.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramSketch {
    pub name: String,
    pub domain_type: String,
}

/// Shared handle to a view, for use in evaluation contexts.
#[derive(Debug, Clone)]
pub struct ViewRef(Arc<RwLock<View>>);

impl ViewRef {
    /// Wraps a view in a shared handle.
    pub fn new(view: View) -> Self {
        Self(Arc::new(RwLock::new(view)))
    }

    /// Returns a point-in-time copy of the view.
    pub fn snapshot(&self) -> View {
        self.0.read().clone()
    }
}

impl PartialEq for ViewRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ViewRef {}

/// Returns the package describing the view vocabulary.
pub fn package() -> PackageRef {
    let package = PackageRef::new("view", NS_URI);
    for name in ["View", "DiagramSketch"] {
        package.add_classifier(Classifier::Class(ClassRef::new(name)));
    }
    package
}
