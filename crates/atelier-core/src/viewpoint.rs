//! The classic diagram-definition vocabulary.
//!
//! A [`Group`] document bundles reusable color palettes with viewpoints,
//! each viewpoint owning diagram definitions: for a given domain class, a
//! diagram definition declares the mapped containers and the flat styles
//! they are painted with. Expressions (`aql:` strings) are carried opaquely
//! and evaluated by the hosting workbench.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;

use crate::meta::{ClassRef, Classifier, PackageRef};

/// Namespace URI of the diagram-definition vocabulary.
pub const NS_URI: &str = "https://atelierworks.github.io/metamodels/viewpoint";

/// Root of a diagram-definition document.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub name: String,
    pub palettes: Vec<ColorsPalette>,
    pub viewpoints: Vec<Viewpoint>,
}

/// A named set of representations.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewpoint {
    pub name: String,
    pub representations: Vec<DiagramDefinition>,
}

/// A diagram declared over a domain class.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramDefinition {
    pub name: String,
    pub domain_class: String,
    pub default_layer: Layer,
}

/// A layer of container mappings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    pub name: String,
    pub container_mappings: Vec<ContainerMapping>,
}

/// Maps a domain class onto styled containers of the diagram.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerMapping {
    pub name: String,
    pub domain_class: String,
    /// Expression producing the semantic candidates of this mapping.
    pub semantic_candidates: String,
    pub style: FlatContainerStyle,
}

/// Flat, single-gradient container style.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatContainerStyle {
    /// Expression producing the container label.
    pub label_expression: String,
    pub border_color: FixedColor,
    pub label_color: FixedColor,
    pub foreground_color: FixedColor,
    pub background_color: FixedColor,
}

/// A named RGB color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedColor {
    pub name: String,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl FixedColor {
    /// Creates a named color from RGB components.
    pub fn new(name: impl Into<String>, red: u8, green: u8, blue: u8) -> Self {
        Self {
            name: name.into(),
            red,
            green,
            blue,
        }
    }
}

/// A reusable palette of fixed colors.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorsPalette {
    pub entries: Vec<FixedColor>,
}

/// Shared handle to a group, for use in evaluation contexts.
#[derive(Debug, Clone)]
pub struct GroupRef(Arc<RwLock<Group>>);

impl GroupRef {
    /// Wraps a group in a shared handle.
    pub fn new(group: Group) -> Self {
        Self(Arc::new(RwLock::new(group)))
    }

    /// Returns the group name.
    pub fn name(&self) -> String {
        self.0.read().name.clone()
    }

    /// Renames the group.
    pub fn set_name(&self, name: impl Into<String>) {
        self.0.write().name = name.into();
    }

    /// Returns a point-in-time copy of the group.
    pub fn snapshot(&self) -> Group {
        self.0.read().clone()
    }
}

impl PartialEq for GroupRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for GroupRef {}

/// Returns the package describing the diagram-definition vocabulary.
pub fn package() -> PackageRef {
    let package = PackageRef::new("viewpoint", NS_URI);
    for name in [
        "Group",
        "Viewpoint",
        "DiagramDefinition",
        "Layer",
        "ContainerMapping",
        "FlatContainerStyle",
        "FixedColor",
        "ColorsPalette",
    ] {
        package.add_classifier(Classifier::Class(ClassRef::new(name)));
    }
    package
}
