//! JSON document export for model resources.
//!
//! A [`Resource`] bundles a URI with the model roots it contains and writes
//! them as one versioned JSON document:
//!
//! ```json
//! {
//!   "json": { "version": "1.0", "encoding": "utf-8" },
//!   "ns": { "meta": "https://atelierworks.github.io/metamodels/meta" },
//!   "content": [
//!     { "kind": "meta:Package", "data": { "name": "...", "...": "..." } }
//!   ]
//! }
//! ```
//!
//! Every object in `content` (and every nested classifier or feature) is a
//! `kind`-tagged envelope, so readers can dispatch without knowing the
//! vocabulary up front. The `ns` table maps each kind prefix used in the
//! document to its namespace URI.

use std::io::Write;

use log::trace;
use serde_json::{Map, Value, json};
use thiserror::Error;

use atelier_core::domain::Domain;
use atelier_core::meta::{self, Classifier, Feature, PackageRef};
use atelier_core::view::View;
use atelier_core::viewpoint::{self, Group};
use atelier_core::{domain, view};

/// Version of the document envelope.
pub const FORMAT_VERSION: &str = "1.0";

/// Character encoding declared in the document envelope.
pub const ENCODING: &str = "utf-8";

/// Error raised while writing a resource.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A model root a resource can carry.
#[derive(Debug, Clone)]
pub enum ModelRoot {
    Package(PackageRef),
    Domain(Domain),
    View(View),
    Group(Group),
}

impl ModelRoot {
    fn ns_prefix(&self) -> &'static str {
        match self {
            Self::Package(_) => "meta",
            Self::Domain(_) => "domain",
            Self::View(_) => "view",
            Self::Group(_) => "viewpoint",
        }
    }

    fn ns_uri(&self) -> &'static str {
        match self {
            Self::Package(_) => meta::NS_URI,
            Self::Domain(_) => domain::NS_URI,
            Self::View(_) => view::NS_URI,
            Self::Group(_) => viewpoint::NS_URI,
        }
    }
}

/// A URI-addressed document holding model roots.
#[derive(Debug, Clone)]
pub struct Resource {
    uri: String,
    roots: Vec<ModelRoot>,
}

impl Resource {
    /// Creates an empty resource for the given URI.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            roots: Vec::new(),
        }
    }

    /// Returns the resource URI.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Appends a model root.
    pub fn push(&mut self, root: ModelRoot) {
        self.roots.push(root);
    }

    /// Returns the model roots, in insertion order.
    pub fn roots(&self) -> &[ModelRoot] {
        &self.roots
    }

    /// Writes the document to the given writer.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] when the writer fails or a root cannot be
    /// represented as JSON.
    pub fn write<W: Write>(&self, writer: W) -> Result<(), ExportError> {
        trace!(uri = self.uri.as_str(), roots = self.roots.len(); "Writing resource");
        let document = self.to_value()?;
        serde_json::to_writer_pretty(writer, &document)?;
        Ok(())
    }

    /// Returns the document as a pretty-printed string.
    pub fn to_string_pretty(&self) -> Result<String, ExportError> {
        let mut buffer = Vec::new();
        self.write(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    fn to_value(&self) -> Result<Value, ExportError> {
        let contents = self
            .roots
            .iter()
            .map(root_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(json!({
            "json": { "version": FORMAT_VERSION, "encoding": ENCODING },
            "ns": self.namespaces(),
            "content": contents,
        }))
    }

    fn namespaces(&self) -> Map<String, Value> {
        let mut namespaces = Map::new();
        for root in &self.roots {
            namespaces
                .entry(root.ns_prefix().to_owned())
                .or_insert_with(|| Value::String(root.ns_uri().to_owned()));
        }
        namespaces
    }
}

fn root_value(root: &ModelRoot) -> Result<Value, ExportError> {
    let value = match root {
        ModelRoot::Package(package) => tagged("meta:Package", package_value(package)),
        ModelRoot::Domain(domain) => tagged("domain:Domain", serde_json::to_value(domain)?),
        ModelRoot::View(view) => tagged("view:View", serde_json::to_value(view)?),
        ModelRoot::Group(group) => tagged("viewpoint:Group", serde_json::to_value(group)?),
    };
    Ok(value)
}

fn tagged(kind: &str, data: Value) -> Value {
    json!({ "kind": kind, "data": data })
}

fn package_value(package: &PackageRef) -> Value {
    let classifiers: Vec<Value> = package
        .classifiers()
        .iter()
        .map(classifier_value)
        .collect();
    json!({
        "name": package.name(),
        "nsUri": package.ns_uri(),
        "classifiers": classifiers,
    })
}

fn classifier_value(classifier: &Classifier) -> Value {
    match classifier {
        Classifier::Class(class) => {
            let features: Vec<Value> = class.features().iter().map(feature_value).collect();
            tagged(
                "meta:Class",
                json!({ "name": class.name(), "features": features }),
            )
        }
        Classifier::DataType(data_type) => {
            tagged("meta:DataType", json!({ "name": data_type.name() }))
        }
    }
}

fn feature_value(feature: &Feature) -> Value {
    match feature {
        Feature::Attribute(attribute) => tagged(
            "meta:Attribute",
            json!({
                "name": attribute.name(),
                "dataType": attribute.data_type().map(|data_type| data_type.name()),
            }),
        ),
        Feature::Reference(reference) => tagged(
            "meta:Reference",
            json!({
                "name": reference.name(),
                "target": reference.target().map(|class| class.name()),
                "many": reference.many(),
                "containment": reference.containment(),
            }),
        ),
    }
}
