//! The domain authoring meta-metamodel.
//!
//! A [`Domain`] is the root of a user-authored modeling language definition:
//! it names the language, carries its URI, and owns the entities the
//! language is made of. This slice only constructs and serializes domains;
//! interpreting them into live metamodels is the hosting workbench's job.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;

use crate::meta::{ClassRef, Classifier, PackageRef};

/// Namespace URI of the domain vocabulary.
pub const NS_URI: &str = "https://atelierworks.github.io/metamodels/domain";

/// Root of a domain definition document.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub name: String,
    pub uri: String,
    pub entities: Vec<Entity>,
}

impl Domain {
    /// Creates an empty domain with the given name and URI.
    pub fn new(name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uri: uri.into(),
            entities: Vec::new(),
        }
    }
}

/// A named concept of the domain.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub relations: Vec<Relation>,
}

/// A primitive-valued slot of an entity.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub name: String,
    pub kind: DataKind,
}

/// Primitive kinds available to domain attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataKind {
    Text,
    Boolean,
    Number,
}

/// A link between two entities.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    pub name: String,
    pub target: String,
    pub containment: bool,
}

/// Shared handle to a domain, for use in evaluation contexts.
#[derive(Debug, Clone)]
pub struct DomainRef(Arc<RwLock<Domain>>);

impl DomainRef {
    /// Wraps a domain in a shared handle.
    pub fn new(domain: Domain) -> Self {
        Self(Arc::new(RwLock::new(domain)))
    }

    /// Returns the domain name.
    pub fn name(&self) -> String {
        self.0.read().name.clone()
    }

    /// Returns the domain URI.
    pub fn uri(&self) -> String {
        self.0.read().uri.clone()
    }

    /// Returns a point-in-time copy of the domain.
    pub fn snapshot(&self) -> Domain {
        self.0.read().clone()
    }
}

impl PartialEq for DomainRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for DomainRef {}

/// Returns the package describing the domain vocabulary.
pub fn package() -> PackageRef {
    let package = PackageRef::new("domain", NS_URI);
    for name in ["Domain", "Entity", "Attribute", "Relation"] {
        package.add_classifier(Classifier::Class(ClassRef::new(name)));
    }
    package
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_ref_reads_through_handle() {
        let domain = DomainRef::new(Domain::new("Sample Domain", "domain://sample"));
        assert_eq!(domain.name(), "Sample Domain");
        assert_eq!(domain.uri(), "domain://sample");
        assert!(domain.snapshot().entities.is_empty());
    }

    #[test]
    fn test_package_lists_domain_concepts() {
        let package = package();
        assert_eq!(package.name(), "domain");
        assert!(package.classifier("Entity").is_some());
    }
}
