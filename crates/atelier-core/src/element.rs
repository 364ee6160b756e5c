//! Tagged model-element variants.
//!
//! Every model object that can appear in an evaluation context is wrapped in
//! an [`Element`] variant. Providers and predicates dispatch on the tag with
//! a single `match` instead of downcasting, and [`ElementKind`] gives each
//! variant a stable qualified name usable as an applicability marker.

use crate::domain::DomainRef;
use crate::meta::{AttributeRef, ClassRef, DataTypeRef, PackageRef, ReferenceRef};
use crate::view::ViewRef;
use crate::viewpoint::GroupRef;

/// A model element bound into an evaluation context.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Package(PackageRef),
    Class(ClassRef),
    Attribute(AttributeRef),
    Reference(ReferenceRef),
    DataType(DataTypeRef),
    Domain(DomainRef),
    View(ViewRef),
    Group(GroupRef),
}

impl Element {
    /// Returns the kind tag of this element.
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Package(_) => ElementKind::Package,
            Self::Class(_) => ElementKind::Class,
            Self::Attribute(_) => ElementKind::Attribute,
            Self::Reference(_) => ElementKind::Reference,
            Self::DataType(_) => ElementKind::DataType,
            Self::Domain(_) => ElementKind::Domain,
            Self::View(_) => ElementKind::View,
            Self::Group(_) => ElementKind::Group,
        }
    }

    /// Returns the element name, for kinds that have one.
    pub fn name(&self) -> Option<String> {
        match self {
            Self::Package(package) => Some(package.name()),
            Self::Class(class) => Some(class.name()),
            Self::Attribute(attribute) => Some(attribute.name()),
            Self::Reference(reference) => Some(reference.name()),
            Self::DataType(data_type) => Some(data_type.name()),
            Self::Domain(domain) => Some(domain.name()),
            Self::View(_) => None,
            Self::Group(group) => Some(group.name()),
        }
    }

    /// Returns the package handle when this element is a package.
    pub fn as_package(&self) -> Option<&PackageRef> {
        match self {
            Self::Package(package) => Some(package),
            _ => None,
        }
    }

    /// Returns the class handle when this element is a class.
    pub fn as_class(&self) -> Option<&ClassRef> {
        match self {
            Self::Class(class) => Some(class),
            _ => None,
        }
    }

    /// Returns the attribute handle when this element is an attribute.
    pub fn as_attribute(&self) -> Option<&AttributeRef> {
        match self {
            Self::Attribute(attribute) => Some(attribute),
            _ => None,
        }
    }

    /// Returns the reference handle when this element is a reference.
    pub fn as_reference(&self) -> Option<&ReferenceRef> {
        match self {
            Self::Reference(reference) => Some(reference),
            _ => None,
        }
    }

    /// Returns the data type handle when this element is a data type.
    pub fn as_data_type(&self) -> Option<&DataTypeRef> {
        match self {
            Self::DataType(data_type) => Some(data_type),
            _ => None,
        }
    }

    /// Returns the domain handle when this element is a domain.
    pub fn as_domain(&self) -> Option<&DomainRef> {
        match self {
            Self::Domain(domain) => Some(domain),
            _ => None,
        }
    }

    /// Returns the view handle when this element is a view.
    pub fn as_view(&self) -> Option<&ViewRef> {
        match self {
            Self::View(view) => Some(view),
            _ => None,
        }
    }

    /// Returns the group handle when this element is a group.
    pub fn as_group(&self) -> Option<&GroupRef> {
        match self {
            Self::Group(group) => Some(group),
            _ => None,
        }
    }
}

/// Stable kind tags for [`Element`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Package,
    Class,
    Attribute,
    Reference,
    DataType,
    Domain,
    View,
    Group,
}

impl ElementKind {
    /// Returns the qualified, vocabulary-prefixed name of this kind.
    pub fn qualified(&self) -> &'static str {
        match self {
            Self::Package => "meta::Package",
            Self::Class => "meta::Class",
            Self::Attribute => "meta::Attribute",
            Self::Reference => "meta::Reference",
            Self::DataType => "meta::DataType",
            Self::Domain => "domain::Domain",
            Self::View => "view::View",
            Self::Group => "viewpoint::Group",
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.qualified())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        let element = Element::Class(ClassRef::new("Task"));
        assert_eq!(element.kind(), ElementKind::Class);
        assert_eq!(element.kind().qualified(), "meta::Class");
    }

    #[test]
    fn test_accessors_reject_other_kinds() {
        let element = Element::Class(ClassRef::new("Task"));
        assert!(element.as_class().is_some());
        assert!(element.as_package().is_none());
        assert_eq!(element.name().as_deref(), Some("Task"));
    }
}
