//! Metamodel package registration.
//!
//! Registers the vocabularies studio documents are written in, each paired
//! with the adapter reflective editors use to label its elements.

use std::sync::Arc;

use atelier_core::element::Element;
use atelier_core::{domain, meta, view, viewpoint};

use crate::description::DescriptionError;
use crate::object::ItemAdapter;
use crate::registry::{MetamodelConfigurer, MetamodelEntry, MetamodelRegistry};

/// Registers the meta, viewpoint, domain, and view packages.
#[derive(Debug, Default)]
pub struct MetamodelsConfigurer;

impl MetamodelConfigurer for MetamodelsConfigurer {
    fn add_metamodels(&self, registry: &mut MetamodelRegistry) -> Result<(), DescriptionError> {
        registry.add(MetamodelEntry {
            package: meta::package(),
            adapter: Arc::new(MetaItemAdapter),
        })?;
        registry.add(MetamodelEntry {
            package: viewpoint::package(),
            adapter: Arc::new(ViewpointItemAdapter),
        })?;
        registry.add(MetamodelEntry {
            package: domain::package(),
            adapter: Arc::new(DomainItemAdapter),
        })?;
        registry.add(MetamodelEntry {
            package: view::package(),
            adapter: Arc::new(ViewItemAdapter),
        })?;
        Ok(())
    }
}

/// Labels elements of the reflective metamodel vocabulary.
#[derive(Debug, Default)]
pub struct MetaItemAdapter;

impl ItemAdapter for MetaItemAdapter {
    fn label(&self, element: &Element) -> Option<String> {
        match element {
            Element::Package(_)
            | Element::Class(_)
            | Element::Attribute(_)
            | Element::Reference(_)
            | Element::DataType(_) => element.name(),
            _ => None,
        }
    }
}

/// Labels elements of the domain vocabulary.
#[derive(Debug, Default)]
pub struct DomainItemAdapter;

impl ItemAdapter for DomainItemAdapter {
    fn label(&self, element: &Element) -> Option<String> {
        match element {
            Element::Domain(domain) => Some(domain.name()),
            _ => None,
        }
    }
}

/// Labels elements of the view vocabulary.
#[derive(Debug, Default)]
pub struct ViewItemAdapter;

impl ItemAdapter for ViewItemAdapter {
    fn label(&self, element: &Element) -> Option<String> {
        match element {
            Element::View(_) => Some("View".to_owned()),
            _ => None,
        }
    }
}

/// Labels elements of the diagram-definition vocabulary.
#[derive(Debug, Default)]
pub struct ViewpointItemAdapter;

impl ItemAdapter for ViewpointItemAdapter {
    fn label(&self, element: &Element) -> Option<String> {
        match element {
            Element::Group(group) => Some(group.name()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::meta::ClassRef;

    #[test]
    fn test_all_vocabularies_are_registered() {
        let mut registry = MetamodelRegistry::new();
        MetamodelsConfigurer.add_metamodels(&mut registry).unwrap();

        assert_eq!(registry.len(), 4);
        assert!(registry.get(meta::NS_URI).is_some());
        assert!(registry.get(domain::NS_URI).is_some());
        assert!(registry.get(view::NS_URI).is_some());
        assert!(registry.get(viewpoint::NS_URI).is_some());
    }

    #[test]
    fn test_adapters_only_cover_their_vocabulary() {
        let class = Element::Class(ClassRef::new("Task"));
        assert_eq!(MetaItemAdapter.label(&class).as_deref(), Some("Task"));
        assert!(DomainItemAdapter.label(&class).is_none());
        assert!(ViewpointItemAdapter.label(&class).is_none());
    }
}
