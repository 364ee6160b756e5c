//! Property forms for diagram definition elements.

use std::sync::Arc;

use atelier_core::element::{Element, ElementKind};
use atelier_core::identifier::DescriptionId;
use atelier_core::variables;

use crate::description::{
    DescriptionError, FormDescription, has_element_of, kind_equals, representation_id,
};
use crate::registry::{PropertiesConfigurer, PropertiesRegistry};

use super::domain_properties::{general_group, simple_page};

const UNNAMED: &str = "<unnamed>";

/// Identifier of the group properties form.
pub fn group_form_id() -> DescriptionId {
    DescriptionId::from_name("group")
}

/// Registers the property forms for diagram definition documents.
#[derive(Debug, Default)]
pub struct DiagramPropertiesConfigurer;

impl PropertiesConfigurer for DiagramPropertiesConfigurer {
    fn add_properties(&self, registry: &mut PropertiesRegistry) -> Result<(), DescriptionError> {
        registry.add(group_form())?;
        // TODO: forms for Viewpoint, DiagramDefinition, and ContainerMapping.
        Ok(())
    }
}

fn group_form() -> FormDescription {
    FormDescription {
        id: group_form_id(),
        label: "Group".to_owned(),
        label_provider: Arc::new(|context| {
            Some(
                context
                    .element(variables::SELF)
                    .and_then(Element::as_group)
                    .map(|group| group.name())
                    .unwrap_or_else(|| UNNAMED.to_owned()),
            )
        }),
        can_create: kind_equals(variables::CLASS, ElementKind::Group),
        id_provider: Arc::new(representation_id),
        target_object_id: Arc::new(|context| {
            context
                .element(variables::SELF)
                .and_then(Element::as_group)
                .map(|group| group.name())
        }),
        pages: vec![simple_page(
            general_group(Vec::new()),
            has_element_of(variables::SELF, ElementKind::Group),
        )],
        groups: vec![general_group(Vec::new())],
    }
}
