//! Property forms for domain definition elements.
//!
//! One form per editable kind: packages, classes, attributes, and
//! references. Forms share the same single-page, single-group layout; each
//! textfield reads one property of the context target and writes it back
//! through the shared model handle.

use std::sync::Arc;

use atelier_core::element::{Element, ElementKind};
use atelier_core::identifier::DescriptionId;
use atelier_core::meta::builtins;
use atelier_core::status::EditStatus;
use atelier_core::variables::{self, Variables};

use crate::description::{
    ContextPredicate, ControlDescription, DescriptionError, FormDescription, GroupDescription,
    PageDescription, Provider, TextfieldDescription, constant, has_element_of, kind_equals,
    representation_id, self_elements,
};
use crate::registry::{PropertiesConfigurer, PropertiesRegistry};

const UNNAMED: &str = "<unnamed>";
const UNTYPED: &str = "<untyped>";

/// Identifier of the package properties form.
pub fn domain_form_id() -> DescriptionId {
    DescriptionId::from_name("domain")
}

/// Identifier of the class properties form.
pub fn entity_form_id() -> DescriptionId {
    DescriptionId::from_name("entity")
}

/// Identifier of the attribute properties form.
pub fn attribute_form_id() -> DescriptionId {
    DescriptionId::from_name("attribute")
}

/// Identifier of the reference properties form.
pub fn reference_form_id() -> DescriptionId {
    DescriptionId::from_name("reference")
}

/// Registers the four domain definition property forms.
#[derive(Debug, Default)]
pub struct DomainPropertiesConfigurer;

impl PropertiesConfigurer for DomainPropertiesConfigurer {
    fn add_properties(&self, registry: &mut PropertiesRegistry) -> Result<(), DescriptionError> {
        registry.add(domain_form())?;
        registry.add(entity_form())?;
        registry.add(attribute_form())?;
        registry.add(reference_form())?;
        Ok(())
    }
}

fn domain_form() -> FormDescription {
    let controls = vec![ControlDescription::Textfield(text_field(
        "package.name",
        "Name",
        |element| {
            element
                .as_package()
                .map(|package| package.name())
                .unwrap_or_default()
        },
        |element, name| {
            if let Some(package) = element.as_package() {
                package.set_name(name);
            }
        },
    ))];

    FormDescription {
        id: domain_form_id(),
        label: "Domain".to_owned(),
        label_provider: Arc::new(|context| {
            Some(
                context
                    .element(variables::SELF)
                    .and_then(Element::as_package)
                    .map(|package| package.name())
                    .unwrap_or_else(|| UNNAMED.to_owned()),
            )
        }),
        can_create: kind_equals(variables::CLASS, ElementKind::Package),
        id_provider: Arc::new(representation_id),
        target_object_id: Arc::new(|context| {
            context
                .element(variables::SELF)
                .and_then(Element::as_package)
                .map(|package| package.ns_uri())
        }),
        pages: vec![simple_page(
            general_group(controls.clone()),
            has_element_of(variables::SELF, ElementKind::Package),
        )],
        groups: vec![general_group(controls)],
    }
}

fn entity_form() -> FormDescription {
    let controls = vec![ControlDescription::Textfield(text_field(
        "entity.name",
        "Name",
        |element| {
            element
                .as_class()
                .map(|class| class.name())
                .unwrap_or_default()
        },
        |element, name| {
            if let Some(class) = element.as_class() {
                class.set_name(name);
            }
        },
    ))];

    FormDescription {
        id: entity_form_id(),
        label: "Entity".to_owned(),
        label_provider: Arc::new(|context| {
            context
                .element(variables::SELF)
                .and_then(Element::as_class)
                .map(|class| class.name())
        }),
        can_create: kind_equals(variables::CLASS, ElementKind::Class),
        id_provider: Arc::new(representation_id),
        target_object_id: Arc::new(|context| {
            context
                .element(variables::SELF)
                .and_then(Element::as_class)
                .map(|class| class.name())
        }),
        pages: vec![simple_page(
            general_group(controls.clone()),
            has_element_of(variables::SELF, ElementKind::Class),
        )],
        groups: vec![general_group(controls)],
    }
}

fn attribute_form() -> FormDescription {
    let controls = vec![
        ControlDescription::Textfield(text_field(
            "attribute.name",
            "Name",
            |element| {
                element
                    .as_attribute()
                    .map(|attribute| attribute.name())
                    .unwrap_or_default()
            },
            |element, name| {
                if let Some(attribute) = element.as_attribute() {
                    attribute.set_name(name);
                }
            },
        )),
        ControlDescription::Textfield(text_field(
            "attribute.type",
            "Type",
            |element| {
                element
                    .as_attribute()
                    .and_then(|attribute| attribute.data_type())
                    .map(|data_type| data_type.name())
                    .unwrap_or_else(|| UNTYPED.to_owned())
            },
            // Unknown type names leave the attribute untouched.
            |element, type_name| {
                if let Some(attribute) = element.as_attribute() {
                    if let Some(data_type) = builtins::builtin(type_name) {
                        attribute.set_data_type(data_type);
                    }
                }
            },
        )),
    ];

    FormDescription {
        id: attribute_form_id(),
        label: "Attribute".to_owned(),
        label_provider: Arc::new(|context| {
            context
                .element(variables::SELF)
                .and_then(Element::as_attribute)
                .map(|attribute| attribute.name())
        }),
        can_create: kind_equals(variables::CLASS, ElementKind::Attribute),
        id_provider: Arc::new(representation_id),
        target_object_id: Arc::new(|context| {
            context
                .element(variables::SELF)
                .and_then(Element::as_attribute)
                .map(|attribute| attribute.name())
        }),
        pages: vec![simple_page(
            general_group(controls.clone()),
            has_element_of(variables::SELF, ElementKind::Attribute),
        )],
        groups: vec![general_group(controls)],
    }
}

fn reference_form() -> FormDescription {
    let controls = vec![
        ControlDescription::Textfield(text_field(
            "reference.name",
            "Name",
            |element| {
                element
                    .as_reference()
                    .map(|reference| reference.name())
                    .unwrap_or_default()
            },
            |element, name| {
                if let Some(reference) = element.as_reference() {
                    reference.set_name(name);
                }
            },
        )),
        ControlDescription::Textfield(text_field(
            "reference.type",
            "Type",
            |element| {
                element
                    .as_reference()
                    .and_then(|reference| reference.target())
                    .map(|class| class.name())
                    .unwrap_or_else(|| UNTYPED.to_owned())
            },
            // The new target is resolved among the classifiers of the
            // package owning the reference; unknown names are a no-op.
            |element, type_name| {
                if let Some(reference) = element.as_reference() {
                    let target = reference
                        .containing_class()
                        .and_then(|class| class.package())
                        .and_then(|package| package.classifier(type_name))
                        .and_then(|classifier| classifier.as_class().cloned());
                    if let Some(target) = target {
                        reference.set_target(target);
                    }
                }
            },
        )),
    ];

    FormDescription {
        id: reference_form_id(),
        label: "Reference".to_owned(),
        label_provider: Arc::new(|context| {
            context
                .element(variables::SELF)
                .and_then(Element::as_reference)
                .map(|reference| reference.name())
        }),
        can_create: kind_equals(variables::CLASS, ElementKind::Reference),
        id_provider: Arc::new(representation_id),
        target_object_id: Arc::new(|context| {
            context
                .element(variables::SELF)
                .and_then(Element::as_reference)
                .map(|reference| reference.name())
        }),
        pages: vec![simple_page(
            general_group(controls.clone()),
            has_element_of(variables::SELF, ElementKind::Reference),
        )],
        groups: vec![general_group(controls)],
    }
}

pub(super) fn simple_page(
    group: GroupDescription,
    can_display: ContextPredicate,
) -> PageDescription {
    PageDescription {
        id: "page".to_owned(),
        id_provider: constant("page".to_owned()),
        label_provider: constant("Properties".to_owned()),
        semantic_elements: self_elements(),
        can_display,
        groups: vec![group],
    }
}

pub(super) fn general_group(controls: Vec<ControlDescription>) -> GroupDescription {
    GroupDescription {
        id: "group".to_owned(),
        id_provider: constant("group".to_owned()),
        label_provider: constant("General".to_owned()),
        semantic_elements: self_elements(),
        controls,
    }
}

/// Builds a textfield around a reader and a writer over the context target.
///
/// The new-value handler reports [`EditStatus::Error`] when the context has
/// no target element; this is the only error branch a form control has.
fn text_field(
    id: &str,
    title: &str,
    read: impl Fn(&Element) -> String + Send + Sync + 'static,
    write: impl Fn(&Element, &str) + Send + Sync + 'static,
) -> TextfieldDescription {
    let value_provider: Provider<String> = Arc::new(move |context: &Variables| {
        context
            .element(variables::SELF)
            .map(|element| read(element))
            .unwrap_or_default()
    });

    TextfieldDescription {
        id: id.to_owned(),
        id_provider: constant(id.to_owned()),
        label_provider: constant(title.to_owned()),
        value_provider,
        new_value_handler: Arc::new(move |context: &Variables, new_value: &str| {
            match context.element(variables::SELF) {
                Some(element) => {
                    write(element, new_value);
                    EditStatus::Ok
                }
                None => EditStatus::Error,
            }
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_four_forms_register() {
        let mut registry = PropertiesRegistry::new();
        DomainPropertiesConfigurer.add_properties(&mut registry).unwrap();

        assert_eq!(registry.len(), 4);
        assert!(registry.get(domain_form_id()).is_some());
        assert!(registry.get(entity_form_id()).is_some());
        assert!(registry.get(attribute_form_id()).is_some());
        assert!(registry.get(reference_form_id()).is_some());
    }
}
