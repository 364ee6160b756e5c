//! Integration tests for the domain property forms.
//!
//! These tests exercise the registered descriptions the way the hosting
//! workbench would: assemble a context, evaluate predicates and providers,
//! and drive the textfield handlers against live model elements.

use atelier::Studio;
use atelier::description::{ControlDescription, FormDescription};
use atelier::element::{Element, ElementKind};
use atelier::meta::{
    AttributeRef, ClassRef, Classifier, PackageRef, ReferenceRef, builtins,
};
use atelier::registry::Registries;
use atelier::status::EditStatus;
use atelier::studio::domain_properties::{
    attribute_form_id, domain_form_id, entity_form_id, reference_form_id,
};
use atelier::variables::{self, Variables};

fn registries() -> Registries {
    Studio::default().initialize().unwrap()
}

fn form(registries: &Registries, id: atelier::identifier::DescriptionId) -> FormDescription {
    registries
        .properties
        .get(id)
        .expect("form should be registered")
        .as_ref()
        .clone()
}

fn textfield(form: &FormDescription, index: usize) -> &atelier::description::TextfieldDescription {
    let ControlDescription::Textfield(textfield) = &form.pages[0].groups[0].controls[index];
    textfield
}

fn context_with(element: Element) -> Variables {
    Variables::new().with(variables::SELF, element)
}

#[test]
fn test_creation_predicates_match_declared_kinds() {
    let registries = registries();

    let cases = [
        (domain_form_id(), ElementKind::Package),
        (entity_form_id(), ElementKind::Class),
        (attribute_form_id(), ElementKind::Attribute),
        (reference_form_id(), ElementKind::Reference),
    ];

    for (form_id, kind) in cases {
        let form = form(&registries, form_id);
        let matching = Variables::new().with(variables::CLASS, kind);
        assert!(
            (form.can_create)(&matching),
            "{} should accept {kind:?}",
            form.label
        );

        for other in [
            ElementKind::Package,
            ElementKind::Class,
            ElementKind::Attribute,
            ElementKind::Reference,
        ] {
            if other == kind {
                continue;
            }
            let context = Variables::new().with(variables::CLASS, other);
            assert!(
                !(form.can_create)(&context),
                "{} should reject {other:?}",
                form.label
            );
        }

        assert!(!(form.can_create)(&Variables::new()));
    }
}

#[test]
fn test_page_predicate_requires_matching_target() {
    let registries = registries();
    let entity = form(&registries, entity_form_id());

    let class_context = context_with(Element::Class(ClassRef::new("Task")));
    let package_context = context_with(Element::Package(PackageRef::new(
        "tracker",
        "https://example.com/tracker",
    )));

    assert!((entity.pages[0].can_display)(&class_context));
    assert!(!(entity.pages[0].can_display)(&package_context));
    assert!(!(entity.pages[0].can_display)(&Variables::new()));
}

#[test]
fn test_textfield_edit_without_target_is_an_error() {
    let registries = registries();
    let entity = form(&registries, entity_form_id());
    let name_field = textfield(&entity, 0);

    let status = (name_field.new_value_handler)(&Variables::new(), "Task");
    assert_eq!(status, EditStatus::Error);
}

#[test]
fn test_textfield_edit_renames_target() {
    let registries = registries();
    let entity = form(&registries, entity_form_id());
    let name_field = textfield(&entity, 0);

    let class = ClassRef::new("Task");
    let context = context_with(Element::Class(class.clone()));

    assert_eq!((name_field.value_provider)(&context), "Task");
    let status = (name_field.new_value_handler)(&context, "Milestone");
    assert_eq!(status, EditStatus::Ok);
    assert_eq!(class.name(), "Milestone");
    assert_eq!((name_field.value_provider)(&context), "Milestone");
}

#[test]
fn test_package_rename_through_domain_form() {
    let registries = registries();
    let domain = form(&registries, domain_form_id());
    let name_field = textfield(&domain, 0);

    let package = PackageRef::new("tracker", "https://example.com/tracker");
    let context = context_with(Element::Package(package.clone()));

    assert_eq!((name_field.new_value_handler)(&context, "issues"), EditStatus::Ok);
    assert_eq!(package.name(), "issues");
    assert_eq!(
        (domain.target_object_id)(&context).as_deref(),
        Some("https://example.com/tracker")
    );
}

#[test]
fn test_attribute_type_edit_resolves_builtins() {
    let registries = registries();
    let attribute_form = form(&registries, attribute_form_id());
    let type_field = textfield(&attribute_form, 1);

    let attribute = AttributeRef::new("completed");
    attribute.set_data_type(builtins::string());
    let context = context_with(Element::Attribute(attribute.clone()));

    assert_eq!((type_field.value_provider)(&context), "String");

    assert_eq!((type_field.new_value_handler)(&context, "Boolean"), EditStatus::Ok);
    assert_eq!(attribute.data_type().unwrap(), builtins::boolean());

    // Unknown type names leave the model untouched but still succeed.
    assert_eq!((type_field.new_value_handler)(&context, "Bogus"), EditStatus::Ok);
    assert_eq!(attribute.data_type().unwrap(), builtins::boolean());
}

#[test]
fn test_untyped_attribute_shows_placeholder() {
    let registries = registries();
    let attribute_form = form(&registries, attribute_form_id());
    let type_field = textfield(&attribute_form, 1);

    let context = context_with(Element::Attribute(AttributeRef::new("completed")));
    assert_eq!((type_field.value_provider)(&context), "<untyped>");
}

#[test]
fn test_reference_type_edit_resolves_within_owning_package() {
    let registries = registries();
    let reference_form = form(&registries, reference_form_id());
    let type_field = textfield(&reference_form, 1);

    let task = ClassRef::new("Task");
    let participant = ClassRef::new("Participant");
    let project = ClassRef::new("Project");
    let assignees = ReferenceRef::new("assignees");
    assignees.set_target(task.clone());
    project.add_reference(assignees.clone());

    let package = PackageRef::new("tracker", "https://example.com/tracker");
    package.add_classifier(Classifier::Class(project));
    package.add_classifier(Classifier::Class(task));
    package.add_classifier(Classifier::Class(participant.clone()));

    let context = context_with(Element::Reference(assignees.clone()));

    assert_eq!((type_field.new_value_handler)(&context, "Participant"), EditStatus::Ok);
    assert_eq!(assignees.target().unwrap(), participant);

    // Names outside the owning package are a no-op.
    assert_eq!((type_field.new_value_handler)(&context, "Unknown"), EditStatus::Ok);
    assert_eq!(assignees.target().unwrap(), participant);
}

#[test]
fn test_domain_label_falls_back_to_placeholder() {
    let registries = registries();
    let domain = form(&registries, domain_form_id());

    assert_eq!(
        (domain.label_provider)(&Variables::new()).as_deref(),
        Some("<unnamed>")
    );

    let package = PackageRef::new("tracker", "https://example.com/tracker");
    let context = context_with(Element::Package(package));
    assert_eq!((domain.label_provider)(&context).as_deref(), Some("tracker"));
}
