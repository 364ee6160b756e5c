//! Integration tests for the domain overview diagram description.

use atelier::description::{NodeStyle, NodeType, SynchronizationPolicy};
use atelier::element::{Element, ElementKind};
use atelier::meta::{ClassRef, Classifier, DataTypeRef, PackageRef};
use atelier::status::EditStatus;
use atelier::studio::domain_diagram::domain_diagram_id;
use atelier::variables::{self, Variables};
use atelier::{Studio, config::StudioConfig};

fn sample_package() -> PackageRef {
    let package = PackageRef::new("tracker", "https://example.com/tracker");
    package.add_classifier(Classifier::Class(ClassRef::new("Project")));
    package.add_classifier(Classifier::Class(ClassRef::new("Task")));
    package.add_classifier(Classifier::DataType(DataTypeRef::new("Priority")));
    package
}

#[test]
fn test_creation_predicate_requires_package_kind() {
    let registries = Studio::default().initialize().unwrap();
    let diagram = registries.representations.get(domain_diagram_id()).unwrap();

    let package_context = Variables::new().with(variables::CLASS, ElementKind::Package);
    let class_context = Variables::new().with(variables::CLASS, ElementKind::Class);

    assert!((diagram.can_create)(&package_context));
    assert!(!(diagram.can_create)(&class_context));
    assert!(!(diagram.can_create)(&Variables::new()));
}

#[test]
fn test_diagram_label_names_the_package() {
    let registries = Studio::default().initialize().unwrap();
    let diagram = registries.representations.get(domain_diagram_id()).unwrap();

    let context =
        Variables::new().with(variables::SELF, Element::Package(sample_package()));
    assert_eq!((diagram.label_provider)(&context), "tracker");
    assert_eq!((diagram.label_provider)(&Variables::new()), "Anonymous Domain");
}

#[test]
fn test_node_fans_out_over_all_classifiers() {
    let registries = Studio::default().initialize().unwrap();
    let diagram = registries.representations.get(domain_diagram_id()).unwrap();
    let node = &diagram.node_descriptions[0];

    assert_eq!(node.synchronization_policy, SynchronizationPolicy::Synchronized);

    let context =
        Variables::new().with(variables::SELF, Element::Package(sample_package()));
    let elements = (node.semantic_elements)(&context);
    assert_eq!(elements.len(), 3);
    assert_eq!(elements[0].kind(), ElementKind::Class);
    assert_eq!(elements[2].kind(), ElementKind::DataType);

    assert!((node.semantic_elements)(&Variables::new()).is_empty());
}

#[test]
fn test_node_style_uses_configured_colors() {
    let config: StudioConfig =
        serde_json::from_str(r##"{"diagram": {"node_color": "#123456"}}"##).unwrap();
    let registries = Studio::new(config).initialize().unwrap();
    let diagram = registries.representations.get(domain_diagram_id()).unwrap();
    let node = &diagram.node_descriptions[0];

    assert_eq!((node.node_type)(&Variables::new()), NodeType::Rectangle);
    let NodeStyle::Rectangular(style) = (node.style)(&Variables::new());
    assert_eq!(style.color, "#123456");
    assert_eq!(style.border_size, 0);
}

#[test]
fn test_default_style_matches_stock_palette() {
    let registries = Studio::default().initialize().unwrap();
    let diagram = registries.representations.get(domain_diagram_id()).unwrap();
    let node = &diagram.node_descriptions[0];

    let NodeStyle::Rectangular(style) = (node.style)(&Variables::new());
    assert_eq!(style.color, "#4e90d2");

    let label_style = &node.label.style;
    assert_eq!((label_style.color)(&Variables::new()), "#051e37");
    assert_eq!((label_style.font_size)(&Variables::new()), 16);
    assert!(!(label_style.bold)(&Variables::new()));
}

#[test]
fn test_label_identity_and_text() {
    let registries = Studio::default().initialize().unwrap();
    let diagram = registries.representations.get(domain_diagram_id()).unwrap();
    let node = &diagram.node_descriptions[0];

    let context = Variables::new()
        .with(variables::SELF, Element::Class(ClassRef::new("Task")))
        .with(variables::OWNER_ID, "node-7");

    assert_eq!((node.label.id_provider)(&context), "node-7_label");
    assert_eq!((node.label.text_provider)(&context), "Task");
    assert_eq!((node.label.text_provider)(&Variables::new()), "");
}

#[test]
fn test_target_object_providers_answer_through_object_service() {
    let registries = Studio::default().initialize().unwrap();
    let diagram = registries.representations.get(domain_diagram_id()).unwrap();
    let node = &diagram.node_descriptions[0];

    let class = Element::Class(ClassRef::new("Task"));
    let context = Variables::new().with(variables::SELF, class);

    assert_eq!((node.target_object_id)(&context).as_deref(), Some("Task"));
    assert_eq!(
        (node.target_object_kind)(&context).as_deref(),
        Some("meta::Class")
    );
    assert_eq!((node.target_object_label)(&context).as_deref(), Some("Task"));
    assert!((node.target_object_id)(&Variables::new()).is_none());
}

#[test]
fn test_edit_handlers_accept_everything() {
    let registries = Studio::default().initialize().unwrap();
    let diagram = registries.representations.get(domain_diagram_id()).unwrap();
    let node = &diagram.node_descriptions[0];

    assert_eq!(
        (node.label_edit_handler)(&Variables::new(), "renamed"),
        EditStatus::Ok
    );
    assert_eq!((node.delete_handler)(&Variables::new()), EditStatus::Ok);
}
