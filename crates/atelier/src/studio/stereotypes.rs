//! Stereotype registration.
//!
//! Two configurers contribute document templates: [`StarterStereotypes`]
//! registers the empty domain and view documents new studios begin from,
//! and [`SampleStereotypes`] registers fully worked examples (a project
//! tracking domain and a diagram definition over it). Every content
//! producer builds a fixed in-memory graph and serializes it through
//! [`StereotypeBuilder`], so the produced bytes are identical on every
//! invocation.

use std::sync::Arc;

use atelier_core::domain::Domain;
use atelier_core::identifier::StereotypeId;
use atelier_core::meta::{AttributeRef, ClassRef, Classifier, PackageRef, ReferenceRef, builtins};
use atelier_core::view::View;
use atelier_core::viewpoint::{
    ColorsPalette, ContainerMapping, DiagramDefinition, FixedColor, FlatContainerStyle, Group,
    Layer, Viewpoint,
};

use crate::description::{DescriptionError, StereotypeBuilder, StereotypeDescription};
use crate::export::{ModelRoot, Resource};
use crate::registry::{StereotypeConfigurer, StereotypeRegistry};

/// Label of the empty-domain starter template.
pub const EMPTY_DOMAIN_LABEL: &str = "Empty Domain Definition";

/// Label of the empty-view starter template.
pub const EMPTY_VIEW_LABEL: &str = "Empty View Definition";

/// Label of the sample domain template.
pub const SAMPLE_DOMAIN_LABEL: &str = "Sample Domain Definition";

/// Label of the sample diagram-definition template.
pub const DIAGRAM_DESCRIPTION_LABEL: &str = "Sample Diagram Description";

const TIMER_LABEL: &str = "studio_stereotype_load";

/// Identifier of the empty-domain starter template.
pub fn empty_domain_id() -> StereotypeId {
    StereotypeId::new("empty_domain")
}

/// Identifier of the empty-view starter template.
pub fn empty_view_id() -> StereotypeId {
    StereotypeId::new("empty_view")
}

/// Identifier of the sample domain template.
pub fn sample_domain_id() -> StereotypeId {
    StereotypeId::new("sample_domain")
}

/// Identifier of the sample diagram-definition template.
pub fn diagram_description_id() -> StereotypeId {
    StereotypeId::new("diagram_description")
}

/// Registers the empty documents studio authoring starts from.
#[derive(Debug)]
pub struct StarterStereotypes {
    builder: StereotypeBuilder,
}

impl StarterStereotypes {
    /// Creates the configurer.
    pub fn new() -> Self {
        Self {
            builder: StereotypeBuilder::new(TIMER_LABEL),
        }
    }
}

impl Default for StarterStereotypes {
    fn default() -> Self {
        Self::new()
    }
}

impl StereotypeConfigurer for StarterStereotypes {
    fn add_stereotypes(&self, registry: &mut StereotypeRegistry) -> Result<(), DescriptionError> {
        let builder = self.builder;
        registry.add(StereotypeDescription {
            id: empty_domain_id(),
            label: EMPTY_DOMAIN_LABEL.to_owned(),
            contents: Arc::new(move || empty_domain_contents(&builder)),
        })?;

        let builder = self.builder;
        registry.add(StereotypeDescription {
            id: empty_view_id(),
            label: EMPTY_VIEW_LABEL.to_owned(),
            contents: Arc::new(move || empty_view_contents(&builder)),
        })?;
        Ok(())
    }
}

fn empty_domain_contents(builder: &StereotypeBuilder) -> String {
    let domain = Domain::new("Sample Domain", "domain://sample");
    let mut resource = Resource::new(domain.uri.clone());
    resource.push(ModelRoot::Domain(domain));
    builder.body(&resource)
}

fn empty_view_contents(builder: &StereotypeBuilder) -> String {
    let mut resource = Resource::new("view://empty");
    resource.push(ModelRoot::View(View::default()));
    builder.body(&resource)
}

/// Registers the worked sample documents.
#[derive(Debug)]
pub struct SampleStereotypes {
    builder: StereotypeBuilder,
}

impl SampleStereotypes {
    /// Creates the configurer.
    pub fn new() -> Self {
        Self {
            builder: StereotypeBuilder::new(TIMER_LABEL),
        }
    }
}

impl Default for SampleStereotypes {
    fn default() -> Self {
        Self::new()
    }
}

impl StereotypeConfigurer for SampleStereotypes {
    fn add_stereotypes(&self, registry: &mut StereotypeRegistry) -> Result<(), DescriptionError> {
        let builder = self.builder;
        registry.add(StereotypeDescription {
            id: sample_domain_id(),
            label: SAMPLE_DOMAIN_LABEL.to_owned(),
            contents: Arc::new(move || sample_domain_contents(&builder)),
        })?;

        let builder = self.builder;
        registry.add(StereotypeDescription {
            id: diagram_description_id(),
            label: DIAGRAM_DESCRIPTION_LABEL.to_owned(),
            contents: Arc::new(move || diagram_description_contents(&builder)),
        })?;
        Ok(())
    }
}

/// A project tracking domain: projects own tasks and participants,
/// participants point at the task they work on.
fn sample_domain_contents(builder: &StereotypeBuilder) -> String {
    let task = ClassRef::new("Task");
    let task_name = AttributeRef::new("name");
    task_name.set_data_type(builtins::string());
    task.add_attribute(task_name);
    let task_completed = AttributeRef::new("completed");
    task_completed.set_data_type(builtins::boolean());
    task.add_attribute(task_completed);

    let participant = ClassRef::new("Participant");
    let participant_name = AttributeRef::new("name");
    participant_name.set_data_type(builtins::string());
    participant.add_attribute(participant_name);
    let working_on = ReferenceRef::new("workingOn");
    working_on.set_target(task.clone());
    participant.add_reference(working_on);

    let project = ClassRef::new("Project");
    let tasks = ReferenceRef::new("tasks");
    tasks.set_target(task.clone());
    tasks.set_many(true);
    tasks.set_containment(true);
    project.add_reference(tasks);
    let participants = ReferenceRef::new("participants");
    participants.set_target(participant.clone());
    participants.set_many(true);
    participants.set_containment(true);
    project.add_reference(participants);

    let package = PackageRef::new(
        "projectDomain",
        "https://atelierworks.github.io/samples/domain/project",
    );
    package.add_classifier(Classifier::Class(project));
    package.add_classifier(Classifier::Class(task));
    package.add_classifier(Classifier::Class(participant));

    let mut resource = Resource::new(package.ns_uri());
    resource.push(ModelRoot::Package(package));
    builder.body(&resource)
}

/// A diagram definition over the project domain, with one styled container
/// mapping per mapped class.
fn diagram_description_contents(builder: &StereotypeBuilder) -> String {
    let reddish = FixedColor::new("reddish", 200, 100, 100);
    let greenish = FixedColor::new("greenish", 100, 200, 150);
    let black = FixedColor::new("black", 0, 0, 0);
    let light_gray = FixedColor::new("light gray", 209, 209, 209);

    let task_mapping = ContainerMapping {
        name: "Task Mapping".to_owned(),
        domain_class: "project::Task".to_owned(),
        semantic_candidates: "aql:self.tasks".to_owned(),
        style: FlatContainerStyle {
            label_expression: "aql:self.name".to_owned(),
            border_color: black.clone(),
            label_color: black.clone(),
            foreground_color: light_gray.clone(),
            background_color: reddish.clone(),
        },
    };

    let participant_mapping = ContainerMapping {
        name: "Participant Mapping".to_owned(),
        domain_class: "project::Participant".to_owned(),
        semantic_candidates: "aql:self.participants".to_owned(),
        style: FlatContainerStyle {
            label_expression: "aql:self.name".to_owned(),
            border_color: black.clone(),
            label_color: black.clone(),
            foreground_color: light_gray.clone(),
            background_color: greenish.clone(),
        },
    };

    let diagram = DiagramDefinition {
        name: "Diagram Definition".to_owned(),
        domain_class: "domain::Project".to_owned(),
        default_layer: Layer {
            name: "Default".to_owned(),
            container_mappings: vec![task_mapping, participant_mapping],
        },
    };

    let uri = diagram.name.clone();
    let group = Group {
        name: String::new(),
        palettes: vec![ColorsPalette {
            entries: vec![reddish, greenish, black, light_gray],
        }],
        viewpoints: vec![Viewpoint {
            name: "Sample Studio".to_owned(),
            representations: vec![diagram],
        }],
    };

    let mut resource = Resource::new(uri);
    resource.push(ModelRoot::Group(group));
    builder.body(&resource)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_configurers_register_distinct_ids() {
        let mut registry = StereotypeRegistry::new();
        StarterStereotypes::new().add_stereotypes(&mut registry).unwrap();
        SampleStereotypes::new().add_stereotypes(&mut registry).unwrap();

        assert_eq!(registry.len(), 4);
        assert!(registry.get(&empty_domain_id()).is_some());
        assert!(registry.get(&diagram_description_id()).is_some());
    }

    #[test]
    fn test_empty_view_content_is_a_view_document() {
        let body = empty_view_contents(&StereotypeBuilder::new("test"));
        let document: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(document["content"][0]["kind"], "view:View");
    }
}
