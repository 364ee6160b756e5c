//! Integration tests for stereotype document content.
//!
//! Content producers must be deterministic, and the sample documents must
//! parse back into the shapes studio authors rely on.

use atelier::{Studio, registry::Registries};
use atelier::studio::stereotypes::{
    diagram_description_id, empty_domain_id, empty_view_id, sample_domain_id,
};

use serde_json::Value;

fn registries() -> Registries {
    Studio::default().initialize().expect("initialization should succeed")
}

fn content(registries: &Registries, id: &atelier::identifier::StereotypeId) -> String {
    let stereotype = registries
        .stereotypes
        .get(id)
        .unwrap_or_else(|| panic!("stereotype {id} not registered"));
    (stereotype.contents)()
}

#[test]
fn test_every_content_producer_is_deterministic() {
    let registries = registries();
    for id in [
        empty_domain_id(),
        empty_view_id(),
        sample_domain_id(),
        diagram_description_id(),
    ] {
        let first = content(&registries, &id);
        let second = content(&registries, &id);
        assert!(!first.is_empty(), "empty content for {id}");
        assert_eq!(first, second, "non-deterministic content for {id}");
    }
}

#[test]
fn test_sample_domain_document_shape() {
    let registries = registries();
    let document: Value = serde_json::from_str(&content(&registries, &sample_domain_id()))
        .expect("sample domain content should be valid JSON");

    let roots = document["content"].as_array().unwrap();
    assert_eq!(roots.len(), 1, "expected exactly one package root");
    assert_eq!(roots[0]["kind"], "meta:Package");

    let package = &roots[0]["data"];
    assert_eq!(package["name"], "projectDomain");

    let classifiers = package["classifiers"].as_array().unwrap();
    let mut names: Vec<&str> = classifiers
        .iter()
        .map(|classifier| classifier["data"]["name"].as_str().unwrap())
        .collect();
    names.sort_unstable();
    assert_eq!(names, ["Participant", "Project", "Task"]);

    let project = classifiers
        .iter()
        .find(|classifier| classifier["data"]["name"] == "Project")
        .unwrap();
    let features = project["data"]["features"].as_array().unwrap();
    let containments: Vec<&str> = features
        .iter()
        .filter(|feature| {
            feature["kind"] == "meta:Reference" && feature["data"]["containment"] == true
        })
        .map(|feature| feature["data"]["name"].as_str().unwrap())
        .collect();
    assert_eq!(containments, ["tasks", "participants"]);
}

#[test]
fn test_sample_domain_attribute_types() {
    let registries = registries();
    let document: Value =
        serde_json::from_str(&content(&registries, &sample_domain_id())).unwrap();

    let classifiers = document["content"][0]["data"]["classifiers"]
        .as_array()
        .unwrap();
    let task = classifiers
        .iter()
        .find(|classifier| classifier["data"]["name"] == "Task")
        .unwrap();
    let features = task["data"]["features"].as_array().unwrap();

    assert_eq!(features[0]["data"]["name"], "name");
    assert_eq!(features[0]["data"]["dataType"], "String");
    assert_eq!(features[1]["data"]["name"], "completed");
    assert_eq!(features[1]["data"]["dataType"], "Boolean");
}

#[test]
fn test_empty_domain_document_shape() {
    let registries = registries();
    let document: Value =
        serde_json::from_str(&content(&registries, &empty_domain_id())).unwrap();

    assert_eq!(document["json"]["version"], "1.0");
    assert_eq!(document["content"][0]["kind"], "domain:Domain");
    assert_eq!(document["content"][0]["data"]["name"], "Sample Domain");
    assert_eq!(document["content"][0]["data"]["uri"], "domain://sample");
    assert!(
        document["content"][0]["data"]["entities"]
            .as_array()
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_empty_view_document_shape() {
    let registries = registries();
    let document: Value = serde_json::from_str(&content(&registries, &empty_view_id())).unwrap();

    assert_eq!(document["content"][0]["kind"], "view:View");
    assert!(
        document["content"][0]["data"]["sketches"]
            .as_array()
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_diagram_description_document_shape() {
    let registries = registries();
    let document: Value =
        serde_json::from_str(&content(&registries, &diagram_description_id())).unwrap();

    let group = &document["content"][0];
    assert_eq!(group["kind"], "viewpoint:Group");

    let palette = group["data"]["palettes"][0]["entries"].as_array().unwrap();
    assert_eq!(palette.len(), 4);
    assert_eq!(palette[0]["name"], "reddish");
    assert_eq!(palette[0]["red"], 200);

    let viewpoint = &group["data"]["viewpoints"][0];
    assert_eq!(viewpoint["name"], "Sample Studio");

    let diagram = &viewpoint["representations"][0];
    assert_eq!(diagram["name"], "Diagram Definition");
    assert_eq!(diagram["domainClass"], "domain::Project");

    let mappings = diagram["defaultLayer"]["containerMappings"]
        .as_array()
        .unwrap();
    assert_eq!(mappings.len(), 2);
    assert_eq!(mappings[0]["name"], "Task Mapping");
    assert_eq!(mappings[0]["style"]["backgroundColor"]["name"], "reddish");
    assert_eq!(mappings[1]["style"]["backgroundColor"]["name"], "greenish");
}
