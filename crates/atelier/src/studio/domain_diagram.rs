//! The domain overview diagram.
//!
//! One diagram description over domain definition packages: every
//! classifier of the package becomes a synchronized rectangular node
//! labeled with its name. Identity, kind, and label of mapped elements are
//! answered by the injected [`ObjectService`]; colors and label sizing come
//! from [`DiagramStyleConfig`].

use std::fmt;
use std::sync::Arc;

use atelier_core::element::{Element, ElementKind};
use atelier_core::identifier::DescriptionId;
use atelier_core::meta::Classifier;
use atelier_core::status::EditStatus;
use atelier_core::variables::{self, Variables};

use crate::config::DiagramStyleConfig;
use crate::description::diagram::LABEL_SUFFIX;
use crate::description::{
    DescriptionError, DiagramDescription, ElementsProvider, LabelDescription,
    LabelStyleDescription, LineStyle, NodeDescription, NodeStyle, NodeType, OptionProvider,
    Provider, RectangularNodeStyle, SynchronizationPolicy, constant, kind_equals,
};
use crate::object::ObjectService;
use crate::registry::{RepresentationConfigurer, RepresentationRegistry};

/// Identifier of the domain overview diagram description.
pub fn domain_diagram_id() -> DescriptionId {
    DescriptionId::from_name("domain-diagram")
}

/// Identifier of the domain-type node description.
pub fn domain_type_node_id() -> DescriptionId {
    DescriptionId::from_name("domain-type")
}

/// Registers the domain overview diagram.
pub struct DomainDiagramConfigurer {
    object_service: Arc<dyn ObjectService>,
    style: DiagramStyleConfig,
}

impl DomainDiagramConfigurer {
    /// Creates the configurer with its collaborating object service and
    /// style settings.
    pub fn new(object_service: Arc<dyn ObjectService>, style: DiagramStyleConfig) -> Self {
        Self {
            object_service,
            style,
        }
    }

    fn domain_diagram(&self) -> DiagramDescription {
        DiagramDescription {
            id: domain_diagram_id(),
            label: "Domain Diagram".to_owned(),
            label_provider: Arc::new(|context| {
                context
                    .element(variables::SELF)
                    .and_then(Element::as_package)
                    .map(|package| package.name())
                    .unwrap_or_else(|| "Anonymous Domain".to_owned())
            }),
            can_create: kind_equals(variables::CLASS, ElementKind::Package),
            target_object_id: self.target_id_provider(),
            node_descriptions: vec![self.domain_type_node()],
            edge_descriptions: Vec::new(),
            tool_sections: Vec::new(),
        }
    }

    fn domain_type_node(&self) -> NodeDescription {
        let node_color = self.style.node_color().to_owned();
        let style: Provider<NodeStyle> = Arc::new(move |_| {
            NodeStyle::Rectangular(RectangularNodeStyle {
                color: node_color.clone(),
                border_color: String::new(),
                border_size: 0,
                border_style: LineStyle::Solid,
            })
        });

        let semantic_elements: ElementsProvider = Arc::new(|context| {
            context
                .element(variables::SELF)
                .and_then(Element::as_package)
                .map(|package| {
                    package
                        .classifiers()
                        .iter()
                        .map(|classifier| match classifier {
                            Classifier::Class(class) => Element::Class(class.clone()),
                            Classifier::DataType(data_type) => {
                                Element::DataType(data_type.clone())
                            }
                        })
                        .collect()
                })
                .unwrap_or_default()
        });

        NodeDescription {
            id: domain_type_node_id(),
            semantic_elements,
            target_object_id: self.target_id_provider(),
            target_object_kind: self.target_kind_provider(),
            target_object_label: self.target_label_provider(),
            synchronization_policy: SynchronizationPolicy::Synchronized,
            node_type: constant(NodeType::Rectangle),
            style,
            label: self.domain_type_label(),
            label_edit_handler: Arc::new(|_, _| EditStatus::Ok),
            delete_handler: Arc::new(|_| EditStatus::Ok),
            border_nodes: Vec::new(),
            child_nodes: Vec::new(),
        }
    }

    fn domain_type_label(&self) -> LabelDescription {
        let label_color = self.style.label_color().to_owned();
        let font_size = self.style.label_font_size();

        LabelDescription {
            id: "domain-type-label".to_owned(),
            id_provider: Arc::new(|context: &Variables| {
                let owner = context.text(variables::OWNER_ID).unwrap_or_default();
                format!("{owner}{LABEL_SUFFIX}")
            }),
            text_provider: Arc::new(|context| {
                context
                    .element(variables::SELF)
                    .and_then(Element::as_class)
                    .map(|class| class.name())
                    .unwrap_or_default()
            }),
            style: LabelStyleDescription {
                color: constant(label_color),
                font_size: constant(font_size),
                bold: constant(false),
                italic: constant(false),
                underline: constant(false),
                strike_through: constant(false),
                icon_url: constant(String::new()),
            },
        }
    }

    fn target_id_provider(&self) -> OptionProvider<String> {
        let service = self.object_service.clone();
        Arc::new(move |context| {
            context
                .element(variables::SELF)
                .and_then(|element| service.id(element))
        })
    }

    fn target_kind_provider(&self) -> OptionProvider<String> {
        let service = self.object_service.clone();
        Arc::new(move |context| {
            context
                .element(variables::SELF)
                .map(|element| service.kind(element))
        })
    }

    fn target_label_provider(&self) -> OptionProvider<String> {
        let service = self.object_service.clone();
        Arc::new(move |context| {
            context
                .element(variables::SELF)
                .and_then(|element| service.label(element))
        })
    }
}

impl RepresentationConfigurer for DomainDiagramConfigurer {
    fn add_representations(
        &self,
        registry: &mut RepresentationRegistry,
    ) -> Result<(), DescriptionError> {
        registry.add(self.domain_diagram())?;
        Ok(())
    }
}

impl fmt::Debug for DomainDiagramConfigurer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainDiagramConfigurer")
            .field("style", &self.style)
            .finish()
    }
}
