//! Diagram descriptions.
//!
//! A diagram description declares how one kind of model element is rendered
//! as a diagram: the node types derived from its semantic children, the
//! styles they are painted with, and the handlers invoked when labels are
//! edited or nodes deleted. As with forms, everything dynamic is a pure
//! function of the evaluation context.

use std::fmt;

use atelier_core::identifier::DescriptionId;

use super::{
    ContextPredicate, DeleteHandler, DescriptionError, ElementsProvider, NewValueHandler,
    OptionProvider, Provider,
};

/// Suffix appended to a node identifier to form its label identifier.
pub const LABEL_SUFFIX: &str = "_label";

/// Declarative description of a diagram.
#[derive(Clone)]
pub struct DiagramDescription {
    /// Deterministic identifier of this description.
    pub id: DescriptionId,
    /// Static label shown in description pickers.
    pub label: String,
    /// Title of a concrete diagram, derived from the context.
    pub label_provider: Provider<String>,
    /// Applicability test deciding whether this diagram can be created for
    /// a context.
    pub can_create: ContextPredicate,
    /// Identifier of the semantic element the diagram is about.
    pub target_object_id: OptionProvider<String>,
    pub node_descriptions: Vec<NodeDescription>,
    pub edge_descriptions: Vec<EdgeDescription>,
    pub tool_sections: Vec<ToolSection>,
}

impl DiagramDescription {
    /// Checks the structural invariants of this description.
    pub fn validate(&self) -> Result<(), DescriptionError> {
        if self.label.is_empty() {
            return Err(DescriptionError::EmptyField {
                context: self.id.to_string(),
                field: "label",
            });
        }
        for node in &self.node_descriptions {
            node.validate()?;
        }
        Ok(())
    }
}

impl fmt::Debug for DiagramDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagramDescription")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("nodes", &self.node_descriptions.len())
            .field("edges", &self.edge_descriptions.len())
            .finish()
    }
}

/// Declarative description of one node type of a diagram.
#[derive(Clone)]
pub struct NodeDescription {
    pub id: DescriptionId,
    /// Elements of the context target this node type fans out over.
    pub semantic_elements: ElementsProvider,
    pub target_object_id: OptionProvider<String>,
    pub target_object_kind: OptionProvider<String>,
    pub target_object_label: OptionProvider<String>,
    pub synchronization_policy: SynchronizationPolicy,
    pub node_type: Provider<NodeType>,
    pub style: Provider<NodeStyle>,
    pub label: LabelDescription,
    /// Invoked when the node label is edited in place.
    pub label_edit_handler: NewValueHandler,
    /// Invoked when the node is deleted.
    pub delete_handler: DeleteHandler,
    pub border_nodes: Vec<NodeDescription>,
    pub child_nodes: Vec<NodeDescription>,
}

impl NodeDescription {
    /// Checks the structural invariants of this node and its children.
    pub fn validate(&self) -> Result<(), DescriptionError> {
        self.label.validate()?;
        for node in self.border_nodes.iter().chain(&self.child_nodes) {
            node.validate()?;
        }
        Ok(())
    }
}

impl fmt::Debug for NodeDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeDescription")
            .field("id", &self.id)
            .field("label", &self.label.id)
            .finish()
    }
}

/// Declarative description of a node label.
#[derive(Clone)]
pub struct LabelDescription {
    pub id: String,
    /// Identifier of a concrete label, conventionally the owner node id
    /// plus [`LABEL_SUFFIX`].
    pub id_provider: Provider<String>,
    pub text_provider: Provider<String>,
    pub style: LabelStyleDescription,
}

impl LabelDescription {
    /// Checks the structural invariants of this label.
    pub fn validate(&self) -> Result<(), DescriptionError> {
        if self.id.is_empty() {
            return Err(DescriptionError::EmptyField {
                context: "label".to_owned(),
                field: "id",
            });
        }
        Ok(())
    }
}

impl fmt::Debug for LabelDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabelDescription")
            .field("id", &self.id)
            .finish()
    }
}

/// Per-evaluation styling of a label.
#[derive(Clone)]
pub struct LabelStyleDescription {
    pub color: Provider<String>,
    pub font_size: Provider<u32>,
    pub bold: Provider<bool>,
    pub italic: Provider<bool>,
    pub underline: Provider<bool>,
    pub strike_through: Provider<bool>,
    pub icon_url: Provider<String>,
}

/// Tagged node-style variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeStyle {
    Rectangular(RectangularNodeStyle),
}

/// Style of a rectangular node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RectangularNodeStyle {
    /// Fill color, as a CSS hex string.
    pub color: String,
    /// Border color, as a CSS hex string; empty for no border.
    pub border_color: String,
    /// Border width in pixels.
    pub border_size: u32,
    pub border_style: LineStyle,
}

/// Line patterns for node borders.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    #[default]
    Solid,
    Dash,
    Dot,
    DashDot,
}

/// Geometric families a node can be rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Rectangle,
    Image,
}

/// Whether nodes appear for every semantic candidate or only on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynchronizationPolicy {
    Synchronized,
    Unsynchronized,
}

/// Declarative description of one edge type of a diagram.
#[derive(Clone)]
pub struct EdgeDescription {
    pub id: DescriptionId,
    pub semantic_elements: ElementsProvider,
    /// Node descriptions edges of this type may start from.
    pub source_nodes: Vec<DescriptionId>,
    /// Node descriptions edges of this type may end at.
    pub target_nodes: Vec<DescriptionId>,
}

impl fmt::Debug for EdgeDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeDescription")
            .field("id", &self.id)
            .finish()
    }
}

/// A named group of creation tools offered on the diagram palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSection {
    pub id: String,
    pub label: String,
}
