//! Atelier - studio descriptions and registries for modeling workbenches.
//!
//! Atelier describes a studio authoring experience declaratively: metamodel
//! vocabularies, property-form descriptions, diagram descriptions, and
//! stereotype document templates, all published into append-only registries
//! during a single synchronous initialization pass. The hosting workbench
//! owns everything after that: it evaluates the registered providers and
//! predicates against per-request [`variables::Variables`] contexts to
//! decide what applies to a selected element and how to render or edit it.
//!
//! # Examples
//!
//! ```
//! use atelier::{Studio, config::StudioConfig};
//!
//! let studio = Studio::new(StudioConfig::default());
//! let registries = studio.initialize()?;
//!
//! assert!(!registries.stereotypes.is_empty());
//! assert!(!registries.properties.is_empty());
//! # Ok::<(), atelier::StudioError>(())
//! ```

pub mod config;
pub mod description;
pub mod export;
pub mod object;
pub mod registry;
pub mod studio;

mod error;

pub use atelier_core::{domain, element, identifier, meta, status, variables, view, viewpoint};

pub use error::StudioError;
pub use studio::Studio;
