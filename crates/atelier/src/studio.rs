//! The studio registration slice.
//!
//! Everything a studio contributes is registered here, once, synchronously,
//! at startup: metamodel packages, stereotype document templates, property
//! forms, and the domain diagram. [`Studio::initialize`] is the single
//! entry point; it assembles fresh registries, runs every configurer, and
//! hands the populated registries to the caller. Descriptions are immutable
//! from then on.

use std::fmt;
use std::sync::Arc;

use log::info;

use crate::config::StudioConfig;
use crate::error::StudioError;
use crate::object::{ObjectService, StandardObjectService};
use crate::registry::{
    MetamodelConfigurer, PropertiesConfigurer, Registries, RepresentationConfigurer,
    StereotypeConfigurer,
};

pub mod diagram_properties;
pub mod domain_diagram;
pub mod domain_properties;
pub mod metamodels;
pub mod stereotypes;

/// Front door of the studio registration slice.
///
/// # Examples
///
/// ```
/// use atelier::{Studio, config::StudioConfig};
///
/// let registries = Studio::new(StudioConfig::default()).initialize()?;
/// assert_eq!(registries.metamodels.len(), 4);
/// # Ok::<(), atelier::StudioError>(())
/// ```
pub struct Studio {
    config: StudioConfig,
    object_service: Arc<dyn ObjectService>,
}

impl Studio {
    /// Creates a studio using the [`StandardObjectService`].
    pub fn new(config: StudioConfig) -> Self {
        Self::with_object_service(config, Arc::new(StandardObjectService))
    }

    /// Creates a studio with a caller-provided object service.
    pub fn with_object_service(
        config: StudioConfig,
        object_service: Arc<dyn ObjectService>,
    ) -> Self {
        Self {
            config,
            object_service,
        }
    }

    /// Runs every configurer once and returns the populated registries.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError`] when a configurer produces an invalid
    /// description.
    pub fn initialize(&self) -> Result<Registries, StudioError> {
        info!("Initializing studio registries");
        let mut registries = Registries::default();

        metamodels::MetamodelsConfigurer.add_metamodels(&mut registries.metamodels)?;

        stereotypes::StarterStereotypes::new().add_stereotypes(&mut registries.stereotypes)?;
        stereotypes::SampleStereotypes::new().add_stereotypes(&mut registries.stereotypes)?;

        domain_properties::DomainPropertiesConfigurer
            .add_properties(&mut registries.properties)?;
        diagram_properties::DiagramPropertiesConfigurer
            .add_properties(&mut registries.properties)?;

        domain_diagram::DomainDiagramConfigurer::new(
            self.object_service.clone(),
            self.config.diagram().clone(),
        )
        .add_representations(&mut registries.representations)?;

        info!(
            metamodels = registries.metamodels.len(),
            stereotypes = registries.stereotypes.len(),
            forms = registries.properties.len(),
            representations = registries.representations.len();
            "Studio registries initialized"
        );
        Ok(registries)
    }
}

impl Default for Studio {
    fn default() -> Self {
        Self::new(StudioConfig::default())
    }
}

impl fmt::Debug for Studio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Studio")
            .field("config", &self.config)
            .finish()
    }
}
