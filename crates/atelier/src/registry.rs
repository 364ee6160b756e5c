//! Append-only registries of studio descriptions.
//!
//! Registries are populated once, synchronously, during startup: every
//! configurer receives the registry it contributes to as an explicit
//! argument and calls `add` for each description it produces. Descriptions
//! are validated as they enter and are shared read-only afterwards.
//!
//! Registration is idempotent by identifier: the first description
//! registered under an id wins, and later additions with the same id are
//! ignored with a warning. Lookup results therefore never change once an
//! id is taken, regardless of configurer ordering or re-runs.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use log::warn;

use atelier_core::identifier::{DescriptionId, StereotypeId};
use atelier_core::meta::PackageRef;

use crate::description::{
    DescriptionError, DiagramDescription, FormDescription, StereotypeDescription,
};
use crate::object::ItemAdapter;

/// A metamodel package registered with its editor adapter.
#[derive(Clone)]
pub struct MetamodelEntry {
    pub package: PackageRef,
    pub adapter: Arc<dyn ItemAdapter>,
}

impl fmt::Debug for MetamodelEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetamodelEntry")
            .field("package", &self.package)
            .finish()
    }
}

/// Registry of metamodel packages, keyed by namespace URI.
#[derive(Default)]
pub struct MetamodelRegistry {
    entries: IndexMap<String, MetamodelEntry>,
}

impl MetamodelRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a metamodel package.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptionError`] when the package has no namespace URI.
    pub fn add(&mut self, entry: MetamodelEntry) -> Result<(), DescriptionError> {
        let ns_uri = entry.package.ns_uri();
        if ns_uri.is_empty() {
            return Err(DescriptionError::EmptyField {
                context: entry.package.name(),
                field: "ns_uri",
            });
        }
        if self.entries.contains_key(&ns_uri) {
            warn!(duplicate = ns_uri.as_str(); "Ignoring duplicate metamodel registration");
            return Ok(());
        }
        self.entries.insert(ns_uri, entry);
        Ok(())
    }

    /// Looks up a registered package by namespace URI.
    pub fn get(&self, ns_uri: &str) -> Option<&MetamodelEntry> {
        self.entries.get(ns_uri)
    }

    /// Iterates over registered entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetamodelEntry)> {
        self.entries.iter().map(|(uri, entry)| (uri.as_str(), entry))
    }

    /// Number of registered metamodels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for MetamodelRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetamodelRegistry")
            .field("entries", &self.entries.len())
            .finish()
    }
}

/// Registry of stereotype document templates.
#[derive(Debug, Default)]
pub struct StereotypeRegistry {
    stereotypes: IndexMap<StereotypeId, Arc<StereotypeDescription>>,
}

impl StereotypeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a stereotype description.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptionError`] when the description is invalid.
    pub fn add(&mut self, description: StereotypeDescription) -> Result<(), DescriptionError> {
        description.validate()?;
        if self.stereotypes.contains_key(&description.id) {
            warn!(duplicate:% = description.id; "Ignoring duplicate stereotype registration");
            return Ok(());
        }
        self.stereotypes
            .insert(description.id.clone(), Arc::new(description));
        Ok(())
    }

    /// Looks up a registered stereotype by id.
    pub fn get(&self, id: &StereotypeId) -> Option<&Arc<StereotypeDescription>> {
        self.stereotypes.get(id)
    }

    /// Iterates over registered stereotypes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<StereotypeDescription>> {
        self.stereotypes.values()
    }

    /// Number of registered stereotypes.
    pub fn len(&self) -> usize {
        self.stereotypes.len()
    }

    /// Returns true when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.stereotypes.is_empty()
    }
}

/// Registry of property-form descriptions.
#[derive(Debug, Default)]
pub struct PropertiesRegistry {
    forms: IndexMap<DescriptionId, Arc<FormDescription>>,
}

impl PropertiesRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a form description.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptionError`] when the description is invalid.
    pub fn add(&mut self, description: FormDescription) -> Result<(), DescriptionError> {
        description.validate()?;
        if self.forms.contains_key(&description.id) {
            warn!(duplicate:% = description.id; "Ignoring duplicate form registration");
            return Ok(());
        }
        self.forms.insert(description.id, Arc::new(description));
        Ok(())
    }

    /// Looks up a registered form by id.
    pub fn get(&self, id: DescriptionId) -> Option<&Arc<FormDescription>> {
        self.forms.get(&id)
    }

    /// Iterates over registered forms in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<FormDescription>> {
        self.forms.values()
    }

    /// Number of registered forms.
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    /// Returns true when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

/// Registry of diagram descriptions.
#[derive(Debug, Default)]
pub struct RepresentationRegistry {
    diagrams: IndexMap<DescriptionId, Arc<DiagramDescription>>,
}

impl RepresentationRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a diagram description.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptionError`] when the description is invalid.
    pub fn add(&mut self, description: DiagramDescription) -> Result<(), DescriptionError> {
        description.validate()?;
        if self.diagrams.contains_key(&description.id) {
            warn!(duplicate:% = description.id; "Ignoring duplicate representation registration");
            return Ok(());
        }
        self.diagrams.insert(description.id, Arc::new(description));
        Ok(())
    }

    /// Looks up a registered diagram by id.
    pub fn get(&self, id: DescriptionId) -> Option<&Arc<DiagramDescription>> {
        self.diagrams.get(&id)
    }

    /// Iterates over registered diagrams in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<DiagramDescription>> {
        self.diagrams.values()
    }

    /// Number of registered diagrams.
    pub fn len(&self) -> usize {
        self.diagrams.len()
    }

    /// Returns true when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.diagrams.is_empty()
    }
}

/// The four registries a studio publishes into.
#[derive(Debug, Default)]
pub struct Registries {
    pub metamodels: MetamodelRegistry,
    pub stereotypes: StereotypeRegistry,
    pub properties: PropertiesRegistry,
    pub representations: RepresentationRegistry,
}

/// Contributes metamodel packages at startup.
pub trait MetamodelConfigurer {
    fn add_metamodels(&self, registry: &mut MetamodelRegistry) -> Result<(), DescriptionError>;
}

/// Contributes stereotype descriptions at startup.
pub trait StereotypeConfigurer {
    fn add_stereotypes(&self, registry: &mut StereotypeRegistry) -> Result<(), DescriptionError>;
}

/// Contributes form descriptions at startup.
pub trait PropertiesConfigurer {
    fn add_properties(&self, registry: &mut PropertiesRegistry) -> Result<(), DescriptionError>;
}

/// Contributes diagram descriptions at startup.
pub trait RepresentationConfigurer {
    fn add_representations(
        &self,
        registry: &mut RepresentationRegistry,
    ) -> Result<(), DescriptionError>;
}
