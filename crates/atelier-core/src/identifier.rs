//! Deterministic identifiers for registered descriptions.
//!
//! Every description registered with a studio registry carries an identifier
//! derived from a fixed name, so registration is idempotent across restarts
//! and identifier collisions are avoided by construction rather than by
//! coordination.

use std::fmt;

use uuid::Uuid;

/// Identifier of a form or diagram description.
///
/// Wraps a name-based (version 5) UUID: the same name always yields the same
/// identifier.
///
/// # Examples
///
/// ```
/// use atelier_core::identifier::DescriptionId;
///
/// let a = DescriptionId::from_name("entity");
/// let b = DescriptionId::from_name("entity");
/// assert_eq!(a, b);
/// assert_ne!(a, DescriptionId::from_name("attribute"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DescriptionId(Uuid);

impl DescriptionId {
    /// Derives the identifier for the given description name.
    pub fn from_name(name: &str) -> Self {
        Self(Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()))
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for DescriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a stereotype document template.
///
/// Stereotype identifiers are fixed strings chosen by the configurer that
/// registers them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StereotypeId(String);

impl StereotypeId {
    /// Creates a stereotype identifier from a fixed name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StereotypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
