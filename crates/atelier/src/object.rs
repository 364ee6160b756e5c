//! Object information services.
//!
//! Diagram descriptions need a stable identifier, a kind string, and a
//! label for any element they map. [`ObjectService`] is the seam the
//! hosting workbench can replace; [`StandardObjectService`] answers from
//! the element tags alone.

use atelier_core::element::Element;

/// Provides identity, kind, and label information for model elements.
pub trait ObjectService: Send + Sync {
    /// Returns a stable identifier for the element, when it has one.
    fn id(&self, element: &Element) -> Option<String>;

    /// Returns the qualified kind string of the element.
    fn kind(&self, element: &Element) -> String;

    /// Returns a human-readable label for the element, when it has one.
    fn label(&self, element: &Element) -> Option<String>;
}

/// Default [`ObjectService`] answering from the element vocabulary.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardObjectService;

impl ObjectService for StandardObjectService {
    fn id(&self, element: &Element) -> Option<String> {
        match element {
            Element::Package(package) => Some(package.ns_uri()),
            Element::Domain(domain) => Some(domain.uri()),
            Element::View(_) => None,
            _ => element.name(),
        }
    }

    fn kind(&self, element: &Element) -> String {
        element.kind().qualified().to_owned()
    }

    fn label(&self, element: &Element) -> Option<String> {
        element.name()
    }
}

/// Labels elements of one registered metamodel for reflective editors.
///
/// One adapter is registered next to each metamodel package; an adapter
/// answers `None` for elements outside its vocabulary.
pub trait ItemAdapter: Send + Sync {
    /// Returns the editor label for the element, when this adapter covers
    /// its vocabulary.
    fn label(&self, element: &Element) -> Option<String>;
}
