//! Property-form descriptions.
//!
//! A form description declares a property sheet for one kind of model
//! element: which contexts it applies to, the pages and groups it is laid
//! out in, and the controls that read and write the target element. The
//! hosting workbench walks this structure per request, evaluating every
//! provider against the current context.

use std::collections::HashSet;
use std::fmt;

use atelier_core::identifier::DescriptionId;

use super::{
    ContextPredicate, DescriptionError, ElementsProvider, NewValueHandler, OptionProvider,
    Provider,
};

/// Declarative description of a property sheet.
#[derive(Clone)]
pub struct FormDescription {
    /// Deterministic identifier of this description.
    pub id: DescriptionId,
    /// Static label shown in description pickers.
    pub label: String,
    /// Title of a concrete form, derived from the context.
    pub label_provider: OptionProvider<String>,
    /// Applicability test deciding whether this form can be created for a
    /// context.
    pub can_create: ContextPredicate,
    /// Identifier of a concrete form instance.
    pub id_provider: Provider<String>,
    /// Identifier of the semantic element the form is about.
    pub target_object_id: OptionProvider<String>,
    /// Pages of the form.
    pub pages: Vec<PageDescription>,
    /// Groups reachable from the pages.
    pub groups: Vec<GroupDescription>,
}

impl FormDescription {
    /// Checks the structural invariants of this description.
    ///
    /// # Errors
    ///
    /// Returns a [`DescriptionError`] when the label is empty, no page is
    /// declared, or a nested page or group is itself invalid.
    pub fn validate(&self) -> Result<(), DescriptionError> {
        if self.label.is_empty() {
            return Err(DescriptionError::EmptyField {
                context: self.id.to_string(),
                field: "label",
            });
        }
        if self.pages.is_empty() {
            return Err(DescriptionError::NoPages {
                form: self.label.clone(),
            });
        }
        for page in &self.pages {
            page.validate()?;
        }
        for group in &self.groups {
            group.validate()?;
        }
        Ok(())
    }
}

impl fmt::Debug for FormDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormDescription")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("pages", &self.pages.len())
            .field("groups", &self.groups.len())
            .finish()
    }
}

/// One page of a form.
#[derive(Clone)]
pub struct PageDescription {
    pub id: String,
    pub id_provider: Provider<String>,
    pub label_provider: Provider<String>,
    /// Elements the page fans out over, usually the context target itself.
    pub semantic_elements: ElementsProvider,
    /// Applicability test deciding whether the page shows for a context.
    pub can_display: ContextPredicate,
    pub groups: Vec<GroupDescription>,
}

impl PageDescription {
    /// Checks the structural invariants of this page.
    pub fn validate(&self) -> Result<(), DescriptionError> {
        if self.id.is_empty() {
            return Err(DescriptionError::EmptyField {
                context: "page".to_owned(),
                field: "id",
            });
        }
        for group in &self.groups {
            group.validate()?;
        }
        Ok(())
    }
}

impl fmt::Debug for PageDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageDescription")
            .field("id", &self.id)
            .field("groups", &self.groups.len())
            .finish()
    }
}

/// One group of controls within a page.
#[derive(Clone)]
pub struct GroupDescription {
    pub id: String,
    pub id_provider: Provider<String>,
    pub label_provider: Provider<String>,
    pub semantic_elements: ElementsProvider,
    pub controls: Vec<ControlDescription>,
}

impl GroupDescription {
    /// Checks the structural invariants of this group.
    pub fn validate(&self) -> Result<(), DescriptionError> {
        if self.id.is_empty() {
            return Err(DescriptionError::EmptyField {
                context: "group".to_owned(),
                field: "id",
            });
        }
        let mut seen = HashSet::new();
        for control in &self.controls {
            control.validate()?;
            if !seen.insert(control.id()) {
                return Err(DescriptionError::DuplicateControlId {
                    group: self.id.clone(),
                    id: control.id().to_owned(),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Debug for GroupDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupDescription")
            .field("id", &self.id)
            .field("controls", &self.controls.len())
            .finish()
    }
}

/// Tagged control variants a group can hold.
#[derive(Debug, Clone)]
pub enum ControlDescription {
    Textfield(TextfieldDescription),
}

impl ControlDescription {
    /// Returns the control identifier.
    pub fn id(&self) -> &str {
        match self {
            Self::Textfield(textfield) => &textfield.id,
        }
    }

    /// Checks the structural invariants of this control.
    pub fn validate(&self) -> Result<(), DescriptionError> {
        match self {
            Self::Textfield(textfield) => textfield.validate(),
        }
    }
}

/// A single-line text editor bound to one property of the target element.
#[derive(Clone)]
pub struct TextfieldDescription {
    pub id: String,
    pub id_provider: Provider<String>,
    pub label_provider: Provider<String>,
    /// Current value, read from the context target.
    pub value_provider: Provider<String>,
    /// Applies an edited value to the context target. Must report
    /// [`EditStatus::Error`](atelier_core::status::EditStatus::Error) when
    /// the context carries no target element.
    pub new_value_handler: NewValueHandler,
}

impl TextfieldDescription {
    /// Checks the structural invariants of this textfield.
    pub fn validate(&self) -> Result<(), DescriptionError> {
        if self.id.is_empty() {
            return Err(DescriptionError::EmptyField {
                context: "textfield".to_owned(),
                field: "id",
            });
        }
        Ok(())
    }
}

impl fmt::Debug for TextfieldDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextfieldDescription")
            .field("id", &self.id)
            .finish()
    }
}
