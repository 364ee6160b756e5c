//! Outcome of side-effecting edit handlers.

/// Two-valued status returned by edit and delete handlers.
///
/// The hosting workbench decides the user-visible behavior for each value;
/// handlers never carry any further diagnostic payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditStatus {
    /// The edit was applied.
    Ok,
    /// The edit could not be applied, typically because the target element
    /// was absent from the evaluation context.
    Error,
}

impl EditStatus {
    /// Returns true for [`EditStatus::Ok`].
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}
