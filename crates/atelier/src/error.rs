//! Error types for studio initialization.

use thiserror::Error;

use crate::description::DescriptionError;
use crate::export::ExportError;

/// The top-level error type for studio operations.
#[derive(Debug, Error)]
pub enum StudioError {
    #[error("invalid description: {0}")]
    Description(#[from] DescriptionError),

    #[error("export failed: {0}")]
    Export(#[from] ExportError),
}
