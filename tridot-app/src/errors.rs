//! Error types for the command line front end.

use thiserror::Error;
use tridot_data::GeometryError;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Logging setup error: {0}")]
    Logging(String),
}
