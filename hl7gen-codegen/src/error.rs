//! Error types for code generation.

use hl7gen_core::StructureError;
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// The structure's markers are not nested properly.
    #[error("structure '{structure}': {source}")]
    Structure {
        /// Message or group being compiled.
        structure: String,
        /// Underlying compiler error.
        source: StructureError,
    },

    /// The schema source could not provide the structure's rows.
    #[error("structure '{structure}': source error: {message}")]
    Source {
        /// Message or group requested.
        structure: String,
        /// Error message.
        message: String,
    },

    /// The emitter rejected the compiled structure.
    #[error("structure '{structure}': emit error: {message}")]
    Emit {
        /// Message or group being emitted.
        structure: String,
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a source error.
    pub fn unavailable(structure: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Source {
            structure: structure.into(),
            message: message.into(),
        }
    }

    /// Creates an emit error.
    pub fn emit(structure: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Emit {
            structure: structure.into(),
            message: message.into(),
        }
    }

    /// Returns the name of the structure the error belongs to.
    #[must_use]
    pub fn structure(&self) -> &str {
        match self {
            Self::Structure { structure, .. }
            | Self::Source { structure, .. }
            | Self::Emit { structure, .. } => structure,
        }
    }
}
