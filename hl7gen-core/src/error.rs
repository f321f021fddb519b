//! Error types for structure compilation.

use crate::token::MarkerKind;
use thiserror::Error;

/// Error raised when a token sequence cannot be compiled into a structure tree.
///
/// Positions are absolute indices into the token slice handed to the compiler,
/// so a caller can point a human at the offending schema row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    /// An opening marker whose depth never returned to zero before the range ended.
    #[error("markers not nested properly: '{open}' at position {position} is never closed")]
    Unclosed {
        /// Kind of the unclosed opening marker.
        open: MarkerKind,
        /// Position of the opening marker.
        position: usize,
    },

    /// Depth returned to zero on a closer of the wrong kind.
    #[error(
        "markers not nested properly: '{open}' at position {open_position} closed by '{found}' at position {found_position}"
    )]
    Mismatched {
        /// Kind of the opening marker.
        open: MarkerKind,
        /// Position of the opening marker.
        open_position: usize,
        /// Kind of the closing marker that balanced the depth.
        found: MarkerKind,
        /// Position of that closing marker.
        found_position: usize,
    },

    /// A closing marker reached directly by the child scan.
    #[error("markers not nested properly: stray '{kind}' at position {position}")]
    StrayClose {
        /// Kind of the stray closing marker.
        kind: MarkerKind,
        /// Position of the stray marker.
        position: usize,
    },

    /// The matcher was pointed at a token that does not open a group.
    #[error("markers not nested properly: token at position {position} does not open a group")]
    NotOpening {
        /// Position of the token.
        position: usize,
    },

    /// Groups nest deeper than the builder accepts.
    #[error("structure too deep: group at position {position} exceeds {limit} nesting levels")]
    TooDeep {
        /// Position of the opening marker of the group past the limit.
        position: usize,
        /// Maximum accepted nesting depth.
        limit: usize,
    },

    /// The builder was handed an empty token range.
    #[error("empty structure: no tokens between positions {start} and {end}")]
    Empty {
        /// Start of the empty range.
        start: usize,
        /// End of the empty range (exclusive).
        end: usize,
    },
}

impl StructureError {
    /// Returns the token position the error points at.
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            Self::Unclosed { position, .. }
            | Self::StrayClose { position, .. }
            | Self::NotOpening { position }
            | Self::TooDeep { position, .. } => *position,
            Self::Mismatched { found_position, .. } => *found_position,
            Self::Empty { start, .. } => *start,
        }
    }
}

/// Result type alias for structure compilation.
pub type Result<T> = std::result::Result<T, StructureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unclosed_display() {
        let err = StructureError::Unclosed {
            open: MarkerKind::RepOpen,
            position: 3,
        };
        assert_eq!(
            err.to_string(),
            "markers not nested properly: '{' at position 3 is never closed"
        );
        assert_eq!(err.position(), 3);
    }

    #[test]
    fn test_mismatched_points_at_closer() {
        let err = StructureError::Mismatched {
            open: MarkerKind::RepOpen,
            open_position: 0,
            found: MarkerKind::OptClose,
            found_position: 4,
        };
        assert!(err.to_string().contains("markers not nested properly"));
        assert!(err.to_string().contains("']' at position 4"));
        assert_eq!(err.position(), 4);
    }

    #[test]
    fn test_stray_close_display() {
        let err = StructureError::StrayClose {
            kind: MarkerKind::RepOptClose,
            position: 7,
        };
        assert_eq!(
            err.to_string(),
            "markers not nested properly: stray '}]' at position 7"
        );
    }

    #[test]
    fn test_too_deep_display() {
        let err = StructureError::TooDeep {
            position: 12,
            limit: 64,
        };
        assert_eq!(
            err.to_string(),
            "structure too deep: group at position 12 exceeds 64 nesting levels"
        );
        assert_eq!(err.position(), 12);
    }
}
