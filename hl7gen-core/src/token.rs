//! Flat structure tokens and the marker classifier.
//!
//! A message structure arrives as an ordered list of schema rows. Each row is
//! either a segment reference or one of six bracket markers that open or close
//! an optional and/or repeating sub-group.

use std::fmt;

/// Segment name used for an unstructured (generic) segment.
pub const PLACEHOLDER_SEGMENT: &str = "?";

/// Required/repeating pair attached to segments and groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cardinality {
    /// Whether the element must be present.
    pub required: bool,
    /// Whether the element may occur more than once.
    pub repeating: bool,
}

impl Cardinality {
    /// Required, non-repeating. The cardinality of a range without markers.
    pub const REQUIRED: Self = Self::new(true, false);
    /// Optional, non-repeating (`[ ]`).
    pub const OPTIONAL: Self = Self::new(false, false);
    /// Required, repeating (`{ }`).
    pub const REPEATING: Self = Self::new(true, true);
    /// Optional, repeating (`[{ }]`).
    pub const OPTIONAL_REPEATING: Self = Self::new(false, true);

    /// Creates a cardinality.
    #[must_use]
    pub const fn new(required: bool, repeating: bool) -> Self {
        Self {
            required,
            repeating,
        }
    }

    /// Narrows this cardinality by an enclosing one.
    ///
    /// An optional pair clears `required`, a repeating pair sets `repeating`.
    #[must_use]
    pub const fn combine(self, other: Self) -> Self {
        Self {
            required: self.required && other.required,
            repeating: self.repeating || other.repeating,
        }
    }
}

impl Default for Cardinality {
    fn default() -> Self {
        Self::REQUIRED
    }
}

/// Bracket marker kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarkerKind {
    /// `[`
    OptOpen,
    /// `]`
    OptClose,
    /// `{`
    RepOpen,
    /// `}`
    RepClose,
    /// `[{`
    RepOptOpen,
    /// `}]`
    RepOptClose,
}

impl MarkerKind {
    /// Parses a segment code into a marker kind.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "[" => Some(Self::OptOpen),
            "]" => Some(Self::OptClose),
            "{" => Some(Self::RepOpen),
            "}" => Some(Self::RepClose),
            "[{" => Some(Self::RepOptOpen),
            "}]" => Some(Self::RepOptClose),
            _ => None,
        }
    }

    /// Returns the schema spelling of this marker.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::OptOpen => "[",
            Self::OptClose => "]",
            Self::RepOpen => "{",
            Self::RepClose => "}",
            Self::RepOptOpen => "[{",
            Self::RepOptClose => "}]",
        }
    }

    /// Returns true for the three opening kinds.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::OptOpen | Self::RepOpen | Self::RepOptOpen)
    }

    /// Returns true for the three closing kinds.
    #[must_use]
    pub const fn is_close(self) -> bool {
        !self.is_open()
    }

    /// Returns the closer paired with this marker.
    ///
    /// For a closing kind this is the kind itself.
    #[must_use]
    pub const fn close(self) -> Self {
        match self {
            Self::OptOpen | Self::OptClose => Self::OptClose,
            Self::RepOpen | Self::RepClose => Self::RepClose,
            Self::RepOptOpen | Self::RepOptClose => Self::RepOptClose,
        }
    }

    /// Returns the cardinality a pair of this kind gives the range it encloses.
    #[must_use]
    pub const fn cardinality(self) -> Cardinality {
        match self {
            Self::OptOpen | Self::OptClose => Cardinality::OPTIONAL,
            Self::RepOpen | Self::RepClose => Cardinality::REPEATING,
            Self::RepOptOpen | Self::RepOptClose => Cardinality::OPTIONAL_REPEATING,
        }
    }
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A segment reference.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentToken {
    /// Segment name (e.g. `MSH`), or `?` for a generic segment.
    pub name: String,
    /// Segment cardinality as declared on the row.
    pub cardinality: Cardinality,
    /// Human-readable description.
    pub description: String,
}

impl SegmentToken {
    /// Creates a required, non-repeating segment token.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cardinality: Cardinality::REQUIRED,
            description: String::new(),
        }
    }

    /// Returns true if this is the generic `?` placeholder.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.name == PLACEHOLDER_SEGMENT
    }
}

/// A bracket marker, optionally naming the group it opens.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkerToken {
    /// Marker kind.
    pub kind: MarkerKind,
    /// Group name carried on an opening marker row.
    pub group_name: Option<String>,
    /// Description carried on the marker row.
    pub description: String,
}

impl MarkerToken {
    /// Creates an unnamed marker.
    #[must_use]
    pub const fn new(kind: MarkerKind) -> Self {
        Self {
            kind,
            group_name: None,
            description: String::new(),
        }
    }
}

/// One element of a flat structure description.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Token {
    /// Segment reference.
    Segment(SegmentToken),
    /// Bracket marker.
    Marker(MarkerToken),
}

impl Token {
    /// Creates a required, non-repeating segment token.
    #[must_use]
    pub fn segment(name: impl Into<String>) -> Self {
        Self::Segment(SegmentToken::new(name))
    }

    /// Creates an unnamed marker token.
    #[must_use]
    pub const fn marker(kind: MarkerKind) -> Self {
        Self::Marker(MarkerToken::new(kind))
    }

    /// Creates an opening marker carrying a group name.
    #[must_use]
    pub fn named_marker(kind: MarkerKind, group_name: impl Into<String>) -> Self {
        Self::Marker(MarkerToken {
            kind,
            group_name: Some(group_name.into()),
            description: String::new(),
        })
    }

    /// Returns the marker kind, or `None` for a segment.
    #[must_use]
    pub fn marker_kind(&self) -> Option<MarkerKind> {
        match self {
            Self::Marker(m) => Some(m.kind),
            Self::Segment(_) => None,
        }
    }

    /// Returns the marker kind if this token opens a group.
    #[must_use]
    pub fn as_open(&self) -> Option<MarkerKind> {
        self.marker_kind().filter(|k| k.is_open())
    }

    /// Returns the marker kind if this token closes a group.
    #[must_use]
    pub fn as_close(&self) -> Option<MarkerKind> {
        self.marker_kind().filter(|k| k.is_close())
    }
}

/// A structure row as read from a schema store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchemaRow {
    /// Segment code or marker spelling.
    pub seg_code: String,
    /// Row description.
    pub description: String,
    /// Whether the segment is required.
    pub required: bool,
    /// Whether the segment repeats.
    pub repeating: bool,
    /// Group name attached to marker rows.
    pub group_name: Option<String>,
}

impl SchemaRow {
    /// Creates a row for a required, non-repeating segment or a marker.
    #[must_use]
    pub fn new(seg_code: impl Into<String>) -> Self {
        Self {
            seg_code: seg_code.into(),
            required: true,
            ..Self::default()
        }
    }
}

impl From<SchemaRow> for Token {
    fn from(row: SchemaRow) -> Self {
        match MarkerKind::from_code(&row.seg_code) {
            Some(kind) => Self::Marker(MarkerToken {
                kind,
                group_name: row.group_name.filter(|n| !n.is_empty()),
                description: row.description,
            }),
            None => Self::Segment(SegmentToken {
                name: row.seg_code,
                cardinality: Cardinality::new(row.required, row.repeating),
                description: row.description,
            }),
        }
    }
}
