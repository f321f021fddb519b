//! Segment field definitions.

/// One field of a segment, as listed by the schema provider.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldDef {
    /// 1-based position of the field within its segment.
    pub position: usize,
    /// Human-readable description, the source of the accessor name.
    pub description: String,
}

impl FieldDef {
    /// Creates a field definition.
    #[must_use]
    pub fn new(position: usize, description: impl Into<String>) -> Self {
        Self {
            position,
            description: description.into(),
        }
    }
}
