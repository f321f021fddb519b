//! Accessor naming.
//!
//! Two separate disambiguation strategies live here:
//! - [`NameScope`] assigns sibling accessors within one group using a running
//!   counter (`NTE`, `NTE2`, `NTE3`).
//! - [`field_accessor_names`] names the fields of one segment from their
//!   descriptions, suffixing colliding names with the segment name and field
//!   position (`Identifier_XYZ3`).

use hl7gen_core::{FieldDef, PLACEHOLDER_SEGMENT};
use std::collections::{HashMap, HashSet};

/// Accessor base name used for the generic `?` segment.
pub const PLACEHOLDER_ACCESSOR: &str = "ANY";

/// Sibling name table for one group under construction.
///
/// Created fresh for every group and dropped once its children are named.
#[derive(Debug, Default)]
pub struct NameScope {
    counts: HashMap<String, usize>,
    taken: HashSet<String>,
}

impl NameScope {
    /// Creates an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns an accessor for `base`.
    ///
    /// The first request returns `base` unchanged, later requests return
    /// `base2`, `base3`, and so on. A numbered candidate that is already in
    /// use (because a sibling is literally named `base2`) is skipped.
    pub fn resolve(&mut self, base: &str) -> String {
        let count = self.counts.entry(base.to_string()).or_insert(0);
        loop {
            *count += 1;
            let candidate = if *count == 1 {
                base.to_string()
            } else {
                format!("{base}{count}")
            };
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
        }
    }

    /// Returns the number of accessors assigned so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.taken.len()
    }

    /// Returns true if nothing has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.taken.is_empty()
    }
}

/// Returns the accessor base name for a segment.
#[must_use]
pub fn segment_base_name(segment: &str) -> &str {
    if segment == PLACEHOLDER_SEGMENT {
        PLACEHOLDER_ACCESSOR
    } else {
        segment
    }
}

/// Builds an accessor name from a field description.
///
/// Words are split on whitespace, stripped of everything but ASCII letters and
/// digits, capitalized, then concatenated: `"Set ID - PID"` becomes `SetIDPID`.
/// Non-ASCII letters are dropped, so generated accessors stay plain ASCII.
#[must_use]
pub fn accessor_name(description: &str, position: usize) -> String {
    let mut name = String::with_capacity(description.len());
    for word in description.split_whitespace() {
        let mut chars = word.chars().filter(|c| c.is_ascii_alphanumeric());
        if let Some(first) = chars.next() {
            name.push(first.to_ascii_uppercase());
            name.extend(chars);
        }
    }

    if name.is_empty() {
        return format!("Field{position}");
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}

/// Names every field of a segment.
///
/// Fields whose description-derived names collide all receive a
/// `_{segment}{position}` suffix; unique names are kept as they are.
#[must_use]
pub fn field_accessor_names(segment: &str, fields: &[FieldDef]) -> Vec<String> {
    let bases: Vec<String> = fields
        .iter()
        .map(|f| accessor_name(&f.description, f.position))
        .collect();

    let mut occurrences: HashMap<&str, usize> = HashMap::new();
    for base in &bases {
        *occurrences.entry(base.as_str()).or_insert(0) += 1;
    }

    bases
        .iter()
        .zip(fields)
        .map(|(base, field)| {
            if occurrences[base.as_str()] > 1 {
                format!("{base}_{segment}{}", field.position)
            } else {
                base.clone()
            }
        })
        .collect()
}
