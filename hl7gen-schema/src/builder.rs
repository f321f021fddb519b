//! Structure tree builder.
//!
//! Turns a flat token sequence into a [`GroupNode`] tree. Marker pairs that
//! wrap the whole range set the group's cardinality; marker pairs inside the
//! range become nested groups, built recursively.

use crate::matcher::find_group_end;
use crate::naming::{NameScope, segment_base_name};
use hl7gen_core::{Cardinality, GroupNode, Result, SchemaRow, SegmentNode, StructureError, Token};

/// Maximum number of enclosing marker pairs read off one range.
///
/// Two passes let schemas spell "optional repeating" as `[ { ... } ]` as well
/// as `[{ ... }]`.
const OUTER_MARKER_PASSES: usize = 2;

/// Maximum group nesting depth below the root.
///
/// Deeper structures fail with [`StructureError::TooDeep`] instead of
/// exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Builds the structure tree for a message or an explicitly requested group.
///
/// # Arguments
/// * `tokens` - Flat token sequence in source order
/// * `name` - Group name; `None` leaves the root unnamed
///
/// # Returns
/// The root group. Its accessor is its display name.
///
/// # Errors
/// Returns `StructureError` if the sequence is empty, its markers are not
/// nested properly, or groups nest deeper than [`MAX_NESTING_DEPTH`]. No
/// partial tree is returned.
pub fn build_structure(tokens: &[Token], name: Option<&str>) -> Result<GroupNode> {
    let mut root = build_range(
        tokens,
        0,
        tokens.len(),
        name.filter(|n| !n.is_empty()).map(str::to_string),
        String::new(),
        0,
    )?;
    root.accessor = root.display_name();
    Ok(root)
}

/// Converts schema rows to tokens and builds their structure tree.
///
/// # Errors
/// Returns `StructureError` under the same conditions as [`build_structure`].
pub fn build_from_rows<I>(rows: I, name: Option<&str>) -> Result<GroupNode>
where
    I: IntoIterator<Item = SchemaRow>,
{
    let tokens: Vec<Token> = rows.into_iter().map(Token::from).collect();
    build_structure(&tokens, name)
}

/// Builds one group from `tokens[start..end]`, `depth` levels below the root.
fn build_range(
    tokens: &[Token],
    start: usize,
    end: usize,
    name: Option<String>,
    description: String,
    depth: usize,
) -> Result<GroupNode> {
    if start >= end {
        return Err(StructureError::Empty { start, end });
    }

    let (cardinality, lo, hi) = strip_outer_markers(tokens, start, end)?;

    let mut group = GroupNode::new(name);
    group.cardinality = cardinality;
    group.description = description;

    let mut scope = NameScope::new();
    let mut p = lo;
    while p < hi {
        match &tokens[p] {
            Token::Segment(segment) => {
                let mut node = SegmentNode::from_token(segment);
                node.accessor = scope.resolve(segment_base_name(&segment.name));
                group.add_child(node.into());
                p += 1;
            }
            Token::Marker(marker) if marker.kind.is_open() => {
                if depth >= MAX_NESTING_DEPTH {
                    return Err(StructureError::TooDeep {
                        position: p,
                        limit: MAX_NESTING_DEPTH,
                    });
                }
                let close = find_group_end(tokens, p, hi)?;
                let mut child = build_range(
                    tokens,
                    p,
                    close + 1,
                    marker.group_name.clone(),
                    marker.description.clone(),
                    depth + 1,
                )?;
                child.accessor = scope.resolve(&child.display_name());
                group.add_child(child.into());
                p = close + 1;
            }
            Token::Marker(marker) => {
                return Err(StructureError::StrayClose {
                    kind: marker.kind,
                    position: p,
                });
            }
        }
    }

    Ok(group)
}

/// Reads up to two enclosing marker pairs off `tokens[start..end]`.
///
/// Returns the combined cardinality and the inner range.
fn strip_outer_markers(
    tokens: &[Token],
    start: usize,
    end: usize,
) -> Result<(Cardinality, usize, usize)> {
    let mut cardinality = Cardinality::REQUIRED;
    let (mut lo, mut hi) = (start, end);

    for _ in 0..OUTER_MARKER_PASSES {
        if hi - lo < 2 {
            break;
        }
        let Some(open) = tokens[lo].as_open() else {
            break;
        };
        if tokens[hi - 1].marker_kind() != Some(open.close()) {
            break;
        }
        if find_group_end(tokens, lo, hi)? != hi - 1 {
            break;
        }

        cardinality = cardinality.combine(open.cardinality());
        lo += 1;
        hi -= 1;
    }

    Ok((cardinality, lo, hi))
}
