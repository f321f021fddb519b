//! Bracket matching over flat token sequences.

use hl7gen_core::{Result, StructureError, Token};

/// Finds the closing marker that balances the opener at `open_at`.
///
/// Scans `tokens[open_at + 1..end]`, counting every opening marker as +1 and
/// every closing marker as -1 regardless of kind. Only the closer that brings
/// the depth back to zero is checked against the opener's kind; intermediate
/// pairs are not kind-checked.
///
/// # Arguments
/// * `tokens` - Full token sequence
/// * `open_at` - Position of the opening marker
/// * `end` - Exclusive end of the window to scan (clamped to `tokens.len()`)
///
/// # Returns
/// Absolute position of the matching closer.
///
/// # Errors
/// Returns `StructureError` if `open_at` is not an opening marker, if the
/// window ends before the depth returns to zero, or if the balancing closer
/// is of the wrong kind.
pub fn find_group_end(tokens: &[Token], open_at: usize, end: usize) -> Result<usize> {
    let open = tokens
        .get(open_at)
        .and_then(Token::as_open)
        .ok_or(StructureError::NotOpening { position: open_at })?;
    let end = end.min(tokens.len());

    let mut depth = 1usize;
    for (position, token) in tokens.iter().enumerate().take(end).skip(open_at + 1) {
        let Some(kind) = token.marker_kind() else {
            continue;
        };
        if kind.is_open() {
            depth += 1;
            continue;
        }

        depth -= 1;
        if depth == 0 {
            return if kind == open.close() {
                Ok(position)
            } else {
                Err(StructureError::Mismatched {
                    open,
                    open_position: open_at,
                    found: kind,
                    found_position: position,
                })
            };
        }
    }

    Err(StructureError::Unclosed {
        open,
        position: open_at,
    })
}
