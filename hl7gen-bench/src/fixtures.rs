//! Token fixtures for compiler benchmarks.

use hl7gen_core::{MarkerKind, SchemaRow, Token};

/// Converts bare codes to tokens.
#[must_use]
pub fn tokens(codes: &[&str]) -> Vec<Token> {
    codes.iter().map(|c| Token::from(SchemaRow::new(*c))).collect()
}

/// ORU^R01 observation result structure.
#[must_use]
pub fn oru_r01() -> Vec<Token> {
    tokens(&[
        "MSH", "{", "[", "PID", "[", "PD1", "]", "[{", "NTE", "}]", "[", "PV1", "[", "PV2", "]",
        "]", "]", "{", "[", "ORC", "]", "OBR", "[{", "NTE", "}]", "{", "[", "OBX", "]", "[{",
        "NTE", "}]", "}", "[{", "FT1", "}]", "}", "}", "[", "DSC", "]",
    ])
}

/// Synthetic structure of `width` sibling groups per level, `depth` levels deep.
///
/// Every group holds a repeated `NTE` pair so sibling disambiguation is exercised.
#[must_use]
pub fn nested(width: usize, depth: usize) -> Vec<Token> {
    let mut out = vec![Token::segment("MSH")];
    push_level(&mut out, width, depth);
    out
}

fn push_level(out: &mut Vec<Token>, width: usize, depth: usize) {
    if depth == 0 {
        return;
    }
    for _ in 0..width {
        out.push(Token::marker(MarkerKind::RepOptOpen));
        out.push(Token::segment("OBX"));
        out.push(Token::segment("NTE"));
        out.push(Token::segment("NTE"));
        push_level(out, width, depth - 1);
        out.push(Token::marker(MarkerKind::RepOptClose));
    }
}
