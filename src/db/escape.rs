//! String escaping and literal rendering for CozoDB scripts.

use cozo::{DataValue, Num};

/// Escape a string for use in CozoDB string literals.
///
/// # Arguments
/// * `s` - The string to escape
/// * `quote_char` - The quote character to escape ('"' for double-quoted, '\'' for single-quoted)
pub fn escape_string_for_quote(s: &str, quote_char: char) -> String {
    let mut result = String::with_capacity(s.len() * 2);
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            c if c == quote_char => {
                result.push('\\');
                result.push(c);
            }
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() || c == '\0' => {
                // Escape control characters as \uXXXX (JSON format)
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result
}

/// Escape a string for use in CozoDB double-quoted string literals (JSON-compatible)
#[inline]
pub fn escape_string(s: &str) -> String {
    escape_string_for_quote(s, '"')
}

/// Render a single value as a CozoScript literal.
///
/// Only the value kinds the directory stores are rendered; anything else
/// becomes `null`.
pub fn literal(value: &DataValue) -> String {
    match value {
        DataValue::Str(s) => format!("\"{}\"", escape_string(s)),
        DataValue::Num(Num::Int(i)) => i.to_string(),
        DataValue::Num(Num::Float(f)) => format!("{:?}", f),
        DataValue::Bool(b) => b.to_string(),
        _ => "null".to_string(),
    }
}

/// Render a row as a CozoScript list literal, e.g. `["Biology", 3, null]`.
pub fn row_literal(row: &[DataValue]) -> String {
    let cells = row.iter().map(literal).collect::<Vec<_>>().join(", ");
    format!("[{}]", cells)
}
