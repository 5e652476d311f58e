//! GN string literals.

/// Quote `value` as a GN string literal.
///
/// Backslashes, double quotes and dollar signs are escaped; newlines become
/// `$0x0A` since GN strings cannot span lines.
pub fn to_gn_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' | '"' | '$' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("$0x0A"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
