//! Shell quoting for generated command lines.

/// Escape a value for use inside double quotes.
///
/// Escapes `"`, `\`, `$` and backtick; everything else is literal inside
/// double quotes in POSIX shells.
pub fn escape_double_quoted(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Escape a value for use inside single quotes.
///
/// A single quote cannot appear inside single quotes, so it is written as
/// close-quote, escaped quote, reopen-quote.
pub fn escape_single_quoted(value: &str) -> String {
    value.replace('\'', r"'\''")
}

/// Flatten a value for use in a `#` comment line.
///
/// Control characters (newlines included) become spaces, so the comment
/// cannot end early and leak the rest of the value as a command.
pub fn comment_text(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}
