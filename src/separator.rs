use std::borrow::Cow;

/// Joiner used when the separator is disabled.
pub const DEFAULT_SEPARATOR: &str = ", ";
pub const PRESET_SEPARATORS: [&str; 3] = [", ", "; ", ESCAPED_NEWLINE];

const ESCAPED_NEWLINE: &str = "\\n";

/// Rewrites every backslash followed by `n` into a line feed.
///
/// This is the only sequence that is decoded; all other characters, including
/// whitespace and lone backslashes, are kept verbatim.
pub fn unescape(separator: &str) -> Cow<'_, str> {
    if separator.contains(ESCAPED_NEWLINE) {
        Cow::Owned(separator.replace(ESCAPED_NEWLINE, "\n"))
    } else {
        Cow::Borrowed(separator)
    }
}
