//! URL-safe slug generation.
//!
//! The slug doubles as the dedup key for imported exercises, so the output
//! must stay byte-for-byte stable for a given input.

/// Convert a display name to a URL-safe slug.
///
/// Lowercases the input, drops everything except ASCII word characters
/// (`[a-z0-9_]`), whitespace and hyphens, then turns each run of whitespace
/// and hyphens into a single `-`. Leading and trailing separators are
/// removed. An empty or all-punctuation input yields an empty slug.
///
/// ```
/// use workout_catalog::slugify;
///
/// assert_eq!(slugify("Push-Up (Wide Grip)"), "push-up-wide-grip");
/// assert_eq!(slugify("  Leg   Press  "), "leg-press");
/// ```
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut result = String::with_capacity(lowered.len());
    let mut pending_separator = false;

    for c in lowered.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            if pending_separator && !result.is_empty() {
                result.push('-');
            }
            pending_separator = false;
            result.push(c);
        } else if is_separator_space(c) || c == '-' {
            pending_separator = true;
        }
        // Anything else is stripped without acting as a separator.
    }

    result
}

/// ECMAScript `\s`: the WhiteSpace and LineTerminator sets. Differs from
/// `char::is_whitespace` on U+0085 (not a separator) and U+FEFF (separator).
fn is_separator_space(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}
