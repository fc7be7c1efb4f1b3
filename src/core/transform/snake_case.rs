//! Field-name normalization
//!
//! Agentz report fields arrive in PascalCase/camelCase with the occasional
//! punctuation. Emitted records use snake_case:
//!
//! - `"UserName"` → `"user_name"`
//! - `"camelCaseKey"` → `"camel_case_key"`
//! - `"Weird--Key!!Name"` → `"weird_key_name"`
//!
//! Only ASCII letters, digits and `_` count as word characters. Everything
//! else is a separator, so the output only ever contains `[a-z0-9_]` and
//! normalizing a normalized key is a no-op.

/// The one report field whose casing doesn't follow the camel-case convention
const TOTAL_NUMBER_OF_SESSIONS: &str = "TotalNumberofSessions";

/// Convert a raw report field name to snake_case
///
/// # Examples
///
/// ```
/// use tap_agentz::core::transform::to_snake_case;
///
/// assert_eq!(to_snake_case("UserName"), "user_name");
/// assert_eq!(to_snake_case("TotalNumberofSessions"), "total_number_of_sessions");
/// ```
pub fn to_snake_case(key: &str) -> String {
    if key == TOTAL_NUMBER_OF_SESSIONS {
        return "total_number_of_sessions".to_string();
    }

    let spaced = collapse_separators(key);
    split_words(&spaced)
        .iter()
        .map(|word| word.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Replace every maximal run of non-word characters with one space
fn collapse_separators(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut in_run = false;
    for c in key.chars() {
        if is_word_char(c) {
            out.push(c);
            in_run = false;
        } else if !in_run {
            out.push(' ');
            in_run = true;
        }
    }
    out
}

/// Split on spaces and before every uppercase letter that follows a word character
///
/// Empty fragments are kept, so a leading or trailing separator still shows
/// up as a leading or trailing `_`.
fn split_words(spaced: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;

    for (i, c) in spaced.char_indices() {
        if c == ' ' {
            words.push(&spaced[start..i]);
            start = i + 1;
        } else if c.is_ascii_uppercase() && prev.is_some_and(is_word_char) {
            words.push(&spaced[start..i]);
            start = i;
        }
        prev = Some(c);
    }
    words.push(&spaced[start..]);
    words
}
