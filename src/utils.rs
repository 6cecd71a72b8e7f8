//! Common token helpers shared by the matching passes.
//!
//! Tokens are whitespace-separated runs of the raw input. The punctuation set
//! is the ASCII punctuation set (`!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~`); anything
//! outside it, including typographic quotes and dashes, is part of the word.

/// Returns true if `c` belongs to the punctuation set stripped from token edges.
pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
}

/// Strips leading and trailing punctuation from a raw token.
///
/// # Examples
///
/// ```
/// use truthpulse::utils::strip_punctuation;
///
/// assert_eq!(strip_punctuation("\"Crisis!\""), "Crisis");
/// assert_eq!(strip_punctuation("don't"), "don't");
/// assert_eq!(strip_punctuation("?!"), "");
/// ```
pub fn strip_punctuation(token: &str) -> &str {
    token.trim_matches(is_punctuation)
}

/// Splits a raw token into `(prefix, core, suffix)` where prefix and suffix are
/// the punctuation runs around the core word.
///
/// A token made only of punctuation yields an empty core with the whole token
/// as prefix.
pub fn split_affixes(token: &str) -> (&str, &str, &str) {
    let core_start = token.len() - token.trim_start_matches(is_punctuation).len();
    let (prefix, rest) = token.split_at(core_start);
    let core = rest.trim_end_matches(is_punctuation);
    let suffix = &rest[core.len()..];
    (prefix, core, suffix)
}

/// Lowercased cores of every whitespace token, with pure-punctuation tokens dropped.
pub fn clean_tokens(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(strip_punctuation)
        .filter(|core| !core.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Title case: an uppercase first letter followed by no uppercase letters.
pub fn is_title_case(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => chars.all(|c| !c.is_uppercase()),
        _ => false,
    }
}

/// Uppercases the first character, leaving the rest untouched.
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Returns the first needle that occurs in `haystack`.
///
/// Both sides are expected to be lowercased by the caller already; matching is
/// plain substring containment, not whole-word.
pub fn find_substring<'a, I>(haystack: &str, needles: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a String>,
{
    needles
        .into_iter()
        .map(String::as_str)
        .find(|needle| haystack.contains(needle))
}
