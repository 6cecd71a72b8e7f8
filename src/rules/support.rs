//! Supportive messaging for anxious readers.

/// Return `message` if any anxiety keyword occurs in `text`.
///
/// Keywords must be lowercased; the text is lowercased here. `None` means no
/// keyword was found, which callers must keep distinct from an empty message.
pub fn check_support(text: &str, keywords: &[String], message: &str) -> Option<String> {
    let lowered = text.to_lowercase();

    match crate::utils::find_substring(&lowered, keywords) {
        Some(keyword) => {
            tracing::debug!(keyword, "support keyword found");
            Some(message.to_string())
        }
        None => None,
    }
}
