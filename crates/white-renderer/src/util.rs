//! Small text helpers shared across directive handlers.

use crate::error::DirectiveError;

/// Trim a value and strip wrapping single or double quote characters.
///
/// Used at emission time for table cells, list items, and link parts, where
/// the source may carry quotes the tokenizer did not consume.
pub(crate) fn strip_quotes(s: &str) -> &str {
    s.trim().trim_matches(|c| c == '"' || c == '\'')
}

/// Collapse runs of whitespace to single spaces and trim the ends.
pub(crate) fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Scan `content` for `keyword:value` and return the value.
///
/// The value runs until the next whitespace. Used for the plain word-shaped
/// arguments of `form`, `input`, `select` and `textarea` (`action:`,
/// `method:`, `name:`, `type:`, `rows:`).
pub(crate) fn scan_arg(content: &str, keyword: &str) -> Option<String> {
    let start = content.find(keyword)? + keyword.len();
    let value: String = content[start..]
        .chars()
        .take_while(|c| !c.is_whitespace())
        .collect();
    if value.is_empty() { None } else { Some(value) }
}

/// Extract the inner text of a `keyword:[...]` list argument.
///
/// Returns the inner text and the content with the whole list argument
/// removed; `Ok(None)` when the keyword is absent (callers degrade to their
/// documented default) and an error when the closing bracket is missing.
pub(crate) fn bracket_list<'a>(
    content: &'a str,
    keyword: &'static str,
) -> Result<Option<(&'a str, String)>, DirectiveError> {
    let Some(found) = content.find(&format!("{keyword}:[")) else {
        return Ok(None);
    };
    let start = found + keyword.len() + 2;
    match content[start..].find(']') {
        Some(end) => {
            let inner = &content[start..start + end];
            let remainder = format!("{}{}", &content[..found], &content[start + end + 1..]);
            Ok(Some((inner, remainder)))
        }
        None => Err(DirectiveError::UnterminatedList { keyword }),
    }
}

/// Extract a leading double-quoted label.
///
/// Returns the label and the rest of the content (trimmed). Content that
/// does not start with a quote yields an empty label.
pub(crate) fn extract_label(content: &str) -> (String, &str) {
    let Some(inner) = content.strip_prefix('"') else {
        return (String::new(), content);
    };
    match inner.find('"') {
        Some(end) => (inner[..end].to_owned(), inner[end + 1..].trim()),
        None => (String::new(), content),
    }
}
