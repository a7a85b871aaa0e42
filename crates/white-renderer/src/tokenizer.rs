//! Quote-aware list splitting.
//!
//! Comma lists appear in several directives (`table headers:[...]`,
//! `tablerow`, `select options:[...]`, `list`) and all share one splitting
//! rule: a separator inside a quoted substring does not split. The scanner
//! is deliberately small and its edge cases are part of the language:
//! an unterminated quote swallows the rest of the input into one segment,
//! and only the quote character that opened a quoted run can close it.

/// Scanner state while splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unquoted,
    /// Inside a quoted run; holds the quote character that opened it.
    Quoted(char),
}

/// Split `input` on `separator`, honoring single- and double-quoted runs.
///
/// Segments are trimmed; segments that are empty after trimming are dropped.
/// The delimiting quote characters themselves are consumed and do not appear
/// in the output.
///
/// # Example
///
/// ```
/// use white_renderer::tokenizer::split_list;
///
/// let segments = split_list(r#"a,"b,c",d"#, ',');
/// assert_eq!(segments, vec!["a", "b,c", "d"]);
/// ```
#[must_use]
pub fn split_list(input: &str, separator: char) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut state = State::Unquoted;

    for ch in input.chars() {
        match state {
            State::Unquoted => {
                if ch == '"' || ch == '\'' {
                    state = State::Quoted(ch);
                } else if ch == separator {
                    flush(&mut segments, &mut current);
                } else {
                    current.push(ch);
                }
            }
            State::Quoted(quote) => {
                if ch == quote {
                    state = State::Unquoted;
                } else {
                    current.push(ch);
                }
            }
        }
    }

    flush(&mut segments, &mut current);
    segments
}

/// Close the current segment, dropping it if blank after trimming.
fn flush(segments: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        segments.push(trimmed.to_owned());
    }
    current.clear();
}
