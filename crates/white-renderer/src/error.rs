//! Renderer error types.

/// A per-line directive failure.
///
/// These never abort a compilation: the compiler renders the failing line's
/// position and message as an inline error block and moves on.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DirectiveError {
    /// A `key:[...]` list argument is missing its closing bracket.
    #[error("unterminated {keyword}:[...] list")]
    UnterminatedList { keyword: &'static str },
}
