//! Line-oriented directive compiler producing styled HTML.
//!
//! This crate implements the White language: each source line is a
//! directive (`title`, `table`, `form`, `var`, ...) or plain text, and a
//! [`Compiler`] session turns a whole document into HTML fragments plus a
//! synthetic-class stylesheet. [`document::render_page`] wraps the result
//! into a standalone page.
//!
//! # Architecture
//!
//! - [`Compiler`]: per-document session, dispatches lines to handlers and
//!   owns all mutable state (variables, open blocks, style registry).
//! - [`tokenizer`]: quote-aware comma splitting shared by table headers,
//!   row cells, list items, and select options.
//! - [`style`]: inline `key:value` attribute extraction and the `wsN`
//!   synthetic-class registry.
//! - [`theme`]: named color palette resolution.
//!
//! Per-line failures never abort a compilation; they render as inline
//! error blocks and are also reported as warnings on the result.
//!
//! # Example
//!
//! ```
//! use white_renderer::{Compiler, document};
//!
//! let source = "meta title=Demo\ntitle Welcome color:primary\nprint Hello";
//! let doc = Compiler::new().compile(source);
//! let page = document::render_page(&doc);
//! assert!(page.contains("<title>Demo</title>"));
//! ```

mod compiler;
pub mod document;
mod error;
mod form;
mod span;
pub mod style;
mod table;
pub mod theme;
pub mod tokenizer;
mod util;
mod vars;

pub use compiler::{CompiledDocument, Compiler};
pub use error::DirectiveError;
pub use style::{StyleAttrs, StyleKey, StyleSheet};
pub use vars::Variables;
