//! Style-attribute extraction and synthetic class generation.
//!
//! Directives may carry inline `key:value` style tokens anywhere in their
//! trailing text (`title Welcome color:primary size:32`). Extraction pulls
//! those tokens out of the text, normalizes each value to a CSS declaration,
//! and mints a synthetic class (`ws1`, `ws2`, ...) carrying the combined rule
//! set. The class/rule registry lives for one document compilation and is
//! flushed into the document's `<style>` block at assembly time.
//!
//! Matching is an ordered table of keys rather than patterns: for each key
//! in table order, the first `key:value` occurrence wins and every occurrence
//! is removed from the text.

use std::fmt::Write;

use crate::theme;
use crate::util::collapse_whitespace;

/// The fixed style-attribute vocabulary, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleKey {
    Color,
    Size,
    Bg,
    Width,
    Height,
    Margin,
    Padding,
    Border,
    Font,
    Align,
    Radius,
    Weight,
    Shadow,
    Opacity,
}

impl StyleKey {
    /// All keys, in the order declarations are emitted.
    pub const ALL: [Self; 14] = [
        Self::Color,
        Self::Size,
        Self::Bg,
        Self::Width,
        Self::Height,
        Self::Margin,
        Self::Padding,
        Self::Border,
        Self::Font,
        Self::Align,
        Self::Radius,
        Self::Weight,
        Self::Shadow,
        Self::Opacity,
    ];

    /// The token keyword as written in source.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Size => "size",
            Self::Bg => "bg",
            Self::Width => "width",
            Self::Height => "height",
            Self::Margin => "margin",
            Self::Padding => "padding",
            Self::Border => "border",
            Self::Font => "font",
            Self::Align => "align",
            Self::Radius => "radius",
            Self::Weight => "weight",
            Self::Shadow => "shadow",
            Self::Opacity => "opacity",
        }
    }

    /// Convert a raw attribute value into CSS declarations.
    ///
    /// Most keys yield exactly one declaration; `margin:center` yields two.
    fn to_css(self, value: &str) -> Vec<String> {
        match self {
            Self::Color => vec![format!("color: {}", theme::resolve(value))],
            Self::Size => vec![format!("font-size: {}", px(value))],
            Self::Bg => vec![format!("background-color: {}", theme::resolve(value))],
            Self::Width => vec![format!("width: {}", px(value))],
            Self::Height => vec![format!("height: {}", px(value))],
            Self::Margin => match value {
                "auto" => vec!["margin: 0 auto".to_owned()],
                "center" => vec!["margin: 0 auto".to_owned(), "display: block".to_owned()],
                _ => vec![format!("margin: {}", px(value))],
            },
            Self::Padding => vec![format!("padding: {}", px(value))],
            Self::Border => vec![format!("border: 1px solid {}", theme::resolve(value))],
            Self::Font => vec![format!("font-family: {value}")],
            Self::Align => vec![format!("text-align: {value}")],
            Self::Radius => vec![format!("border-radius: {}", px(value))],
            Self::Weight => vec![format!("font-weight: {value}")],
            Self::Shadow => vec![format!("box-shadow: 0 2px 10px rgba(0,0,0,{value})")],
            Self::Opacity => vec![format!("opacity: {value}")],
        }
    }
}

/// Append `px` to bare digit values; pass everything else through.
fn px(value: &str) -> String {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
        format!("{value}px")
    } else {
        value.to_owned()
    }
}

/// Style attributes extracted from one directive line.
///
/// Entries keep table order, so CSS output is deterministic regardless of
/// the order tokens appeared in source. Built fresh per directive; never
/// outlives the call that materialized its class.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct StyleAttrs {
    entries: Vec<(StyleKey, String)>,
}

impl StyleAttrs {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the raw value recorded for a key.
    #[must_use]
    pub fn get(&self, key: StyleKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Render all entries as CSS declarations joined with `"; "`.
    fn to_declarations(&self) -> String {
        let mut declarations = Vec::new();
        for (key, value) in &self.entries {
            declarations.extend(key.to_css(value));
        }
        declarations.join("; ")
    }
}

/// Extract style attributes from free text.
///
/// Returns the text with every matched token removed (whitespace collapsed)
/// and the extracted attributes. The first occurrence per key wins; later
/// duplicates are removed from the text but ignored for the value.
///
/// Running the extractor over already-stripped text is a no-op.
#[must_use]
pub fn extract(content: &str) -> (String, StyleAttrs) {
    let mut attrs = StyleAttrs::default();
    // Byte ranges of matched tokens, removed from the text afterwards.
    let mut removed: Vec<(usize, usize)> = Vec::new();

    for key in StyleKey::ALL {
        let keyword = key.as_str();
        let mut recorded = false;

        let mut search_from = 0;
        while let Some(found) = content[search_from..].find(keyword) {
            let start = search_from + found;
            let after_key = start + keyword.len();
            search_from = after_key;

            // The keyword must be immediately followed by a colon.
            if !content[after_key..].starts_with(':') {
                continue;
            }

            let value_start = after_key + 1;
            let value_end = content[value_start..]
                .find(|c: char| c.is_whitespace() || c == ';')
                .map_or(content.len(), |i| value_start + i);
            let value = &content[value_start..value_end];

            // A bare `key:` with no value is not a token.
            if value.is_empty() {
                continue;
            }

            if !recorded {
                attrs.entries.push((key, value.to_owned()));
                recorded = true;
            }
            removed.push((start, value_end));
            search_from = value_end;
        }
    }

    (strip_ranges(content, &mut removed), attrs)
}

/// Remove the given byte ranges from `content` and collapse whitespace.
fn strip_ranges(content: &str, ranges: &mut Vec<(usize, usize)>) -> String {
    ranges.sort_unstable();

    let mut kept = String::with_capacity(content.len());
    let mut cursor = 0;
    for &(start, end) in ranges.iter() {
        // Ranges from overlapping keys (a token inside another token's
        // value) collapse into the earlier removal.
        if start >= cursor {
            kept.push_str(&content[cursor..start]);
        }
        cursor = cursor.max(end);
    }
    kept.push_str(&content[cursor..]);

    collapse_whitespace(&kept)
}

/// Session-scoped registry of synthetic classes and their CSS rules.
///
/// Class names are assigned monotonically (`ws1`, `ws2`, ...) and never
/// reused within one document compilation.
#[derive(Debug, Default)]
pub struct StyleSheet {
    rules: Vec<(String, String)>,
    counter: usize,
}

impl StyleSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a class for the given attributes and return the HTML
    /// `class="..."` attribute text (with a leading space).
    ///
    /// Empty attribute sets yield an empty string and mint nothing.
    pub fn class_attribute(&mut self, attrs: &StyleAttrs) -> String {
        match self.class_name(attrs) {
            Some(name) => format!(r#" class="{name}""#),
            None => String::new(),
        }
    }

    /// Mint a class for the given attributes and return its bare name.
    pub fn class_name(&mut self, attrs: &StyleAttrs) -> Option<String> {
        if attrs.is_empty() {
            return None;
        }

        self.counter += 1;
        let name = format!("ws{}", self.counter);
        self.rules.push((name.clone(), attrs.to_declarations()));
        Some(name)
    }

    /// Iterate registered `(class name, declarations)` pairs in mint order.
    pub fn rules(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules.iter().map(|(n, r)| (n.as_str(), r.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Render the registry as CSS rule text for a `<style>` block.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        for (name, declarations) in self.rules() {
            writeln!(css, "        .{name} {{ {declarations}; }}").unwrap();
        }
        css
    }
}
