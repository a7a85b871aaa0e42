//! Per-document compilation session and directive dispatch.
//!
//! A [`Compiler`] owns all mutable state for one document: the style-rule
//! registry and class counter, variable bindings, metadata, the form
//! counter, and the currently open block. Each source line is classified by
//! prefix/shape and routed to a handler; handlers emit HTML fragments or
//! mutate session state. Compiling a document consumes the session, so two
//! documents never share counters or bindings.

use std::collections::HashMap;
use std::mem;

use crate::error::DirectiveError;
use crate::form::{self, FormBuilder};
use crate::span;
use crate::style::{self, StyleSheet};
use crate::table::TableBuilder;
use crate::theme;
use crate::tokenizer::split_list;
use crate::util::{bracket_list, scan_arg, strip_quotes};
use crate::vars::Variables;

/// Title used when no `meta title=...` directive is present.
const DEFAULT_TITLE: &str = "White Language Output";

/// The currently open multi-line block.
///
/// At most one block is open at any time; opening a new block silently
/// discards an unflushed one.
#[derive(Debug, Default)]
enum Block {
    #[default]
    Idle,
    Table(TableBuilder),
    Form(FormBuilder),
}

/// Result of compiling one document.
///
/// This is the core's whole output contract: the surrounding layer wraps
/// the fragments, metadata, and style registry into a full HTML page.
#[derive(Debug)]
pub struct CompiledDocument {
    /// Emitted HTML fragments, in document order.
    pub fragments: Vec<String>,
    /// `meta key=value` pairs; always contains a title.
    pub metadata: HashMap<String, String>,
    /// Synthetic class registry for the document's `<style>` block.
    pub styles: StyleSheet,
    /// Per-line failures, one message per failing line.
    pub warnings: Vec<String>,
}

impl CompiledDocument {
    /// The document title from metadata.
    #[must_use]
    pub fn title(&self) -> &str {
        self.metadata
            .get("title")
            .map_or(DEFAULT_TITLE, String::as_str)
    }
}

/// One document compilation session.
#[derive(Debug, Default)]
pub struct Compiler {
    styles: StyleSheet,
    vars: Variables,
    metadata: HashMap<String, String>,
    block: Block,
    form_counter: usize,
    fragments: Vec<String>,
    warnings: Vec<String>,
}

impl Compiler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile a complete source document, consuming the session.
    ///
    /// Metadata lines are collected in a first pass so the title is known
    /// regardless of where `meta` directives appear. Per-line failures
    /// become inline error blocks and never abort the run; any block still
    /// open at the end is flushed before returning.
    #[must_use]
    pub fn compile(mut self, source: &str) -> CompiledDocument {
        for line in source.lines() {
            let line = line.trim();
            if let Some(rest) = line.strip_prefix("meta ") {
                self.handle_meta(rest);
            }
        }

        for (idx, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.is_empty()
                || line.starts_with("//")
                || line.starts_with('#')
                || line.starts_with("meta ")
            {
                continue;
            }

            match self.dispatch(line) {
                Ok(html) => {
                    if !html.is_empty() {
                        self.fragments.push(html);
                    }
                }
                Err(err) => {
                    let line_num = idx + 1;
                    self.warnings.push(format!("line {line_num}: {err}"));
                    self.fragments.push(format!(
                        "<div style=\"background: #f8d7da; color: #721c24; \
                         padding: 10px; margin: 5px 0; border-radius: 5px;\">\
                         Error on line {line_num}: {err}</div>"
                    ));
                }
            }
        }

        // Auto-flush whatever block is still open.
        match mem::take(&mut self.block) {
            Block::Idle => {}
            Block::Table(table) => {
                let html = table.render(&mut self.styles);
                self.fragments.push(html);
            }
            Block::Form(form) => {
                let html = form.render(&mut self.styles);
                self.fragments.push(html);
            }
        }

        CompiledDocument {
            fragments: self.fragments,
            metadata: self.metadata,
            styles: self.styles,
            warnings: self.warnings,
        }
    }

    /// Route one trimmed, non-empty line to its handler.
    ///
    /// First match wins: block directives, then the concatenation-expression
    /// shape (which must run before the single `span` handler, since a lone
    /// styled span also contains `span "`), then single-element prefixes,
    /// then the plain-text fallback.
    fn dispatch(&mut self, line: &str) -> Result<String, DirectiveError> {
        if let Some(rest) = line.strip_prefix("table ") {
            return self.handle_table(rest);
        }
        if let Some(rest) = line.strip_prefix("tablerow ") {
            return Ok(self.handle_tablerow(rest));
        }
        if line == "endtable" {
            return Ok(self.close_table());
        }
        if let Some(rest) = line.strip_prefix("form ") {
            return Ok(self.handle_form(rest));
        }
        if let Some(rest) = line.strip_prefix("input ") {
            return Ok(self.handle_form_child(form::input_element(rest)));
        }
        if let Some(rest) = line.strip_prefix("select ") {
            return Ok(self.handle_form_child(form::select_element(rest)?));
        }
        if let Some(rest) = line.strip_prefix("textarea ") {
            return Ok(self.handle_form_child(form::textarea_element(rest)));
        }
        if line == "endform" {
            return Ok(self.close_form());
        }
        if span::is_expression(line) {
            return Ok(format!("<p>{}</p>", span::evaluate(line, &self.vars)));
        }
        if let Some(rest) = line.strip_prefix("image ") {
            return Ok(Self::handle_image(rest));
        }
        if let Some(rest) = line.strip_prefix("span ") {
            return Ok(self.handle_span(rest));
        }
        if let Some(rest) = line.strip_prefix("title ") {
            return Ok(self.styled_element(rest, "h1"));
        }
        if let Some(rest) = line.strip_prefix("button ") {
            return Ok(self.handle_button(rest));
        }
        if let Some(rest) = line.strip_prefix("print ") {
            return Ok(self.styled_element(rest, "p"));
        }
        if let Some(rest) = line.strip_prefix("header ") {
            return Ok(self.styled_element(rest, "h2"));
        }
        if let Some(rest) = line.strip_prefix("paragraph ") {
            return Ok(self.styled_element(rest, "p"));
        }
        if let Some(rest) = line.strip_prefix("link ") {
            return Ok(self.handle_link(rest));
        }
        if let Some(rest) = line.strip_prefix("list ") {
            return Ok(self.handle_list(rest));
        }
        if let Some(rest) = line.strip_prefix("var ") {
            return Ok(self.handle_var(rest));
        }
        if let Some(rest) = line.strip_prefix("code ") {
            return Ok(self.handle_code(rest));
        }
        if let Some(rest) = line.strip_prefix("div ") {
            return Ok(self.styled_element(rest, "div"));
        }
        if line == "br" {
            return Ok("<br>".to_owned());
        }
        if line == "hr" {
            return Ok("<hr>".to_owned());
        }

        // Plain text fallback.
        Ok(format!("<p>{}</p>", self.vars.substitute(line)))
    }

    fn handle_meta(&mut self, rest: &str) {
        if let Some((key, value)) = rest.split_once('=') {
            self.metadata
                .insert(key.trim().to_owned(), strip_quotes(value).to_owned());
        }
    }

    fn handle_table(&mut self, rest: &str) -> Result<String, DirectiveError> {
        let (headers, remainder) = match bracket_list(rest, "headers")? {
            Some((inner, remainder)) => (split_list(inner, ','), remainder),
            None => (Vec::new(), rest.to_owned()),
        };
        let (_, attrs) = style::extract(&remainder);

        // Opening while a block is already open replaces it unflushed.
        self.block = Block::Table(TableBuilder::new(headers, attrs));
        Ok(String::new())
    }

    fn handle_tablerow(&mut self, rest: &str) -> String {
        if let Block::Table(table) = &mut self.block {
            table.push_row(split_list(rest, ','));
        }
        String::new()
    }

    fn close_table(&mut self) -> String {
        match mem::take(&mut self.block) {
            Block::Table(table) => table.render(&mut self.styles),
            other => {
                self.block = other;
                String::new()
            }
        }
    }

    fn handle_form(&mut self, rest: &str) -> String {
        let (_, attrs) = style::extract(rest);
        self.form_counter += 1;
        self.block = Block::Form(FormBuilder::open(rest, attrs, self.form_counter));
        String::new()
    }

    /// Append a rendered control to the open form, or drop it when no form
    /// is open.
    fn handle_form_child(&mut self, element_html: String) -> String {
        if let Block::Form(form) = &mut self.block {
            form.push_child(element_html);
        }
        String::new()
    }

    fn close_form(&mut self) -> String {
        match mem::take(&mut self.block) {
            Block::Form(form) => form.render(&mut self.styles),
            other => {
                self.block = other;
                String::new()
            }
        }
    }

    /// Shared path for the simple text-bearing elements (`title`, `header`,
    /// `paragraph`/`print`, `div`): unwrap a leading quoted run, substitute
    /// variables, pull out style attributes, wrap in the tag.
    fn styled_element(&mut self, rest: &str, tag: &str) -> String {
        let content = self.vars.substitute(&unwrap_quoted(rest));
        let (text, attrs) = style::extract(&content);
        let class_attr = self.styles.class_attribute(&attrs);
        format!("<{tag}{class_attr}>{text}</{tag}>")
    }

    fn handle_button(&mut self, rest: &str) -> String {
        let content = self.vars.substitute(&unwrap_quoted(rest));
        let (text, attrs) = style::extract(&content);

        let mut button_type = "button";
        let mut text = text;
        for candidate in ["submit", "reset", "button"] {
            let token = format!("type:{candidate}");
            if text.contains(&token) {
                button_type = candidate;
                text = text.replace(&token, "").trim().to_owned();
                break;
            }
        }

        let class_attr = self.styles.class_attribute(&attrs);
        let html = format!("<button type=\"{button_type}\"{class_attr}>{text}</button>");

        // Context sensitivity: inside an open form the button becomes a
        // child fragment instead of a standalone element.
        if let Block::Form(form) = &mut self.block {
            form.push_child(html);
            String::new()
        } else {
            html
        }
    }

    fn handle_link(&mut self, rest: &str) -> String {
        let content = self.vars.substitute(&unwrap_quoted(rest));
        let (text, attrs) = style::extract(&content);

        let Some((label, url)) = text.split_once(" to ") else {
            return String::new();
        };
        let class_attr = self.styles.class_attribute(&attrs);
        format!(
            "<a href=\"{}\"{class_attr}>{}</a>",
            strip_quotes(url),
            strip_quotes(label)
        )
    }

    fn handle_list(&mut self, rest: &str) -> String {
        let content = self.vars.substitute(&unwrap_quoted(rest));
        let (text, attrs) = style::extract(&content);
        let class_attr = self.styles.class_attribute(&attrs);

        let mut html = format!("<ul{class_attr}>\n");
        for item in split_list(&text, ',') {
            html.push_str(&format!("    <li>{}</li>\n", strip_quotes(&item)));
        }
        html.push_str("</ul>");
        html
    }

    fn handle_var(&mut self, rest: &str) -> String {
        let Some((name, value)) = rest.split_once('=') else {
            return String::new();
        };
        let name = name.trim().to_owned();
        let value = strip_quotes(value).to_owned();
        let html = format!(
            "<div class=\"variable\"><strong>{name}</strong> = <em>{value}</em></div>"
        );
        self.vars.set(name, value);
        html
    }

    fn handle_code(&mut self, rest: &str) -> String {
        let content = self.vars.substitute(&unwrap_quoted(rest));
        let (text, attrs) = style::extract(&content);
        // Literal \n escapes become real line breaks inside the block.
        let text = text.replace("\\n", "\n");
        let class_attr = self.styles.class_attribute(&attrs);
        format!("<pre{class_attr}><code>{text}</code></pre>")
    }

    fn handle_span(&mut self, rest: &str) -> String {
        let text = match rest.trim_start().strip_prefix('"') {
            Some(inner) => inner.find('"').map_or("", |end| &inner[..end]),
            None => "",
        };
        let text = self.vars.substitute(text);

        let class_attr = scan_arg(rest, "class:")
            .map(|class| format!(" class=\"{class}\""))
            .unwrap_or_default();
        let style_attr = scan_arg(rest, "color:")
            .map(|color| format!(" style=\"color:{};\"", theme::resolve(&color)))
            .unwrap_or_default();

        format!("<span{class_attr}{style_attr}>{text}</span>")
    }

    fn handle_image(rest: &str) -> String {
        let src = match rest.trim_start().strip_prefix('"') {
            Some(inner) => inner.find('"').map_or("", |end| &inner[..end]),
            None => "",
        };

        let alt = rest
            .find("alt:\"")
            .and_then(|found| {
                let start = found + 5;
                rest[start..].find('"').map(|end| &rest[start..start + end])
            })
            .unwrap_or("");

        let width = scan_digits(rest, "width:");
        let radius = scan_digits(rest, "radius:");

        let width_attr = width
            .map(|w| format!(" width=\"{w}\""))
            .unwrap_or_default();
        let style_attr = radius
            .map(|r| format!(" style=\"border-radius:{r}px;\""))
            .unwrap_or_default();

        format!("<img src=\"{src}\" alt=\"{alt}\"{width_attr}{style_attr}>")
    }
}

/// Unwrap a leading quoted run from directive content.
///
/// `"hello world" color:red` becomes `hello world color:red`; content that
/// does not start with a terminated quote is returned as-is.
fn unwrap_quoted(content: &str) -> String {
    let content = content.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = content.strip_prefix(quote) {
            if let Some(end) = inner.find(quote) {
                let quoted = &inner[..end];
                let remaining = inner[end + 1..].trim();
                return if remaining.is_empty() {
                    quoted.to_owned()
                } else {
                    format!("{quoted} {remaining}")
                };
            }
        }
    }
    content.to_owned()
}

/// Scan for `keyword` and take the run of digits after it.
fn scan_digits(content: &str, keyword: &str) -> Option<String> {
    let start = content.find(keyword)? + keyword.len();
    let digits: String = content[start..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    if digits.is_empty() { None } else { Some(digits) }
}
