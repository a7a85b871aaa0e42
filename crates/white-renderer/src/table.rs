//! Table block building.
//!
//! A `table headers:[...]` directive opens a builder; `tablerow` lines append
//! rows; `endtable` (or document end) renders the accumulated block. Cells
//! and headers are stored exactly as the tokenizer produced them and only
//! stripped of wrapping quotes when rendered.

use std::fmt::Write;

use crate::style::{StyleAttrs, StyleSheet};
use crate::util::strip_quotes;

/// Accumulator for an open table block.
#[derive(Debug, Default)]
pub struct TableBuilder {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    attrs: StyleAttrs,
}

impl TableBuilder {
    /// Open a table with the given headers and the style attributes found
    /// on the opening line.
    #[must_use]
    pub fn new(headers: Vec<String>, attrs: StyleAttrs) -> Self {
        Self {
            headers,
            rows: Vec::new(),
            attrs,
        }
    }

    /// Append one row of raw cell strings.
    pub fn push_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    /// Render the table and consume the builder.
    ///
    /// `<thead>` is emitted only when headers were supplied, `<tbody>` only
    /// when at least one row exists. The class combines the fixed table
    /// class with the synthetic class minted for the captured attributes.
    #[must_use]
    pub fn render(self, sheet: &mut StyleSheet) -> String {
        let class = match sheet.class_name(&self.attrs) {
            Some(name) => format!("white-table {name}"),
            None => "white-table".to_owned(),
        };

        let mut html = format!("<table class=\"{class}\">\n");

        if !self.headers.is_empty() {
            html.push_str("    <thead>\n        <tr>\n");
            for header in &self.headers {
                writeln!(html, "            <th>{}</th>", strip_quotes(header)).unwrap();
            }
            html.push_str("        </tr>\n    </thead>\n");
        }

        if !self.rows.is_empty() {
            html.push_str("    <tbody>\n");
            for row in &self.rows {
                html.push_str("        <tr>\n");
                for cell in row {
                    writeln!(html, "            <td>{}</td>", strip_quotes(cell)).unwrap();
                }
                html.push_str("        </tr>\n");
            }
            html.push_str("    </tbody>\n");
        }

        html.push_str("</table>");
        html
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::style;

    #[test]
    fn test_render_headers_and_rows() {
        let mut sheet = StyleSheet::new();
        let mut table = TableBuilder::new(
            vec!["A".to_owned(), "B".to_owned()],
            StyleAttrs::default(),
        );
        table.push_row(vec!["1".to_owned(), "2".to_owned()]);
        table.push_row(vec!["3".to_owned(), "4".to_owned()]);

        let html = table.render(&mut sheet);
        assert_eq!(
            html,
            "<table class=\"white-table\">\n\
             \x20   <thead>\n\
             \x20       <tr>\n\
             \x20           <th>A</th>\n\
             \x20           <th>B</th>\n\
             \x20       </tr>\n\
             \x20   </thead>\n\
             \x20   <tbody>\n\
             \x20       <tr>\n\
             \x20           <td>1</td>\n\
             \x20           <td>2</td>\n\
             \x20       </tr>\n\
             \x20       <tr>\n\
             \x20           <td>3</td>\n\
             \x20           <td>4</td>\n\
             \x20       </tr>\n\
             \x20   </tbody>\n\
             </table>"
        );
    }

    #[test]
    fn test_render_without_headers_skips_thead() {
        let mut sheet = StyleSheet::new();
        let mut table = TableBuilder::new(Vec::new(), StyleAttrs::default());
        table.push_row(vec!["x".to_owned()]);

        let html = table.render(&mut sheet);
        assert!(!html.contains("<thead>"));
        assert!(html.contains("<tbody>"));
        assert!(html.contains("<td>x</td>"));
    }

    #[test]
    fn test_render_without_rows_skips_tbody() {
        let mut sheet = StyleSheet::new();
        let table = TableBuilder::new(vec!["A".to_owned()], StyleAttrs::default());

        let html = table.render(&mut sheet);
        assert!(html.contains("<thead>"));
        assert!(!html.contains("<tbody>"));
    }

    #[test]
    fn test_render_strips_wrapping_quotes_at_emission() {
        let mut sheet = StyleSheet::new();
        let mut table = TableBuilder::new(Vec::new(), StyleAttrs::default());
        table.push_row(vec!["\"quoted\"".to_owned()]);

        let html = table.render(&mut sheet);
        assert!(html.contains("<td>quoted</td>"));
    }

    #[test]
    fn test_render_with_style_attrs_mints_class() {
        let mut sheet = StyleSheet::new();
        let (_, attrs) = style::extract("width:500");
        let table = TableBuilder::new(vec!["A".to_owned()], attrs);

        let html = table.render(&mut sheet);
        assert!(html.starts_with("<table class=\"white-table ws1\">"));
        assert_eq!(sheet.rules().next(), Some(("ws1", "width: 500px")));
    }
}
