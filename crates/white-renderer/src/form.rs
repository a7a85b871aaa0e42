//! Form block building.
//!
//! A `form` directive opens a builder; `input`, `select` and `textarea`
//! lines (and `button` lines while the form is open) render their own HTML
//! and are appended as children instead of being emitted inline. `endform`
//! (or document end) renders the wrapper around the children in order.

use std::fmt::Write;

use crate::error::DirectiveError;
use crate::style::{StyleAttrs, StyleSheet};
use crate::tokenizer::split_list;
use crate::util::{bracket_list, extract_label, scan_arg};

/// Accumulator for an open form block.
#[derive(Debug)]
pub struct FormBuilder {
    id: String,
    /// Captured from `name:`; defaults to the generated id. Form metadata
    /// only, never rendered as an attribute.
    #[allow(dead_code)]
    name: String,
    action: String,
    method: String,
    attrs: StyleAttrs,
    children: Vec<String>,
}

impl FormBuilder {
    /// Open a form from the text after the `form` keyword.
    ///
    /// `counter` is the session's form counter, already incremented for this
    /// form; it feeds the generated `form_<N>` identifier. Missing arguments
    /// degrade: no action attribute, method `POST`, name `form_<N>`.
    #[must_use]
    pub fn open(content: &str, attrs: StyleAttrs, counter: usize) -> Self {
        let id = format!("form_{counter}");
        Self {
            name: scan_arg(content, "name:").unwrap_or_else(|| id.clone()),
            action: scan_arg(content, "action:").unwrap_or_default(),
            method: scan_arg(content, "method:").unwrap_or_else(|| "POST".to_owned()),
            id,
            attrs,
            children: Vec::new(),
        }
    }

    /// Append an already-rendered child element.
    pub fn push_child(&mut self, element_html: String) {
        self.children.push(element_html);
    }

    /// Render the form wrapper around its children and consume the builder.
    #[must_use]
    pub fn render(self, sheet: &mut StyleSheet) -> String {
        let class = match sheet.class_name(&self.attrs) {
            Some(name) => format!("white-form {name}"),
            None => "white-form".to_owned(),
        };
        let action = if self.action.is_empty() {
            String::new()
        } else {
            format!(" action=\"{}\"", self.action)
        };

        let mut html = format!(
            "<form id=\"{}\"{action} method=\"{}\" class=\"{class}\">\n",
            self.id, self.method
        );
        for child in &self.children {
            writeln!(html, "    {child}").unwrap();
        }
        html.push_str("</form>");
        html
    }
}

/// Render an `input` child element from the text after the keyword.
///
/// Shape: `input "Label" [type:T] [name:N] [required]`. The `required`
/// attribute is present whenever the literal word appears anywhere in the
/// argument text.
#[must_use]
pub fn input_element(content: &str) -> String {
    let (label, rest) = extract_label(content);
    let input_type = scan_arg(rest, "type:").unwrap_or_else(|| "text".to_owned());
    let name = scan_arg(rest, "name:").unwrap_or_default();
    let required = required_attr(rest);

    format!(
        "<div class=\"form-group\"><label for=\"{name}\">{label}</label>\
         <input type=\"{input_type}\" id=\"{name}\" name=\"{name}\"{required} \
         class=\"form-control\"></div>"
    )
}

/// Render a `select` child element from the text after the keyword.
///
/// Shape: `select "Label" name:N options:[a,b,...] [required]`. Options are
/// split with the quote-aware tokenizer. An unterminated options list is a
/// directive error.
pub fn select_element(content: &str) -> Result<String, DirectiveError> {
    let (label, rest) = extract_label(content);
    let name = scan_arg(rest, "name:").unwrap_or_default();
    let options = match bracket_list(rest, "options")? {
        Some((inner, _)) => split_list(inner, ','),
        None => Vec::new(),
    };
    let required = required_attr(rest);

    let mut html = format!(
        "<div class=\"form-group\"><label for=\"{name}\">{label}</label>\n\
         <select id=\"{name}\" name=\"{name}\"{required} class=\"form-control\">\n\
         <option value=\"\">Choose...</option>\n"
    );
    for option in &options {
        writeln!(html, "<option value=\"{option}\">{option}</option>").unwrap();
    }
    html.push_str("</select></div>");
    Ok(html)
}

/// Render a `textarea` child element from the text after the keyword.
///
/// Shape: `textarea "Label" [name:N] [rows:R]`; rows default to 4.
#[must_use]
pub fn textarea_element(content: &str) -> String {
    let (label, rest) = extract_label(content);
    let name = scan_arg(rest, "name:").unwrap_or_default();
    let rows = scan_arg(rest, "rows:").unwrap_or_else(|| "4".to_owned());

    format!(
        "<div class=\"form-group\"><label for=\"{name}\">{label}</label>\
         <textarea id=\"{name}\" name=\"{name}\" rows=\"{rows}\" \
         class=\"form-control\"></textarea></div>"
    )
}

fn required_attr(content: &str) -> &'static str {
    if content.contains("required") {
        " required"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::style;

    #[test]
    fn test_open_defaults() {
        let form = FormBuilder::open("", StyleAttrs::default(), 1);
        assert_eq!(form.id, "form_1");
        assert_eq!(form.name, "form_1");
        assert_eq!(form.method, "POST");
        assert_eq!(form.action, "");
    }

    #[test]
    fn test_open_with_arguments() {
        let form = FormBuilder::open(
            "action:/submit method:GET name:contact",
            StyleAttrs::default(),
            3,
        );
        assert_eq!(form.id, "form_3");
        assert_eq!(form.name, "contact");
        assert_eq!(form.method, "GET");
        assert_eq!(form.action, "/submit");
    }

    #[test]
    fn test_render_wrapper() {
        let mut sheet = StyleSheet::new();
        let mut form = FormBuilder::open("action:/go", StyleAttrs::default(), 1);
        form.push_child("<input>".to_owned());

        assert_eq!(
            form.render(&mut sheet),
            "<form id=\"form_1\" action=\"/go\" method=\"POST\" class=\"white-form\">\n\
             \x20   <input>\n\
             </form>"
        );
    }

    #[test]
    fn test_render_omits_empty_action() {
        let mut sheet = StyleSheet::new();
        let form = FormBuilder::open("", StyleAttrs::default(), 1);
        let html = form.render(&mut sheet);
        assert!(!html.contains("action="));
    }

    #[test]
    fn test_render_with_style_attrs() {
        let mut sheet = StyleSheet::new();
        let (_, attrs) = style::extract("bg:light");
        let form = FormBuilder::open("", attrs, 1);
        let html = form.render(&mut sheet);
        assert!(html.contains("class=\"white-form ws1\""));
    }

    #[test]
    fn test_input_element() {
        let html = input_element(r#""Email" type:email name:email required"#);
        assert_eq!(
            html,
            "<div class=\"form-group\"><label for=\"email\">Email</label>\
             <input type=\"email\" id=\"email\" name=\"email\" required \
             class=\"form-control\"></div>"
        );
    }

    #[test]
    fn test_input_element_defaults() {
        let html = input_element(r#""Name""#);
        assert!(html.contains("type=\"text\""));
        assert!(html.contains("name=\"\""));
        assert!(!html.contains(" required"));
    }

    #[test]
    fn test_select_element() {
        let html = select_element(r#""Country" name:country options:[Egypt,France]"#).unwrap();
        assert!(html.contains("<label for=\"country\">Country</label>"));
        assert!(html.contains("<option value=\"\">Choose...</option>"));
        assert!(html.contains("<option value=\"Egypt\">Egypt</option>"));
        assert!(html.contains("<option value=\"France\">France</option>"));
    }

    #[test]
    fn test_select_element_quoted_option_keeps_comma() {
        let html = select_element(r#""C" name:c options:["a,b",d]"#).unwrap();
        assert!(html.contains("<option value=\"a,b\">a,b</option>"));
        assert!(html.contains("<option value=\"d\">d</option>"));
    }

    #[test]
    fn test_select_element_unterminated_options() {
        let err = select_element(r#""C" name:c options:[a,b"#).unwrap_err();
        assert_eq!(err, DirectiveError::UnterminatedList { keyword: "options" });
    }

    #[test]
    fn test_textarea_element() {
        let html = textarea_element(r#""Message" name:msg rows:6"#);
        assert!(html.contains("rows=\"6\""));
        assert!(html.contains("<label for=\"msg\">Message</label>"));
    }

    #[test]
    fn test_textarea_rows_default() {
        let html = textarea_element(r#""Message" name:msg"#);
        assert!(html.contains("rows=\"4\""));
    }
}
