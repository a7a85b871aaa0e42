//! Span-concatenation expressions.
//!
//! Lines like `"Hello " + span "World" color:red + "!"` mix plain text with
//! styled inline spans. The grammar is deliberately tiny: terms are joined
//! with `+`, and a `span` term may carry `color:` and `weight:` attributes
//! only (the full style-attribute vocabulary does not apply here). Spans get
//! an inline `style` attribute rather than a synthetic class.

use crate::theme;
use crate::vars::Variables;

/// One term of a concatenation expression, in source order.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Term {
    /// Plain text, quotes stripped.
    Literal(String),
    /// A styled inline span.
    Span {
        text: String,
        color: Option<String>,
        weight: Option<String>,
    },
}

/// Decide whether a line is a concatenation expression.
///
/// True when the line contains `span ` together with either a `+` or a
/// quoted span body. This check runs before the single-span directive:
/// a lone styled span is also an expression of one term.
#[must_use]
pub(crate) fn is_expression(line: &str) -> bool {
    line.contains("span ") && (line.contains('+') || line.contains("span \""))
}

/// Parse a concatenation expression into ordered terms.
///
/// The scanner walks raw characters: `span ` opens a span term (closing any
/// pending text as a literal), a bare `+` closes the pending text, and
/// everything else accumulates. A span's text is delimited by the first
/// quote character after `span ` (absent quote means empty text, unterminated
/// quote swallows the rest of the line); its attribute window runs to the
/// next `+` or end of line.
pub(crate) fn parse(line: &str) -> Vec<Term> {
    let mut terms = Vec::new();
    let mut pending = String::new();
    let mut rest = line;

    while !rest.is_empty() {
        if let Some(after_keyword) = rest.strip_prefix("span ") {
            flush_literal(&mut terms, &mut pending);
            rest = parse_span(after_keyword, &mut terms);
        } else if let Some(after_plus) = rest.strip_prefix('+') {
            flush_literal(&mut terms, &mut pending);
            rest = after_plus;
        } else {
            let ch = rest.chars().next().expect("rest is non-empty");
            pending.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }

    flush_literal(&mut terms, &mut pending);
    terms
}

/// Parse one span term starting just after `span `.
///
/// Returns the unconsumed remainder of the line.
fn parse_span<'a>(input: &'a str, terms: &mut Vec<Term>) -> &'a str {
    let body = input.trim_start_matches(' ');

    // Span text is delimited by an immediately following quote; anything
    // else means the span has empty text.
    let (text, after_text) = match body.chars().next() {
        Some(quote @ ('"' | '\'')) => {
            let inner = &body[1..];
            match inner.find(quote) {
                Some(end) => (&inner[..end], &inner[end + 1..]),
                // Unterminated quote: the rest of the line is the text.
                None => (inner, ""),
            }
        }
        _ => ("", body),
    };

    // Attributes apply up to the next `+` (or end of line).
    let (attr_window, rest) = match after_text.find('+') {
        Some(plus) => (&after_text[..plus], &after_text[plus + 1..]),
        None => (after_text, ""),
    };

    terms.push(Term::Span {
        text: text.to_owned(),
        color: scan_attr(attr_window, "color:"),
        weight: scan_attr(attr_window, "weight:"),
    });

    rest
}

/// Find `keyword` in the attribute window and return the value after it.
///
/// Values run until whitespace or `+`.
fn scan_attr(window: &str, keyword: &str) -> Option<String> {
    let start = window.find(keyword)? + keyword.len();
    let value: String = window[start..]
        .chars()
        .take_while(|&c| !c.is_whitespace() && c != '+')
        .collect();
    if value.is_empty() { None } else { Some(value) }
}

fn flush_literal(terms: &mut Vec<Term>, pending: &mut String) {
    let trimmed = pending.trim().trim_matches(|c| c == '"' || c == '\'');
    if !trimmed.is_empty() {
        terms.push(Term::Literal(trimmed.to_owned()));
    }
    pending.clear();
}

/// Evaluate a concatenation expression to an HTML fragment.
///
/// Literals are variable-substituted and emitted as raw text; spans are
/// wrapped in `<span>` with an inline style built from the resolved color
/// and weight (no style attribute when neither is present). Terms are
/// concatenated with no separators.
#[must_use]
pub(crate) fn evaluate(line: &str, vars: &Variables) -> String {
    let mut html = String::new();

    for term in parse(line) {
        match term {
            Term::Literal(text) => html.push_str(&vars.substitute(&text)),
            Term::Span {
                text,
                color,
                weight,
            } => {
                let mut style_parts = Vec::new();
                if let Some(color) = &color {
                    style_parts.push(format!("color: {};", theme::resolve(color)));
                }
                if let Some(weight) = &weight {
                    style_parts.push(format!("font-weight: {weight};"));
                }

                let style_attr = if style_parts.is_empty() {
                    String::new()
                } else {
                    format!(r#" style="{}""#, style_parts.join(" "))
                };

                html.push_str(&format!(
                    "<span{style_attr}>{}</span>",
                    vars.substitute(&text)
                ));
            }
        }
    }

    html
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_literal_plus_span_plus_literal() {
        let terms = parse(r#""Hello " + span "World" color:red + "!""#);
        assert_eq!(
            terms,
            vec![
                Term::Literal("Hello ".to_owned()),
                Term::Span {
                    text: "World".to_owned(),
                    color: Some("red".to_owned()),
                    weight: None,
                },
                Term::Literal("!".to_owned()),
            ]
        );
    }

    #[test]
    fn test_parse_span_only() {
        let terms = parse(r#"span "bold text" weight:bold"#);
        assert_eq!(
            terms,
            vec![Term::Span {
                text: "bold text".to_owned(),
                color: None,
                weight: Some("bold".to_owned()),
            }]
        );
    }

    #[test]
    fn test_parse_span_without_quote_has_empty_text() {
        let terms = parse("span color:red");
        assert_eq!(
            terms,
            vec![Term::Span {
                text: String::new(),
                color: Some("red".to_owned()),
                weight: None,
            }]
        );
    }

    #[test]
    fn test_parse_unterminated_quote_swallows_rest() {
        let terms = parse(r#"span "no end"#);
        assert_eq!(
            terms,
            vec![Term::Span {
                text: "no end".to_owned(),
                color: None,
                weight: None,
            }]
        );
    }

    #[test]
    fn test_parse_attrs_stop_at_plus() {
        let terms = parse(r#"span "a" color:red + span "b" color:blue"#);
        assert_eq!(
            terms,
            vec![
                Term::Span {
                    text: "a".to_owned(),
                    color: Some("red".to_owned()),
                    weight: None,
                },
                Term::Span {
                    text: "b".to_owned(),
                    color: Some("blue".to_owned()),
                    weight: None,
                },
            ]
        );
    }

    #[test]
    fn test_evaluate_resolves_theme_color() {
        let vars = Variables::new();
        let html = evaluate(r#""Hello " + span "World" color:red + "!""#, &vars);
        assert_eq!(html, r#"Hello <span style="color: #dc3545;">World</span>!"#);
    }

    #[test]
    fn test_evaluate_color_and_weight() {
        let vars = Variables::new();
        let html = evaluate(r#"span "x" color:blue weight:700"#, &vars);
        assert_eq!(
            html,
            r#"<span style="color: #007bff; font-weight: 700;">x</span>"#
        );
    }

    #[test]
    fn test_evaluate_span_without_attrs_has_no_style() {
        let vars = Variables::new();
        assert_eq!(evaluate(r#"span "plain""#, &vars), "<span>plain</span>");
    }

    #[test]
    fn test_evaluate_substitutes_variables() {
        let mut vars = Variables::new();
        vars.set("name", "Ahmed");
        let html = evaluate(r#""hi " + span "{name}" color:green"#, &vars);
        assert_eq!(html, r#"hi <span style="color: #28a745;">Ahmed</span>"#);
    }

    #[test]
    fn test_is_expression() {
        assert!(is_expression(r#""a" + span "b" color:red"#));
        assert!(is_expression(r#"span "styled" color:red"#));
        assert!(!is_expression("span plain-single"));
        assert!(!is_expression("a + b"));
    }
}
