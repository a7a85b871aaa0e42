//! End-to-end properties of the compiler's public surface.

use pretty_assertions::assert_eq;
use white_renderer::{Compiler, StyleKey, Variables, document, style, tokenizer};

#[test]
fn test_tokenizer_quoted_and_unterminated() {
    assert_eq!(
        tokenizer::split_list(r#"a,"b,c",d"#, ','),
        vec!["a", "b,c", "d"]
    );
    assert_eq!(tokenizer::split_list(r#"a,"b,c"#, ','), vec!["a", "b,c"]);
}

#[test]
fn test_style_extraction_is_idempotent() {
    let (text, attrs) = style::extract("hello color:red size:20");
    assert_eq!(text, "hello");
    assert_eq!(attrs.get(StyleKey::Color), Some("red"));
    assert_eq!(attrs.get(StyleKey::Size), Some("20"));

    let (text, attrs) = style::extract(&text);
    assert_eq!(text, "hello");
    assert!(attrs.is_empty());
}

#[test]
fn test_variable_substitution_unbound_passthrough() {
    let mut vars = Variables::new();
    vars.set("name", "Ahmed");
    assert_eq!(vars.substitute("hi {name}, {age}"), "hi Ahmed, {age}");
}

#[test]
fn test_table_round_trip() {
    let doc = Compiler::new().compile(
        "table headers:[A,B]\n\
         tablerow 1,2\n\
         tablerow 3,4\n\
         endtable",
    );
    assert_eq!(doc.fragments.len(), 1);
    let table = &doc.fragments[0];

    let positions: Vec<usize> = ["<th>A</th>", "<th>B</th>", "<td>1</td>", "<td>2</td>", "<td>3</td>", "<td>4</td>"]
        .iter()
        .map(|needle| table.find(needle).unwrap())
        .collect();
    assert!(positions.is_sorted());
}

#[test]
fn test_span_concatenation() {
    let doc = Compiler::new().compile(r#""Hello " + span "World" color:red + "!""#);
    assert_eq!(
        doc.fragments,
        vec![r#"<p>Hello <span style="color: #dc3545;">World</span>!</p>"#]
    );
}

#[test]
fn test_button_context_sensitivity() {
    let inside = Compiler::new().compile("form name:f\nbutton \"Go\" type:submit\nendform");
    assert_eq!(inside.fragments.len(), 1);
    assert!(inside.fragments[0].starts_with("<form"));
    assert!(inside.fragments[0].contains("<button type=\"submit\">Go</button>"));

    let outside = Compiler::new().compile("button \"Go\" type:submit");
    assert_eq!(
        outside.fragments,
        vec!["<button type=\"submit\">Go</button>"]
    );
}

#[test]
fn test_unclosed_table_auto_flush() {
    let doc = Compiler::new().compile("table headers:[X]\ntablerow 1");
    assert_eq!(doc.fragments.len(), 1);
    assert!(doc.fragments[0].starts_with("<table"));
    assert!(doc.fragments[0].ends_with("</table>"));
    assert!(doc.fragments[0].contains("<td>1</td>"));
}

#[test]
fn test_page_assembly_carries_everything() {
    let doc = Compiler::new().compile(
        "meta title=Demo\n\
         meta description=A demo page\n\
         title Welcome color:primary\n\
         var name = Ahmed\n\
         print hi {name}",
    );
    let page = document::render_page(&doc);

    assert!(page.contains("<title>Demo</title>"));
    assert!(page.contains("<meta name=\"description\" content=\"A demo page\">"));
    assert!(page.contains(".ws1 { color: #3498db; }"));
    assert!(page.contains("<h1 class=\"ws1\">Welcome</h1>"));
    assert!(page.contains("<p>hi Ahmed</p>"));
}
