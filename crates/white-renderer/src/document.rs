//! Full HTML page assembly.
//!
//! The compiler core produces fragments, metadata, and a style registry;
//! this layer wraps them into a standalone page: doctype and head (title,
//! optional description), a `<style>` block holding the base stylesheet plus
//! the document's minted class rules, the fragment body inside a container,
//! and a footer.

use crate::compiler::CompiledDocument;

/// Fixed stylesheet every page carries, independent of minted classes.
const BASE_CSS: &str = r"        body {
            font-family: 'Segoe UI', Arial, sans-serif;
            line-height: 1.6;
            margin: 0;
            padding: 20px;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
        }
        .container {
            max-width: 1200px;
            margin: 0 auto;
            background: rgba(255, 255, 255, 0.95);
            padding: 30px;
            border-radius: 15px;
            box-shadow: 0 10px 30px rgba(0,0,0,0.2);
        }
        button {
            padding: 12px 24px;
            margin: 8px;
            border: none;
            border-radius: 8px;
            cursor: pointer;
            transition: all 0.3s ease;
            font-weight: 600;
            background: #3498db;
            color: white;
        }
        button:hover {
            transform: translateY(-2px);
            box-shadow: 0 5px 15px rgba(0,0,0,0.2);
        }
        .white-table, table {
            width: 100%;
            border-collapse: collapse;
            margin: 20px 0;
            background: white;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
            border-radius: 8px;
            overflow: hidden;
        }
        .white-table th, table th {
            background: #3498db;
            color: white;
            padding: 15px 10px;
            text-align: center;
            font-weight: 600;
        }
        .white-table td, table td {
            padding: 12px 10px;
            border-bottom: 1px solid #eee;
            text-align: center;
        }
        .white-table tbody tr:hover, table tbody tr:hover {
            background: #f8f9fa;
        }
        .white-table tbody tr:nth-child(even), table tbody tr:nth-child(even) {
            background: #fdfdfd;
        }
        .white-form {
            background: #f8f9fa;
            padding: 20px;
            border-radius: 10px;
            margin: 20px 0;
        }
        .form-group {
            margin-bottom: 15px;
        }
        .form-group label {
            display: block;
            margin-bottom: 5px;
            font-weight: 600;
            color: #2c3e50;
        }
        .form-control {
            width: 100%;
            padding: 10px;
            border: 1px solid #ddd;
            border-radius: 5px;
            font-size: 14px;
            transition: border-color 0.3s ease;
        }
        .form-control:focus {
            outline: none;
            border-color: #3498db;
            box-shadow: 0 0 0 2px rgba(52, 152, 219, 0.2);
        }
        img {
            max-width: 100%;
            height: auto;
            margin: 10px 0;
            display: block;
        }
        span {
            font-weight: 500;
        }
        ul {
            padding: 15px 25px;
            background: rgba(52, 152, 219, 0.1);
            border-radius: 8px;
            margin: 10px 0;
        }
        li { margin-bottom: 8px; }
        a {
            color: #3498db;
            text-decoration: none;
            font-weight: 500;
        }
        a:hover {
            color: #2980b9;
            text-decoration: underline;
        }
        pre {
            background: #2c3e50;
            color: #ecf0f1;
            padding: 20px;
            border-radius: 8px;
            overflow-x: auto;
            margin: 10px 0;
        }
        .variable {
            background: #e8f4f8;
            padding: 10px;
            margin: 10px 0;
            border-radius: 5px;
            border-left: 4px solid #3498db;
        }";

/// Render a compiled document as a complete HTML page.
#[must_use]
pub fn render_page(doc: &CompiledDocument) -> String {
    let mut lines = vec![
        "<!DOCTYPE html>".to_owned(),
        "<html lang=\"en\">".to_owned(),
        "<head>".to_owned(),
        "    <meta charset=\"UTF-8\">".to_owned(),
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">".to_owned(),
        format!("    <title>{}</title>", doc.title()),
    ];

    if let Some(description) = doc.metadata.get("description") {
        if !description.is_empty() {
            lines.push(format!(
                "    <meta name=\"description\" content=\"{description}\">"
            ));
        }
    }

    lines.push("    <style>".to_owned());
    lines.push(BASE_CSS.to_owned());
    for (name, declarations) in doc.styles.rules() {
        lines.push(format!("        .{name} {{ {declarations}; }}"));
    }
    lines.push("    </style>".to_owned());
    lines.push("</head>".to_owned());
    lines.push("<body>".to_owned());
    lines.push("    <div class=\"container\">".to_owned());

    lines.extend(doc.fragments.iter().cloned());

    lines.push("    </div>".to_owned());
    lines.push(
        "    <footer style=\"text-align: center; margin-top: 40px; \
         color: rgba(255,255,255,0.8); font-size: 14px;\">"
            .to_owned(),
    );
    lines.push("        <p>Generated by White Language Compiler</p>".to_owned());
    lines.push("    </footer>".to_owned());
    lines.push("</body>".to_owned());
    lines.push("</html>".to_owned());

    lines.join("\n")
}

/// Render a standalone error page for a document that could not be
/// compiled at all (for example, an unreadable source file).
#[must_use]
pub fn render_error_page(message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         \x20   <meta charset=\"UTF-8\">\n\
         \x20   <title>Compilation Error</title>\n\
         </head>\n\
         <body>\n\
         \x20   <div style=\"background: #f8d7da; color: #721c24; \
         padding: 20px; margin: 20px; border-radius: 5px;\">\n\
         \x20       <h1>Compilation Error</h1>\n\
         \x20       <p>{message}</p>\n\
         \x20   </div>\n\
         </body>\n\
         </html>"
    )
}
