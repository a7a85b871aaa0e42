//! Build command: discover `.white` sources and write HTML next to them.

use std::fs;
use std::path::{Path, PathBuf};

use white_renderer::{Compiler, document};

use crate::error::CliError;
use crate::output::Output;

/// Find `.white` source files at `path`.
///
/// A file path is accepted as-is when it carries the `.white` extension; a
/// directory is scanned (non-recursively) for `*.white` files, sorted for
/// deterministic processing order.
pub(crate) fn find_sources(path: &Path) -> Result<Vec<PathBuf>, CliError> {
    if path.is_file() {
        return if path.extension().is_some_and(|ext| ext == "white") {
            Ok(vec![path.to_path_buf()])
        } else {
            Err(CliError::Validation(format!(
                "not a .white file: {}",
                path.display()
            )))
        };
    }

    if path.is_dir() {
        let pattern = path.join("*.white");
        let mut files: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())?
            .filter_map(Result::ok)
            .collect();
        files.sort();
        return Ok(files);
    }

    Err(CliError::Validation(format!(
        "no such file or directory: {}",
        path.display()
    )))
}

/// Compile every discovered source to a sibling `.html` file.
///
/// A source that cannot be read still produces an output file: a standalone
/// error page takes the place of the compiled document. Per-line warnings
/// are reported but never fail the build.
pub(crate) fn build(path: &Path, output: &Output) -> Result<(), CliError> {
    let sources = find_sources(path)?;
    tracing::info!(count = sources.len(), "discovered sources");

    if sources.is_empty() {
        output.warning(&format!("no .white files found in {}", path.display()));
        return Ok(());
    }

    output.highlight(&format!("Found {} source file(s)", sources.len()));
    for source in &sources {
        output.info(&format!("Compiling {}", source.display()));

        let page = match fs::read_to_string(source) {
            Ok(text) => {
                let doc = Compiler::new().compile(&text);
                for warning in &doc.warnings {
                    output.warning(&format!("{}: {warning}", source.display()));
                }
                document::render_page(&doc)
            }
            Err(err) => {
                let message = format!("cannot read {}: {err}", source.display());
                output.error(&message);
                document::render_error_page(&message)
            }
        };

        let target = source.with_extension("html");
        fs::write(&target, page)?;
        output.success(&format!("Wrote {}", target.display()));
    }

    Ok(())
}
