//! JSON output.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use patmap_model::OutputDocument;

use crate::error::{OutputError, Result};

/// Render the document as JSON with a 2-space indent and no trailing newline.
pub fn render_document(document: &OutputDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Write rendered JSON followed by a newline to `writer`.
pub fn emit_document<W: Write>(writer: &mut W, rendered: &str) -> Result<()> {
    writeln!(writer, "{rendered}").map_err(OutputError::Console)?;
    writer.flush().map_err(OutputError::Console)
}

/// Persist rendered JSON to `path`, creating parent directories as needed.
pub fn write_document(path: &Path, rendered: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, rendered).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(bytes = rendered.len(), "wrote output document");
    info!(path = %path.display(), "saved output");
    Ok(())
}
