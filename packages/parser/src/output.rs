//! Rendering and writing parsed trees.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::config::Format;
use crate::error::Result;
use crate::tree::LegalAct;

/// Render a tree as YAML or pretty-printed JSON.
pub fn render(act: &LegalAct, format: Format) -> Result<String> {
    let content = match format {
        Format::Yaml => serde_yaml_ng::to_string(act)?,
        Format::Json => {
            let mut json = serde_json::to_string_pretty(act)?;
            json.push('\n');
            json
        }
    };
    Ok(content)
}

/// Write rendered output to `path`.
///
/// Writes to a temporary file next to `path` first and renames it, so a
/// failed run never leaves a truncated file behind.
pub fn write_output(content: &str, path: &Path) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let temp_file = path.with_file_name(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_file, path)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote output");
    Ok(())
}
