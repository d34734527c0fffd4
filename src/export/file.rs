//! Output file naming and writing.

use crate::canvas::CanvasError;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Upload name used when no template is configured.
pub const DEFAULT_FILENAME_TEMPLATE: &str = "draw";

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `extension` - File extension (e.g., "png")
pub fn generate_filename(template: &str, extension: &str) -> String {
    let now = Local::now();
    let stem = now.format(template).to_string();
    format!("{}.{}", stem, extension)
}

/// Writes encoded PNG bytes, creating parent directories as needed.
pub fn save_png(png: &[u8], path: &Path) -> Result<PathBuf, CanvasError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        log::info!("Creating output directory: {}", parent.display());
        fs::create_dir_all(parent)?;
    }

    fs::write(path, png)?;
    log::info!("Saved drawing to {} ({} bytes)", path.display(), png.len());
    Ok(path.to_path_buf())
}
