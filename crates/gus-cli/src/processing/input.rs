//! Input file discovery and path utilities.

use std::path::{Path, PathBuf};

/// Supported image extensions for batch processing (matched case-insensitively)
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "tif", "tiff"];

/// Collect supported image files from a directory, sorted by path.
///
/// If `recursive` is true, subdirectories are also scanned. A missing or
/// unreadable directory is an error; an empty result is not.
pub fn find_images(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>, String> {
    if !dir.is_dir() {
        return Err(format!("Input directory not found: {}", dir.display()));
    }

    let mut files = Vec::new();
    collect_images_from_dir(dir, recursive, &mut files)?;

    // Sort for consistent ordering
    files.sort();
    Ok(files)
}

fn collect_images_from_dir(
    dir: &Path,
    recursive: bool,
    files: &mut Vec<PathBuf>,
) -> Result<(), String> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| format!("Failed to read directory {}: {}", dir.display(), e))?;

    for entry in entries {
        let entry = entry.map_err(|e| format!("Error reading directory entry: {}", e))?;
        let path = entry.path();

        if path.is_dir() {
            if recursive {
                collect_images_from_dir(&path, recursive, files)?;
            }
        } else if path.is_file() && is_supported(&path) {
            files.push(path);
        }
    }
    Ok(())
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// File name used in the `Archivo` column
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Validation panel location for `input`, found under `input_root`.
///
/// The panel keeps the full file name (`check_root.jpg.png`) and mirrors the
/// input's subdirectory below `input_root`, so distinct inputs never share a
/// panel file.
pub fn panel_path(plots_dir: &Path, input_root: &Path, input: &Path) -> PathBuf {
    let subdir = input
        .strip_prefix(input_root)
        .ok()
        .and_then(Path::parent)
        .unwrap_or_else(|| Path::new(""));
    plots_dir
        .join(subdir)
        .join(format!("check_{}.png", file_name_of(input)))
}
