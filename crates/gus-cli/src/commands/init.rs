use std::path::Path;

use gus_core::config::default_config_yaml;

/// Write the default threshold config.
///
/// Safe to run multiple times: an existing file is kept unless `force` is
/// true.
pub fn cmd_init(path: &Path, force: bool) -> Result<(), String> {
    if path.exists() && !force {
        println!(
            "Skipped: {} (already exists, use --force to overwrite)",
            path.display()
        );
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;
    }

    std::fs::write(path, default_config_yaml())
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;

    println!("Wrote default configuration to {}", path.display());
    println!("Edit the thresholds there, or pass it explicitly with --config.");

    Ok(())
}
