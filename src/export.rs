use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::AppError;

/// Write the rendered document and static files into the dist directory.
/// Returns the path of the written `index.html`.
pub fn export(config: &Config, document: &str) -> Result<PathBuf, AppError> {
    fs::create_dir_all(&config.dist_dir)?;

    if config.static_dir.is_dir() {
        let copied = copy_dir(&config.static_dir, &config.dist_dir)?;
        tracing::info!(
            "Copied {copied} static files from {}",
            config.static_dir.display()
        );
    } else {
        tracing::warn!(
            "Static directory {} not found, exporting page only",
            config.static_dir.display()
        );
    }

    let index = config.dist_dir.join("index.html");
    fs::write(&index, document)?;
    tracing::info!("Wrote {}", index.display());

    Ok(index)
}

fn copy_dir(from: &Path, to: &Path) -> Result<usize, AppError> {
    let mut copied = 0;
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            fs::create_dir_all(&target)?;
            copied += copy_dir(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}
