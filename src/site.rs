use askama::Template;

use crate::catalog;
use crate::config::Config;
use crate::error::AppError;
use crate::mount::mount;
use crate::views::page;

/// Built-in hosting document used when no shell file is configured.
#[derive(Template)]
#[template(path = "shell.html")]
struct ShellTemplate<'a> {
    title: String,
    base_path: &'a str,
    mount_id: &'a str,
}

/// Read the configured shell file, or render the built-in one.
pub fn load_shell(config: &Config) -> Result<String, AppError> {
    match &config.shell_path {
        Some(path) => {
            tracing::info!("Loading shell document from {}", path.display());
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            let template = ShellTemplate {
                title: catalog::profile().full_name(),
                base_path: &config.base_path,
                mount_id: &config.mount_id,
            };
            Ok(template.render()?)
        }
    }
}

/// Compose the page and attach it to the shell's mount node.
///
/// A shell without the mount node is returned as-is.
pub fn render_site(config: &Config) -> Result<String, AppError> {
    let shell = load_shell(config)?;
    let page = page::compose(catalog::projects(), catalog::profile())?;

    match mount(&shell, &config.mount_id, &page) {
        Some(document) => {
            tracing::info!(
                mount_id = %config.mount_id,
                projects = catalog::projects().len(),
                "Portfolio page rendered"
            );
            Ok(document)
        }
        None => {
            tracing::debug!(
                mount_id = %config.mount_id,
                "Mount node not found, leaving shell untouched"
            );
            Ok(shell)
        }
    }
}
