use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// URL prefix the site is deployed under. Always starts and ends with `/`.
    pub base_path: String,
    pub static_dir: PathBuf,
    pub dist_dir: PathBuf,
    /// Hosting document to mount into. `None` uses the built-in shell.
    pub shell_path: Option<PathBuf>,
    pub mount_id: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("PORTFOLIO_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid PORTFOLIO_HOST: {e}"))?;

        let port: u16 = env_or("PORTFOLIO_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid PORTFOLIO_PORT: {e}"))?;

        let base_path = normalize_base_path(&env_or("PORTFOLIO_BASE_PATH", "/portfolio/"))?;

        let static_dir = PathBuf::from(env_or("PORTFOLIO_STATIC_DIR", "static"));
        let dist_dir = PathBuf::from(env_or("PORTFOLIO_DIST_DIR", "dist"));

        let shell_path = std::env::var("PORTFOLIO_SHELL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let mount_id = env_or("PORTFOLIO_MOUNT_ID", "root");
        if mount_id.trim().is_empty() {
            return Err("Invalid PORTFOLIO_MOUNT_ID: must not be empty".to_string());
        }

        let log_level = env_or("PORTFOLIO_LOG_LEVEL", "info");

        Ok(Config {
            host,
            port,
            base_path,
            static_dir,
            dist_dir,
            shell_path,
            mount_id,
            log_level,
        })
    }

    /// Base path without the trailing slash, or `None` when serving from `/`.
    pub fn base_prefix(&self) -> Option<&str> {
        let trimmed = self.base_path.trim_end_matches('/');
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

/// Same defaults as [`Config::from_env`] with no variables set.
impl Default for Config {
    fn default() -> Self {
        Config {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 3000,
            base_path: "/portfolio/".to_string(),
            static_dir: PathBuf::from("static"),
            dist_dir: PathBuf::from("dist"),
            shell_path: None,
            mount_id: "root".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Coerce a base path into `/segment/.../` form. `""` and `"/"` both mean the root.
pub fn normalize_base_path(raw: &str) -> Result<String, String> {
    let raw = raw.trim();
    // Braces and `*` are route parameter syntax for the router.
    if raw.contains(|c: char| {
        c.is_whitespace() || matches!(c, '?' | '#' | '{' | '}' | '*')
    }) {
        return Err(format!("Invalid PORTFOLIO_BASE_PATH '{raw}'"));
    }

    let segments: Vec<&str> = raw.split('/').filter(|s| !s.is_empty()).collect();
    if segments
        .iter()
        .any(|s| *s == "." || *s == ".." || s.starts_with(':'))
    {
        return Err(format!("Invalid PORTFOLIO_BASE_PATH '{raw}'"));
    }

    // The bare prefix gets a redirect route, which must not shadow `/health`.
    if segments == ["health"] {
        return Err(format!(
            "Invalid PORTFOLIO_BASE_PATH '{raw}': conflicts with /health"
        ));
    }

    if segments.is_empty() {
        Ok("/".to_string())
    } else {
        Ok(format!("/{}/", segments.join("/")))
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_path_is_normalized() {
        assert_eq!(normalize_base_path("/portfolio/").unwrap(), "/portfolio/");
        assert_eq!(normalize_base_path("portfolio").unwrap(), "/portfolio/");
        assert_eq!(normalize_base_path("//a//b").unwrap(), "/a/b/");
        assert_eq!(normalize_base_path("").unwrap(), "/");
        assert_eq!(normalize_base_path("/").unwrap(), "/");
    }

    #[test]
    fn base_path_rejects_traversal_and_queries() {
        assert!(normalize_base_path("/a/../b").is_err());
        assert!(normalize_base_path("/a?x=1").is_err());
        assert!(normalize_base_path("/a b").is_err());
    }

    #[test]
    fn base_path_rejects_route_syntax_and_reserved_paths() {
        assert!(normalize_base_path("/a{b").is_err());
        assert!(normalize_base_path("/a}b/").is_err());
        assert!(normalize_base_path("/{id}").is_err());
        assert!(normalize_base_path("/files/*rest").is_err());
        assert!(normalize_base_path("/:name").is_err());

        let err = normalize_base_path("/health").unwrap_err();
        assert!(err.contains("/health"));
        assert!(normalize_base_path("health/").is_err());
        assert_eq!(normalize_base_path("/health/site").unwrap(), "/health/site/");
    }

    #[test]
    fn default_matches_env_defaults() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0".parse::<IpAddr>().unwrap());
        assert_eq!(config.port, 3000);
        assert_eq!(config.base_path, "/portfolio/");
        assert_eq!(config.mount_id, "root");
    }

    #[test]
    fn base_prefix_drops_trailing_slash() {
        let mut config = Config::default();
        assert_eq!(config.base_prefix(), Some("/portfolio"));

        config.base_path = "/".to_string();
        assert_eq!(config.base_prefix(), None);
    }
}
