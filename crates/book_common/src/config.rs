//! Living Book configuration.
//!
//! Configuration lives in `$XDG_CONFIG_HOME/living-book/config.toml`. The
//! `PORT`, `FRONTEND_URL`, and `BOOK_PROVIDER_URL` environment variables
//! override file values; a missing or unparsable file falls back to
//! defaults silently.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Directory under the XDG config dir holding the config file.
pub const CONFIG_DIR_NAME: &str = "living-book";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookConfig {
    /// Port the provider daemon listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origin for the provider; wildcard when unset.
    #[serde(default)]
    pub frontend_url: Option<String>,

    /// Base URL the book client talks to.
    #[serde(default = "default_provider_url")]
    pub provider_url: String,
}

fn default_port() -> u16 {
    3000
}

fn default_provider_url() -> String {
    "http://127.0.0.1:3000".to_string()
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            frontend_url: None,
            provider_url: default_provider_url(),
        }
    }
}

impl BookConfig {
    /// Load from the config file, then apply environment overrides.
    pub fn load() -> Self {
        let mut config = Self::config_path()
            .and_then(|path| Self::load_from(&path))
            .unwrap_or_default();
        config.apply_env();
        config
    }

    /// Parse a config file. `None` when the file is missing or malformed.
    pub fn load_from(path: &Path) -> Option<Self> {
        let raw = fs::read_to_string(path).ok()?;
        toml::from_str(&raw).ok()
    }

    /// Socket address for the daemon listener.
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE))
    }

    fn apply_env(&mut self) {
        if let Ok(port) = env::var("PORT") {
            if let Ok(port) = port.parse() {
                self.port = port;
            }
        }
        if let Ok(origin) = env::var("FRONTEND_URL") {
            if !origin.is_empty() {
                self.frontend_url = Some(origin);
            }
        }
        if let Ok(url) = env::var("BOOK_PROVIDER_URL") {
            if !url.is_empty() {
                self.provider_url = url;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = BookConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.frontend_url, None);
        assert_eq!(config.provider_url, "http://127.0.0.1:3000");
        assert_eq!(config.listen_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let config: BookConfig = toml::from_str("port = 4000").expect("parses");
        assert_eq!(config.port, 4000);
        assert_eq!(config.provider_url, "http://127.0.0.1:3000");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "port = 8080\nfrontend_url = \"https://book.example\"").expect("write");

        let config = BookConfig::load_from(file.path()).expect("loads");
        assert_eq!(config.port, 8080);
        assert_eq!(config.frontend_url.as_deref(), Some("https://book.example"));
    }

    #[test]
    fn test_load_from_missing_or_malformed_is_none() {
        assert!(BookConfig::load_from(Path::new("/nonexistent/config.toml")).is_none());

        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "port = \"not a number\"").expect("write");
        assert!(BookConfig::load_from(file.path()).is_none());
    }
}
