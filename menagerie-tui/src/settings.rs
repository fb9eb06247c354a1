//! Runtime settings for the gallery.
//!
//! Settings are layered: built-in defaults, then an optional TOML
//! file, then `MENAGERIE_*` environment variables. Command-line flags
//! are merged on top by `main`.

use std::path::Path;

use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;

/// Default catalog server origin.
pub const DEFAULT_ORIGIN: &str = "http://localhost:3000";
/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Resolved gallery settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Catalog server origin, also used to resolve image paths.
    pub origin: String,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    /// Load settings from the optional file and the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("origin", DEFAULT_ORIGIN)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        let settings = builder
            .add_source(Environment::with_prefix("MENAGERIE").try_parsing(true))
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let settings = Settings::load(None).unwrap();
        assert_eq!(settings.origin, DEFAULT_ORIGIN);
        assert_eq!(settings.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "origin = \"http://zoo.example:8080\"").unwrap();
        writeln!(file, "timeout_secs = 3").unwrap();
        file.flush().unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.origin, "http://zoo.example:8080");
        assert_eq!(settings.timeout_secs, 3);
    }

    #[test]
    fn test_partial_file_keeps_remaining_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "origin = \"http://zoo.example:8080\"").unwrap();
        file.flush().unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.origin, "http://zoo.example:8080");
        assert_eq!(settings.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
