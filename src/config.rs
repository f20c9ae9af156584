//! Configuration loader and validator for the rental homepage.
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Root configuration struct mirroring the YAML schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub app: App,
    pub server: Server,
    pub site: Site,
    #[serde(default)]
    pub home: Home,
}

/// App-level settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct App {
    pub data_dir: String,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Server {
    pub bind: String,
}

/// Site-wide presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Site {
    pub name: String,
    /// Prefix joined in front of every stored image path.
    pub upload_path: String,
    /// Image source used when a property has no images.
    pub placeholder_image: String,
    /// Suffix appended after formatted prices.
    pub currency: String,
}

/// Homepage section sizes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Home {
    #[serde(default = "default_featured_limit")]
    pub featured_limit: u32,
    #[serde(default = "default_recent_limit")]
    pub recent_limit: u32,
}

fn default_featured_limit() -> u32 {
    6
}

fn default_recent_limit() -> u32 {
    8
}

impl Default for Home {
    fn default() -> Self {
        Self {
            featured_limit: default_featured_limit(),
            recent_limit: default_recent_limit(),
        }
    }
}

impl App {
    /// `data_dir` with a leading `~/` expanded against `$HOME`.
    pub fn resolved_data_dir(&self) -> String {
        if let Some(rest) = self.data_dir.strip_prefix("~/") {
            if let Ok(home) = std::env::var("HOME") {
                return format!("{}/{}", home.trim_end_matches('/'), rest);
            }
        }
        self.data_dir.clone()
    }
}

impl Config {
    /// Ensure required directories exist (creates `app.data_dir` if missing).
    pub fn ensure_dirs(&self) -> Result<(), std::io::Error> {
        if self.app.data_dir.trim().is_empty() {
            return Ok(());
        }
        fs::create_dir_all(self.app.resolved_data_dir())
    }

    /// Default SQLite URL inside the data directory.
    pub fn database_url(&self) -> String {
        format!("sqlite://{}/rental.db", self.app.resolved_data_dir())
    }
}

/// Load configuration from a YAML file and validate it.
/// - If `path` is None, uses `config.yaml` in the current working directory.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or_else(|| Path::new("config.yaml"));
    let content = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&content)?;
    validate(&cfg)?;
    Ok(cfg)
}

/// Validate a configuration instance.
fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.app.data_dir.trim().is_empty() {
        return Err(ConfigError::Invalid("app.data_dir must be non-empty"));
    }
    if cfg.server.bind.trim().is_empty() {
        return Err(ConfigError::Invalid("server.bind must be non-empty"));
    }

    if cfg.site.name.trim().is_empty() {
        return Err(ConfigError::Invalid("site.name must be non-empty"));
    }
    if cfg.site.upload_path.trim().is_empty() {
        return Err(ConfigError::Invalid("site.upload_path must be non-empty"));
    }
    if cfg.site.placeholder_image.trim().is_empty() {
        return Err(ConfigError::Invalid("site.placeholder_image must be non-empty"));
    }

    if cfg.home.featured_limit == 0 {
        return Err(ConfigError::Invalid("home.featured_limit must be > 0"));
    }
    if cfg.home.recent_limit == 0 {
        return Err(ConfigError::Invalid("home.recent_limit must be > 0"));
    }

    Ok(())
}

/// Returns a complete sample configuration.
pub fn example() -> &'static str {
    r#"app:
  data_dir: "./data"

server:
  bind: "127.0.0.1:8080"

site:
  name: "RentEasy"
  upload_path: "/uploads/properties/"
  placeholder_image: "/assets/images/property-placeholder.jpg"
  currency: "€"

home:
  featured_limit: 6
  recent_limit: 8
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parse_example_ok() {
        let cfg: Config = serde_yaml::from_str(example()).unwrap();
        validate(&cfg).unwrap();
        assert_eq!(cfg.site.currency, "€");
    }

    #[test]
    fn home_section_defaults_apply() {
        let yaml = r#"app:
  data_dir: "./data"
server:
  bind: "0.0.0.0:80"
site:
  name: "x"
  upload_path: "/u/"
  placeholder_image: "/p.jpg"
  currency: "€"
"#;
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.home.featured_limit, 6);
        assert_eq!(cfg.home.recent_limit, 8);
    }

    #[test]
    fn invalid_upload_path() {
        let mut cfg: Config = serde_yaml::from_str(example()).unwrap();
        cfg.site.upload_path = "  ".into();
        let err = validate(&cfg).unwrap_err();
        match err {
            ConfigError::Invalid(msg) => assert!(msg.contains("site.upload_path")),
            _ => panic!("wrong error"),
        }
    }

    #[test]
    fn invalid_limits() {
        let mut cfg: Config = serde_yaml::from_str(example()).unwrap();
        cfg.home.featured_limit = 0;
        assert!(matches!(validate(&cfg), Err(ConfigError::Invalid(_))));

        let mut cfg: Config = serde_yaml::from_str(example()).unwrap();
        cfg.home.recent_limit = 0;
        assert!(matches!(validate(&cfg), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn invalid_placeholder_and_bind() {
        let mut cfg: Config = serde_yaml::from_str(example()).unwrap();
        cfg.site.placeholder_image = "".into();
        let err = validate(&cfg).unwrap_err();
        match err {
            ConfigError::Invalid(msg) => assert!(msg.contains("placeholder_image")),
            _ => panic!("wrong error"),
        }

        let mut cfg: Config = serde_yaml::from_str(example()).unwrap();
        cfg.server.bind = "".into();
        assert!(matches!(validate(&cfg), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn ensure_dirs_creates_data_dir() {
        let td = tempdir().unwrap();
        let data_path = td.path().join("data");
        let mut cfg: Config = serde_yaml::from_str(example()).unwrap();
        cfg.app.data_dir = data_path.to_string_lossy().to_string();
        cfg.ensure_dirs().unwrap();
        assert!(data_path.exists());
        assert!(cfg.database_url().ends_with("/data/rental.db"));
    }

    #[test]
    fn load_from_file_ok() {
        let td = tempdir().unwrap();
        let p = td.path().join("config.yaml");
        fs::write(&p, example()).unwrap();
        let cfg = load(Some(&p)).unwrap();
        assert_eq!(cfg.server.bind, "127.0.0.1:8080");
        assert_eq!(cfg.home.recent_limit, 8);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let td = tempdir().unwrap();
        let err = load(Some(&td.path().join("nope.yaml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
