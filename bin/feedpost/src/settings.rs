//! Runtime configuration: built-in defaults overridden by `FEEDPOST_*`
//! environment variables (a `.env` file is loaded first by `main`).

use std::path::PathBuf;

use config::{Config, ConfigError, Environment};
use fp_core::DEFAULT_COMMENT_AUTHOR;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub feed_path: PathBuf,
    pub database_url: String,
    /// Author name attached to comments made in this session
    pub viewer_name: String,
    pub title: String,
    /// Rendered HTML goes to stdout when unset
    pub output_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_env(Environment::with_prefix("FEEDPOST"))
    }

    fn from_env(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("feed_path", "feed.json")?
            .set_default("database_url", "sqlite:database.sqlite")?
            .set_default("viewer_name", DEFAULT_COMMENT_AUTHOR)?
            .set_default("title", "Feed")?
            .add_source(env)
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let mut map = config::Map::new();
        for (k, v) in vars {
            map.insert(k.to_string(), v.to_string());
        }
        Environment::with_prefix("FEEDPOST").source(Some(map))
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_env(env(&[])).unwrap();
        assert_eq!(config.feed_path, PathBuf::from("feed.json"));
        assert_eq!(config.database_url, "sqlite:database.sqlite");
        assert_eq!(config.viewer_name, "You");
        assert!(config.output_path.is_none());
    }

    #[test]
    fn test_environment_overrides() {
        let config = AppConfig::from_env(env(&[
            ("FEEDPOST_VIEWER_NAME", "ada"),
            ("FEEDPOST_OUTPUT_PATH", "out.html"),
        ]))
        .unwrap();
        assert_eq!(config.viewer_name, "ada");
        assert_eq!(config.output_path, Some(PathBuf::from("out.html")));
    }
}
