//! Global planner configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, PlannerResult};

static DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3333";

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn is_default_server_url(url: &String) -> bool {
    *url == default_server_url()
}

/// Global configuration at ~/.config/planner/config.toml
///
/// `current_trip` is the trip the commands operate on when no `--trip` flag
/// is given; it is written whenever a trip is created or confirmed.
#[derive(Serialize, Deserialize, Clone)]
pub struct PlannerConfig {
    #[serde(default = "default_server_url", skip_serializing_if = "is_default_server_url")]
    pub server_url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_trip: Option<String>,
}

impl PlannerConfig {
    pub fn config_path() -> PlannerResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PlannerError::Config("Could not determine config directory".into()))?
            .join("planner");

        Ok(config_dir.join("config.toml"))
    }

    /// Save the current config to ~/.config/planner/config.toml
    pub fn save(&self) -> PlannerResult<()> {
        let config_path = Self::config_path()?;

        self.save_to(&config_path)
    }

    /// Save the current config to an explicit path.
    pub fn save_to(&self, path: &std::path::Path) -> PlannerResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| PlannerError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PlannerError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, content)
            .map_err(|e| PlannerError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> PlannerResult<()> {
        let contents = format!(
            "\
# planner configuration

# Trip server to talk to:
# server_url = \"{}\"

# Force a language (\"en\" or \"pt\"); defaults to $LANG:
# locale = \"pt\"
",
            DEFAULT_SERVER_URL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PlannerError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| PlannerError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_parses_to_defaults() {
        let config: PlannerConfig = toml::from_str("").unwrap();

        assert_eq!(config.server_url, DEFAULT_SERVER_URL);
        assert_eq!(config.locale, None);
        assert_eq!(config.current_trip, None);
    }

    #[test]
    fn default_values_are_not_serialized() {
        let config = PlannerConfig {
            server_url: default_server_url(),
            locale: None,
            current_trip: Some("0bd6a836".into()),
        };

        let content = toml::to_string_pretty(&config).unwrap();
        assert!(content.contains("current_trip"));
        assert!(!content.contains("server_url"));
        assert!(!content.contains("locale"));
    }

    #[test]
    fn default_template_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        PlannerConfig::create_default_config(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let config: PlannerConfig = toml::from_str(&content).unwrap();
        assert_eq!(config.server_url, DEFAULT_SERVER_URL);
        assert_eq!(config.current_trip, None);
    }

    #[test]
    fn save_round_trips_current_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = PlannerConfig {
            server_url: "http://10.0.0.5:3333".into(),
            locale: Some("en".into()),
            current_trip: Some("0bd6a836".into()),
        };
        config.save_to(&path).unwrap();

        let restored: PlannerConfig =
            toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(restored.server_url, "http://10.0.0.5:3333");
        assert_eq!(restored.locale.as_deref(), Some("en"));
        assert_eq!(restored.current_trip.as_deref(), Some("0bd6a836"));
    }
}
