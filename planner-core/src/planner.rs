//! Planner configuration root.

use config::{Config, File};

use crate::error::{PlannerError, PlannerResult};
use crate::i18n::Locale;
use crate::planner_config::PlannerConfig;

/// Loaded configuration plus the runtime settings derived from it.
#[derive(Clone)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    pub fn load() -> PlannerResult<Self> {
        let config_path = PlannerConfig::config_path()?;

        if !config_path.exists() {
            PlannerConfig::create_default_config(&config_path)?;
        }

        let config: PlannerConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| PlannerError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| PlannerError::Config(e.to_string()))?;

        Ok(Planner { config })
    }

    /// Trip server base URL; the `PLANNER_SERVER` environment variable wins
    /// over the config file.
    pub fn server_url(&self) -> String {
        std::env::var("PLANNER_SERVER").unwrap_or_else(|_| self.config.server_url.clone())
    }

    /// Active locale: config override first, then the environment.
    pub fn locale(&self) -> Locale {
        match self.config.locale.as_deref() {
            Some(tag) => Locale::from_tag(tag),
            None => Locale::detect(),
        }
    }

    /// The trip commands operate on when no explicit id is given.
    pub fn current_trip(&self) -> Option<&str> {
        self.config.current_trip.as_deref()
    }

    /// Remember a trip id for later commands.
    pub fn set_current_trip(&mut self, trip_id: &str) -> PlannerResult<()> {
        self.config.current_trip = Some(trip_id.to_string());
        self.config.save()
    }

    /// Drop the remembered trip id.
    pub fn clear_current_trip(&mut self) -> PlannerResult<()> {
        self.config.current_trip = None;
        self.config.save()
    }
}
