use super::{payout::PayoutConfig, search::SearchConfig, traits::ConfigSection};
use crate::error::OptimizerError;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Prefix for environment overrides, e.g. `LOWPAYOUT__SEARCH__TOP_K=20`
pub const ENV_PREFIX: &str = "LOWPAYOUT";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub payout: PayoutConfig,
    pub search: SearchConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), OptimizerError> {
        self.payout.validate().map_err(|e| section_error::<PayoutConfig>(e))?;
        self.search.validate().map_err(|e| section_error::<SearchConfig>(e))?;
        Ok(())
    }

    /// Defaults, then the optional TOML file, then `LOWPAYOUT__*` environment variables
    pub fn load_layered(path: Option<&Path>) -> Result<Self, OptimizerError> {
        let defaults = Config::try_from(&AppConfig::default())
            .map_err(|e| OptimizerError::Configuration(format!("Failed to seed defaults: {}", e)))?;

        let mut builder = Config::builder().add_source(defaults);
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| OptimizerError::Configuration(format!("Failed to load config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }
}

fn section_error<S: ConfigSection>(e: OptimizerError) -> OptimizerError {
    match e {
        OptimizerError::Configuration(msg) => {
            OptimizerError::Configuration(format!("[{}] {}", S::section_name(), msg))
        }
        other => other,
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), OptimizerError> {
        self.load(Some(path.as_ref()))
    }

    pub fn load(&self, path: Option<&Path>) -> Result<(), OptimizerError> {
        let config = AppConfig::load_layered(path)?;
        *self.config.write().unwrap_or_else(|e| e.into_inner()) = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), OptimizerError> {
        let config = self.get();
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| OptimizerError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| OptimizerError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn update<F>(&self, f: F) -> Result<(), OptimizerError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap_or_else(|e| e.into_inner());
        let mut candidate = config.clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }
}
