use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub appwrite: AppwriteSettings,
    pub collection: CollectionSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppwriteSettings {
    pub endpoint: String,
    pub api_key: String,
    pub project_id: String,
    pub database_id: String,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollectionSettings {
    pub profiles: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_max_profiles")]
    pub max_profiles: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            page_size: default_page_size(),
            max_profiles: default_max_profiles(),
        }
    }
}

fn default_max_results() -> usize { crate::core::DEFAULT_MAX_RESULTS }
fn default_page_size() -> usize { 100 }
fn default_max_profiles() -> usize { 1000 }

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    /// Shared-tag count at which a term reaches its full weight
    #[serde(default = "default_overlap_divisor")]
    pub overlap_divisor: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_markets_weight")]
    pub markets: f64,
    #[serde(default = "default_asset_types_weight")]
    pub asset_types: f64,
    #[serde(default = "default_shared_expertise_weight")]
    pub shared_expertise: f64,
    #[serde(default = "default_needs_met_weight")]
    pub needs_met: f64,
    #[serde(default = "default_needs_offered_weight")]
    pub needs_offered: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            markets: default_markets_weight(),
            asset_types: default_asset_types_weight(),
            shared_expertise: default_shared_expertise_weight(),
            needs_met: default_needs_met_weight(),
            needs_offered: default_needs_offered_weight(),
        }
    }
}

fn default_markets_weight() -> f64 { 0.20 }
fn default_asset_types_weight() -> f64 { 0.15 }
fn default_shared_expertise_weight() -> f64 { 0.10 }
fn default_needs_met_weight() -> f64 { 0.40 }
fn default_needs_offered_weight() -> f64 { 0.15 }
fn default_overlap_divisor() -> f64 { 3.0 }

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            weights: WeightsConfig::default(),
            overlap_divisor: default_overlap_divisor(),
        }
    }
}

impl ScoringSettings {
    pub fn to_weights(&self) -> ScoringWeights {
        ScoringWeights {
            markets: self.weights.markets,
            asset_types: self.weights.asset_types,
            shared_expertise: self.weights.shared_expertise,
            needs_met: self.weights.needs_met,
            needs_offered: self.weights.needs_offered,
            overlap_divisor: self.overlap_divisor,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with MATCHMAKER_)
    /// 4. Unprefixed APPWRITE_* variables
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            // Local overrides for development
            .add_source(File::with_name("config/local").required(false))
            // e.g., MATCHMAKER__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("MATCHMAKER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        substitute_env_vars(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("MATCHMAKER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply the Appwrite variables hosting platforms inject without our prefix
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let overrides = [
        ("APPWRITE_ENDPOINT", "appwrite.endpoint"),
        ("APPWRITE_API_KEY", "appwrite.api_key"),
        ("APPWRITE_PROJECT_ID", "appwrite.project_id"),
        ("APPWRITE_DATABASE_ID", "appwrite.database_id"),
    ];

    let mut builder = Config::builder().add_source(settings);

    for (var, key) in overrides {
        if let Ok(value) = env::var(var) {
            builder = builder.set_override(key, value)?;
        }
    }

    builder.build()
}
