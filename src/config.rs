use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::{SkillVocabulary, VocabularyError};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub extraction: ExtractionSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    /// Replaces the builtin skill catalogue when present
    #[serde(default)]
    pub vocabulary: Option<VocabularySettings>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSettings {
    /// Largest text, in bytes, accepted for extraction
    #[serde(default = "default_max_text_bytes")]
    pub max_text_bytes: usize,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            max_text_bytes: default_max_text_bytes(),
        }
    }
}

fn default_max_text_bytes() -> usize { 5 * 1024 * 1024 }

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    /// Maximum cached extraction results; 0 disables caching
    #[serde(default = "default_cache_capacity")]
    pub capacity: u64,
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            capacity: default_cache_capacity(),
            ttl_secs: default_cache_ttl(),
        }
    }
}

fn default_cache_capacity() -> u64 { 1000 }
fn default_cache_ttl() -> u64 { 300 }

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

/// Skill catalogue supplied through configuration
#[derive(Debug, Clone, Deserialize)]
pub struct VocabularySettings {
    pub skills: Vec<String>,
    #[serde(default)]
    pub aliases: Vec<AliasSettings>,
}

/// Alternate spellings of one canonical skill
#[derive(Debug, Clone, Deserialize)]
pub struct AliasSettings {
    pub skill: String,
    pub aliases: Vec<String>,
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local configuration file (config/local.toml)
    /// 4. Environment variables (prefixed with SKILLMATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SKILLMATCH__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("SKILLMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = apply_platform_overrides(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("SKILLMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Build the skill vocabulary this configuration describes
    pub fn build_vocabulary(&self) -> Result<SkillVocabulary, VocabularyError> {
        match &self.vocabulary {
            Some(vocab) => SkillVocabulary::new(
                &vocab.skills,
                vocab
                    .aliases
                    .iter()
                    .map(|entry| (entry.skill.clone(), &entry.aliases)),
            ),
            None => Ok(SkillVocabulary::builtin()),
        }
    }
}

/// Honor the plain `HOST` / `PORT` variables set by container platforms
fn apply_platform_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(host) = env::var("HOST") {
        builder = builder.set_override("server.host", host)?;
    }
    if let Ok(port) = env::var("PORT") {
        builder = builder.set_override("server.port", port)?;
    }

    builder.build()
}
