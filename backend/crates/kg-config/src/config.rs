use crate::error::ensure_relative_path;
use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ClassifierConfig, ConfigError, ConfigErrorResult,
    ConfigSection, DEFAULT_CONFIG_DIR, DEFAULT_DATABASE_FILENAME, LoggingConfig, ServerConfig,
    StorageConfig,
};

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::info;
use serde::Deserialize;

/// SQLite file location. Always resolved under the config directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub classifier: ClassifierConfig,
    pub storage: StorageConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Load `.env` from the working directory if present
    /// 2. Check for KG_CONFIG_DIR env var, else use ./.kg/
    /// 3. Auto-create config directory if it doesn't exist
    /// 4. Load config.toml if it exists, else use defaults
    /// 5. Apply KG_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let _ = dotenvy::dotenv();

        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: KG_CONFIG_DIR env var > ./.kg/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir().map_err(|source| ConfigError::Io {
            path: PathBuf::from("."),
            source,
        })?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.classifier.validate()?;
        self.storage.validate()?;
        ensure_relative_path(ConfigSection::Database, "path", &self.database.path)?;

        Ok(())
    }

    /// Database file inside the config directory.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Directory uploaded images are stored in
    pub fn upload_dir(&self) -> PathBuf {
        PathBuf::from(&self.storage.upload_dir)
    }

    pub fn classifier_timeout(&self) -> Duration {
        Duration::from_secs(self.classifier.timeout_secs)
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        self.server.bind_addr()
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (db pool {})",
            self.server.host, self.server.port, self.server.max_connections
        );
        info!("  database: {}", self.database.path);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  classifier: {} (VGG16={}, MobileNetV2={}, input={}px, timeout={}s)",
            self.classifier.endpoint,
            self.classifier.vgg16_model,
            self.classifier.mobilenet_model,
            self.classifier.input_size,
            self.classifier.timeout_secs
        );
        info!("  storage: uploads in {}", self.storage.upload_dir);
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("KG_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("KG_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "KG_SERVER_MAX_CONNECTIONS",
            &mut self.server.max_connections,
        );

        // Database
        Self::apply_env_string("KG_DATABASE_PATH", &mut self.database.path);

        // Logging
        Self::apply_env_parse("KG_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("KG_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("KG_LOG_FILE", &mut self.logging.file);

        // Classifier
        Self::apply_env_string("KG_CLASSIFIER_ENDPOINT", &mut self.classifier.endpoint);
        Self::apply_env_string(
            "KG_CLASSIFIER_VGG16_MODEL",
            &mut self.classifier.vgg16_model,
        );
        Self::apply_env_string(
            "KG_CLASSIFIER_MOBILENET_MODEL",
            &mut self.classifier.mobilenet_model,
        );
        Self::apply_env_parse("KG_CLASSIFIER_INPUT_SIZE", &mut self.classifier.input_size);
        Self::apply_env_parse(
            "KG_CLASSIFIER_TIMEOUT_SECS",
            &mut self.classifier.timeout_secs,
        );

        // Storage
        Self::apply_env_string("KG_STORAGE_UPLOAD_DIR", &mut self.storage.upload_dir);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
