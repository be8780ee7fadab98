mod classifier_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod storage_config;

pub use classifier_config::ClassifierConfig;
pub use config::{Config, DatabaseConfig};
pub use error::{ConfigError, ConfigErrorResult, ConfigSection};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use storage_config::StorageConfig;

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "KG_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".kg";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const MIN_PORT: u16 = 1024;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const MIN_MAX_CONNECTIONS: u32 = 1;
const MAX_MAX_CONNECTIONS: u32 = 100;

const DEFAULT_DATABASE_FILENAME: &str = "knee.db";

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_CLASSIFIER_ENDPOINT: &str = "http://127.0.0.1:8501";
const DEFAULT_VGG16_MODEL: &str = "knee_vgg16";
const DEFAULT_MOBILENET_MODEL: &str = "knee_mobilenet";
const DEFAULT_INPUT_SIZE: u32 = 224;
const MIN_INPUT_SIZE: u32 = 32;
const MAX_INPUT_SIZE: u32 = 1024;
const DEFAULT_CLASSIFIER_TIMEOUT_SECS: u64 = 30;
const MIN_CLASSIFIER_TIMEOUT_SECS: u64 = 1;
const MAX_CLASSIFIER_TIMEOUT_SECS: u64 = 600;

const DEFAULT_UPLOAD_DIR: &str = "static/tests";
