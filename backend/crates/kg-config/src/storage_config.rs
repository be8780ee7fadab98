use crate::error::ensure_relative_path;
use crate::{ConfigErrorResult, ConfigSection, DEFAULT_UPLOAD_DIR};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory uploaded images are written to, relative to the working directory
    pub upload_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: String::from(DEFAULT_UPLOAD_DIR),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        ensure_relative_path(ConfigSection::Storage, "upload_dir", &self.upload_dir)
    }
}
