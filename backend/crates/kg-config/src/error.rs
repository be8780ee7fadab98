use std::fmt;
use std::ops::RangeInclusive;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

/// Which `config.toml` table a bad value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Server,
    Database,
    Classifier,
    Storage,
}

impl fmt::Display for ConfigSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Server => "server",
            Self::Database => "database",
            Self::Classifier => "classifier",
            Self::Storage => "storage",
        })
    }
}

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("Invalid [{section}] setting: {message} {location}")]
    Invalid {
        section: ConfigSection,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn invalid(section: ConfigSection, message: impl Into<String>) -> Self {
        ConfigError::Invalid {
            section,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn section(&self) -> Option<ConfigSection> {
        match self {
            Self::Invalid { section, .. } => Some(*section),
            Self::Io { .. } | Self::Toml { .. } => None,
        }
    }
}

/// `section.field` must lie in `range`
#[track_caller]
pub(crate) fn ensure_in_range<T>(
    section: ConfigSection,
    field: &str,
    value: T,
    range: RangeInclusive<T>,
) -> ConfigErrorResult<()>
where
    T: PartialOrd + fmt::Display,
{
    if range.contains(&value) {
        return Ok(());
    }
    Err(ConfigError::invalid(
        section,
        format!(
            "{}.{} must be {}-{}, got {}",
            section,
            field,
            range.start(),
            range.end(),
            value
        ),
    ))
}

/// `section.field` must be a non-empty relative path that cannot climb out with `..`
#[track_caller]
pub(crate) fn ensure_relative_path(
    section: ConfigSection,
    field: &str,
    value: &str,
) -> ConfigErrorResult<()> {
    if value.trim().is_empty() || Path::new(value).is_absolute() || value.contains("..") {
        return Err(ConfigError::invalid(
            section,
            format!(
                "{}.{} must be a non-empty relative path without '..', got '{}'",
                section, field, value
            ),
        ));
    }
    Ok(())
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
