use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config format in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Characters inserted when Enter is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineSeparator {
    Lf,
    Crlf,
    Cr,
}

impl LineSeparator {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineSeparator::Lf => "\n",
            LineSeparator::Crlf => "\r\n",
            LineSeparator::Cr => "\r",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LineSeparator::Lf => "LF",
            LineSeparator::Crlf => "CRLF",
            LineSeparator::Cr => "CR",
        }
    }
}

impl Default for LineSeparator {
    fn default() -> Self {
        if cfg!(windows) {
            LineSeparator::Crlf
        } else {
            LineSeparator::Lf
        }
    }
}

impl fmt::Display for LineSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LineSeparator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lf" => Ok(LineSeparator::Lf),
            "crlf" => Ok(LineSeparator::Crlf),
            "cr" => Ok(LineSeparator::Cr),
            other => Err(format!("unknown line separator '{}' (expected lf, crlf or cr)", other)),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SkConfig {
    pub line_separator: LineSeparator,
}

impl SkConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load an explicit config file, else the user config file if present, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            log::debug!("loading config from {}", path.display());
            return Self::from_file(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => {
                log::debug!("loading config from {}", path.display());
                Self::from_file(&path)
            }
            _ => {
                log::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// `<config dir>/sk/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sk").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_strings() {
        assert_eq!(LineSeparator::Lf.as_str(), "\n");
        assert_eq!(LineSeparator::Crlf.as_str(), "\r\n");
        assert_eq!(LineSeparator::Cr.as_str(), "\r");
        assert_eq!(LineSeparator::Crlf.to_string(), "CRLF");
    }

    #[test]
    fn test_separator_from_str() {
        assert_eq!("LF".parse::<LineSeparator>(), Ok(LineSeparator::Lf));
        assert_eq!("crlf".parse::<LineSeparator>(), Ok(LineSeparator::Crlf));
        assert!("nl".parse::<LineSeparator>().is_err());
    }

    #[test]
    fn test_parse_toml() {
        let config: SkConfig = toml::from_str("line-separator = \"crlf\"").unwrap();
        assert_eq!(config.line_separator, LineSeparator::Crlf);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: SkConfig = toml::from_str("").unwrap();
        assert_eq!(config.line_separator, LineSeparator::default());
    }
}
