use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{face::Face, palette::Palette};

/// How a session undoes a quarter-turn.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InverseStrategy {
    /// One counter-clockwise permutation.
    #[default]
    Direct,
    /// Three clockwise quarter-turns.
    ThreeQuarterTurns,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub palette: Palette,
    pub inverse_strategy: InverseStrategy,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read the configuration file: {0}")]
    Io(#[from] io::Error),
    #[error("Could not parse the configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Face {face} uses the symbol {symbol:?}, which another face already uses")]
    DuplicateSymbol { face: Face, symbol: char },
}

impl SessionConfig {
    /// Parse a TOML configuration. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// If the TOML is malformed or two faces share a palette symbol.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str::<SessionConfig>(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    ///
    /// # Errors
    ///
    /// See [`SessionConfig::from_toml_str`]; also if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    /// # Errors
    ///
    /// If two faces share a palette symbol.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.palette.duplicate() {
            Some((face, symbol)) => Err(ConfigError::DuplicateSymbol { face, symbol }),
            None => Ok(()),
        }
    }
}
