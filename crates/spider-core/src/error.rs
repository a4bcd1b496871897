// File: crates/spider-core/src/error.rs
// Summary: Error taxonomy for validation, font loading and configuration parsing.

use std::path::PathBuf;

use thiserror::Error;

use crate::text::FontRole;

pub type SpiderResult<T> = Result<T, SpiderError>;

/// A structural or semantic problem in a chart definition.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("validation error in {field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A font face could not be resolved by the font oracle.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("failed to load font {face}: {reason}")]
pub struct FontLoadError {
    pub face: String,
    pub reason: String,
}

impl FontLoadError {
    pub fn new(face: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            face: face.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON chart definition: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse YAML chart definition: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

#[derive(Debug, Error)]
pub enum SpiderError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to load {role} font: {source}")]
    FontLoad {
        role: FontRole,
        #[source]
        source: FontLoadError,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SpiderError {
    /// The validation error, if this is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            _ => None,
        }
    }
}
