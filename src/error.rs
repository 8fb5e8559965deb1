
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigvarsError {
    #[error("invalid syntax: {line:?}")]
    Syntax { line: String },
    #[error("invalid type used in {literal:?}. allowed types: {allowed}")]
    LiteralType { literal: String, allowed: String },
    #[error("literal {literal:?} is out of range for {type_name}")]
    OutOfRange { literal: String, type_name: &'static str },
    #[error("Internal invariant violated: {0}")]
    Invariant(String),
    #[error("name '{0}' not found")]
    NameNotFound(String),
    #[error("variable '{var}' was not found in '{name}'")]
    VarNotFound { var: String, name: String },
    #[error("key '{0}' not found")]
    KeyNotFound(String),
    #[error("no held variable named '{0}'")]
    NotHeld(String),
    #[error("{0}")]
    Frozen(&'static str),
    #[error("{expected} object cannot be compared to object of type {found}")]
    TypeMismatch { expected: &'static str, found: &'static str },
    #[error("invalid storage name: {0:?}")]
    InvalidName(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("I/O error accessing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Data corruption in {path}: {message}")]
    DataCorruption { path: PathBuf, message: String },
    #[error("Lock poisoned: {0}")]
    Lock(String),
}

impl ConfigvarsError {
    /// Errors the interactive session reports and recovers from.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::Syntax { .. } | Self::LiteralType { .. } | Self::OutOfRange { .. } | Self::Invariant(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ConfigvarsError>;

// Helper conversions
impl From<config::ConfigError> for ConfigvarsError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
