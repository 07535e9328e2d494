//! Configuration error types

use thiserror::Error;

/// Errors raised while validating a stack configuration
///
/// Construction fails only on missing or malformed literal values;
/// there is no I/O in scope and therefore nothing to retry.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Required field is empty: {0}")]
    EmptyField(&'static str),

    #[error("Invalid value for {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
