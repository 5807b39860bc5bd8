// ABOUTME: Configuration error type for planner settings loaded from defaults and environment
// ABOUTME: Converts into the unified AppError at the crate boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

use nutriplan_core::errors::{AppError, ErrorCode};
use std::env;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two related settings are in the wrong order or overlap
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// A required setting is absent
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// An environment variable could not be read
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// An environment variable could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// A setting lies outside its accepted bounds
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match error {
            ConfigError::Parse(_) | ConfigError::EnvVar(_) => ErrorCode::ConfigError,
            ConfigError::InvalidRange(_)
            | ConfigError::MissingField(_)
            | ConfigError::ValueOutOfRange(_) => ErrorCode::ConfigInvalid,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
