//! Core error type.
//!
//! Sub-crates define their own error enums; `CoreError` covers only the
//! primitive parsing and configuration checks that live in this crate.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `club-core`.
pub type CoreResult<T> = Result<T, CoreError>;
