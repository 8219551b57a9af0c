//! Error types for the fallible edges of the kit.
//!
//! Style resolution itself never fails; these cover parsing tokens from text,
//! reading render options, document I/O and writing markup.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown {kind} token: {value}")]
    UnknownToken { kind: &'static str, value: String },

    #[error("invalid {kind} name: {name:?}")]
    InvalidName { kind: &'static str, name: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid render options: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to write markup: {0}")]
    Fmt(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
