//! Top-level error type for the binary and library entry points.

use crate::config::ConfigError;
use crate::input::parse::ParseError;
use crate::input::InputError;
use crate::recorder::RecordError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
