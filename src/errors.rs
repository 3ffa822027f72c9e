use std::str::Utf8Error;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SkullError>;

#[derive(Error, Debug)]
pub enum SkullError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid texture URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Target is not a player skull")]
    NotASkull,
    #[error("Could not commit block state: {0}")]
    Commit(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("Parsing error")]
    Parse,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<Utf8Error> for SkullError {
    fn from(_: Utf8Error) -> Self {
        Self::Parse
    }
}

impl From<std::string::FromUtf8Error> for SkullError {
    fn from(_: std::string::FromUtf8Error) -> Self {
        Self::Parse
    }
}

impl From<serde_json::Error> for SkullError {
    fn from(_: serde_json::Error) -> Self {
        Self::Parse
    }
}

impl From<base64::DecodeError> for SkullError {
    fn from(_: base64::DecodeError) -> Self {
        Self::Parse
    }
}

impl From<toml::de::Error> for SkullError {
    fn from(value: toml::de::Error) -> Self {
        Self::Config(value.to_string())
    }
}
