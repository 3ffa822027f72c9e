use skull_textures::SkullError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Couldn't load config: {0}")]
    ConfigLoadError(String),

    #[error("Invalid player id: {0}")]
    InvalidPlayerId(String),

    #[error("Provide exactly one of --uuid, --url or --payload")]
    InvalidSource,

    #[error("Couldn't serialize output: {0}")]
    OutputError(#[from] serde_json::Error),

    #[error(transparent)]
    SkullError(#[from] SkullError),
}
