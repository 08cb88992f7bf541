use thiserror::Error;

use crate::games::GameId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("A game with id {0} already exists")]
    Duplicate(GameId),

    #[error("Import error: {0}")]
    Import(String),

    #[error("Storage read error: {0}")]
    StorageRead(String),

    #[error("Bootstrap fetch error: {0}")]
    BootstrapFetch(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
