use thiserror::Error;

use crate::EngineError;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid editor options: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Can't serialize editor options: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error(transparent)]
    Engine(#[from] EngineError),
}
