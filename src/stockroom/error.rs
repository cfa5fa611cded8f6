use crate::model::EntityId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockroomError {
    #[error("Item with ID {0} already exists")]
    DuplicateKey(EntityId),

    #[error("Item with ID {0} not found")]
    NotFound(EntityId),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, StockroomError>;
