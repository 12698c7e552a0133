use isoscope_core::grid::GridError;
use isoscope_core::model::IsochroneError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("failure reading file {0}: {1}")]
    FileReadError(String, std::io::Error),
    #[error("failure writing file {0}: {1}")]
    FileWriteError(String, std::io::Error),
    #[error("invalid app configuration: {0}")]
    ConfigurationError(String),
    #[error("invalid task descriptor: {0}")]
    InvalidTaskDescriptor(String),
    #[error(transparent)]
    IsochroneError(#[from] IsochroneError),
    #[error(transparent)]
    GridError(#[from] GridError),
    #[error("failure serializing value: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("compute worker failed: {0}")]
    WorkerError(String),
    #[error("unable to deserialize WKT into geometry: {0}")]
    InvalidWkt(String),
    #[error("{0}")]
    InternalError(String),
}
