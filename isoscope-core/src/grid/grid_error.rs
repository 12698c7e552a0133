use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("unsupported grid resolution {0}, must be in [0, 15]")]
    InvalidResolution(u8),
    #[error("failure tiling extent into grid cells: {0}")]
    TilingError(String),
    #[error("failure dissolving {count} cells into a geometry: {error}")]
    DissolveError { count: usize, error: String },
}
