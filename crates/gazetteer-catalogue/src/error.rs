use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("cannot compute density of {0}: area is zero")]
    ZeroArea(String),
    #[error("country not found in catalogue: {0}")]
    NotFound(String),
    #[error("catalogue is empty")]
    Empty,
    #[error("index {index} out of bounds for catalogue of length {len}")]
    OutOfBounds { index: usize, len: usize },
}
