pub mod config;
pub mod utils;
pub mod vector;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VectorError {
    #[error("Dimension Error: vectors have different dimensions ({left} != {right})")]
    DimensionMismatch { left: usize, right: usize },
    #[error("Zero Vector Error: angle is undefined for a zero-length vector")]
    ZeroVector,
    #[error("Dimension Error: cross product needs two 3D vectors, got {left} and {right}")]
    NotThreeDimensional { left: usize, right: usize },
    #[error("Tolerance Error: epsilon must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),
    #[error("Config Error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VectorError>;

// Re-export main types for convenience
pub use config::ToleranceConfig;
pub use utils::{cosine_similarity, euclidean_distance, generate_random_vectors};
pub use vector::Vector;
