use crate::{vector::Vector, Result, VectorError};
use log::debug;
use rand::Rng;

pub fn euclidean_distance(v1: &Vector, v2: &Vector) -> Result<f64> {
    Ok(v1.sub(v2)?.length())
}

/// Cosine of the angle between `v1` and `v2`.
///
/// Like [`Vector::angle`], zero-length operands are rejected before the
/// dimensions are compared.
pub fn cosine_similarity(v1: &Vector, v2: &Vector) -> Result<f64> {
    let norm1 = v1.length();
    let norm2 = v2.length();

    if norm1 == 0.0 || norm2 == 0.0 {
        debug!("cosine similarity rejected: norms are {} and {}", norm1, norm2);
        return Err(VectorError::ZeroVector);
    }
    Ok(v1.dot(v2)? / (norm1 * norm2))
}

/// `num` vectors of dimension `dim` with components drawn from `[-1, 1)`.
pub fn generate_random_vectors(dim: usize, num: usize) -> Vec<Vector> {
    let mut rng = rand::thread_rng();

    (0..num)
        .map(|_| (0..dim).map(|_| rng.gen_range(-1.0..1.0)).collect::<Vector>())
        .collect()
}
