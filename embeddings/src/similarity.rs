//! Distance computation and ranking for embeddings.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::Embedding;
use crate::error::{EmbeddingError, Result};

/// Compute the euclidean distance between two embeddings.
///
/// Both slices must have the same length; a mismatch is reported instead of
/// silently comparing a prefix.
pub fn euclidean_distance(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(EmbeddingError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let sum: f32 = a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum();

    Ok(sum.sqrt())
}

/// Distance of one candidate to the query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceResult {
    /// Position of the candidate in the input list.
    pub index: usize,

    /// Euclidean distance to the query.
    pub distance: f32,
}

impl DistanceResult {
    /// Create a new distance result.
    pub fn new(index: usize, distance: f32) -> Self {
        Self { index, distance }
    }
}

/// Rank candidates by ascending distance to `query`.
///
/// Sorting uses the absolute distance, which equals the distance itself for
/// an L2 norm. The sort is stable, so equal distances keep input order.
pub fn rank_by_distance(query: &[f32], candidates: &[Embedding]) -> Result<Vec<DistanceResult>> {
    let mut results = candidates
        .iter()
        .enumerate()
        .map(|(index, embedding)| {
            euclidean_distance(embedding, query).map(|d| DistanceResult::new(index, d))
        })
        .collect::<Result<Vec<_>>>()?;

    results.sort_by_key(|r| OrderedFloat(r.distance.abs()));

    Ok(results)
}
