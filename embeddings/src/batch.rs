//! Batched embedding of document lists.

use tracing::debug;

use crate::Embedding;
use crate::error::{EmbeddingError, Result};
use crate::provider::{EmbeddingProvider, EmbeddingRequest};

/// Maximum number of texts sent in one batch request.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Embed `texts` as retrieval documents, `batch_size` at a time.
///
/// Batches are consecutive slices of the input and are awaited one after
/// another. The result has exactly one embedding per text, in input order;
/// the first failing batch aborts the whole call.
pub async fn embed_in_batches<P>(
    provider: &P,
    texts: &[String],
    batch_size: usize,
) -> Result<Vec<Embedding>>
where
    P: EmbeddingProvider + ?Sized,
{
    let batch_size = batch_size.max(1);
    let mut embeddings = Vec::with_capacity(texts.len());

    for (batch_index, batch) in texts.chunks(batch_size).enumerate() {
        let requests: Vec<EmbeddingRequest> =
            batch.iter().map(EmbeddingRequest::document).collect();

        let responses = provider.embed_batch(requests).await?;
        if responses.len() != batch.len() {
            return Err(EmbeddingError::CountMismatch {
                expected: batch.len(),
                actual: responses.len(),
            });
        }

        debug!(
            "Embedded batch {batch_index} ({} documents) with {}",
            batch.len(),
            provider.name()
        );
        embeddings.extend(responses.into_iter().map(|r| r.embedding));
    }

    Ok(embeddings)
}
