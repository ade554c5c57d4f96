use crate::error::BatchError;
use crate::limits::BatchLimits;
use crate::record::{Document, Embedding, Id, Metadata, RecordBatch};

/// Split records into batches no larger than the limit's max batch size.
///
/// Absent columns stay absent in every batch.
///
/// # Errors
/// Returns `BatchError::InvalidBatchSize` for a zero limit and
/// `BatchError::LengthMismatch` when a present column's length differs from `ids`.
pub fn create_batches<L: BatchLimits + ?Sized>(
    limits: &L,
    ids: Vec<Id>,
    embeddings: Option<Vec<Embedding>>,
    metadatas: Option<Vec<Metadata>>,
    documents: Option<Vec<Document>>,
) -> Result<Vec<RecordBatch>, BatchError> {
    RecordBatch {
        ids,
        embeddings,
        metadatas,
        documents,
    }
    .split(limits.max_batch_size())
}

impl RecordBatch {
    /// Split into consecutive batches of `max_batch_size`, the last holding the
    /// remainder. A batch already within the limit is returned unchanged.
    ///
    /// # Errors
    /// See [`create_batches`].
    pub fn split(self, max_batch_size: usize) -> Result<Vec<Self>, BatchError> {
        if max_batch_size == 0 {
            return Err(BatchError::InvalidBatchSize(max_batch_size));
        }
        self.validate()?;

        let total = self.len();
        if total <= max_batch_size {
            return Ok(vec![self]);
        }

        let mut embeddings = self.embeddings.map(|c| into_chunks(c, max_batch_size));
        let mut metadatas = self.metadatas.map(|c| into_chunks(c, max_batch_size));
        let mut documents = self.documents.map(|c| into_chunks(c, max_batch_size));

        let batches: Vec<Self> = into_chunks(self.ids, max_batch_size)
            .map(|ids| Self {
                ids,
                embeddings: embeddings.as_mut().and_then(Iterator::next),
                metadatas: metadatas.as_mut().and_then(Iterator::next),
                documents: documents.as_mut().and_then(Iterator::next),
            })
            .collect();

        tracing::debug!(
            total,
            max_batch_size,
            batches = batches.len(),
            "split records into batches"
        );
        Ok(batches)
    }
}

fn into_chunks<T>(items: Vec<T>, size: usize) -> std::vec::IntoIter<Vec<T>> {
    let mut chunks = Vec::with_capacity(items.len().div_ceil(size));
    let mut items = items.into_iter();
    loop {
        let chunk: Vec<T> = items.by_ref().take(size).collect();
        if chunk.is_empty() {
            break;
        }
        chunks.push(chunk);
    }
    chunks.into_iter()
}
