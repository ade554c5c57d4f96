use serde::{Deserialize, Serialize};

use crate::error::BatchError;

pub type Id = String;
pub type Embedding = Vec<f32>;
pub type Metadata = serde_json::Map<String, serde_json::Value>;
pub type Document = String;

/// Parallel record columns submitted together in one write.
///
/// `ids` is required. Each optional column is either absent or holds exactly
/// one entry per id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordBatch {
    pub ids: Vec<Id>,
    pub embeddings: Option<Vec<Embedding>>,
    pub metadatas: Option<Vec<Metadata>>,
    pub documents: Option<Vec<Document>>,
}

impl RecordBatch {
    pub fn new(ids: Vec<Id>) -> Self {
        Self {
            ids,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_embeddings(mut self, embeddings: Vec<Embedding>) -> Self {
        self.embeddings = Some(embeddings);
        self
    }

    #[must_use]
    pub fn with_metadatas(mut self, metadatas: Vec<Metadata>) -> Self {
        self.metadatas = Some(metadatas);
        self
    }

    #[must_use]
    pub fn with_documents(mut self, documents: Vec<Document>) -> Self {
        self.documents = Some(documents);
        self
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Check that every present column has one entry per id.
    ///
    /// # Errors
    /// Returns `BatchError::LengthMismatch` naming the first offending column.
    pub fn validate(&self) -> Result<(), BatchError> {
        let expected = self.ids.len();
        let columns = [
            ("embeddings", self.embeddings.as_ref().map(Vec::len)),
            ("metadatas", self.metadatas.as_ref().map(Vec::len)),
            ("documents", self.documents.as_ref().map(Vec::len)),
        ];
        for (field, len) in columns {
            match len {
                Some(actual) if actual != expected => {
                    return Err(BatchError::LengthMismatch {
                        field,
                        expected,
                        actual,
                    });
                }
                _ => {}
            }
        }
        Ok(())
    }
}
