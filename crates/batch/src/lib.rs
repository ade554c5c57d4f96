mod error;
mod limits;
mod record;
mod split;

pub use error::BatchError;
pub use limits::{BatchConfig, BatchLimits};
pub use record::{Document, Embedding, Id, Metadata, RecordBatch};
pub use split::create_batches;
