use crate::{call::Rejection, transport::TransportError};

use doomstack::{Doom, Top};

use std::sync::Arc;

#[derive(Doom)]
pub enum CallError {
    #[doom(description("Call rejected: {:?}", source))]
    #[doom(wrap(rejected))]
    Rejected { source: Rejection },
    #[doom(description("Exchange failed: {:?}", source))]
    #[doom(wrap(transport_failed))]
    TransportFailed { source: Arc<Top<TransportError>> },
    #[doom(description("Batch rejected: {:?}", source))]
    #[doom(wrap(batch_rejected))]
    BatchRejected { source: Rejection },
    #[doom(description("Malformed batch response: {:?}", source))]
    #[doom(wrap(malformed_batch))]
    MalformedBatch { source: Arc<serde_json::Error> },
    #[doom(description("Malformed batch response item: {:?}", source))]
    #[doom(wrap(malformed_item))]
    MalformedItem { source: serde_json::Error },
    #[doom(description("Batch response lacks an entry for this call"))]
    MissingResponse,
    #[doom(description("Batch dropped before being sent"))]
    Abandoned,
    #[doom(description("Failed to deserialize body: {:?}", source))]
    #[doom(wrap(deserialize_failed))]
    DeserializeFailed { source: serde_json::Error },
}

impl CallError {
    /// The `Rejection` behind a per-call or whole-batch rejection.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            CallError::Rejected { source } | CallError::BatchRejected { source } => Some(source),
            _ => None,
        }
    }
}
