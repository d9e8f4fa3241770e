mod address;
mod batch_response;
mod envelope;

pub(crate) use address::{address, coerce_shard};

pub use batch_response::{BatchResponse, ItemResponse};
pub use envelope::{Envelope, EnvelopeEntry};
