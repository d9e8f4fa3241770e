use doomstack::Doom;

/// Misuse of a session by its integrator. Raised synchronously, never
/// retried.
#[derive(Doom)]
pub enum UsageError {
    #[doom(description("Session was not created for batching"))]
    NotBatching,
    #[doom(description("Call region does not match the region of the batch"))]
    RegionMismatch,
    #[doom(description("Batch no longer accepts calls: it is being (or has been) sent"))]
    BatchClosed,
    #[doom(description("Batch already sent: create a fresh batch for every round trip"))]
    AlreadySent,
    #[doom(description("Too few calls registered: issue a direct call instead"))]
    TooFewCalls,
    #[doom(description("Batch sent outside of a `tokio` runtime"))]
    NoRuntime,
    #[doom(description("Address-form batches only carry reads"))]
    WriteInReadOnlyBatch,
    #[doom(description("Shard is not numeric: {:?}", source))]
    #[doom(wrap(invalid_shard))]
    InvalidShard { source: String },
}
