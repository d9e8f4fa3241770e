use crate::session::batch::{BatchStatus, Descriptor};

/// Ordered `Descriptor`s of a `Batch`. A descriptor's index is its
/// positional key on the wire.
pub(in crate::session::batch) struct Registry {
    pub status: BatchStatus,
    pub descriptors: Vec<Descriptor>,
}

impl Registry {
    pub fn new() -> Self {
        Registry {
            status: BatchStatus::Collecting,
            descriptors: Vec::new(),
        }
    }

    pub fn all_wired(&self) -> bool {
        self.descriptors.iter().all(Descriptor::is_wired)
    }
}
