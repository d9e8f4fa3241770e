use crate::call::{Call, CallError, Settle};

use doomstack::Top;

use serde_json::Value;

/// A parked `Call`, together with the handle that settles its `Reply`.
pub(in crate::session::batch) struct Descriptor {
    pub call: Call,
    pub settle: Option<Settle>,
}

impl Descriptor {
    pub fn new(call: Call, settle: Settle) -> Self {
        Descriptor {
            call,
            settle: Some(settle),
        }
    }

    pub fn is_wired(&self) -> bool {
        self.settle.is_some()
    }

    /// Delivers `outcome` to the caller. Consumes the settle handle,
    /// so later calls are no-ops.
    pub fn settle(&mut self, outcome: Result<Value, Top<CallError>>) {
        if let Some(settle) = self.settle.take() {
            // The caller may have dropped its `Reply`
            let _ = settle.send(outcome);
        }
    }
}
