pub mod api;

mod call;
mod context;
mod session;
mod transport;
mod wire;

#[cfg(not(test))]
pub(crate) use log::{debug, info, warn};

#[cfg(test)]
pub(crate) use std::{println as info, println as debug, println as warn};

pub use api::Api;
pub use call::{Call, CallError, Rejection, Reply};
pub use context::{Context, ContextError};
pub use session::{
    Batch, BatchStatus, Caller, Completion, Direct, EnvelopeForm, Session, SessionSettings, Tally,
    UsageError,
};
pub use transport::{
    Exchange, HttpTransport, HttpTransportSettings, Method, Response, Transport, TransportError,
};
pub use wire::{BatchResponse, Envelope, EnvelopeEntry, ItemResponse};
