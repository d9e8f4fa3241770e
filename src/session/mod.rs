mod batch;
mod caller;
mod direct;
mod normalize;
mod session;
mod session_settings;
mod usage_error;

pub use batch::{Batch, BatchStatus, Completion, Tally};
pub use caller::Caller;
pub use direct::Direct;
pub use session::Session;
pub use session_settings::{EnvelopeForm, SessionSettings};
pub use usage_error::UsageError;

use normalize::normalize;
