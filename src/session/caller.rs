use crate::{
    call::{Call, Reply},
    session::UsageError,
};

use doomstack::Top;

use std::sync::Arc;

/// Issues `Call`s. Implemented by both the direct and the batching
/// session, so endpoint wrappers work unchanged over either.
pub trait Caller: Send + Sync {
    fn call(&self, call: Call) -> Result<Reply, Top<UsageError>>;
}

impl<C> Caller for &C
where
    C: Caller + ?Sized,
{
    fn call(&self, call: Call) -> Result<Reply, Top<UsageError>> {
        (**self).call(call)
    }
}

impl<C> Caller for Arc<C>
where
    C: Caller + ?Sized,
{
    fn call(&self, call: Call) -> Result<Reply, Top<UsageError>> {
        (**self).call(call)
    }
}
