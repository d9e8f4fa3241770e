use crate::{
    call::{Call, Reply},
    session::{Batch, BatchStatus, Caller, Completion, Direct, UsageError},
    transport::Transport,
};

use doomstack::{here, Doom, ResultExt, Top};

/// Either kind of session behind one handle, chosen at construction.
/// Useful where the caller decides at runtime whether to batch.
pub enum Session<T: Transport> {
    Direct(Direct<T>),
    Batch(Batch<T>),
}

impl<T> Session<T>
where
    T: Transport,
{
    pub fn is_batch(&self) -> bool {
        matches!(self, Session::Batch(_))
    }

    /// Parks `call` in the batch. Unlike `Caller::call`, this refuses
    /// to fall back on a direct exchange.
    pub fn register(&self, call: Call) -> Result<Reply, Top<UsageError>> {
        match self {
            Session::Direct(_) => UsageError::NotBatching.fail().spot(here!()),
            Session::Batch(batch) => batch.register(call),
        }
    }

    pub fn send(&self) -> Result<Completion, Top<UsageError>> {
        match self {
            Session::Direct(_) => UsageError::NotBatching.fail().spot(here!()),
            Session::Batch(batch) => batch.send(),
        }
    }

    pub fn status(&self) -> Option<BatchStatus> {
        match self {
            Session::Direct(_) => None,
            Session::Batch(batch) => Some(batch.status()),
        }
    }
}

impl<T> From<Direct<T>> for Session<T>
where
    T: Transport,
{
    fn from(direct: Direct<T>) -> Self {
        Session::Direct(direct)
    }
}

impl<T> From<Batch<T>> for Session<T>
where
    T: Transport,
{
    fn from(batch: Batch<T>) -> Self {
        Session::Batch(batch)
    }
}

impl<T> Caller for Session<T>
where
    T: Transport,
{
    fn call(&self, call: Call) -> Result<Reply, Top<UsageError>> {
        match self {
            Session::Direct(direct) => direct.call(call),
            Session::Batch(batch) => batch.call(call),
        }
    }
}
