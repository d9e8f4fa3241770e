mod batch_status;
mod completion;
mod descriptor;
mod dispatch;
mod fan_out;
mod readiness;
mod registry;
mod tally;

pub use batch_status::BatchStatus;
pub use completion::Completion;
pub use tally::Tally;

use descriptor::Descriptor;
use registry::Registry;

use crate::{
    call::{Call, Reply},
    debug, info,
    session::{normalize, Caller, EnvelopeForm, SessionSettings, UsageError},
    transport::Transport,
};

use doomstack::{here, Doom, ResultExt, Top};

use std::sync::{Arc, Mutex};

use tokio::{
    runtime::Handle,
    sync::{oneshot, Notify},
};

/// Batching session. Calls registered on a `Batch` are parked until
/// `send`, then travel together in one exchange; each `Reply` settles
/// from its own item of the combined response.
///
/// A `Batch` is single-use: once sent, it refuses new calls and further
/// sends. Create a fresh one (e.g., through `Direct::batch`) for every
/// round trip.
pub struct Batch<T: Transport> {
    transport: Arc<T>,
    region: Option<String>,
    settings: SessionSettings,
    registry: Arc<Mutex<Registry>>,
    readiness: Arc<Notify>,
}

impl<T> Batch<T>
where
    T: Transport,
{
    pub fn new(transport: Arc<T>, region: Option<String>, settings: SessionSettings) -> Self {
        debug!("New batch (region {:?}).", region);

        Batch {
            transport,
            region,
            settings,
            registry: Arc::new(Mutex::new(Registry::new())),
            readiness: Arc::new(Notify::new()),
        }
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn status(&self) -> BatchStatus {
        self.registry.lock().unwrap().status
    }

    pub fn len(&self) -> usize {
        self.registry.lock().unwrap().descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parks `call` in the batch and returns its pending `Reply`.
    pub fn register(&self, call: Call) -> Result<Reply, Top<UsageError>> {
        let mut registry = self.registry.lock().unwrap();

        if registry.status != BatchStatus::Collecting {
            return UsageError::BatchClosed.fail().spot(here!());
        }

        if call.region != self.region {
            return UsageError::RegionMismatch.fail().spot(here!());
        }

        if self.settings.form == EnvelopeForm::Address && !call.is_read() {
            return UsageError::WriteInReadOnlyBatch.fail().spot(here!());
        }

        let call = normalize(call)?;

        // Wire the settle handle before the descriptor becomes visible
        let (settle, reply) = Reply::parked();
        registry.descriptors.push(Descriptor::new(call, settle));

        debug!(
            "Registered call {} in batch.",
            registry.descriptors.len() - 1
        );

        drop(registry);
        self.readiness.notify_one();

        Ok(reply)
    }

    /// Closes the batch and dispatches it. The returned `Completion`
    /// resolves once every registered `Reply` has been settled.
    ///
    /// Must be called from within a `tokio` runtime: outside of one,
    /// `send` fails with `NoRuntime` and the batch keeps collecting.
    pub fn send(&self) -> Result<Completion, Top<UsageError>> {
        let runtime = Handle::try_current()
            .map_err(|_| UsageError::NoRuntime.into_top())
            .spot(here!())?;

        {
            let mut registry = self.registry.lock().unwrap();

            if registry.status != BatchStatus::Collecting {
                return UsageError::AlreadySent.fail().spot(here!());
            }

            if registry.descriptors.len() < self.settings.minimum_batch_size {
                return UsageError::TooFewCalls.fail().spot(here!());
            }

            registry.status = BatchStatus::Sending;

            info!("Sending batch ({} calls).", registry.descriptors.len());
        }

        let (tally_inlet, tally_outlet) = oneshot::channel();

        runtime.spawn(Batch::dispatch(
            self.transport.clone(),
            self.registry.clone(),
            self.readiness.clone(),
            self.region.clone(),
            self.settings.clone(),
            tally_inlet,
        ));

        Ok(Completion::new(tally_outlet))
    }
}

impl<T> Caller for Batch<T>
where
    T: Transport,
{
    fn call(&self, call: Call) -> Result<Reply, Top<UsageError>> {
        self.register(call)
    }
}
