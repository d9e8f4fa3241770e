use crate::{
    debug,
    session::batch::{Batch, Registry},
    transport::Transport,
};

use std::sync::Mutex;

use tokio::sync::Notify;

impl<T> Batch<T>
where
    T: Transport,
{
    /// Returns once every `Descriptor` in `registry` has its settle
    /// handle wired. Each pass scans the whole registry; between passes
    /// the barrier waits for the next registration to signal `readiness`.
    pub(in crate::session::batch) async fn wait_ready(
        registry: &Mutex<Registry>,
        readiness: &Notify,
    ) {
        let mut passes = 0;

        loop {
            passes += 1;

            if registry.lock().unwrap().all_wired() {
                break;
            }

            readiness.notified().await;
        }

        debug!("Batch ready after {} pass(es).", passes);
    }
}
