use crate::transport::{Exchange, Response, Transport, TransportError};

use async_trait::async_trait;

use doomstack::{here, Doom, ResultExt, Top};

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};

use tokio::sync::Notify;

type Script = Box<dyn Fn(&Exchange) -> Option<Response> + Send + Sync>;

/// In-process `Transport`: records every `Exchange` and answers through
/// `script` (`None` makes the exchange fail as `Unreachable`).
pub(crate) struct MockTransport {
    exchanges: Mutex<Vec<Exchange>>,
    script: Script,
    gate: Option<Gate>,
}

struct Gate {
    open: AtomicBool,
    notify: Notify,
}

impl MockTransport {
    pub fn new<F>(script: F) -> Arc<Self>
    where
        F: 'static + Fn(&Exchange) -> Option<Response> + Send + Sync,
    {
        Arc::new(MockTransport {
            exchanges: Mutex::new(Vec::new()),
            script: Box::new(script),
            gate: None,
        })
    }

    /// Like `new`, but every exchange waits until `open` is called.
    pub fn gated<F>(script: F) -> Arc<Self>
    where
        F: 'static + Fn(&Exchange) -> Option<Response> + Send + Sync,
    {
        Arc::new(MockTransport {
            exchanges: Mutex::new(Vec::new()),
            script: Box::new(script),
            gate: Some(Gate {
                open: AtomicBool::new(false),
                notify: Notify::new(),
            }),
        })
    }

    pub fn failing() -> Arc<Self> {
        MockTransport::new(|_| None)
    }

    pub fn open(&self) {
        if let Some(gate) = &self.gate {
            gate.open.store(true, Ordering::SeqCst);
            gate.notify.notify_waiters();
        }
    }

    pub fn exchanges(&self) -> Vec<Exchange> {
        self.exchanges.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.exchanges.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn exchange(&self, exchange: Exchange) -> Result<Response, Top<TransportError>> {
        self.exchanges.lock().unwrap().push(exchange.clone());

        if let Some(gate) = &self.gate {
            loop {
                let notified = gate.notify.notified();

                if gate.open.load(Ordering::SeqCst) {
                    break;
                }

                notified.await;
            }
        }

        (self.script)(&exchange)
            .ok_or(TransportError::Unreachable.into_top())
            .spot(here!())
    }
}
