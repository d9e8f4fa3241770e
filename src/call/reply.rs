use crate::call::CallError;

use doomstack::{here, Doom, ResultExt, Top};

use futures::future::BoxFuture;

use serde::de::DeserializeOwned;

use serde_json::Value;

use std::{
    future::Future,
    marker::PhantomData,
    pin::Pin,
    task::{Context, Poll},
};

use tokio::sync::oneshot::{self, Receiver as OneshotReceiver, Sender as OneshotSender};

pub(crate) type Settle = OneshotSender<Result<Value, Top<CallError>>>;
type SettleOutlet = OneshotReceiver<Result<Value, Top<CallError>>>;

/// The eventual outcome of one `Call`. Resolves to the call's body,
/// deserialized as `T`, or to the `CallError` that rejected it.
/// Callers cannot tell whether the call went out alone or in a batch.
pub struct Reply<T = Value> {
    inner: Inner,
    _type: PhantomData<fn() -> T>,
}

enum Inner {
    Direct(BoxFuture<'static, Result<Value, Top<CallError>>>),
    Parked(SettleOutlet),
}

impl<T> Reply<T> {
    pub(crate) fn direct<F>(future: F) -> Self
    where
        F: 'static + Future<Output = Result<Value, Top<CallError>>> + Send,
    {
        Reply {
            inner: Inner::Direct(Box::pin(future)),
            _type: PhantomData,
        }
    }

    /// Returns a `Reply` together with the `Settle` handle that resolves it.
    pub(crate) fn parked() -> (Settle, Self) {
        let (settle, outlet) = oneshot::channel();

        let reply = Reply {
            inner: Inner::Parked(outlet),
            _type: PhantomData,
        };

        (settle, reply)
    }

    pub fn cast<U>(self) -> Reply<U> {
        Reply {
            inner: self.inner,
            _type: PhantomData,
        }
    }
}

impl<T> Future for Reply<T>
where
    T: DeserializeOwned,
{
    type Output = Result<T, Top<CallError>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();

        let outcome = match &mut this.inner {
            Inner::Direct(future) => match future.as_mut().poll(cx) {
                Poll::Ready(outcome) => outcome,
                Poll::Pending => return Poll::Pending,
            },
            Inner::Parked(outlet) => match Pin::new(outlet).poll(cx) {
                Poll::Ready(Ok(outcome)) => outcome,
                // `Settle` dropped unused: the batch never went out
                Poll::Ready(Err(_)) => CallError::Abandoned.fail().spot(here!()),
                Poll::Pending => return Poll::Pending,
            },
        };

        Poll::Ready(outcome.and_then(|body| {
            serde_json::from_value(body)
                .map_err(|source| CallError::DeserializeFailed { source }.into_top())
                .spot(here!())
        }))
    }
}
