use crate::session::Tally;

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use tokio::sync::oneshot::Receiver as OneshotReceiver;

/// Resolves once every `Reply` of a sent `Batch` has been settled.
/// Resolves to `None` if the dispatch was lost (e.g., the `Transport`
/// panicked), in which case every pending `Reply` is `Abandoned`.
pub struct Completion {
    tally_outlet: OneshotReceiver<Tally>,
}

impl Completion {
    pub(in crate::session::batch) fn new(tally_outlet: OneshotReceiver<Tally>) -> Self {
        Completion { tally_outlet }
    }
}

impl Future for Completion {
    type Output = Option<Tally>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.get_mut().tally_outlet)
            .poll(cx)
            .map(Result::ok)
    }
}
