use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;

use super::view_state::ViewState;

/// Handle on a running pipeline.
///
/// Cancelling (or dropping) stops the driver. Backend calls still in flight
/// are dropped with it and their results are never delivered.
pub struct Subscription {
    handle: Option<JoinHandle<()>>,
}

impl Subscription {
    pub(crate) fn new(handle: JoinHandle<()>) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!("pipeline subscription cancelled");
        }
    }

    /// True while the driver has neither finished nor been cancelled.
    pub fn is_active(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Stream of view states produced by [`Kitchen::bind`](super::Kitchen::bind).
///
/// Owns the pipeline's [`Subscription`]; dropping the stream tears the
/// pipeline down.
pub struct ViewStateStream {
    states: UnboundedReceiver<ViewState>,
    subscription: Subscription,
}

impl ViewStateStream {
    pub(crate) fn new(states: UnboundedReceiver<ViewState>, subscription: Subscription) -> Self {
        Self {
            states,
            subscription,
        }
    }

    /// Stop the pipeline. States already emitted can still be read.
    pub fn cancel(&mut self) {
        self.subscription.cancel();
        self.states.close();
    }

    pub fn subscription(&self) -> &Subscription {
        &self.subscription
    }
}

impl Stream for ViewStateStream {
    type Item = ViewState;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().states.poll_recv(cx)
    }
}
