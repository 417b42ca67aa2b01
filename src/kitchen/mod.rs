//! Event-to-view-state pipeline.
//!
//! `bind` composes three stages over a single driver task:
//!
//! 1. [`expand`]: each input event, plus a deferred `LoadFetched` for `Load`
//! 2. [`AccumulateReducer`]: sequential fold of `(value, event)` from `("", Noop)`
//! 3. [`project`]: view states for each fold step, plus a deferred submit
//!
//! Overlapping backend calls are neither serialized nor cancelled; their
//! completions are folded in the order they resolve.

mod accumulate;
mod driver;
mod event;
mod expand;
mod project;
mod stream;
mod view_state;

use std::sync::Arc;

use futures::Stream;
use tokio::sync::mpsc;

pub use accumulate::{accumulate, AccumulateReducer, Step};
pub use driver::Completion;
pub use event::Event;
pub use expand::{expand, Expansion, FetchRequest};
pub use project::{project, submit_completed, Projection, SubmitRequest};
pub use stream::{Subscription, ViewStateStream};
pub use view_state::{CategoryPage, ViewState};

use crate::backend::BackendService;
use driver::Driver;

/// Turns an event stream into a view-state stream, calling out to a backend
/// along the way.
#[derive(Clone)]
pub struct Kitchen {
    backend: Arc<dyn BackendService>,
}

impl Kitchen {
    pub fn new(backend: Arc<dyn BackendService>) -> Self {
        Self { backend }
    }

    /// Subscribe the pipeline to `events`.
    ///
    /// Each call starts a fresh accumulator. Must be called from within a
    /// tokio runtime.
    pub fn bind<S>(&self, events: S) -> ViewStateStream
    where
        S: Stream<Item = Event> + Send + Unpin + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let driver = Driver::new(Arc::clone(&self.backend), tx);
        let handle = tokio::spawn(driver.run(events));
        ViewStateStream::new(rx, Subscription::new(handle))
    }
}
