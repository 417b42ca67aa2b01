//! Single-task driver that owns the accumulator.
//!
//! Every fold step runs here, one at a time. Backend calls are the only
//! suspension points: each is polled once inline and, if not ready, parked in
//! a [`JoinSet`] whose completions re-enter the loop ahead of new input.
//! A call that panics, inline or parked, is logged and its completion dropped.

use std::ops::ControlFlow;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::{FutureExt, Stream, StreamExt};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinSet;

use super::accumulate::{AccumulateReducer, Step};
use super::event::Event;
use super::expand::{expand, Expansion, FetchRequest};
use super::project::{project, submit_completed, Projection, SubmitRequest};
use super::view_state::ViewState;
use crate::backend::BackendService;
use crate::mvi::Reducer;

/// What an async backend call resolves to, along with the request that
/// started it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Fetched { request: FetchRequest, value: String },
    Submitted { request: SubmitRequest, result: String },
}

type Pending = BoxFuture<'static, Completion>;

pub(crate) struct Driver {
    backend: Arc<dyn BackendService>,
    output: UnboundedSender<ViewState>,
    step: Step,
    in_flight: JoinSet<Completion>,
}

impl Driver {
    pub(crate) fn new(backend: Arc<dyn BackendService>, output: UnboundedSender<ViewState>) -> Self {
        Self {
            backend,
            output,
            step: Step::default(),
            in_flight: JoinSet::new(),
        }
    }

    /// Drive the pipeline until the input ends and nothing is in flight, or
    /// until the subscriber goes away.
    pub(crate) async fn run<S>(mut self, mut events: S)
    where
        S: Stream<Item = Event> + Unpin,
    {
        tracing::debug!(backend = self.backend.name(), "pipeline started");
        let mut input_open = true;

        loop {
            let flow = tokio::select! {
                biased;

                Some(joined) = self.in_flight.join_next(), if !self.in_flight.is_empty() => {
                    match joined {
                        Ok(completion) => self.complete(completion),
                        Err(err) => {
                            tracing::error!(error = %err, "backend call did not complete");
                            ControlFlow::Continue(())
                        }
                    }
                }

                next = events.next(), if input_open => match next {
                    Some(event) => self.dispatch(event),
                    None => {
                        tracing::debug!(in_flight = self.in_flight.len(), "event input closed");
                        input_open = false;
                        ControlFlow::Continue(())
                    }
                },

                else => break,
            };

            if flow.is_break() {
                break;
            }
        }

        tracing::debug!(value = %self.step.value, "pipeline stopped");
    }

    fn dispatch(&mut self, event: Event) -> ControlFlow<()> {
        tracing::debug!(event = event.kind(), "event received");
        let Expansion { event, fetch } = expand(event);
        self.fold(event)?;

        if let Some(request) = fetch {
            let backend = Arc::clone(&self.backend);
            let pending = async move {
                let value = backend.fetch_initial_value(&request.seed).await;
                Completion::Fetched { request, value }
            };
            self.start(pending.boxed())?;
        }

        ControlFlow::Continue(())
    }

    fn fold(&mut self, event: Event) -> ControlFlow<()> {
        let step = AccumulateReducer::reduce(std::mem::take(&mut self.step), event);
        tracing::trace!(event = step.event.kind(), value = %step.value, "fold step");

        let Projection { states, submit } = project(&step);
        self.step = step;
        self.emit_all(states)?;

        if let Some(request) = submit {
            let backend = Arc::clone(&self.backend);
            let pending = async move {
                let result = backend.submit_value(&request.snapshot).await;
                Completion::Submitted { request, result }
            };
            self.start(pending.boxed())?;
        }

        ControlFlow::Continue(())
    }

    fn start(&mut self, mut pending: Pending) -> ControlFlow<()> {
        match AssertUnwindSafe(&mut pending).catch_unwind().now_or_never() {
            Some(Ok(completion)) => self.complete(completion),
            Some(Err(_)) => {
                tracing::error!("backend call panicked on first poll");
                ControlFlow::Continue(())
            }
            None => {
                self.in_flight.spawn(pending);
                ControlFlow::Continue(())
            }
        }
    }

    fn complete(&mut self, completion: Completion) -> ControlFlow<()> {
        match completion {
            Completion::Fetched { request, value } => {
                tracing::debug!(seed = %request.seed, value = %value, "initial value fetched");
                self.fold(request.resolve(value))
            }
            Completion::Submitted { request, result } => {
                tracing::debug!(snapshot = %request.snapshot, result = %result, "submit resolved");
                self.emit_all(submit_completed(result))
            }
        }
    }

    fn emit_all<I>(&self, states: I) -> ControlFlow<()>
    where
        I: IntoIterator<Item = ViewState>,
    {
        for state in states {
            tracing::debug!(?state, "view state");
            if self.output.send(state).is_err() {
                tracing::debug!("view state subscriber gone, dropping emission");
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }
}
