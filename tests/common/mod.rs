//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use futures::{stream, StreamExt};
use kitchen::backend::ReferenceService;
use kitchen::controller::LabelSink;
use kitchen::kitchen::{Event, Kitchen, ViewState};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

pub use mock_backend::{GatedBackend, PanickingFetch};

/// Kitchen backed by a zero-latency reference service.
pub fn reference_kitchen() -> Kitchen {
    Kitchen::new(Arc::new(ReferenceService::default()))
}

/// Run a finite event sequence through `kitchen` and collect every state.
pub async fn run_events(kitchen: &Kitchen, events: Vec<Event>) -> Vec<ViewState> {
    kitchen.bind(stream::iter(events)).collect().await
}

/// Names carried by every `Loaded` state, in order.
pub fn loaded_names(states: &[ViewState]) -> Vec<String> {
    states
        .iter()
        .filter_map(|state| state.page().map(|page| page.name.clone()))
        .collect()
}

/// Sink that records every text it is asked to show.
#[derive(Clone, Default)]
pub struct RecordingSink(pub Arc<Mutex<Vec<String>>>);

impl RecordingSink {
    pub fn shown(&self) -> Vec<String> {
        self.0.lock().clone()
    }
}

impl LabelSink for RecordingSink {
    fn show(&mut self, text: &str) {
        self.0.lock().push(text.to_string());
    }
}

/// Poll `check` until it holds or `timeout` elapses.
pub async fn wait_until<F: Fn() -> bool>(check: F, timeout: Duration) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < timeout {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    check()
}
