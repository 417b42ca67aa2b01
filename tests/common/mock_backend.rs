//! Backend whose calls block until the test releases them.

use async_trait::async_trait;
use kitchen::backend::BackendService;
use parking_lot::Mutex;
use tokio::sync::Semaphore;

/// Answers like the reference service, but each call waits for a permit on
/// its gate. Calls are recorded as soon as they start.
pub struct GatedBackend {
    fetch_gate: Semaphore,
    submit_gate: Semaphore,
    fetch_calls: Mutex<Vec<String>>,
    submit_calls: Mutex<Vec<String>>,
}

impl GatedBackend {
    pub fn new() -> Self {
        Self {
            fetch_gate: Semaphore::new(0),
            submit_gate: Semaphore::new(0),
            fetch_calls: Mutex::new(Vec::new()),
            submit_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn release_fetch(&self, n: usize) {
        self.fetch_gate.add_permits(n);
    }

    pub fn release_submit(&self, n: usize) {
        self.submit_gate.add_permits(n);
    }

    pub fn fetch_calls(&self) -> Vec<String> {
        self.fetch_calls.lock().clone()
    }

    pub fn submit_calls(&self) -> Vec<String> {
        self.submit_calls.lock().clone()
    }
}

#[async_trait]
impl BackendService for GatedBackend {
    fn name(&self) -> &'static str {
        "gated"
    }

    async fn fetch_initial_value(&self, seed: &str) -> String {
        self.fetch_calls.lock().push(seed.to_string());
        self.fetch_gate
            .acquire()
            .await
            .expect("fetch gate closed")
            .forget();
        format!("{} InitialValue", seed)
    }

    async fn submit_value(&self, value: &str) -> String {
        self.submit_calls.lock().push(value.to_string());
        self.submit_gate
            .acquire()
            .await
            .expect("submit gate closed")
            .forget();
        format!("{} Succeeded", value)
    }
}

/// Backend whose fetch panics; submit answers like the reference service.
///
/// With `yield_first`, the panic happens after the call has been parked
/// instead of on its first poll.
pub struct PanickingFetch {
    pub yield_first: bool,
}

#[async_trait]
impl BackendService for PanickingFetch {
    fn name(&self) -> &'static str {
        "panicking-fetch"
    }

    async fn fetch_initial_value(&self, seed: &str) -> String {
        if self.yield_first {
            tokio::task::yield_now().await;
        }
        panic!("fetch for {} blew up", seed);
    }

    async fn submit_value(&self, value: &str) -> String {
        format!("{} Succeeded", value)
    }
}
