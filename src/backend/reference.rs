use std::time::Duration;

use async_trait::async_trait;

use super::service::BackendService;
use crate::config::BackendConfig;

/// In-process backend that answers after a fixed delay.
///
/// A zero latency resolves without yielding.
#[derive(Debug, Clone, Default)]
pub struct ReferenceService {
    fetch_latency: Duration,
    submit_latency: Duration,
}

impl ReferenceService {
    pub fn new(fetch_latency: Duration, submit_latency: Duration) -> Self {
        Self {
            fetch_latency,
            submit_latency,
        }
    }

    pub fn fetch_latency(&self) -> Duration {
        self.fetch_latency
    }

    pub fn submit_latency(&self) -> Duration {
        self.submit_latency
    }
}

impl From<&BackendConfig> for ReferenceService {
    fn from(config: &BackendConfig) -> Self {
        Self::new(
            Duration::from_millis(config.fetch_latency_ms),
            Duration::from_millis(config.submit_latency_ms),
        )
    }
}

async fn delay(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}

#[async_trait]
impl BackendService for ReferenceService {
    fn name(&self) -> &'static str {
        "reference"
    }

    async fn fetch_initial_value(&self, seed: &str) -> String {
        delay(self.fetch_latency).await;
        format!("{} InitialValue", seed)
    }

    async fn submit_value(&self, value: &str) -> String {
        delay(self.submit_latency).await;
        format!("{} Succeeded", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fetch_appends_initial_value() {
        let service = ReferenceService::default();
        assert_eq!(
            service.fetch_initial_value("begin").await,
            "begin InitialValue"
        );
    }

    #[tokio::test]
    async fn submit_appends_succeeded() {
        let service = ReferenceService::default();
        assert_eq!(
            service.submit_value("begin InitialValue").await,
            "begin InitialValue Succeeded"
        );
    }

    #[test]
    fn latency_comes_from_config() {
        let service = ReferenceService::from(&BackendConfig {
            fetch_latency_ms: 250,
            submit_latency_ms: 40,
        });
        assert_eq!(service.fetch_latency(), Duration::from_millis(250));
        assert_eq!(service.submit_latency(), Duration::from_millis(40));
    }

    #[tokio::test(start_paused = true)]
    async fn latency_delays_response() {
        let service = ReferenceService::new(Duration::from_secs(5), Duration::ZERO);
        let started = tokio::time::Instant::now();
        service.fetch_initial_value("x").await;
        assert!(started.elapsed() >= Duration::from_secs(5));
    }
}
