use async_trait::async_trait;

/// Contract for the two async calls the pipeline depends on.
///
/// Each call resolves exactly once with a single value. No failure channel is
/// modelled: implementations are expected to always eventually succeed.
#[async_trait]
pub trait BackendService: Send + Sync {
    /// Returns the name of this backend for logging.
    fn name(&self) -> &'static str;

    /// Fetch the initial value for `seed`.
    async fn fetch_initial_value(&self, seed: &str) -> String;

    /// Persist `value` and return the server's view of it.
    async fn submit_value(&self, value: &str) -> String;
}
