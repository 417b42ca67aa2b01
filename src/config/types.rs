use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub options: OptionsConfig,
    #[serde(default)]
    pub startup: StartupConfig,
    #[serde(default)]
    pub backend: BackendConfig,
}

/// Display labels bound to the two selectable options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionsConfig {
    #[serde(default = "default_option_a_name")]
    pub option_a_name: String,
    #[serde(default = "default_option_b_name")]
    pub option_b_name: String,
}

/// Events emitted once when the controller starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartupConfig {
    /// Seed passed with the startup `Load` event.
    #[serde(default = "default_seed")]
    pub seed: String,
}

/// Simulated latency of the reference backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BackendConfig {
    /// Delay before `fetch_initial_value` resolves (default: 0).
    #[serde(default)]
    pub fetch_latency_ms: u64,
    /// Delay before `submit_value` resolves (default: 0).
    #[serde(default)]
    pub submit_latency_ms: u64,
}

fn default_option_a_name() -> String {
    "button1".to_string()
}

fn default_option_b_name() -> String {
    "button2".to_string()
}

fn default_seed() -> String {
    "begin".to_string()
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            option_a_name: default_option_a_name(),
            option_b_name: default_option_b_name(),
        }
    }
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
        }
    }
}
