//! Fold primitives used by the accumulation stage.
//!
//! ```text
//! Event ──→ expand ──→ AccumulateReducer ──→ project ──→ ViewState
//! ```
//!
//! Only the middle stage is a [`Reducer`]; expansion and projection are plain
//! functions in [`crate::kitchen`].

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
