//! Backend calls the pipeline suspends on.
//!
//! The pipeline only needs two single-shot async operations; this module
//! defines that contract and a reference implementation with simulated
//! latency.

mod reference;
mod service;

pub use reference::ReferenceService;
pub use service::BackendService;
