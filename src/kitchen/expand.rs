//! Event expansion stage.
//!
//! Turns one input event into the event itself plus, for `Load`, a
//! deferred fetch whose completion becomes `LoadFetched`.

use super::event::Event;

/// Deferred initial-value fetch requested by a `Load` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub seed: String,
}

/// Result of expanding one input event.
///
/// `event` is emitted immediately; `fetch`, when present, resolves later into
/// a second event that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    pub event: Event,
    pub fetch: Option<FetchRequest>,
}

/// Expand a single input event.
pub fn expand(event: Event) -> Expansion {
    let fetch = match &event {
        Event::Load(seed) => Some(FetchRequest { seed: seed.clone() }),
        Event::Noop | Event::LoadFetched(_) | Event::UserSelected(_) | Event::Submit => None,
    };
    Expansion { event, fetch }
}

impl FetchRequest {
    /// Event that follows the `Load` once the fetch resolves.
    pub fn resolve(self, value: String) -> Event {
        Event::LoadFetched(value)
    }
}
