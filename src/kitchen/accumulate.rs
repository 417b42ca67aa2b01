//! State accumulation stage.

use crate::mvi::{Reducer, UiState};

use super::event::Event;

/// One fold step: the accumulated value and the event that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Step {
    pub value: String,
    pub event: Event,
}

impl UiState for Step {}

impl Step {
    pub fn new(value: impl Into<String>, event: Event) -> Self {
        Self {
            value: value.into(),
            event,
        }
    }
}

pub struct AccumulateReducer;

impl Reducer for AccumulateReducer {
    type State = Step;
    type Intent = Event;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let value = match &intent {
            Event::LoadFetched(fetched) => fetched.clone(),
            Event::UserSelected(label) => {
                let mut value = state.value;
                value.push(' ');
                value.push_str(label);
                value
            }
            Event::Noop | Event::Load(_) | Event::Submit => state.value,
        };
        Step {
            value,
            event: intent,
        }
    }
}

/// Fold a finite event sequence from the empty seed.
pub fn accumulate<I>(events: I) -> Step
where
    I: IntoIterator<Item = Event>,
{
    AccumulateReducer::fold(events)
}
