//! State projection stage.

use super::accumulate::Step;
use super::event::Event;
use super::view_state::ViewState;

/// Continuation for a pending submit: the accumulator snapshot to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub snapshot: String,
}

/// View states to emit now, plus an optional submit whose result is
/// projected later by [`submit_completed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub states: Vec<ViewState>,
    pub submit: Option<SubmitRequest>,
}

impl Projection {
    fn now(states: Vec<ViewState>) -> Self {
        Self {
            states,
            submit: None,
        }
    }
}

/// Project a fold step into view states.
pub fn project(step: &Step) -> Projection {
    match &step.event {
        Event::Load(_) => Projection::now(vec![ViewState::StartedLoading]),
        Event::LoadFetched(_) => Projection::now(vec![
            ViewState::loaded(step.value.as_str()),
            ViewState::FinishedLoading,
        ]),
        Event::UserSelected(_) => Projection::now(vec![ViewState::loaded(step.value.as_str())]),
        Event::Submit => Projection {
            states: vec![ViewState::StartedLoading],
            submit: Some(SubmitRequest {
                snapshot: step.value.clone(),
            }),
        },
        Event::Noop => Projection::now(vec![ViewState::Noop]),
    }
}

/// Trailing states once a submit resolved with `result`.
pub fn submit_completed(result: String) -> [ViewState; 3] {
    [
        ViewState::loaded(result),
        ViewState::FinishedLoading,
        ViewState::CompletedSubmit,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_starts_loading() {
        let projection = project(&Step::new("", Event::Load("begin".into())));
        assert_eq!(projection.states, vec![ViewState::StartedLoading]);
        assert!(projection.submit.is_none());
    }

    #[test]
    fn load_fetched_shows_page_then_finishes() {
        let projection = project(&Step::new(
            "begin InitialValue",
            Event::LoadFetched("begin InitialValue".into()),
        ));
        assert_eq!(
            projection.states,
            vec![
                ViewState::loaded("begin InitialValue"),
                ViewState::FinishedLoading
            ]
        );
    }

    #[test]
    fn user_selected_shows_accumulated_value() {
        let projection = project(&Step::new("X Y", Event::UserSelected("Y".into())));
        assert_eq!(projection.states, vec![ViewState::loaded("X Y")]);
    }

    #[test]
    fn submit_starts_loading_and_snapshots_value() {
        let projection = project(&Step::new("X", Event::Submit));
        assert_eq!(projection.states, vec![ViewState::StartedLoading]);
        assert_eq!(
            projection.submit,
            Some(SubmitRequest {
                snapshot: "X".into()
            })
        );
    }

    #[test]
    fn noop_projects_noop() {
        let projection = project(&Step::new("X", Event::Noop));
        assert_eq!(projection.states, vec![ViewState::Noop]);
        assert!(projection.submit.is_none());
    }

    #[test]
    fn submit_completion_order() {
        assert_eq!(
            submit_completed("X Succeeded".into()),
            [
                ViewState::loaded("X Succeeded"),
                ViewState::FinishedLoading,
                ViewState::CompletedSubmit,
            ]
        );
    }
}
