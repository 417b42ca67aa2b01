use super::intent::Intent;
use super::state::UiState;

/// Pure transition `(State, Intent) -> State`.
///
/// Implementations must not touch anything outside their arguments; the
/// driver relies on that to replay and to keep fold steps strictly ordered.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Fold a finite sequence of intents starting from `State::default()`.
    fn fold<I>(intents: I) -> Self::State
    where
        I: IntoIterator<Item = Self::Intent>,
    {
        intents
            .into_iter()
            .fold(Self::State::default(), |state, intent| {
                Self::reduce(state, intent)
            })
    }
}
