use crate::mvi::Intent;

/// Input alphabet of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Event {
    #[default]
    Noop,
    /// Begin loading the initial value for `seed`.
    Load(String),
    /// The initial-value fetch resolved. Produced by the pipeline itself.
    LoadFetched(String),
    /// The user picked the option with this label.
    UserSelected(String),
    /// Persist the current accumulated value.
    Submit,
}

impl Intent for Event {}

impl Event {
    /// Short variant name for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Noop => "noop",
            Event::Load(_) => "load",
            Event::LoadFetched(_) => "load_fetched",
            Event::UserSelected(_) => "user_selected",
            Event::Submit => "submit",
        }
    }
}
