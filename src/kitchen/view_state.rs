/// Displayable value carried by [`ViewState::Loaded`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPage {
    pub name: String,
}

impl CategoryPage {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Output alphabet of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Noop,
    StartedLoading,
    FinishedLoading,
    Loaded(CategoryPage),
    CompletedSubmit,
}

impl ViewState {
    /// Build a `Loaded` state around a fresh page.
    pub fn loaded(name: impl Into<String>) -> Self {
        ViewState::Loaded(CategoryPage::new(name))
    }

    /// Page carried by a `Loaded` state, if any.
    pub fn page(&self) -> Option<&CategoryPage> {
        match self {
            ViewState::Loaded(page) => Some(page),
            ViewState::Noop
            | ViewState::StartedLoading
            | ViewState::FinishedLoading
            | ViewState::CompletedSubmit => None,
        }
    }
}
