/// Value threaded through a [`Reducer`](super::Reducer) fold.
///
/// `Default` is the fold seed; `Clone` and `PartialEq` let tests replay a
/// sequence and compare outcomes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
