/// Input a [`Reducer`](super::Reducer) folds over.
///
/// In this crate that is the pipeline [`Event`](crate::kitchen::Event):
/// button presses, submit, and backend results re-entering the loop.
pub trait Intent: Send + 'static {}
