//! Glue between raw UI signals and the pipeline.
//!
//! The controller merges the startup load, submit presses and option picks
//! into one event channel (arrival order), binds it to a [`Kitchen`] and
//! renders each `Loaded` page through a [`LabelSink`].

use std::sync::Arc;

use futures::StreamExt;
use parking_lot::Mutex;
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::task::JoinHandle;
use tokio_stream::wrappers::UnboundedReceiverStream;

use crate::config::{Config, OptionsConfig};
use crate::kitchen::{Event, Kitchen, ViewState};

/// Receives the text to display.
pub trait LabelSink: Send + 'static {
    fn show(&mut self, text: &str);
}

/// Shared label holding the last displayed text.
#[derive(Debug, Clone, Default)]
pub struct Label {
    text: Arc<Mutex<String>>,
}

impl Label {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.text.lock().clone()
    }
}

impl LabelSink for Label {
    fn show(&mut self, text: &str) {
        *self.text.lock() = text.to_string();
    }
}

/// One of the two configured options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionSlot {
    A,
    B,
}

impl OptionSlot {
    /// Display label bound to this slot.
    pub fn label(self, options: &OptionsConfig) -> &str {
        match self {
            OptionSlot::A => &options.option_a_name,
            OptionSlot::B => &options.option_b_name,
        }
    }
}

/// Owns the merged event input and the render subscription.
///
/// Dropping the controller releases the subscription; [`Controller::shutdown`]
/// closes input and lets pending view states drain first.
pub struct Controller {
    events: Option<UnboundedSender<Event>>,
    options: OptionsConfig,
    render: Option<JoinHandle<()>>,
}

impl Controller {
    /// Bind `kitchen` to a fresh event channel and start rendering into
    /// `sink`. Emits the startup `Load` exactly once.
    pub fn start<L>(kitchen: &Kitchen, config: &Config, sink: L) -> Self
    where
        L: LabelSink,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut states = kitchen.bind(UnboundedReceiverStream::new(rx));

        let render = tokio::spawn(async move {
            let mut sink = sink;
            while let Some(state) = states.next().await {
                render_state(&mut sink, state);
            }
            tracing::debug!("view state stream ended");
        });

        let controller = Self {
            events: Some(tx),
            options: config.options.clone(),
            render: Some(render),
        };
        controller.send(Event::Load(config.startup.seed.clone()));
        controller
    }

    /// Primary action pressed.
    pub fn submit(&self) {
        self.send(Event::Submit);
    }

    /// Option button pressed.
    pub fn select(&self, slot: OptionSlot) {
        let label = slot.label(&self.options).to_string();
        self.send(Event::UserSelected(label));
    }

    pub fn options(&self) -> &OptionsConfig {
        &self.options
    }

    /// Close input and wait until every pending view state is rendered.
    pub async fn shutdown(mut self) {
        self.events.take();
        if let Some(render) = self.render.take() {
            if let Err(err) = render.await {
                tracing::warn!(error = %err, "render task ended abnormally");
            }
        }
    }

    fn send(&self, event: Event) {
        let Some(events) = &self.events else {
            return;
        };
        if events.send(event).is_err() {
            tracing::debug!("pipeline gone, event dropped");
        }
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        if let Some(render) = self.render.take() {
            render.abort();
        }
    }
}

fn render_state<L: LabelSink>(sink: &mut L, state: ViewState) {
    match state {
        ViewState::Loaded(page) => sink.show(&page.name),
        ViewState::StartedLoading
        | ViewState::FinishedLoading
        | ViewState::CompletedSubmit
        | ViewState::Noop => {}
    }
}
