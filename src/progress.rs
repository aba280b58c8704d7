//! Human-readable progress messages.
//!
//! The construction core never prints; it reports through a [`Progress`]
//! sink and leaves presentation to the caller.

use serde::Serialize;

/// Message category, used by consumers to style output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Plain information, e.g. vertex degrees.
    Info,
    /// Start and end of the overall strategy.
    Strategy,
    /// Algorithm-level milestones.
    Algorithm,
    /// Sub-tour discovery.
    Subtour,
}

/// A single categorized message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Message {
    pub category: Category,
    pub text: String,
}

/// Receiver for progress messages.
pub trait Progress {
    fn report(&mut self, category: Category, text: String);
}

impl<P: Progress + ?Sized> Progress for &mut P {
    fn report(&mut self, category: Category, text: String) { (**self).report(category, text) }
}

/// Collects every message in order.
impl Progress for Vec<Message> {
    fn report(&mut self, category: Category, text: String) {
        self.push(Message { category, text });
    }
}

/// Discards all messages.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Progress for Silent {
    fn report(&mut self, _category: Category, _text: String) {}
}

/// Forwards messages as `tracing` events; degree listings go to `debug`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingProgress;

impl Progress for TracingProgress {
    fn report(&mut self, category: Category, text: String) {
        match category {
            Category::Info => tracing::debug!(?category, "{text}"),
            _ => tracing::info!(?category, "{text}"),
        }
    }
}
