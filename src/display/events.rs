use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::foundation::core::{FrameRef, SlotId};

/// Notification emitted by a display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayEvent {
    /// A freshly loaded, still-current frame became visible.
    ImageReady {
        /// Slot that is now front.
        slot: SlotId,
        /// Reference now on screen.
        source: FrameRef,
    },
    /// A load failed. Reported even when the failed reference is no longer the requested one.
    ImageError {
        /// Slot the failed load was bound to.
        slot: SlotId,
        /// Reference that failed.
        source: FrameRef,
        /// Failure description from the image source.
        reason: String,
    },
}

impl DisplayEvent {
    /// The reference the event is about.
    pub fn source(&self) -> &FrameRef {
        match self {
            DisplayEvent::ImageReady { source, .. } | DisplayEvent::ImageError { source, .. } => {
                source
            }
        }
    }

    /// Whether this is an [`DisplayEvent::ImageError`].
    pub fn is_error(&self) -> bool {
        matches!(self, DisplayEvent::ImageError { .. })
    }
}

/// Receiver of display events.
///
/// Observers are called synchronously, in registration order, on the thread driving the display.
pub trait DisplayObserver: Send {
    /// Handle one event.
    fn on_event(&mut self, event: &DisplayEvent);
}

impl<F> DisplayObserver for F
where
    F: FnMut(&DisplayEvent) + Send,
{
    fn on_event(&mut self, event: &DisplayEvent) {
        self(event)
    }
}

/// In-memory observer for tests and debugging.
///
/// Clones share the same event log, so keep one clone and hand the other to the display.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<DisplayEvent>>>,
}

impl RecordingObserver {
    /// Create an observer with an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    fn log(&self) -> MutexGuard<'_, Vec<DisplayEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of every event received so far.
    pub fn events(&self) -> Vec<DisplayEvent> {
        self.log().clone()
    }

    /// Number of `ImageReady` events received.
    pub fn ready_count(&self) -> usize {
        self.log().iter().filter(|e| !e.is_error()).count()
    }

    /// References of every `ImageError` event received, oldest first.
    pub fn error_sources(&self) -> Vec<FrameRef> {
        self.log()
            .iter()
            .filter(|e| e.is_error())
            .map(|e| e.source().clone())
            .collect()
    }

    /// Forget everything received so far.
    pub fn clear(&self) {
        self.log().clear();
    }
}

impl DisplayObserver for RecordingObserver {
    fn on_event(&mut self, event: &DisplayEvent) {
        self.log().push(event.clone());
    }
}

/// Observer forwarding events to `tracing`, tagged with a display label.
#[derive(Clone, Debug)]
pub struct LogObserver {
    label: String,
}

impl LogObserver {
    /// Create a logger for the display named `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl DisplayObserver for LogObserver {
    fn on_event(&mut self, event: &DisplayEvent) {
        match event {
            DisplayEvent::ImageReady { slot, source } => {
                tracing::info!(display = %self.label, %slot, %source, "image ready");
            }
            DisplayEvent::ImageError {
                slot,
                source,
                reason,
            } => {
                tracing::warn!(display = %self.label, %slot, %source, %reason, "image failed to load");
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/display/events.rs"]
mod tests;
