use std::collections::VecDeque;

use crate::foundation::core::{FrameRef, SlotId};
use crate::source::image_source::{FrameImage, ImageSource, StatusChange};

/// Deterministic in-memory image source for tests and simulations.
///
/// It records every assignment and answers each one with a queued `Loading` notification; the
/// caller decides when (and in which order) loads complete by pushing `Ready`/`Error`
/// notifications with [`ScriptedImageSource::complete`] or by handing them to the display
/// directly.
#[derive(Debug, Default)]
pub struct ScriptedImageSource {
    bound: [FrameRef; 2],
    assignments: Vec<(SlotId, FrameRef)>,
    releases: Vec<SlotId>,
    queue: VecDeque<StatusChange>,
}

impl ScriptedImageSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `(slot, reference)` assignment, oldest first.
    pub fn assignments(&self) -> &[(SlotId, FrameRef)] {
        &self.assignments
    }

    /// Every released slot, oldest first.
    pub fn releases(&self) -> &[SlotId] {
        &self.releases
    }

    /// Reference currently bound to `slot` from the source's point of view.
    pub fn bound(&self, slot: SlotId) -> &FrameRef {
        &self.bound[slot.index()]
    }

    /// Queue a notification for the next [`ImageSource::poll_status`].
    pub fn complete(&mut self, change: StatusChange) {
        self.queue.push_back(change);
    }

    /// `Ready` notification for whatever `slot` is currently bound to, with a 1x1 frame.
    pub fn ready_now(&self, slot: SlotId) -> StatusChange {
        StatusChange::ready(
            slot,
            self.bound(slot).clone(),
            FrameImage::filled(1, 1, [0, 0, 0, 255]),
        )
    }

    /// Number of queued, undelivered notifications.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl ImageSource for ScriptedImageSource {
    fn assign(&mut self, slot: SlotId, source: &FrameRef) {
        self.bound[slot.index()] = source.clone();
        self.assignments.push((slot, source.clone()));
        self.queue
            .push_back(StatusChange::loading(slot, source.clone()));
    }

    fn release(&mut self, slot: SlotId) {
        self.bound[slot.index()] = FrameRef::empty();
        self.releases.push(slot);
    }

    fn poll_status(&mut self) -> Option<StatusChange> {
        self.queue.pop_front()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/scripted.rs"]
mod tests;
