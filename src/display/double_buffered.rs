use crate::display::config::DisplayConfig;
use crate::display::events::{DisplayEvent, DisplayObserver};
use crate::display::slot::{BufferSlot, SlotStatus};
use crate::foundation::core::{FrameRef, SlotId};
use crate::source::image_source::{FrameImage, ImageSource, LoadStatus, StatusChange};

/// Passive render layer bound to one slot.
///
/// UI layers mirror these values and hold no logic of their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderTarget<'a> {
    /// Slot this layer mirrors.
    pub slot: SlotId,
    /// Reference the layer should load.
    pub source: &'a FrameRef,
    /// Whether the layer is shown.
    pub visible: bool,
    /// Stacking order; the front layer is on top.
    pub z: u8,
}

/// Two-slot frame presenter that never shows a blank or stale frame while scrubbing.
///
/// Requests go to the hidden back slot. When the back slot reports `Ready` for the most recently
/// requested reference, the slots swap and [`DisplayEvent::ImageReady`] fires. Anything else that
/// completes late is ignored, except failures, which are always reported.
///
/// The display is a plain state machine: it never blocks and never calls back into its image
/// source from a notification. Drive it with [`DoubleBufferedDisplay::handle_status`] (or
/// [`DoubleBufferedDisplay::pump`]) from whichever thread receives source notifications.
pub struct DoubleBufferedDisplay<S: ImageSource> {
    source: S,
    config: DisplayConfig,
    slots: [BufferSlot; 2],
    front: SlotId,
    requested: FrameRef,
    observers: Vec<Box<dyn DisplayObserver>>,
}

impl<S: ImageSource> DoubleBufferedDisplay<S> {
    /// Create a display with both slots empty and slot A in front.
    pub fn new(source: S, config: DisplayConfig) -> Self {
        Self {
            source,
            config,
            slots: [BufferSlot::new(SlotId::A), BufferSlot::new(SlotId::B)],
            front: SlotId::A,
            requested: FrameRef::empty(),
            observers: Vec::new(),
        }
    }

    /// Register an observer. Observers are called in registration order.
    pub fn add_observer(&mut self, observer: impl DisplayObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Presentation settings.
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Replace the presentation settings.
    pub fn set_config(&mut self, config: DisplayConfig) {
        self.config = config;
    }

    /// Borrow the image source.
    pub fn image_source(&self) -> &S {
        &self.source
    }

    /// Mutably borrow the image source.
    pub fn image_source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// The visible slot.
    pub fn front_slot(&self) -> SlotId {
        self.front
    }

    /// The hidden slot that receives new requests.
    pub fn back_slot(&self) -> SlotId {
        self.front.other()
    }

    /// Borrow a slot.
    pub fn slot(&self, id: SlotId) -> &BufferSlot {
        &self.slots[id.index()]
    }

    /// The most recently requested reference.
    pub fn requested_source(&self) -> &FrameRef {
        &self.requested
    }

    /// Reference of the visible frame (empty until the first swap).
    pub fn current_source(&self) -> &FrameRef {
        self.slot(self.front).source()
    }

    /// Pixels of the visible frame, if any.
    pub fn current_image(&self) -> Option<&FrameImage> {
        self.slot(self.front).image()
    }

    /// Whether the loading indicator should be shown.
    ///
    /// True while nothing has been shown yet: no slot holds pixels and at least one is loading or
    /// has failed. An untouched slot counts as showing nothing. Off when the config disables it.
    pub fn loading_indicator_visible(&self) -> bool {
        self.config.show_loading_text
            && !self.slots.iter().any(|s| s.status() == SlotStatus::Ready)
            && self.slots.iter().any(|s| s.status().is_unsettled())
    }

    /// The loading text, when the indicator is visible.
    pub fn loading_text(&self) -> Option<&str> {
        self.loading_indicator_visible()
            .then_some(self.config.loading_text.as_str())
    }

    /// The two render layers, slot A first.
    pub fn render_targets(&self) -> [RenderTarget<'_>; 2] {
        SlotId::ALL.map(|id| {
            let front = id == self.front;
            RenderTarget {
                slot: id,
                source: self.slot(id).source(),
                visible: front,
                z: u8::from(front),
            }
        })
    }

    /// Request that `reference` become the visible frame.
    ///
    /// The reference is routed to the back slot; the front slot keeps showing its frame. An empty
    /// reference releases the back slot. Returns the `ImageReady` event when the back slot already
    /// holds the requested frame and the swap happens immediately.
    pub fn request_frame(&mut self, reference: impl Into<FrameRef>) -> Option<DisplayEvent> {
        let reference = reference.into();
        let back = self.back_slot();
        self.requested = reference.clone();

        let slot = &mut self.slots[back.index()];
        if reference.is_empty() {
            if slot.status() != SlotStatus::Empty || !slot.source().is_empty() {
                slot.clear();
                self.source.release(back);
                tracing::debug!(slot = %back, "back slot cleared");
            }
            return None;
        }

        if slot.is_bound_to(&reference) {
            match slot.status() {
                SlotStatus::Loading => {
                    tracing::trace!(slot = %back, source = %reference, "already loading");
                    return None;
                }
                SlotStatus::Ready => return Some(self.swap_to(back)),
                // Retry: a fresh request for a failed reference loads it again.
                SlotStatus::Empty | SlotStatus::Error => {}
            }
        }

        tracing::debug!(slot = %back, source = %reference, "routing request to back slot");
        slot.bind(reference.clone());
        self.source.assign(back, &reference);
        None
    }

    /// Apply one status notification from the image source.
    ///
    /// Returns the event that was dispatched to observers, if any.
    pub fn handle_status(&mut self, change: StatusChange) -> Option<DisplayEvent> {
        let StatusChange {
            slot: id,
            source,
            status,
        } = change;
        let back = self.back_slot();
        // Only the back slot's state is ever touched by notifications, and only when the
        // notification is about the reference the slot is still bound to.
        let current = id == back && self.slots[id.index()].is_bound_to(&source);

        match status {
            LoadStatus::Loading => {
                if current {
                    self.slots[id.index()].mark_loading();
                }
                None
            }
            LoadStatus::Error(reason) => {
                if current {
                    self.slots[id.index()].mark_error();
                }
                tracing::warn!(slot = %id, %source, %reason, stale = !current, "frame load failed");
                let event = DisplayEvent::ImageError {
                    slot: id,
                    source,
                    reason,
                };
                self.dispatch(&event);
                Some(event)
            }
            LoadStatus::Ready(image) => {
                if !current {
                    tracing::trace!(slot = %id, %source, "ignoring superseded or redundant ready");
                    return None;
                }
                self.slots[id.index()].mark_ready(image);
                if source != self.requested {
                    tracing::debug!(slot = %id, %source, requested = %self.requested, "stale ready kept hidden");
                    return None;
                }
                Some(self.swap_to(id))
            }
        }
    }

    /// Drain and apply every notification the image source has queued.
    pub fn pump(&mut self) -> Vec<DisplayEvent> {
        let mut events = Vec::new();
        while let Some(change) = self.source.poll_status() {
            events.extend(self.handle_status(change));
        }
        events
    }

    /// Clear both slots and the requested reference; slot A returns to front.
    pub fn reset(&mut self) {
        for id in SlotId::ALL {
            self.slots[id.index()].clear();
            self.source.release(id);
        }
        self.front = SlotId::A;
        self.requested = FrameRef::empty();
        tracing::debug!("display reset");
    }

    fn swap_to(&mut self, id: SlotId) -> DisplayEvent {
        self.front = id;
        let source = self.slots[id.index()].source().clone();
        tracing::debug!(slot = %id, %source, "swapped to front");
        let event = DisplayEvent::ImageReady { slot: id, source };
        self.dispatch(&event);
        event
    }

    fn dispatch(&mut self, event: &DisplayEvent) {
        for observer in &mut self.observers {
            observer.on_event(event);
        }
    }
}

impl<S: ImageSource + std::fmt::Debug> std::fmt::Debug for DoubleBufferedDisplay<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DoubleBufferedDisplay")
            .field("source", &self.source)
            .field("config", &self.config)
            .field("slots", &self.slots)
            .field("front", &self.front)
            .field("requested", &self.requested)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/display/double_buffered.rs"]
mod tests;
