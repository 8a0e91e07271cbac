use crate::foundation::core::{FrameRef, SlotId};
use crate::source::image_source::FrameImage;

/// Load state of a buffer slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SlotStatus {
    /// Nothing bound.
    #[default]
    Empty,
    /// Bound, load in flight.
    Loading,
    /// Bound and decoded.
    Ready,
    /// Bound, load failed.
    Error,
}

impl SlotStatus {
    /// Bound to something that has not (successfully) produced pixels.
    pub fn is_unsettled(self) -> bool {
        matches!(self, SlotStatus::Loading | SlotStatus::Error)
    }
}

/// One of the two buffers owned by a display.
#[derive(Clone, Debug)]
pub struct BufferSlot {
    id: SlotId,
    source: FrameRef,
    status: SlotStatus,
    image: Option<FrameImage>,
}

impl BufferSlot {
    pub(crate) fn new(id: SlotId) -> Self {
        Self {
            id,
            source: FrameRef::empty(),
            status: SlotStatus::Empty,
            image: None,
        }
    }

    /// Slot identity.
    pub fn id(&self) -> SlotId {
        self.id
    }

    /// Reference currently bound to this slot (possibly empty).
    pub fn source(&self) -> &FrameRef {
        &self.source
    }

    /// Current load status.
    pub fn status(&self) -> SlotStatus {
        self.status
    }

    /// Decoded pixels, present only while `Ready`.
    pub fn image(&self) -> Option<&FrameImage> {
        self.image.as_ref()
    }

    pub(crate) fn is_bound_to(&self, source: &FrameRef) -> bool {
        !self.source.is_empty() && &self.source == source
    }

    pub(crate) fn bind(&mut self, source: FrameRef) {
        self.status = if source.is_empty() {
            SlotStatus::Empty
        } else {
            SlotStatus::Loading
        };
        self.source = source;
        self.image = None;
    }

    pub(crate) fn clear(&mut self) {
        self.bind(FrameRef::empty());
    }

    pub(crate) fn mark_loading(&mut self) {
        self.status = SlotStatus::Loading;
        self.image = None;
    }

    pub(crate) fn mark_ready(&mut self, image: FrameImage) {
        self.status = SlotStatus::Ready;
        self.image = Some(image);
    }

    pub(crate) fn mark_error(&mut self) {
        self.status = SlotStatus::Error;
        self.image = None;
    }
}
