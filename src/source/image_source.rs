use std::sync::Arc;

use crate::foundation::core::{FrameRef, SlotId};

/// Decoded frame in straight (non-premultiplied) RGBA8 form.
///
/// Cheap to clone; pixel bytes are shared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes, row-major, tightly packed.
    pub rgba8: Arc<Vec<u8>>,
}

impl FrameImage {
    /// Build a frame filled with a single RGBA color.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let px = (width as usize).saturating_mul(height as usize);
        let mut data = Vec::with_capacity(px.saturating_mul(4));
        for _ in 0..px {
            data.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            rgba8: Arc::new(data),
        }
    }

    /// RGBA of the pixel at `(x, y)`, if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.rgba8.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Load progress reported by an image source for one slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    /// The source accepted the reference and is working on it.
    Loading,
    /// The reference resolved to pixels.
    Ready(FrameImage),
    /// The reference could not be loaded.
    Error(String),
}

/// Status-change notification for one slot.
///
/// `source` is the reference the slot was bound to when the load finished, which lets the display
/// recognise completions that were superseded while in flight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusChange {
    /// Slot the notification is about.
    pub slot: SlotId,
    /// Reference the load was for.
    pub source: FrameRef,
    /// New status.
    pub status: LoadStatus,
}

impl StatusChange {
    /// A `Loading` notification.
    pub fn loading(slot: SlotId, source: impl Into<FrameRef>) -> Self {
        Self {
            slot,
            source: source.into(),
            status: LoadStatus::Loading,
        }
    }

    /// A `Ready` notification carrying the decoded frame.
    pub fn ready(slot: SlotId, source: impl Into<FrameRef>, image: FrameImage) -> Self {
        Self {
            slot,
            source: source.into(),
            status: LoadStatus::Ready(image),
        }
    }

    /// An `Error` notification.
    pub fn error(slot: SlotId, source: impl Into<FrameRef>, reason: impl Into<String>) -> Self {
        Self {
            slot,
            source: source.into(),
            status: LoadStatus::Error(reason.into()),
        }
    }
}

/// Backend contract for resolving slot references into pixels.
///
/// Sources may load synchronously or asynchronously; either way they must report the outcome as a
/// [`StatusChange`] rather than calling back into the display. Every assigned non-empty reference
/// is expected to settle eventually to `Ready` or `Error`, unless superseded by a later
/// assignment to the same slot, in which case the source may stay silent.
pub trait ImageSource {
    /// Bind `source` to `slot` and start loading it.
    fn assign(&mut self, slot: SlotId, source: &FrameRef);

    /// Unbind `slot`; any in-flight load for it may be dropped.
    fn release(&mut self, slot: SlotId);

    /// Next pending notification, if this source queues them internally.
    fn poll_status(&mut self) -> Option<StatusChange> {
        None
    }
}

impl<S: ImageSource + ?Sized> ImageSource for Box<S> {
    fn assign(&mut self, slot: SlotId, source: &FrameRef) {
        (**self).assign(slot, source);
    }

    fn release(&mut self, slot: SlotId) {
        (**self).release(slot);
    }

    fn poll_status(&mut self) -> Option<StatusChange> {
        (**self).poll_status()
    }
}
