//! frameview presents rendered frame sequences without flicker while the user scrubs.
//!
//! The core is [`DoubleBufferedDisplay`]: two buffer slots alternate as the visible (front) and
//! hidden (back) layer. A request loads into the back slot while the front keeps showing the
//! previous frame; the slots swap only when the loaded frame is still the most recently requested
//! one.
//!
//! # Flow
//!
//! 1. **Request**: [`DoubleBufferedDisplay::request_frame`] binds a [`FrameRef`] to the back slot
//!    and asks the [`ImageSource`] to load it.
//! 2. **Notify**: the source reports [`StatusChange`]s (`Loading`, `Ready`, `Error`) per slot.
//! 3. **Swap**: [`DoubleBufferedDisplay::handle_status`] applies the staleness guard, swaps on a
//!    current `Ready`, and dispatches [`DisplayEvent`]s to [`DisplayObserver`]s.
//!
//! Loading is not this crate's concern beyond the [`ImageSource`] contract; [`FileImageSource`]
//! is a ready-made file-backed implementation and [`ScriptedImageSource`] a deterministic one for
//! tests.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod deck;
mod display;
mod foundation;
mod source;

pub use deck::{ImageKind, ReviewDeck};
pub use display::config::DisplayConfig;
pub use display::double_buffered::{DoubleBufferedDisplay, RenderTarget};
pub use display::events::{DisplayEvent, DisplayObserver, LogObserver, RecordingObserver};
pub use display::slot::{BufferSlot, SlotStatus};
pub use foundation::core::{FrameRef, SlotId};
pub use foundation::error::{FrameviewError, FrameviewResult};
pub use source::decode::{decode_frame, frame_path, load_frame};
pub use source::file::{FileImageSource, FileImageSourceOpts};
pub use source::image_source::{FrameImage, ImageSource, LoadStatus, StatusChange};
pub use source::scripted::ScriptedImageSource;
