//! The double-buffered display and its supporting types.
//!
//! Two buffer slots alternate as the visible (front) and hidden (back) layer. New frames always
//! load into the back slot; the front slot only changes through a swap, and a swap only happens
//! for the most recently requested frame.

pub(crate) mod config;
pub(crate) mod double_buffered;
pub(crate) mod events;
pub(crate) mod slot;
