//! Image sources: the collaborators that turn a slot's frame reference into pixels.
//!
//! A display only ever talks to the [`ImageSource`] trait. Sources report progress back as
//! [`StatusChange`] messages, either through [`ImageSource::poll_status`] or through whatever
//! channel the embedding application drains.

pub(crate) mod decode;
pub(crate) mod file;
pub(crate) mod image_source;
pub(crate) mod scripted;
