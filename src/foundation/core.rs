use std::fmt;
use std::path::Path;

/// Identity of one of the two buffer slots owned by a display.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum SlotId {
    /// First slot. Front after construction and after a reset.
    A,
    /// Second slot.
    B,
}

impl SlotId {
    /// Both slot identities, in index order.
    pub const ALL: [SlotId; 2] = [SlotId::A, SlotId::B];

    /// The opposite slot.
    pub fn other(self) -> Self {
        match self {
            SlotId::A => SlotId::B,
            SlotId::B => SlotId::A,
        }
    }

    /// Stable array index (`A = 0`, `B = 1`).
    pub fn index(self) -> usize {
        match self {
            SlotId::A => 0,
            SlotId::B => 1,
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotId::A => f.write_str("A"),
            SlotId::B => f.write_str("B"),
        }
    }
}

/// Opaque, equality-comparable reference to a frame image.
///
/// Usually a `file:///` URL or a plain path. The display never parses it; only image sources do.
/// The empty reference is the "clear" sentinel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct FrameRef(String);

impl FrameRef {
    /// Wrap a reference string as-is.
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// The empty "clear" reference.
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Reference a file on disk by its (lossily converted) path.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self(path.as_ref().to_string_lossy().into_owned())
    }

    /// Borrow the raw reference string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the empty "clear" reference.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FrameRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FrameRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FrameRef {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for FrameRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&FrameRef> for FrameRef {
    fn from(value: &FrameRef) -> Self {
        value.clone()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
