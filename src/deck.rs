//! Side-by-side review columns, one independent display per image kind.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::display::config::DisplayConfig;
use crate::display::double_buffered::DoubleBufferedDisplay;
use crate::display::events::{DisplayEvent, LogObserver};
use crate::foundation::core::FrameRef;
use crate::foundation::error::{FrameviewError, FrameviewResult};
use crate::source::image_source::{ImageSource, StatusChange};

/// Kind of rendered image shown in a review column.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    /// Reference render (column A).
    Original,
    /// Render under test (column B).
    Test,
    /// Difference image (column C).
    Diff,
    /// Alpha channel (column D).
    Alpha,
}

impl ImageKind {
    /// All kinds, in column order.
    pub const ALL: [ImageKind; 4] = [
        ImageKind::Original,
        ImageKind::Test,
        ImageKind::Diff,
        ImageKind::Alpha,
    ];

    /// Column letter (`A`..`D`).
    pub fn column(self) -> char {
        match self {
            ImageKind::Original => 'A',
            ImageKind::Test => 'B',
            ImageKind::Diff => 'C',
            ImageKind::Alpha => 'D',
        }
    }

    /// Short lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            ImageKind::Original => "orig",
            ImageKind::Test => "test",
            ImageKind::Diff => "diff",
            ImageKind::Alpha => "alpha",
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ImageKind {
    type Err = FrameviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "orig" | "original" => Ok(ImageKind::Original),
            "b" | "test" => Ok(ImageKind::Test),
            "c" | "diff" => Ok(ImageKind::Diff),
            "d" | "alpha" => Ok(ImageKind::Alpha),
            other => Err(FrameviewError::validation(format!(
                "unknown image kind '{other}' (expected A-D or orig/test/diff/alpha)"
            ))),
        }
    }
}

/// A set of independent displays keyed by [`ImageKind`].
///
/// The deck only routes requests and notifications; displays share no state.
pub struct ReviewDeck<S: ImageSource> {
    displays: BTreeMap<ImageKind, DoubleBufferedDisplay<S>>,
}

impl<S: ImageSource> Default for ReviewDeck<S> {
    fn default() -> Self {
        Self {
            displays: BTreeMap::new(),
        }
    }
}

impl<S: ImageSource> ReviewDeck<S> {
    /// Create an empty deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build one display per kind, each with its own source and a logging observer.
    pub fn with_kinds(
        kinds: impl IntoIterator<Item = ImageKind>,
        config: &DisplayConfig,
        mut make_source: impl FnMut(ImageKind) -> FrameviewResult<S>,
    ) -> FrameviewResult<Self> {
        let mut deck = Self::new();
        for kind in kinds {
            let mut display = DoubleBufferedDisplay::new(make_source(kind)?, config.clone());
            display.add_observer(LogObserver::new(kind.name()));
            deck.insert(kind, display);
        }
        Ok(deck)
    }

    /// Add or replace the display for `kind`.
    pub fn insert(&mut self, kind: ImageKind, display: DoubleBufferedDisplay<S>) {
        self.displays.insert(kind, display);
    }

    /// Enabled kinds, in column order.
    pub fn kinds(&self) -> impl Iterator<Item = ImageKind> + '_ {
        self.displays.keys().copied()
    }

    /// Borrow the display for `kind`.
    pub fn display(&self, kind: ImageKind) -> Option<&DoubleBufferedDisplay<S>> {
        self.displays.get(&kind)
    }

    /// Mutably borrow the display for `kind`.
    pub fn display_mut(&mut self, kind: ImageKind) -> Option<&mut DoubleBufferedDisplay<S>> {
        self.displays.get_mut(&kind)
    }

    fn require(&mut self, kind: ImageKind) -> FrameviewResult<&mut DoubleBufferedDisplay<S>> {
        self.displays
            .get_mut(&kind)
            .ok_or_else(|| FrameviewError::validation(format!("no display for image kind '{kind}'")))
    }

    /// Route a frame request to the display for `kind`.
    pub fn request_frame(
        &mut self,
        kind: ImageKind,
        reference: impl Into<FrameRef>,
    ) -> FrameviewResult<Option<DisplayEvent>> {
        Ok(self.require(kind)?.request_frame(reference))
    }

    /// Route a status notification to the display for `kind`.
    pub fn handle_status(
        &mut self,
        kind: ImageKind,
        change: StatusChange,
    ) -> FrameviewResult<Option<DisplayEvent>> {
        Ok(self.require(kind)?.handle_status(change))
    }

    /// Pump every display's source, returning the events tagged with their kind.
    pub fn pump(&mut self) -> Vec<(ImageKind, DisplayEvent)> {
        let mut out = Vec::new();
        for (&kind, display) in &mut self.displays {
            out.extend(display.pump().into_iter().map(|e| (kind, e)));
        }
        out
    }

    /// Whether every display shows the frame it was last asked for.
    pub fn is_settled(&self) -> bool {
        self.displays
            .values()
            .all(|d| d.current_source() == d.requested_source())
    }
}

#[cfg(test)]
#[path = "../tests/unit/deck.rs"]
mod tests;
