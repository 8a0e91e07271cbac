use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;

use crate::{
    FrameviewError, FrameviewResult,
    foundation::core::FrameRef,
    source::image_source::FrameImage,
};

/// Decode encoded image bytes into straight RGBA8.
pub fn decode_frame(bytes: &[u8]) -> FrameviewResult<FrameImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(FrameImage {
        width,
        height,
        rgba8: Arc::new(rgba.into_raw()),
    })
}

/// Read and decode the frame file at `path`.
///
/// Every failure is a [`FrameviewError::Load`] whose reason carries the full cause chain.
pub fn load_frame(path: &Path) -> FrameviewResult<FrameImage> {
    let bytes = std::fs::read(path)
        .context("read frame")
        .map_err(|e| load_error(path, e))?;
    decode_frame(&bytes).map_err(|e| match e {
        FrameviewError::Other(e) => load_error(path, e),
        other => FrameviewError::load(path.display().to_string(), other.to_string()),
    })
}

fn load_error(path: &Path, err: anyhow::Error) -> FrameviewError {
    FrameviewError::load(path.display().to_string(), format!("{err:#}"))
}

/// Map a frame reference to a filesystem path.
///
/// `file://` and `file:///` prefixes are stripped; anything else is taken as a plain path.
pub fn frame_path(reference: &FrameRef) -> PathBuf {
    let s = reference.as_str();
    let Some(rest) = s.strip_prefix("file://") else {
        return PathBuf::from(s);
    };

    // `file:///C:/x` names `C:/x` on Windows; on Unix the third slash is the root.
    if cfg!(windows) {
        let b = rest.as_bytes();
        if b.len() >= 3 && b[0] == b'/' && b[1].is_ascii_alphabetic() && b[2] == b':' {
            return PathBuf::from(&rest[1..]);
        }
    }
    PathBuf::from(rest)
}

#[cfg(test)]
#[path = "../../tests/unit/source/decode.rs"]
mod tests;
