use std::io::Cursor;

use super::*;

fn png_bytes(w: u32, h: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba(rgba));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_frame_png_dimensions_and_straight_alpha() {
    let prepared = decode_frame(&png_bytes(2, 1, [100, 50, 200, 128])).unwrap();
    assert_eq!(prepared.width, 2);
    assert_eq!(prepared.height, 1);
    assert_eq!(prepared.rgba8.len(), 2 * 4);
    assert_eq!(prepared.pixel(1, 0), Some([100, 50, 200, 128]));
    assert_eq!(prepared.pixel(2, 0), None);
}

#[test]
fn decode_frame_rejects_garbage() {
    assert!(decode_frame(b"definitely not an image").is_err());
}

#[test]
fn load_frame_missing_file_is_an_error() {
    let missing = std::env::temp_dir().join("frameview_decode_missing_0001.png");
    let err = load_frame(&missing).unwrap_err();
    assert!(err.to_string().contains("frameview_decode_missing_0001.png"));
    let FrameviewError::Load { reason, .. } = &err else {
        panic!("expected a load error, got {err:?}");
    };
    // The OS cause survives, not just the outer context.
    let os = std::fs::read(&missing).unwrap_err().to_string();
    assert_eq!(reason, &format!("read frame: {os}"));
}

#[test]
fn load_frame_undecodable_file_keeps_decoder_cause() {
    let path = std::env::temp_dir().join(format!(
        "frameview_decode_garbage_{}.png",
        std::process::id()
    ));
    std::fs::write(&path, b"definitely not an image").unwrap();
    let err = load_frame(&path).unwrap_err();
    std::fs::remove_file(&path).ok();

    let FrameviewError::Load { source_ref, reason } = &err else {
        panic!("expected a load error, got {err:?}");
    };
    assert_eq!(source_ref, &path.display().to_string());
    assert!(reason.starts_with("decode image from memory: "), "{reason}");
}

#[test]
fn frame_path_strips_file_url_prefixes() {
    assert_eq!(
        frame_path(&FrameRef::from("renders/0001.jpg")),
        PathBuf::from("renders/0001.jpg")
    );
    if cfg!(windows) {
        assert_eq!(
            frame_path(&FrameRef::from("file:///C:/renders/0001.jpg")),
            PathBuf::from("C:/renders/0001.jpg")
        );
    } else {
        assert_eq!(
            frame_path(&FrameRef::from("file:///renders/0001.jpg")),
            PathBuf::from("/renders/0001.jpg")
        );
    }
    assert_eq!(
        frame_path(&FrameRef::from("file://renders/0001.jpg")),
        PathBuf::from("renders/0001.jpg")
    );
}
