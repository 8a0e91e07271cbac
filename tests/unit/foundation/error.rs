use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FrameviewError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        FrameviewError::config("x")
            .to_string()
            .contains("config error:")
    );
}

#[test]
fn load_failure_names_the_reference() {
    let err = FrameviewError::load("file:///frames/0007.jpg", "no such file");
    let msg = err.to_string();
    assert!(msg.contains("file:///frames/0007.jpg"));
    assert!(msg.contains("no such file"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FrameviewError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
