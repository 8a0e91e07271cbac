use super::*;

#[test]
fn slot_other_is_an_involution() {
    for id in SlotId::ALL {
        assert_ne!(id.other(), id);
        assert_eq!(id.other().other(), id);
    }
    assert_eq!(SlotId::A.index(), 0);
    assert_eq!(SlotId::B.index(), 1);
}

#[test]
fn frame_ref_is_opaque_and_compares_by_value() {
    let a = FrameRef::from("file:///renders/orig/0001.jpg");
    let b = FrameRef::new(String::from("file:///renders/orig/0001.jpg"));
    assert_eq!(a, b);
    assert_eq!(a.as_str(), "file:///renders/orig/0001.jpg");
    assert_ne!(a, FrameRef::from("file:///renders/orig/0002.jpg"));
}

#[test]
fn empty_frame_ref_is_the_clear_sentinel() {
    assert!(FrameRef::empty().is_empty());
    assert!(FrameRef::default().is_empty());
    assert!(!FrameRef::from("x").is_empty());
}

#[test]
fn frame_ref_serializes_as_plain_string() {
    let r = FrameRef::from("frame0001");
    assert_eq!(serde_json::to_string(&r).unwrap(), "\"frame0001\"");
    let back: FrameRef = serde_json::from_str("\"frame0001\"").unwrap();
    assert_eq!(back, r);
}
