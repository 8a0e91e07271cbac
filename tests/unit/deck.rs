use super::*;
use crate::foundation::core::SlotId;
use crate::source::scripted::ScriptedImageSource;

fn deck(kinds: &[ImageKind]) -> ReviewDeck<ScriptedImageSource> {
    ReviewDeck::with_kinds(kinds.iter().copied(), &DisplayConfig::default(), |_| {
        Ok(ScriptedImageSource::new())
    })
    .unwrap()
}

#[test]
fn image_kind_parses_columns_and_names() {
    assert_eq!("A".parse::<ImageKind>().unwrap(), ImageKind::Original);
    assert_eq!("orig".parse::<ImageKind>().unwrap(), ImageKind::Original);
    assert_eq!("b".parse::<ImageKind>().unwrap(), ImageKind::Test);
    assert_eq!(" Diff ".parse::<ImageKind>().unwrap(), ImageKind::Diff);
    assert_eq!("D".parse::<ImageKind>().unwrap(), ImageKind::Alpha);
    assert!("E".parse::<ImageKind>().is_err());

    for kind in ImageKind::ALL {
        assert_eq!(kind.column().to_string().parse::<ImageKind>().unwrap(), kind);
        assert_eq!(kind.name().parse::<ImageKind>().unwrap(), kind);
    }
}

#[test]
fn displays_are_independent() {
    let mut deck = deck(&[ImageKind::Original, ImageKind::Diff]);
    assert_eq!(
        deck.kinds().collect::<Vec<_>>(),
        vec![ImageKind::Original, ImageKind::Diff]
    );

    deck.request_frame(ImageKind::Original, "orig/0001.jpg").unwrap();
    deck.request_frame(ImageKind::Diff, "diff/0001.jpg").unwrap();

    let done = deck
        .display(ImageKind::Original)
        .unwrap()
        .image_source()
        .ready_now(SlotId::B);
    let ev = deck.handle_status(ImageKind::Original, done).unwrap();
    assert!(ev.is_some());

    let orig = deck.display(ImageKind::Original).unwrap();
    let diff = deck.display(ImageKind::Diff).unwrap();
    assert_eq!(orig.current_source(), &FrameRef::from("orig/0001.jpg"));
    assert!(diff.current_source().is_empty());
    assert!(!deck.is_settled());
}

#[test]
fn unknown_kind_is_a_validation_error() {
    let mut deck = deck(&[ImageKind::Original]);
    let err = deck.request_frame(ImageKind::Alpha, "x").unwrap_err();
    assert!(err.to_string().contains("alpha"));
}

#[test]
fn pump_tags_events_with_kind() {
    let mut deck = deck(&ImageKind::ALL);
    for kind in ImageKind::ALL {
        deck.request_frame(kind, format!("{}/0001.png", kind.name()))
            .unwrap();
        let d = deck.display_mut(kind).unwrap();
        let done = d.image_source().ready_now(SlotId::B);
        d.image_source_mut().complete(done);
    }

    let events = deck.pump();
    assert_eq!(events.len(), 4);
    assert_eq!(
        events.iter().map(|(k, _)| *k).collect::<Vec<_>>(),
        ImageKind::ALL.to_vec()
    );
    assert!(deck.is_settled());
}
