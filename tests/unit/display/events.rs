use super::*;

fn ready(s: &str) -> DisplayEvent {
    DisplayEvent::ImageReady {
        slot: SlotId::B,
        source: FrameRef::from(s),
    }
}

fn error(s: &str) -> DisplayEvent {
    DisplayEvent::ImageError {
        slot: SlotId::A,
        source: FrameRef::from(s),
        reason: "missing".to_string(),
    }
}

#[test]
fn recording_observer_clones_share_the_log() {
    let rec = RecordingObserver::new();
    let mut handed_out = rec.clone();

    handed_out.on_event(&ready("f1"));
    handed_out.on_event(&error("missing.png"));
    handed_out.on_event(&ready("f2"));

    assert_eq!(rec.events().len(), 3);
    assert_eq!(rec.ready_count(), 2);
    assert_eq!(rec.error_sources(), vec![FrameRef::from("missing.png")]);

    rec.clear();
    assert!(rec.events().is_empty());
}

#[test]
fn closures_are_observers() {
    let mut seen = Vec::new();
    {
        let mut obs = |e: &DisplayEvent| seen.push(e.source().clone());
        obs.on_event(&ready("a"));
        obs.on_event(&error("b"));
    }
    assert_eq!(seen, vec![FrameRef::from("a"), FrameRef::from("b")]);
}

#[test]
fn event_accessors() {
    assert!(!ready("x").is_error());
    assert!(error("x").is_error());
    assert_eq!(error("x").source().as_str(), "x");
}

#[test]
fn log_observer_accepts_both_kinds() {
    let mut obs = LogObserver::new("orig");
    obs.on_event(&ready("f1"));
    obs.on_event(&error("f2"));
}
