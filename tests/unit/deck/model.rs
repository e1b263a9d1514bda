use super::*;

fn deck_of(names: &[&str]) -> SlideDeck {
    let mut deck = SlideDeck::new();
    for name in names {
        deck.add_slide(SlideDraft::named(*name));
    }
    deck.take_events();
    deck
}

#[test]
fn add_inserts_after_selected_slide() {
    let mut deck = deck_of(&["a", "b", "c"]);
    let first = deck.slides()[0].id;
    deck.select(Some(first)).unwrap();

    let added = deck.add_slide(SlideDraft::named("d"));
    let names: Vec<_> = deck.slides().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["a", "d", "b", "c"]);
    assert_eq!(deck.index_of(added), Some(1));
}

#[test]
fn add_without_selection_appends() {
    let mut deck = deck_of(&["a", "b"]);
    deck.add_slide(SlideDraft::named("c"));
    let names: Vec<_> = deck.slides().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["a", "b", "c"]);
}

#[test]
fn clone_copies_label_with_default_timing() {
    let mut deck = SlideDeck::new();
    let source = deck.add_slide(SlideDraft {
        name: "intro".to_string(),
        delay_ms: 700.0,
        duration_ms: 1234.0,
        metadata: serde_json::json!({"screenshot": "intro.png"}),
    });
    deck.select(Some(source)).unwrap();

    let copy = deck.clone_slide(source).unwrap();
    let cloned = deck.slide(copy).unwrap();
    assert_eq!(cloned.name, "intro");
    assert_eq!(cloned.delay_ms, 0.0);
    assert_eq!(cloned.duration_ms, DEFAULT_SLIDE_DURATION_MS);
    assert_eq!(cloned.metadata["screenshot"], "intro.png");
    assert_eq!(deck.index_of(copy), Some(1));
}

#[test]
fn clone_of_unknown_slide_is_a_model_error() {
    let mut deck = deck_of(&["a"]);
    let err = deck.clone_slide(SlideId(999)).unwrap_err();
    assert!(matches!(err, DecklineError::Model(_)));
}

#[test]
fn removing_selected_slide_clears_selection() {
    let mut deck = deck_of(&["a", "b"]);
    let first = deck.slides()[0].id;
    deck.select(Some(first)).unwrap();
    deck.take_events();

    deck.remove_slide(first).unwrap();
    assert_eq!(deck.selected_id(), None);
    assert_eq!(
        deck.take_events(),
        vec![
            DeckEvent::SlideRemoved(first),
            DeckEvent::SlideSelected(None)
        ]
    );
}

#[test]
fn move_slide_boundary_and_identity_are_no_ops() {
    let mut deck = deck_of(&["a", "b", "c"]);
    assert!(!deck.move_slide(1, 1));
    assert!(!deck.move_slide(0, 3));
    assert!(!deck.move_slide(5, 0));
    assert!(deck.take_events().is_empty());

    assert!(deck.move_slide(0, 2));
    let names: Vec<_> = deck.slides().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["b", "c", "a"]);
    assert_eq!(deck.take_events(), vec![DeckEvent::SlidesMoved]);
}

#[test]
fn events_drain_in_emission_order() {
    let mut deck = SlideDeck::new();
    let a = deck.add_slide(SlideDraft::named("a"));
    let b = deck.add_slide(SlideDraft::named("b"));
    deck.select(Some(b)).unwrap();
    deck.move_slide(0, 1);
    assert_eq!(
        deck.take_events(),
        vec![
            DeckEvent::SlideAdded(a),
            DeckEvent::SlideAdded(b),
            DeckEvent::SlideSelected(Some(b)),
            DeckEvent::SlidesMoved,
        ]
    );
    assert!(deck.take_events().is_empty());
}

#[test]
fn reselecting_the_same_slide_emits_nothing() {
    let mut deck = deck_of(&["a"]);
    let a = deck.slides()[0].id;
    deck.select(Some(a)).unwrap();
    deck.take_events();
    deck.select(Some(a)).unwrap();
    assert!(deck.take_events().is_empty());
}

#[test]
fn selecting_unknown_slide_is_a_model_error() {
    let mut deck = deck_of(&["a"]);
    let err = deck.select(Some(SlideId(42))).unwrap_err();
    assert!(matches!(err, DecklineError::Model(_)));
}

#[test]
fn selection_stepping_clamps_at_deck_ends() {
    let mut deck = deck_of(&["a", "b"]);
    deck.next();
    assert_eq!(deck.selected_slide().unwrap().name, "a");
    deck.next();
    assert_eq!(deck.selected_slide().unwrap().name, "b");
    deck.next();
    assert_eq!(deck.selected_slide().unwrap().name, "b");
    deck.previous();
    assert_eq!(deck.selected_slide().unwrap().name, "a");
    deck.previous();
    assert_eq!(deck.selected_slide().unwrap().name, "a");
}

#[test]
fn indexed_slides_accumulate_delay_and_duration() {
    let mut deck = SlideDeck::new();
    for (delay, duration) in [(0.0, 1000.0), (500.0, 2000.0), (0.0, 3000.0)] {
        deck.add_slide(SlideDraft {
            name: "s".to_string(),
            delay_ms: delay,
            duration_ms: duration,
            metadata: serde_json::Value::Null,
        });
    }
    let starts: Vec<_> = deck.indexed_slides().iter().map(|i| i.start_ms).collect();
    assert_eq!(starts, [0.0, 1000.0, 3500.0]);
}

#[test]
fn slide_at_time_respects_window_boundaries() {
    let mut deck = SlideDeck::new();
    for duration in [1000.0, 2000.0] {
        deck.add_slide(SlideDraft {
            name: "s".to_string(),
            delay_ms: 0.0,
            duration_ms: duration,
            metadata: serde_json::Value::Null,
        });
    }
    let first = deck.slides()[0].id;
    let second = deck.slides()[1].id;

    assert_eq!(deck.slide_at_time(0.0).unwrap().id, first);
    assert_eq!(deck.slide_at_time(999.0).unwrap().id, first);
    assert_eq!(deck.slide_at_time(1000.0).unwrap().id, second);
    assert_eq!(deck.slide_at_time(2999.0).unwrap().id, second);
    assert!(deck.slide_at_time(3000.0).is_none());
    assert!(deck.slide_at_time(-1.0).is_none());
}
