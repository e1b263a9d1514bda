use super::*;
use crate::{SlideDeck, SlideDraft};

fn slide(name: &str, delay_ms: f64, duration_ms: f64) -> Slide {
    Slide {
        id: SlideId(0),
        name: name.to_string(),
        delay_ms,
        duration_ms,
        metadata: serde_json::Value::Null,
    }
}

fn deck_with_timings(timings: &[(f64, f64)]) -> SlideDeck {
    let mut deck = SlideDeck::new();
    for &(delay_ms, duration_ms) in timings {
        deck.add_slide(SlideDraft {
            name: "s".to_string(),
            delay_ms,
            duration_ms,
            metadata: serde_json::Value::Null,
        });
    }
    deck
}

#[test]
fn size_floors_at_minimum_duration() {
    // A zero-duration slide still renders at the configured floor.
    assert_eq!(size_from_duration(0.0, 5000.0, 0.05), 250.0);
    assert_eq!(size_from_duration(4000.0, 5000.0, 0.05), 250.0);
    assert_eq!(size_from_duration(6000.0, 5000.0, 0.05), 300.0);
}

#[test]
fn negative_inputs_clamp_to_zero() {
    assert_eq!(size_from_duration(-100.0, 0.0, 0.05), 0.0);
    assert_eq!(size_from_duration(-100.0, -5000.0, 0.05), 0.0);

    let config = LayoutConfig::horizontal();
    let s = slide("s", -700.0, -1.0);
    assert_eq!(config.transition_size(&s), 0.0);
    // Duration still floors at the minimum even when negative.
    assert_eq!(config.duration_size(&s), 250.0);
}

#[test]
fn total_size_sums_regions_and_control_padding() {
    let mut config = LayoutConfig::horizontal();
    config.control_padding_px = 10.0;
    let s = slide("s", 1000.0, 6000.0);
    assert_eq!(config.transition_size(&s), 50.0);
    assert_eq!(config.duration_size(&s), 300.0);
    assert_eq!(config.total_size(&s), 360.0);
}

#[test]
fn cumulative_offset_sums_strict_predecessors() {
    let config = LayoutConfig::horizontal();
    let deck = deck_with_timings(&[(0.0, 6000.0), (1000.0, 6000.0), (0.0, 0.0)]);
    let slides = deck.slides();

    assert_eq!(
        cumulative_offset(slides, &config, slides[0].id).unwrap(),
        0.0
    );
    assert_eq!(
        cumulative_offset(slides, &config, slides[1].id).unwrap(),
        300.0
    );
    assert_eq!(
        cumulative_offset(slides, &config, slides[2].id).unwrap(),
        650.0
    );
}

#[test]
fn cumulative_offset_fails_loudly_for_absent_slide() {
    // A silent zero would misplace the slide at the origin.
    let config = LayoutConfig::horizontal();
    let deck = deck_with_timings(&[(0.0, 1000.0)]);
    let err = cumulative_offset(deck.slides(), &config, SlideId(77)).unwrap_err();
    assert!(matches!(err, DecklineError::Model(_)));
}

#[test]
fn offsets_strictly_increase_along_the_sequence() {
    let config = LayoutConfig::horizontal();
    // Zero durations included: the floor keeps every bar non-degenerate.
    let deck = deck_with_timings(&[(0.0, 0.0), (0.0, 0.0), (2000.0, 8000.0), (0.0, 100.0)]);
    let slides = deck.slides();
    let offsets: Vec<f64> = slides
        .iter()
        .map(|s| cumulative_offset(slides, &config, s.id).unwrap())
        .collect();
    for pair in offsets.windows(2) {
        assert!(pair[0] < pair[1], "offsets must be strictly increasing");
    }
}

#[test]
fn presets_validate() {
    LayoutConfig::horizontal().validate().unwrap();
    LayoutConfig::vertical().validate().unwrap();
}

#[test]
fn validate_rejects_degenerate_scales() {
    let mut config = LayoutConfig::horizontal();
    config.duration_scale = 0.0;
    assert!(matches!(
        config.validate().unwrap_err(),
        DecklineError::Layout(_)
    ));

    let mut config = LayoutConfig::horizontal();
    config.origin_px = f64::NAN;
    assert!(config.validate().is_err());
}
