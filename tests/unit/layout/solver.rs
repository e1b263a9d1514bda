use super::*;
use crate::{LayoutConfig, SlideDeck, SlideDraft};

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
fn offsets_start_at_origin_and_strictly_increase() {
    let config = LayoutConfig::horizontal();
    let deck = deck_with_timings(&[(0.0, 0.0), (1000.0, 6000.0), (0.0, 2000.0)]);
    let layout = resolve_timeline_layout(&deck, &config).unwrap();

    assert_eq!(layout.len(), 3);
    assert_eq!(layout.entries()[0].offset_px, config.origin_px);
    for pair in layout.entries().windows(2) {
        assert!(pair[0].offset_px < pair[1].offset_px);
        assert_eq!(pair[1].offset_px, pair[0].offset_px + pair[0].total_px);
    }
}

#[test]
fn unchanged_sequence_produces_identical_offsets() {
    let config = LayoutConfig::horizontal();
    let deck = deck_with_timings(&[(0.0, 7000.0), (300.0, 1000.0), (0.0, 5500.0)]);

    let first = resolve_timeline_layout(&deck, &config).unwrap();
    let second = resolve_timeline_layout(&deck, &config).unwrap();
    assert_eq!(first.len(), second.len());
    for (a, b) in first.entries().iter().zip(second.entries()) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.offset_px, b.offset_px);
        assert_eq!(a.total_px, b.total_px);
        assert_eq!(a.duration_rect, b.duration_rect);
    }
}

#[test]
fn duration_region_abuts_transition_region() {
    let config = LayoutConfig::horizontal();
    let deck = deck_with_timings(&[(1000.0, 6000.0)]);
    let layout = resolve_timeline_layout(&deck, &config).unwrap();
    let entry = &layout.entries()[0];

    assert_eq!(entry.transition_rect.x0, 30.0);
    assert_eq!(entry.transition_rect.width(), 50.0);
    assert_eq!(entry.duration_rect.x0, entry.transition_rect.x1);
    assert_eq!(entry.duration_rect.width(), 300.0);
    assert_eq!(entry.transition_rect.y0, config.cross_origin_px);
    assert_eq!(entry.transition_rect.height(), config.bar_breadth_px);
}

#[test]
fn vertical_orientation_transposes_geometry() {
    let config = LayoutConfig::vertical();
    let deck = deck_with_timings(&[(1000.0, 6000.0), (0.0, 6000.0)]);
    let layout = resolve_timeline_layout(&deck, &config).unwrap();
    let first = &layout.entries()[0];

    // delay 1000 * 0.01 = 10, duration 6000 * 0.01 = 60, padding 10.
    assert_eq!(first.total_px, 80.0);
    assert_eq!(first.transition_rect.y0, 0.0);
    assert_eq!(first.transition_rect.height(), 10.0);
    assert_eq!(first.duration_rect.y0, 10.0);
    assert_eq!(first.duration_rect.height(), 60.0);
    assert_eq!(first.transition_rect.x0, config.cross_origin_px);
    assert_eq!(layout.entries()[1].offset_px, 80.0);
}

#[test]
fn toolbar_anchors_sit_in_the_duration_region() {
    let config = LayoutConfig::horizontal();
    let deck = deck_with_timings(&[(2000.0, 6000.0)]);
    let layout = resolve_timeline_layout(&deck, &config).unwrap();
    let entry = &layout.entries()[0];

    assert_eq!(entry.delete_anchor.x, entry.duration_rect.x0 + 10.0);
    assert_eq!(entry.clone_anchor.x, entry.delete_anchor.x + 20.0);
    assert_eq!(entry.delete_anchor.y, config.cross_origin_px + 35.0);
}

#[test]
fn selected_flag_follows_deck_selection() {
    let config = LayoutConfig::horizontal();
    let mut deck = deck_with_timings(&[(0.0, 1.0), (0.0, 1.0)]);
    let second = deck.slides()[1].id;
    deck.select(Some(second)).unwrap();

    let layout = resolve_timeline_layout(&deck, &config).unwrap();
    assert!(!layout.entries()[0].selected);
    assert!(layout.entries()[1].selected);
}

#[test]
fn non_finite_slide_is_skipped_without_blanking_the_pass() {
    let config = LayoutConfig::horizontal();
    let mut deck = deck_with_timings(&[(0.0, 6000.0), (0.0, 6000.0), (0.0, 6000.0)]);
    let second = deck.slides()[1].id;
    deck.slide_mut(second).unwrap().duration_ms = f64::NAN;

    let layout = resolve_timeline_layout(&deck, &config).unwrap();
    assert_eq!(layout.len(), 2);
    assert!(layout.get(second).is_none());
    // The corrupt slide contributes no size; its successor packs in behind
    // the first slide.
    assert_eq!(layout.entries()[1].offset_px, 330.0);
}

#[test]
fn start_times_accumulate_raw_milliseconds() {
    let config = LayoutConfig::horizontal();
    let deck = deck_with_timings(&[(500.0, 1000.0), (0.0, 2000.0)]);
    let layout = resolve_timeline_layout(&deck, &config).unwrap();
    assert_eq!(layout.entries()[0].start_ms, 0.0);
    assert_eq!(layout.entries()[1].start_ms, 1500.0);
}

#[test]
fn end_px_is_origin_for_empty_deck() {
    let config = LayoutConfig::horizontal();
    let deck = SlideDeck::new();
    let layout = resolve_timeline_layout(&deck, &config).unwrap();
    assert!(layout.is_empty());
    assert_eq!(layout.end_px(&config), config.origin_px);
}
