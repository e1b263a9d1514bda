use crate::deck::model::SlideDeck;
use crate::foundation::core::{Point, Rect, SlideId};
use crate::foundation::error::DecklineResult;
use crate::layout::geometry::LayoutConfig;

#[derive(Clone, Debug, serde::Serialize)]
/// Resolved pixel geometry for one slide bar.
///
/// All rectangles are in strip coordinates (axis origin at the strip's
/// top-left), ready for the view binder to apply verbatim.
pub struct SlideGeometry {
    /// Slide identity, the reconciliation key across recomputes.
    pub id: SlideId,
    /// Index in the current ordered sequence.
    pub index: usize,
    /// Cumulative start time: sum of `delay + duration` over predecessors.
    pub start_ms: f64,
    /// Main-axis offset of the bar, including the origin margin.
    pub offset_px: f64,
    /// Full main-axis footprint of the bar.
    pub total_px: f64,
    /// Transition-in region.
    pub transition_rect: Rect,
    /// Duration region.
    pub duration_rect: Rect,
    /// Duration resize handle, at the trailing edge of the bar.
    pub resize_handle: Rect,
    /// Anchor for the delete control.
    pub delete_anchor: Point,
    /// Anchor for the clone control.
    pub clone_anchor: Point,
    /// Whether this slide is currently selected.
    pub selected: bool,
}

#[derive(Clone, Debug, Default, serde::Serialize)]
/// Caller-owned result of one layout pass, keyed by slide identity.
///
/// Rebuilt in full on every pass and never written back onto the shared
/// slide records, so two passes over an unchanged sequence are identical.
pub struct TimelineLayout {
    entries: Vec<SlideGeometry>,
}

impl TimelineLayout {
    /// Geometry entries in sequence order.
    pub fn entries(&self) -> &[SlideGeometry] {
        &self.entries
    }

    /// Geometry for a specific slide.
    pub fn get(&self, id: SlideId) -> Option<&SlideGeometry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Main-axis offset for a specific slide.
    pub fn offset_for(&self, id: SlideId) -> Option<f64> {
        self.get(id).map(|e| e.offset_px)
    }

    /// Number of laid-out slides.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the pass produced no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Main-axis offset one past the last slide (where the next bar would
    /// start); the origin margin for an empty deck.
    pub fn end_px(&self, config: &LayoutConfig) -> f64 {
        self.entries
            .last()
            .map(|e| e.offset_px + e.total_px)
            .unwrap_or(config.origin_px)
    }
}

/// Resolve pixel geometry for every slide in the deck.
///
/// Each slide's offset re-sums all predecessors, making a full pass O(n²)
/// in the slide count. Decks are capped at a few tens of slides by design
/// and optimizing this is a non-goal.
///
/// A slide whose timing fields are not finite is skipped with a warning so
/// one inconsistent record cannot blank the whole strip; every other slide
/// still lays out (the skipped slide contributes no size).
#[tracing::instrument(skip(deck, config))]
pub fn resolve_timeline_layout(
    deck: &SlideDeck,
    config: &LayoutConfig,
) -> DecklineResult<TimelineLayout> {
    config.validate()?;

    let orient = config.orientation;
    let mut entries = Vec::with_capacity(deck.len());
    let mut start_ms = 0.0;
    let mut skipped = 0usize;

    for (index, slide) in deck.slides().iter().enumerate() {
        if !slide.delay_ms.is_finite() || !slide.duration_ms.is_finite() {
            tracing::warn!(slide = slide.id.0, "skipping slide with non-finite timing");
            skipped += 1;
            continue;
        }

        // O(n) re-sum per slide, O(n²) per pass.
        let mut offset_px = config.origin_px;
        for previous in &deck.slides()[..index] {
            if previous.delay_ms.is_finite() && previous.duration_ms.is_finite() {
                offset_px += config.total_size(previous);
            }
        }

        let transition_px = config.transition_size(slide);
        let duration_px = config.duration_size(slide);
        let total_px = config.total_size(slide);

        let cross = config.cross_origin_px;
        let breadth = config.bar_breadth_px;
        let pad = config.bar_padding_px;

        let transition_rect = orient.rect(offset_px, transition_px, cross, breadth);
        let duration_start = offset_px + transition_px;
        let duration_rect = orient.rect(duration_start, duration_px, cross, breadth);
        let resize_handle = orient.rect(
            offset_px + total_px - config.resize_handle_px,
            config.resize_handle_px,
            cross + pad,
            (breadth - 2.0 * pad).max(0.0),
        );
        let delete_anchor = orient.point(
            duration_start + config.toolbar_main_px,
            cross + config.toolbar_cross_px,
        );
        let clone_anchor = orient.point(
            duration_start + config.toolbar_main_px + config.toolbar_gap_px,
            cross + config.toolbar_cross_px,
        );

        entries.push(SlideGeometry {
            id: slide.id,
            index,
            start_ms,
            offset_px,
            total_px,
            transition_rect,
            duration_rect,
            resize_handle,
            delete_anchor,
            clone_anchor,
            selected: deck.selected_id() == Some(slide.id),
        });
        start_ms += slide.delay_ms.max(0.0) + slide.duration_ms.max(0.0);
    }

    if skipped > 0 {
        tracing::warn!(skipped, total = deck.len(), "layout pass skipped slides");
    }
    Ok(TimelineLayout { entries })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
