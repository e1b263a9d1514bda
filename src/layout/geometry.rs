use crate::deck::model::Slide;
use crate::foundation::core::{Orientation, SlideId};
use crate::foundation::error::{DecklineError, DecklineResult};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Constants mapping slide timing to pixel geometry along the layout axis.
///
/// Two presets mirror the two historical strip variants: a horizontal strip
/// with a playback transport ([`LayoutConfig::horizontal`]) and a vertical
/// layout-only strip ([`LayoutConfig::vertical`]). Both run through the same
/// calculator; the scrubber is layered on separately.
pub struct LayoutConfig {
    /// Main layout axis.
    pub orientation: Orientation,
    /// Pixels per millisecond of transition-in time.
    pub delay_scale: f64,
    /// Pixels per millisecond of display time.
    pub duration_scale: f64,
    /// Rendered floor for the duration dimension, in milliseconds. Bars
    /// never collapse below this even at `duration_ms = 0`.
    pub min_duration_ms: f64,
    /// Fixed per-slide padding for the control region, in pixels.
    pub control_padding_px: f64,
    /// Margin between the strip origin and the first slide, in pixels.
    pub origin_px: f64,
    /// Offset of the strip across the layout axis, in pixels.
    pub cross_origin_px: f64,
    /// Cross-axis extent of a slide bar, in pixels.
    pub bar_breadth_px: f64,
    /// Inset applied to bars and handles across the layout axis, in pixels.
    pub bar_padding_px: f64,
    /// Thickness of the duration resize handle, in pixels.
    pub resize_handle_px: f64,
    /// Toolbar anchor offset along the layout axis, from the start of the
    /// duration region, in pixels.
    pub toolbar_main_px: f64,
    /// Toolbar anchor offset across the layout axis, in pixels.
    pub toolbar_cross_px: f64,
    /// Spacing between adjacent toolbar anchors, in pixels.
    pub toolbar_gap_px: f64,
    /// Pause on the last slide before the playback loop resets, in
    /// milliseconds, added on top of that slide's duration.
    pub trailing_buffer_ms: f64,
    /// Pointer travel below which a gesture counts as a click rather than a
    /// reorder attempt, in pixels.
    pub drag_click_distance_px: f64,
}

impl LayoutConfig {
    /// Horizontal strip with transport controls.
    pub fn horizontal() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            delay_scale: 0.05,
            duration_scale: 0.05,
            min_duration_ms: 5000.0,
            control_padding_px: 0.0,
            origin_px: 30.0,
            cross_origin_px: 30.0,
            bar_breadth_px: 60.0,
            bar_padding_px: 5.0,
            resize_handle_px: 5.0,
            toolbar_main_px: 10.0,
            toolbar_cross_px: 35.0,
            toolbar_gap_px: 20.0,
            trailing_buffer_ms: 2000.0,
            drag_click_distance_px: 2.0,
        }
    }

    /// Vertical layout-only strip.
    pub fn vertical() -> Self {
        Self {
            orientation: Orientation::Vertical,
            delay_scale: 0.01,
            duration_scale: 0.01,
            // Two resize bars frame each slide in this variant.
            control_padding_px: 10.0,
            origin_px: 0.0,
            cross_origin_px: 30.0,
            bar_breadth_px: 260.0,
            toolbar_main_px: 200.0,
            toolbar_cross_px: 10.0,
            ..Self::horizontal()
        }
    }

    /// Check configured constants for finiteness and sign.
    pub fn validate(&self) -> DecklineResult<()> {
        for (name, value) in [
            ("delay_scale", self.delay_scale),
            ("duration_scale", self.duration_scale),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(DecklineError::layout(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("min_duration_ms", self.min_duration_ms),
            ("control_padding_px", self.control_padding_px),
            ("origin_px", self.origin_px),
            ("cross_origin_px", self.cross_origin_px),
            ("bar_breadth_px", self.bar_breadth_px),
            ("bar_padding_px", self.bar_padding_px),
            ("resize_handle_px", self.resize_handle_px),
            ("toolbar_gap_px", self.toolbar_gap_px),
            ("trailing_buffer_ms", self.trailing_buffer_ms),
            ("drag_click_distance_px", self.drag_click_distance_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(DecklineError::layout(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        for (name, value) in [
            ("toolbar_main_px", self.toolbar_main_px),
            ("toolbar_cross_px", self.toolbar_cross_px),
        ] {
            if !value.is_finite() {
                return Err(DecklineError::layout(format!("{name} must be finite")));
            }
        }
        Ok(())
    }

    /// Pixel size of the transition-in region.
    pub fn transition_size(&self, slide: &Slide) -> f64 {
        size_from_duration(slide.delay_ms, 0.0, self.delay_scale)
    }

    /// Pixel size of the duration region, floored at
    /// [`LayoutConfig::min_duration_ms`].
    pub fn duration_size(&self, slide: &Slide) -> f64 {
        size_from_duration(slide.duration_ms, self.min_duration_ms, self.duration_scale)
    }

    /// Full pixel footprint of a slide along the layout axis.
    pub fn total_size(&self, slide: &Slide) -> f64 {
        self.transition_size(slide) + self.duration_size(slide) + self.control_padding_px
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::horizontal()
    }
}

/// Map a duration to a pixel size, flooring at `minimum_ms`.
///
/// Negative inputs are clamped to zero before scaling, so the result is
/// never negative for a non-negative `scale`.
pub fn size_from_duration(value_ms: f64, minimum_ms: f64, scale: f64) -> f64 {
    let value = value_ms.max(0.0);
    let minimum = minimum_ms.max(0.0);
    (value * scale).max(minimum * scale)
}

/// Sum of [`LayoutConfig::total_size`] over every slide strictly before
/// `target` in the ordered sequence; zero when `target` is first.
///
/// A `target` absent from the sequence is a caller error and fails loudly:
/// a silent zero would misplace the slide at the origin and corrupt layout
/// for every slide after it.
pub fn cumulative_offset(
    slides: &[Slide],
    config: &LayoutConfig,
    target: SlideId,
) -> DecklineResult<f64> {
    let index = slides
        .iter()
        .position(|s| s.id == target)
        .ok_or_else(|| {
            DecklineError::model(format!("offset query for slide {} not in deck", target.0))
        })?;
    Ok(slides[..index]
        .iter()
        .map(|s| config.total_size(s))
        .sum())
}

#[cfg(test)]
#[path = "../../tests/unit/layout/geometry.rs"]
mod tests;
