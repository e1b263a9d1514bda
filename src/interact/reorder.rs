use crate::deck::model::SlideDeck;
use crate::foundation::core::SlideId;
use crate::foundation::error::{DecklineError, DecklineResult};
use crate::layout::geometry::{LayoutConfig, cumulative_offset};

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
struct ActiveDrag {
    slide: SlideId,
    grab_main_px: f64,
    // Set once pointer travel exceeds the click distance; below that the
    // gesture is still a click-to-select.
    armed: bool,
    last_main_px: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Per-frame result of a drag update.
pub struct DragFrame {
    /// Slide being dragged.
    pub slide: SlideId,
    /// Where the bar should be drawn this frame: the raw pointer coordinate,
    /// not the settled grid position.
    pub visual_main_px: f64,
    /// Whether this frame issued a reorder move.
    pub moved: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Terminal outcome of a gesture.
pub enum DragOutcome {
    /// Pointer never travelled past the click distance; treat as a select.
    Clicked(SlideId),
    /// The bar settles at the recomputed offset of its (possibly new)
    /// index. The jump from free-follow to the snapped position is
    /// intentional and signals "settled".
    Dropped {
        /// Slide that was dragged.
        slide: SlideId,
        /// Snapped main-axis offset.
        settled_main_px: f64,
    },
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// Drag-to-reorder state machine for one pointer.
///
/// The engine consumes already-resolved pointer coordinates along the
/// layout axis, one per frame; low-level pointer capture stays outside.
/// While a slide is between its neighbors' midpoints nothing moves, so a
/// pointer oscillating near a boundary issues idempotent no-ops rather
/// than duplicate swaps.
pub struct ReorderEngine {
    drag: Option<ActiveDrag>,
}

impl ReorderEngine {
    /// Engine with no gesture in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Slide under the active gesture.
    pub fn dragged_slide(&self) -> Option<SlideId> {
        self.drag.map(|d| d.slide)
    }

    /// Begin a gesture on `slide` at the given pointer coordinate.
    /// Replaces any gesture already in progress.
    pub fn begin(&mut self, slide: SlideId, pointer_main_px: f64) {
        self.drag = Some(ActiveDrag {
            slide,
            grab_main_px: pointer_main_px,
            armed: false,
            last_main_px: pointer_main_px,
        });
    }

    /// Feed one pointer-move frame.
    ///
    /// Issues at most one reorder move per frame: when the pointer has
    /// crossed to the *before* side of the dragged slide's settled offset
    /// and past the previous neighbor's center, the slide swaps with that
    /// neighbor; symmetric for the *after* side. Dragging the first slide
    /// further backward (or the last further forward) requests nothing.
    pub fn drag_to(
        &mut self,
        deck: &mut SlideDeck,
        config: &LayoutConfig,
        pointer_main_px: f64,
    ) -> DecklineResult<Option<DragFrame>> {
        let Some(drag) = self.drag.as_mut() else {
            return Ok(None);
        };
        drag.last_main_px = pointer_main_px;
        if !drag.armed {
            if (pointer_main_px - drag.grab_main_px).abs() < config.drag_click_distance_px {
                return Ok(None);
            }
            drag.armed = true;
        }
        let slide = drag.slide;

        let Some(my_index) = deck.index_of(slide) else {
            // The deck mutated under the gesture; drop it rather than drag a ghost.
            self.drag = None;
            return Err(DecklineError::model(format!(
                "dragged slide {} vanished from deck",
                slide.0
            )));
        };
        let original_px = config.origin_px + cumulative_offset(deck.slides(), config, slide)?;

        let mut moved = false;
        if pointer_main_px < original_px && my_index > 0 {
            let previous = &deck.slides()[my_index - 1];
            let previous_center = config.origin_px
                + cumulative_offset(deck.slides(), config, previous.id)?
                + config.total_size(previous) / 2.0;
            if pointer_main_px < previous_center {
                moved = deck.move_slide(my_index, my_index - 1);
            }
        } else if pointer_main_px > original_px && my_index < deck.len() - 1 {
            let next = &deck.slides()[my_index + 1];
            let next_center = config.origin_px
                + cumulative_offset(deck.slides(), config, next.id)?
                + config.total_size(next) / 2.0;
            if pointer_main_px > next_center {
                moved = deck.move_slide(my_index, my_index + 1);
            }
        }

        Ok(Some(DragFrame {
            slide,
            visual_main_px: pointer_main_px,
            moved,
        }))
    }

    /// End the gesture.
    ///
    /// Returns [`DragOutcome::Clicked`] when the pointer never left the
    /// click distance, otherwise [`DragOutcome::Dropped`] with the snapped
    /// offset of the slide's final index.
    pub fn end(
        &mut self,
        deck: &SlideDeck,
        config: &LayoutConfig,
    ) -> DecklineResult<Option<DragOutcome>> {
        let Some(drag) = self.drag.take() else {
            return Ok(None);
        };
        if !drag.armed {
            return Ok(Some(DragOutcome::Clicked(drag.slide)));
        }
        let settled =
            config.origin_px + cumulative_offset(deck.slides(), config, drag.slide)?;
        Ok(Some(DragOutcome::Dropped {
            slide: drag.slide,
            settled_main_px: settled,
        }))
    }

    /// Abandon the gesture without an outcome.
    pub fn cancel(&mut self) {
        self.drag = None;
    }

    /// Raw pointer coordinate of the active gesture's latest frame.
    pub fn visual_main_px(&self) -> Option<f64> {
        self.drag.map(|d| d.last_main_px)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interact/reorder.rs"]
mod tests;
