use crate::deck::model::{SlideDeck, SlideDraft};
use crate::foundation::core::{Point, SlideId};
use crate::foundation::error::{DecklineError, DecklineResult};
use crate::interact::reorder::{DragFrame, DragOutcome, ReorderEngine};
use crate::layout::geometry::LayoutConfig;
use crate::layout::solver::{SlideGeometry, TimelineLayout, resolve_timeline_layout};
use crate::playback::player::{PlayerStatus, SlidePlayer};
use crate::playback::scrubber::Scrubber;

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
struct Playback {
    player: SlidePlayer,
    scrubber: Scrubber,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Cursor positions exposed to the view binder.
pub struct CursorGeometry {
    /// Displayed position along the layout axis.
    pub current_px: f64,
    /// Authoritative target position.
    pub target_px: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Free-follow position of the bar under an active drag.
pub struct DragVisual {
    /// Slide being dragged.
    pub slide: SlideId,
    /// Raw pointer coordinate along the layout axis.
    pub main_px: f64,
}

#[derive(Clone, Debug, serde::Serialize)]
/// Everything the view binder needs to draw one frame of the strip.
pub struct TimelineSnapshot {
    /// Per-slide geometry in sequence order.
    pub slides: Vec<SlideGeometry>,
    /// Cursor positions; absent when playback is not enabled.
    pub cursor: Option<CursorGeometry>,
    /// Free-follow drag position; absent outside an active gesture.
    pub drag: Option<DragVisual>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Facade wiring the deck, geometry, reorder, and optional playback into
/// one event-driven component.
///
/// The consuming application drives it from a single thread: UI intents
/// call the methods below, a periodic [`TimelineEngine::tick`] advances
/// injected time, and [`TimelineEngine::recompute`] yields the snapshot to
/// apply to the rendering surface. Deck change notifications are drained
/// in emission order, each triggering one full layout pass, so no partial
/// layout state is ever observable.
pub struct TimelineEngine {
    deck: SlideDeck,
    config: LayoutConfig,
    reorder: ReorderEngine,
    playback: Option<Playback>,
    #[serde(skip)]
    layout: TimelineLayout,
}

impl TimelineEngine {
    /// Layout-only engine (no transport) over an empty deck.
    pub fn new(config: LayoutConfig) -> DecklineResult<Self> {
        config.validate()?;
        Ok(Self {
            deck: SlideDeck::new(),
            reorder: ReorderEngine::new(),
            playback: None,
            layout: TimelineLayout::default(),
            config,
        })
    }

    /// Layer the playback scrubber and player on top.
    pub fn with_playback(mut self) -> Self {
        self.playback = Some(Playback {
            player: SlidePlayer::new(),
            scrubber: Scrubber::new(&self.config),
        });
        self
    }

    /// The slide deck.
    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    /// Mutable deck access. Changes are picked up by the next
    /// [`TimelineEngine::tick`] or [`TimelineEngine::recompute`].
    pub fn deck_mut(&mut self) -> &mut SlideDeck {
        &mut self.deck
    }

    /// Layout constants in use.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Result of the most recent layout pass.
    pub fn layout(&self) -> &TimelineLayout {
        &self.layout
    }

    /// Player status, when playback is enabled.
    pub fn player_status(&self) -> Option<PlayerStatus> {
        self.playback.as_ref().map(|pb| pb.player.status())
    }

    /// Insert a new slide after the selected slide (or at the end).
    pub fn add_slide(&mut self, draft: SlideDraft) -> SlideId {
        self.deck.add_slide(draft)
    }

    /// Clone a slide, inserting the copy after the selected slide.
    pub fn clone_slide(&mut self, id: SlideId) -> DecklineResult<SlideId> {
        self.deck.clone_slide(id)
    }

    /// Remove a slide.
    pub fn remove_slide(&mut self, id: SlideId) -> DecklineResult<()> {
        self.deck.remove_slide(id)
    }

    /// Select a slide (or clear the selection), cancelling pending playback
    /// work and jumping the cursor to the slide's settled offset.
    pub fn select(&mut self, now_ms: f64, id: Option<SlideId>) -> DecklineResult<()> {
        self.deck.select(id)?;
        if let Some(pb) = self.playback.as_mut() {
            match id {
                Some(id) => pb
                    .scrubber
                    .jump_to_slide(now_ms, &self.deck, &self.config, id)?,
                None => {
                    pb.scrubber.interrupt(now_ms);
                    pb.scrubber.cancel_scheduled();
                }
            }
        }
        Ok(())
    }

    /// Set a slide's display time from the resize handle's dragged extent.
    pub fn resize_duration(&mut self, id: SlideId, extent_px: f64) -> DecklineResult<()> {
        let duration_ms = extent_px.max(0.0) / self.config.duration_scale;
        let slide = self
            .deck
            .slide_mut(id)
            .ok_or_else(|| DecklineError::model(format!("resize of unknown slide {}", id.0)))?;
        slide.duration_ms = duration_ms;
        Ok(())
    }

    /// Set a slide's transition-in gap from the resize handle's dragged
    /// extent.
    pub fn resize_delay(&mut self, id: SlideId, extent_px: f64) -> DecklineResult<()> {
        let delay_ms = extent_px.max(0.0) / self.config.delay_scale;
        let slide = self
            .deck
            .slide_mut(id)
            .ok_or_else(|| DecklineError::model(format!("resize of unknown slide {}", id.0)))?;
        slide.delay_ms = delay_ms;
        Ok(())
    }

    /// Begin a drag gesture on a slide. Cancels pending playback work so a
    /// stale loop reset cannot fire mid-gesture.
    pub fn begin_drag(&mut self, now_ms: f64, slide: SlideId, pointer: Point) {
        if let Some(pb) = self.playback.as_mut() {
            pb.scrubber.interrupt(now_ms);
            pb.scrubber.cancel_scheduled();
        }
        self.reorder
            .begin(slide, self.config.orientation.main(pointer));
    }

    /// Feed one pointer-move frame of the active gesture.
    pub fn drag_to(&mut self, pointer: Point) -> DecklineResult<Option<DragFrame>> {
        let main = self.config.orientation.main(pointer);
        self.reorder.drag_to(&mut self.deck, &self.config, main)
    }

    /// End the active gesture. A gesture that stayed within the click
    /// distance selects the slide instead of reordering.
    pub fn end_drag(&mut self, now_ms: f64) -> DecklineResult<Option<DragOutcome>> {
        let outcome = self.reorder.end(&self.deck, &self.config)?;
        if let Some(DragOutcome::Clicked(id)) = outcome {
            self.select(now_ms, Some(id))?;
        }
        Ok(outcome)
    }

    /// Play/pause transport intent. Ignored unless playback is enabled.
    pub fn toggle_play(&mut self, now_ms: f64) -> DecklineResult<()> {
        match self.playback.as_mut() {
            Some(pb) => pb.scrubber.toggle_play(now_ms, &self.deck, &mut pb.player),
            None => {
                tracing::debug!("toggle_play ignored: playback not enabled");
                Ok(())
            }
        }
    }

    /// Advance the selection by one slide.
    pub fn next(&mut self, now_ms: f64) -> DecklineResult<()> {
        match self.playback.as_mut() {
            Some(pb) => pb.scrubber.next(now_ms, &mut self.deck, &self.config),
            None => {
                self.deck.next();
                Ok(())
            }
        }
    }

    /// Retreat the selection by one slide.
    pub fn previous(&mut self, now_ms: f64) -> DecklineResult<()> {
        match self.playback.as_mut() {
            Some(pb) => pb.scrubber.previous(now_ms, &mut self.deck, &self.config),
            None => {
                self.deck.previous();
                Ok(())
            }
        }
    }

    /// Advance injected time: drain elapsed player advances in order, park
    /// finished cursor tweens, run the loop reset when due, then process
    /// deck change notifications (one full layout pass each).
    pub fn tick(&mut self, now_ms: f64) -> DecklineResult<()> {
        if let Some(pb) = self.playback.as_mut() {
            while let Some(advance) = pb.player.tick(now_ms, &self.deck) {
                pb.scrubber
                    .on_player_advance(now_ms, &mut self.deck, &self.config, advance)?;
            }
            pb.scrubber
                .tick(now_ms, &mut self.deck, &mut pb.player, &self.config)?;
        }
        self.process_events()
    }

    /// Resolve fresh geometry and assemble the frame snapshot.
    #[tracing::instrument(skip(self))]
    pub fn recompute(&mut self, now_ms: f64) -> DecklineResult<TimelineSnapshot> {
        self.process_events()?;
        self.layout = resolve_timeline_layout(&self.deck, &self.config)?;
        let cursor = self.playback.as_ref().map(|pb| CursorGeometry {
            current_px: pb.scrubber.position_at(now_ms),
            target_px: pb.scrubber.target_px(),
        });
        let drag = self
            .reorder
            .dragged_slide()
            .zip(self.reorder.visual_main_px())
            .map(|(slide, main_px)| DragVisual { slide, main_px });
        Ok(TimelineSnapshot {
            slides: self.layout.entries().to_vec(),
            cursor,
            drag,
        })
    }

    // One full layout pass per drained deck event, in emission order.
    fn process_events(&mut self) -> DecklineResult<()> {
        for event in self.deck.take_events() {
            tracing::debug!(?event, "deck event");
            self.layout = resolve_timeline_layout(&self.deck, &self.config)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/engine.rs"]
mod tests;
