use crate::deck::model::{DEFAULT_SLIDE_DURATION_MS, SlideDeck};
use crate::foundation::core::SlideId;
use crate::foundation::error::{DecklineError, DecklineResult};
use crate::layout::geometry::{LayoutConfig, cumulative_offset};
use crate::playback::anim::{CursorAnim, Ease};
use crate::playback::player::{PlayerAdvance, PlayerStatus, SlidePlayer};

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
struct PendingReset {
    at_ms: f64,
    // Epoch captured when the reset was armed; a bumped epoch turns an
    // elapsed deadline into a silent no-op.
    epoch: u64,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Playback cursor state machine.
///
/// Owns the single authoritative cursor target along the layout axis.
/// Each animate call replaces any in-flight tween, so cursor animations
/// never run concurrently. All timing comes from caller-supplied `now_ms`
/// values; nothing here touches a wall clock.
pub struct Scrubber {
    target_px: f64,
    // Parked position while no tween is in flight.
    current_px: f64,
    anim: Option<CursorAnim>,
    // Captured from the most recent advance notification.
    next_duration_ms: f64,
    // Suppresses exactly one target advance after a stop/restart cycle, so
    // resuming mid-slide does not double-advance the cursor.
    resuming: bool,
    pending_reset: Option<PendingReset>,
    epoch: u64,
}

impl Scrubber {
    /// Cursor parked at the strip origin.
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            target_px: config.origin_px,
            current_px: config.origin_px,
            anim: None,
            next_duration_ms: DEFAULT_SLIDE_DURATION_MS,
            resuming: false,
            pending_reset: None,
            epoch: 0,
        }
    }

    /// Current cursor target position.
    pub fn target_px(&self) -> f64 {
        self.target_px
    }

    /// Displayed cursor position at `now_ms`.
    pub fn position_at(&self, now_ms: f64) -> f64 {
        match &self.anim {
            Some(anim) => anim.position_at(now_ms),
            None => self.current_px,
        }
    }

    /// Whether the next advance notification will be swallowed.
    pub fn is_resuming(&self) -> bool {
        self.resuming
    }

    /// Deadline of the armed loop reset, if any.
    pub fn pending_reset_at(&self) -> Option<f64> {
        self.pending_reset.map(|p| p.at_ms)
    }

    /// Play/pause transport intent.
    ///
    /// With the player idle, starts it from the selected slide's index (a
    /// no-op when nothing is selected). With the player running, stops it,
    /// freezes the cursor in place, and marks the resume flag so that the
    /// first advance after a restart does not move the target again.
    pub fn toggle_play(
        &mut self,
        now_ms: f64,
        deck: &SlideDeck,
        player: &mut SlidePlayer,
    ) -> DecklineResult<()> {
        match player.status() {
            PlayerStatus::Idle => {
                if let Some(selected) = deck.selected_id()
                    && let Some(index) = deck.index_of(selected)
                {
                    player.set_current_index(index);
                    player.play(now_ms, deck);
                }
            }
            PlayerStatus::Playing => {
                player.stop();
                self.resuming = true;
                self.interrupt(now_ms);
                self.cancel_scheduled();
            }
        }
        Ok(())
    }

    /// Handle an "advanced to slide" notification from the player.
    ///
    /// Captures the new slide's duration for the next tween, advances the
    /// target by the slide's total size unless a resume is pending (then
    /// the flag is consumed without advancing), selects the slide, and
    /// starts the tween.
    pub fn on_player_advance(
        &mut self,
        now_ms: f64,
        deck: &mut SlideDeck,
        config: &LayoutConfig,
        advance: PlayerAdvance,
    ) -> DecklineResult<()> {
        let slide = deck.slide(advance.slide).ok_or_else(|| {
            DecklineError::model(format!(
                "player advanced to slide {} not in deck",
                advance.slide.0
            ))
        })?;
        self.next_duration_ms = slide.duration_ms.max(0.0);
        let total_px = config.total_size(slide);
        if self.resuming {
            self.resuming = false;
        } else {
            self.target_px += total_px;
        }
        self.cancel_scheduled();
        deck.select(Some(advance.slide))?;
        self.animate_to_target(now_ms, self.next_duration_ms);
        Ok(())
    }

    /// Start a tween from the displayed position to the target, replacing
    /// any tween in flight. Zero duration jumps instantly.
    pub fn animate_to_target(&mut self, now_ms: f64, duration_ms: f64) {
        let from = self.position_at(now_ms);
        self.anim = Some(CursorAnim::new(
            from,
            self.target_px,
            now_ms,
            duration_ms,
            Ease::Linear,
        ));
    }

    /// Step the selection forward and jump the cursor across the newly
    /// selected slide's footprint.
    pub fn next(
        &mut self,
        now_ms: f64,
        deck: &mut SlideDeck,
        config: &LayoutConfig,
    ) -> DecklineResult<()> {
        deck.next();
        if let Some(selected) = deck.selected_slide() {
            let total_px = config.total_size(selected);
            self.cancel_scheduled();
            self.target_px += total_px;
            self.animate_to_target(now_ms, 0.0);
        }
        Ok(())
    }

    /// Step the selection backward and jump the cursor back across the
    /// newly selected slide's footprint.
    pub fn previous(
        &mut self,
        now_ms: f64,
        deck: &mut SlideDeck,
        config: &LayoutConfig,
    ) -> DecklineResult<()> {
        deck.previous();
        if let Some(selected) = deck.selected_slide() {
            let total_px = config.total_size(selected);
            self.cancel_scheduled();
            self.target_px -= total_px;
            self.animate_to_target(now_ms, 0.0);
        }
        Ok(())
    }

    /// Re-derive the target from a slide's settled offset and jump there.
    /// Used when a slide is selected directly.
    pub fn jump_to_slide(
        &mut self,
        now_ms: f64,
        deck: &SlideDeck,
        config: &LayoutConfig,
        slide: SlideId,
    ) -> DecklineResult<()> {
        let offset = cumulative_offset(deck.slides(), config, slide)?;
        self.cancel_scheduled();
        self.target_px = config.origin_px + offset;
        self.animate_to_target(now_ms, 0.0);
        Ok(())
    }

    /// Freeze the cursor at its displayed position, dropping any tween.
    pub fn interrupt(&mut self, now_ms: f64) {
        if let Some(anim) = self.anim.take() {
            self.current_px = anim.position_at(now_ms);
        }
    }

    /// Disarm the pending loop reset. An already-elapsed deadline observed
    /// later is discarded by the epoch check rather than applied.
    pub fn cancel_scheduled(&mut self) {
        self.pending_reset = None;
        self.epoch += 1;
    }

    /// Advance cursor time: park finished tweens, arm the loop reset when
    /// a tween finishes on the last slide, and perform an armed reset once
    /// its deadline passes.
    ///
    /// Returns whether the loop reset ran.
    pub fn tick(
        &mut self,
        now_ms: f64,
        deck: &mut SlideDeck,
        player: &mut SlidePlayer,
        config: &LayoutConfig,
    ) -> DecklineResult<bool> {
        if let Some(anim) = self.anim
            && anim.is_done(now_ms)
        {
            self.current_px = anim.to_px;
            self.anim = None;
            self.arm_reset_if_on_last_slide(now_ms, deck, config);
        }

        if let Some(pending) = self.pending_reset
            && now_ms >= pending.at_ms
        {
            self.pending_reset = None;
            if pending.epoch != self.epoch {
                // Superseded while the deadline elapsed.
                return Ok(false);
            }
            return self.reset_to_start(deck, player, config).map(|()| true);
        }
        Ok(false)
    }

    // End-of-deck check, run when a tween settles.
    fn arm_reset_if_on_last_slide(
        &mut self,
        now_ms: f64,
        deck: &SlideDeck,
        config: &LayoutConfig,
    ) {
        let Some(selected) = deck.selected_slide() else {
            return;
        };
        let Some(index) = deck.index_of(selected.id) else {
            return;
        };
        if index + 1 != deck.len() {
            return;
        }
        let at_ms = now_ms + selected.duration_ms.max(0.0) + config.trailing_buffer_ms;
        self.pending_reset = Some(PendingReset {
            at_ms,
            epoch: self.epoch,
        });
        tracing::debug!(at_ms, "armed end-of-deck reset");
    }

    // Loop back: cursor to the origin, selection and player to the first
    // slide, player stopped.
    fn reset_to_start(
        &mut self,
        deck: &mut SlideDeck,
        player: &mut SlidePlayer,
        config: &LayoutConfig,
    ) -> DecklineResult<()> {
        self.target_px = config.origin_px;
        self.current_px = config.origin_px;
        self.anim = None;
        self.resuming = false;
        player.stop();
        player.set_current_index(0);
        if let Some(first) = deck.slides().first().map(|s| s.id) {
            deck.select(Some(first))?;
        }
        tracing::debug!("playback loop reset to start");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/scrubber.rs"]
mod tests;
