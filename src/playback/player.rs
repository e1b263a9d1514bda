use crate::deck::model::SlideDeck;
use crate::foundation::core::SlideId;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// External player status as observed by the scrubber.
pub enum PlayerStatus {
    /// Not advancing.
    #[default]
    Idle,
    /// Advancing through slides on a timer.
    Playing,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// "Advanced to slide" notification yielded by [`SlidePlayer::tick`].
pub struct PlayerAdvance {
    /// Index the player advanced to.
    pub index: usize,
    /// Slide at that index.
    pub slide: SlideId,
}

#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize)]
/// Timed slide advancer driven by an injected clock.
///
/// The player holds an index into the deck and, while playing, emits one
/// advance notification each time the current slide's duration elapses.
/// Deadlines chain off each other rather than off the observed tick time,
/// so a large time jump drains the missed advances one `tick` at a time in
/// order. Reaching the end of the deck stops the player; looping back to
/// the start is the scrubber's business, not the player's.
pub struct SlidePlayer {
    status: PlayerStatus,
    current_index: usize,
    next_deadline_ms: Option<f64>,
}

impl SlidePlayer {
    /// Idle player at index zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status.
    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    /// Index of the slide the player considers current.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Point the player at a slide index. Takes effect on the next `play`.
    pub fn set_current_index(&mut self, index: usize) {
        self.current_index = index;
    }

    /// Start advancing from the current index.
    ///
    /// A no-op when already playing or when the deck is empty. The first
    /// advance fires after the current slide's duration.
    pub fn play(&mut self, now_ms: f64, deck: &SlideDeck) {
        if self.status == PlayerStatus::Playing || deck.is_empty() {
            return;
        }
        self.current_index = self.current_index.min(deck.len() - 1);
        let current = &deck.slides()[self.current_index];
        self.status = PlayerStatus::Playing;
        self.next_deadline_ms = Some(now_ms + current.duration_ms.max(0.0));
        tracing::debug!(index = self.current_index, "player started");
    }

    /// Stop advancing, keeping the current index.
    pub fn stop(&mut self) {
        if self.status == PlayerStatus::Playing {
            tracing::debug!(index = self.current_index, "player stopped");
        }
        self.status = PlayerStatus::Idle;
        self.next_deadline_ms = None;
    }

    /// Advance past any elapsed deadline, yielding at most one
    /// notification per call. The caller loops until `None` to drain a
    /// large time jump.
    pub fn tick(&mut self, now_ms: f64, deck: &SlideDeck) -> Option<PlayerAdvance> {
        let deadline = self.next_deadline_ms?;
        if self.status != PlayerStatus::Playing || now_ms < deadline {
            return None;
        }
        if self.current_index + 1 >= deck.len() {
            // Last slide finished displaying.
            self.stop();
            return None;
        }
        self.current_index += 1;
        let slide = &deck.slides()[self.current_index];
        self.next_deadline_ms = Some(deadline + slide.duration_ms.max(0.0));
        Some(PlayerAdvance {
            index: self.current_index,
            slide: slide.id,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/player.rs"]
mod tests;
