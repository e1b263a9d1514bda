use crate::foundation::core::SlideId;
use crate::foundation::error::{DecklineError, DecklineResult};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// One step in the presentation sequence.
///
/// A slide carries a transition-in gap (`delay_ms`) followed by an active
/// display time (`duration_ms`). Negative values are tolerated here and
/// clamped at the geometry boundary, since upstream resize gestures may
/// transiently produce negative deltas.
pub struct Slide {
    /// Stable identity, assigned by the owning deck.
    pub id: SlideId,
    /// Display label.
    pub name: String,
    /// Transition-in gap in milliseconds before the slide becomes active.
    pub delay_ms: f64,
    /// Active display time in milliseconds.
    pub duration_ms: f64,
    /// Free-form consumer data (screenshot URLs, annotation flags). The
    /// engine never interprets this.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub metadata: serde_json::Value,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Payload for creating a slide; the deck assigns the id.
pub struct SlideDraft {
    /// Display label.
    pub name: String,
    /// Transition-in gap in milliseconds.
    pub delay_ms: f64,
    /// Active display time in milliseconds.
    pub duration_ms: f64,
    /// Free-form consumer data.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub metadata: serde_json::Value,
}

impl SlideDraft {
    /// Draft with the default presentation timing (5 s display, no gap).
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            delay_ms: 0.0,
            duration_ms: DEFAULT_SLIDE_DURATION_MS,
            metadata: serde_json::Value::Null,
        }
    }
}

/// Display time given to newly added and cloned slides.
pub const DEFAULT_SLIDE_DURATION_MS: f64 = 5000.0;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Change notification emitted by deck mutations, drained in emission order.
pub enum DeckEvent {
    /// A slide entered the sequence.
    SlideAdded(SlideId),
    /// A slide left the sequence.
    SlideRemoved(SlideId),
    /// The sequence order changed.
    SlidesMoved,
    /// The selection changed.
    SlideSelected(Option<SlideId>),
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A slide paired with its cumulative start time along the deck.
///
/// Rebuilt in full whenever queried; never persisted.
pub struct IndexedSlide {
    /// Slide identity.
    pub id: SlideId,
    /// Sum of `delay_ms + duration_ms` over all preceding slides.
    pub start_ms: f64,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// Ordered slide sequence with a nullable selection.
///
/// The sequence order is the presentation order and the layout order; there
/// is no separate sort key. The deck is the only component that creates or
/// destroys slide records. Mutations enqueue [`DeckEvent`]s which consumers
/// drain with [`SlideDeck::take_events`].
pub struct SlideDeck {
    slides: Vec<Slide>,
    selected: Option<SlideId>,
    next_id: u64,
    #[serde(skip)]
    pending: Vec<DeckEvent>,
}

impl SlideDeck {
    /// Empty deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ordered slide sequence.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the deck holds no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Slide by id.
    pub fn slide(&self, id: SlideId) -> Option<&Slide> {
        self.slides.iter().find(|s| s.id == id)
    }

    /// Mutable slide access for timing edits (resize gestures).
    pub fn slide_mut(&mut self, id: SlideId) -> Option<&mut Slide> {
        self.slides.iter_mut().find(|s| s.id == id)
    }

    /// Current index of `id` in the sequence.
    pub fn index_of(&self, id: SlideId) -> Option<usize> {
        self.slides.iter().position(|s| s.id == id)
    }

    /// Currently selected slide id.
    pub fn selected_id(&self) -> Option<SlideId> {
        self.selected
    }

    /// Currently selected slide.
    pub fn selected_slide(&self) -> Option<&Slide> {
        self.selected.and_then(|id| self.slide(id))
    }

    /// Insert a new slide immediately after the selected slide, or at the
    /// end when nothing is selected. Returns the new id.
    pub fn add_slide(&mut self, draft: SlideDraft) -> SlideId {
        let index = match self.selected.and_then(|id| self.index_of(id)) {
            Some(i) => i + 1,
            None => self.slides.len(),
        };
        self.add_slide_at(draft, index)
    }

    /// Insert a new slide at `index` (clamped to the sequence bounds).
    pub fn add_slide_at(&mut self, draft: SlideDraft, index: usize) -> SlideId {
        let id = SlideId(self.next_id);
        self.next_id += 1;
        let index = index.min(self.slides.len());
        self.slides.insert(
            index,
            Slide {
                id,
                name: draft.name,
                delay_ms: draft.delay_ms,
                duration_ms: draft.duration_ms,
                metadata: draft.metadata,
            },
        );
        self.pending.push(DeckEvent::SlideAdded(id));
        id
    }

    /// Copy a slide's label and metadata into a new slide with default
    /// timing, inserted after the selected slide.
    pub fn clone_slide(&mut self, id: SlideId) -> DecklineResult<SlideId> {
        let source = self
            .slide(id)
            .ok_or_else(|| DecklineError::model(format!("clone of unknown slide {}", id.0)))?;
        let draft = SlideDraft {
            name: source.name.clone(),
            delay_ms: 0.0,
            duration_ms: DEFAULT_SLIDE_DURATION_MS,
            metadata: source.metadata.clone(),
        };
        Ok(self.add_slide(draft))
    }

    /// Remove a slide. Removing the selected slide clears the selection.
    pub fn remove_slide(&mut self, id: SlideId) -> DecklineResult<()> {
        let index = self
            .index_of(id)
            .ok_or_else(|| DecklineError::model(format!("removal of unknown slide {}", id.0)))?;
        self.slides.remove(index);
        self.pending.push(DeckEvent::SlideRemoved(id));
        if self.selected == Some(id) {
            self.selected = None;
            self.pending.push(DeckEvent::SlideSelected(None));
        }
        Ok(())
    }

    /// Reorder the slide at `from` to position `to`.
    ///
    /// Out-of-range indices and identity moves are no-ops, not errors;
    /// returns whether the order changed.
    pub fn move_slide(&mut self, from: usize, to: usize) -> bool {
        if from == to || from >= self.slides.len() || to >= self.slides.len() {
            return false;
        }
        let slide = self.slides.remove(from);
        tracing::debug!(slide = slide.id.0, from, to, "moving slide");
        self.slides.insert(to, slide);
        self.pending.push(DeckEvent::SlidesMoved);
        true
    }

    /// Set the selection. Selecting an id absent from the deck is an error.
    pub fn select(&mut self, id: Option<SlideId>) -> DecklineResult<()> {
        if let Some(id) = id
            && self.slide(id).is_none()
        {
            return Err(DecklineError::model(format!(
                "selection of unknown slide {}",
                id.0
            )));
        }
        if self.selected != id {
            self.selected = id;
            self.pending.push(DeckEvent::SlideSelected(id));
        }
        Ok(())
    }

    /// Advance the selection by one slide, clamping at the deck end.
    /// Selects the first slide when nothing is selected.
    pub fn next(&mut self) {
        self.step_selection(1);
    }

    /// Retreat the selection by one slide, clamping at the deck start.
    /// Selects the first slide when nothing is selected.
    pub fn previous(&mut self) {
        self.step_selection(-1);
    }

    fn step_selection(&mut self, delta: isize) {
        if self.slides.is_empty() {
            return;
        }
        let target = match self.selected.and_then(|id| self.index_of(id)) {
            Some(i) => i
                .saturating_add_signed(delta)
                .min(self.slides.len() - 1),
            None => 0,
        };
        let id = self.slides[target].id;
        // Infallible: id was just read out of the sequence.
        let _ = self.select(Some(id));
    }

    /// Slides paired with cumulative start times, in sequence order.
    pub fn indexed_slides(&self) -> Vec<IndexedSlide> {
        let mut start_ms = 0.0;
        self.slides
            .iter()
            .map(|s| {
                let entry = IndexedSlide {
                    id: s.id,
                    start_ms,
                };
                start_ms += s.delay_ms.max(0.0) + s.duration_ms.max(0.0);
                entry
            })
            .collect()
    }

    /// The slide whose `[start, start + delay + duration)` window contains
    /// the global time offset `at_ms`, if any.
    pub fn slide_at_time(&self, at_ms: f64) -> Option<&Slide> {
        if at_ms < 0.0 {
            return None;
        }
        let mut start_ms = 0.0;
        for slide in &self.slides {
            let span = slide.delay_ms.max(0.0) + slide.duration_ms.max(0.0);
            if at_ms < start_ms + span {
                return Some(slide);
            }
            start_ms += span;
        }
        None
    }

    /// Drain pending change notifications in emission order.
    pub fn take_events(&mut self) -> Vec<DeckEvent> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/deck/model.rs"]
mod tests;
