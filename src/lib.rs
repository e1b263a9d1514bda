//! Deckline is a slide-deck timeline engine: it turns an ordered sequence of
//! presentation slides into pixel geometry for a strip of slide bars, runs
//! the drag-to-reorder state machine over live pointer coordinates, and
//! drives a playback scrubber synchronized to a timed slide player.
//!
//! # Pipeline overview
//!
//! 1. **Mutate**: UI intents (add/clone/remove/move/select, resize, drag
//!    frames, transport controls) are issued against [`SlideDeck`], usually
//!    through [`TimelineEngine`].
//! 2. **Drain**: deck change notifications ([`DeckEvent`]) are processed in
//!    emission order, each triggering one full layout pass.
//! 3. **Resolve**: [`resolve_timeline_layout`] derives caller-owned pixel
//!    geometry ([`TimelineLayout`]) from the current sequence.
//! 4. **Apply**: the view binder reads a [`TimelineSnapshot`] (slide
//!    regions plus cursor positions) and sets element attributes.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Injected time**: every time-dependent state machine advances via
//!   explicit `tick(now_ms)` calls, so tests simulate time deterministically.
//! - **Caller-owned layout**: geometry results are returned fresh from each
//!   pass and never written back onto the shared slide records.
//! - **Single-threaded**: all work runs on the consuming application's UI
//!   thread in response to discrete events; no locking anywhere.
//!
//! Rendering, raw pointer capture, and screenshot/annotation display are
//! external collaborators behind narrow interfaces, not part of this crate.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod deck;
mod foundation;
mod interact;
mod layout;
mod playback;
mod timeline;

pub use deck::model::{
    DEFAULT_SLIDE_DURATION_MS, DeckEvent, IndexedSlide, Slide, SlideDeck, SlideDraft,
};
pub use foundation::core::{Orientation, Point, Rect, SlideId, Vec2};
pub use foundation::error::{DecklineError, DecklineResult};
pub use interact::reorder::{DragFrame, DragOutcome, ReorderEngine};
pub use layout::geometry::{LayoutConfig, cumulative_offset, size_from_duration};
pub use layout::solver::{SlideGeometry, TimelineLayout, resolve_timeline_layout};
pub use playback::anim::{CursorAnim, Ease};
pub use playback::player::{PlayerAdvance, PlayerStatus, SlidePlayer};
pub use playback::scrubber::Scrubber;
pub use timeline::engine::{CursorGeometry, DragVisual, TimelineEngine, TimelineSnapshot};
