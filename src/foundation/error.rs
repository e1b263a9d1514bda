/// Convenience result type used across deckline.
pub type DecklineResult<T> = Result<T, DecklineError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum DecklineError {
    /// The deck and a geometry/reorder query disagree (e.g. a stale slide
    /// reference after a concurrent removal).
    #[error("model error: {0}")]
    Model(String),

    /// Errors while resolving timeline geometry.
    #[error("layout error: {0}")]
    Layout(String),

    /// Errors in the playback scrubber or player state machines.
    #[error("playback error: {0}")]
    Playback(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DecklineError {
    /// Build a [`DecklineError::Model`] value.
    pub fn model(msg: impl Into<String>) -> Self {
        Self::Model(msg.into())
    }

    /// Build a [`DecklineError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`DecklineError::Playback`] value.
    pub fn playback(msg: impl Into<String>) -> Self {
        Self::Playback(msg.into())
    }

    /// Build a [`DecklineError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
