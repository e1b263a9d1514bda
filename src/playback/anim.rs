#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Easing applied to cursor tweens. Playback advances use linear easing;
/// the quad variants exist for binders that want softer manual jumps.
pub enum Ease {
    /// Constant velocity.
    #[default]
    Linear,
    /// Accelerating from rest.
    InQuad,
    /// Decelerating to rest.
    OutQuad,
}

impl Ease {
    /// Map normalized progress `t` through the curve; input is clamped to
    /// `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One cursor tween along the layout axis, sampled against injected time.
pub struct CursorAnim {
    /// Start position in pixels.
    pub from_px: f64,
    /// End position in pixels.
    pub to_px: f64,
    /// Start timestamp in milliseconds.
    pub start_ms: f64,
    /// Tween length in milliseconds; zero means an instant jump.
    pub duration_ms: f64,
    /// Easing curve.
    pub ease: Ease,
}

impl CursorAnim {
    /// Tween from `from_px` to `to_px` starting at `start_ms`.
    pub fn new(from_px: f64, to_px: f64, start_ms: f64, duration_ms: f64, ease: Ease) -> Self {
        Self {
            from_px,
            to_px,
            start_ms,
            duration_ms: duration_ms.max(0.0),
            ease,
        }
    }

    /// Sampled position at `now_ms`, clamped to the tween's endpoints.
    pub fn position_at(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 || now_ms >= self.start_ms + self.duration_ms {
            return self.to_px;
        }
        if now_ms <= self.start_ms {
            return self.from_px;
        }
        let t = (now_ms - self.start_ms) / self.duration_ms;
        self.from_px + (self.to_px - self.from_px) * self.ease.apply(t)
    }

    /// Whether the tween has reached its endpoint at `now_ms`.
    pub fn is_done(&self, now_ms: f64) -> bool {
        self.duration_ms <= 0.0 || now_ms >= self.start_ms + self.duration_ms
    }
}
