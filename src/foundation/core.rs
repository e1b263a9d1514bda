pub use kurbo::{Point, Rect, Vec2};

/// Stable slide identity, unique within a deck and never reused.
///
/// Ids are the sole key used to reconcile rendered elements against the
/// deck's ordered sequence across recomputes: entering slides are new ids,
/// exiting slides are ids no longer present.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SlideId(pub u64);

/// Main layout axis of the timeline strip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Orientation {
    /// Bars grow to the right, time runs along x.
    #[default]
    Horizontal,
    /// Bars grow downward, time runs along y.
    Vertical,
}

impl Orientation {
    /// Component of `p` along the layout axis.
    pub fn main(self, p: Point) -> f64 {
        match self {
            Self::Horizontal => p.x,
            Self::Vertical => p.y,
        }
    }

    /// Component of `p` across the layout axis.
    pub fn cross(self, p: Point) -> f64 {
        match self {
            Self::Horizontal => p.y,
            Self::Vertical => p.x,
        }
    }

    /// Axis-aligned rectangle from main-axis and cross-axis spans.
    pub fn rect(self, main_start: f64, main_size: f64, cross_start: f64, cross_size: f64) -> Rect {
        match self {
            Self::Horizontal => Rect::new(
                main_start,
                cross_start,
                main_start + main_size,
                cross_start + cross_size,
            ),
            Self::Vertical => Rect::new(
                cross_start,
                main_start,
                cross_start + cross_size,
                main_start + main_size,
            ),
        }
    }

    /// Point from main-axis and cross-axis coordinates.
    pub fn point(self, main: f64, cross: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(main, cross),
            Self::Vertical => Point::new(cross, main),
        }
    }
}
