//! Plane geometry used to describe a Mohr's circle diagram.
//!
//! Coordinates are in microstrain: the horizontal axis carries normal strain
//! and the vertical axis carries half the engineering shear strain.

use serde::{Deserialize, Serialize};

/// Padding applied around the circle when suggesting a view, as a fraction of the radius.
pub const VIEW_PADDING: f64 = 0.2;

/// Half-width of the suggested view when the circle degenerates to a point.
pub const MIN_VIEW_HALF_EXTENT: f64 = 1.0;

/// Point on the Mohr's circle plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    /// Normal strain coordinate.
    pub x: f64,
    /// Half shear strain coordinate.
    pub y: f64,
}

impl PlotPoint {
    /// Create a [`PlotPoint`] with explicit coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Straight line between two plot points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// First endpoint.
    pub start: PlotPoint,
    /// Second endpoint.
    pub end: PlotPoint,
}

impl Segment {
    /// Create a [`Segment`] between two points.
    #[must_use]
    pub const fn new(start: PlotPoint, end: PlotPoint) -> Self {
        Self { start, end }
    }

    /// Midpoint of the segment.
    #[must_use]
    pub fn midpoint(&self) -> PlotPoint {
        PlotPoint::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    /// Length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end.x - self.start.x).hypot(self.end.y - self.start.y)
    }
}

/// Axis-aligned rectangle suggested as the visible region of a plot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewBounds {
    /// Left edge.
    pub x_min: f64,
    /// Right edge.
    pub x_max: f64,
    /// Lower edge in data coordinates.
    pub y_min: f64,
    /// Upper edge in data coordinates.
    pub y_max: f64,
}

impl ViewBounds {
    /// Square view centred on a circle of the given centre abscissa and radius.
    ///
    /// The view extends [`VIEW_PADDING`] beyond the circle on every side. A
    /// zero radius falls back to [`MIN_VIEW_HALF_EXTENT`] so the view keeps a
    /// usable size.
    ///
    /// # Examples
    /// ```
    /// use rosettex::ViewBounds;
    ///
    /// let view = ViewBounds::around_circle(400.0, 100.0);
    /// assert_eq!(view.x_min, 280.0);
    /// assert_eq!(view.y_max, 120.0);
    /// ```
    #[must_use]
    pub fn around_circle(center: f64, radius: f64) -> Self {
        let padded = radius * (1.0 + VIEW_PADDING);
        let half_extent = if padded > 0.0 {
            padded
        } else {
            MIN_VIEW_HALF_EXTENT
        };
        Self {
            x_min: center - half_extent,
            x_max: center + half_extent,
            y_min: -half_extent,
            y_max: half_extent,
        }
    }

    /// Horizontal size of the view.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Vertical size of the view.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Whether a point lies inside or on the edge of the view.
    #[must_use]
    pub fn contains(&self, point: PlotPoint) -> bool {
        (self.x_min..=self.x_max).contains(&point.x) && (self.y_min..=self.y_max).contains(&point.y)
    }
}

/// Convenience helper for creating [`PlotPoint`] instances.
///
/// # Examples
/// ```
/// use rosettex::plot_point;
///
/// let origin = plot_point(0.0, 0.0);
/// assert_eq!(origin.x, 0.0);
/// ```
#[must_use]
pub const fn plot_point(x: f64, y: f64) -> PlotPoint {
    PlotPoint::new(x, y)
}
