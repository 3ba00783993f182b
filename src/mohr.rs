//! Principal strains and Mohr's circle construction.
//!
//! The circle is centred on the mean normal strain with a radius equal to the
//! maximum in-plane shear strain divided by two. See
//! <https://en.wikipedia.org/wiki/Mohr%27s_circle>.

use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};
use uom::si::{
    angle::{degree, radian},
    f64::Angle,
};

use crate::geometry::{plot_point, PlotPoint, Segment, ViewBounds};
use crate::strain::StrainState;

/// Radius, relative to the largest strain component, below which the state is treated as isotropic.
pub const ISOTROPIC_TOLERANCE: f64 = 1.0e-12;

/// Principal strain state derived from a [`StrainState`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrincipalStrainResult {
    /// Major principal strain, `center + radius`.
    pub eps1: f64,
    /// Minor principal strain, `center - radius`.
    pub eps2: f64,
    /// Rotation from the x axis to the major principal direction, in degrees within (-90, 90].
    pub theta_p_deg: f64,
    /// Abscissa of the circle centre (mean normal strain).
    pub center: f64,
    /// Circle radius, never negative.
    pub radius: f64,
}

impl PrincipalStrainResult {
    /// Maximum in-plane engineering shear strain, equal to the circle diameter.
    #[must_use]
    pub fn max_shear(&self) -> f64 {
        2.0 * self.radius
    }

    /// Whether the strain state is isotropic and the circle collapses to a point.
    #[must_use]
    pub fn is_isotropic(&self) -> bool {
        self.radius == 0.0
    }
}

/// Geometric primitives needed to draw a Mohr's circle for strain.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MohrPlotPrimitives {
    /// Circle centre, always on the horizontal axis.
    pub center: PlotPoint,
    /// Circle radius.
    pub radius: f64,
    /// Diameter joining `(eps_x, -gamma_xy/2)` and `(eps_y, gamma_xy/2)`.
    pub diameter: Segment,
    /// Marker for the major principal strain.
    pub eps1_point: PlotPoint,
    /// Marker for the minor principal strain.
    pub eps2_point: PlotPoint,
    /// Suggested visible region.
    pub view: ViewBounds,
    /// Positive shear is drawn downward, so the vertical axis must be flipped.
    pub shear_axis_inverted: bool,
    /// Both axes share one scale so the circle is not distorted.
    pub equal_aspect: bool,
}

/// Derive the principal strains and principal angle from a strain state.
///
/// The principal angle uses the two-argument arctangent so the quadrant is
/// kept when `eps_x == eps_y`. A radius within [`ISOTROPIC_TOLERANCE`] of the
/// strain scale is snapped to zero, and the principal angle of that isotropic
/// state is pinned to 0°.
///
/// # Examples
/// ```
/// use rosettex::{analyze, StrainState};
///
/// let result = analyze(&StrainState::new(1_000.0, -200.0, 200.0));
/// assert!((result.center - 400.0).abs() < 1.0e-9);
/// assert!((result.radius - 370_000.0_f64.sqrt()).abs() < 1.0e-9);
/// assert!((result.theta_p_deg - 4.7312).abs() < 1.0e-4);
/// ```
#[must_use]
pub fn analyze(state: &StrainState) -> PrincipalStrainResult {
    let center = (state.eps_x + state.eps_y) / 2.0;
    let half_difference = (state.eps_x - state.eps_y) / 2.0;
    let radius = half_difference.hypot(state.gamma_xy / 2.0);
    let scale = state
        .eps_x
        .abs()
        .max(state.eps_y.abs())
        .max(state.gamma_xy.abs())
        .max(1.0);
    // rounding noise from the solve is not a real circle
    let radius = if radius <= ISOTROPIC_TOLERANCE * scale {
        0.0
    } else {
        radius
    };

    let theta_p_deg = if radius == 0.0 {
        0.0
    } else {
        let half = 0.5 * state.gamma_xy.atan2(state.eps_x - state.eps_y);
        // atan2 reaches -pi only through a negative zero shear
        let half = if half <= -FRAC_PI_2 { half + PI } else { half };
        Angle::new::<radian>(half).get::<degree>()
    };

    tracing::debug!(center, radius, theta_p_deg, "mohr circle");

    PrincipalStrainResult {
        eps1: center + radius,
        eps2: center - radius,
        theta_p_deg,
        center,
        radius,
    }
}

/// Build the drawing primitives for a strain state and its principal result.
///
/// # Examples
/// ```
/// use rosettex::{analyze, plot_primitives, StrainState};
///
/// let state = StrainState::new(1_000.0, -200.0, 200.0);
/// let primitives = plot_primitives(&state, &analyze(&state));
/// assert_eq!(primitives.diameter.start.y, -100.0);
/// assert!(primitives.shear_axis_inverted);
/// ```
#[must_use]
pub fn plot_primitives(state: &StrainState, result: &PrincipalStrainResult) -> MohrPlotPrimitives {
    MohrPlotPrimitives {
        center: plot_point(result.center, 0.0),
        radius: result.radius,
        diameter: Segment::new(
            plot_point(state.eps_x, -state.gamma_xy / 2.0),
            plot_point(state.eps_y, state.gamma_xy / 2.0),
        ),
        eps1_point: plot_point(result.eps1, 0.0),
        eps2_point: plot_point(result.eps2, 0.0),
        view: ViewBounds::around_circle(result.center, result.radius),
        shear_axis_inverted: true,
        equal_aspect: true,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn textbook_state_matches_hand_calculation() {
        let result = analyze(&StrainState::new(1_000.0, -200.0, 200.0));
        assert_relative_eq!(result.center, 400.0, epsilon = 1.0e-9);
        assert_relative_eq!(result.radius, 608.276_253, epsilon = 1.0e-6);
        assert_relative_eq!(result.eps1, 1_008.276_253, epsilon = 1.0e-6);
        assert_relative_eq!(result.eps2, -208.276_253, epsilon = 1.0e-6);
        assert_relative_eq!(result.theta_p_deg, 4.731_161, epsilon = 1.0e-6);
        assert_relative_eq!(result.max_shear(), 1_216.552_506, epsilon = 1.0e-6);
    }

    #[test]
    fn isotropic_state_collapses_to_a_point() {
        let result = analyze(&StrainState::new(100.0, 100.0, 0.0));
        assert_eq!(result.center, 100.0);
        assert_eq!(result.radius, 0.0);
        assert_eq!(result.eps1, 100.0);
        assert_eq!(result.eps2, 100.0);
        assert_eq!(result.theta_p_deg, 0.0);
        assert!(result.is_isotropic());
    }

    #[test]
    fn equal_normal_strains_keep_shear_quadrant() {
        let positive = analyze(&StrainState::new(50.0, 50.0, 300.0));
        assert_relative_eq!(positive.theta_p_deg, 45.0, epsilon = 1.0e-12);
        let negative = analyze(&StrainState::new(50.0, 50.0, -300.0));
        assert_relative_eq!(negative.theta_p_deg, -45.0, epsilon = 1.0e-12);
    }

    #[test]
    fn principal_angle_stays_in_half_open_range() {
        let result = analyze(&StrainState::new(-100.0, 100.0, -0.0));
        assert_relative_eq!(result.theta_p_deg, 90.0, epsilon = 1.0e-12);
        let result = analyze(&StrainState::new(-100.0, 100.0, 0.0));
        assert_relative_eq!(result.theta_p_deg, 90.0, epsilon = 1.0e-12);
    }

    #[test]
    fn primitives_follow_shear_down_convention() {
        let state = StrainState::new(1_000.0, -200.0, 200.0);
        let result = analyze(&state);
        let primitives = plot_primitives(&state, &result);

        assert_eq!(primitives.diameter.start, plot_point(1_000.0, -100.0));
        assert_eq!(primitives.diameter.end, plot_point(-200.0, 100.0));
        assert_eq!(primitives.center, plot_point(result.center, 0.0));
        assert_eq!(primitives.eps1_point, plot_point(result.eps1, 0.0));
        assert_eq!(primitives.eps2_point, plot_point(result.eps2, 0.0));
        assert_relative_eq!(primitives.diameter.midpoint().x, result.center, epsilon = 1.0e-9);
        assert_relative_eq!(primitives.diameter.length(), 2.0 * result.radius, epsilon = 1.0e-9);
        assert!(primitives.view.contains(primitives.eps1_point));
        assert!(primitives.view.contains(primitives.diameter.start));
        assert!(primitives.shear_axis_inverted && primitives.equal_aspect);
    }

    #[test]
    fn solved_isotropic_reading_snaps_to_a_point() {
        use crate::geometry::MIN_VIEW_HALF_EXTENT;
        use crate::rosette::RosetteReading;
        use crate::solver::solve;

        for strain in [100.0, 123.456, 0.001] {
            let reading = RosetteReading::delta(strain, strain, strain).expect("finite");
            let state = solve(&reading).expect("delta layout solves");
            let result = analyze(&state);
            assert_eq!(result.radius, 0.0);
            assert_eq!(result.theta_p_deg, 0.0);
            assert!(result.is_isotropic());
            assert_relative_eq!(result.eps1, strain, max_relative = 1.0e-9);

            let primitives = plot_primitives(&state, &result);
            assert!(primitives.view.width() >= 2.0 * MIN_VIEW_HALF_EXTENT);
        }
    }

    #[test]
    fn small_real_shear_is_not_snapped() {
        let result = analyze(&StrainState::new(100.0, 100.0, 1.0e-6));
        assert!(!result.is_isotropic());
        assert_relative_eq!(result.theta_p_deg, 45.0, epsilon = 1.0e-9);
    }

    #[test]
    fn isotropic_primitives_have_visible_view() {
        let state = StrainState::new(100.0, 100.0, 0.0);
        let primitives = plot_primitives(&state, &analyze(&state));
        assert_eq!(primitives.radius, 0.0);
        assert!(primitives.view.width() > 0.0);
        assert!(primitives.view.contains(primitives.center));
    }
}
