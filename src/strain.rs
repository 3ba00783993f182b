//! In-plane strain state in the reference frame.

use serde::{Deserialize, Serialize};
use uom::si::{
    angle::{degree, radian},
    f64::Angle,
};

/// Plane strain tensor components, in microstrain.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrainState {
    /// Normal strain along the x axis.
    pub eps_x: f64,
    /// Normal strain along the y axis.
    pub eps_y: f64,
    /// Engineering shear strain in the x-y plane.
    pub gamma_xy: f64,
}

impl StrainState {
    /// Create a [`StrainState`] with explicit components.
    #[must_use]
    pub const fn new(eps_x: f64, eps_y: f64, gamma_xy: f64) -> Self {
        Self {
            eps_x,
            eps_y,
            gamma_xy,
        }
    }

    /// Normal strain along a direction `angle` degrees from the x axis.
    ///
    /// Evaluates εθ = εₓcos²θ + εᵧsin²θ + γₓᵧ·sinθ·cosθ.
    ///
    /// # Examples
    /// ```
    /// use rosettex::StrainState;
    ///
    /// let state = StrainState::new(1_000.0, -200.0, 200.0);
    /// assert!((state.normal_strain(45.0) - 500.0).abs() < 1.0e-9);
    /// ```
    #[must_use]
    pub fn normal_strain(&self, angle: f64) -> f64 {
        let theta = Angle::new::<degree>(angle).get::<radian>();
        let (sin, cos) = theta.sin_cos();
        self.eps_x * cos * cos + self.eps_y * sin * sin + self.gamma_xy * sin * cos
    }
}
