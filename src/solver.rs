//! Reduction of three gauge readings to the in-plane strain state.
//!
//! Each gauge contributes one row of the strain-transformation identity
//! εθ = εₓcos²θ + εᵧsin²θ + γₓᵧ·sinθ·cosθ, giving a 3×3 linear system in the
//! unknowns (εₓ, εᵧ, γₓᵧ). See <https://en.wikipedia.org/wiki/Strain_gauge#Rosettes>.

use nalgebra::{Matrix3, RowVector3, Vector3};

use crate::errors::SolveError;
use crate::rosette::{RosetteObservation, RosetteReading};
use crate::strain::StrainState;

/// Smallest accepted ratio between the extreme singular values of the coefficient matrix.
pub const RCOND_TOLERANCE: f64 = 1.0e-10;

/// Coefficient row `[cos²θ, sin²θ, sinθ·cosθ]` for one gauge.
fn coefficient_row(gauge: &RosetteObservation) -> RowVector3<f64> {
    let (sin, cos) = gauge.radians().sin_cos();
    RowVector3::new(cos * cos, sin * sin, sin * cos)
}

/// Assemble the coefficient matrix for a reading, one row per gauge in order A, B, C.
///
/// # Examples
/// ```
/// use rosettex::{coefficient_matrix, RosetteReading};
///
/// let reading = RosetteReading::rectangular(0.0, 0.0, 0.0).unwrap();
/// let matrix = coefficient_matrix(&reading);
/// assert!((matrix[(0, 0)] - 1.0).abs() < 1.0e-15);
/// assert!((matrix[(1, 2)] - 0.5).abs() < 1.0e-15);
/// ```
#[must_use]
pub fn coefficient_matrix(reading: &RosetteReading) -> Matrix3<f64> {
    let [a, b, c] = reading.observations();
    Matrix3::from_rows(&[coefficient_row(&a), coefficient_row(&b), coefficient_row(&c)])
}

/// Ratio of the smallest to the largest singular value, or zero for a null matrix.
fn reciprocal_condition(matrix: &Matrix3<f64>) -> f64 {
    let singular_values = matrix.singular_values();
    let largest = singular_values.max();
    if largest > 0.0 {
        singular_values.min() / largest
    } else {
        0.0
    }
}

/// Solve for the strain state measured by a rosette.
///
/// The system is solved with LU decomposition and partial pivoting after a
/// conditioning check on the gauge layout.
///
/// # Errors
///
/// Returns [`SolveError::SingularSystem`] when the gauge angles do not
/// determine a unique strain state, for example when two gauges coincide
/// modulo 180°.
///
/// # Examples
/// ```
/// use rosettex::{solve, RosetteReading};
///
/// let reading = RosetteReading::rectangular(1_000.0, 500.0, -200.0).unwrap();
/// let state = solve(&reading).unwrap();
/// assert!((state.eps_x - 1_000.0).abs() < 1.0e-9);
/// assert!((state.eps_y + 200.0).abs() < 1.0e-9);
/// assert!((state.gamma_xy - 200.0).abs() < 1.0e-9);
/// ```
pub fn solve(reading: &RosetteReading) -> Result<StrainState, SolveError> {
    let matrix = coefficient_matrix(reading);
    let [a, b, c] = reading.observations();
    let measured = Vector3::new(a.strain(), b.strain(), c.strain());

    let rcond = reciprocal_condition(&matrix);
    tracing::debug!(reciprocal_condition = rcond, "rosette coefficient matrix");
    let singular = SolveError::SingularSystem {
        reciprocal_condition: rcond,
    };
    if rcond.is_nan() || rcond <= RCOND_TOLERANCE {
        tracing::warn!(
            angle_a = a.angle(),
            angle_b = b.angle(),
            angle_c = c.angle(),
            reciprocal_condition = rcond,
            "rosette layout does not determine the strain state"
        );
        return Err(singular);
    }

    let solution = matrix.lu().solve(&measured).ok_or(singular)?;
    Ok(StrainState::new(solution[0], solution[1], solution[2]))
}
