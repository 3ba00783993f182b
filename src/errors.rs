//! Error types produced while recording rosette readings or reducing them to strains.

use thiserror::Error;

/// Error returned when a rosette reading cannot be reduced to a strain state.
///
/// # Examples
///
/// ```
/// use rosettex::{observation, solve, RosetteReading, SolveError};
///
/// let reading = RosetteReading::new(
///     observation(0.0, 100.0).unwrap(),
///     observation(0.0, 100.0).unwrap(),
///     observation(0.0, 100.0).unwrap(),
/// );
/// let error = solve(&reading).expect_err("coincident gauges are rejected");
/// assert!(matches!(error, SolveError::SingularSystem { .. }));
/// ```
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum SolveError {
    /// Returned when the gauge angles do not determine a unique strain state.
    ///
    /// This happens when two gauges share an angle modulo 180° or the layout is
    /// otherwise linearly dependent.
    #[error(
        "coefficient matrix is singular (reciprocal condition {reciprocal_condition:.3e}); \
         check that no two gauge angles coincide modulo 180 degrees"
    )]
    SingularSystem {
        /// Ratio of the smallest to the largest singular value of the coefficient matrix.
        reciprocal_condition: f64,
    },
}

/// Error returned when recording a gauge observation with unusable values.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ReadingError {
    /// Returned when the gauge angle is NaN or infinite.
    #[error("gauge angle must be finite (received {angle})")]
    NonFiniteAngle {
        /// Rejected angle in degrees.
        angle: f64,
    },
    /// Returned when the measured strain is NaN or infinite.
    #[error("measured strain must be finite (received {strain})")]
    NonFiniteStrain {
        /// Rejected strain in microstrain.
        strain: f64,
    },
}
