//! Gauge observations and the three-gauge rosette reading.

use serde::{Deserialize, Serialize};
use uom::si::{
    angle::{degree, radian},
    f64::Angle,
};

use crate::errors::ReadingError;

/// A single gauge in a rosette: its orientation and the normal strain it measured.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RosetteObservation {
    /// Gauge orientation measured counter-clockwise from the x axis, in degrees.
    angle: f64,
    /// Measured normal strain in microstrain (×10⁻⁶).
    strain: f64,
}

impl RosetteObservation {
    /// Record a gauge observation.
    ///
    /// # Errors
    ///
    /// Returns [`ReadingError::NonFiniteAngle`] or [`ReadingError::NonFiniteStrain`]
    /// when either value is NaN or infinite.
    pub fn new(angle: f64, strain: f64) -> Result<Self, ReadingError> {
        if !angle.is_finite() {
            return Err(ReadingError::NonFiniteAngle { angle });
        }
        if !strain.is_finite() {
            return Err(ReadingError::NonFiniteStrain { strain });
        }
        Ok(Self { angle, strain })
    }

    /// Gauge orientation in degrees.
    #[must_use]
    pub const fn angle(&self) -> f64 {
        self.angle
    }

    /// Measured strain in microstrain.
    #[must_use]
    pub const fn strain(&self) -> f64 {
        self.strain
    }

    /// Gauge orientation in radians.
    #[must_use]
    pub fn radians(&self) -> f64 {
        Angle::new::<degree>(self.angle).get::<radian>()
    }
}

/// Three gauge observations (A, B, C) taken at the same point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RosetteReading {
    /// Gauge A.
    pub a: RosetteObservation,
    /// Gauge B.
    pub b: RosetteObservation,
    /// Gauge C.
    pub c: RosetteObservation,
}

impl RosetteReading {
    /// Group three observations into a reading.
    #[must_use]
    pub const fn new(a: RosetteObservation, b: RosetteObservation, c: RosetteObservation) -> Self {
        Self { a, b, c }
    }

    /// Reading from a rectangular rosette with gauges at 0°, 45° and 90°.
    ///
    /// # Errors
    ///
    /// Returns [`ReadingError::NonFiniteStrain`] when any strain is NaN or infinite.
    ///
    /// # Examples
    /// ```
    /// use rosettex::RosetteReading;
    ///
    /// let reading = RosetteReading::rectangular(1_000.0, 500.0, -200.0).unwrap();
    /// assert_eq!(reading.b.angle(), 45.0);
    /// ```
    pub fn rectangular(strain_a: f64, strain_b: f64, strain_c: f64) -> Result<Self, ReadingError> {
        Self::from_layout([0.0, 45.0, 90.0], [strain_a, strain_b, strain_c])
    }

    /// Reading from a delta rosette with gauges at 0°, 60° and 120°.
    ///
    /// # Errors
    ///
    /// Returns [`ReadingError::NonFiniteStrain`] when any strain is NaN or infinite.
    pub fn delta(strain_a: f64, strain_b: f64, strain_c: f64) -> Result<Self, ReadingError> {
        Self::from_layout([0.0, 60.0, 120.0], [strain_a, strain_b, strain_c])
    }

    /// Build a reading from parallel angle and strain triples.
    ///
    /// # Errors
    ///
    /// Returns the first [`ReadingError`] raised by an invalid pair.
    pub fn from_layout(angles: [f64; 3], strains: [f64; 3]) -> Result<Self, ReadingError> {
        Ok(Self {
            a: RosetteObservation::new(angles[0], strains[0])?,
            b: RosetteObservation::new(angles[1], strains[1])?,
            c: RosetteObservation::new(angles[2], strains[2])?,
        })
    }

    /// The observations in gauge order A, B, C.
    #[must_use]
    pub const fn observations(&self) -> [RosetteObservation; 3] {
        [self.a, self.b, self.c]
    }
}

/// Convenience helper for creating [`RosetteObservation`] instances.
///
/// # Errors
///
/// Same as [`RosetteObservation::new`].
///
/// # Examples
/// ```
/// use rosettex::observation;
///
/// let gauge = observation(45.0, 500.0).unwrap();
/// assert_eq!(gauge.strain(), 500.0);
/// ```
pub fn observation(angle: f64, strain: f64) -> Result<RosetteObservation, ReadingError> {
    RosetteObservation::new(angle, strain)
}
