use clap::Parser;
use rosettex::{ReadingError, RosetteReading};

/// Command line inputs for a single rosette calculation.
#[derive(Debug, Clone, Parser)]
#[command(name = "rosettex")]
#[command(about = "Strain rosette calculator with Mohr's circle")]
pub struct RosetteArgs {
    /// Gauge angles A, B and C in degrees
    #[arg(long, num_args = 3, value_names = ["A", "B", "C"], default_values_t = [0.0, 45.0, 90.0], allow_negative_numbers = true)]
    pub angles: Vec<f64>,

    /// Measured strains A, B and C in microstrain (×10⁻⁶)
    #[arg(long, num_args = 3, value_names = ["A", "B", "C"], default_values_t = [0.0, 0.0, 0.0], allow_negative_numbers = true)]
    pub strains: Vec<f64>,

    /// Print the results as JSON instead of a text report
    #[arg(long)]
    pub json: bool,

    /// Log debug details of the calculation to stderr
    #[arg(long, short)]
    pub verbose: bool,
}

impl RosetteArgs {
    /// Collect the gauge arguments into a validated reading.
    ///
    /// Clap enforces exactly three values per option, so the indexing below
    /// cannot go out of bounds.
    pub fn reading(&self) -> Result<RosetteReading, ReadingError> {
        let angles = [self.angles[0], self.angles[1], self.angles[2]];
        let strains = [self.strains[0], self.strains[1], self.strains[2]];
        RosetteReading::from_layout(angles, strains)
    }
}
