use rosettex::{
    analyze, plot_primitives, solve, MohrPlotPrimitives, PrincipalStrainResult, RosetteReading,
    SolveError, StrainState,
};
use serde::Serialize;

/// Everything produced by one rosette calculation, ready for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisSummary {
    /// The gauge readings that were reduced.
    pub reading: RosetteReading,
    /// Strain state in the reference frame.
    pub strain: StrainState,
    /// Principal strains and orientation.
    pub principal: PrincipalStrainResult,
    /// Geometry for drawing Mohr's circle.
    pub plot: MohrPlotPrimitives,
}

/// Reduce a rosette reading and derive its Mohr's circle.
///
/// The reduction follows the strain transformation equations described at
/// <https://en.wikipedia.org/wiki/Infinitesimal_strain_theory>.
pub fn run_analysis(reading: &RosetteReading) -> Result<AnalysisSummary, SolveError> {
    let strain = solve(reading)?;
    let principal = analyze(&strain);
    let plot = plot_primitives(&strain, &principal);
    tracing::info!(
        eps_x = strain.eps_x,
        eps_y = strain.eps_y,
        gamma_xy = strain.gamma_xy,
        eps1 = principal.eps1,
        eps2 = principal.eps2,
        "rosette reduced"
    );

    Ok(AnalysisSummary {
        reading: *reading,
        strain,
        principal,
        plot,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_expected_results() {
        let reading = RosetteReading::rectangular(1_000.0, 500.0, -200.0).expect("finite");
        let summary = run_analysis(&reading).expect("analysis runs");

        assert!((summary.strain.gamma_xy - 200.0).abs() < 1.0e-9);
        assert!((summary.principal.center - 400.0).abs() < 1.0e-9);
        assert!((summary.plot.radius - summary.principal.radius).abs() < f64::EPSILON);
    }

    #[test]
    fn singular_layout_is_reported() {
        let reading =
            RosetteReading::from_layout([30.0, 30.0, 90.0], [10.0, 10.0, 5.0]).expect("finite");
        let error = run_analysis(&reading).expect_err("duplicate angle rejected");
        assert!(matches!(error, SolveError::SingularSystem { .. }));
    }
}
