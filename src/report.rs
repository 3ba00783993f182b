use crate::analysis::AnalysisSummary;
use std::fmt::Write;

/// Render a textual summary of a rosette calculation.
///
/// Strains are printed to two decimals in microstrain, matching how gauge
/// readings are usually recorded on the bench.
#[must_use]
pub fn render_summary(summary: &AnalysisSummary) -> String {
    let mut output = String::new();

    // Echo the gauge readings first so the reader can check the inputs
    // against the bench log before looking at any derived numbers.
    writeln!(&mut output, "Gauge readings:").expect("writing to string cannot fail");
    for (label, gauge) in ["A", "B", "C"].iter().zip(summary.reading.observations()) {
        writeln!(
            &mut output,
            "  {label}: θ = {:.2}°, ε = {:.2} ×10⁻⁶",
            gauge.angle(),
            gauge.strain()
        )
        .expect("writing to string cannot fail");
    }

    // Report the strain state in the reference frame. These are the
    // unknowns of the strain transformation equations, see
    // https://en.wikipedia.org/wiki/Infinitesimal_strain_theory.
    let strain = &summary.strain;
    writeln!(&mut output, "Calculated strains:").expect("writing to string cannot fail");
    writeln!(&mut output, "  εx = {:.2} ×10⁻⁶", strain.eps_x)
        .expect("writing to string cannot fail");
    writeln!(&mut output, "  εy = {:.2} ×10⁻⁶", strain.eps_y)
        .expect("writing to string cannot fail");
    writeln!(&mut output, "  γxy = {:.2} ×10⁻⁶", strain.gamma_xy)
        .expect("writing to string cannot fail");

    // Principal strains bound every normal strain at the point. The angle is
    // measured from the x axis to the direction of ε1.
    let principal = &summary.principal;
    writeln!(&mut output, "Principal strains:").expect("writing to string cannot fail");
    writeln!(&mut output, "  ε1 = {:.2} ×10⁻⁶", principal.eps1)
        .expect("writing to string cannot fail");
    writeln!(&mut output, "  ε2 = {:.2} ×10⁻⁶", principal.eps2)
        .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "  θp (angle to principal axis) = {:.2}°",
        principal.theta_p_deg
    )
    .expect("writing to string cannot fail");
    // The circle diameter is the largest engineering shear strain in the plane.
    writeln!(
        &mut output,
        "  γmax (in-plane) = {:.2} ×10⁻⁶",
        principal.max_shear()
    )
    .expect("writing to string cannot fail");

    // Describe Mohr's circle, drawn with positive shear downward (see
    // https://en.wikipedia.org/wiki/Mohr%27s_circle). A point circle has no
    // preferred direction, so the reported angle is 0 by convention.
    writeln!(
        &mut output,
        "Mohr's circle: center = ({:.2}, 0), radius = {:.2}",
        principal.center, principal.radius
    )
    .expect("writing to string cannot fail");
    if principal.is_isotropic() {
        output.push_str("  isotropic strain state: the circle is a single point\n");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::run_analysis;
    use rosettex::{analyze, plot_primitives, RosetteReading, StrainState};

    #[test]
    fn formats_human_readable_report() {
        let reading = RosetteReading::rectangular(1_000.0, 500.0, -200.0).expect("finite");
        let summary = run_analysis(&reading).expect("analysis runs");
        let report = render_summary(&summary);
        assert!(report.contains("B: θ = 45.00°, ε = 500.00 ×10⁻⁶"));
        assert!(report.contains("γxy = 200.00 ×10⁻⁶"));
        assert!(report.contains("ε1 = 1008.28 ×10⁻⁶"));
        assert!(report.contains("ε2 = -208.28 ×10⁻⁶"));
        assert!(report.contains("θp (angle to principal axis) = 4.73°"));
        assert!(!report.contains("isotropic"));
    }

    #[test]
    fn notes_isotropic_state() {
        let strain = StrainState::new(100.0, 100.0, 0.0);
        let principal = analyze(&strain);
        let summary = AnalysisSummary {
            reading: RosetteReading::rectangular(100.0, 100.0, 100.0).expect("finite"),
            strain,
            principal,
            plot: plot_primitives(&strain, &principal),
        };
        let report = render_summary(&summary);
        assert!(report.contains("isotropic strain state"));
    }

    #[test]
    fn solved_equal_readings_report_a_point_circle() {
        let reading = RosetteReading::delta(100.0, 100.0, 100.0).expect("finite");
        let summary = run_analysis(&reading).expect("analysis runs");
        let report = render_summary(&summary);
        assert!(report.contains("θp (angle to principal axis) = 0.00°"));
        assert!(report.contains("radius = 0.00"));
        assert!(report.contains("isotropic strain state"));
    }
}
