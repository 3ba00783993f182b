use rosettex::{analyze, solve, RosetteReading};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Gauges at 0, 45 and 90 degrees
    let reading = RosetteReading::rectangular(1_000.0, 500.0, -200.0)?;

    // Reduce the readings to the strain state
    let state = solve(&reading)?;
    println!(
        "eps_x = {:.2}, eps_y = {:.2}, gamma_xy = {:.2} (x10^-6)",
        state.eps_x, state.eps_y, state.gamma_xy
    );

    // Principal strains from Mohr's circle
    let principal = analyze(&state);
    println!(
        "eps1 = {:.2}, eps2 = {:.2}, theta_p = {:.2} deg",
        principal.eps1, principal.eps2, principal.theta_p_deg
    );

    // All done
    Ok(())
}
