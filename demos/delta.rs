use rosettex::{analyze, observation, plot_primitives, solve, RosetteReading};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let reading = RosetteReading::new(
        observation(0.0, 250.0)?,
        observation(60.0, -40.0)?,
        observation(120.0, 310.0)?,
    );
    let state = solve(&reading)?;
    let principal = analyze(&state);
    let primitives = plot_primitives(&state, &principal);

    println!("{}", serde_json::to_string_pretty(&primitives)?);

    Ok(())
}
