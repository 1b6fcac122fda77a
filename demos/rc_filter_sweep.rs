use std::io;

use circuit_calc::circuits::filter::{solve, FilterInputs, FilterTopology};
use circuit_calc::sweep::write_response_curve_csv;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Topology from the first argument, defaulting to low-pass.
    let topology: FilterTopology = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => FilterTopology::LowPass,
    };

    // 1 kΩ with 1 µF: fc ≈ 159 Hz.
    let response = solve(&FilterInputs::from_rc(1_000.0, 1.0e-6), topology)?;
    eprintln!("{topology}: {}", response.record);

    write_response_curve_csv(io::stdout().lock(), &response.curve)?;
    Ok(())
}
