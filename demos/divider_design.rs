use circuit_calc::circuits::divider::{solve, DividerInputs};
use circuit_calc::circuits::{Quantity, StandardSeries};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // 12 V rail down to common logic levels with R1 = 10 kΩ.
    let targets = [5.0, 3.3, 2.5, 1.8];

    println!("target(V), series, R2_calc(ohm), R2_std(ohm), actual(V)");
    for series in [StandardSeries::E12, StandardSeries::E24] {
        for target in targets {
            let out = solve(&DividerInputs::design(12.0, 10_000.0, target), series)?;
            let field = |q: Quantity| out.get(q).unwrap_or(f64::NAN);
            println!(
                "{target:.2}, {series}, {:.1}, {:.0}, {:.4}",
                field(Quantity::R2Calculated),
                field(Quantity::R2Standard),
                field(Quantity::ActualOutput),
            );
        }
    }
    Ok(())
}
