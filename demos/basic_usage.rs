// ============================================================================
// Basic Usage Example
// ============================================================================

use consistent_rounding::prelude::*;

fn main() {
    // Run with `--features logging` to see the engine's trace output
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Consistent Rounding Example ===\n");

    // Plain text, one shared place per group
    println!("Plain groups:");
    let groups: [&[f64]; 4] = [
        &[0.034, 1.2],
        &[12.3, 45.6, 78.9],
        &[0.0, 5.0],
        &[1.0584378784847064, -0.8138475623409628, -0.6127108398864638],
    ];
    for group in groups {
        match format_group(group) {
            Ok(formatted) => println!("  {:?} -> {}", group, formatted.join(", ")),
            Err(e) => println!("  {:?} -> error: {}", group, e),
        }
    }

    // Credible intervals in LaTeX
    println!("\n=== LaTeX Intervals ===");
    let intervals = [(1.234, 0.056, 0.078), (105.3, 12.0, 9.5), (0.0123, 0.0021, 0.0019)];
    for (center, plus, minus) in intervals {
        match format_latex_group(center, plus, minus) {
            Ok(latex) => println!("  {}", latex),
            Err(e) => println!("  error: {}", e),
        }
    }

    // Caller-chosen place
    if let Ok(place) = DecimalPlace::new(-2) {
        if let Ok(latex) = format_latex(1.234, 0.056, 0.078, place) {
            println!("  at {}: {}", place, latex);
        }
    }

    // Custom engine: three digits, banker's rounding, math delimiters
    println!("\n=== Custom Engine ===");
    let engine = match RoundingEngineBuilder::new()
        .min_significant_digits(3)
        .half_even_rounding()
        .latex_math_delimiters(true)
        .build()
    {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("invalid configuration: {}", e);
            return;
        },
    };
    println!("Config: {:?}", engine.config());
    if let Ok(latex) = engine.format_latex_group(2.71828, 0.0125, 0.0375) {
        println!("  {}", latex);
    }
    if let Ok(values) = engine.round_consistently(&[3.14159, 0.00265]) {
        println!("  rounded floats: {:?}", values);
    }

    // Rejected inputs
    println!("\n=== Rejected Inputs ===");
    for result in [
        format_group(&[]).map(|v| v.join(", ")),
        format_group(&[0.0, 0.0]).map(|v| v.join(", ")),
        format_latex_group(1.0, -0.5, 0.5),
    ] {
        if let Err(e) = result {
            println!("  {}", e);
        }
    }
}
