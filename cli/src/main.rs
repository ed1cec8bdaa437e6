mod config;
mod scenarios;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use snow_load_core::{
    AltitudeTerm, CalculationInput, CalculationResult, CalculatorConfig, Degrees, Meters, ParcelZone,
    SnowLoadCalculator,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{load_config, CliError};

/// Roof snow load calculator (EN 1991-1-3)
#[derive(Parser, Debug)]
#[command(name = "snow-calc")]
#[command(about = "Characteristic and design roof snow load from parcel and roof data", long_about = None)]
#[command(allow_negative_numbers = true)]
struct Args {
    /// Exposure coefficient Ce
    #[arg(short, long, default_value_t = 1.0)]
    exposure: f64,

    /// Thermal coefficient Ct
    #[arg(short, long, default_value_t = 1.0)]
    thermal: f64,

    /// Parcel altitude in meters
    #[arg(short, long, default_value_t = 1.0)]
    altitude: f64,

    /// Parcel zone (A1, A2, A3, A4, M1)
    #[arg(short, long, default_value = "A1")]
    zone: String,

    /// Roof angle in degrees (0-90)
    #[arg(short = 'r', long, default_value_t = 30.0)]
    angle: f64,

    /// Use the legacy web form's XOR altitude term instead of (A/A0)^2
    #[arg(long)]
    legacy_xor: bool,

    /// JSON calculator config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the input and result as JSON
    #[arg(long)]
    json: bool,

    /// Run the worked examples and report pass/fail
    #[arg(short, long)]
    validate: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), CliError> {
    let mut settings = match &args.config {
        Some(path) => load_config(path)?,
        None => CalculatorConfig::default(),
    };
    if args.legacy_xor {
        settings.altitude_term = AltitudeTerm::LegacyXor;
    }
    info!(?settings, "calculator configured");

    let input = CalculationInput {
        exposure_coefficient: args.exposure,
        thermal_coefficient: args.thermal,
        parcel_altitude: Meters::new(args.altitude),
        parcel_zone: args.zone.parse::<ParcelZone>()?,
        roof_angle: Degrees::new(args.angle),
    };

    let calculator = SnowLoadCalculator::new(settings);
    let result = calculator.compute(&input)?;

    if args.json {
        let report = serde_json::json!({
            "input": input,
            "altitude_term": settings.altitude_term,
            "result": result,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&input, &result, settings.altitude_term);
    }
    Ok(())
}

fn print_report(input: &CalculationInput, result: &CalculationResult, term: AltitudeTerm) {
    println!("=== Snow Load ===\n");
    println!(
        "Zone: {}, Altitude: {}, Roof angle: {}",
        input.parcel_zone, input.parcel_altitude, input.roof_angle
    );
    println!(
        "Ce: {}, Ct: {}",
        input.exposure_coefficient, input.thermal_coefficient
    );
    if term == AltitudeTerm::LegacyXor {
        println!("Altitude term: legacy XOR");
    }
    println!();
    println!(
        "Characteristic Snow Weight (Sk): {:.4} kN/m²",
        result.characteristic_snow_weight
    );
    println!("Shape Coefficient (µ):           {:.4}", result.shape_coefficient);
    println!(
        "Snow Weight (s):                 {:.4} kN/m²",
        result.design_snow_weight
    );
}

fn run_validation() -> ExitCode {
    println!("=== Validation ===\n");
    let outcomes = scenarios::run_all();
    let failed = outcomes.iter().filter(|o| !o.passed).count();
    for outcome in &outcomes {
        let mark = if outcome.passed { "PASS" } else { "FAIL" };
        println!("[{mark}] {}: {}", outcome.name, outcome.detail);
    }
    println!("\n{} passed, {} failed", outcomes.len() - failed, failed);
    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    if args.validate {
        return run_validation();
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Calculation(e)) => {
            eprintln!("error ({}): {e}", e.kind());
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
