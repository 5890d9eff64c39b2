mod logger;

use std::f64::consts::PI;

use clap::{Parser, Subcommand};
use sph_core::{
    HarmonicError, LegendreBackend, LegendreConfig, LegendreError, ProviderError,
    real_spherical_harmonic,
};
use tracing::debug;

#[derive(Parser)]
#[command(name = "sph", about = "Real spherical harmonics CLI")]
struct Cli {
    /// Largest degree the backend accepts
    #[arg(long, global = true, default_value_t = sph_core::LegendreConfig::DEFAULT.max_degree)]
    max_degree: u32,
    /// Debug-level logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate Y_l^m at one point
    Eval {
        /// Degree l >= 0
        l: u32,
        /// Order m in [-l, l]
        #[arg(allow_negative_numbers = true)]
        m: i32,
        /// Polar angle θ (radians unless --degrees)
        #[arg(allow_negative_numbers = true)]
        theta: f64,
        /// Azimuthal angle φ (radians unless --degrees)
        #[arg(allow_negative_numbers = true)]
        phi: f64,
        /// Interpret angles as degrees
        #[arg(long)]
        degrees: bool,
    },
    /// Evaluate every order of one degree and check the addition theorem
    Degree {
        /// Degree l >= 0
        l: u32,
        /// Polar angle θ (radians unless --degrees)
        #[arg(allow_negative_numbers = true)]
        theta: f64,
        /// Azimuthal angle φ (radians unless --degrees)
        #[arg(allow_negative_numbers = true)]
        phi: f64,
        /// Interpret angles as degrees
        #[arg(long)]
        degrees: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let backend = load_backend(cli.max_degree);

    match cli.command {
        Commands::Eval {
            l,
            m,
            theta,
            phi,
            degrees,
        } => {
            let (theta, phi) = angles_in_radians(theta, phi, degrees);
            debug!(l, m, theta, phi, "eval");
            match real_spherical_harmonic(&backend, l, m, theta, phi) {
                Ok(value) => println!("{value:.15e}"),
                Err(e) => {
                    eprintln!("Evaluation failed: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Degree {
            l,
            theta,
            phi,
            degrees,
        } => {
            let (theta, phi) = angles_in_radians(theta, phi, degrees);
            debug!(l, theta, phi, "degree table");
            let rows = match degree_table(&backend, l, theta, phi) {
                Ok(rows) => rows,
                Err(e) => {
                    eprintln!("Evaluation failed: {e}");
                    std::process::exit(1);
                }
            };
            for (m, value) in &rows {
                println!("m = {m:>5}  {value:+.15e}");
            }
            let sum: f64 = rows.iter().map(|(_, v)| v * v).sum();
            let expected = addition_theorem_value(l);
            println!(
                "sum of squares {sum:.15e}  expected {expected:.15e}  diff {:.3e}",
                sum - expected
            );
        }
    }
}

fn load_backend(max_degree: u32) -> LegendreBackend {
    LegendreBackend::new(LegendreConfig::with_max_degree(max_degree)).unwrap_or_else(|e| {
        eprintln!("Invalid backend configuration: {e}");
        std::process::exit(1);
    })
}

fn angles_in_radians(theta: f64, phi: f64, degrees: bool) -> (f64, f64) {
    if degrees {
        (theta.to_radians(), phi.to_radians())
    } else {
        (theta, phi)
    }
}

/// `Y_l^m(θ, φ)` for every `m` in `[-l, l]`, ascending.
///
/// The degree is checked before any order is built or evaluated.
fn degree_table(
    backend: &LegendreBackend,
    l: u32,
    theta: f64,
    phi: f64,
) -> Result<Vec<(i32, f64)>, HarmonicError> {
    let max = backend.config().max_degree;
    if l > max {
        return Err(ProviderError::from(LegendreError::DegreeTooLarge { l, max }).into());
    }
    let top = i32::try_from(l).map_err(|_| {
        ProviderError::Domain(format!(
            "degree {l} exceeds the largest tabulated degree {}",
            i32::MAX
        ))
    })?;
    (-top..=top)
        .map(|m| real_spherical_harmonic(backend, l, m, theta, phi).map(|v| (m, v)))
        .collect()
}

/// `Σ_m Y_l^m(θ, φ)² = (2l + 1) / (4π)` at every point.
fn addition_theorem_value(l: u32) -> f64 {
    (2.0 * f64::from(l) + 1.0) / (4.0 * PI)
}
