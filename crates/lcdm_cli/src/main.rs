use clap::{Args, Parser, Subcommand};
use lcdm_core::{
    ComovingScale, CosmologicalParameters, DEFAULT_REDSHIFT, DistanceEngine, Distances,
    EngineConfig, LookbackEpoch, QuadratureConfig, Status, hubble_distance_mpc, hubble_time_gyr,
};
use lcdm_units::{UnitBreakdown, format_large_number, format_scientific, mpc_to_gly};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lcdm", about = "Flat LambdaCDM distance calculator")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Distances and lookback time at a redshift
    Distances {
        /// Redshift
        #[arg(long, default_value_t = DEFAULT_REDSHIFT, allow_negative_numbers = true)]
        z: f64,
        #[command(flatten)]
        cosmology: CosmologyArgs,
        #[command(flatten)]
        integration: IntegrationArgs,
    },
    /// Express a distance in megaparsecs in every supported unit
    Convert {
        /// Distance in Mpc
        #[arg(allow_negative_numbers = true)]
        mpc: f64,
    },
    /// Hubble distance and Hubble time for a Hubble constant
    Hubble {
        /// Hubble constant in km/s/Mpc
        #[arg(long, env = "LCDM_H0", default_value_t = 67.4, allow_negative_numbers = true)]
        h0: f64,
    },
}

#[derive(Args)]
struct CosmologyArgs {
    /// Hubble constant in km/s/Mpc
    #[arg(long, env = "LCDM_H0", default_value_t = 67.4, allow_negative_numbers = true)]
    h0: f64,
    /// Matter density parameter
    #[arg(long, env = "LCDM_OMEGA_M", default_value_t = 0.315, allow_negative_numbers = true)]
    omega_m: f64,
    /// Dark energy density parameter
    #[arg(long, env = "LCDM_OMEGA_LAMBDA", default_value_t = 0.685, allow_negative_numbers = true)]
    omega_lambda: f64,
}

impl CosmologyArgs {
    fn params(&self) -> CosmologicalParameters {
        CosmologicalParameters::new(self.h0, self.omega_m, self.omega_lambda)
    }
}

#[derive(Args)]
struct IntegrationArgs {
    /// Absolute error target for the quadrature
    #[arg(long, default_value_t = 1.49e-8)]
    abs_tol: f64,
    /// Relative error target for the quadrature
    #[arg(long, default_value_t = 1.49e-8)]
    rel_tol: f64,
    /// Maximum number of quadrature subintervals
    #[arg(long, default_value_t = 100)]
    max_subdivisions: usize,
    /// Error estimate above which an accuracy warning is printed
    #[arg(long, default_value_t = 1e-5)]
    warn_threshold: f64,
}

impl IntegrationArgs {
    fn config(&self) -> EngineConfig {
        EngineConfig {
            quadrature: QuadratureConfig {
                abs_tol: self.abs_tol,
                rel_tol: self.rel_tol,
                max_subdivisions: self.max_subdivisions,
            },
            accuracy_warning_threshold: self.warn_threshold,
        }
    }
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Distances {
            z,
            cosmology,
            integration,
        } => {
            let params = cosmology.params();
            let engine = match DistanceEngine::new(integration.config()) {
                Ok(e) => e,
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(2);
                }
            };
            info!(
                z,
                h0 = params.h0,
                omega_m = params.omega_m,
                omega_lambda = params.omega_lambda,
                "computing distances"
            );

            if !params.is_flat() {
                eprintln!(
                    "Note: Omega_m + Omega_Lambda = {:.3} != 1. Calculations assume a flat universe (Omega_k = 0).",
                    params.omega_m + params.omega_lambda
                );
            }

            let result = engine.compute_params(z, &params);
            if let Some(diag) = &result.diagnostics {
                debug!(?diag, "integration diagnostics");
            }
            match &result.status {
                Status::Ok => {}
                Status::Warning(w) => eprintln!("Warning: {w}"),
                Status::Error(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
            if let Some(d) = &result.distances {
                print_distances(z, d);
            }
        }

        Commands::Convert { mpc } => {
            print_breakdown(&UnitBreakdown::from_mpc(mpc));
        }

        Commands::Hubble { h0 } => {
            if !h0.is_finite() || h0 <= 0.0 {
                eprintln!("Error: Hubble constant must be positive");
                std::process::exit(1);
            }
            println!("H0 = {h0} km/s/Mpc");
            println!("Hubble distance: {:.4} Mpc", hubble_distance_mpc(h0));
            println!("Hubble time: {:.4} Gyr", hubble_time_gyr(h0));
        }
    }
}

fn print_distances(z: f64, d: &Distances) {
    println!("Results for z = {z:.5}");
    println!();

    let epoch = LookbackEpoch::classify(d.lookback_gyr);
    println!("Lookback time: {:.4} Gyr", d.lookback_gyr);
    println!("  ~ {} ({})", epoch.description(), epoch.name());
    println!();

    let scale = ComovingScale::classify(d.comoving_mpc);
    println!("Comoving distance:");
    print_breakdown(&UnitBreakdown::from_mpc(d.comoving_mpc));
    println!("  ~ {} ({})", scale.description(), scale.name());
    println!();

    println!("Luminosity distance:");
    print_mpc_gly(d.luminosity_mpc);
    println!("  Relevant for brightness (standard candles such as supernovae).");
    println!();

    println!("Angular diameter distance:");
    print_mpc_gly(d.ang_diam_mpc);
    println!("  Relevant for apparent size (standard rulers such as BAO).");
}

fn print_mpc_gly(mpc: f64) {
    println!("  {mpc:.4} Mpc");
    println!("  {:.4} Gly", mpc_to_gly(mpc));
}

fn print_breakdown(b: &UnitBreakdown) {
    println!("  {:.4} Mpc", b.mpc);
    println!("  {:.4} Gly", b.gly);
    println!("  {} km (sci.)", format_scientific(b.km));
    println!("  {} km (full)", format_large_number(b.km));
    println!("  {} ly", format_scientific(b.ly));
    println!("  {} AU", format_scientific(b.au));
    println!("  {} Ls", format_scientific(b.light_seconds));
}
