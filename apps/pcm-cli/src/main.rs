use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pcm_app::{AppResult, MixtureReport, data_service, export};
use pcm_solver::SolverConfig;

#[derive(Parser)]
#[command(name = "pcm-cli")]
#[command(about = "Binary eutectic solver for phase-change materials", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List components in a catalog
    Components {
        /// Path to the component catalog CSV
        catalog: PathBuf,
        /// Only show names containing this text
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Solve the eutectic point of a pair and report entropy and enthalpy
    Mixture {
        /// Path to the component catalog CSV
        catalog: PathBuf,
        /// Component A
        a: String,
        /// Component B
        b: String,
        /// Solver config YAML (defaults when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write the sampled liquidus curves to this CSV file
        #[arg(long)]
        curves: Option<PathBuf>,
    },
    /// Recommend reference pairs with a eutectic temperature near a target
    Recommend {
        /// Path to the eutectic reference CSV
        reference: PathBuf,
        /// Target temperature in °C
        #[arg(short, long, allow_negative_numbers = true)]
        target: f64,
        /// Number of pairs to show
        #[arg(short = 'n', long, default_value_t = data_service::DEFAULT_RECOMMENDATIONS)]
        count: usize,
    },
    /// Print the default solver config as YAML
    DefaultConfig,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Yaml,
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Components { catalog, query } => cmd_components(&catalog, query.as_deref()),
        Commands::Mixture {
            catalog,
            a,
            b,
            config,
            format,
            curves,
        } => cmd_mixture(
            &catalog,
            &a,
            &b,
            config.as_deref(),
            format,
            curves.as_deref(),
        ),
        Commands::Recommend {
            reference,
            target,
            count,
        } => cmd_recommend(&reference, target, count),
        Commands::DefaultConfig => {
            print!("{}", pcm_app::default_config_yaml()?);
            Ok(())
        }
    }
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pcm=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pcm=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn cmd_components(catalog_path: &Path, query: Option<&str>) -> AppResult<()> {
    let catalog = data_service::load_catalog(catalog_path)?;
    let records = data_service::list_components(&catalog, query);

    if records.is_empty() {
        println!("No components found");
    } else {
        println!("Components in catalog:");
        for record in records {
            println!(
                "  {} - M = {:.2} g/mol, T_fus = {:.1} °C, ΔH = {:.1} J/g",
                record.name,
                record.molar_mass,
                record.fusion_temperature_c,
                record.specific_heat_of_fusion
            );
        }
    }
    Ok(())
}

fn cmd_mixture(
    catalog_path: &Path,
    a: &str,
    b: &str,
    config_path: Option<&Path>,
    format: OutputFormat,
    curves_path: Option<&Path>,
) -> AppResult<()> {
    let catalog = data_service::load_catalog(catalog_path)?;
    let config = match config_path {
        Some(path) => pcm_app::load_solver_config(path)?,
        None => {
            tracing::debug!("no config file given, using default solver config");
            SolverConfig::default()
        }
    };

    let report = pcm_app::analyze_pair(&catalog, a, b, config)?;

    match format {
        OutputFormat::Text => print_report(&report),
        OutputFormat::Json => println!("{}", export::report_json(&report)?),
        OutputFormat::Yaml => print!("{}", export::report_yaml(&report)?),
    }

    if let Some(path) = curves_path {
        std::fs::write(path, export::liquidus_csv(&report)?)?;
        tracing::debug!(path = %path.display(), "wrote liquidus curves");
        // stderr keeps JSON/YAML on stdout parseable
        eprintln!(
            "✓ Exported {} liquidus samples to {}",
            report.curves.len(),
            path.display()
        );
    }

    Ok(())
}

fn print_report(report: &MixtureReport) {
    let point = &report.eutectic;
    println!(
        "Mixture: {} (A) + {} (B)",
        report.component_a.name, report.component_b.name
    );
    println!(
        "  Eutectic temperature: {:.2} K ({:.2} °C)",
        point.temperature_k,
        point.temperature_c()
    );
    println!("  Eutectic mole fraction of A: {:.4}", point.mole_fraction_a);
    if let Some(floor) = report.liquidus_min_temperature_k {
        println!("  Lowest liquidus sample: {:.2} K", floor);
    }
    if point.refined {
        println!(
            "  Refined inside [{:.4}, {:.4}]",
            point.bracket[0], point.bracket[1]
        );
    }

    for breakdown in [&report.entropy, &report.enthalpy] {
        println!(
            "  {:?} of mixing: {:.4} {}",
            breakdown.quantity,
            breakdown.total,
            breakdown.quantity.unit()
        );
        for (label, value) in breakdown.labelled() {
            println!("    {:<4} {:>14.4}", label, value);
        }
    }
}

fn cmd_recommend(reference: &Path, target: f64, count: usize) -> AppResult<()> {
    let recommendations = data_service::recommend_pairs(reference, target, count)?;

    if recommendations.is_empty() {
        println!("No reference pairs found");
    } else {
        println!("Pairs closest to {:.1} °C:", target);
        for rec in recommendations {
            println!(
                "  {:<40} TE = {:>6.1} °C  (Δ {:.1})",
                rec.pair, rec.eutectic_temperature_c, rec.distance_c
            );
        }
    }
    Ok(())
}
