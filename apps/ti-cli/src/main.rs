use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use ti_app::{AppResult, apply_fluid_overrides, calculate_case, render_report};
use ti_case::{CaseDef, CaseFormat};
use ti_turbulence::{Application, TurbulenceModel};

#[derive(Parser)]
#[command(name = "ti-cli")]
#[command(about = "Turbulence inlet calculator - CFD turbulence boundary conditions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate case file syntax and inputs
    Validate {
        /// Path to the case YAML/JSON file
        case_path: PathBuf,
    },
    /// Calculate turbulence boundary conditions for a case
    Calc {
        /// Path to the case YAML/JSON file
        case_path: PathBuf,
        /// Override fluid density in kg/m³
        #[arg(long)]
        density: Option<String>,
        /// Override dynamic viscosity in Pa·s
        #[arg(long)]
        viscosity: Option<String>,
        /// Print the result as JSON instead of a report
        #[arg(long)]
        json: bool,
    },
    /// Write a case file with default inputs
    Template {
        /// Turbulence model (spalart_allmaras, k_epsilon, k_omega)
        #[arg(long, default_value = "k_omega")]
        model: TurbulenceModel,
        /// Application (wall_bounded, jet_inlet, external_aero,
        /// high_speed_complex, pump_compressor, unsure)
        #[arg(long, default_value = "wall_bounded")]
        application: Application,
        /// Output file (optional, defaults to stdout as YAML)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Calc {
            case_path,
            density,
            viscosity,
            json,
        } => cmd_calc(&case_path, density.as_deref(), viscosity.as_deref(), json),
        Commands::Template {
            model,
            application,
            output,
        } => cmd_template(model, application, output.as_deref()),
    }
}

fn cmd_validate(case_path: &Path) -> AppResult<()> {
    println!("Validating case: {}", case_path.display());
    let case = ti_app::load_case(case_path)?;
    ti_app::validate_case(&case)?;
    println!("✓ Case is valid");
    Ok(())
}

fn cmd_calc(
    case_path: &Path,
    density: Option<&str>,
    viscosity: Option<&str>,
    json: bool,
) -> AppResult<()> {
    // Overrides go in before validation so they can repair the file's fluid.
    let mut case = ti_app::read_case(case_path)?;
    tracing::debug!(case = %case.name, path = %case_path.display(), "read case");
    apply_fluid_overrides(&mut case, density, viscosity)?;

    let response = calculate_case(&case)?;

    if json {
        println!("{}", response.record().to_json()?);
    } else {
        println!("Case: {}\n", case.name);
        print!("{}", render_report(&response));
    }
    Ok(())
}

fn cmd_template(
    model: TurbulenceModel,
    application: Application,
    output: Option<&Path>,
) -> AppResult<()> {
    let case = CaseDef::template(model, application);

    if let Some(path) = output {
        ti_app::save_case(path, &case)?;
        println!("✓ Wrote template case to {}", path.display());
    } else {
        print!("{}", ti_case::to_string(&case, CaseFormat::Yaml)?);
    }
    Ok(())
}
