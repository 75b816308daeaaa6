use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use fg_app::{AppResult, build_application};
use fg_case::Case;

#[derive(Parser)]
#[command(name = "fg-cli")]
#[command(about = "FoamGen CLI - OpenFOAM case generation tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate case spec syntax and structure
    Validate {
        /// Path to the case spec YAML file
        spec_path: PathBuf,
    },
    /// Create the case directory and write all configuration files
    Generate {
        /// Path to the case spec YAML file
        spec_path: PathBuf,
        /// Case directory to create
        case_dir: PathBuf,
    },
    /// Write mesh configuration and run the external mesh generators
    Mesh {
        /// Path to the case spec YAML file
        spec_path: PathBuf,
        /// Case directory
        case_dir: PathBuf,
        /// Stream generator console output
        #[arg(long)]
        verbose: bool,
    },
    /// Run the external solver against a generated case
    Run {
        /// Path to the case spec YAML file
        spec_path: PathBuf,
        /// Case directory
        case_dir: PathBuf,
        /// Stream solver console output
        #[arg(long)]
        show_log: bool,
    },
    /// Delete a case directory tree
    Clean {
        /// Case directory to delete
        case_dir: PathBuf,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { spec_path } => cmd_validate(&spec_path),
        Commands::Generate {
            spec_path,
            case_dir,
        } => cmd_generate(&spec_path, &case_dir),
        Commands::Mesh {
            spec_path,
            case_dir,
            verbose,
        } => cmd_mesh(&spec_path, &case_dir, verbose),
        Commands::Run {
            spec_path,
            case_dir,
            show_log,
        } => cmd_run(&spec_path, &case_dir, show_log),
        Commands::Clean { case_dir } => cmd_clean(&case_dir),
    }
}

fn cmd_validate(spec_path: &Path) -> AppResult<()> {
    println!("Validating spec: {}", spec_path.display());
    let spec = fg_project::load_yaml(spec_path)?;
    println!("✓ Spec is valid");
    println!(
        "  {} ({} fields, {} boundaries)",
        spec.name,
        spec.fields.len(),
        spec.mesh.declared_boundary_names().len()
    );
    Ok(())
}

fn cmd_generate(spec_path: &Path, case_dir: &Path) -> AppResult<()> {
    let spec = fg_project::load_yaml(spec_path)?;
    let app = build_application(&spec, case_dir)?;
    app.setup()?;
    println!(
        "✓ Case generated for {} at {}",
        app.application(),
        case_dir.display()
    );
    Ok(())
}

fn cmd_mesh(spec_path: &Path, case_dir: &Path, verbose: bool) -> AppResult<()> {
    let spec = fg_project::load_yaml(spec_path)?;
    let app = build_application(&spec, case_dir)?;
    app.create_mesh(verbose)?;
    println!("✓ Mesh generated at {}", case_dir.display());
    Ok(())
}

fn cmd_run(spec_path: &Path, case_dir: &Path, show_log: bool) -> AppResult<()> {
    let spec = fg_project::load_yaml(spec_path)?;
    let app = build_application(&spec, case_dir)?;
    println!("Running {} on {}", app.application(), case_dir.display());
    app.run(show_log)?;
    println!("✓ Solver run completed");
    Ok(())
}

fn cmd_clean(case_dir: &Path) -> AppResult<()> {
    Case::new(case_dir).remove()?;
    println!("✓ Removed case at {}", case_dir.display());
    Ok(())
}
