use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use osc_ubuntu::AppError;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "osc-ubuntu")]
#[command(version)]
#[command(
    about = "Render Ubuntu cloud-init user data from an operating system config",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a cloud-init document, enforcing mandatory kubelet flags
    #[clap(visible_alias = "g")]
    Generate {
        /// Operating system config (YAML, or JSON with a .json extension)
        input: PathBuf,
        /// Generator configuration (defaults to ./osc-ubuntu.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Write the document here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print a unit file with the mandatory kubelet flags enforced
    #[clap(visible_alias = "p")]
    PatchUnit {
        /// Unit file to read
        unit: PathBuf,
        /// Generator configuration (defaults to ./osc-ubuntu.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate { input, config, output } => {
            run_generate(&input, config.as_deref(), output.as_deref())
        }
        Commands::PatchUnit { unit, config } => run_patch_unit(&unit, config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_generate(
    input: &Path,
    config: Option<&Path>,
    output: Option<&Path>,
) -> Result<(), AppError> {
    let rendered = osc_ubuntu::generate_file_at(input, config, &std::env::current_dir()?)?;

    match output {
        Some(path) => {
            fs::write(path, &rendered.document)?;
            println!("✅ Wrote cloud-init document to {}", path.display());
            if let Some(command) = &rendered.command {
                println!("Command: {}", command);
            }
        }
        None => {
            io::stdout().write_all(&rendered.document)?;
            if let Some(command) = &rendered.command {
                info!(command = %command, "document invocation command");
            }
        }
    }
    Ok(())
}

fn run_patch_unit(unit: &Path, config: Option<&Path>) -> Result<(), AppError> {
    let patched = osc_ubuntu::patch_unit_file_at(unit, config, &std::env::current_dir()?)?;
    io::stdout().write_all(patched.as_bytes())?;
    Ok(())
}
