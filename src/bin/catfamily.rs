use std::{
    fs::File,
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Mutex,
};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{filter::LevelFilter, prelude::*};

#[derive(Parser, Debug)]
#[command(
    name = "catfamily",
    version,
    about = "Generate a family tree of cats with genetic color inheritance",
    after_help = "Examples:\n  catfamily                  generate with default settings\n  catfamily -o my_cats.png   custom output file\n  catfamily --seed 42        reproducible generation\n  catfamily -v --log cats.log"
)]
struct Cli {
    /// Output image path (default: cats_family.png).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Random seed for reproducible generation.
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose (DEBUG) logging.
    #[arg(short, long)]
    verbose: bool,

    /// Also write logs to this file.
    #[arg(long = "log")]
    log_file: Option<PathBuf>,

    /// Directory holding the ear/eyes/body/tail/legs folders.
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Names file, one name per line.
    #[arg(long)]
    names: Option<PathBuf>,

    /// JSON configuration overriding the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum)]
    format: Option<FormatChoice>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Png,
    Jpeg,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = init_logging(cli.verbose, cli.log_file.as_deref()) {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = ?err, "cat family generation failed");
            let missing = err
                .downcast_ref::<catfamily::CatError>()
                .is_some_and(catfamily::CatError::is_missing_resource);
            if missing {
                eprintln!("error: required file not found - {err:#}");
            } else {
                eprintln!("error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => catfamily::FamilyConfig::from_json_file(path)?,
        None => catfamily::FamilyConfig::default(),
    };
    if let Some(dir) = &cli.assets {
        config.parts_dir = dir.clone();
    }
    if let Some(names) = &cli.names {
        config.names_file = names.clone();
    }
    if let Some(format) = cli.format {
        config.output.format = match format {
            FormatChoice::Png => catfamily::OutputFormat::Png,
            FormatChoice::Jpeg => catfamily::OutputFormat::Jpeg,
        };
    }
    config.validate()?;

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| config.output.file_name.clone());
    tracing::info!(output = %output.display(), "cat family generator started");

    let names = catfamily::NamePool::from_file(&config.names_file)?;
    let parts = catfamily::PartLibrary::load(&config.parts_dir)?;
    let labeler = catfamily::Labeler::new(config.label.clone(), &[config.parts_dir.as_path()]);

    let family = catfamily::generate_family(&config, &parts, names, &labeler, cli.seed)?;
    let img = family.render(config.background)?;
    let saved = catfamily::save_family_image(&img, &output, &config.output)?;

    println!("generated family with {} cats", family.tree.len());
    println!("saved to: {}", saved.display());
    Ok(())
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> anyhow::Result<()> {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let file_layer = match log_file {
        Some(path) => {
            let f = File::create(path)
                .with_context(|| format!("create log file '{}'", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(f)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(level)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .context("install log subscriber")?;
    Ok(())
}
