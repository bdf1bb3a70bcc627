use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

use cvextract_core::{
    save_stages, ConfigSource, CvError, ParsingConfig, ResumeProcessor, StepProfiler,
};

#[derive(Parser, Debug)]
#[command(name = "cvextract")]
#[command(about = "Extract summary, experience, education and contact details from a CV")]
struct Args {
    /// Path to the CV document (PDF, or .txt/.md for pre-extracted text)
    #[arg(short, long, default_value = "CV.pdf")]
    input: PathBuf,

    /// Output JSON path (parent directory is created if missing)
    #[arg(short, long, default_value = "assets/data.json")]
    output: PathBuf,

    /// Path to custom config file (YAML format)
    #[arg(short, long)]
    config: Option<String>,

    /// Print the effective config as YAML and exit
    #[arg(long)]
    print_config: bool,

    /// Dump all intermediate pipeline stage outputs to a directory
    /// Captures: raw text, normalized lines, section index and final record
    #[arg(long)]
    dump_stages: bool,

    /// Directory for stage dump output
    #[arg(long, default_value = "stages")]
    stages_dir: PathBuf,

    /// Enable detailed profiling of all pipeline steps
    #[arg(long)]
    profile: bool,

    /// Log per-line matches (same as RUST_LOG=debug)
    #[arg(short, long)]
    verbose: bool,
}

/// Counts reported once the record is on disk
#[derive(Debug, PartialEq, Eq)]
struct RunSummary {
    output: PathBuf,
    experience: usize,
    education: usize,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let (config, source) = ParsingConfig::load_with_source(args.config.as_deref());
    match &source {
        ConfigSource::File(path) => info!("📋 Loaded config from: {}", path),
        ConfigSource::Default => info!("📋 Using default config"),
        // already warned while loading
        ConfigSource::Fallback(_) => {}
    }

    if args.print_config {
        match config.to_yaml() {
            Ok(yaml) => print!("{yaml}"),
            Err(e) => {
                eprintln!("❌ {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    match run(&args, &config) {
        Ok(summary) => println!(
            "Wrote {} with {} experience items and {} education entries.",
            summary.output.display(),
            summary.experience,
            summary.education
        ),
        Err(e) => {
            eprintln!("❌ Extraction failed: {e:#}");
            if let Some(CvError::MissingInput(_)) = e.downcast_ref::<CvError>() {
                eprintln!("   Please check the file path.");
            }
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Process one CV and write its record. Nothing is written on failure.
fn run(args: &Args, config: &ParsingConfig) -> Result<RunSummary> {
    if !args.input.is_file() {
        return Err(CvError::MissingInput(args.input.clone()).into());
    }

    let processor = ResumeProcessor::for_path(&args.input, config)?;

    let record = if args.dump_stages {
        info!("🔬 Pipeline stage dump mode");
        let stages = processor.process_file_capture_stages(&args.input)?;
        save_stages(&stages, &args.stages_dir, &args.input)
            .with_context(|| format!("writing stages to {}", args.stages_dir.display()))?;
        info!("✅ All stages dumped to: {}", args.stages_dir.display());
        stages.record
    } else {
        let mut profiler = StepProfiler::new(args.profile);
        processor.process_file_with_profiler(&args.input, &mut profiler)?
    };

    record
        .save_to_json(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    info!("💾 Results saved to: {}", display_path(&args.output));

    Ok(RunSummary {
        output: args.output.clone(),
        experience: record.experience.len(),
        education: record.education.len(),
    })
}

fn display_path(path: &Path) -> String {
    path.canonicalize()
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}
