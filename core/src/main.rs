use clap::Parser;
use log::{error, info};
use segeval_core::cli::{Cli, OutputFormat};
use segeval_core::{EvaluationReport, Evaluator, NiftiSource, Result, TextReport};
use std::process;

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    if !cli.data_dir.is_dir() {
        eprintln!("Error: {} is not a directory", cli.data_dir.display());
        process::exit(1);
    }

    let report = match run(&cli) {
        Ok(report) => report,
        Err(e) => {
            error!("Evaluation failed: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if report.samples.is_empty() {
        eprintln!("Error: No samples found in {}", cli.data_dir.display());
        process::exit(1);
    }

    output_report(&report, cli.format);
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn run(cli: &Cli) -> Result<EvaluationReport> {
    let mut source = NiftiSource::new(&cli.data_dir, &cli.predictions);
    if let Some(pattern) = &cli.sample_pattern {
        source = source.with_pattern(pattern)?;
    }

    let config = cli.evaluation_config();
    info!(
        "Evaluating {} against {} with {} classes",
        cli.predictions.display(),
        cli.data_dir.display(),
        config.classes
    );

    Evaluator::run(&source, &config)
}

fn output_report(report: &EvaluationReport, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            println!("{}", TextReport::new(report));
        }
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                match serde_json::to_string_pretty(report) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        error!("Failed to serialize to JSON: {}", e);
                        eprintln!("Error: Failed to serialize to JSON: {}", e);
                        process::exit(1);
                    }
                }
            }
            #[cfg(not(feature = "json"))]
            {
                eprintln!("Error: JSON output requires the 'json' feature");
                eprintln!("Rebuild with: cargo build --features json");
                process::exit(1);
            }
        }
    }
}
