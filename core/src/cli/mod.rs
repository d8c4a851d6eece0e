pub mod report;

use crate::types::{EvaluationConfig, DEFAULT_CLASSES, DEFAULT_VISUALIZATION_DIR};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for segeval
#[derive(Parser, Debug)]
#[command(name = "segeval")]
#[command(about = "Evaluate segmentation predictions against ground truth")]
#[command(version)]
pub struct Cli {
    /// Directory with one sub-directory per sample
    #[arg(value_name = "DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Directory with one `<sample>.nii.gz` prediction per sample
    #[arg(short, long, default_value = "predictions")]
    pub predictions: PathBuf,

    /// Number of classes, including background
    #[arg(short, long, default_value_t = DEFAULT_CLASSES)]
    pub classes: usize,

    /// Write a ground truth / prediction comparison GIF per sample
    #[arg(long)]
    pub visualize: bool,

    /// Output directory for comparison GIFs
    #[arg(long, default_value = DEFAULT_VISUALIZATION_DIR)]
    pub eval_dir: PathBuf,

    /// Only evaluate samples whose identifier matches this regex
    #[arg(long, value_name = "REGEX")]
    pub sample_pattern: Option<String>,

    /// Evaluate at most N samples
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Builds the evaluation settings from the parsed arguments
    pub fn evaluation_config(&self) -> EvaluationConfig {
        let config = EvaluationConfig::default()
            .with_classes(self.classes)
            .visualize(self.visualize)
            .with_visualization_dir(self.eval_dir.clone());

        match self.limit {
            Some(limit) => config.with_limit(limit),
            None => config,
        }
    }
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}
