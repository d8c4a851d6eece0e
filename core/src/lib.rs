pub mod api;
pub mod cli;
pub mod data_io;
pub mod error;
pub mod metrics;
pub mod overlay;
pub mod types;

pub use api::{EvaluationReport, EvaluationSummary, Evaluator, SampleEvaluation};
pub use cli::report::TextReport;
pub use data_io::{InMemorySource, NiftiSource, SampleSource};
pub use error::{Result, SegevalError};
pub use metrics::{calc_dice, calc_metric, calc_sensitivity, calc_specificity};
pub use overlay::{overlay_segmentation, write_comparison_gif};
pub use types::*;
