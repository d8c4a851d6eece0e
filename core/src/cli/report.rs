use crate::api::EvaluationReport;
use crate::types::ALL_METRICS;
use std::fmt;

/// Text report formatter for an evaluation run
pub struct TextReport<'a> {
    report: &'a EvaluationReport,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(report: &'a EvaluationReport) -> Self {
        Self { report }
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Segmentation Evaluation")?;
        writeln!(f, "=======================")?;
        writeln!(f)?;

        for sample in &self.report.samples {
            writeln!(f, "{}", sample.id)?;
            for (kind, scores) in EvaluationReport::metrics_of(sample) {
                writeln!(f, "  {:<5} {}", format!("{}:", kind.simple_name()), scores)?;
            }
            writeln!(f)?;
        }

        let summary = &self.report.summary;
        writeln!(f, "Mean over {} samples", summary.sample_count)?;
        writeln!(f, "--------------------")?;
        for kind in ALL_METRICS {
            writeln!(
                f,
                "  {:<5} {}",
                format!("{}:", kind.simple_name()),
                summary.metric(kind)
            )?;
        }

        if !self.report.visualizations.is_empty() {
            writeln!(f)?;
            writeln!(f, "Visualizations")?;
            writeln!(f, "--------------")?;
            for path in &self.report.visualizations {
                writeln!(f, "  {}", path.display())?;
            }
        }

        Ok(())
    }
}
