use crate::data_io::SampleSource;
use crate::error::{Result, SegevalError};
use crate::metrics::{scores_from_counts, tally};
use crate::overlay::visualize_sample;
use crate::types::{EvaluationConfig, MetricKind, MetricVector, Sample, ALL_METRICS};
use log::{debug, info};
use std::path::PathBuf;

/// Main entry point for segmentation evaluation
///
/// Computes per-class Dice, sensitivity and specificity for every sample
/// of a [`SampleSource`], optionally writing a comparison animation per
/// sample.
///
/// # Example
///
/// ```
/// use ndarray::Array3;
/// use segeval_core::{EvaluationConfig, Evaluator, InMemorySource, Sample};
///
/// let image = Array3::<f32>::zeros((2, 2, 2));
/// let truth = Array3::from_shape_vec((2, 2, 2), vec![0, 0, 1, 1, 0, 0, 1, 1]).unwrap();
/// let pred = truth.clone();
///
/// let source: InMemorySource = vec![Sample::new("case_0", image, truth, pred).unwrap()]
///     .into_iter()
///     .collect();
///
/// let report = Evaluator::run(&source, &EvaluationConfig::default().with_classes(2)).unwrap();
///
/// assert_eq!(report.samples.len(), 1);
/// assert_eq!(report.samples[0].dice.as_slice(), &[1.0, 1.0]);
/// assert_eq!(report.summary.sample_count, 1);
/// ```
pub struct Evaluator;

impl Evaluator {
    /// Computes all metric vectors of one sample from a single tally
    ///
    /// # Errors
    ///
    /// Returns an error if `classes` is zero or the masks differ in shape.
    pub fn evaluate_sample(sample: &Sample, classes: usize) -> Result<SampleEvaluation> {
        let counts = tally(&sample.truth, &sample.pred, classes)?;

        Ok(SampleEvaluation {
            id: sample.id.clone(),
            dice: scores_from_counts(MetricKind::Dice, &counts),
            sensitivity: scores_from_counts(MetricKind::Sensitivity, &counts),
            specificity: scores_from_counts(MetricKind::Specificity, &counts),
        })
    }

    /// Evaluates every sample of `source` in identifier order
    ///
    /// Stops at the first sample that fails to load or evaluate.
    pub fn run<S: SampleSource + ?Sized>(
        source: &S,
        config: &EvaluationConfig,
    ) -> Result<EvaluationReport> {
        if config.classes == 0 {
            return Err(SegevalError::InvalidClassCount(config.classes));
        }

        let mut ids = source.indices()?;
        if let Some(limit) = config.limit {
            ids.truncate(limit);
        }
        info!("Evaluating {} samples", ids.len());

        let mut samples = Vec::with_capacity(ids.len());
        let mut visualizations = Vec::new();

        for id in &ids {
            let sample = source.load(id)?;
            debug!("Loaded sample {} with shape {:?}", id, sample.shape());

            let evaluation = Self::evaluate_sample(&sample, config.classes)?;
            info!("Evaluated {}: dice {}", id, evaluation.dice);

            if config.visualize {
                let path = visualize_sample(&sample, &config.palette, &config.visualization_dir)?;
                visualizations.push(path);
            }

            samples.push(evaluation);
        }

        let summary = EvaluationSummary::from_evaluations(&samples, config.classes);

        Ok(EvaluationReport {
            samples,
            summary,
            visualizations,
        })
    }
}

/// Metric vectors of one sample
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct SampleEvaluation {
    /// Sample identifier
    pub id: String,

    /// Per-class Dice similarity coefficients
    pub dice: MetricVector,

    /// Per-class true positive rates
    pub sensitivity: MetricVector,

    /// Per-class true negative rates
    pub specificity: MetricVector,
}

impl SampleEvaluation {
    /// Returns the vector for one metric kind
    pub fn metric(&self, kind: MetricKind) -> &MetricVector {
        match kind {
            MetricKind::Dice => &self.dice,
            MetricKind::Sensitivity => &self.sensitivity,
            MetricKind::Specificity => &self.specificity,
        }
    }
}

/// Per-class means across all evaluated samples
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct EvaluationSummary {
    /// Number of samples averaged
    pub sample_count: usize,

    /// Mean Dice per class
    pub dice: MetricVector,

    /// Mean sensitivity per class
    pub sensitivity: MetricVector,

    /// Mean specificity per class
    pub specificity: MetricVector,
}

impl EvaluationSummary {
    /// Averages metric vectors class by class
    ///
    /// With no samples every mean is 0.0.
    pub fn from_evaluations(evaluations: &[SampleEvaluation], classes: usize) -> Self {
        let mean = |kind: MetricKind| -> MetricVector {
            let mut sums = vec![0.0_f64; classes];
            for evaluation in evaluations {
                for (sum, score) in sums.iter_mut().zip(evaluation.metric(kind).iter()) {
                    *sum += score;
                }
            }
            if !evaluations.is_empty() {
                let n = evaluations.len() as f64;
                sums.iter_mut().for_each(|sum| *sum /= n);
            }
            sums.into()
        };

        Self {
            sample_count: evaluations.len(),
            dice: mean(MetricKind::Dice),
            sensitivity: mean(MetricKind::Sensitivity),
            specificity: mean(MetricKind::Specificity),
        }
    }

    /// Returns the mean vector for one metric kind
    pub fn metric(&self, kind: MetricKind) -> &MetricVector {
        match kind {
            MetricKind::Dice => &self.dice,
            MetricKind::Sensitivity => &self.sensitivity,
            MetricKind::Specificity => &self.specificity,
        }
    }
}

/// Result of an evaluation run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct EvaluationReport {
    /// Per-sample metrics in identifier order
    pub samples: Vec<SampleEvaluation>,

    /// Per-class means
    pub summary: EvaluationSummary,

    /// Written comparison animations
    pub visualizations: Vec<PathBuf>,
}

impl EvaluationReport {
    /// Iterates `(kind, vector)` pairs of a sample in report order
    pub fn metrics_of(
        sample: &SampleEvaluation,
    ) -> impl Iterator<Item = (MetricKind, &MetricVector)> {
        ALL_METRICS
            .into_iter()
            .map(move |kind| (kind, sample.metric(kind)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_io::InMemorySource;
    use crate::types::{IntensityVolume, LabelVolume};
    use ndarray::Array3;
    use tempfile::TempDir;

    fn labels(values: [u8; 8]) -> LabelVolume {
        Array3::from_shape_vec((2, 2, 2), values.to_vec()).unwrap()
    }

    fn make_sample(id: &str, truth: [u8; 8], pred: [u8; 8]) -> Sample {
        let image = IntensityVolume::from_shape_fn((2, 2, 2), |(i, j, k)| (i + j + k) as f32);
        Sample::new(id, image, labels(truth), labels(pred)).unwrap()
    }

    fn make_source() -> InMemorySource {
        vec![
            make_sample("b", [1, 1, 1, 1, 0, 0, 0, 0], [1, 1, 0, 0, 1, 1, 0, 0]),
            make_sample("a", [0, 0, 1, 1, 0, 0, 1, 1], [0, 0, 1, 1, 0, 0, 1, 1]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_evaluate_sample() {
        let sample = make_sample("x", [1, 1, 1, 1, 0, 0, 0, 0], [1, 1, 0, 0, 1, 1, 0, 0]);

        let evaluation = Evaluator::evaluate_sample(&sample, 2).unwrap();

        assert_eq!(evaluation.id, "x");
        assert_eq!(evaluation.dice.as_slice(), &[0.5, 0.5]);
        assert_eq!(evaluation.sensitivity.as_slice(), &[0.5, 0.5]);
        assert_eq!(evaluation.specificity.as_slice(), &[0.5, 0.5]);
        assert_eq!(evaluation.metric(MetricKind::Dice), &evaluation.dice);
    }

    #[test]
    fn test_run_in_identifier_order_with_summary() {
        let config = EvaluationConfig::default().with_classes(2);

        let report = Evaluator::run(&make_source(), &config).unwrap();

        let ids: Vec<_> = report.samples.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(report.summary.sample_count, 2);
        assert_eq!(report.summary.dice.as_slice(), &[0.75, 0.75]);
        assert!(report.visualizations.is_empty());
    }

    #[test]
    fn test_run_respects_limit() {
        let config = EvaluationConfig::default().with_classes(2).with_limit(1);

        let report = Evaluator::run(&make_source(), &config).unwrap();

        assert_eq!(report.samples.len(), 1);
        assert_eq!(report.samples[0].id, "a");
    }

    #[test]
    fn test_run_rejects_zero_classes() {
        let config = EvaluationConfig::default().with_classes(0);
        assert!(matches!(
            Evaluator::run(&make_source(), &config),
            Err(SegevalError::InvalidClassCount(0))
        ));
    }

    #[test]
    fn test_run_writes_visualizations() {
        let temp_dir = TempDir::new().unwrap();
        let config = EvaluationConfig::default()
            .with_classes(2)
            .visualize(true)
            .with_visualization_dir(temp_dir.path());

        let report = Evaluator::run(&make_source(), &config).unwrap();

        assert_eq!(
            report.visualizations,
            vec![
                temp_dir.path().join("visualization.0000a.gif"),
                temp_dir.path().join("visualization.0000b.gif"),
            ]
        );
        assert!(report.visualizations.iter().all(|p| p.is_file()));
    }

    #[test]
    fn test_empty_summary() {
        let summary = EvaluationSummary::from_evaluations(&[], 3);
        assert_eq!(summary.sample_count, 0);
        assert_eq!(summary.specificity.as_slice(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_metrics_of_order() {
        let sample = make_sample("x", [0; 8], [0; 8]);
        let evaluation = Evaluator::evaluate_sample(&sample, 1).unwrap();

        let kinds: Vec<_> = EvaluationReport::metrics_of(&evaluation)
            .map(|(kind, _)| kind)
            .collect();
        assert_eq!(kinds, ALL_METRICS.to_vec());
    }
}
