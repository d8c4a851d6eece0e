use crate::error::Result;
use crate::metrics::confusion::{tally, ClassConfusion};
use crate::types::{LabelVolume, MetricKind, MetricVector};

/// Computes per-class Dice similarity coefficients
///
/// # Example
///
/// ```
/// use ndarray::Array3;
/// use segeval_core::metrics::calc_dice;
///
/// let truth = Array3::from_shape_vec((1, 2, 2), vec![0, 1, 1, 0]).unwrap();
/// let pred = Array3::from_shape_vec((1, 2, 2), vec![0, 1, 0, 0]).unwrap();
///
/// let dice = calc_dice(&truth, &pred, 2).unwrap();
/// assert_eq!(dice.len(), 2);
/// assert!((dice.get(1).unwrap() - 2.0 / 3.0).abs() < 1e-12);
/// ```
pub fn calc_dice(truth: &LabelVolume, pred: &LabelVolume, classes: usize) -> Result<MetricVector> {
    calc_metric(MetricKind::Dice, truth, pred, classes)
}

/// Computes per-class sensitivity (true positive rate)
pub fn calc_sensitivity(
    truth: &LabelVolume,
    pred: &LabelVolume,
    classes: usize,
) -> Result<MetricVector> {
    calc_metric(MetricKind::Sensitivity, truth, pred, classes)
}

/// Computes per-class specificity (true negative rate)
pub fn calc_specificity(
    truth: &LabelVolume,
    pred: &LabelVolume,
    classes: usize,
) -> Result<MetricVector> {
    calc_metric(MetricKind::Specificity, truth, pred, classes)
}

/// Computes one metric vector of length `classes`
///
/// Undefined ratios (empty denominators) score 0.0.
///
/// # Errors
///
/// Returns an error if `classes` is zero or the volumes differ in shape.
pub fn calc_metric(
    kind: MetricKind,
    truth: &LabelVolume,
    pred: &LabelVolume,
    classes: usize,
) -> Result<MetricVector> {
    let counts = tally(truth, pred, classes)?;
    Ok(scores_from_counts(kind, &counts))
}

/// Converts confusion tallies into a metric vector
pub fn scores_from_counts(kind: MetricKind, counts: &[ClassConfusion]) -> MetricVector {
    counts
        .iter()
        .map(|c| match kind {
            MetricKind::Dice => c.dice(),
            MetricKind::Sensitivity => c.sensitivity(),
            MetricKind::Specificity => c.specificity(),
        })
        .collect::<Vec<_>>()
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ALL_METRICS;
    use ndarray::Array3;
    use rstest::rstest;

    fn volume(labels: &[u8]) -> LabelVolume {
        Array3::from_shape_vec((2, 2, labels.len() / 4), labels.to_vec()).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[rstest]
    #[case(MetricKind::Dice)]
    #[case(MetricKind::Sensitivity)]
    #[case(MetricKind::Specificity)]
    fn test_identical_volumes_score_one(#[case] kind: MetricKind) {
        let truth = volume(&[0, 0, 1, 1, 2, 2, 3, 0]);

        let scores = calc_metric(kind, &truth, &truth, 4).unwrap();

        for score in scores.iter() {
            assert_close(*score, 1.0);
        }
    }

    #[test]
    fn test_disjoint_labels_dice_zero() {
        let truth = volume(&[1, 1, 1, 1, 0, 0, 0, 0]);
        let pred = volume(&[0, 0, 0, 0, 1, 1, 1, 1]);

        let dice = calc_dice(&truth, &pred, 2).unwrap();

        assert_close(dice.get(0).unwrap(), 0.0);
        assert_close(dice.get(1).unwrap(), 0.0);
    }

    #[test]
    fn test_class_absent_from_truth_and_pred() {
        let truth = volume(&[0, 0, 1, 1, 0, 0, 1, 1]);
        let pred = volume(&[0, 0, 1, 0, 0, 0, 1, 1]);

        let dice = calc_dice(&truth, &pred, 3).unwrap();
        let sens = calc_sensitivity(&truth, &pred, 3).unwrap();
        let spec = calc_specificity(&truth, &pred, 3).unwrap();

        assert_close(dice.get(2).unwrap(), 0.0);
        assert_close(sens.get(2).unwrap(), 0.0);
        assert_close(spec.get(2).unwrap(), 1.0);
    }

    #[test]
    fn test_class_absent_from_truth_but_predicted() {
        let truth = volume(&[0, 0, 0, 0, 0, 0, 0, 0]);
        let pred = volume(&[0, 0, 0, 0, 0, 0, 1, 1]);

        let sens = calc_sensitivity(&truth, &pred, 2).unwrap();
        let spec = calc_specificity(&truth, &pred, 2).unwrap();

        assert_close(sens.get(1).unwrap(), 0.0);
        assert_close(spec.get(1).unwrap(), 0.75);
        // background covers the whole truth volume
        assert_close(spec.get(0).unwrap(), 0.0);
    }

    #[test]
    fn test_partial_overlap_values() {
        // truth: 4 voxels of class 1, pred: 2 of them plus 2 false positives
        let truth = volume(&[1, 1, 1, 1, 0, 0, 0, 0]);
        let pred = volume(&[1, 1, 0, 0, 1, 1, 0, 0]);

        let dice = calc_dice(&truth, &pred, 2).unwrap();
        let sens = calc_sensitivity(&truth, &pred, 2).unwrap();
        let spec = calc_specificity(&truth, &pred, 2).unwrap();

        assert_close(dice.get(1).unwrap(), 0.5);
        assert_close(sens.get(1).unwrap(), 0.5);
        assert_close(spec.get(1).unwrap(), 0.5);
    }

    #[test]
    fn test_vectors_have_class_length_and_unit_range() {
        let truth = volume(&[0, 1, 2, 3, 3, 2, 1, 0]);
        let pred = volume(&[3, 2, 1, 0, 0, 1, 2, 3]);

        for kind in ALL_METRICS {
            let scores = calc_metric(kind, &truth, &pred, 5).unwrap();
            assert_eq!(scores.len(), 5);
            assert!(scores.iter().all(|s| (0.0..=1.0).contains(s)));
        }
    }

    #[test]
    fn test_shape_mismatch_propagates() {
        let truth = volume(&[0, 0, 0, 0]);
        let pred = volume(&[0, 0, 0, 0, 0, 0, 0, 0]);
        assert!(calc_dice(&truth, &pred, 2).is_err());
    }
}
