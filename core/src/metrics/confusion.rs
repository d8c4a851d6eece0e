use crate::error::{Result, SegevalError};
use crate::types::{ensure_same_shape, LabelVolume};
use ndarray::Zip;

/// Voxel counts for one class, one-vs-rest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassConfusion {
    /// Voxels labelled with the class in both volumes
    pub true_positive: u64,

    /// Voxels labelled with the class in the ground truth
    pub truth: u64,

    /// Voxels labelled with the class in the prediction
    pub pred: u64,

    /// All voxels in the volume
    pub total: u64,
}

impl ClassConfusion {
    /// Voxels labelled with the class in neither volume
    pub fn true_negative(&self) -> u64 {
        self.total - (self.truth + self.pred - self.true_positive)
    }

    /// Voxels not labelled with the class in the ground truth
    pub fn truth_negative(&self) -> u64 {
        self.total - self.truth
    }

    /// 2·TP / (|pred| + |truth|), 0 when both are empty
    pub fn dice(&self) -> f64 {
        ratio(2 * self.true_positive, self.pred + self.truth)
    }

    /// TP / |truth|, 0 when the class is absent from the truth
    pub fn sensitivity(&self) -> f64 {
        ratio(self.true_positive, self.truth)
    }

    /// TN / |¬truth|, 0 when the class covers the whole truth volume
    pub fn specificity(&self) -> f64 {
        ratio(self.true_negative(), self.truth_negative())
    }
}

fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Counts per-class overlaps of two label volumes in one pass
///
/// Labels at or above `classes` take part in `total` only.
///
/// # Errors
///
/// Returns an error if `classes` is zero or the shapes differ.
pub fn tally(truth: &LabelVolume, pred: &LabelVolume, classes: usize) -> Result<Vec<ClassConfusion>> {
    if classes == 0 {
        return Err(SegevalError::InvalidClassCount(classes));
    }
    ensure_same_shape(truth.shape(), pred.shape())?;

    let total = truth.len() as u64;
    let mut counts = vec![
        ClassConfusion {
            total,
            ..Default::default()
        };
        classes
    ];

    Zip::from(truth).and(pred).for_each(|&t, &p| {
        let (t, p) = (t as usize, p as usize);
        if t < classes {
            counts[t].truth += 1;
        }
        if p < classes {
            counts[p].pred += 1;
        }
        if t == p && t < classes {
            counts[t].true_positive += 1;
        }
    });

    Ok(counts)
}
