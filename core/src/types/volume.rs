use crate::error::{Result, SegevalError};
use ndarray::{Array3, Array4};

/// Label volume: one small class index per voxel (0 = background)
pub type LabelVolume = Array3<u8>;

/// Intensity volume: raw scanner intensities
pub type IntensityVolume = Array3<f32>;

/// RGB volume: spatial shape plus a trailing colour axis of size 3
pub type RgbVolume = Array4<u8>;

/// Checks that two spatial shapes are identical
pub(crate) fn ensure_same_shape(expected: &[usize], found: &[usize]) -> Result<()> {
    if expected != found {
        return Err(SegevalError::ShapeMismatch {
            expected: expected.to_vec(),
            found: found.to_vec(),
        });
    }
    Ok(())
}

/// One evaluation case: image, ground truth and prediction
///
/// All three volumes share the same spatial shape; [`Sample::new`]
/// rejects anything else.
#[derive(Debug, Clone)]
pub struct Sample {
    /// Sample identifier (e.g. `case_00012`)
    pub id: String,

    /// Intensity volume
    pub image: IntensityVolume,

    /// Ground-truth segmentation
    pub truth: LabelVolume,

    /// Predicted segmentation
    pub pred: LabelVolume,
}

impl Sample {
    /// Creates a sample, validating that all volumes share one shape
    ///
    /// # Errors
    ///
    /// Returns [`SegevalError::ShapeMismatch`] if the truth or prediction
    /// shape differs from the image shape.
    pub fn new(
        id: impl Into<String>,
        image: IntensityVolume,
        truth: LabelVolume,
        pred: LabelVolume,
    ) -> Result<Self> {
        ensure_same_shape(image.shape(), truth.shape())?;
        ensure_same_shape(image.shape(), pred.shape())?;

        Ok(Self {
            id: id.into(),
            image,
            truth,
            pred,
        })
    }

    /// Spatial shape shared by all volumes
    pub fn shape(&self) -> &[usize] {
        self.image.shape()
    }

    /// Number of slices along the third axis
    pub fn depth(&self) -> usize {
        self.image.shape()[2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_accepts_matching_shapes() {
        let sample = Sample::new(
            "case_00001",
            IntensityVolume::zeros((4, 5, 6)),
            LabelVolume::zeros((4, 5, 6)),
            LabelVolume::zeros((4, 5, 6)),
        )
        .unwrap();

        assert_eq!(sample.id, "case_00001");
        assert_eq!(sample.shape(), &[4, 5, 6]);
        assert_eq!(sample.depth(), 6);
    }

    #[test]
    fn test_sample_rejects_prediction_shape() {
        let result = Sample::new(
            "case_00001",
            IntensityVolume::zeros((4, 5, 6)),
            LabelVolume::zeros((4, 5, 6)),
            LabelVolume::zeros((4, 5, 7)),
        );

        match result {
            Err(SegevalError::ShapeMismatch { expected, found }) => {
                assert_eq!(expected, vec![4, 5, 6]);
                assert_eq!(found, vec![4, 5, 7]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_sample_rejects_truth_shape() {
        let result = Sample::new(
            "x",
            IntensityVolume::zeros((2, 2, 2)),
            LabelVolume::zeros((2, 3, 2)),
            LabelVolume::zeros((2, 2, 2)),
        );
        assert!(result.is_err());
    }
}
