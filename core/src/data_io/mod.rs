//! Sample discovery and loading
//!
//! [`SampleSource`] is the seam the evaluator pulls samples through.
//! [`NiftiSource`] reads the on-disk layout of image, segmentation and
//! prediction files; [`InMemorySource`] serves samples built in code.

mod nifti_source;
mod source;

pub use nifti_source::{
    read_intensity_volume, read_label_volume, NiftiSource, IMAGING_FILE, PREDICTION_EXTENSION,
    SEGMENTATION_FILE,
};
pub use source::{InMemorySource, SampleSource};
