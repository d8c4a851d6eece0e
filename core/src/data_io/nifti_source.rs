use crate::data_io::source::SampleSource;
use crate::error::{Result, SegevalError};
use crate::types::{IntensityVolume, LabelVolume, Sample};
use log::{debug, info};
use ndarray::{ArrayD, Axis, Ix3};
use nifti::{IntoNdArray, NiftiObject, ReaderOptions};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Intensity volume file inside a sample directory
pub const IMAGING_FILE: &str = "imaging.nii.gz";

/// Ground-truth file inside a sample directory
pub const SEGMENTATION_FILE: &str = "segmentation.nii.gz";

/// Extension of prediction files, named after the sample
pub const PREDICTION_EXTENSION: &str = "nii.gz";

/// NIfTI samples on disk
///
/// Layout:
/// - `<data_dir>/<id>/imaging.nii.gz`
/// - `<data_dir>/<id>/segmentation.nii.gz`
/// - `<predictions_dir>/<id>.nii.gz`
///
/// Only directories that contain an imaging file are indexed.
#[derive(Debug, Clone)]
pub struct NiftiSource {
    data_dir: PathBuf,
    predictions_dir: PathBuf,
    pattern: Option<Regex>,
}

impl NiftiSource {
    /// Creates a source over a data directory and a predictions directory
    pub fn new(data_dir: impl Into<PathBuf>, predictions_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            predictions_dir: predictions_dir.into(),
            pattern: None,
        }
    }

    /// Builder: only index sample identifiers matching `pattern`
    ///
    /// # Errors
    ///
    /// Returns [`SegevalError::InvalidPattern`] if the regex does not compile.
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        self.pattern = Some(Regex::new(pattern)?);
        Ok(self)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn predictions_dir(&self) -> &Path {
        &self.predictions_dir
    }

    fn sample_dir(&self, id: &str) -> PathBuf {
        self.data_dir.join(id)
    }

    fn prediction_path(&self, id: &str) -> PathBuf {
        self.predictions_dir
            .join(format!("{}.{}", id, PREDICTION_EXTENSION))
    }

    fn matches(&self, id: &str) -> bool {
        self.pattern.as_ref().map_or(true, |re| re.is_match(id))
    }
}

impl SampleSource for NiftiSource {
    fn indices(&self) -> Result<Vec<String>> {
        let mut ids = Vec::new();

        for entry in fs::read_dir(&self.data_dir)? {
            let entry = entry?;
            let path = entry.path();

            if !path.join(IMAGING_FILE).is_file() {
                continue;
            }

            if let Some(id) = path.file_name().and_then(|n| n.to_str()) {
                if self.matches(id) {
                    ids.push(id.to_string());
                } else {
                    debug!("Skipping {}: does not match sample pattern", id);
                }
            }
        }

        ids.sort();
        info!("Indexed {} samples in {}", ids.len(), self.data_dir.display());
        Ok(ids)
    }

    fn load(&self, id: &str) -> Result<Sample> {
        let dir = self.sample_dir(id);
        let imaging = dir.join(IMAGING_FILE);
        if !imaging.is_file() {
            return Err(SegevalError::SampleNotFound(id.to_string()));
        }

        debug!("Loading sample {} from {}", id, dir.display());
        let image = read_intensity_volume(&imaging)?;
        let truth = read_label_volume(&dir.join(SEGMENTATION_FILE))?;
        let pred = read_label_volume(&self.prediction_path(id))?;

        Sample::new(id, image, truth, pred)
    }
}

/// Reads a 3-D volume, dropping a trailing single-channel axis
fn read_volume(path: &Path) -> Result<ArrayD<f32>> {
    let obj = ReaderOptions::new().read_file(path)?;
    let mut volume: ArrayD<f32> = obj.into_volume().into_ndarray::<f32>()?;

    if volume.ndim() == 4 && volume.shape()[3] == 1 {
        volume = volume.index_axis_move(Axis(3), 0);
    }

    if volume.ndim() != 3 {
        return Err(SegevalError::InvalidVolume(format!(
            "{}: expected 3 dimensions, found shape {:?}",
            path.display(),
            volume.shape()
        )));
    }

    Ok(volume)
}

/// Reads an intensity volume
pub fn read_intensity_volume(path: &Path) -> Result<IntensityVolume> {
    Ok(read_volume(path)?.into_dimensionality::<Ix3>()?)
}

/// Reads a label volume, requiring integral values in 0..=255
pub fn read_label_volume(path: &Path) -> Result<LabelVolume> {
    let volume = read_volume(path)?.into_dimensionality::<Ix3>()?;

    if let Some(bad) = volume
        .iter()
        .find(|v| !v.is_finite() || **v < 0.0 || **v > 255.0 || v.fract() != 0.0)
    {
        return Err(SegevalError::InvalidVolume(format!(
            "{}: {} is not a valid label",
            path.display(),
            bad
        )));
    }

    Ok(volume.mapv(|v| v as u8))
}
