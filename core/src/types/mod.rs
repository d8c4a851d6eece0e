//! Core type definitions for segmentation evaluation
//!
//! This module provides the fundamental types used throughout the segeval library:
//! - [`LabelVolume`], [`IntensityVolume`], [`RgbVolume`]: volume aliases
//! - [`Sample`]: one case with image, ground truth and prediction
//! - [`MetricKind`] and [`MetricVector`]: per-class scores
//! - [`OverlayPalette`]: label colours and blend weight for overlays
//! - [`EvaluationConfig`]: settings for an evaluation run

mod config;
mod metric;
mod palette;
mod volume;

pub(crate) use volume::ensure_same_shape;

pub use config::{EvaluationConfig, DEFAULT_CLASSES, DEFAULT_VISUALIZATION_DIR};
pub use metric::{MetricKind, MetricVector, ALL_METRICS};
pub use palette::{OverlayPalette, Rgb, BLUE, NO_COLOR, RED};
pub use volume::{IntensityVolume, LabelVolume, RgbVolume, Sample};
