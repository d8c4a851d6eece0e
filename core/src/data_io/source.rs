use crate::error::{Result, SegevalError};
use crate::types::Sample;
use std::collections::BTreeMap;

/// Provider of evaluation samples
///
/// Implementations expose a sorted list of sample identifiers and load the
/// image, ground truth and prediction for each of them.
pub trait SampleSource {
    /// Available sample identifiers, sorted ascending
    fn indices(&self) -> Result<Vec<String>>;

    /// Loads one sample
    ///
    /// # Errors
    ///
    /// Returns [`SegevalError::SampleNotFound`] for unknown identifiers.
    fn load(&self, id: &str) -> Result<Sample>;
}

/// Samples held in memory, keyed by identifier
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    samples: BTreeMap<String, Sample>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a sample, replacing any sample with the same identifier
    pub fn insert(&mut self, sample: Sample) {
        self.samples.insert(sample.id.clone(), sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl FromIterator<Sample> for InMemorySource {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        let mut source = Self::new();
        for sample in iter {
            source.insert(sample);
        }
        source
    }
}

impl SampleSource for InMemorySource {
    fn indices(&self) -> Result<Vec<String>> {
        Ok(self.samples.keys().cloned().collect())
    }

    fn load(&self, id: &str) -> Result<Sample> {
        self.samples
            .get(id)
            .cloned()
            .ok_or_else(|| SegevalError::SampleNotFound(id.to_string()))
    }
}
