use std::fmt;

/// Per-class overlap metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum MetricKind {
    /// Dice similarity coefficient
    Dice,
    /// True positive rate
    Sensitivity,
    /// True negative rate
    Specificity,
}

/// All metric kinds in report order
pub const ALL_METRICS: [MetricKind; 3] = [
    MetricKind::Dice,
    MetricKind::Sensitivity,
    MetricKind::Specificity,
];

impl MetricKind {
    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            MetricKind::Dice => "dsc",
            MetricKind::Sensitivity => "sens",
            MetricKind::Specificity => "spec",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MetricKind::Dice => "Dice",
            MetricKind::Sensitivity => "Sensitivity",
            MetricKind::Specificity => "Specificity",
        };
        write!(f, "{}", name)
    }
}

/// One score per class index, each in [0, 1]
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(transparent))]
pub struct MetricVector(Vec<f64>);

impl MetricVector {
    /// Wraps per-class scores
    pub fn new(scores: Vec<f64>) -> Self {
        Self(scores)
    }

    /// Number of classes covered
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Score of a single class
    pub fn get(&self, class: usize) -> Option<f64> {
        self.0.get(class).copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.0.iter()
    }
}

impl From<Vec<f64>> for MetricVector {
    fn from(scores: Vec<f64>) -> Self {
        Self(scores)
    }
}

impl fmt::Display for MetricVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, score) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.4}", score)?;
        }
        write!(f, "]")
    }
}
