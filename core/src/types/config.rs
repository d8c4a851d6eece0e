use crate::types::OverlayPalette;
use std::path::PathBuf;

/// Default class count: background, left lung, right lung, lesion
pub const DEFAULT_CLASSES: usize = 4;

/// Default directory for comparison animations
pub const DEFAULT_VISUALIZATION_DIR: &str = "evaluation/visualization";

/// Configuration for an evaluation run
///
/// # Example
///
/// ```
/// use segeval_core::EvaluationConfig;
///
/// let config = EvaluationConfig::default()
///     .with_classes(3)
///     .visualize(true)
///     .with_limit(10);
///
/// assert_eq!(config.classes, 3);
/// assert!(config.visualize);
/// assert_eq!(config.limit, Some(10));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluationConfig {
    /// Number of classes, including background
    pub classes: usize,

    /// Write a comparison GIF per sample
    pub visualize: bool,

    /// Output directory for comparison GIFs
    pub visualization_dir: PathBuf,

    /// Evaluate at most this many samples
    pub limit: Option<usize>,

    /// Overlay colours for the comparison GIFs
    pub palette: OverlayPalette,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            classes: DEFAULT_CLASSES,
            visualize: false,
            visualization_dir: PathBuf::from(DEFAULT_VISUALIZATION_DIR),
            limit: None,
            palette: OverlayPalette::default(),
        }
    }
}

impl EvaluationConfig {
    /// Builder: Set class count
    pub fn with_classes(mut self, classes: usize) -> Self {
        self.classes = classes;
        self
    }

    /// Builder: Enable or disable comparison GIFs
    pub fn visualize(mut self, enabled: bool) -> Self {
        self.visualize = enabled;
        self
    }

    /// Builder: Set output directory for comparison GIFs
    ///
    /// # Example
    ///
    /// ```
    /// use segeval_core::EvaluationConfig;
    /// use std::path::Path;
    ///
    /// let config = EvaluationConfig::default().with_visualization_dir("out/gifs");
    /// assert_eq!(config.visualization_dir, Path::new("out/gifs"));
    /// ```
    pub fn with_visualization_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.visualization_dir = dir.into();
        self
    }

    /// Builder: Cap the number of evaluated samples
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Builder: Set overlay palette
    pub fn with_palette(mut self, palette: OverlayPalette) -> Self {
        self.palette = palette;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EvaluationConfig::default();
        assert_eq!(config.classes, 4);
        assert!(!config.visualize);
        assert_eq!(
            config.visualization_dir,
            PathBuf::from("evaluation/visualization")
        );
        assert!(config.limit.is_none());
        assert_eq!(config.palette, OverlayPalette::default());
    }

    #[test]
    fn test_builder_chain() {
        let palette = OverlayPalette::empty().with_color(1, [10, 20, 30]);
        let config = EvaluationConfig::default()
            .with_classes(2)
            .with_palette(palette.clone())
            .visualize(true);

        assert_eq!(config.classes, 2);
        assert_eq!(config.palette, palette);
        assert!(config.visualize);
    }
}
