use std::collections::BTreeMap;

/// RGB colour triple
pub type Rgb = [u8; 3];

pub const BLUE: Rgb = [0, 0, 255];
pub const RED: Rgb = [255, 0, 0];
pub const NO_COLOR: Rgb = [0, 0, 0];

/// Label-to-colour table and blend weight used for segmentation overlays
///
/// Labels without an entry get [`NO_COLOR`]; they are still blended, so
/// they show up as darkened greyscale.
///
/// # Example
///
/// ```
/// use segeval_core::OverlayPalette;
///
/// let palette = OverlayPalette::default()
///     .with_color(4, [0, 255, 0])
///     .with_alpha(0.5);
///
/// assert_eq!(palette.color_for(1), [0, 0, 255]);
/// assert_eq!(palette.color_for(4), [0, 255, 0]);
/// assert_eq!(palette.color_for(9), [0, 0, 0]);
/// assert_eq!(palette.alpha(), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct OverlayPalette {
    colors: BTreeMap<u8, Rgb>,
    alpha: f64,
}

impl Default for OverlayPalette {
    /// Classes 1 and 2 blue, class 3 red, 30% colour weight
    fn default() -> Self {
        let mut colors = BTreeMap::new();
        colors.insert(1, BLUE);
        colors.insert(2, BLUE);
        colors.insert(3, RED);
        Self { colors, alpha: 0.3 }
    }
}

impl OverlayPalette {
    /// Palette with no colours at all
    pub fn empty() -> Self {
        Self {
            colors: BTreeMap::new(),
            alpha: 0.3,
        }
    }

    /// Builder: assign a colour to a label
    pub fn with_color(mut self, label: u8, color: Rgb) -> Self {
        self.colors.insert(label, color);
        self
    }

    /// Builder: set the colour weight, clamped to [0, 1]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Colour for a label, [`NO_COLOR`] when unmapped
    pub fn color_for(&self, label: u8) -> Rgb {
        self.colors.get(&label).copied().unwrap_or(NO_COLOR)
    }
}
