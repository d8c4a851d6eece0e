use crate::error::Result;
use crate::types::{ensure_same_shape, IntensityVolume, LabelVolume, OverlayPalette, RgbVolume};
use ndarray::Array3;

/// Scales intensities to 0..=255 using the global min and max
///
/// A constant volume maps to 0 everywhere. Values are rounded half to even.
pub fn to_greyscale(vol: &IntensityVolume) -> Array3<u8> {
    let (min, max) = vol.iter().fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    });
    let range = f64::from(max) - f64::from(min);

    if !(range.is_finite() && range > 0.0) {
        return Array3::zeros(vol.raw_dim());
    }

    vol.mapv(|v| {
        let scaled = (f64::from(v) - f64::from(min)) / range;
        (scaled * 255.0).round_ties_even() as u8
    })
}

/// Weighted sum of a colour channel and a grey value
fn blend(color: u8, grey: u8, alpha: f64) -> u8 {
    (alpha * f64::from(color) + (1.0 - alpha) * f64::from(grey)).round_ties_even() as u8
}

/// Colours a greyscale rendition of `vol` by the labels in `seg`
///
/// Voxels with label 0 keep their pure greyscale value. Every other voxel
/// becomes `alpha * colour + (1 - alpha) * grey`, where unmapped labels
/// contribute black.
///
/// # Errors
///
/// Returns an error if `vol` and `seg` differ in shape.
///
/// # Example
///
/// ```
/// use ndarray::Array3;
/// use segeval_core::{overlay_segmentation, OverlayPalette};
///
/// let vol = Array3::from_shape_vec((1, 1, 2), vec![0.0_f32, 1.0]).unwrap();
/// let seg = Array3::from_shape_vec((1, 1, 2), vec![0_u8, 0]).unwrap();
///
/// let rgb = overlay_segmentation(&vol, &seg, &OverlayPalette::default()).unwrap();
/// assert_eq!(rgb.shape(), &[1, 1, 2, 3]);
/// assert_eq!(rgb[[0, 0, 1, 0]], 255);
/// ```
pub fn overlay_segmentation(
    vol: &IntensityVolume,
    seg: &LabelVolume,
    palette: &OverlayPalette,
) -> Result<RgbVolume> {
    ensure_same_shape(vol.shape(), seg.shape())?;

    let grey = to_greyscale(vol);
    let (x, y, z) = grey.dim();
    let alpha = palette.alpha();

    Ok(RgbVolume::from_shape_fn((x, y, z, 3), |(i, j, k, c)| {
        let g = grey[[i, j, k]];
        match seg[[i, j, k]] {
            0 => g,
            label => blend(palette.color_for(label)[c], g, alpha),
        }
    }))
}
