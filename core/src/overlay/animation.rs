use crate::error::{Result, SegevalError};
use crate::overlay::composite::overlay_segmentation;
use crate::types::{ensure_same_shape, OverlayPalette, RgbVolume, Sample};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, Rgba, RgbaImage};
use log::{debug, info};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Width in pixels of the white column between the two panels
pub const GUTTER_WIDTH: u32 = 8;

/// 20 frames per second
pub const FRAME_DELAY_MS: u32 = 50;

/// Minimum width of the zero-padded sample id in file names
pub const ID_WIDTH: usize = 5;

/// NeuQuant sampling speed (1 = best quality, 30 = fastest)
const QUANTIZER_SPEED: i32 = 10;

const GUTTER: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// File name for a sample's comparison animation
///
/// ```
/// use segeval_core::overlay::visualization_file_name;
///
/// assert_eq!(visualization_file_name("7"), "visualization.00007.gif");
/// assert_eq!(visualization_file_name("case_00012"), "visualization.case_00012.gif");
/// ```
pub fn visualization_file_name(case_id: &str) -> String {
    format!("visualization.{:0>width$}.gif", case_id, width = ID_WIDTH)
}

fn to_u32(value: usize) -> Result<u32> {
    u32::try_from(value)
        .map_err(|_| SegevalError::InvalidVolume(format!("dimension {} too large", value)))
}

/// Renders slice `k` of both overlays side by side
///
/// Frame rows follow the first axis and columns the second; the truth
/// panel is on the left.
pub fn render_comparison_frame(truth: &RgbVolume, pred: &RgbVolume, k: usize) -> Result<RgbaImage> {
    ensure_same_shape(truth.shape(), pred.shape())?;

    let (rows, cols) = (truth.shape()[0], truth.shape()[1]);
    let depth = truth.shape()[2];
    if k >= depth {
        return Err(SegevalError::InvalidVolume(format!(
            "slice {} out of range for depth {}",
            k, depth
        )));
    }

    let panel_width = to_u32(cols)?;
    let height = to_u32(rows)?;
    let width = 2 * panel_width + GUTTER_WIDTH;

    let mut frame = RgbaImage::from_pixel(width, height, GUTTER);
    for (offset, volume) in [(0, truth), (panel_width + GUTTER_WIDTH, pred)] {
        for i in 0..rows {
            for j in 0..cols {
                let pixel = Rgba([
                    volume[[i, j, k, 0]],
                    volume[[i, j, k, 1]],
                    volume[[i, j, k, 2]],
                    255,
                ]);
                frame.put_pixel(offset + j as u32, i as u32, pixel);
            }
        }
    }

    Ok(frame)
}

/// Writes an animated GIF comparing truth and prediction overlays
///
/// One frame per slice along the third axis, looping forever. Creates
/// `out_dir` when missing and returns the written path.
///
/// # Errors
///
/// Returns an error if the overlays differ in shape, have no slices, or the
/// file cannot be written.
pub fn write_comparison_gif(
    case_id: &str,
    truth: &RgbVolume,
    pred: &RgbVolume,
    out_dir: &Path,
) -> Result<PathBuf> {
    ensure_same_shape(truth.shape(), pred.shape())?;

    let depth = truth.shape()[2];
    if depth == 0 {
        return Err(SegevalError::InvalidVolume(format!(
            "sample {} has no slices",
            case_id
        )));
    }

    if !out_dir.exists() {
        debug!("Creating output directory: {}", out_dir.display());
        fs::create_dir_all(out_dir)?;
    }

    let frames = (0..depth)
        .map(|k| {
            let buffer = render_comparison_frame(truth, pred, k)?;
            Ok(Frame::from_parts(
                buffer,
                0,
                0,
                Delay::from_numer_denom_ms(FRAME_DELAY_MS, 1),
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    let out_path = out_dir.join(visualization_file_name(case_id));
    let file = File::create(&out_path)?;
    let mut encoder = GifEncoder::new_with_speed(BufWriter::new(file), QUANTIZER_SPEED);
    encoder.set_repeat(Repeat::Infinite)?;
    encoder.encode_frames(frames)?;

    info!("Wrote {} frames to {}", depth, out_path.display());
    Ok(out_path)
}

/// Overlays truth and prediction of a sample and writes the comparison GIF
pub fn visualize_sample(sample: &Sample, palette: &OverlayPalette, out_dir: &Path) -> Result<PathBuf> {
    let truth = overlay_segmentation(&sample.image, &sample.truth, palette)?;
    let pred = overlay_segmentation(&sample.image, &sample.pred, palette)?;
    write_comparison_gif(&sample.id, &truth, &pred, out_dir)
}
