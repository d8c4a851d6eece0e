//! Segmentation overlays and comparison animations

mod animation;
mod composite;

pub use animation::{
    render_comparison_frame, visualization_file_name, visualize_sample, write_comparison_gif,
    FRAME_DELAY_MS, GUTTER_WIDTH, ID_WIDTH,
};
pub use composite::{overlay_segmentation, to_greyscale};
