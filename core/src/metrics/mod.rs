//! Per-class overlap metrics
//!
//! Every metric is derived from a [`ClassConfusion`] tally, one-vs-rest per
//! class index. Ratios with an empty denominator score 0.0.

mod confusion;
mod scores;

pub use confusion::{tally, ClassConfusion};
pub use scores::{
    calc_dice, calc_metric, calc_sensitivity, calc_specificity, scores_from_counts,
};
