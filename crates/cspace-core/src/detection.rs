use crate::args::Args;
use crate::config::Config;
use crate::frame::Frame;
use crate::input::{load_bgr_image, sanitize_path};
use anyhow::Context;
use cspace_detection::{process_with_policy, SliderPositions};
use serde::Serialize;
use std::path::PathBuf;

/// Summary printed after a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub out_path: PathBuf,
    pub cspace_label: String,
    pub lower_bound: Vec<f64>,
    pub upper_bound: Vec<f64>,
}

// Loads the image, thresholds it and writes the mask.
pub fn run_threshold(args: &Args, config: &Config) -> anyhow::Result<Report> {
    // Slider count is an argument error, report it before touching the file.
    SliderPositions::try_from(args.sliders.as_slice())?;
    let image_path = sanitize_path(&args.image)?;
    let out_path = args
        .output
        .clone()
        .unwrap_or_else(|| config.output.path.clone());

    tracing::info!(
        image = %image_path.display(),
        cspace = %args.cspace,
        sliders = ?args.sliders,
        "thresholding image"
    );

    let image = load_bgr_image(&image_path)?;
    let output = process_with_policy(
        image.view(),
        args.cspace.label(),
        &args.sliders,
        config.threshold.slider_policy,
    )?;

    Frame::from_mask(output.mask.view())
        .and_then(|frame| frame.save(&out_path))
        .with_context(|| format!("failed to write mask to {}", out_path.display()))?;
    tracing::info!(path = %out_path.display(), "saved mask");

    Ok(Report {
        out_path,
        cspace_label: output.cspace_label,
        lower_bound: output.lower_bound,
        upper_bound: output.upper_bound,
    })
}
