use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use ohmscan_core::detect::{DetectorConfig, MergePolicy};
use ohmscan_core::io::image_io::{load_rgb, save_rgb};
use ohmscan_core::overlay::draw_window_outline;
use ohmscan_core::pipeline::{scan_frame, FrameAnalysis};

/// Overlay stroke color for the analysis window border.
const OUTLINE_COLOR: [u8; 3] = [255, 0, 0];
const OUTLINE_THICKNESS: usize = 2;

#[derive(Clone, ValueEnum)]
pub enum PolicyArg {
    KeepLargest,
    KeepExisting,
}

#[derive(Args)]
pub struct ScanArgs {
    /// Input image file(s)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Detector configuration TOML file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Slot-merge policy override
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,

    /// Write annotated copies of the inputs into this directory
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &ScanArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(policy) = &args.policy {
        config.merge_policy = match policy {
            PolicyArg::KeepLargest => MergePolicy::KeepLargest,
            PolicyArg::KeepExisting => MergePolicy::KeepExisting,
        };
    }

    debug!(policy = ?config.merge_policy, min_area = config.min_band_area, "detector configured");

    if let Some(dir) = &args.output {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
    }

    let pb = if args.files.len() > 1 {
        let pb = ProgressBar::new(args.files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{bar:40}] {pos}/{len}")?
                .progress_chars("=> "),
        );
        pb.set_message("Scanning");
        Some(pb)
    } else {
        None
    };

    let mut detected = 0usize;
    for file in &args.files {
        let frame = load_rgb(file).with_context(|| format!("loading {}", file.display()))?;
        let analysis = scan_frame(&frame, &config)
            .with_context(|| format!("scanning {}", file.display()))?;

        if let Some(pb) = &pb {
            pb.inc(1);
        }

        report(file, &analysis, pb.as_ref());
        if analysis.reading.is_some() {
            detected += 1;
        }

        if let Some(dir) = &args.output {
            let annotated =
                draw_window_outline(&frame, &analysis.window, OUTLINE_COLOR, OUTLINE_THICKNESS);
            let name = file.file_name().context("input path has no file name")?;
            let out_path = dir.join(name).with_extension("png");
            save_rgb(&annotated, &out_path)
                .with_context(|| format!("saving {}", out_path.display()))?;
        }
    }

    if let Some(pb) = &pb {
        pb.finish_with_message(format!("{} of {} decoded", detected, args.files.len()));
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<DetectorConfig> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
        }
        None => Ok(DetectorConfig::default()),
    }
}

fn report(file: &Path, analysis: &FrameAnalysis, pb: Option<&ProgressBar>) {
    let line = match &analysis.reading {
        Some(reading) => {
            let bands = reading
                .bands
                .iter()
                .map(|b| b.name())
                .collect::<Vec<_>>()
                .join("-");
            format!(
                "{}: {}  ({} ohm, bands {})",
                file.display(),
                style(&reading.label).green().bold(),
                reading.ohms,
                bands
            )
        }
        None => format!("{}: {}", file.display(), style("no value detected").dim()),
    };

    match pb {
        Some(pb) => pb.println(line),
        None => println!("{line}"),
    }
}
