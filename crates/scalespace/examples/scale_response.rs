//! Example: gamma-normalized Laplacian response of a grayscale image.
//!
//! Loads a PNG, builds order-2 and order-0 kernels at the requested scale,
//! computes `L = Lxx + Lyy` with separable row/column sweeps, and writes a
//! contrast-stretched response PNG plus a JSON summary (extrema and the
//! strongest response location).
//!
//! Run from the workspace root:
//!   cargo run -p scalespace --example scale_response -- --help
//!   cargo run -p scalespace --example scale_response -- --input data/blobs.png

use anyhow::{Context, Result};
use clap::Parser;
use image::{GrayImage, ImageReader};
use scalespace::{Border, DerivativeKernel, KernelParams, correlate_cols_f64, correlate_rows_f64};
use serde::Serialize;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Gamma-normalized Laplacian response at a single scale")]
struct Args {
    /// Path to the input PNG (read as 8-bit grayscale)
    #[arg(long)]
    input: String,

    /// Gaussian sigma in pixels (variance = sigma^2)
    #[arg(long, default_value_t = 2.0)]
    sigma: f64,

    /// Gamma normalization parameter (1.0 = full scale normalization)
    #[arg(long, default_value_t = 1.0)]
    gamma: f64,

    /// Tail mass the kernels may omit
    #[arg(long, default_value_t = 0.005)]
    max_error: f64,

    /// Hard cap on kernel width
    #[arg(long, default_value_t = 63)]
    max_kernel_width: usize,

    /// Output PNG path (default: <input stem>_response.png next to input)
    #[arg(long)]
    out: Option<String>,
}

// ── JSON DTO ──────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct ResponseSummary {
    sigma: f64,
    gamma: f64,
    kernel_width: usize,
    truncated: bool,
    min: f64,
    max: f64,
    mean_abs: f64,
    /// Pixel with the strongest absolute response.
    peak_x: usize,
    peak_y: usize,
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let out_path = args.out.clone().unwrap_or_else(|| {
        let p = std::path::Path::new(&args.input);
        let stem = p.file_stem().unwrap_or_default().to_string_lossy();
        let dir = p.parent().unwrap_or(std::path::Path::new("."));
        dir.join(format!("{stem}_response.png"))
            .to_string_lossy()
            .into_owned()
    });

    let gray = ImageReader::open(&args.input)
        .with_context(|| format!("opening {}", args.input))?
        .decode()
        .with_context(|| format!("decoding {}", args.input))?
        .into_luma8();
    let width = gray.width() as usize;
    let height = gray.height() as usize;

    let data: Vec<f64> = gray.as_raw().iter().map(|&p| p as f64 / 255.0).collect();

    let base = KernelParams {
        variance: args.sigma * args.sigma,
        gamma: args.gamma,
        max_kernel_width: args.max_kernel_width,
        normalize_across_scale: true,
        ..KernelParams::default()
    }
    .with_max_error(args.max_error);

    let smooth = DerivativeKernel::generate(&KernelParams { order: 0, ..base.clone() })
        .context("generating smoothing kernel")?;
    let second = DerivativeKernel::generate(&KernelParams { order: 2, ..base })
        .context("generating second-derivative kernel")?;
    if second.truncated {
        eprintln!(
            "warning: kernel truncated at width {} for sigma {}",
            args.max_kernel_width, args.sigma
        );
    }
    println!(
        "kernels: smoothing width {}, derivative width {}",
        smooth.len(),
        second.len()
    );

    // Separable sweeps: Lxx = d2/dx2 on rows + smoothing on columns,
    // Lyy the other way around.
    let mut tmp = vec![0.0f64; data.len()];
    let mut lxx = vec![0.0f64; data.len()];
    let mut lyy = vec![0.0f64; data.len()];

    correlate_rows_f64(&data, width, height, &second.coefficients, Border::Reflect, &mut tmp);
    correlate_cols_f64(&tmp, width, height, &smooth.coefficients, Border::Reflect, &mut lxx);

    correlate_cols_f64(&data, width, height, &second.coefficients, Border::Reflect, &mut tmp);
    correlate_rows_f64(&tmp, width, height, &smooth.coefficients, Border::Reflect, &mut lyy);

    let response: Vec<f64> = lxx.iter().zip(&lyy).map(|(a, b)| a + b).collect();

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut mean_abs = 0.0;
    let mut peak = (0usize, 0.0f64);
    for (i, &r) in response.iter().enumerate() {
        min = min.min(r);
        max = max.max(r);
        mean_abs += r.abs();
        if r.abs() > peak.1 {
            peak = (i, r.abs());
        }
    }
    mean_abs /= response.len() as f64;

    let summary = ResponseSummary {
        sigma: args.sigma,
        gamma: args.gamma,
        kernel_width: second.len(),
        truncated: second.truncated,
        min,
        max,
        mean_abs,
        peak_x: peak.0 % width,
        peak_y: peak.0 / width,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    // Contrast-stretch into u8 for inspection.
    let span = (max - min).max(f64::EPSILON);
    let pixels: Vec<u8> = response
        .iter()
        .map(|&r| (255.0 * (r - min) / span).round() as u8)
        .collect();
    let out_img = GrayImage::from_raw(width as u32, height as u32, pixels)
        .context("building response image")?;
    out_img
        .save(&out_path)
        .with_context(|| format!("writing {out_path}"))?;
    println!("response written to {out_path}");

    Ok(())
}
