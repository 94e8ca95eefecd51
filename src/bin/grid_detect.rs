use battlemap_grid::config::detect::load_config;
use battlemap_grid::detector::render_scaled;
use battlemap_grid::diagnostics::{DetailedResult, DetectionMethod};
use battlemap_grid::edges::sobel_magnitude;
use battlemap_grid::image::io::{load_rgba_image, save_grayscale_f32, write_json_file};
use battlemap_grid::image::{rgba_to_luma, RgbaBuffer};
use battlemap_grid::signal::AutocorrSample;
use battlemap_grid::GridDetector;
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let rgba = load_rgba_image(&config.input_path).map_err(|e| {
        format!("{} ({})", e, config.input_path.display())
    })?;
    println!(
        "Loaded {} ({}x{})",
        config.input_path.display(),
        rgba.width(),
        rgba.height()
    );

    let detector = GridDetector::new(config.grid_params.clone());
    let detailed = detector.detect_with_diagnostics(rgba.as_view(), config.manual_points());

    print_text_summary(&detector, &detailed);

    match &config.output.json_out {
        Some(path) => {
            write_json_file(path, &detailed)?;
            println!("\nJSON report written to {}", path.display());
        }
        None => {
            let json = serde_json::to_string_pretty(&detailed)
                .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
            println!("\nJSON report:\n{json}");
        }
    }

    if let Some(dir) = &config.output.debug_dir {
        save_debug_artifacts(dir, &rgba, &detector)?;
        println!("Debug artifacts written to {}", dir.display());
    }

    if detailed.method == DetectionMethod::Failed {
        return Err("insufficient periodic signal; no grid detected".to_string());
    }
    Ok(())
}

fn print_text_summary(detector: &GridDetector, detailed: &DetailedResult) {
    let trace = &detailed.trace;
    let params = detector.params();
    println!("Detection summary");
    println!("  method: {:?}", detailed.method);
    match &detailed.result {
        Some(grid) => {
            println!("  grid_size: {:.3}px", grid.grid_size);
            println!("  offset: ({:.3}, {:.3})", grid.x_offset, grid.y_offset);
        }
        None => println!("  grid: unavailable"),
    }
    println!(
        "  input: {}x{} processed: {}x{} (factor {:.4})",
        trace.input_width,
        trace.input_height,
        trace.scale.width,
        trace.scale.height,
        trace.scale.factor
    );
    for axis in [&trace.x, &trace.y].into_iter().flatten() {
        println!(
            "  axis {:?}: len={} window={} lags={}..={} period={} score={} offset={}",
            axis.axis,
            axis.length,
            axis.window,
            axis.lag_range.min,
            axis.lag_range.max,
            format_opt(axis.candidate.map(|c| c.value)),
            format_opt(axis.candidate.map(|c| format!("{:.3}", c.score))),
            format_opt(axis.offset),
        );
    }
    println!(
        "  combined_period: {} (min valid {:.1}, max dim {})",
        format_opt(trace.combined_period.map(|p| format!("{p:.2}"))),
        params.min_valid_period,
        params.max_processing_dim
    );
    let stages: Vec<String> = trace
        .timings
        .stages
        .iter()
        .map(|s| format!("{}={:.3}", s.label, s.elapsed_ms))
        .collect();
    println!(
        "\nTimings (ms): {} total={:.3}",
        stages.join(" "),
        trace.timings.total_ms
    );
}

fn format_opt<T: ToString>(val: Option<T>) -> String {
    val.map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn usage() -> String {
    "Usage: grid_detect <config.json>".to_string()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AxisDump<'a> {
    conditioned: &'a [f32],
    autocorrelation: &'a [AutocorrSample],
}

fn save_debug_artifacts(
    dir: &Path,
    rgba: &RgbaBuffer,
    detector: &GridDetector,
) -> Result<(), String> {
    std::fs::create_dir_all(dir)
        .map_err(|e| format!("Failed to create debug dir {}: {e}", dir.display()))?;

    let Some(analysis) = detector.analyze(rgba.as_view()) else {
        return Ok(());
    };
    let view = rgba.as_view();
    let scaled = render_scaled(&view, &analysis.scale);
    let luma = rgba_to_luma(&scaled.as_ref().map_or(view, RgbaBuffer::as_view));
    save_grayscale_f32(&luma, &dir.join("luma.png"))?;
    save_grayscale_f32(&sobel_magnitude(&luma), &dir.join("sobel_magnitude.png"))?;

    for axis in [&analysis.x, &analysis.y] {
        let name = format!("axis_{:?}.json", axis.axis).to_lowercase();
        let dump = AxisDump {
            conditioned: &axis.conditioned,
            autocorrelation: &axis.curve,
        };
        write_json_file(&dir.join(name), &dump)?;
    }
    Ok(())
}
