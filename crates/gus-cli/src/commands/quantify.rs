use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use gus_cli::{find_images, panel_path, process_single_image, ProcessedImage, ThresholdArgs};
use gus_core::exporters::{export_panels_png, write_results_csv, CsvLayout, ResultRow};

/// Settings for a batch run
pub struct QuantifyOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Validation panel directory, when panels were requested
    pub plots_dir: Option<PathBuf>,
    pub recursive: bool,
    pub threads: Option<usize>,
    pub thresholds: ThresholdArgs,
}

pub fn cmd_quantify(opts: QuantifyOptions) -> Result<(), String> {
    let batch_start = Instant::now();

    let params = opts.thresholds.resolve()?;
    let inputs = find_images(&opts.input, opts.recursive)?;

    if inputs.is_empty() {
        println!(
            "No images found in {} (supported: .png, .jpg, .jpeg, .tif, .tiff)",
            opts.input.display()
        );
        return Ok(());
    }

    println!("Found {} image files to process", inputs.len());

    // Configure thread pool if specified
    if let Some(num_threads) = opts.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        println!("Using {} threads for parallel processing", num_threads);
    }

    if let Some(plots_dir) = &opts.plots_dir {
        std::fs::create_dir_all(plots_dir)
            .map_err(|e| format!("Failed to create plots directory: {}", e))?;
    }

    println!(
        "Stain HSV range: {:?} - {:?}, root S >= {}, V <= {}\n",
        <[u8; 3]>::from(params.stain.lower),
        <[u8; 3]>::from(params.stain.upper),
        params.root.saturation_min,
        params.root.value_max
    );

    // Progress tracking
    let processed_count = AtomicUsize::new(0);
    let total_files = inputs.len();

    // Process files in parallel; collect keeps discovery order
    let results: Vec<Result<ResultRow, String>> = inputs
        .par_iter()
        .map(|input| {
            let processed = process_single_image(input, &params)?;

            if let Some(plots_dir) = &opts.plots_dir {
                let path = panel_path(plots_dir, &opts.input, input);
                if let Err(e) = write_panel(&path, &processed) {
                    log::warn!("Panel for {} not written: {}", input.display(), e);
                }
            }

            let row = processed.row();
            let count = processed_count.fetch_add(1, Ordering::SeqCst) + 1;
            println!(
                "[{}/{}] {}: {:.2}% ({} / {} root pixels)",
                count,
                total_files,
                row.file_name,
                row.metrics.percentage,
                row.metrics.stain_pixels,
                row.metrics.root_pixels
            );
            Ok(row)
        })
        .collect();

    // Decode failures are skipped, not fatal
    let mut rows = Vec::with_capacity(results.len());
    for (input, result) in inputs.iter().zip(results) {
        match result {
            Ok(row) => rows.push(row),
            Err(e) => log::warn!("Skipping {}: {}", input.display(), e),
        }
    }

    let skipped = total_files - rows.len();
    if rows.is_empty() {
        println!("\nNo images could be processed; no CSV written.");
        return Ok(());
    }

    write_results_csv(&opts.output, &rows, CsvLayout::Batch)?;

    let elapsed = batch_start.elapsed().as_secs_f64();
    println!("\n========================================");
    println!("Quantification complete in {:.2}s", elapsed);
    println!("  Processed: {}", rows.len());
    if skipped > 0 {
        println!("  Skipped:   {}", skipped);
    }
    println!("  Results saved to {}", opts.output.display());
    if let Some(plots_dir) = &opts.plots_dir {
        println!("  Validation panels saved to {}", plots_dir.display());
    }

    Ok(())
}

fn write_panel(path: &Path, processed: &ProcessedImage) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
    }
    export_panels_png(path, &processed.image, &processed.result)
}
