use serde::Serialize;
use std::path::PathBuf;

use gus_cli::{process_single_image, ThresholdArgs};
use gus_core::exporters::{export_mask_png, export_panels_png};
use gus_core::models::{QuantifyParams, StainMetrics};

/// Analysis result structure for JSON output.
#[derive(Serialize)]
pub struct AnalysisResult {
    pub file: String,
    pub dimensions: [u32; 2],
    pub params: QuantifyParams,
    #[serde(flatten)]
    pub metrics: StainMetrics,
}

pub fn cmd_analyze(
    input: PathBuf,
    save: Option<PathBuf>,
    panel: Option<PathBuf>,
    masks: Option<PathBuf>,
    thresholds: ThresholdArgs,
) -> Result<(), String> {
    let params = thresholds.resolve()?;
    let processed = process_single_image(&input, &params)?;
    let metrics = processed.result.metrics;

    println!("{}", processed.file_name);
    println!(
        "  Image:        {}x{}",
        processed.image.width(),
        processed.image.height()
    );
    println!("  Root pixels:  {}", metrics.root_pixels);
    println!("  Blue pixels:  {}", metrics.stain_pixels);
    println!("  Coverage:     {:.2}%", metrics.percentage);
    if !metrics.has_root() {
        println!("  (no root tissue detected)");
    }

    if let Some(panel_path) = panel {
        export_panels_png(&panel_path, &processed.image, &processed.result)?;
        println!("Validation panel saved to {}", panel_path.display());
    }

    if let Some(masks_dir) = masks {
        std::fs::create_dir_all(&masks_dir)
            .map_err(|e| format!("Failed to create masks directory: {}", e))?;
        let root_path = masks_dir.join(format!("{}_root_mask.png", processed.file_name));
        let stain_path = masks_dir.join(format!("{}_stain_mask.png", processed.file_name));
        export_mask_png(&root_path, &processed.result.root_mask)?;
        export_mask_png(&stain_path, &processed.result.stain_mask)?;
        println!("Masks saved to {}", masks_dir.display());
    }

    if let Some(save_path) = save {
        let analysis = AnalysisResult {
            file: processed.file_name.clone(),
            dimensions: [processed.image.width(), processed.image.height()],
            params,
            metrics,
        };
        let json = serde_json::to_string_pretty(&analysis)
            .map_err(|e| format!("Failed to serialize analysis: {}", e))?;
        std::fs::write(&save_path, json)
            .map_err(|e| format!("Failed to write analysis file: {}", e))?;
        println!("Analysis saved to {}", save_path.display());
    }

    Ok(())
}
