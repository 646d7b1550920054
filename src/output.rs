//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Settings banner (always)
//!
//! ```text
//! ----------------------------------------------------------------------------------------------------
//! input: photos
//! output: photos/output
//! delete_existing_output_folder: false
//! resolution: 1920x1080
//! max_factor_change: 0.1
//! verbose: true
//! ----------------------------------------------------------------------------------------------------
//! ```
//!
//! ## Per image
//!
//! Always one line; verbose adds the decision behind it:
//!
//! ```text
//! [2/3] Img 'photos/portrait.jpg' -> 'photos/output/portrait_resize_and_cropped.jpg'
//!     Crop needed, img resolution 1080x1920 px, aspect ratio 0.5625 | target resolution 1920x1080 px, aspect ratio 1.7777777777777777 | change factor 0.68359375 greater than 0.1
//!     Crop vertically
//!     New aspect ratio 1.6 | new change factor 0.0999999999999999
//!     New size 1080x675 px, aspect ratio 1.6 | cropped top and bottom by 622 px
//! ```
//!
//! ## Summary (verbose)
//!
//! ```text
//! Total execution time: 1.42 seconds
//! ```
//!
//! # Architecture
//!
//! Each section has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::config::BatchConfig;
use crate::imaging::{Crop, CropAxis, TransformPlan, change_factor};
use crate::process::{BatchSummary, ProcessEvent};
use std::path::Path;

const RULE_WIDTH: usize = 100;

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

// ============================================================================
// Settings banner
// ============================================================================

/// Format the effective settings, framed by horizontal rules.
pub fn format_settings(input: &Path, output: &Path, config: &BatchConfig) -> Vec<String> {
    let rule = "-".repeat(RULE_WIDTH);
    vec![
        rule.clone(),
        format!("input: {}", input.display()),
        format!("output: {}", output.display()),
        format!(
            "delete_existing_output_folder: {}",
            config.delete_existing_output
        ),
        format!("resolution: {}", config.resolution),
        format!("max_factor_change: {}", config.max_factor_change),
        format!("verbose: {}", config.verbose),
        rule,
    ]
}

pub fn print_settings(input: &Path, output: &Path, config: &BatchConfig) {
    for line in format_settings(input, output, config) {
        println!("{line}");
    }
}

// ============================================================================
// Progress events
// ============================================================================

/// Format a progress event. Non-verbose output keeps only the per-image line.
pub fn format_process_event(event: &ProcessEvent, verbose: bool) -> Vec<String> {
    match event {
        ProcessEvent::OutputCleared { path } if verbose => {
            vec![format!("Deleting existing output folder: {}", path.display())]
        }
        ProcessEvent::OutputCleared { .. } => Vec::new(),
        ProcessEvent::Started { total, output_dir } if verbose => vec![format!(
            "Processing {} image{} into {}",
            total,
            if *total == 1 { "" } else { "s" },
            output_dir.display()
        )],
        ProcessEvent::Started { .. } => Vec::new(),
        ProcessEvent::ImagePlanned {
            index,
            total,
            source,
            output,
            plan,
        } => {
            let mut lines = vec![format!(
                "[{index}/{total}] Img '{}' -> '{}'",
                source.display(),
                output.display()
            )];
            if verbose {
                lines.extend(
                    format_plan(plan)
                        .into_iter()
                        .map(|line| format!("{}{}", indent(1), line)),
                );
            }
            lines
        }
    }
}

/// Explain a transform plan: the decision, then crop details if any.
pub fn format_plan(plan: &TransformPlan) -> Vec<String> {
    let (verdict, relation) = match plan.crop {
        Crop::None => ("No crop needed", "smaller than or equal to"),
        _ => ("Crop needed", "greater than"),
    };
    let mut lines = vec![format!(
        "{verdict}, img resolution {} px, aspect ratio {} | target resolution {} px, aspect ratio {} | change factor {} {relation} {}",
        plan.source,
        plan.source_aspect,
        plan.target,
        plan.target_aspect,
        plan.change_factor,
        plan.max_change_factor
    )];

    let (new_aspect, trimmed) = match plan.crop {
        Crop::None => return lines,
        Crop::Horizontal {
            left_offset,
            new_aspect,
            ..
        } => (new_aspect, format!("cropped each side by {left_offset} px")),
        Crop::Vertical {
            top_offset,
            new_aspect,
            ..
        } => (
            new_aspect,
            format!("cropped top and bottom by {top_offset} px"),
        ),
    };
    let axis = match plan.crop.axis() {
        Some(CropAxis::Horizontal) => "horizontally",
        _ => "vertically",
    };

    let cropped = plan.cropped_dimensions();
    lines.push(format!("Crop {axis}"));
    lines.push(format!(
        "New aspect ratio {} | new change factor {}",
        new_aspect,
        change_factor(new_aspect, plan.target_aspect)
    ));
    lines.push(format!(
        "New size {} px, aspect ratio {} | {trimmed}",
        cropped,
        cropped.aspect_ratio()
    ));
    lines
}

// ============================================================================
// Summary
// ============================================================================

/// Format the end-of-run summary. Timing is only shown when verbose.
pub fn format_summary(summary: &BatchSummary, verbose: bool) -> Vec<String> {
    let mut lines = Vec::new();
    if verbose {
        lines.push(String::new());
        lines.push(format!(
            "Processed {} image{} into {}",
            summary.processed,
            if summary.processed == 1 { "" } else { "s" },
            summary.output_dir.display()
        ));
        lines.push(format!(
            "Total execution time: {:.2} seconds",
            summary.elapsed.as_secs_f64()
        ));
    }
    lines
}

pub fn print_summary(summary: &BatchSummary, verbose: bool) {
    for line in format_summary(summary, verbose) {
        println!("{line}");
    }
}
