use clap::Parser;
use resize_crop::config::{self, BatchConfig, ConfigError};
use resize_crop::imaging::Dimensions;
use resize_crop::{output, process};
use std::path::PathBuf;
use std::process::ExitCode;

fn version_string() -> &'static str {
    let on_tag = env!("RESIZE_CROP_ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("RESIZE_CROP_GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "resize-crop")]
#[command(about = "Resize and crop images in a folder")]
#[command(long_about = "\
Resize and crop images in a folder

Every image directly inside the input folder (jpg, jpeg, png, gif, bmp) is
resized to exactly the target resolution. When its aspect ratio differs from
the target's by more than the maximum change factor, it is first center-cropped
just enough to land on that limit, so the remaining stretch stays small.

  change factor = |source aspect - target aspect| / target aspect

Outputs are written flat into the output folder as
<name>_resize_and_cropped.<ext>, keeping the original format.")]
#[command(version = version_string())]
struct Cli {
    /// Path to the input folder containing images
    #[arg(short, long, required_unless_present = "print_config")]
    input: Option<PathBuf>,

    /// Path to the output folder [default: <INPUT>/output]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Delete existing output folder if it already exists
    #[arg(
        short = 'd',
        long = "delete_existing_output_folder",
        visible_alias = "delete-existing-output-folder"
    )]
    delete_existing_output_folder: bool,

    /// Target resolution in the format 'width,height' [default: 1920,1080]
    #[arg(short, long, value_name = "W,H", value_parser = config::parse_resolution)]
    resolution: Option<Dimensions>,

    /// Maximum allowed change factor for image proportions [default: 0.1]
    #[arg(
        short = 'f',
        long = "max_factor_change",
        visible_alias = "max-factor-change",
        value_name = "FACTOR"
    )]
    max_factor_change: Option<f64>,

    /// Verbose mode: per-image crop decisions and total execution time
    #[arg(short, long)]
    verbose: bool,

    /// Load settings from a TOML file; flags given on the command line win
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print a documented config file with the default settings
    #[arg(long)]
    print_config: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.print_config {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let config = resolve_config(&cli)?;
    let input = cli.input.as_deref().ok_or("--input is required")?;
    let output_dir = cli
        .output
        .clone()
        .unwrap_or_else(|| process::default_output_dir(input));

    output::print_settings(input, &output_dir, &config);

    let verbose = config.verbose;
    let (tx, rx) = std::sync::mpsc::channel();
    let printer = std::thread::spawn(move || {
        for event in rx {
            for line in output::format_process_event(&event, verbose) {
                println!("{}", line);
            }
        }
    });
    let result = process::run(input, Some(&output_dir), &config, Some(tx));
    // Drain progress before reporting success or failure
    printer
        .join()
        .map_err(|_| "progress printer thread panicked")?;

    let summary = result?;
    output::print_summary(&summary, verbose);
    Ok(())
}

/// Layer stock defaults, the optional config file, and command-line flags.
fn resolve_config(cli: &Cli) -> Result<BatchConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => BatchConfig::load(path)?,
        None => BatchConfig::default(),
    };
    if let Some(resolution) = cli.resolution {
        config.resolution = resolution;
    }
    if let Some(factor) = cli.max_factor_change {
        config.max_factor_change = factor;
    }
    config.delete_existing_output |= cli.delete_existing_output_folder;
    config.verbose |= cli.verbose;
    config.validate()?;
    Ok(config)
}
