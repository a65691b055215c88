use clap::{Parser, Subcommand};
use gus_cli::ThresholdArgs;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::path::PathBuf;

mod commands;

use commands::{cmd_analyze, cmd_init, cmd_quantify, QuantifyOptions};

#[derive(Parser)]
#[command(name = "gus-quant")]
#[command(version, about = "GUS-blue stain quantification in plant roots", long_about = None)]
struct Cli {
    /// Show per-image pipeline statistics
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quantify every image in a directory and write a CSV table
    Quantify {
        /// Directory containing the root photos
        #[arg(short, long, value_name = "DIR", default_value = "plant_photos")]
        input: PathBuf,

        /// Output CSV file
        #[arg(short, long, value_name = "FILE", default_value = "resultados_gus.csv")]
        output: PathBuf,

        /// Save a validation panel per image
        #[arg(long)]
        save_plots: bool,

        /// Directory for validation panels
        #[arg(long, value_name = "DIR", default_value = "results")]
        plots_dir: PathBuf,

        /// Scan subdirectories
        #[arg(short, long)]
        recursive: bool,

        /// Number of parallel threads
        #[arg(short = 'j', long, value_name = "N")]
        threads: Option<usize>,

        #[command(flatten)]
        thresholds: ThresholdArgs,
    },

    /// Quantify a single image and print its metrics
    Analyze {
        /// Input image
        input: PathBuf,

        /// Save metrics as JSON
        #[arg(short, long, value_name = "FILE")]
        save: Option<PathBuf>,

        /// Write the three-panel validation image
        #[arg(long, value_name = "FILE")]
        panel: Option<PathBuf>,

        /// Directory for the root and stain mask PNGs
        #[arg(long, value_name = "DIR")]
        masks: Option<PathBuf>,

        #[command(flatten)]
        thresholds: ThresholdArgs,
    },

    /// Write a default gus.yml config file
    Init {
        /// Where to write the file
        #[arg(long, value_name = "FILE", default_value = "gus.yml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    if let Err(e) = SimpleLogger::new().with_level(level).init() {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let result = match cli.command {
        Commands::Quantify {
            input,
            output,
            save_plots,
            plots_dir,
            recursive,
            threads,
            thresholds,
        } => cmd_quantify(QuantifyOptions {
            input,
            output,
            plots_dir: save_plots.then_some(plots_dir),
            recursive,
            threads,
            thresholds,
        }),

        Commands::Analyze {
            input,
            save,
            panel,
            masks,
            thresholds,
        } => cmd_analyze(input, save, panel, masks, thresholds),

        Commands::Init { path, force } => cmd_init(&path, force),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
