use clap::Parser;
use std::path::PathBuf;

// --- Command Line Interface ---
#[derive(Parser, Debug, Clone)]
#[command(name = "pqcal")]
#[command(version, about = "PQ (ST 2084) display calibration LUT generator for ArgyllCMS .cal files", long_about = None)]
pub struct Cli {
    /// Path to the JSON configuration holding peak luminance, LUT size and measurements.
    #[arg(value_name = "CONFIG", default_value = "eotf_measurements.json")]
    pub config: PathBuf,

    /// Override the output .cal path from the configuration.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Override the DESCRIPTOR title written into the .cal header.
    #[arg(long)]
    pub title: Option<String>,

    /// After writing, read the .cal back and validate its structure.
    #[arg(long)]
    pub verify: bool,
}
