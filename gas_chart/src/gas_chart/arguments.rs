//!
//! The gas chart arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The gas chart arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Output base path.
    /// The `.svg` and `.png` extensions are appended to it.
    #[arg(short, long, default_value = gas_chart::DEFAULT_BASE_PATH)]
    pub output_path: PathBuf,

    /// Does not open the chart in the image viewer.
    #[arg(long)]
    pub no_display: bool,
}

impl Arguments {
    ///
    /// Validates the arguments.
    ///
    pub fn validate(arguments: Self) -> anyhow::Result<Self> {
        let output_path = arguments.output_path.to_string_lossy();
        if output_path.is_empty() {
            anyhow::bail!("The output path must not be empty.");
        }
        if output_path.ends_with(std::path::is_separator) {
            anyhow::bail!(
                "The output path {:?} must name a file, not a directory.",
                arguments.output_path
            );
        }

        Ok(arguments)
    }
}
