use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, info, warn};

use raw2fits_rs::image_pipeline::{
    ByteOrder, RawFrameSpec, RawToFitsPipeline, derive_output_path,
};
use raw2fits_rs::logger;

/// Convert 16-bit RAW frames (2 bytes/pixel) to FITS.
#[derive(Parser)]
#[command(name = "raw2fits", version)]
struct Args {
    /// Path to input RAW file or directory
    input: PathBuf,

    /// Image width in pixels
    #[arg(long)]
    width: i64,

    /// Image height in pixels
    #[arg(long)]
    height: i64,

    /// Path to output FITS file (defaults to INPUT with .fits extension;
    /// ignored when INPUT is a directory)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Byte order of RAW data (LSB-first == little)
    #[arg(long, value_enum, default_value = "little")]
    byteorder: ByteOrderArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum ByteOrderArg {
    Little,
    Big,
}

impl From<ByteOrderArg> for ByteOrder {
    fn from(arg: ByteOrderArg) -> Self {
        match arg {
            ByteOrderArg::Little => ByteOrder::Little,
            ByteOrderArg::Big => ByteOrder::Big,
        }
    }
}

fn main() -> ExitCode {
    logger::init();

    let args = Args::parse();

    if args.width <= 0 || args.height <= 0 {
        error!("width and height must be positive integers");
        return ExitCode::from(2);
    }

    let spec = RawFrameSpec::new(
        args.width as usize,
        args.height as usize,
        args.byteorder.into(),
    );
    let pipeline = RawToFitsPipeline::new(spec);

    if args.input.is_dir() {
        if args.output.is_some() {
            warn!("--output is ignored when input is a directory");
        }

        match pipeline.convert_directory(&args.input) {
            Ok(report) => {
                info!(
                    "Converted {} files. Failures: {}.",
                    report.written.len(),
                    report.failed.len()
                );
                for (path, message) in &report.failed {
                    error!("Failed: {}: {}", path.display(), message);
                }
                if report.failed.is_empty() {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::FAILURE
                }
            }
            Err(e) => {
                error!("{e}");
                ExitCode::FAILURE
            }
        }
    } else {
        let output = args
            .output
            .clone()
            .unwrap_or_else(|| derive_output_path(&args.input));

        match pipeline.convert_file(&args.input, &output) {
            Ok(()) => {
                info!("Wrote FITS: {}", output.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("{e}");
                ExitCode::FAILURE
            }
        }
    }
}
