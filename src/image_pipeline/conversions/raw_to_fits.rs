use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    fits::{FitsMetadata, FitsWriter, StandardFitsWriter},
    raw::{FixedLayoutDecoder, FrameDecoder, RawFrameSpec},
};

/// Outcome of a batch conversion. Both lists are in discovery order.
#[derive(Debug, Default)]
pub struct ConversionReport {
    /// Paths of the FITS files that were written.
    pub written: Vec<PathBuf>,
    /// Inputs that failed, with the error message for each.
    pub failed: Vec<(PathBuf, String)>,
}

pub struct RawToFitsPipeline<D: FrameDecoder, W: FitsWriter> {
    decoder: D,
    writer: W,
    spec: RawFrameSpec,
}

impl RawToFitsPipeline<FixedLayoutDecoder, StandardFitsWriter> {
    pub fn new(spec: RawFrameSpec) -> Self {
        Self {
            decoder: FixedLayoutDecoder,
            writer: StandardFitsWriter,
            spec,
        }
    }
}

/// Replaces the input's extension with `.fits`, keeping its directory.
pub fn derive_output_path(input: &Path) -> PathBuf {
    input.with_extension("fits")
}

/// Suffix match on the file name, not `Path::extension`, so a file named
/// just `.raw` is still picked up.
fn is_raw_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.to_ascii_lowercase().ends_with(".raw"))
}

impl<D: FrameDecoder, W: FitsWriter> RawToFitsPipeline<D, W> {
    pub fn with_custom(decoder: D, writer: W, spec: RawFrameSpec) -> Self {
        Self {
            decoder,
            writer,
            spec,
        }
    }

    fn validate_dimensions(&self) -> Result<()> {
        if self.spec.width == 0 || self.spec.height == 0 {
            return Err(ConversionError::InvalidDimensions(
                self.spec.width,
                self.spec.height,
            ));
        }

        Ok(())
    }

    #[instrument(skip(self, input_data, output, source), fields(input_size = input_data.len()))]
    pub fn convert(
        &self,
        input_data: &[u8],
        output: &mut dyn Write,
        source: Option<&str>,
    ) -> Result<()> {
        info!("Starting RAW to FITS conversion");

        {
            let _span = tracing::info_span!(
                "validate_dimensions",
                width = self.spec.width,
                height = self.spec.height
            )
            .entered();
            self.validate_dimensions()?;
        }

        let grid = {
            let _span = tracing::info_span!("decode_frame").entered();
            self.decoder.decode(input_data, &self.spec)?
        };

        {
            let _span = tracing::info_span!("encode_fits").entered();
            let meta = FitsMetadata {
                source: source.map(str::to_string),
                byte_order: self.spec.byte_order,
            };
            self.writer.write_fits(&grid, output, &meta)?;
        }

        info!(
            width = grid.width(),
            height = grid.height(),
            "Conversion complete"
        );
        Ok(())
    }

    /// Converts one raw file to one FITS file. Any failure propagates to the
    /// caller; a failed write may leave a truncated output file behind.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            fs::read(input_path).map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            fs::File::create(output_path).map_err(|e| {
                ConversionError::WriteError(format!("{}: {}", output_path.display(), e))
            })?
        };

        let source = input_path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string);
        self.convert(&input_data, &mut output_file, source.as_deref())?;

        Ok(())
    }

    /// Recursively converts every `.raw` file under `root` to a sibling
    /// `.fits` file, mirroring the directory layout.
    ///
    /// A failing file is recorded in the report and never aborts the batch;
    /// only a root that is not an existing directory is fatal.
    #[instrument(skip(self, root))]
    pub fn convert_directory<P: AsRef<Path>>(&self, root: P) -> Result<ConversionReport> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(ConversionError::InvalidPath(format!(
                "{} is not an existing directory",
                root.display()
            )));
        }

        let mut inputs = Vec::new();
        collect_raw_files(root, &mut inputs);
        info!(count = inputs.len(), "Discovered raw files");

        let mut report = ConversionReport::default();
        for input_path in inputs {
            info!(input = %input_path.display(), "Processing");
            let output_path = derive_output_path(&input_path);
            match self.convert_file(&input_path, &output_path) {
                Ok(()) => report.written.push(output_path),
                Err(e) => {
                    warn!(input = %input_path.display(), error = %e, "Conversion failed");
                    report.failed.push((input_path, e.to_string()));
                }
            }
        }

        Ok(report)
    }
}

/// Depth-first walk: matching files of a directory first, then its
/// subdirectories, both in lexicographic name order so discovery order is
/// reproducible across platforms.
///
/// The walk is best-effort like the rest of batch mode: a directory that
/// cannot be read is skipped with a warning, never aborting the sweep.
fn collect_raw_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "Skipping unreadable directory");
            return;
        }
    };

    let mut paths: Vec<PathBuf> = entries.filter_map(|e| e.ok()).map(|e| e.path()).collect();
    paths.sort();

    for path in &paths {
        if path.is_file() && is_raw_file(path) {
            out.push(path.clone());
        }
    }
    for path in &paths {
        if path.is_dir() {
            collect_raw_files(path, out);
        }
    }
}
