//! The encode → render → write pipeline for one invocation.

use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::model::{EncodingRequest, OutputMode};
use crate::output::Destination;
use crate::render;
use crate::symbol::SymbolEncoder;

/// A validated invocation: what to encode, how to draw it, and an optional
/// explicit destination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Job {
    pub request: EncodingRequest,
    pub mode: OutputMode,
    pub out: Option<PathBuf>,
}

/// Runs the pipeline and returns where the artifact went.
///
/// The artifact is fully rendered before the destination is opened. For file
/// destinations the resolved path is printed to `stdout` afterwards.
pub fn generate<E: SymbolEncoder + ?Sized>(
    job: &Job,
    encoder: &E,
    stdout: &mut dyn Write,
) -> Result<Destination> {
    let request = &job.request;
    debug!(
        level = ?request.level(),
        box_size = request.box_size(),
        border = request.border(),
        mode = ?job.mode,
        "generating"
    );

    let matrix = encoder.encode(request.text(), request.level())?;
    let bytes = render::render(encoder, &matrix, request, job.mode)?;

    let destination = Destination::resolve(job.out.as_deref(), request.text(), job.mode);
    destination.write(&bytes, stdout)?;

    if let Destination::File(path) = &destination {
        writeln!(stdout, "{}", path.display()).map_err(|e| Error::io("<stdout>", e))?;
        info!(path = %path.display(), version = matrix.version(), "saved QR code");
    }
    Ok(destination)
}
