use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a single `qrcli` invocation.
///
/// None of these are retried; the binary maps each variant to a distinct
/// exit code through [`Error::exit_code`].
#[derive(Error, Debug)]
pub enum Error {
    /// Conflicting or invalid arguments.
    #[error("{0}")]
    Usage(String),

    /// The requested output needs a capability this build or encoder lacks.
    #[error("{format} output is not available: {hint}")]
    Capability {
        format: &'static str,
        hint: &'static str,
    },

    /// Writing the destination failed.
    #[error("cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input does not fit in a QR symbol at the chosen level.
    #[error("cannot encode input: {0}")]
    Encode(String),

    /// The artifact could not be produced from an encoded symbol.
    #[error("cannot render output: {0}")]
    Render(String),
}

impl Error {
    pub const EXIT_FAILURE: u8 = 1;
    pub const EXIT_USAGE: u8 = 2;
    pub const EXIT_CAPABILITY: u8 = 3;

    pub(crate) fn png_unavailable() -> Self {
        Self::Capability {
            format: "PNG",
            hint: "rebuild qrcli with `--features png` (or use --to-svg)",
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => Self::EXIT_USAGE,
            Self::Capability { .. } => Self::EXIT_CAPABILITY,
            Self::Io { .. } | Self::Encode(_) | Self::Render(_) => Self::EXIT_FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
