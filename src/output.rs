//! Where an artifact goes, and how it gets there.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::OutputMode;

/// Longest derived file stem, in characters, before the extension.
pub const MAX_STEM_CHARS: usize = 50;

/// Stem used when nothing survives sanitization.
pub const FALLBACK_STEM: &str = "qrcode";

const SEPARATOR: char = '-';

/// Resolved output target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    /// Resolves the target for one invocation.
    ///
    /// An explicit `--out` wins in every mode, with `-` meaning standard output.
    /// Without one, text goes to standard output and PNG/SVG go to a file
    /// named after the sanitized input.
    pub fn resolve(explicit: Option<&Path>, text: &str, mode: OutputMode) -> Self {
        match (explicit, mode.extension()) {
            (Some(path), _) if path == Path::new("-") => Self::Stdout,
            (Some(path), _) => Self::File(path.to_path_buf()),
            (None, None) => Self::Stdout,
            (None, Some(ext)) => Self::File(PathBuf::from(format!("{}.{ext}", sanitize_filename(text)))),
        }
    }

    /// Writes `bytes` to the destination.
    ///
    /// Files are written to a temporary sibling and renamed into place, so a
    /// failure leaves any previous file untouched and no partial file behind.
    pub fn write(&self, bytes: &[u8], stdout: &mut dyn Write) -> Result<()> {
        match self {
            Self::Stdout => {
                stdout
                    .write_all(bytes)
                    .and_then(|()| stdout.flush())
                    .map_err(|e| Error::io("<stdout>", e))?;
            }
            Self::File(path) => {
                let dir = match path.parent() {
                    Some(parent) if !parent.as_os_str().is_empty() => parent,
                    _ => Path::new("."),
                };
                let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::io(path, e))?;
                tmp.write_all(bytes)
                    .and_then(|()| tmp.flush())
                    .map_err(|e| Error::io(path, e))?;
                tmp.persist(path).map_err(|e| Error::io(path, e.error))?;
            }
        }
        debug!(destination = %self, bytes = bytes.len(), "wrote artifact");
        Ok(())
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("-"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Converts input text to a safe file stem.
///
/// Alphanumeric characters (Unicode, independent of locale) and `_` are kept.
/// Every other character becomes `-`, runs of `-` collapse to one, and leading
/// or trailing `-` are dropped. The result is cut to [`MAX_STEM_CHARS`]
/// characters. Empty results fall back to [`FALLBACK_STEM`].
pub fn sanitize_filename(text: &str) -> String {
    let mut stem = String::with_capacity(text.len().min(MAX_STEM_CHARS * 4));
    let mut chars = 0;
    for c in text.chars() {
        let c = if c.is_alphanumeric() || c == '_' { c } else { SEPARATOR };
        if c == SEPARATOR && (stem.is_empty() || stem.ends_with(SEPARATOR)) {
            continue;
        }
        if chars == MAX_STEM_CHARS {
            break;
        }
        stem.push(c);
        chars += 1;
    }
    let stem = stem.trim_end_matches(SEPARATOR);
    if stem.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        stem.to_string()
    }
}
