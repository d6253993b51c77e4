//! Command-line interface for qrcli

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;
use crate::generate::{generate, Job};
use crate::model::{EncodingRequest, ErrorCorrection, OutputMode, SvgStyle};
use crate::symbol::QrcodeEncoder;

/// Generate a QR code from input text or a URL.
///
/// Prints the code to the terminal by default, or writes a PNG/SVG file named
/// after the input.
#[derive(Parser, Debug)]
#[command(name = "qrcli")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Input text / URL to encode
    #[arg(short, long, value_name = "TEXT", value_parser = non_empty)]
    pub input: String,

    /// Emit a PNG image
    #[arg(long, conflicts_with = "to_svg")]
    pub to_png: bool,

    /// Emit an SVG document
    #[arg(long)]
    pub to_svg: bool,

    /// Output file path ('-' for stdout; default: derived from input, or stdout for text)
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Error correction level
    #[arg(long, value_enum, ignore_case = true, default_value_t = ErrorCorrection::M, env = "QRCLI_LEVEL")]
    pub level: ErrorCorrection,

    /// Pixels per module for PNG and SVG output
    #[arg(
        long,
        value_name = "PIXELS",
        default_value_t = EncodingRequest::DEFAULT_BOX_SIZE,
        value_parser = clap::value_parser!(u32).range(1..),
        env = "QRCLI_BOX_SIZE"
    )]
    pub box_size: u32,

    /// Border (quiet zone) width in modules
    #[arg(long, value_name = "MODULES", default_value_t = EncodingRequest::DEFAULT_BORDER, env = "QRCLI_BORDER")]
    pub border: u32,

    /// Use the ASCII text renderer (no unicode blocks)
    #[arg(long, conflicts_with_all = ["to_png", "to_svg"])]
    pub ascii: bool,

    /// SVG drawing style
    #[arg(long, value_enum, default_value_t = SvgStyle::Path)]
    pub svg_style: SvgStyle,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    pub verbose: bool,
}

fn non_empty(s: &str) -> std::result::Result<String, String> {
    if s.is_empty() {
        Err("input text must not be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

impl Cli {
    /// The one output mode these flags select.
    pub fn mode(&self) -> OutputMode {
        match (self.to_png, self.to_svg) {
            (true, _) => OutputMode::Png,
            (_, true) => OutputMode::Svg(self.svg_style),
            _ => OutputMode::Text { ascii: self.ascii },
        }
    }

    pub fn into_job(self) -> Result<Job> {
        let mode = self.mode();
        let request = EncodingRequest::new(self.input, self.level, self.box_size, self.border)?;
        Ok(Job {
            request,
            mode,
            out: self.out,
        })
    }
}

fn init_logging(verbose: bool) {
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let default_level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init();
}

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);
    let job = cli.into_job()?;
    generate(&job, &QrcodeEncoder, &mut io::stdout().lock())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("qrcli").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_select_text_mode() {
        let cli = parse(&["-i", "hello"]).unwrap();
        assert_eq!(cli.mode(), OutputMode::Text { ascii: false });
        let job = cli.into_job().unwrap();
        assert_eq!(job.request.level(), ErrorCorrection::M);
        assert_eq!(job.request.box_size(), 10);
        assert_eq!(job.request.border(), 4);
        assert_eq!(job.out, None);
    }

    #[test]
    fn svg_mode_carries_its_style() {
        let cli = parse(&["-i", "x", "--to-svg", "--svg-style", "frag"]).unwrap();
        assert_eq!(cli.mode(), OutputMode::Svg(SvgStyle::Frag));
    }

    #[test]
    fn png_and_svg_conflict() {
        let err = parse(&["-i", "test", "--to-png", "--to-svg"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn ascii_is_text_only() {
        let err = parse(&["-i", "x", "--ascii", "--to-png"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn level_is_validated_and_case_insensitive() {
        let err = parse(&["-i", "data", "--level", "Z"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        let cli = parse(&["-i", "data", "--level", "h"]).unwrap();
        assert_eq!(cli.level, ErrorCorrection::H);
    }

    #[test]
    fn svg_style_is_validated() {
        let err = parse(&["-i", "x", "--to-svg", "--svg-style", "circle"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn input_is_required_and_non_empty() {
        let err = parse(&[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        let err = parse(&["-i", ""]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn box_size_must_be_positive() {
        let err = parse(&["-i", "x", "--box-size", "0"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn negative_border_is_rejected() {
        assert!(parse(&["-i", "x", "--border", "-1"]).is_err());
        let cli = parse(&["-i", "x", "--border", "0"]).unwrap();
        assert_eq!(cli.border, 0);
    }

    #[test]
    fn about_comes_from_the_doc_comment() {
        use clap::CommandFactory;
        let about = Cli::command().get_about().map(|a| a.to_string()).unwrap_or_default();
        assert!(about.starts_with("Generate a QR code from input text or a URL"));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
