//! # qrcli
//!
//! A small command-line tool for turning text or URLs into QR codes.
//!
//! `qrcli` leaves QR encoding to the [`qrcode`] crate and handles the rest:
//! argument parsing, choosing an output mode, rendering the module matrix as
//! terminal text, PNG, or SVG, and naming output files after their input.
//!
//! ## Features
//!
//! - Four error correction levels: L, M, Q, H.
//! - Terminal output with compact half-block glyphs or plain ASCII.
//! - PNG output scaled by box size and padded by a border (the `png` feature,
//!   on by default).
//! - SVG output as a compound path, one rect per module, or an embeddable
//!   `<symbol>` fragment.
//! - File names derived from the input, e.g. `https://example.com` becomes
//!   `https-example-com.png`.
//!
//! ## Usage
//!
//! ```text
//! qrcli -i https://example.com                 # print to the terminal
//! qrcli -i https://example.com --to-png        # writes https-example-com.png
//! qrcli -i 'Hello World' --to-svg --svg-style rect --out hello.svg
//! qrcli -i 'WIFI:S:MyNet;T:WPA;P:s3cr3t;;' --ascii
//! ```
//!
//! ## Example
//!
//! Render an SVG in memory:
//!
//! ```rust
//! use qrcli::model::{ErrorCorrection, SvgStyle};
//! use qrcli::render::svg::to_svg_string;
//! use qrcli::symbol::{QrcodeEncoder, SymbolEncoder};
//!
//! let matrix = QrcodeEncoder.encode("Hello, World!", ErrorCorrection::M).unwrap();
//! let svg = to_svg_string(&matrix, 10, 4, SvgStyle::Path).unwrap();
//! assert!(svg.starts_with("<?xml"));
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Argument parsing and the binary's entry point.
//! - [`generate`]: The encode, render, write pipeline.
//! - [`symbol`]: The encoder boundary and module matrix.
//! - [`render`]: Text, PNG, and SVG renderers.
//! - [`output`]: Destination resolution, file naming, and atomic writes.

pub mod cli;
pub mod error;
pub mod generate;
pub mod model;
pub mod output;
pub mod render;
pub mod symbol;

pub use error::{Error, Result};
