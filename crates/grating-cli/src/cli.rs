//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use grating_core::BlazeConfig;
use grating_core::validate::parse_dimension;

/// Compose an SLM grating from images, DOEs, patterns and blazes.
///
/// Layers are added in the order images, DOEs, patterns, blazes, with
/// 8-bit wrap-around per channel.
#[derive(Debug, Parser)]
#[command(
    name = "grating",
    version,
    after_help = "Examples:\n  grating 1024 1024 ./output.png -d ./doe.bmp -i ./signal.png -p '$common:rect(10, 20, 10, 20)'\n  grating 1024 1024 ./output.png --blaze 25,255 --pattern 'circle(100, 512, 512)'"
)]
pub struct Cli {
    /// Grating width in pixels.
    #[arg(value_parser = parse_width, allow_negative_numbers = true)]
    pub width: u32,

    /// Grating height in pixels.
    #[arg(value_parser = parse_height, allow_negative_numbers = true)]
    pub height: u32,

    /// Output image path. The format follows the extension (PNG keeps
    /// transparency).
    pub output: PathBuf,

    /// Add an image layer.
    #[arg(short = 'i', long = "image", value_name = "PATH")]
    pub images: Vec<PathBuf>,

    /// Add a DOE reference image layer.
    #[arg(short = 'd', long = "doe", value_name = "PATH")]
    pub does: Vec<PathBuf>,

    /// Add a pattern layer, e.g. `circle(10, 5, 5)` or
    /// `$common:rect(10, 20, 10, 20)`.
    #[arg(short = 'p', long = "pattern", value_name = "EXPR", allow_hyphen_values = true)]
    pub patterns: Vec<String>,

    /// Add a blaze layer as `count,max[,tilt]` (tilt in radians).
    #[arg(short = 'b', long = "blaze", value_name = "COUNT,MAX[,TILT]", allow_hyphen_values = true)]
    pub blazes: Vec<BlazeConfig>,

    /// JSON file with additional layers
    /// (`{"images": [], "does": [], "patterns": [], "blazes": []}`).
    #[arg(short = 'l', long = "layers", value_name = "FILE")]
    pub layers_file: Option<PathBuf>,
}

fn parse_width(input: &str) -> Result<u32, grating_core::GratingError> {
    parse_dimension("width", input)
}

fn parse_height(input: &str) -> Result<u32, grating_core::GratingError> {
    parse_dimension("height", input)
}
