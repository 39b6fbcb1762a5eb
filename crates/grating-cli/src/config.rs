//! Runtime configuration for the `grating` command.

use std::fs;
use std::path::{Path, PathBuf};

use grating_core::LayerSet;

use crate::cli::Cli;
use crate::error::CliError;

/// Resolved settings for one composition run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Grating width in pixels.
    pub width: u32,
    /// Grating height in pixels.
    pub height: u32,
    /// Where the composed image is written.
    pub output: PathBuf,
    /// Layers to compose.
    pub layers: LayerSet,
}

impl Config {
    /// Merge command-line layers with the optional layer file.
    ///
    /// Layers from the file come after the command-line ones of the same
    /// kind.
    pub fn from_cli(cli: Cli) -> Result<Self, CliError> {
        let mut layers = LayerSet {
            images: cli.images,
            does: cli.does,
            patterns: cli.patterns,
            blazes: cli.blazes,
        };
        if let Some(path) = &cli.layers_file {
            layers.extend(load_layer_file(path)?);
        }

        Ok(Self {
            width: cli.width,
            height: cli.height,
            output: cli.output,
            layers,
        })
    }
}

/// Read a JSON [`LayerSet`]. Missing fields default to no layers.
pub fn load_layer_file(path: &Path) -> Result<LayerSet, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::LayerFileIo {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::LayerFileFormat {
        path: path.to_path_buf(),
        source,
    })
}
