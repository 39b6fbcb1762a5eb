//! Grating CLI — composes gratings from the command line and writes the
//! result as an image file.
//!
//! The binary is a thin shell around [`run`]; argument parsing lives in
//! [`cli`], file decode/encode in [`image_io`].

pub mod cli;
pub mod config;
pub mod error;
pub mod image_io;
pub mod logging;

use grating_core::{ComposeError, build_layers, compose};
use tracing::info;

pub use config::Config;
pub use error::CliError;

/// Build every configured layer, merge them and write the output image.
pub fn run(config: &Config) -> Result<(), CliError> {
    let layers = config.layers.layers();
    info!(
        "building {} layer(s) for a {}x{} grating",
        layers.len(),
        config.width,
        config.height
    );

    let gratings = build_layers(config.width, config.height, &layers, &image_io::ImageFileDecoder)?;
    let result = compose(config.width, config.height, &gratings).map_err(ComposeError::from)?;

    image_io::write_grating(&config.output, &result)?;
    info!("wrote {}", config.output.display());
    Ok(())
}
