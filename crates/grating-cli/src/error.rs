use std::path::PathBuf;

use grating_core::ComposeError;

use crate::image_io::ImageIoError;

/// Errors surfaced by the `grating` command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read layer file {}: {source}", .path.display())]
    LayerFileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid layer file {}: {source}", .path.display())]
    LayerFileFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Compose(#[from] ComposeError),
    #[error(transparent)]
    Image(#[from] ImageIoError),
}
