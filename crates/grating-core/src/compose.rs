//! Layer building and composition.
//!
//! Layers are described declaratively ([`Layer`], [`LayerSet`]), turned
//! into one [`Grating`] each by [`build_layers`], and merged by
//! [`compose`], which adds them all onto a blank grating.
//!
//! Image decoding is delegated to an [`ImageDecoder`] so this crate stays
//! free of file I/O.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::blaze::{BlazeConfig, blaze_grating};
use crate::error::{ComposeError, GratingError};
use crate::grating::Grating;
use crate::image::RgbaBuffer;
use crate::pattern::expr;

/// One layer of a composed grating.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    /// Image used as-is (its Fourier transform is not computed).
    Image(PathBuf),
    /// Reference image of a diffractive optical element.
    Doe(PathBuf),
    /// Pattern expression, see [`expr::parse`].
    Pattern(String),
    /// Blaze ramp.
    Blaze(BlazeConfig),
}

impl Layer {
    /// Short label for logs and error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Image(_) => "image",
            Self::Doe(_) => "doe",
            Self::Pattern(_) => "pattern",
            Self::Blaze(_) => "blaze",
        }
    }
}

/// Layers grouped by kind, as given on the command line or in a layer
/// file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerSet {
    /// Image layers.
    pub images: Vec<PathBuf>,
    /// DOE reference image layers.
    pub does: Vec<PathBuf>,
    /// Pattern expressions.
    pub patterns: Vec<String>,
    /// Blaze ramps.
    pub blazes: Vec<BlazeConfig>,
}

impl LayerSet {
    /// Total number of layers.
    pub fn len(&self) -> usize {
        self.images.len() + self.does.len() + self.patterns.len() + self.blazes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append every layer of `other` after the layers of the same kind.
    pub fn extend(&mut self, other: LayerSet) {
        self.images.extend(other.images);
        self.does.extend(other.does);
        self.patterns.extend(other.patterns);
        self.blazes.extend(other.blazes);
    }

    /// Flatten to layers: images, then DOEs, then patterns, then blazes.
    pub fn layers(&self) -> Vec<Layer> {
        let images = self.images.iter().cloned().map(Layer::Image);
        let does = self.does.iter().cloned().map(Layer::Doe);
        let patterns = self.patterns.iter().cloned().map(Layer::Pattern);
        let blazes = self.blazes.iter().copied().map(Layer::Blaze);
        images.chain(does).chain(patterns).chain(blazes).collect()
    }
}

/// Decodes an image file into an RGBA buffer.
pub trait ImageDecoder {
    type Error: std::error::Error + Send + Sync + 'static;

    fn decode(&self, path: &Path) -> Result<RgbaBuffer, Self::Error>;
}

/// Build the grating for a single layer.
pub fn build_layer<D>(
    width: u32,
    height: u32,
    layer: &Layer,
    decoder: &D,
) -> Result<Grating, ComposeError>
where
    D: ImageDecoder + ?Sized,
{
    debug!("building {} layer: {layer:?}", layer.kind());
    match layer {
        Layer::Image(path) | Layer::Doe(path) => {
            let image = decoder.decode(path).map_err(|e| ComposeError::Decode {
                path: path.clone(),
                source: Box::new(e),
            })?;
            Grating::from_rgba(width, height, image).map_err(|source| ComposeError::InvalidImage {
                path: path.clone(),
                source,
            })
        }
        Layer::Pattern(source) => {
            let pattern = expr::parse(source)?;
            Ok(Grating::from_pattern(width, height, &pattern)?)
        }
        Layer::Blaze(config) => Ok(blaze_grating(width, height, config)?),
    }
}

/// Build one grating per layer, in order.
pub fn build_layers<D>(
    width: u32,
    height: u32,
    layers: &[Layer],
    decoder: &D,
) -> Result<Vec<Grating>, ComposeError>
where
    D: ImageDecoder + ?Sized,
{
    layers
        .iter()
        .map(|layer| build_layer(width, height, layer, decoder))
        .collect()
}

/// Merge gratings by adding them onto a blank `width × height` grating.
pub fn compose(width: u32, height: u32, gratings: &[Grating]) -> Result<Grating, GratingError> {
    let result = Grating::new(width, height)?.add(gratings)?;
    info!("composed {} layer(s) into a {width}x{height} grating", gratings.len());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Pixel;

    /// Decoder returning a flat gray image of fixed size for any path.
    struct FlatDecoder {
        width: u32,
        height: u32,
        value: u8,
    }

    impl ImageDecoder for FlatDecoder {
        type Error = std::io::Error;

        fn decode(&self, path: &Path) -> Result<RgbaBuffer, Self::Error> {
            if path.ends_with("missing.png") {
                return Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
            }
            let data = Pixel::gray(self.value).to_array().repeat((self.width * self.height) as usize);
            Ok(RgbaBuffer::new(self.width, self.height, data))
        }
    }

    #[test]
    fn test_layer_set_order() {
        let set = LayerSet {
            images: vec!["a.png".into()],
            does: vec!["d.png".into()],
            patterns: vec!["random()".into()],
            blazes: vec![BlazeConfig::new(2, 255, 0.0)],
        };
        let kinds: Vec<&str> = set.layers().iter().map(Layer::kind).collect();
        assert_eq!(kinds, ["image", "doe", "pattern", "blaze"]);
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_layer_set_from_json_defaults_missing_fields() {
        let set: LayerSet =
            serde_json::from_str(r#"{"blazes": [{"count": 25, "max": 255}]}"#).unwrap();
        assert!(set.images.is_empty());
        assert_eq!(set.blazes, vec![BlazeConfig::new(25, 255, 0.0)]);
    }

    #[test]
    fn test_compose_without_layers_is_blank() {
        let result = compose(3, 3, &[]).unwrap();
        assert_eq!(result, Grating::new(3, 3).unwrap());
    }

    #[test]
    fn test_build_and_compose_layers() {
        let decoder = FlatDecoder { width: 4, height: 4, value: 10 };
        let layers = vec![
            Layer::Image("signal.png".into()),
            Layer::Doe("doe.png".into()),
            Layer::Pattern("rect(0, 4, 0, 4, true)".into()),
        ];
        let gratings = build_layers(4, 4, &layers, &decoder).unwrap();
        assert_eq!(gratings.len(), 3);

        let result = compose(4, 4, &gratings).unwrap();
        // inside the rect: 10 + 10 + 255 = 275 mod 256 = 19
        assert_eq!(result.get_pixel(1, 1).unwrap().r, 19);
        // on the rect border: 10 + 10 + 0
        assert_eq!(result.get_pixel(0, 0).unwrap().r, 20);
    }

    #[test]
    fn test_image_size_mismatch_names_path() {
        let decoder = FlatDecoder { width: 10, height: 10, value: 0 };
        let err = build_layer(10, 20, &Layer::Image("small.png".into()), &decoder).unwrap_err();
        match err {
            ComposeError::InvalidImage { path, source } => {
                assert_eq!(path, PathBuf::from("small.png"));
                assert!(matches!(source, GratingError::DimensionMismatch { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_decode_failure_is_reported() {
        let decoder = FlatDecoder { width: 2, height: 2, value: 0 };
        let err = build_layer(2, 2, &Layer::Doe("missing.png".into()), &decoder).unwrap_err();
        assert!(matches!(err, ComposeError::Decode { .. }));
        assert!(err.to_string().contains("missing.png"));
    }

    #[test]
    fn test_blaze_layer_errors_propagate() {
        let decoder = FlatDecoder { width: 2, height: 2, value: 0 };
        let err = build_layer(4, 4, &Layer::Blaze(BlazeConfig::new(5, 255, 0.0)), &decoder).unwrap_err();
        assert!(matches!(
            err,
            ComposeError::Grating(GratingError::BlazeTooWide { count: 5, width: 4 })
        ));
    }

    #[test]
    fn test_arrow_pattern_layer_is_not_implemented() {
        let decoder = FlatDecoder { width: 2, height: 2, value: 0 };
        let err = build_layer(2, 2, &Layer::Pattern("(x, y) => x".into()), &decoder).unwrap_err();
        assert!(matches!(err, ComposeError::Grating(GratingError::NotImplemented(_))));
    }
}
