//! What a roll shows: the text, its color and up to three image layers.

use crate::error::RollError;
use crate::layer::{Layer, Layers};
use crate::types::Rgb;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    pub text: String,
    pub color: Rgb,
    pub layers: Layers,
}

impl Scene {
    pub fn new(text: impl Into<String>, color: Rgb) -> Self {
        Self {
            text: text.into(),
            color,
            layers: Layers::new(),
        }
    }

    /// Append a layer; fails past [`crate::types::MAX_LAYERS`].
    pub fn with_layer(mut self, layer: Layer) -> Result<Self, RollError> {
        self.push_layer(layer)?;
        Ok(self)
    }

    pub fn push_layer(&mut self, layer: Layer) -> Result<(), RollError> {
        self.layers
            .try_push(layer)
            .map_err(|_| RollError::TooManyLayers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::Bitmap;

    #[test]
    fn caps_layers_at_three() {
        let layer = Layer::scrolling(Bitmap::new(1, 1), 0);
        let scene = Scene::new("x", Rgb::default())
            .with_layer(layer.clone())
            .and_then(|s| s.with_layer(layer.clone()))
            .and_then(|s| s.with_layer(layer.clone()))
            .unwrap();
        assert_eq!(scene.layers.len(), 3);
        assert_eq!(scene.with_layer(layer).unwrap_err(), RollError::TooManyLayers);
    }
}
