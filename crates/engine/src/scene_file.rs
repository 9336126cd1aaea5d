//! JSON scene files.
//!
//! ```json
//! {
//!   "text": "REVERSE PAC-MAN\n\n_Developed by_\\Aeroli.to",
//!   "color": "0xa0a0a000",
//!   "images": [
//!     { "path": "pac.txt", "placement": { "scroll": 650 } },
//!     { "path": "photo.txt", "placement": { "floor": 2150 } }
//!   ],
//!   "background": "black",
//!   "step": 10,
//!   "fps": 40
//! }
//! ```
//!
//! `text_path` may replace `text` to read the credits from a separate file.
//! Relative paths are resolved against the scene file's directory.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::core::{decode_text, Placement};
use crate::types::{ColorError, Rgb, MAX_LAYERS};

/// A color as written in a scene file: packed `0xRRGGBBAA` integer, channel
/// array, or string (name, hex, or `"r,g,b"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Packed(u32),
    Channels(Vec<i64>),
    Spec(String),
}

impl ColorValue {
    /// Hex/name first; on failure, retry from the channel form.
    pub fn resolve(&self) -> Result<Rgb, ColorError> {
        match self {
            ColorValue::Packed(v) => Ok(Rgb::from_packed_rgba(*v)),
            ColorValue::Channels(channels) => Rgb::from_channels(channels),
            ColorValue::Spec(spec) => Rgb::parse_any(spec),
        }
    }
}

impl Default for ColorValue {
    fn default() -> Self {
        ColorValue::Spec("#a0a0a0".to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementSpec {
    Scroll(i32),
    Floor(i32),
}

impl From<PlacementSpec> for Placement {
    fn from(spec: PlacementSpec) -> Self {
        match spec {
            PlacementSpec::Scroll(base) => Placement::Scroll { base },
            PlacementSpec::Floor(base) => Placement::Floor { base },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageSpec {
    pub path: PathBuf,
    pub placement: PlacementSpec,
    /// Defaults to the text color.
    #[serde(default)]
    pub color: Option<ColorValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneFile {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub text_path: Option<PathBuf>,
    #[serde(default)]
    pub color: ColorValue,
    #[serde(default)]
    pub background: Option<ColorValue>,
    #[serde(default)]
    pub images: Vec<ImageSpec>,
    #[serde(default)]
    pub step: Option<i32>,
    #[serde(default)]
    pub fps: Option<u32>,
}

impl SceneFile {
    pub fn from_json(json: &str) -> Result<Self> {
        let file: SceneFile = serde_json::from_str(json).context("invalid scene file")?;
        match (&file.text, &file.text_path) {
            (Some(_), Some(_)) => bail!("scene sets both `text` and `text_path`"),
            (None, None) => bail!("scene needs `text` or `text_path`"),
            _ => {}
        }
        if file.images.len() > MAX_LAYERS {
            bail!(
                "scene has {} images; at most {} are supported",
                file.images.len(),
                MAX_LAYERS
            );
        }
        Ok(file)
    }

    /// Read a scene file and resolve its relative paths.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading scene {}", path.display()))?;
        let mut file = Self::from_json(&json)
            .with_context(|| format!("loading scene {}", path.display()))?;
        if let Some(dir) = path.parent() {
            file.rebase(dir);
        }
        Ok(file)
    }

    fn rebase(&mut self, dir: &Path) {
        if let Some(p) = self.text_path.as_mut() {
            if p.is_relative() {
                *p = dir.join(&*p);
            }
        }
        for image in &mut self.images {
            if image.path.is_relative() {
                image.path = dir.join(&image.path);
            }
        }
    }

    /// The credits text, read from `text_path` if needed.
    pub fn text(&self) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        match &self.text_path {
            Some(path) => {
                let raw = std::fs::read(path)
                    .with_context(|| format!("reading credits text {}", path.display()))?;
                Ok(decode_text(&raw).into_owned())
            }
            None => bail!("scene needs `text` or `text_path`"),
        }
    }

    pub fn color(&self) -> Result<Rgb> {
        self.color
            .resolve()
            .with_context(|| format!("invalid scene color {:?}", self.color))
    }

    pub fn background(&self) -> Result<Option<Rgb>> {
        self.background
            .as_ref()
            .map(|bg| {
                bg.resolve()
                    .with_context(|| format!("invalid scene background {:?}", bg))
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_scene() {
        let file = SceneFile::from_json(
            r#"{
                "text": "A\\B",
                "color": [160, 160, 160, 0],
                "images": [
                    { "path": "pac.txt", "placement": { "scroll": 650 } },
                    { "path": "photo.txt", "placement": { "floor": 2150 }, "color": "yellow" }
                ],
                "background": "0,0,32",
                "fps": 30
            }"#,
        )
        .unwrap();

        assert_eq!(file.text().unwrap(), "A\\B");
        assert_eq!(file.color().unwrap(), Rgb::new(160, 160, 160));
        assert_eq!(
            Placement::from(file.images[1].placement),
            Placement::Floor { base: 2150 }
        );
        assert_eq!(
            file.images[1].color.as_ref().unwrap().resolve(),
            Ok(Rgb::new(255, 255, 0))
        );
        assert_eq!(file.background().unwrap(), Some(Rgb::new(0, 0, 32)));
        assert_eq!((file.step, file.fps), (None, Some(30)));
    }

    #[test]
    fn color_forms() {
        assert_eq!(
            ColorValue::Packed(0xa0a0_a000).resolve(),
            Ok(Rgb::new(160, 160, 160))
        );
        assert_eq!(
            ColorValue::Spec("10, 20, 30".into()).resolve(),
            Ok(Rgb::new(10, 20, 30))
        );
        assert_eq!(
            ColorValue::Spec("nope".into()).resolve(),
            Err(ColorError::Malformed)
        );
        assert_eq!(
            ColorValue::Channels(vec![1, 2]).resolve(),
            Err(ColorError::ChannelCount)
        );
    }

    #[test]
    fn default_color_is_gray() {
        let file = SceneFile::from_json(r#"{ "text": "x" }"#).unwrap();
        assert_eq!(file.color().unwrap(), Rgb::new(160, 160, 160));
        assert!(file.images.is_empty());
    }

    #[test]
    fn rejects_bad_shapes() {
        assert!(SceneFile::from_json(r#"{ "color": "white" }"#).is_err());
        assert!(SceneFile::from_json(r#"{ "text": "x", "text_path": "y" }"#).is_err());
        assert!(SceneFile::from_json(r#"{ "text": "x", "speed": 3 }"#).is_err());

        let four = r#"{ "path": "a", "placement": { "scroll": 0 } }"#;
        let json = format!(r#"{{ "text": "x", "images": [{four}, {four}, {four}, {four}] }}"#);
        assert!(SceneFile::from_json(&json).is_err());
    }

    #[test]
    fn rebase_resolves_relative_paths() {
        let mut file = SceneFile::from_json(
            r#"{ "text_path": "credits.txt", "images": [{ "path": "/abs/pac.txt", "placement": { "scroll": 0 } }] }"#,
        )
        .unwrap();
        file.rebase(Path::new("/scenes"));
        assert_eq!(file.text_path.unwrap(), PathBuf::from("/scenes/credits.txt"));
        assert_eq!(file.images[0].path, PathBuf::from("/abs/pac.txt"));
    }
}
