use std::{fs::File, io::BufReader, path::Path};

use crate::{
    effects::{catalog::EffectSet, tuning::Tuning},
    foundation::{
        color::Color,
        core::{Canvas, Fps},
        error::{KinetextError, KinetextResult},
    },
    layout::position::TextPosition,
};

/// Background the captions are laid over. Opaque to the engine; passed through.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaRef {
    /// Video locator (path or URL).
    Video(String),
    /// Still image locator (path or URL).
    Image(String),
}

impl MediaRef {
    /// The raw locator.
    pub fn source(&self) -> &str {
        match self {
            Self::Video(s) | Self::Image(s) => s,
        }
    }
}

/// Caption typography and placement.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StyleConfig {
    #[serde(default = "default_font_family", alias = "fontFamily")]
    pub font_family: String,
    /// Font size in reference pixels (1080 px wide output).
    #[serde(default = "default_font_size", alias = "fontSize")]
    pub font_size: f64,
    #[serde(default = "default_base_color", alias = "baseColor")]
    pub base_color: Color,
    #[serde(default = "default_glow_color", alias = "glowColor")]
    pub glow_color: Color,
    #[serde(default, alias = "textPosition")]
    pub text_position: TextPosition,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_size: default_font_size(),
            base_color: default_base_color(),
            glow_color: default_glow_color(),
            text_position: TextPosition::default(),
        }
    }
}

fn default_font_family() -> String {
    "Inter".to_owned()
}

fn default_font_size() -> f64 {
    72.0
}

fn default_base_color() -> Color {
    Color::WHITE
}

fn default_glow_color() -> Color {
    Color::rgba(0.0, 1.0, 1.0, 1.0)
}

fn default_scene_secs() -> f64 {
    Tuning::DEFAULT.timing.scene_secs
}

/// One overlay request as submitted by the host (JSON-facing).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OverlayRequest {
    pub background: MediaRef,
    /// Ordered captions; one scene each.
    pub captions: Vec<String>,
    #[serde(default)]
    pub style: StyleConfig,
    /// Effect tokens; order-independent, unknown tokens ignored.
    #[serde(default)]
    pub effects: EffectSet,
    #[serde(default)]
    pub fps: Fps,
    #[serde(default)]
    pub canvas: Canvas,
    /// Length of each caption window.
    #[serde(default = "default_scene_secs")]
    pub scene_secs: f64,
    /// Rendered length in frames; defaults to every scene back to back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}

impl OverlayRequest {
    /// Request with default style, fps, canvas and scene length.
    pub fn new<I, S>(background: MediaRef, captions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            background,
            captions: captions.into_iter().map(Into::into).collect(),
            style: StyleConfig::default(),
            effects: EffectSet::default(),
            fps: Fps::default(),
            canvas: Canvas::default(),
            scene_secs: default_scene_secs(),
            duration: None,
        }
    }

    /// Parse a request from a JSON string.
    pub fn from_json_str(s: &str) -> KinetextResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parse a request from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> KinetextResult<Self> {
        Ok(serde_json::from_reader(r)?)
    }

    /// Parse a request from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> KinetextResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            KinetextError::validation(format!("open overlay JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check host-supplied parameters. Caption content is the caller's business.
    pub fn validate(&self) -> KinetextResult<()> {
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(KinetextError::validation("fps must have num>0 and den>0"));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(KinetextError::validation("canvas width/height must be > 0"));
        }
        if !self.scene_secs.is_finite() || self.scene_secs <= 0.0 {
            return Err(KinetextError::validation(
                "scene_secs must be finite and > 0",
            ));
        }
        if self.fps.secs_to_frames_floor(self.scene_secs) == 0 {
            return Err(KinetextError::validation(
                "scene_secs must cover at least one frame",
            ));
        }
        if !self.style.font_size.is_finite() || self.style.font_size <= 0.0 {
            return Err(KinetextError::validation(
                "style.font_size must be finite and > 0",
            ));
        }
        if self.style.font_family.trim().is_empty() {
            return Err(KinetextError::validation(
                "style.font_family must be non-empty",
            ));
        }
        if self.duration == Some(0) {
            return Err(KinetextError::validation("duration must be > 0 frames when set"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/model.rs"]
mod tests;
