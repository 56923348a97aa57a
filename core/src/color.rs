use csscolorparser::Color;
use serde_json::{Map, Value as Json};

use crate::format::format_number;

/// A structured color: a color space identifier plus channel data.
///
/// Channels are read from `channels`, falling back to `components`. A
/// channel that is not a number (e.g. `"none"`) reads as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorValue {
    pub color_space: String,
    pub channels: Vec<f64>,
    pub alpha: f64,
    pub hex: Option<String>,
}
impl ColorValue {
    pub fn srgb(channels: [f64; 3], alpha: f64) -> Self {
        ColorValue {
            color_space: "srgb".to_string(),
            channels: channels.to_vec(),
            alpha,
            hex: None,
        }
    }

    pub(crate) fn from_object(map: &Map<String, Json>) -> Self {
        let color_space = match &map["colorSpace"] {
            Json::String(space) => space.clone(),
            other => other.to_string(),
        };
        let channels = map
            .get("channels")
            .or_else(|| map.get("components"))
            .and_then(Json::as_array)
            .map(|channels| channels.iter().map(|c| c.as_f64().unwrap_or(0.0)).collect())
            .unwrap_or_default();
        ColorValue {
            color_space,
            channels,
            alpha: map.get("alpha").and_then(Json::as_f64).unwrap_or(1.0),
            hex: map.get("hex").and_then(Json::as_str).map(str::to_string),
        }
    }

    pub fn channel(&self, index: usize) -> f64 {
        self.channels.get(index).copied().unwrap_or(0.0)
    }

    /// Reads the channels as sRGB fractions and writes `rgb(r, g, b)`, or
    /// `rgba(r, g, b, a)` when the color is not fully opaque.
    pub fn to_rgb_string(&self) -> String {
        let [r, g, b] = [0, 1, 2].map(|i| (self.channel(i) * 255.0).round() as i64);
        if self.alpha == 1.0 {
            format!("rgb({r}, {g}, {b})")
        } else {
            format!("rgba({r}, {g}, {b}, {})", format_number(self.alpha))
        }
    }
}

/// Turns a structured color into CSS color text.
///
/// Returning `None` (or an empty string) hands the color to the sRGB
/// channel fallback.
pub trait ColorSerializer {
    fn serialize(&self, color: &ColorValue) -> Option<String>;
}

/// Converts the color spaces `csscolorparser` understands to hex. `srgb` is
/// left to the channel fallback; unknown spaces use the `hex` member if any.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssColorSerializer;

impl ColorSerializer for CssColorSerializer {
    fn serialize(&self, color: &ColorValue) -> Option<String> {
        let c = |i| color.channel(i);
        let parsed = match color.color_space.as_str() {
            "srgb" => return None,
            "hsl" => Color::from_hsla(c(0), c(1) / 100.0, c(2) / 100.0, color.alpha),
            "hwb" => Color::from_hwba(c(0), c(1) / 100.0, c(2) / 100.0, color.alpha),
            "lab" => Color::from_lab(c(0), c(1), c(2), color.alpha),
            "lch" => Color::from_lch(c(0), c(1), c(2).to_radians(), color.alpha),
            _ => csscolorparser::parse(color.hex.as_deref()?).ok()?,
        };
        Some(parsed.to_hex_string())
    }
}

impl<F> ColorSerializer for F
where
    F: Fn(&ColorValue) -> Option<String>,
{
    fn serialize(&self, color: &ColorValue) -> Option<String> {
        self(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rgb_fallback_rounds_channels() {
        assert_eq!(ColorValue::srgb([1.0, 1.0, 1.0], 1.0).to_rgb_string(), "rgb(255, 255, 255)");
        assert_eq!(
            ColorValue::srgb([0.5, 0.0, 0.2], 0.5).to_rgb_string(),
            "rgba(128, 0, 51, 0.5)"
        );
    }

    #[test]
    fn reads_components_and_missing_channels() {
        let json = json!({ "colorSpace": "srgb", "components": [1, "none"] });
        let color = ColorValue::from_object(json.as_object().unwrap());
        assert_eq!(color.channels, vec![1.0, 0.0]);
        assert_eq!(color.alpha, 1.0);
        assert_eq!(color.to_rgb_string(), "rgb(255, 0, 0)");
    }

    #[test]
    fn serializer_converts_hsl() {
        let color = ColorValue {
            color_space: "hsl".to_string(),
            channels: vec![0.0, 100.0, 50.0],
            alpha: 1.0,
            hex: None,
        };
        assert_eq!(CssColorSerializer.serialize(&color).as_deref(), Some("#ff0000"));
        assert_eq!(CssColorSerializer.serialize(&ColorValue::srgb([0.0; 3], 1.0)), None);
    }

    #[test]
    fn serializer_uses_hex_for_unknown_spaces() {
        let mut color = ColorValue::srgb([0.0; 3], 1.0);
        color.color_space = "display-p3".to_string();
        assert_eq!(CssColorSerializer.serialize(&color), None);
        color.hex = Some("#336699".to_string());
        assert_eq!(CssColorSerializer.serialize(&color).as_deref(), Some("#336699"));
    }
}
