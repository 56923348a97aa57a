use itertools::Itertools;

use crate::{
    color::{ColorSerializer, ColorValue, CssColorSerializer},
    error::{Result, TokenError, MAX_UNWRAP_DEPTH},
    reference::resolve_reference,
    value::{ShadowValue, TokenValue},
};

/// Color written for a shadow that does not name one.
pub const DEFAULT_SHADOW_COLOR: &str = "rgb(0 0 0 / 0.05)";

/// Written for a border that has no color.
const BORDER_FALLBACK_COLOR: &str = "currentcolor";

/// Formats a number the way it reads in a stylesheet: `16`, `0.5`, `0`.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

/// Turns token values into CSS value text.
#[derive(Debug, Clone, Default)]
pub struct ValueFormatter<S = CssColorSerializer> {
    colors: S,
}
impl<S: ColorSerializer> ValueFormatter<S> {
    pub fn new(colors: S) -> Self {
        ValueFormatter { colors }
    }

    pub fn format(&self, value: &TokenValue) -> Result<String> {
        self.format_nested(value, 0)
    }

    fn format_nested(&self, value: &TokenValue, depth: usize) -> Result<String> {
        if depth > MAX_UNWRAP_DEPTH {
            return Err(TokenError::UnwrapDepth {
                limit: MAX_UNWRAP_DEPTH,
            });
        }
        let depth = depth + 1;
        Ok(match value {
            TokenValue::Number(n) => format_number(*n),
            TokenValue::Reference(raw) => resolve_reference(raw)?,
            TokenValue::Text(text) => text.clone(),
            TokenValue::Dimension(dimension) => {
                format!("{}{}", self.format_nested(&dimension.value, depth)?, dimension.unit)
            }
            // Borders are published as their color only.
            TokenValue::Border(border) => match &border.color {
                Some(color) if !color.is_null() => self.format_nested(color, depth)?,
                _ => BORDER_FALLBACK_COLOR.to_string(),
            },
            TokenValue::Typed { value, .. } => self.format_nested(value, depth)?,
            TokenValue::Shadow(shadow) => self.format_shadow(shadow, depth)?,
            TokenValue::Color(color) => self.format_color(color),
            TokenValue::List(items) => items
                .iter()
                .map(|item| self.format_nested(item, depth))
                .collect::<Result<Vec<_>>>()?
                .join(", "),
            TokenValue::Object(fields) => {
                tracing::debug!(keys = ?fields.keys().collect_vec(), "formatting unrecognized object");
                fields
                    .values()
                    .map(|field| self.format_nested(field, depth))
                    .collect::<Result<Vec<_>>>()?
                    .join(" ")
            }
            TokenValue::Bool(b) => b.to_string(),
            TokenValue::Null => "null".to_string(),
        })
    }

    /// `<offsetX> <offsetY> <blur> <spread> <color>`; a missing length is `0`.
    fn format_shadow(&self, shadow: &ShadowValue, depth: usize) -> Result<String> {
        let length = |value: &Option<TokenValue>| -> Result<String> {
            let text = match value {
                Some(value) if !value.is_null() => self.format_nested(value, depth)?,
                _ => String::new(),
            };
            Ok(if text.is_empty() { "0".to_string() } else { text })
        };
        let color = match &shadow.color {
            Some(color) if !color.is_null() => self.format_nested(color, depth)?,
            _ => String::new(),
        };
        Ok(format!(
            "{} {} {} {} {}",
            length(&shadow.offset_x)?,
            length(&shadow.offset_y)?,
            length(&shadow.blur)?,
            length(&shadow.spread)?,
            if color.is_empty() {
                DEFAULT_SHADOW_COLOR
            } else {
                color.as_str()
            }
        ))
    }

    fn format_color(&self, color: &ColorValue) -> String {
        self.colors
            .serialize(color)
            .filter(|css| !css.is_empty())
            .unwrap_or_else(|| color.to_rgb_string())
    }
}

/// Formats with the default color serializer.
pub fn format_value(value: &TokenValue) -> Result<String> {
    ValueFormatter::<CssColorSerializer>::default().format(value)
}
