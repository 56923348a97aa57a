//! Turns design tokens into a Tailwind v4 theme stylesheet.
//!
//! Each token becomes a CSS custom property. Its name comes from the token
//! path ([`naming`]), its value from whichever encoding the token uses
//! ([`format`]), and mode overrides ([`modes`]) are collected into
//! `[data-theme='<mode>']` blocks ([`theme`]).

use indexmap::IndexMap;
use serde::Deserialize;

pub mod color;
pub mod document;
pub mod error;
pub mod extensions;
pub mod format;
pub mod modes;
pub mod naming;
pub mod options;
pub mod plugin;
pub mod reference;
pub mod theme;
pub mod value;

pub use color::{ColorSerializer, ColorValue, CssColorSerializer};
pub use document::TokenDocument;
pub use error::{Result, TokenError};
pub use extensions::{Extensions, OriginalValue, Scope};
pub use format::{format_value, ValueFormatter};
pub use modes::{Mode, ModeExtractor, ModeToken, ModeValue};
pub use naming::variable_name;
pub use options::PluginOptions;
pub use plugin::{OutputSink, TailwindPlugin, TransformRecord};
pub use reference::{resolve_reference, Reference};
pub use theme::Theme;
pub use value::TokenValue;

/// Tokens keyed by dot path, in document order.
pub type TokenSet = IndexMap<String, Token>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum TokenType {
    Color,
    Dimension,
    Border,
    Shadow,
    Typography,
    FontFamily,
    Other(String),
}
impl From<&str> for TokenType {
    fn from(name: &str) -> Self {
        match name {
            "color" => TokenType::Color,
            "dimension" => TokenType::Dimension,
            "border" => TokenType::Border,
            "shadow" => TokenType::Shadow,
            "typography" => TokenType::Typography,
            "fontFamily" => TokenType::FontFamily,
            other => TokenType::Other(other.to_string()),
        }
    }
}
impl From<String> for TokenType {
    fn from(name: String) -> Self {
        TokenType::from(name.as_str())
    }
}

/// A parsed token, as handed over by the token loader.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Token {
    #[serde(rename = "$type", default)]
    pub type_: Option<TokenType>,
    #[serde(rename = "$value", default)]
    pub value: Option<TokenValue>,
    #[serde(rename = "$extensions", default)]
    pub extensions: Option<Extensions>,
    #[serde(rename = "originalValue", default)]
    pub original_value: Option<OriginalValue>,
    /// Per-mode sub-tokens; the `"."` entry is the token itself.
    #[serde(default)]
    pub mode: IndexMap<String, ModeToken>,
}
impl Token {
    /// The authored value if the loader kept one, else the resolved value.
    pub fn default_value(&self) -> Option<&TokenValue> {
        self.original_value
            .as_ref()
            .and_then(|original| original.value.as_ref())
            .or(self.value.as_ref())
    }

    pub fn scopes(&self) -> &[Scope] {
        self.original_value
            .as_ref()
            .and_then(OriginalValue::scopes)
            .or_else(|| self.extensions.as_ref().and_then(|ext| ext.scopes.as_deref()))
            .unwrap_or_default()
    }

    pub fn extension_modes(&self) -> Option<&IndexMap<String, TokenValue>> {
        self.original_value
            .as_ref()
            .and_then(OriginalValue::modes)
            .or_else(|| self.extensions.as_ref().and_then(|ext| ext.mode.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn token_prefers_original_value() {
        let token: Token = serde_json::from_value(json!({
            "$type": "borderRadius",
            "$value": "8px",
            "$extensions": { "scopes": ["GAP"] },
            "originalValue": {
                "$value": "{border-radius.200}",
                "$extensions": { "scopes": ["CORNER_RADIUS"] }
            }
        }))
        .unwrap();
        assert_eq!(token.type_, Some(TokenType::Other("borderRadius".to_string())));
        assert_eq!(
            token.default_value(),
            Some(&TokenValue::Reference("{border-radius.200}".to_string()))
        );
        assert_eq!(token.scopes(), &[Scope::CornerRadius]);
    }

    #[test]
    fn token_falls_back_to_own_extensions() {
        let token: Token = serde_json::from_value(json!({
            "$value": null,
            "$extensions": { "scopes": ["TEXT_FILL"], "mode": { "dark": "#000" } }
        }))
        .unwrap();
        assert_eq!(token.default_value(), None);
        assert_eq!(token.scopes(), &[Scope::TextFill]);
        assert_eq!(
            token.extension_modes().unwrap()["dark"],
            TokenValue::Text("#000".to_string())
        );
    }
}
