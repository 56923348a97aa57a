use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value as Json;

use crate::{
    color::ColorSerializer,
    error::Result,
    format::ValueFormatter,
    reference::resolve_reference,
    value::TokenValue,
    Token, TokenType,
};

/// Key in a token's `mode` map that carries no override.
pub const NO_OVERRIDE_MODE: &str = ".";

/// Which theme block a value belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Mode {
    Default,
    Named(String),
}
impl Mode {
    pub fn name(&self) -> &str {
        match self {
            Mode::Default => "default",
            Mode::Named(name) => name.as_str(),
        }
    }
}
impl From<&str> for Mode {
    fn from(name: &str) -> Self {
        match name {
            "default" => Mode::Default,
            name => Mode::Named(name.to_string()),
        }
    }
}
impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One entry of a token's nested `mode` map.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeToken {
    /// The entry's effective value.
    pub value: TokenValue,
    /// `source.node.value`, the value as authored.
    pub source_value: Option<TokenValue>,
}
impl From<&Json> for ModeToken {
    fn from(json: &Json) -> Self {
        let Json::Object(map) = json else {
            return ModeToken {
                value: TokenValue::from(json),
                source_value: None,
            };
        };
        let source_value = json
            .pointer("/source/node/value")
            .filter(|v| !v.is_null())
            .map(TokenValue::from);
        let present = |key: &str| map.get(key).filter(|v| !v.is_null());

        let value = if present("value").is_some() && present("unit").is_some() {
            TokenValue::from(json)
        } else if map.get("$type").and_then(Json::as_str) == Some("dimension") {
            map.get("$value").map_or(TokenValue::Null, TokenValue::from)
        } else if let Some(source) = &source_value {
            source.clone()
        } else if let Some(value) = present("$value").or_else(|| present("value")) {
            TokenValue::from(value)
        } else {
            TokenValue::from(json)
        };
        ModeToken {
            value,
            source_value,
        }
    }
}
impl<'de> Deserialize<'de> for ModeToken {
    fn deserialize<D>(deserializer: D) -> Result<ModeToken, D::Error>
    where
        D: Deserializer<'de>,
    {
        Json::deserialize(deserializer).map(|json| ModeToken::from(&json))
    }
}

/// A formatted value and the mode it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeValue {
    pub mode: Mode,
    pub value: String,
}

/// Fans a token out into its default value and its mode overrides.
///
/// Entries come out in a fixed order: the default value, then
/// `$extensions.mode` overrides, then the nested `mode` map. Later entries
/// for the same mode replace earlier ones when the theme is collected.
#[derive(Debug, Clone)]
pub struct ModeExtractor<'a, S> {
    formatter: &'a ValueFormatter<S>,
}
impl<'a, S: ColorSerializer> ModeExtractor<'a, S> {
    pub fn new(formatter: &'a ValueFormatter<S>) -> Self {
        ModeExtractor { formatter }
    }

    pub fn extract(&self, token: &Token) -> Result<Vec<ModeValue>> {
        let mut values = Vec::new();
        if let Some(default) = token.default_value() {
            values.push(ModeValue {
                mode: Mode::Default,
                value: self.format_typed(token, default)?,
            });
        }
        for (name, raw) in token.extension_modes().into_iter().flatten() {
            let value = self.extension_value(token, raw)?;
            tracing::trace!(mode = %name, %value, "extension mode");
            values.push(ModeValue {
                mode: Mode::from(name.as_str()),
                value,
            });
        }
        for (name, entry) in &token.mode {
            if name == NO_OVERRIDE_MODE {
                continue;
            }
            if let Some(value) = self.nested_value(token, entry)? {
                tracing::trace!(mode = %name, %value, "nested mode");
                values.push(ModeValue {
                    mode: Mode::from(name.as_str()),
                    value,
                });
            }
        }
        Ok(values)
    }

    /// Formats `value` as the token's declared type reads it. Default and
    /// mode values of one token go through here alike.
    fn format_typed(&self, token: &Token, value: &TokenValue) -> Result<String> {
        match &token.type_ {
            Some(TokenType::Shadow | TokenType::Border) => self
                .formatter
                .format(&value.clone().for_type(token.type_.as_ref())),
            // dimensions included: `{value, unit}` pairs format directly
            _ => self.formatter.format(value),
        }
    }

    fn extension_value(&self, token: &Token, raw: &TokenValue) -> Result<String> {
        match raw {
            TokenValue::Reference(reference) => resolve_reference(reference),
            _ => self.format_typed(token, raw),
        }
    }

    fn nested_value(&self, token: &Token, entry: &ModeToken) -> Result<Option<String>> {
        if let Some(TokenValue::Reference(reference)) = &entry.source_value {
            return resolve_reference(reference).map(Some);
        }
        match &entry.value {
            TokenValue::Null => Ok(None),
            TokenValue::Object(fields) if fields.is_empty() => Ok(None),
            value => self.format_typed(token, value).map(Some),
        }
    }
}
