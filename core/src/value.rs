use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value as Json};

use crate::{color::ColorValue, reference::is_reference, TokenType};

/// A token value in any of the encodings a token document may use.
///
/// Decoding happens once, from JSON, and picks the first matching shape in
/// this order: `{value, unit}` pair, border, dimension wrapper, shadow,
/// color object, typed or plain `$value`/`value` wrapper, then any other map.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    /// A `{path.to.token}` string, braces included.
    Reference(String),
    Dimension(Dimension),
    Typed {
        type_: Option<TokenType>,
        value: Box<TokenValue>,
    },
    Color(ColorValue),
    Border(Box<BorderValue>),
    Shadow(Box<ShadowValue>),
    List(Vec<TokenValue>),
    Object(IndexMap<String, TokenValue>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    pub value: Box<TokenValue>,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BorderValue {
    pub width: Option<TokenValue>,
    pub style: Option<TokenValue>,
    pub color: Option<TokenValue>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShadowValue {
    pub offset_x: Option<TokenValue>,
    pub offset_y: Option<TokenValue>,
    pub blur: Option<TokenValue>,
    pub spread: Option<TokenValue>,
    pub color: Option<TokenValue>,
}
impl ShadowValue {
    fn from_fields(fields: &IndexMap<String, TokenValue>) -> Self {
        ShadowValue {
            offset_x: fields.get("offsetX").cloned(),
            offset_y: fields.get("offsetY").cloned(),
            blur: fields.get("blur").cloned(),
            spread: fields.get("spread").cloned(),
            color: fields.get("color").cloned(),
        }
    }
}

impl TokenValue {
    pub fn is_null(&self) -> bool {
        matches!(self, TokenValue::Null)
    }

    /// Reads this value as a shadow, the way a shadow-typed token's mode
    /// values are read. Maps become shadows; scalars are left alone.
    pub fn into_shadow(self) -> TokenValue {
        match self {
            TokenValue::Object(fields) => {
                TokenValue::Shadow(Box::new(ShadowValue::from_fields(&fields)))
            }
            TokenValue::List(items) => {
                TokenValue::List(items.into_iter().map(TokenValue::into_shadow).collect())
            }
            TokenValue::Typed { value, .. } => value.into_shadow(),
            other => other,
        }
    }

    /// Reads this value as a border. Maps become borders; scalars are left
    /// alone.
    pub fn into_border(self) -> TokenValue {
        match self {
            TokenValue::Object(fields) => TokenValue::Border(Box::new(BorderValue {
                width: fields.get("width").cloned(),
                style: fields.get("style").cloned(),
                color: fields.get("color").cloned(),
            })),
            TokenValue::List(items) => {
                TokenValue::List(items.into_iter().map(TokenValue::into_border).collect())
            }
            TokenValue::Typed { value, .. } => value.into_border(),
            other => other,
        }
    }

    /// Reads unrecognized maps by the token's declared type, so a shadow or
    /// border token formats the same whatever keys its value carries.
    pub fn for_type(self, type_: Option<&TokenType>) -> TokenValue {
        match type_ {
            Some(TokenType::Shadow) => self.into_shadow(),
            Some(TokenType::Border) => self.into_border(),
            _ => self,
        }
    }

    fn wrap(type_: TokenType, json: &Json) -> Self {
        TokenValue::Typed {
            type_: Some(type_),
            value: Box::new(TokenValue::from(json)),
        }
    }

    fn from_object(map: &Map<String, Json>) -> Self {
        let declared = map.get("$type").and_then(Json::as_str);
        let present = |key: &str| map.get(key).map_or(false, |v| !v.is_null());

        if present("value") && present("unit") {
            let unit = match &map["unit"] {
                Json::String(unit) => unit.clone(),
                other => other.to_string(),
            };
            return TokenValue::Dimension(Dimension {
                value: Box::new(TokenValue::from(&map["value"])),
                unit,
            });
        }
        if declared == Some("border") || (present("width") && present("style") && present("color")) {
            let fields = match map.get("$value") {
                Some(Json::Object(inner)) => fields(inner),
                Some(scalar) if !scalar.is_null() => return TokenValue::wrap(TokenType::Border, scalar),
                _ => fields(map),
            };
            return TokenValue::Object(fields).into_border();
        }
        if declared == Some("dimension") {
            return TokenValue::wrap(TokenType::Dimension, map.get("$value").unwrap_or(&Json::Null));
        }
        if declared == Some("shadow") || (present("offsetX") && present("offsetY") && present("blur")) {
            return match map.get("$value") {
                Some(Json::Array(layers)) => {
                    TokenValue::List(layers.iter().map(|l| TokenValue::from(l).into_shadow()).collect())
                }
                Some(Json::Object(inner)) => {
                    TokenValue::Shadow(Box::new(ShadowValue::from_fields(&fields(inner))))
                }
                Some(scalar) if !scalar.is_null() => TokenValue::wrap(TokenType::Shadow, scalar),
                _ => TokenValue::Shadow(Box::new(ShadowValue::from_fields(&fields(map)))),
            };
        }
        if present("colorSpace") {
            return TokenValue::Color(ColorValue::from_object(map));
        }
        let wrapped = map
            .get("$value")
            .filter(|v| !v.is_null())
            .or_else(|| map.get("value").filter(|v| !v.is_null()));
        if let Some(value) = wrapped {
            return TokenValue::Typed {
                type_: declared.map(TokenType::from),
                value: Box::new(TokenValue::from(value)),
            };
        }
        TokenValue::Object(fields(map))
    }
}

fn fields(map: &Map<String, Json>) -> IndexMap<String, TokenValue> {
    map.iter()
        .map(|(key, value)| (key.clone(), TokenValue::from(value)))
        .collect()
}

impl From<&Json> for TokenValue {
    fn from(json: &Json) -> Self {
        match json {
            Json::Null => TokenValue::Null,
            Json::Bool(b) => TokenValue::Bool(*b),
            Json::Number(n) => TokenValue::Number(n.as_f64().unwrap_or_default()),
            Json::String(s) if is_reference(s) => TokenValue::Reference(s.clone()),
            Json::String(s) => TokenValue::Text(s.clone()),
            Json::Array(items) => TokenValue::List(items.iter().map(TokenValue::from).collect()),
            Json::Object(map) => TokenValue::from_object(map),
        }
    }
}

impl<'de> Deserialize<'de> for TokenValue {
    fn deserialize<D>(deserializer: D) -> Result<TokenValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        Json::deserialize(deserializer).map(|json| TokenValue::from(&json))
    }
}
