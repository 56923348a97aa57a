use indexmap::IndexMap;
use serde::Deserialize;

use crate::value::TokenValue;

/// Semantic hint attached to a token, independent of its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Scope {
    #[serde(rename = "CORNER_RADIUS")]
    CornerRadius,
    #[serde(rename = "TEXT_FILL")]
    TextFill,
    #[serde(rename = "FONT_FAMILY")]
    FontFamily,
    #[serde(other)]
    Other,
}

/// The `$extensions` member of a token.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Extensions {
    #[serde(default)]
    pub scopes: Option<Vec<Scope>>,
    /// Mode name to raw value.
    #[serde(default)]
    pub mode: Option<IndexMap<String, TokenValue>>,
}

/// The token as written in the source document, before aliases were applied.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OriginalValue {
    #[serde(rename = "$value", default)]
    pub value: Option<TokenValue>,
    #[serde(rename = "$extensions", default)]
    pub dollar_extensions: Option<Extensions>,
    #[serde(default)]
    pub extensions: Option<Extensions>,
}
impl OriginalValue {
    pub(crate) fn scopes(&self) -> Option<&[Scope]> {
        self.dollar_extensions
            .as_ref()
            .or(self.extensions.as_ref())
            .and_then(|ext| ext.scopes.as_deref())
    }

    pub(crate) fn modes(&self) -> Option<&IndexMap<String, TokenValue>> {
        self.extensions
            .as_ref()
            .and_then(|ext| ext.mode.as_ref())
            .or_else(|| self.dollar_extensions.as_ref().and_then(|ext| ext.mode.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_scopes_are_kept_as_other() {
        let ext: Extensions = serde_json::from_value(json!({
            "scopes": ["CORNER_RADIUS", "GAP"],
            "mode": { "dark": "{color.gray.900}" }
        }))
        .unwrap();
        assert_eq!(ext.scopes, Some(vec![Scope::CornerRadius, Scope::Other]));
        assert_eq!(
            ext.mode.unwrap()["dark"],
            TokenValue::Reference("{color.gray.900}".to_string())
        );
    }

    #[test]
    fn original_value_reads_both_spellings() {
        let original: OriginalValue = serde_json::from_value(json!({
            "$value": 4,
            "$extensions": { "scopes": ["TEXT_FILL"] },
            "extensions": { "mode": { "dark": 8 } }
        }))
        .unwrap();
        assert_eq!(original.scopes(), Some(&[Scope::TextFill][..]));
        assert_eq!(original.modes().unwrap()["dark"], TokenValue::Number(8.0));
    }
}
