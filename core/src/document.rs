use std::str::FromStr;

use serde_json::{Map, Value as Json};

use crate::{Token, TokenSet, TokenType};

/// The tokens of one or more token documents.
///
/// Accepts both a tree of groups (`{"color": {"bg": {"$value": ..}}}`) and
/// an already flattened map of dot paths. Groups pass their `$type` down to
/// tokens that do not declare one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenDocument {
    pub tokens: TokenSet,
}
impl TokenDocument {
    pub fn from_json(json: &Json) -> serde_json::Result<Self> {
        let mut document = TokenDocument::default();
        if let Json::Object(root) = json {
            walk(root, &mut Vec::new(), None, &mut document.tokens)?;
        }
        Ok(document)
    }

    /// Adds `other`'s tokens; a path defined in both keeps `other`'s token.
    pub fn merge(&mut self, other: TokenDocument) {
        self.tokens.extend(other.tokens);
    }

    pub fn into_tokens(self) -> TokenSet {
        self.tokens
    }
}
impl FromStr for TokenDocument {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenDocument::from_json(&serde_json::from_str(s)?)
    }
}

fn walk(
    group: &Map<String, Json>,
    path: &mut Vec<String>,
    inherited: Option<&str>,
    tokens: &mut TokenSet,
) -> serde_json::Result<()> {
    let inherited = group.get("$type").and_then(Json::as_str).or(inherited);
    for (key, node) in group {
        if key.starts_with('$') {
            continue;
        }
        let Json::Object(child) = node else {
            tracing::trace!(key = %key, "skipping non-object group member");
            continue;
        };
        path.push(key.clone());
        if child.contains_key("$value") {
            let mut token: Token = serde_json::from_value(node.clone())?;
            if token.type_.is_none() {
                token.type_ = inherited.map(TokenType::from);
            }
            tokens.insert(path.join("."), token);
        } else {
            walk(child, path, inherited, tokens)?;
        }
        path.pop();
    }
    Ok(())
}
