use thiserror::Error;

/// Nesting limit for `$value` / `value` wrappers before a value is rejected.
pub const MAX_UNWRAP_DEPTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("reference `{raw}` does not name a token path")]
    EmptyReference { raw: String },
    #[error("value is nested more than {limit} wrappers deep")]
    UnwrapDepth { limit: usize },
    #[error("token `{path}`: {source}")]
    Token {
        path: String,
        #[source]
        source: Box<TokenError>,
    },
}
impl TokenError {
    pub fn in_token(self, path: &str) -> Self {
        match self {
            TokenError::Token { .. } => self,
            other => TokenError::Token {
                path: path.to_string(),
                source: Box::new(other),
            },
        }
    }
}

pub type Result<T, E = TokenError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_context_is_added_once() {
        let err = TokenError::EmptyReference {
            raw: "{}".to_string(),
        }
        .in_token("color.a")
        .in_token("color.b");
        assert_eq!(
            err.to_string(),
            "token `color.a`: reference `{}` does not name a token path"
        );
    }
}
