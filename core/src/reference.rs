use itertools::Itertools;

use crate::{
    error::{Result, TokenError},
    naming,
};

/// `true` for strings bounded by `{` and `}`.
pub fn is_reference(value: &str) -> bool {
    value.starts_with('{') && value.ends_with('}')
}

/// A parsed `{path.to.token}` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub segments: Vec<String>,
}
impl Reference {
    /// `Ok(None)` when `raw` is not a reference at all.
    pub fn parse(raw: &str) -> Result<Option<Self>> {
        if !is_reference(raw) {
            return Ok(None);
        }
        let Ok(segments) = reference_parser::reference(raw) else {
            return Ok(None);
        };
        if segments.iter().all(|s| s.trim().is_empty()) {
            return Err(TokenError::EmptyReference {
                raw: raw.to_string(),
            });
        }
        Ok(Some(Reference {
            segments: segments.into_iter().map(str::to_string).collect(),
        }))
    }

    /// The variable the referenced token is published under.
    pub fn variable_name(&self) -> String {
        let mut segments = self.segments.iter().map(String::as_str).collect_vec();
        if segments.starts_with(&["color", "icon"]) {
            segments.remove(0);
        }
        match segments.as_slice() {
            ["typography", "font-family", font, ..] | ["typography-font-family", font, ..] => {
                format!("--font-{font}")
            }
            ["border-radius", rest @ ..] | ["border", "radius", rest @ ..] => {
                format!("--radius-{}", rest.iter().join("-"))
            }
            _ => naming::path_variable_name(&segments),
        }
    }

    pub fn to_css(&self) -> String {
        format!("var({})", self.variable_name())
    }
}

/// Rewrites a reference into a `var(--name)` expression. Any other string is
/// returned unchanged.
pub fn resolve_reference(value: &str) -> Result<String> {
    Ok(match Reference::parse(value)? {
        Some(reference) => reference.to_css(),
        None => value.to_string(),
    })
}

peg::parser! {
  grammar reference_parser() for str {
    rule segment() -> &'input str = $((!"." !("}" ![_]) [_])*)

    pub(crate) rule reference() -> Vec<&'input str> = "{" s:(segment() ** ".") "}" { s }
  }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parser() {
        assert_eq!(
            reference_parser::reference("{hello.world}").unwrap(),
            vec!["hello", "world"]
        );
        assert_eq!(reference_parser::reference("{a}b}").unwrap(), vec!["a}b"]);
        assert_eq!(reference_parser::reference("{}").unwrap(), vec![""]);
        assert!(reference_parser::reference("hello.world").is_err());
    }

    #[test]
    fn passes_through_plain_strings() {
        assert_eq!(resolve_reference("16px").unwrap(), "16px");
        assert_eq!(resolve_reference("{open").unwrap(), "{open");
    }

    #[test]
    fn generic_paths_join_with_dashes() {
        assert_eq!(resolve_reference("{spacing.4}").unwrap(), "var(--spacing-4)");
        assert_eq!(
            resolve_reference("{color.primary.500}").unwrap(),
            "var(--color-primary-500)"
        );
    }

    #[test]
    fn icon_font_and_radius_references() {
        assert_eq!(
            resolve_reference("{color.icon.subtle}").unwrap(),
            "var(--color-icon-subtle)"
        );
        assert_eq!(
            resolve_reference("{typography.font-family.sans}").unwrap(),
            "var(--font-sans)"
        );
        assert_eq!(
            resolve_reference("{typography-font-family.mono}").unwrap(),
            "var(--font-mono)"
        );
        assert_eq!(resolve_reference("{border-radius.100}").unwrap(), "var(--radius-100)");
        assert_eq!(resolve_reference("{border.radius.lg}").unwrap(), "var(--radius-lg)");
    }

    #[test]
    fn references_follow_path_naming_rules() {
        assert_eq!(
            resolve_reference("{color.bg.surface.default}").unwrap(),
            "var(--color-surface)"
        );
        assert_eq!(
            resolve_reference("{color.text.link.hover}").unwrap(),
            "var(--color-link-hover)"
        );
        assert_eq!(
            resolve_reference("{border.default.color}").unwrap(),
            "var(--color-border)"
        );
    }

    #[test]
    fn empty_reference_is_an_error() {
        assert_eq!(
            resolve_reference("{}"),
            Err(TokenError::EmptyReference {
                raw: "{}".to_string()
            })
        );
        assert!(resolve_reference("{ }").is_err());
    }
}
