//! CSS custom-property names for tokens.
//!
//! A name is derived from the token's dot path, its scope tags and its
//! declared type. The rules below are tried in order and the first whose
//! predicate holds builds the name:
//!
//! | # | Rule              | Applies when                                             | Name                     |
//! |---|-------------------|----------------------------------------------------------|--------------------------|
//! | 1 | `font-family`     | path starts with `typography.font-family` (or `typography-font-family`) and scope `FONT_FAMILY` | `--font-<last>` |
//! | 2 | `radius`          | scope `CORNER_RADIUS`, or first segment `border-radius`   | `--radius-<last>`        |
//! | 3 | `text-link`       | `*text-link*`, `text.link.*` or `color.text.link.*`       | `--color-link[-<rest>]`  |
//! | 4 | `text-fill`       | scope `TEXT_FILL`                                         | `--color-<path - color>` |
//! | 5 | `border`          | first segment `border`, or type `border`                  | `--color-<path>` without `default` or a trailing `color` |
//! | 6 | `icon`            | any `icon` segment                                        | `--color-<path>` (`color.icon.*` loses `color`) |
//! | 7 | `bg-surface-fill` | `color.bg.surface`, `color.bg-surface`, `color.bg.fill`, `color.bg-fill` | `--color-surface…` / `--color-fill…` |
//! | 8 | `bg`              | `color.bg.*` or `color.bg-*`                              | `--color-<path - color, bg>` |
//! | 9 | `path`            | always                                                    | `--<path>`               |
//!
//! Rules 3 to 9 drop a trailing `default` segment, or every `default`
//! segment when the path starts with `border`.

use itertools::Itertools;

use crate::{extensions::Scope, Token, TokenType};

/// What a naming rule may look at.
#[derive(Debug, Clone)]
pub struct NameContext<'a> {
    pub path: &'a str,
    pub segments: Vec<&'a str>,
    pub scopes: &'a [Scope],
    pub type_: Option<&'a TokenType>,
}
impl<'a> NameContext<'a> {
    pub fn new(path: &'a str, scopes: &'a [Scope], type_: Option<&'a TokenType>) -> Self {
        NameContext {
            path,
            segments: path.split('.').collect(),
            scopes,
            type_,
        }
    }

    fn has_scope(&self, scope: Scope) -> bool {
        self.scopes.contains(&scope)
    }

    fn first(&self) -> &str {
        self.segments.first().copied().unwrap_or_default()
    }

    fn last(&self) -> &str {
        self.segments.last().copied().unwrap_or_default()
    }

    /// The rule that names this token.
    pub fn rule(&self) -> &'static NamingRule {
        RULES
            .iter()
            .find(|rule| (rule.applies)(self))
            .unwrap_or(&RULES[RULES.len() - 1])
    }

    pub fn name(&self) -> String {
        (self.rule().build)(self)
    }
}

pub struct NamingRule {
    pub name: &'static str,
    pub applies: fn(&NameContext) -> bool,
    pub build: fn(&NameContext) -> String,
}
impl std::fmt::Debug for NamingRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamingRule").field("name", &self.name).finish()
    }
}

pub static RULES: [NamingRule; 9] = [
    NamingRule {
        name: "font-family",
        applies: |ctx| {
            (ctx.path.starts_with("typography-font-family")
                || ctx.path.starts_with("typography.font-family"))
                && ctx.has_scope(Scope::FontFamily)
        },
        build: |ctx| format!("--font-{}", ctx.last()),
    },
    NamingRule {
        name: "radius",
        applies: |ctx| ctx.has_scope(Scope::CornerRadius) || ctx.first() == "border-radius",
        build: |ctx| format!("--radius-{}", ctx.last()),
    },
    NamingRule {
        name: "text-link",
        applies: |ctx| {
            ctx.path.contains("text-link")
                || matches!(
                    ctx.segments.as_slice(),
                    ["text", "link", ..] | ["color", "text", "link", ..]
                )
        },
        build: text_link,
    },
    NamingRule {
        name: "text-fill",
        applies: |ctx| ctx.has_scope(Scope::TextFill),
        build: |ctx| match ctx.segments.as_slice() {
            ["color", rest @ ..] => color_name(rest),
            parts => color_name(parts),
        },
    },
    NamingRule {
        name: "border",
        applies: |ctx| ctx.first() == "border" || ctx.type_ == Some(&TokenType::Border),
        build: |ctx| {
            let mut parts = ctx
                .segments
                .iter()
                .copied()
                .filter(|part| *part != "default")
                .collect_vec();
            while parts.last() == Some(&"color") {
                parts.pop();
            }
            format!("--color-{}", parts.join("-"))
        },
    },
    NamingRule {
        name: "icon",
        applies: |ctx| ctx.segments.contains(&"icon"),
        build: |ctx| match ctx.segments.as_slice() {
            ["color", "icon", ..] => color_name(&ctx.segments[1..]),
            parts => color_name(parts),
        },
    },
    NamingRule {
        name: "bg-surface-fill",
        applies: |ctx| {
            matches!(
                ctx.segments.as_slice(),
                ["color", "bg", "surface" | "fill", ..] | ["color", "bg-surface" | "bg-fill", ..]
            )
        },
        build: |ctx| match ctx.segments.as_slice() {
            ["color", "bg", rest @ ..] => color_name(rest),
            [_, rest @ ..] => color_name(
                &rest
                    .iter()
                    .map(|part| match *part {
                        "bg-surface" => "surface",
                        "bg-fill" => "fill",
                        part => part,
                    })
                    .collect_vec(),
            ),
            [] => color_name(&[]),
        },
    },
    NamingRule {
        name: "bg",
        applies: |ctx| match ctx.segments.as_slice() {
            ["color", "bg", ..] => true,
            ["color", second, ..] => second.starts_with("bg-") && *second != "bg-surface",
            _ => false,
        },
        build: |ctx| match ctx.segments.as_slice() {
            ["color", "bg", rest @ ..] => color_name(rest),
            [_, rest @ ..] => color_name(rest),
            [] => color_name(&[]),
        },
    },
    NamingRule {
        name: "path",
        applies: |_| true,
        build: |ctx| format!("--{}", clean(&ctx.segments).join("-")),
    },
];

fn text_link(ctx: &NameContext) -> String {
    match ctx.segments.as_slice() {
        ["color", "text", "link", rest @ ..] | ["text", "link", rest @ ..] => {
            color_name(&std::iter::once("link").chain(rest.iter().copied()).collect_vec())
        }
        segments => {
            let joined = segments.join("-");
            let tail = joined.split("text-link").nth(1).unwrap_or_default();
            let parts = std::iter::once("link")
                .chain(tail.split('-').filter(|part| !part.is_empty()))
                .collect_vec();
            color_name(&parts)
        }
    }
}

/// Drops `default` segments: all of them under `border`, otherwise only a
/// trailing one.
fn clean<'a>(parts: &[&'a str]) -> Vec<&'a str> {
    match parts {
        ["border", ..] => parts.iter().copied().filter(|part| *part != "default").collect(),
        [rest @ .., "default"] => rest.to_vec(),
        _ => parts.to_vec(),
    }
}

fn color_name(parts: &[&str]) -> String {
    format!("--color-{}", clean(parts).join("-"))
}

/// The variable name a token at `path` is published under.
pub fn variable_name(path: &str, token: &Token) -> String {
    NameContext::new(path, token.scopes(), token.type_.as_ref()).name()
}

/// The name for a bare path, with no scopes or type to go on.
pub fn path_variable_name(segments: &[&str]) -> String {
    let path = segments.join(".");
    NameContext::new(&path, &[], None).name()
}
