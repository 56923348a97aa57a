use std::convert::Infallible;

use indexmap::IndexMap;

use crate::{
    color::{ColorSerializer, CssColorSerializer},
    error::Result,
    format::ValueFormatter,
    modes::{Mode, ModeExtractor},
    options::PluginOptions,
    theme::Theme,
    Token, TokenSet,
};

/// Where the host wants generated files to go.
pub trait OutputSink {
    type Error;

    fn output_file(&mut self, file_name: &str, contents: String) -> Result<(), Self::Error>;
}

/// Collects outputs in memory, keyed by file name.
impl OutputSink for IndexMap<String, String> {
    type Error = Infallible;

    fn output_file(&mut self, file_name: &str, contents: String) -> Result<(), Infallible> {
        self.insert(file_name.to_string(), contents);
        Ok(())
    }
}

/// One formatted value of one token, for one mode.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformRecord<'a> {
    pub path: &'a str,
    pub token: &'a Token,
    pub value: String,
    pub mode: Mode,
}

/// The Tailwind v4 output plugin: `transform` formats every token, `build`
/// gathers the results into a stylesheet.
#[derive(Debug, Clone, Default)]
pub struct TailwindPlugin<S = CssColorSerializer> {
    pub options: PluginOptions,
    formatter: ValueFormatter<S>,
}
impl TailwindPlugin {
    pub fn new(options: PluginOptions) -> Self {
        TailwindPlugin {
            options,
            formatter: ValueFormatter::default(),
        }
    }
}
impl<S: ColorSerializer> TailwindPlugin<S> {
    pub fn with_color_serializer(options: PluginOptions, colors: S) -> Self {
        TailwindPlugin {
            options,
            formatter: ValueFormatter::new(colors),
        }
    }

    pub fn transform<'a>(&self, tokens: &'a TokenSet) -> Result<Vec<TransformRecord<'a>>> {
        let extractor = ModeExtractor::new(&self.formatter);
        let mut records = Vec::new();
        for (path, token) in tokens {
            let values = extractor
                .extract(token)
                .map_err(|err| err.in_token(path))?;
            records.extend(values.into_iter().map(|value| TransformRecord {
                path: path.as_str(),
                token,
                value: value.value,
                mode: value.mode,
            }));
        }
        tracing::debug!(tokens = tokens.len(), records = records.len(), "transformed tokens");
        Ok(records)
    }

    pub fn build<O: OutputSink>(
        &self,
        records: &[TransformRecord],
        output: &mut O,
    ) -> Result<(), O::Error> {
        let css = Theme::collect(records).to_css(&self.options);
        output.output_file(&self.options.file_name, css)
    }

    /// `transform` and `build` in one go, returning the stylesheet text.
    pub fn generate(&self, tokens: &TokenSet) -> Result<String> {
        let records = self.transform(tokens)?;
        Ok(Theme::collect(&records).to_css(&self.options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColorValue, TokenError};
    use serde_json::json;

    fn tokens(json: serde_json::Value) -> TokenSet {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn build_writes_named_output() {
        let tokens = tokens(json!({
            "spacing.4": { "$type": "dimension", "$value": { "value": 16, "unit": "px" } }
        }));
        let plugin = TailwindPlugin::new(PluginOptions::default().with_file_name("test.css"));
        let records = plugin.transform(&tokens).unwrap();
        let mut files: IndexMap<String, String> = IndexMap::new();
        plugin.build(&records, &mut files).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files["test.css"].contains("\n  --spacing-4: 16px;\n}"));
    }

    #[test]
    fn records_keep_path_and_mode() {
        let tokens = tokens(json!({
            "color.bg.surface.default": {
                "$type": "color",
                "$value": "#fff",
                "$extensions": { "mode": { "dark": "#000" } }
            }
        }));
        let records = TailwindPlugin::new(PluginOptions::default()).transform(&tokens).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].path, "color.bg.surface.default");
        assert_eq!(records[1].mode, Mode::from("dark"));
        assert_eq!(records[1].value, "#000");
    }

    #[test]
    fn malformed_reference_names_the_token() {
        let tokens = tokens(json!({ "color.broken": { "$value": "{}" } }));
        let err = TailwindPlugin::new(PluginOptions::default())
            .generate(&tokens)
            .unwrap_err();
        assert_eq!(
            err,
            TokenError::Token {
                path: "color.broken".to_string(),
                source: Box::new(TokenError::EmptyReference {
                    raw: "{}".to_string()
                }),
            }
        );
    }

    #[test]
    fn custom_color_serializer_is_used() {
        let tokens = tokens(json!({
            "color.brand": { "$value": { "colorSpace": "oklch", "channels": [0.6, 0.2, 250] } }
        }));
        let plugin = TailwindPlugin::with_color_serializer(
            PluginOptions::default(),
            |color: &ColorValue| Some(format!("{}({})", color.color_space, color.channels.len())),
        );
        assert!(plugin.generate(&tokens).unwrap().contains("--color-brand: oklch(3);"));
    }
}
