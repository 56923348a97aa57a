use std::collections::BTreeMap;

use indexmap::IndexMap;
use itertools::Itertools;

use crate::{modes::Mode, naming::variable_name, options::PluginOptions, plugin::TransformRecord};

/// Variable name to value text, iterated in name order.
pub type Variables = BTreeMap<String, String>;

/// The default variables plus one set per mode, modes in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    pub default: Variables,
    pub modes: IndexMap<String, Variables>,
}
impl Theme {
    pub fn collect<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a TransformRecord<'a>>,
    {
        records.into_iter().fold(Theme::default(), |mut theme, record| {
            let name = variable_name(record.path, record.token);
            theme.insert(&record.mode, name, record.value.clone());
            theme
        })
    }

    /// Last write wins when `name` is already set for `mode`.
    pub fn insert(&mut self, mode: &Mode, name: String, value: String) {
        let variables = match mode {
            Mode::Default => &mut self.default,
            Mode::Named(mode) => self.modes.entry(mode.clone()).or_default(),
        };
        if let Some(previous) = variables.insert(name.clone(), value) {
            tracing::debug!(%mode, %name, %previous, "variable overwritten");
        }
    }

    pub fn to_css(&self, options: &PluginOptions) -> String {
        let mut output = options.imports.clone();
        output.push(String::new());
        output.push("@theme {".to_string());
        output.extend(
            options
                .reset_prefixes
                .iter()
                .map(|prefix| format!("  --{prefix}-*: initial;")),
        );
        output.push(String::new());
        output.extend(declarations(&self.default, "  "));
        output.push("}".to_string());
        output.push(String::new());

        for (mode, variables) in &self.modes {
            output.push(format!(
                "  [{}='{}'] {{",
                options.mode_attribute,
                mode.to_lowercase()
            ));
            output.extend(declarations(variables, "    "));
            output.push("  }".to_string());
            output.push(String::new());
        }
        tracing::debug!(
            variables = self.default.len(),
            modes = %self.modes.keys().join(", "),
            "rendered theme"
        );
        output.join("\n")
    }
}

fn declarations<'a>(variables: &'a Variables, indent: &'a str) -> impl Iterator<Item = String> + 'a {
    variables
        .iter()
        .map(move |(name, value)| format!("{indent}{name}: {value};"))
}
