use serde::Deserialize;

pub const DEFAULT_FILE_NAME: &str = "theme.css";

/// Options accepted by the Tailwind plugin.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginOptions {
    /// Name of the generated stylesheet.
    pub file_name: String,
    /// Lines written before the `@theme` block.
    pub imports: Vec<String>,
    /// Namespaces reset to `initial` at the top of the `@theme` block.
    pub reset_prefixes: Vec<String>,
    /// Attribute that selects a mode, as in `[data-theme='dark']`.
    pub mode_attribute: String,
}
impl Default for PluginOptions {
    fn default() -> Self {
        PluginOptions {
            file_name: DEFAULT_FILE_NAME.to_string(),
            imports: vec![
                "@import url('https://fonts.googleapis.com/css2?family=Mulish:ital,wght@0,200..1000;1,200..1000&display=swap');".to_string(),
                "@import \"tailwindcss\";".to_string(),
            ],
            reset_prefixes: ["color", "shadow", "text", "spacing", "border", "typography", "radius"]
                .map(str::to_string)
                .to_vec(),
            mode_attribute: "data-theme".to_string(),
        }
    }
}
impl PluginOptions {
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }
}
