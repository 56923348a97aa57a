use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::Context;
use design_tokens_tailwind_core::{OutputSink, PluginOptions, TailwindPlugin, TokenDocument};
use serde::Deserialize;

/// What to read, where to write, and how to render.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Token documents, merged in order; later files win on a shared path.
    pub tokens: Vec<PathBuf>,
    pub out_dir: PathBuf,
    pub plugin: PluginOptions,
}
impl Default for Config {
    fn default() -> Self {
        Config {
            tokens: vec![PathBuf::from("tokens/tokens.json")],
            out_dir: PathBuf::from("build"),
            plugin: PluginOptions::default(),
        }
    }
}
impl Config {
    /// Reads a config file. Relative token and output paths are taken
    /// relative to the file's directory.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let mut config: Config = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        if let Some(base) = path.parent() {
            for tokens in &mut config.tokens {
                *tokens = base.join(&*tokens);
            }
            config.out_dir = base.join(&config.out_dir);
        }
        Ok(config)
    }

    pub fn read_tokens(&self) -> anyhow::Result<TokenDocument> {
        let mut document = TokenDocument::default();
        for path in &self.tokens {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading tokens {}", path.display()))?;
            let next: TokenDocument = text
                .parse()
                .with_context(|| format!("parsing tokens {}", path.display()))?;
            tracing::debug!(path = %path.display(), tokens = next.tokens.len(), "read token document");
            document.merge(next);
        }
        Ok(document)
    }
}

/// Writes outputs as files under a directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct DirectoryOutput {
    root: PathBuf,
    written: Vec<PathBuf>,
}
impl DirectoryOutput {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirectoryOutput {
            root: root.into(),
            written: Vec::new(),
        }
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}
impl OutputSink for DirectoryOutput {
    type Error = io::Error;

    fn output_file(&mut self, file_name: &str, contents: String) -> io::Result<()> {
        fs::create_dir_all(&self.root)?;
        let path = self.root.join(file_name);
        fs::write(&path, contents)?;
        tracing::info!(path = %path.display(), "wrote stylesheet");
        self.written.push(path);
        Ok(())
    }
}

/// Reads the configured documents and writes the stylesheet. Returns the
/// paths written.
pub fn run(config: &Config) -> anyhow::Result<Vec<PathBuf>> {
    let tokens = config.read_tokens()?.into_tokens();
    let plugin = TailwindPlugin::new(config.plugin.clone());
    let records = plugin.transform(&tokens)?;
    let mut output = DirectoryOutput::new(&config.out_dir);
    plugin
        .build(&records, &mut output)
        .with_context(|| format!("writing to {}", config.out_dir.display()))?;
    Ok(output.written)
}
