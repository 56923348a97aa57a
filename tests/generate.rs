use std::{fs, path::PathBuf};

use design_tokens_tailwind::{run, Config};
use design_tokens_tailwind_core::PluginOptions;

fn bundled_tokens() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tokens/tokens.json")
}

#[test]
fn writes_theme_from_bundled_tokens() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        tokens: vec![bundled_tokens()],
        out_dir: dir.path().to_path_buf(),
        plugin: PluginOptions::default(),
    };
    let written = run(&config).unwrap();
    assert_eq!(written, [dir.path().join("theme.css")]);

    let css = fs::read_to_string(&written[0]).unwrap();
    assert!(css.starts_with("@import url('https://fonts.googleapis.com/css2?family=Mulish"));
    for line in [
        "  --color-surface: rgb(255, 255, 255);",
        "  --color-link: var(--color-brand);",
        "  --color-text-primary: #0f172a;",
        "  --color-border: var(--color-icon-subtle);",
        "  --color-border-focus: var(--color-brand);",
        "  --radius-200: 8px;",
        "  --spacing-0: 0;",
        "  --font-sans: Mulish, sans-serif;",
        "  --shadow-card: 0px 1px 3px 0 var(--color-shadow-soft);",
        "    --radius-200: 12px;",
        "    --shadow-card: none;",
        "  [data-theme='highcontrast'] {",
    ] {
        assert!(css.contains(&format!("{line}\n")), "missing {line:?} in\n{css}");
    }
}

#[test]
fn later_documents_override_earlier_ones() {
    let dir = tempfile::tempdir().unwrap();
    let overrides = dir.path().join("overrides.json");
    fs::write(
        &overrides,
        r##"{ "spacing": { "4": { "$type": "dimension", "$value": { "value": 20, "unit": "px" } } } }"##,
    )
    .unwrap();
    let config = Config {
        tokens: vec![bundled_tokens(), overrides],
        out_dir: dir.path().join("out"),
        plugin: PluginOptions::default().with_file_name("tokens.css"),
    };
    run(&config).unwrap();
    let css = fs::read_to_string(dir.path().join("out/tokens.css")).unwrap();
    assert!(css.contains("  --spacing-4: 20px;\n"));
}

#[test]
fn missing_token_file_is_reported_with_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        tokens: vec![dir.path().join("nope.json")],
        out_dir: dir.path().to_path_buf(),
        plugin: PluginOptions::default(),
    };
    let err = run(&config).unwrap_err();
    assert!(format!("{err:#}").contains("nope.json"));
}
