use std::{env, fs, path::Path};

use design_tokens_tailwind_core::{PluginOptions, TailwindPlugin, TokenDocument};

fn main() {
    let manifest_dir = env::var_os("CARGO_MANIFEST_DIR").unwrap();
    let tokens_path = Path::new(&manifest_dir).join("../tokens/tokens.json");
    let document: TokenDocument = fs::read_to_string(&tokens_path).unwrap().parse().unwrap();

    let css = TailwindPlugin::new(PluginOptions::default())
        .generate(&document.into_tokens())
        .unwrap();

    let out_dir = env::var_os("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("theme.css");
    fs::write(&dest_path, css).unwrap();
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={}", tokens_path.display());
}
