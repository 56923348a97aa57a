/// The theme stylesheet generated from `tokens/tokens.json`.
pub const THEME_CSS: &str = include_str!(concat!(env!("OUT_DIR"), "/theme.css"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_theme_is_generated() {
        assert!(THEME_CSS.contains("@theme {"));
        assert!(THEME_CSS.contains("  --color-surface: rgb(255, 255, 255);\n"));
        assert!(THEME_CSS.contains("  --radius-200: 8px;\n"));
        assert!(THEME_CSS.contains("  [data-theme='dark'] {\n"));
    }
}
