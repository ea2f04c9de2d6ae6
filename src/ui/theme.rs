/// Colour overrides. Unset tokens fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Theme {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub background: Option<String>,
    pub text: Option<String>,
    pub accent: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTheme {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub text: String,
    pub accent: String,
}

impl Default for ResolvedTheme {
    fn default() -> Self {
        Self {
            primary: "#2563eb".to_string(),
            secondary: "#e0e7ef".to_string(),
            background: "#fff".to_string(),
            text: "#222".to_string(),
            accent: "#f59e42".to_string(),
        }
    }
}

impl Theme {
    pub fn resolve(&self) -> ResolvedTheme {
        let defaults = ResolvedTheme::default();
        let pick = |value: &Option<String>, fallback: String| {
            value
                .as_ref()
                .filter(|value| !value.trim().is_empty())
                .cloned()
                .unwrap_or(fallback)
        };
        ResolvedTheme {
            primary: pick(&self.primary, defaults.primary),
            secondary: pick(&self.secondary, defaults.secondary),
            background: pick(&self.background, defaults.background),
            text: pick(&self.text, defaults.text),
            accent: pick(&self.accent, defaults.accent),
        }
    }
}

impl ResolvedTheme {
    /// Inline CSS custom properties for the component root.
    pub fn css_vars(&self) -> String {
        format!(
            "--primary: {}; --secondary: {}; --background: {}; --text: {}; --accent: {};",
            self.primary, self.secondary, self.background, self.text, self.accent
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_merge_over_defaults() {
        let theme = Theme {
            primary: Some("#47A7F4".to_string()),
            accent: Some(" ".to_string()),
            ..Theme::default()
        };
        let resolved = theme.resolve();
        assert_eq!(resolved.primary, "#47A7F4");
        assert_eq!(resolved.accent, "#f59e42");
        assert_eq!(resolved.background, "#fff");
    }

    #[test]
    fn css_vars_lists_every_token() {
        let vars = Theme::default().resolve().css_vars();
        for name in ["--primary", "--secondary", "--background", "--text", "--accent"] {
            assert!(vars.contains(name), "{name} missing from {vars}");
        }
    }
}
