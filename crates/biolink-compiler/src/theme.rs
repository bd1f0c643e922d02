//! Theme resolution: default style variables merged with overrides.

use biolink_descriptor::StyleVar;
use indexmap::IndexMap;

/// Default style variable table.
///
/// Versioned behavior, not configuration: changing an entry changes the
/// output of every page built without an override for it. Declaration
/// order here is the serialization order of the `:root` block.
pub const DEFAULT_THEME: &[(&str, &str)] = &[
    ("--font-size-small", "1.3em"),
    ("--font-size-large", "2em"),
    ("--spacing-xs", "4px"),
    ("--spacing-small", "12px"),
    ("--spacing-medium", "16px"),
    ("--spacing-large", "24px"),
    ("--spacing-xl", "10vh"),
    ("--font-family-primary", "Inter, sans-serif"),
    ("--theme-background-main", "#faddf2"),
    ("--theme-background-link-btn", "#f4aed1"),
    ("--theme-copy-btn-hover", "#ffffff3b"),
    ("--theme-color-main", "#000000"),
    ("--theme-color-link-btn", "#000000"),
    ("--copy-btn-size", "20px"),
];

/// The final mapping of CSS custom-property names to values.
///
/// Always contains every default key; overrides replace values in place,
/// unknown names are appended in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTheme {
    vars: IndexMap<String, String>,
}

impl ResolvedTheme {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize as a `:root` custom-property block, in insertion order.
    pub fn to_css(&self) -> String {
        let body = self
            .vars
            .iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect::<Vec<_>>()
            .join("\n");
        format!(":root {{\n{}\n}}", body)
    }
}

/// Merge style overrides into the default theme table.
pub fn resolve_theme(overrides: &[StyleVar]) -> ResolvedTheme {
    let mut vars: IndexMap<String, String> = DEFAULT_THEME
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

    for var in overrides {
        // IndexMap keeps the original position for existing keys and
        // appends new ones, which is exactly the ordering contract.
        vars.insert(var.name.clone(), var.value.clone());
    }

    ResolvedTheme { vars }
}
