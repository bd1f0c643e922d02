//! Stable element identifier derivation for link entries.
//!
//! The same derivation feeds both the markup (`navto-<id>`, `copy-<id>`)
//! and the script bindings that look those elements up at load time, so it
//! lives in one place and callers share one precomputed id list.

use std::collections::HashMap;
use std::sync::LazyLock;

use biolink_descriptor::LinkEntry;
use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Derive the identifier for a link entry.
///
/// Lowercases the display text and removes the first whitespace run only;
/// later runs stay embedded in the id. Generated output depends on this
/// exact substitution, so it is covered by tests rather than "fixed".
/// Empty text falls back to the entry's zero-based position.
pub fn link_ident(text: &str, index: usize) -> String {
    let lowered = text.to_lowercase();
    // Regex::replace substitutes the leftmost match only.
    let stripped = WHITESPACE_RUN.replace(&lowered, "");

    if stripped.is_empty() {
        index.to_string()
    } else {
        stripped.into_owned()
    }
}

/// Derive the full id list for a link list, in input order.
///
/// With `dedupe` set, second and later occurrences of an id get a
/// `-<index>` suffix so every element id in the page is unique. The compat
/// default keeps collisions as-is, matching previously generated output.
pub fn derive_idents(links: &[LinkEntry], dedupe: bool) -> Vec<String> {
    let mut idents: Vec<String> = links
        .iter()
        .enumerate()
        .map(|(index, link)| link_ident(&link.text, index))
        .collect();

    if dedupe {
        let mut seen: HashMap<String, usize> = HashMap::new();
        for (index, ident) in idents.iter_mut().enumerate() {
            let count = seen.entry(ident.clone()).or_insert(0);
            if *count > 0 {
                *ident = format!("{}-{}", ident, index);
            }
            *count += 1;
        }
    }

    idents
}
