//! Best-effort XML descriptor parsing.
//!
//! Every section of a descriptor is optional and degrades to an empty or
//! default value. Malformed individual entries (a `var` without a `name`,
//! a directive without a value) are skipped one at a time; only an
//! unparseable document or a wrong root element fails the file.

use roxmltree::{Document, Node};

use crate::model::{
    ImageDirective, ImageRepeat, ImageSlot, LinkEntry, PageDescriptor, StyleVar,
};

/// Errors that fail parsing of a whole descriptor file.
#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    #[error("Invalid XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Expected root element <page>, found <{0}>")]
    UnexpectedRoot(String),
}

/// Parse one descriptor document into a [`PageDescriptor`].
pub fn parse_descriptor(source: &str) -> Result<PageDescriptor, DescriptorError> {
    let doc = Document::parse(source)?;
    let page = doc.root_element();

    if page.tag_name().name() != "page" {
        return Err(DescriptorError::UnexpectedRoot(
            page.tag_name().name().to_string(),
        ));
    }

    // Only the literal "false" disables icon copying; anything else,
    // including absence, keeps the default.
    let default_icons = page.attribute("icons") != Some("false");

    Ok(PageDescriptor {
        title: child_text(page, "title").unwrap_or_default().to_string(),
        handle: child_text(page, "handle").unwrap_or_default().to_string(),
        links: parse_links(page),
        style_overrides: parse_styles(page),
        image_directives: parse_images(page),
        default_icons,
    })
}

/// Text content of the first child element with the given tag name.
fn child_text<'a>(node: Node<'a, 'a>, name: &str) -> Option<&'a str> {
    node.children()
        .find(|c| c.has_tag_name(name))
        .and_then(|c| c.text())
}

fn section<'a>(page: Node<'a, 'a>, name: &str) -> impl Iterator<Item = Node<'a, 'a>> {
    page.children()
        .find(|c| c.has_tag_name(name))
        .into_iter()
        .flat_map(|s| s.children().filter(|c| c.is_element()))
}

fn parse_links(page: Node<'_, '_>) -> Vec<LinkEntry> {
    section(page, "links")
        .filter(|n| n.has_tag_name("link"))
        .map(|link| LinkEntry {
            text: child_text(link, "text").unwrap_or_default().to_string(),
            url: child_text(link, "url").unwrap_or_default().to_string(),
        })
        .collect()
}

fn parse_styles(page: Node<'_, '_>) -> Vec<StyleVar> {
    section(page, "styles")
        .filter(|n| n.has_tag_name("var"))
        .filter_map(|var| {
            let name = var.attribute("name")?;
            let value = var.text()?;
            Some(StyleVar { name: name.to_string(), value: value.to_string() })
        })
        .collect()
}

fn parse_images(page: Node<'_, '_>) -> Vec<ImageDirective> {
    section(page, "img")
        .filter(|n| n.has_tag_name("var"))
        .filter_map(|var| {
            let name = var.attribute("name")?;
            let Some(slot) = ImageSlot::from_name(name) else {
                tracing::debug!("Skipping unrecognized image directive: {}", name);
                return None;
            };
            let value = var.text()?;

            let repeat = match var.attribute("repeat") {
                Some("repeat") => ImageRepeat::Repeat,
                _ => ImageRepeat::NoRepeat,
            };

            Some(ImageDirective {
                slot,
                value: value.to_string(),
                repeat,
                size: var.attribute("size").map(str::to_string),
            })
        })
        .collect()
}
