//! Markup rendering: link blocks and the document shell.

use biolink_descriptor::LinkEntry;

use crate::escape::escape_html;
use crate::images::ResolvedImages;
use crate::templates::{DocumentContext, LinkContext, TemplateEngine, BASE_CSS};
use crate::theme::ResolvedTheme;

/// Render the link-button blocks, in input order.
///
/// `idents` must be the id list derived for the same `links` slice so the
/// element ids match the script bindings exactly.
pub fn render_links(
    engine: &TemplateEngine,
    links: &[LinkEntry],
    idents: &[String],
    copy_icon: &str,
    escape: bool,
) -> Result<String, minijinja::Error> {
    let mut rendered = String::new();

    for (link, ident) in links.iter().zip(idents) {
        rendered.push_str(&engine.render_link(&LinkContext {
            id: ident.clone(),
            text: maybe_escape(&link.text, escape),
            url: maybe_escape(&link.url, escape),
            copy_icon: maybe_escape(copy_icon, escape),
        })?);
    }

    Ok(rendered)
}

/// Everything the document shell needs, already rendered or resolved.
#[derive(Debug)]
pub struct DocumentParams<'a> {
    pub title: &'a str,
    pub handle: &'a str,
    pub theme: &'a ResolvedTheme,
    pub images: &'a ResolvedImages,
    pub links_html: &'a str,
    pub script: &'a str,
    pub escape: bool,
}

/// Render the full HTML document.
pub fn render_document(
    engine: &TemplateEngine,
    params: &DocumentParams<'_>,
) -> Result<String, minijinja::Error> {
    engine.render_document(&DocumentContext {
        title: maybe_escape(params.title, params.escape),
        handle: maybe_escape(params.handle, params.escape),
        main_background_css: params.images.main_background_css.clone(),
        link_button_background_css: params.images.link_button_background_css.clone(),
        theme_css: params.theme.to_css(),
        base_css: BASE_CSS.to_string(),
        links: params.links_html.to_string(),
        script: params.script.to_string(),
        clipboard_icon: maybe_escape(&params.images.clipboard_icon, params.escape),
    })
}

fn maybe_escape(value: &str, escape: bool) -> String {
    if escape {
        escape_html(value)
    } else {
        value.to_string()
    }
}
