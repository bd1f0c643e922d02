//! Page compilation: descriptor in, finished document out.

use biolink_descriptor::PageDescriptor;

use crate::ident::derive_idents;
use crate::images::resolve_images;
use crate::markup::{render_document, render_links, DocumentParams};
use crate::script::render_script;
use crate::templates::TemplateEngine;
use crate::theme::resolve_theme;

/// Bundled icon assets a page depends on when default icons are enabled.
pub const ICON_ASSETS: [&str; 2] = ["copy.png", "clipboard.png"];

/// Compilation behavior switches.
///
/// The default reproduces previously generated output exactly: descriptor
/// text is interpolated raw and duplicate link text produces duplicate
/// element ids. [`CompileOptions::strict`] opts into the hardened variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// HTML-escape title/handle/link text and attribute values, and escape
    /// URLs embedded in the script
    pub escape_text: bool,
    /// Disambiguate colliding element ids with an index suffix
    pub dedupe_ids: bool,
}

impl CompileOptions {
    /// Hardened mode: escape interpolated text and deduplicate ids.
    pub fn strict() -> Self {
        Self { escape_text: true, dedupe_ids: true }
    }
}

/// Final output artifact for one descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    /// The complete HTML document
    pub html: String,
    /// Bundled asset filenames the document depends on
    pub required_assets: Vec<&'static str>,
}

/// Errors that can occur during compilation.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("Failed to render template: {0}")]
    Template(#[from] minijinja::Error),
}

/// Compiles parsed descriptors into HTML documents. Stateless per call;
/// one instance can serve any number of concurrent compilations.
pub struct PageCompiler {
    engine: TemplateEngine,
    options: CompileOptions,
}

impl PageCompiler {
    pub fn new(options: CompileOptions) -> Self {
        Self { engine: TemplateEngine::new(), options }
    }

    pub fn options(&self) -> CompileOptions {
        self.options
    }

    /// Compile one descriptor into a [`RenderedPage`].
    pub fn compile(&self, descriptor: &PageDescriptor) -> Result<RenderedPage, CompileError> {
        let theme = resolve_theme(&descriptor.style_overrides);
        let images = resolve_images(&self.engine, &descriptor.image_directives)?;

        // Ids are derived once and shared by markup and script so the
        // generated bindings always resolve.
        let idents = derive_idents(&descriptor.links, self.options.dedupe_ids);

        let script = render_script(&descriptor.links, &idents, self.options.escape_text);
        let links_html = render_links(
            &self.engine,
            &descriptor.links,
            &idents,
            &images.copy_icon,
            self.options.escape_text,
        )?;

        let html = render_document(
            &self.engine,
            &DocumentParams {
                title: &descriptor.title,
                handle: &descriptor.handle,
                theme: &theme,
                images: &images,
                links_html: &links_html,
                script: &script,
                escape: self.options.escape_text,
            },
        )?;

        let required_assets =
            if descriptor.default_icons { ICON_ASSETS.to_vec() } else { Vec::new() };

        Ok(RenderedPage { html, required_assets })
    }
}

impl Default for PageCompiler {
    fn default() -> Self {
        Self::new(CompileOptions::default())
    }
}
