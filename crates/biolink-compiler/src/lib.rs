//! Template-compilation pipeline for biolink pages.
//!
//! Turns one parsed [`PageDescriptor`](biolink_descriptor::PageDescriptor)
//! into a self-contained HTML document: a resolved theme (`:root` custom
//! properties), optional background CSS fragments, link-button markup, and
//! the embedded interaction script. Compilation is pure: no I/O, no shared
//! mutable state, safe to run concurrently for any number of descriptors.

pub mod compile;
pub mod escape;
pub mod ident;
pub mod images;
pub mod markup;
pub mod script;
pub mod templates;
pub mod theme;

pub use compile::{CompileError, CompileOptions, PageCompiler, RenderedPage, ICON_ASSETS};
pub use ident::{derive_idents, link_ident};
pub use images::{resolve_images, ResolvedImages};
pub use templates::TemplateEngine;
pub use theme::{resolve_theme, ResolvedTheme, DEFAULT_THEME};
