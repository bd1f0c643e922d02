//! Page descriptor model and XML parser.
//!
//! A descriptor is one XML document describing a single link-in-bio page:
//! title, handle, an ordered list of link buttons, style variable overrides,
//! and optional image directives. Parsing is best-effort: every section is
//! optional and malformed individual entries are skipped, never fatal.

pub mod model;
pub mod parser;

pub use model::{ImageDirective, ImageRepeat, ImageSlot, LinkEntry, PageDescriptor, StyleVar};
pub use parser::{parse_descriptor, DescriptorError};
