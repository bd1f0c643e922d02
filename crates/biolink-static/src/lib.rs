//! Batch site builder for biolink.
//!
//! Scans an input directory for XML page descriptors, compiles each into a
//! standalone HTML document, and copies the bundled icon assets into the
//! output directory when any page depends on them.

pub mod assets;
pub mod builder;

pub use builder::{BuildConfig, BuildError, BuildResult, SiteBuilder};
