//! Site builder: descriptor files in, HTML files out.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use walkdir::WalkDir;

use biolink_compiler::{CompileOptions, PageCompiler};
use biolink_descriptor::parse_descriptor;

use crate::assets;

/// Configuration for building a site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory scanned for `*.xml` page descriptors
    pub input_dir: PathBuf,

    /// Output directory for generated pages
    pub output_dir: PathBuf,

    /// Compilation behavior (compat or strict)
    pub options: CompileOptions,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("./build"),
            options: CompileOptions::default(),
        }
    }
}

/// Result of a build run.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages generated
    pub pages: usize,

    /// Number of descriptor files skipped due to per-file failures
    pub skipped: usize,

    /// Whether the bundled icons were copied into the output
    pub icons_copied: bool,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that abort a whole build run. Per-file failures are logged and
/// counted in [`BuildResult::skipped`] instead.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read input directory: {0}")]
    Read(String),

    #[error("Failed to write output: {0}")]
    Write(String),
}

/// Batch builder over one input directory.
pub struct SiteBuilder {
    config: BuildConfig,
    compiler: PageCompiler,
}

impl SiteBuilder {
    /// Create a new site builder.
    pub fn new(config: BuildConfig) -> Self {
        let compiler = PageCompiler::new(config.options);
        Self { config, compiler }
    }

    /// Build every descriptor in the input directory.
    ///
    /// Descriptors compile independently, so per-file read/parse/compile/
    /// write failures skip that file only and never abort the run.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        if !self.config.input_dir.is_dir() {
            return Err(BuildError::Read(format!(
                "Input directory not found: {}",
                self.config.input_dir.display()
            )));
        }

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        let descriptors = self.discover_descriptors();

        // One compilation per file; no shared mutable state.
        let outcomes: Vec<Option<Vec<&'static str>>> = descriptors
            .par_iter()
            .map(|path| self.build_page(path))
            .collect();

        let pages = outcomes.iter().filter(|o| o.is_some()).count();
        let skipped = outcomes.len() - pages;

        let mut required: Vec<&'static str> = Vec::new();
        for asset in outcomes.into_iter().flatten().flatten() {
            if !required.contains(&asset) {
                required.push(asset);
            }
        }

        let icons_copied = if required.is_empty() {
            false
        } else {
            match assets::install(&self.config.output_dir.join("img"), &required) {
                Ok(()) => true,
                Err(e) => {
                    tracing::error!("Failed to copy bundled icons: {}", e);
                    false
                }
            }
        };

        Ok(BuildResult {
            pages,
            skipped,
            icons_copied,
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Find descriptor files directly inside the input directory, sorted by
    /// name so build reports are deterministic.
    fn discover_descriptors(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = WalkDir::new(&self.config.input_dir)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some("xml"))
            .map(|e| e.path().to_path_buf())
            .collect();
        paths.sort();
        paths
    }

    /// Build one descriptor file. Returns the assets the page requires, or
    /// `None` if the file was skipped.
    fn build_page(&self, path: &Path) -> Option<Vec<&'static str>> {
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                return None;
            }
        };

        let descriptor = match parse_descriptor(&source) {
            Ok(descriptor) => descriptor,
            Err(e) => {
                tracing::warn!("Skipping {}: {}", path.display(), e);
                return None;
            }
        };

        let page = match self.compiler.compile(&descriptor) {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!("Failed to compile {}: {}", path.display(), e);
                return None;
            }
        };

        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("page");
        let output_path = self.config.output_dir.join(format!("{}.html", stem));

        if let Err(e) = fs::write(&output_path, &page.html) {
            tracing::warn!("Failed to write {}: {}", output_path.display(), e);
            return None;
        }

        tracing::info!("Generated {}", output_path.display());
        Some(page.required_assets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const DESCRIPTOR: &str = r#"<page>
    <title>Test Page</title>
    <handle>@test</handle>
    <links>
        <link><text>Blog</text><url>https://example.com</url></link>
    </links>
</page>"#;

    fn config(input: &Path, output: &Path) -> BuildConfig {
        BuildConfig {
            input_dir: input.to_path_buf(),
            output_dir: output.to_path_buf(),
            options: CompileOptions::default(),
        }
    }

    #[test]
    fn builds_simple_site() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("pages");
        let output = temp.path().join("build");

        fs::create_dir_all(&input).unwrap();
        fs::write(input.join("index.xml"), DESCRIPTOR).unwrap();

        let result = SiteBuilder::new(config(&input, &output)).build().unwrap();

        assert_eq!(result.pages, 1);
        assert_eq!(result.skipped, 0);
        assert!(result.icons_copied);

        let html = fs::read_to_string(output.join("index.html")).unwrap();
        assert!(html.contains("<title>Test Page</title>"));
        assert!(html.contains("navto-blog"));

        assert!(output.join("img/copy.png").exists());
        assert!(output.join("img/clipboard.png").exists());
    }

    #[test]
    fn malformed_descriptor_skips_that_file_only() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("pages");
        let output = temp.path().join("build");

        fs::create_dir_all(&input).unwrap();
        fs::write(input.join("good.xml"), DESCRIPTOR).unwrap();
        fs::write(input.join("bad.xml"), "<page><title>unclosed").unwrap();

        let result = SiteBuilder::new(config(&input, &output)).build().unwrap();

        assert_eq!(result.pages, 1);
        assert_eq!(result.skipped, 1);
        assert!(output.join("good.html").exists());
        assert!(!output.join("bad.html").exists());
    }

    #[test]
    fn disabled_icons_copy_nothing() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("pages");
        let output = temp.path().join("build");

        fs::create_dir_all(&input).unwrap();
        fs::write(input.join("index.xml"), r#"<page icons="false"><title>T</title></page>"#)
            .unwrap();

        let result = SiteBuilder::new(config(&input, &output)).build().unwrap();

        assert_eq!(result.pages, 1);
        assert!(!result.icons_copied);
        assert!(!output.join("img").exists());
    }

    #[test]
    fn ignores_non_xml_files() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("pages");
        let output = temp.path().join("build");

        fs::create_dir_all(&input).unwrap();
        fs::write(input.join("notes.txt"), "not a descriptor").unwrap();
        fs::write(input.join("index.xml"), DESCRIPTOR).unwrap();

        let result = SiteBuilder::new(config(&input, &output)).build().unwrap();

        assert_eq!(result.pages, 1);
        assert_eq!(result.skipped, 0);
    }

    #[test]
    fn missing_input_directory_is_an_error() {
        let temp = tempdir().unwrap();
        let result = SiteBuilder::new(config(
            &temp.path().join("nope"),
            &temp.path().join("build"),
        ))
        .build();

        assert!(matches!(result, Err(BuildError::Read(_))));
    }

    #[test]
    fn rebuild_overwrites_existing_output() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("pages");
        let output = temp.path().join("build");

        fs::create_dir_all(&input).unwrap();
        fs::write(input.join("index.xml"), DESCRIPTOR).unwrap();

        let builder = SiteBuilder::new(config(&input, &output));
        builder.build().unwrap();

        fs::write(
            input.join("index.xml"),
            "<page><title>Second Run</title></page>",
        )
        .unwrap();
        let result = builder.build().unwrap();

        assert_eq!(result.pages, 1);
        let html = fs::read_to_string(output.join("index.html")).unwrap();
        assert!(html.contains("<title>Second Run</title>"));
    }
}
