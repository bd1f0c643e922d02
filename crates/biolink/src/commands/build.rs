//! Site build command.

use std::path::PathBuf;

use anyhow::Result;
use biolink_compiler::CompileOptions;
use biolink_static::{BuildConfig, SiteBuilder};

/// Run the build command.
pub fn run(input: PathBuf, output: PathBuf, strict: bool) -> Result<()> {
    tracing::info!(
        "Building pages from {} into {}",
        input.display(),
        output.display()
    );

    let options = if strict { CompileOptions::strict() } else { CompileOptions::default() };

    let config = BuildConfig { input_dir: input, output_dir: output, options };

    let result = SiteBuilder::new(config).build()?;

    if result.skipped > 0 {
        tracing::warn!("Skipped {} descriptor file(s), see warnings above", result.skipped);
    }

    tracing::info!(
        "Built {} page(s) in {}ms",
        result.pages,
        result.duration_ms
    );

    if result.icons_copied {
        tracing::info!("Copied default icons to {}", result.output_dir.join("img").display());
    }

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
