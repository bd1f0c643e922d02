//! Scaffold a starter descriptor.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(dir: &Path) -> Result<()> {
    tracing::info!("Initializing biolink...");

    if !dir.exists() {
        fs::create_dir_all(dir).context("Failed to create descriptor directory")?;
    }

    let descriptor_path = dir.join("index.xml");
    if descriptor_path.exists() {
        tracing::warn!("{} already exists, leaving it alone", descriptor_path.display());
        return Ok(());
    }

    fs::write(&descriptor_path, STARTER_DESCRIPTOR).context("Failed to write index.xml")?;
    tracing::info!("Created {}", descriptor_path.display());
    tracing::info!("Run 'biolink' to generate your page.");

    Ok(())
}

const STARTER_DESCRIPTOR: &str = r#"<page>
    <title>My Page</title>
    <handle>@handle</handle>
    <links>
        <link>
            <text>My Blog</text>
            <url>https://example.com/blog</url>
        </link>
        <link>
            <text>My Shop</text>
            <url>https://example.com/shop</url>
        </link>
    </links>
    <styles>
        <!-- Override any theme variable, or add your own. -->
        <!-- <var name="--theme-background-main">#faddf2</var> -->
    </styles>
    <img>
        <!-- <var name="--background-img-main" size="cover">./img/background.png</var> -->
        <!-- <var name="--background-img-link-btn">./img/button.png</var> -->
    </img>
</page>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn starter_descriptor_parses() {
        let descriptor = biolink_descriptor::parse_descriptor(STARTER_DESCRIPTOR).unwrap();

        assert_eq!(descriptor.title, "My Page");
        assert_eq!(descriptor.links.len(), 2);
        assert!(descriptor.default_icons);
    }

    #[test]
    fn creates_descriptor_once() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("pages");

        run(&dir).unwrap();
        assert!(dir.join("index.xml").exists());

        // A second run must not overwrite.
        fs::write(dir.join("index.xml"), "<page><title>Edited</title></page>").unwrap();
        run(&dir).unwrap();
        let kept = fs::read_to_string(dir.join("index.xml")).unwrap();
        assert!(kept.contains("Edited"));
    }
}
