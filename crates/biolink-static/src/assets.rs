//! Bundled static assets.
//!
//! The default icons ship inside the binary and are written into the
//! output's `img/` subdirectory at build time. Installation is idempotent:
//! create-if-absent on the directory, overwrite-on-copy for the files, so
//! concurrent or repeated builds into the same output cannot conflict.

use std::fs;
use std::io;
use std::path::Path;

/// Bundled icon assets, by output filename.
pub const BUNDLED_ICONS: &[(&str, &[u8])] = &[
    ("copy.png", include_bytes!("../assets/copy.png")),
    ("clipboard.png", include_bytes!("../assets/clipboard.png")),
];

/// Look up a bundled asset by filename.
pub fn bundled(name: &str) -> Option<&'static [u8]> {
    BUNDLED_ICONS
        .iter()
        .find(|(asset, _)| *asset == name)
        .map(|(_, bytes)| *bytes)
}

/// Write the requested bundled assets into `img_dir`, creating it first.
///
/// Unknown names are skipped with a warning; per-file write failures are
/// reported through the error so the caller can log and continue.
pub fn install(img_dir: &Path, names: &[&str]) -> io::Result<()> {
    fs::create_dir_all(img_dir)?;

    for name in names {
        let Some(bytes) = bundled(name) else {
            tracing::warn!("No bundled asset named {}", name);
            continue;
        };
        fs::write(img_dir.join(name), bytes)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn bundles_both_icons() {
        assert!(bundled("copy.png").is_some());
        assert!(bundled("clipboard.png").is_some());
        assert!(bundled("favicon.png").is_none());
    }

    #[test]
    fn bundled_icons_are_png() {
        for (name, bytes) in BUNDLED_ICONS {
            assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"), "{} is not a PNG", name);
        }
    }

    #[test]
    fn install_is_idempotent() {
        let temp = tempdir().unwrap();
        let img = temp.path().join("img");

        install(&img, &["copy.png", "clipboard.png"]).unwrap();
        install(&img, &["copy.png", "clipboard.png"]).unwrap();

        assert!(img.join("copy.png").exists());
        assert!(img.join("clipboard.png").exists());
    }
}
