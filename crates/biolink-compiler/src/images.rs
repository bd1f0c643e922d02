//! Image directive resolution.
//!
//! Background slots resolve to a full CSS rule, or the empty string when no
//! directive targets them, so the page-level `background-color` fallback
//! still applies. Icon slots resolve to the bundled asset path unless a
//! directive replaces it.

use biolink_descriptor::{ImageDirective, ImageSlot};

use crate::templates::{BackgroundContext, TemplateEngine};

/// Bundled copy-button icon path, relative to the generated page.
pub const DEFAULT_COPY_ICON: &str = "./img/copy.png";
/// Bundled snackbar clipboard icon path.
pub const DEFAULT_CLIPBOARD_ICON: &str = "./img/clipboard.png";

const MAIN_BACKGROUND_SELECTOR: &str = "html";
const LINK_BUTTON_SELECTOR: &str = ".link-btn";

const MAIN_BACKGROUND_SIZE: &str = "cover";
const LINK_BUTTON_SIZE: &str = "100% 100%";

/// Resolved image configuration for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedImages {
    /// `html { background-image: … }` rule, or empty
    pub main_background_css: String,
    /// `.link-btn { background-image: … }` rule, or empty
    pub link_button_background_css: String,
    /// Copy-button icon path
    pub copy_icon: String,
    /// Snackbar clipboard icon path
    pub clipboard_icon: String,
}

impl Default for ResolvedImages {
    fn default() -> Self {
        Self {
            main_background_css: String::new(),
            link_button_background_css: String::new(),
            copy_icon: DEFAULT_COPY_ICON.to_string(),
            clipboard_icon: DEFAULT_CLIPBOARD_ICON.to_string(),
        }
    }
}

/// Fold image directives into the per-slot resolution.
///
/// Directives apply in input order, so the last directive for a slot wins.
/// Directives without a value were already dropped at parse time; an empty
/// value is ignored here as well and keeps the prior resolution.
pub fn resolve_images(
    engine: &TemplateEngine,
    directives: &[ImageDirective],
) -> Result<ResolvedImages, minijinja::Error> {
    let mut images = ResolvedImages::default();

    for directive in directives {
        if directive.value.is_empty() {
            continue;
        }

        match directive.slot {
            ImageSlot::MainBackground => {
                images.main_background_css = render_background(
                    engine,
                    directive,
                    MAIN_BACKGROUND_SELECTOR,
                    MAIN_BACKGROUND_SIZE,
                )?;
            }
            ImageSlot::LinkButtonBackground => {
                images.link_button_background_css = render_background(
                    engine,
                    directive,
                    LINK_BUTTON_SELECTOR,
                    LINK_BUTTON_SIZE,
                )?;
            }
            ImageSlot::CopyIcon => {
                images.copy_icon = directive.value.clone();
            }
            ImageSlot::ClipboardIcon => {
                images.clipboard_icon = directive.value.clone();
            }
        }
    }

    Ok(images)
}

fn render_background(
    engine: &TemplateEngine,
    directive: &ImageDirective,
    selector: &str,
    default_size: &str,
) -> Result<String, minijinja::Error> {
    engine.render_background(&BackgroundContext {
        selector: selector.to_string(),
        url: directive.value.clone(),
        repeat: directive.repeat.as_css().to_string(),
        size: directive.size.clone().unwrap_or_else(|| default_size.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use biolink_descriptor::ImageRepeat;

    fn directive(slot: ImageSlot, value: &str) -> ImageDirective {
        ImageDirective {
            slot,
            value: value.to_string(),
            repeat: ImageRepeat::default(),
            size: None,
        }
    }

    #[test]
    fn no_directives_yields_defaults() {
        let engine = TemplateEngine::new();
        let images = resolve_images(&engine, &[]).unwrap();

        assert_eq!(images, ResolvedImages::default());
        assert!(images.main_background_css.is_empty());
        assert_eq!(images.copy_icon, "./img/copy.png");
        assert_eq!(images.clipboard_icon, "./img/clipboard.png");
    }

    #[test]
    fn main_background_defaults_to_cover() {
        let engine = TemplateEngine::new();
        let images =
            resolve_images(&engine, &[directive(ImageSlot::MainBackground, "bg.png")]).unwrap();

        assert!(images.main_background_css.contains("html {"));
        assert!(images.main_background_css.contains("background-size: cover;"));
        assert!(images.main_background_css.contains("background-repeat: no-repeat;"));
        assert!(images.link_button_background_css.is_empty());
    }

    #[test]
    fn link_button_background_defaults_to_full_stretch() {
        let engine = TemplateEngine::new();
        let images =
            resolve_images(&engine, &[directive(ImageSlot::LinkButtonBackground, "btn.png")])
                .unwrap();

        assert!(images.link_button_background_css.contains(".link-btn {"));
        assert!(images
            .link_button_background_css
            .contains("background-size: 100% 100%;"));
    }

    #[test]
    fn explicit_size_and_repeat_win_over_defaults() {
        let engine = TemplateEngine::new();
        let images = resolve_images(
            &engine,
            &[ImageDirective {
                slot: ImageSlot::MainBackground,
                value: "bg.png".to_string(),
                repeat: ImageRepeat::Repeat,
                size: Some("contain".to_string()),
            }],
        )
        .unwrap();

        assert!(images.main_background_css.contains("background-repeat: repeat;"));
        assert!(images.main_background_css.contains("background-size: contain;"));
    }

    #[test]
    fn last_directive_per_slot_wins() {
        let engine = TemplateEngine::new();
        let images = resolve_images(
            &engine,
            &[
                directive(ImageSlot::MainBackground, "first.png"),
                directive(ImageSlot::MainBackground, "second.png"),
            ],
        )
        .unwrap();

        assert!(images.main_background_css.contains("second.png"));
        assert!(!images.main_background_css.contains("first.png"));
    }

    #[test]
    fn icon_directives_replace_paths() {
        let engine = TemplateEngine::new();
        let images = resolve_images(
            &engine,
            &[
                directive(ImageSlot::CopyIcon, "custom/copy.svg"),
                directive(ImageSlot::ClipboardIcon, "custom/clip.svg"),
            ],
        )
        .unwrap();

        assert_eq!(images.copy_icon, "custom/copy.svg");
        assert_eq!(images.clipboard_icon, "custom/clip.svg");
    }

    #[test]
    fn empty_value_keeps_prior_resolution() {
        let engine = TemplateEngine::new();
        let images = resolve_images(&engine, &[directive(ImageSlot::CopyIcon, "")]).unwrap();

        assert_eq!(images.copy_icon, DEFAULT_COPY_ICON);
    }
}
