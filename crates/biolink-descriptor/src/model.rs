//! Typed descriptor model.

/// A parsed page descriptor. Immutable once parsed; one per input file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageDescriptor {
    /// Page title, also used for the document `<title>` and logo alt text
    pub title: String,

    /// Handle shown under the logo (e.g. "@someone")
    pub handle: String,

    /// Link buttons, rendered and scripted in input order
    pub links: Vec<LinkEntry>,

    /// Style variable overrides applied on top of the default theme
    pub style_overrides: Vec<StyleVar>,

    /// Background/icon image directives
    pub image_directives: Vec<ImageDirective>,

    /// Whether the bundled default icons should be copied next to the page
    pub default_icons: bool,
}

impl PageDescriptor {
    /// An empty descriptor with icon copying enabled, the documented default.
    pub fn new() -> Self {
        Self { default_icons: true, ..Default::default() }
    }
}

/// One link button. Text may be empty or duplicated across entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkEntry {
    /// Display text
    pub text: String,
    /// Target URL
    pub url: String,
}

/// A single CSS custom-property override.
///
/// Recognized names overwrite the default theme entry; unrecognized names
/// are appended to the resolved theme as new variables.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleVar {
    pub name: String,
    pub value: String,
}

/// Named image slot a directive targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    /// Page background (`--background-img-main`)
    MainBackground,
    /// Link button background (`--background-img-link-btn`)
    LinkButtonBackground,
    /// Copy button icon (`--icon-img-copy`)
    CopyIcon,
    /// Snackbar clipboard icon (`--icon-img-clipboard`)
    ClipboardIcon,
}

impl ImageSlot {
    /// Parse a directive name into a slot. Unknown names are not an error;
    /// callers skip the directive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "--background-img-main" => Some(Self::MainBackground),
            "--background-img-link-btn" => Some(Self::LinkButtonBackground),
            "--icon-img-copy" => Some(Self::CopyIcon),
            "--icon-img-clipboard" => Some(Self::ClipboardIcon),
            _ => None,
        }
    }
}

/// `background-repeat` mode for a background directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageRepeat {
    Repeat,
    #[default]
    NoRepeat,
}

impl ImageRepeat {
    /// CSS value for the `background-repeat` declaration.
    pub fn as_css(&self) -> &'static str {
        match self {
            Self::Repeat => "repeat",
            Self::NoRepeat => "no-repeat",
        }
    }
}

/// One image directive. At most one directive is meaningful per slot; when
/// several target the same slot the last one wins during resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageDirective {
    pub slot: ImageSlot,
    /// Image URL or path
    pub value: String,
    pub repeat: ImageRepeat,
    /// `background-size`; slot-specific default applied when absent
    pub size: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_slot_tokens() {
        assert_eq!(
            ImageSlot::from_name("--background-img-main"),
            Some(ImageSlot::MainBackground)
        );
        assert_eq!(
            ImageSlot::from_name("--background-img-link-btn"),
            Some(ImageSlot::LinkButtonBackground)
        );
        assert_eq!(ImageSlot::from_name("--icon-img-copy"), Some(ImageSlot::CopyIcon));
        assert_eq!(
            ImageSlot::from_name("--icon-img-clipboard"),
            Some(ImageSlot::ClipboardIcon)
        );
        assert_eq!(ImageSlot::from_name("--something-else"), None);
    }

    #[test]
    fn repeat_defaults_to_no_repeat() {
        assert_eq!(ImageRepeat::default(), ImageRepeat::NoRepeat);
        assert_eq!(ImageRepeat::NoRepeat.as_css(), "no-repeat");
        assert_eq!(ImageRepeat::Repeat.as_css(), "repeat");
    }

    #[test]
    fn new_descriptor_enables_icons() {
        assert!(PageDescriptor::new().default_icons);
    }
}
