//! Embedded named-slot templates for the generated page.
//!
//! Slot substitution goes through minijinja rather than sequential string
//! replacement so a resolved value that happens to contain a placeholder
//! token can never be substituted twice.

use minijinja::{AutoEscape, Environment};

/// A link block ready for rendering.
#[derive(Debug, Clone, serde::Serialize)]
pub struct LinkContext {
    /// Derived identifier shared by the `navto-`/`copy-` element pair
    pub id: String,
    /// Display text
    pub text: String,
    /// Target URL, also shown as the tooltip
    pub url: String,
    /// Path of the copy-button icon
    pub copy_icon: String,
}

/// A background CSS rule for one image directive.
#[derive(Debug, Clone, serde::Serialize)]
pub struct BackgroundContext {
    /// CSS selector the rule applies to
    pub selector: String,
    /// Image URL
    pub url: String,
    /// `background-repeat` value
    pub repeat: String,
    /// `background-size` value
    pub size: String,
}

/// Context for rendering the full document shell.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DocumentContext {
    /// Page title
    pub title: String,
    /// Handle shown in the header
    pub handle: String,
    /// Main background CSS rule, or empty
    pub main_background_css: String,
    /// Link button background CSS rule, or empty
    pub link_button_background_css: String,
    /// Resolved `:root` custom-property block
    pub theme_css: String,
    /// Fixed base stylesheet
    pub base_css: String,
    /// Rendered link blocks
    pub links: String,
    /// Rendered interaction script
    pub script: String,
    /// Path of the snackbar clipboard icon
    pub clipboard_icon: String,
}

/// Template engine holding the embedded page templates.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    pub fn new() -> Self {
        let mut env = Environment::new();

        // Compatibility output interpolates raw values; strict-mode
        // escaping is applied at the value layer before rendering.
        env.set_auto_escape_callback(|_| AutoEscape::None);

        env.add_template_owned("document".to_string(), DOCUMENT_TEMPLATE.to_string())
            .expect("Failed to add document template");
        env.add_template_owned("link".to_string(), LINK_TEMPLATE.to_string())
            .expect("Failed to add link template");
        env.add_template_owned("background".to_string(), BACKGROUND_TEMPLATE.to_string())
            .expect("Failed to add background template");

        Self { env }
    }

    /// Render the full document shell.
    pub fn render_document(&self, context: &DocumentContext) -> Result<String, minijinja::Error> {
        self.env.get_template("document")?.render(context)
    }

    /// Render one link block.
    pub fn render_link(&self, context: &LinkContext) -> Result<String, minijinja::Error> {
        self.env.get_template("link")?.render(context)
    }

    /// Render one background CSS rule.
    pub fn render_background(
        &self,
        context: &BackgroundContext,
    ) -> Result<String, minijinja::Error> {
        self.env.get_template("background")?.render(context)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const DOCUMENT_TEMPLATE: &str = r#"
<!DOCTYPE html>
<html>
<head>
    <title>{{ title }}</title>
    <style>
{{ main_background_css }}
{{ link_button_background_css }}
{{ theme_css }}
{{ base_css }}
    </style>
    <link rel="icon" type="image/x-icon" href="./img/favicon.png">
    <script type="module" defer>{{ script }}</script>
</head>
<body>
    <span id="snackbar">
        <img type="image/png" src="{{ clipboard_icon }}" height="20px" />
        Copied to Clipboard
    </span>
    <div id="header">
        <img type="image/png" src="./img/logo.png" height="100vh" alt="The logo for {{ title }}." />
        <div>{{ handle }}</div>
    </div>
    <div id="link-container" class="prevent-select">{{ links }}
    </div>
</body>
</html>
"#;

const LINK_TEMPLATE: &str = r#"
        <div id="navto-{{ id }}" class="link-btn" title="{{ url }}">
            {{ text }}
            <div id="copy-{{ id }}" class="copy-btn">
                <img type="image/png" src="{{ copy_icon }}" />
            </div>
        </div>"#;

const BACKGROUND_TEMPLATE: &str = r#"
    {{ selector }} {
        background-image: url('{{ url }}');
        background-repeat: {{ repeat }};
        background-size: {{ size }};
    }"#;

/// Fixed responsive/base stylesheet embedded in every page.
pub const BASE_CSS: &str = r#"/* General */
html {
    background-color: var(--theme-background-main);
}

a {
    text-decoration: none;
    color: black;
}

#header {
    text-align: center;
    width: 35%;
    margin: auto;
    margin-top: 10vh;
    color: var(--theme-color-main);
    font-family: var(--font-family-primary);
    font-size: var(--font-size-large);
}

/* Utilities */
.prevent-select {
    -webkit-user-select: none;
    /* Safari */
    -ms-user-select: none;
    /* IE 10 and IE 11 */
    user-select: none;
    /* Standard syntax */
}

/* Links */
#link-container {
    width: 35%;
    margin: auto;
    margin-top: 1vh;
    padding: var(--spacing-large);
    border-radius: 24px;
}

.link-btn {
    justify-items: center;
    cursor: pointer;
    margin-top: var(--spacing-medium);
    padding: var(--spacing-medium);
    text-align: center;
    font-weight: 400;
    font-family: var(--font-family-primary);
    font-size: var(--font-size-small);
    color: var(--theme-color-link-btn);
    background-color: var(--theme-background-link-btn);
    border-radius: 8px;
    box-shadow: 0 0 10px #00000036;
    transition: 0.3s;
}

.link-btn:hover {
    box-shadow: 0 0 14px #0000006c;
    scale: 1.01;
}

.copy-btn {
    float: right;
}

.copy-btn img {
    width: var(--copy-btn-size);
    padding: var(--spacing-xs);
    border-radius: 8px;
    transition: 0.3s;
}

.copy-btn img:hover {
    background-color: var(--theme-copy-btn-hover);
}

/* Snackbar */
#snackbar {
    position: fixed;
    top: 30px;
    left: 50%;
    min-width: 250px;
    margin-left: -125px;
    padding: 16px;
    text-align: center;
    font-family: var(--font-family-primary);
    border-radius: 2px;
    background-color: var(--theme-background-link-btn);
    z-index: 1;
    visibility: hidden;
}

#snackbar.show {
    visibility: visible;
    -webkit-animation: fadein 0.5s, fadeout 0.5s 2.5s;
    animation: fadein 0.5s, fadeout 0.5s 2.5s;
}

@-webkit-keyframes fadein {
    from {
        top: 0;
        opacity: 0;
    }

    to {
        top: 30px;
        opacity: 1;
    }
}

@keyframes fadein {
    from {
        top: 0;
        opacity: 0;
    }

    to {
        top: 30px;
        opacity: 1;
    }
}

@-webkit-keyframes fadeout {
    from {
        top: 30px;
        opacity: 1;
    }

    to {
        top: 0;
        opacity: 0;
    }
}

@keyframes fadeout {
    from {
        top: 30px;
        opacity: 1;
    }

    to {
        top: 0;
        opacity: 0;
    }
}"#;
