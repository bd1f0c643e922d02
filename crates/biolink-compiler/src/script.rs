//! Interaction script rendering.
//!
//! The script is embedded as a deferred module: three fixed helpers plus a
//! pair of event-listener registrations per link entry. The element ids it
//! binds to are the precomputed list shared with the markup renderer, so
//! the bindings always resolve.

use biolink_descriptor::LinkEntry;

use crate::escape::escape_js;

/// Fixed helper functions: snackbar acknowledgment (3000 ms), clipboard
/// copy on primary-button release, navigation on primary/middle release.
const SCRIPT_PRELUDE: &str = r#"
function showSnackBar() {
    var sb = document.getElementById("snackbar");
    sb.className = "show";
    setTimeout(()=>{ sb.className = sb.className.replace("show", ""); }, 3000);
}

function copyToClipboard(event, url) {
    event.stopPropagation();
    if (event.button === 0) {
        navigator.clipboard.writeText(url).then(() => {
            showSnackBar();
        }).catch((err) => {
            console.error("Failed to copy text: ", err);
        });
    }
}

function navigateTo(event, url) {
    if (event.button === 0) {
        window.location.href = url;
    } else if (event.button === 1) {
        window.open(url, '_blank');
    }
}"#;

/// Render the embedded script for a link list.
///
/// `idents` must be the id list derived for the same `links` slice; one
/// navigate binding and one copy binding are emitted per entry, in order.
pub fn render_script(links: &[LinkEntry], idents: &[String], escape_urls: bool) -> String {
    let mut script = String::from(SCRIPT_PRELUDE);

    for (link, ident) in links.iter().zip(idents) {
        let url = if escape_urls { escape_js(&link.url) } else { link.url.clone() };

        script.push_str(&format!(
            "\ndocument.getElementById('navto-{ident}').addEventListener('mouseup', (event) => navigateTo(event, \"{url}\"));\n\
             document.getElementById('copy-{ident}').addEventListener('mouseup', (event) => copyToClipboard(event, \"{url}\"));\n"
        ));
    }

    script
}
