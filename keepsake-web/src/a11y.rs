// Accessibility helpers

/// Critical CSS injected at the shell: visible focus indicators and the
/// screen-reader-only utility class.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus{outline:3px solid #b13c6b;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Update the live region so assistive technology hears state changes that
/// are otherwise conveyed visually (gate errors, reveals).
pub fn set_status(msg: &str) {
    if let Some(node) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id("card-status"))
    {
        node.set_text_content(Some(msg));
    }
}
