use web_sys as web;

/// Text to form, taken from the label element; `fallback` when it is blank.
pub fn text(label: &web::HtmlElement, fallback: &str) -> String {
    label
        .text_content()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

#[inline]
pub fn reveal(label: &web::HtmlElement) {
    if let Err(e) = label.style().set_property("opacity", "1") {
        log::warn!("[label] reveal failed: {:?}", e);
    }
}
