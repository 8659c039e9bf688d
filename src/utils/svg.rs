//! SVG markup helpers.

/// Removes a leading XML declaration (`<?xml ... ?>`) and the whitespace
/// following it.
///
/// Images are embedded into an HTML document that declares its own
/// encoding, where a nested prolog is invalid. Markup without a prolog is
/// returned unchanged.
///
/// # Examples
///
/// ```ignore
/// let svg = r#"<?xml version="1.0" standalone="yes"?><svg/>"#;
/// assert_eq!(strip_xml_prolog(svg), "<svg/>");
/// ```
pub fn strip_xml_prolog(svg: &str) -> &str {
    let trimmed = svg.trim_start();

    if !trimmed.starts_with("<?xml") {
        return svg;
    }

    match trimmed.find("?>") {
        Some(end) => trimmed[end + 2..].trim_start(),
        None => svg,
    }
}
