/// Escape text for use inside XML element content or a quoted attribute.
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Make text safe to place between `<![CDATA[` and `]]>`.
///
/// A literal `]]>` would end the section early, so it is split across two
/// sections.
pub(crate) fn escape_cdata(s: &str) -> String {
    s.replace("]]>", "]]]]><![CDATA[>")
}
