/// Escape text for insertion into HTML element content or double-quoted
/// attributes. Total over optional input: absent values become the empty
/// string. `&` is replaced first so later replacements are never re-escaped.
/// Callers apply this exactly once per inserted value.
pub fn escape(text: Option<&str>) -> String {
    match text {
        None => String::new(),
        Some(t) => t
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;"),
    }
}

// ── Tests ──
