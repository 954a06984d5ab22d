//! Inline/block classification of HTML elements.

/// HTML elements that are phrasing content
pub const PHRASING_ELEMENTS: &[&str] = &[
    "a", "abbr", "audio", "b", "bdi", "bdo", "br", "button", "canvas", "cite",
    "code", "data", "datalist", "del", "dfn", "em", "embed", "i", "iframe",
    "img", "input", "ins", "kbd", "keygen", "label", "map", "mark", "math",
    "meter", "noscript", "object", "output", "picture", "progress", "q",
    "ruby", "s", "samp", "script", "select", "small", "span", "strong", "sub",
    "sup", "svg", "template", "textarea", "time", "u", "var", "video", "wbr",
];

/// Check if an HTML tag is phrasing content
pub fn is_phrasing_tag(tag: &str) -> bool {
    PHRASING_ELEMENTS.contains(&tag.to_ascii_lowercase().as_str())
}
