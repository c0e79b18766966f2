use std::borrow::Cow;

/// Turn file content into text for the comment grammar.
///
/// Valid UTF-8 is borrowed as-is. Invalid sequences become U+FFFD, so raw
/// buffers never fail to convert.
pub fn to_text(content: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(content)
}
