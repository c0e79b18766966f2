use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::types::{RawComment, RawTarget};

/// `#` or `@`, then `sourceMappingURL` or `sourceMappingUrl`, then `=`.
const DIRECTIVE: &str = r"[ \t]*[#@][ \t]*sourceMappingU(?:RL|rl)[ \t]*=[ \t]*";

/// One comment per line, opening at the start of the line. Line values are
/// any run of non-whitespace; block values additionally never contain `*/`.
static COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"(?m)^[ \t]*(?://{DIRECTIVE}(?P<line>\S+)[ \t]*|/\*{DIRECTIVE}(?P<block>(?:[^\s*]|\*+[^\s*/])+)[ \t]*\*/[ \t]*)\r?$"
    );
    Regex::new(&pattern).expect("comment pattern is valid")
});

static DATA_URI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^data:(?P<mime>[^;,]+)?(?:;charset=(?P<charset>[^;,]+))?;base64,(?P<payload>.+)$")
        .expect("data URI pattern is valid")
});

/// Find the last well-formed source map comment in `text`.
///
/// Candidates that do not fit the grammar are skipped rather than reported,
/// so a broken comment earlier in the file never hides a valid one later.
pub fn locate(text: &str) -> Option<RawComment<'_>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut candidates = 0usize;
    let found = COMMENT
        .captures_iter(text)
        .inspect(|_| candidates += 1)
        .filter_map(|caps| from_captures(&caps))
        .last();

    tracing::trace!(
        candidates,
        found = found.is_some(),
        "Scanned for source map comments"
    );
    found
}

fn from_captures<'a>(caps: &Captures<'a>) -> Option<RawComment<'a>> {
    let (multiline, value) = match (caps.name("line"), caps.name("block")) {
        (Some(m), _) => (false, m.as_str()),
        (None, Some(m)) => (true, m.as_str()),
        (None, None) => return None,
    };

    let target = parse_target(value)?;
    Some(RawComment::new(multiline, target))
}

/// Split a comment value into a URL or the pieces of a base64 data URI.
/// Returns `None` for `data:` values that are not shaped like one.
fn parse_target(value: &str) -> Option<RawTarget<'_>> {
    if !value.starts_with("data:") {
        return Some(RawTarget::Url(value));
    }

    let Some(caps) = DATA_URI.captures(value) else {
        tracing::debug!("Skipping malformed data URI '{}'", value);
        return None;
    };

    Some(RawTarget::Inline {
        mime: caps.name("mime").map(|m| m.as_str()),
        charset: caps.name("charset").map(|m| m.as_str()),
        base64_content: caps.name("payload")?.as_str(),
    })
}
