use std::sync::LazyLock;

use url::Url;

use crate::codec;
use crate::error::{Error, Result};
use crate::types::{RawComment, RawTarget, Reference};

/// Source maps are JSON and nothing else.
const ALLOWED_MIMES: &[&str] = &["application/json", "text/json"];
const ALLOWED_CHARSETS: &[&str] = &["utf-8", "utf8"];

/// Relative references are joined onto this only to check their syntax.
static BASE_URL: LazyLock<Url> =
    LazyLock::new(|| Url::parse("http://localhost").expect("base URL is valid"));

pub fn resolve(raw: RawComment<'_>) -> Result<Reference> {
    let multiline = raw.multiline;

    match raw.target {
        RawTarget::Url(url) => resolve_url(url, multiline),
        RawTarget::Inline {
            mime,
            charset,
            base64_content,
        } => resolve_inline(mime, charset, base64_content, multiline),
    }
}

fn resolve_url(url: &str, multiline: bool) -> Result<Reference> {
    validate_url(url)?;
    Ok(Reference::External {
        url: url.to_string(),
        multiline,
    })
}

fn validate_url(url: &str) -> Result<()> {
    BASE_URL
        .join(url)
        .map(|_| ())
        .map_err(|source| Error::InvalidUrl {
            url: url.to_string(),
            source,
        })
}

fn resolve_inline(
    mime: Option<&str>,
    charset: Option<&str>,
    base64_content: &str,
    multiline: bool,
) -> Result<Reference> {
    if let Some(mime) = mime.filter(|m| !ALLOWED_MIMES.contains(m)) {
        return Err(Error::DisallowedMime(mime.to_string()));
    }
    if let Some(charset) = charset.filter(|c| !ALLOWED_CHARSETS.contains(c)) {
        return Err(Error::DisallowedCharset(charset.to_string()));
    }

    let content = codec::decode_lenient(base64_content);
    let text = String::from_utf8_lossy(&content);
    // Bad base64 still decodes to something, so it is reported here too
    let sourcemap = serde_json::from_str(&text).map_err(Error::InvalidInlinePayload)?;

    Ok(Reference::Inline {
        sourcemap,
        multiline,
    })
}
