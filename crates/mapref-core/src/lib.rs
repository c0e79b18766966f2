//! Locate and decode the `sourceMappingURL` comment at the end of a
//! JavaScript or CSS file.
//!
//! ```
//! use mapref_core::Reference;
//!
//! let reference = mapref_core::parse("let a;\n//# sourceMappingURL=app.js.map").unwrap();
//! assert_eq!(
//!     reference,
//!     Some(Reference::External {
//!         url: "app.js.map".into(),
//!         multiline: false,
//!     })
//! );
//! ```
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]

pub mod codec;
pub mod comment;
pub mod content;
pub mod error;
pub mod resolve;
pub mod serialize;
pub mod types;

pub use comment::locate;
pub use error::{Error, Result};
pub use resolve::resolve;
pub use serialize::to_comment;
pub use types::{CommentStyle, RawComment, RawTarget, Reference};

/// Parse the source map comment out of a file's content.
///
/// Accepts text or raw bytes. Returns `Ok(None)` when there is no
/// well-formed comment, and an error when the last comment points at an
/// invalid URL or carries an inline payload that is not UTF-8 JSON.
pub fn parse<T: AsRef<[u8]> + ?Sized>(content: &T) -> Result<Option<Reference>> {
    let text = content::to_text(content.as_ref());

    let Some(raw) = comment::locate(&text) else {
        return Ok(None);
    };

    resolve(raw).map(Some)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn external(url: &str, multiline: bool) -> Option<Reference> {
        Some(Reference::External {
            url: url.to_string(),
            multiline,
        })
    }

    #[test]
    fn parse_url_comment() {
        assert_eq!(
            parse("//# sourceMappingURL=file.js").unwrap(),
            external("file.js", false)
        );
        assert_eq!(
            parse("/* # sourceMappingURL=file.js */").unwrap(),
            external("file.js", true)
        );
    }

    #[test]
    fn parse_inline_comment() {
        let reference =
            parse("//# sourceMappingURL=data:application/json;charset=utf-8;base64,e30=")
                .unwrap();
        assert_eq!(
            reference,
            Some(Reference::Inline {
                sourcemap: json!({}),
                multiline: false,
            })
        );
    }

    #[test]
    fn parse_inline_without_mime() {
        let reference = parse("//# sourceMappingURL=data:;charset=utf-8;base64,e30=").unwrap();
        assert_eq!(reference.unwrap().sourcemap(), Some(&json!({})));
    }

    #[test]
    fn parse_not_found() {
        assert!(parse("").unwrap().is_none());
        assert!(parse("function f() {}\n").unwrap().is_none());
        assert!(parse("//# sourceMappingURL=").unwrap().is_none());
        assert!(parse("//# sourceMappingURL=http://www.domain.com/not percent encoded")
            .unwrap()
            .is_none());
    }

    #[test]
    fn parse_bytes_matches_text() {
        let text = "//# sourceMappingURL=file.js ";
        assert_eq!(parse(text.as_bytes()).unwrap(), parse(text).unwrap());
        assert_eq!(parse(&text.as_bytes().to_vec()).unwrap(), external("file.js", false));
    }

    #[test]
    fn parse_bytes_with_invalid_utf8() {
        let mut content = b"\xff\xfe garbage\n".to_vec();
        content.extend_from_slice(b"//# sourceMappingURL=file.js.map\n");
        assert_eq!(parse(&content).unwrap(), external("file.js.map", false));
    }

    #[test]
    fn parse_invalid_url() {
        let err = parse("//# sourceMappingURL=http://").unwrap_err();
        assert_eq!(err.to_string(), "Source map's URL 'http://' is invalid");
    }

    #[test]
    fn parse_invalid_mime() {
        let err = parse("//# sourceMappingURL=data:invalid_mime;charset=utf-8;base64,e30=")
            .unwrap_err();
        assert!(err.to_string().contains("'invalid_mime'"));

        let err = parse("//# sourceMappingURL=data:charset=utf-8;base64,e30=").unwrap_err();
        assert!(matches!(err, Error::DisallowedMime(_)));
    }

    #[test]
    fn parse_invalid_charset() {
        let err = parse("//# sourceMappingURL=data:application/json;charset=ascii;base64,e30=")
            .unwrap_err();
        assert!(matches!(err, Error::DisallowedCharset(ref c) if c == "ascii"));
    }

    #[test]
    fn parse_invalid_base64() {
        let err = parse(
            "//# sourceMappingURL=data:application/json;charset=utf-8;base64,invalid_base64",
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidInlinePayload(_)));
    }

    #[test]
    fn last_comment_decides_outcome() {
        let content = "//# sourceMappingURL=data:text/plain;base64,e30=\n//# sourceMappingURL=ok.js";
        assert_eq!(parse(content).unwrap(), external("ok.js", false));

        let content = "//# sourceMappingURL=ok.js\n//# sourceMappingURL=data:text/plain;base64,e30=";
        assert!(matches!(parse(content), Err(Error::DisallowedMime(_))));
    }

    #[test]
    fn directive_casing_and_flags_are_equivalent() {
        let expected = parse("//# sourceMappingURL=a.map").unwrap();
        for text in [
            "//# sourceMappingUrl=a.map",
            "//@ sourceMappingURL=a.map",
            "//@ sourceMappingUrl=a.map",
            "  //#  sourceMappingURL  =  a.map  ",
        ] {
            assert_eq!(parse(text).unwrap(), expected, "{text:?}");
        }
    }
}
