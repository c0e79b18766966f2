use serde::Serialize;

/// Which comment delimiters surrounded the directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `//# sourceMappingURL=...`
    Line,
    /// `/*# sourceMappingURL=... */`
    Block,
}

impl CommentStyle {
    pub const fn from_multiline(multiline: bool) -> Self {
        if multiline {
            Self::Block
        } else {
            Self::Line
        }
    }

    pub const fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            Self::Line => ("//", ""),
            Self::Block => ("/*", " */"),
        }
    }
}

/// The value captured after `sourceMappingURL=`, before any validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawTarget<'a> {
    Url(&'a str),
    Inline {
        mime: Option<&'a str>,
        charset: Option<&'a str>,
        base64_content: &'a str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawComment<'a> {
    pub multiline: bool,
    pub target: RawTarget<'a>,
}

impl<'a> RawComment<'a> {
    #[must_use]
    pub const fn new(multiline: bool, target: RawTarget<'a>) -> Self {
        Self { multiline, target }
    }
}

/// A resolved source map reference.
///
/// Serializes to the same shape callers of the JSON output expect:
/// `{"url": ..., "multiline": ...}` or `{"sourcemap": ..., "multiline": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reference {
    External { url: String, multiline: bool },
    Inline {
        sourcemap: serde_json::Value,
        multiline: bool,
    },
}

impl Reference {
    pub const fn multiline(&self) -> bool {
        match self {
            Self::External { multiline, .. } | Self::Inline { multiline, .. } => *multiline,
        }
    }

    pub const fn style(&self) -> CommentStyle {
        CommentStyle::from_multiline(self.multiline())
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Self::External { url, .. } => Some(url),
            Self::Inline { .. } => None,
        }
    }

    pub const fn sourcemap(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Inline { sourcemap, .. } => Some(sourcemap),
            Self::External { .. } => None,
        }
    }
}
