//! Document configuration
//!
//! `LineEndingPolicy` decides how raw text is cut into lines, both when a
//! document is constructed and when multi-line text is inserted.
//! `DocumentConfig` bundles it with the logging switch.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How line terminators in raw text are recognised
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LineEndingPolicy {
    /// `"\r\n"` is a single terminator; a lone `'\r'` or `'\n'` also ends a line
    #[default]
    Unified,

    /// Every `'\r'` and every `'\n'` ends a line on its own, so `"\r\n"`
    /// produces an extra empty line
    PerCharacter,
}

impl LineEndingPolicy {
    /// Split `text` into lines
    ///
    /// Always yields at least one line; the empty string yields `[""]`.
    #[must_use]
    pub fn split(self, text: &str) -> Vec<String> {
        match self {
            Self::PerCharacter => text.split(['\r', '\n']).map(str::to_owned).collect(),
            Self::Unified => {
                let mut lines = Vec::new();
                let mut rest = text;
                while let Some(idx) = rest.find(['\r', '\n']) {
                    lines.push(rest[..idx].to_owned());
                    let skip = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                    rest = &rest[idx + skip..];
                }
                lines.push(rest.to_owned());
                lines
            }
        }
    }

    /// Check whether `text` is exactly one line terminator under this policy
    #[must_use]
    pub fn is_single_terminator(self, text: &str) -> bool {
        match self {
            Self::Unified => matches!(text, "\n" | "\r" | "\r\n"),
            Self::PerCharacter => matches!(text, "\n" | "\r"),
        }
    }
}

/// Configuration for a [`TextDocument`](crate::TextDocument)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DocumentConfig {
    /// Terminator policy for construction and inserted text
    pub line_endings: LineEndingPolicy,

    /// Whether edit operations emit `debug!` records
    pub enable_logging: bool,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            line_endings: LineEndingPolicy::Unified,
            enable_logging: true,
        }
    }
}

impl DocumentConfig {
    /// Use the given terminator policy
    #[must_use]
    pub const fn line_endings(mut self, policy: LineEndingPolicy) -> Self {
        self.line_endings = policy;
        self
    }

    /// Enable or disable per-edit logging
    #[must_use]
    pub const fn enable_logging(mut self, enable: bool) -> Self {
        self.enable_logging = enable;
        self
    }
}
