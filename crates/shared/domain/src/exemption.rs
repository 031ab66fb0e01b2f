use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the comparison an exemption applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Keys declared by constants classes.
    Code,
    /// Keys listed in the defaults document.
    Document,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    Prefix,
}

/// A single exemption: `(side, match kind, pattern)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ExemptionRule {
    pub side: Side,
    pub kind: MatchKind,
    pub pattern: String,
}

impl ExemptionRule {
    pub fn code_exact(pattern: impl Into<String>) -> Self {
        Self { side: Side::Code, kind: MatchKind::Exact, pattern: pattern.into() }
    }

    pub fn code_prefix(pattern: impl Into<String>) -> Self {
        Self { side: Side::Code, kind: MatchKind::Prefix, pattern: pattern.into() }
    }

    pub fn doc_exact(pattern: impl Into<String>) -> Self {
        Self { side: Side::Document, kind: MatchKind::Exact, pattern: pattern.into() }
    }

    pub fn doc_prefix(pattern: impl Into<String>) -> Self {
        Self { side: Side::Document, kind: MatchKind::Prefix, pattern: pattern.into() }
    }

    /// Whether `key` is covered by this rule, ignoring the side.
    #[must_use]
    pub fn matches(&self, key: &str) -> bool {
        match self.kind {
            MatchKind::Exact => key == self.pattern,
            MatchKind::Prefix => key.starts_with(&self.pattern),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Code => "code",
            Self::Document => "document",
        })
    }
}

impl fmt::Display for ExemptionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MatchKind::Exact => write!(f, "{} exact '{}'", self.side, self.pattern),
            MatchKind::Prefix => write!(f, "{} prefix '{}*'", self.side, self.pattern),
        }
    }
}
