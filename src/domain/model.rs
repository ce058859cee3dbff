use crate::utils::error::PalindromeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Character-indexed window into the searched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub len: usize,
}

impl Span {
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    /// Running-best update: only a strictly longer candidate replaces the current one.
    pub fn keep_longer(&mut self, candidate: Span) {
        if candidate.len > self.len {
            *self = candidate;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalindromeMatch {
    /// Start offset in characters, not bytes.
    pub start: usize,
    /// Length in characters.
    pub len: usize,
    pub text: String,
}

impl PalindromeMatch {
    /// `span` must lie within `chars`.
    pub(crate) fn from_span(chars: &[char], span: Span) -> Self {
        Self {
            start: span.start,
            len: span.len,
            text: chars[span.start..span.end()].iter().collect(),
        }
    }
}

/// One search outcome as printed by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    pub input: String,
    pub strategy: String,
    #[serde(rename = "match")]
    pub found: PalindromeMatch,
}

pub fn is_palindrome(chars: &[char]) -> bool {
    chars.iter().eq(chars.iter().rev())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    BruteForce,
    ExpandAroundCenter,
    #[default]
    Manacher,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::BruteForce,
        Strategy::ExpandAroundCenter,
        Strategy::Manacher,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::BruteForce => "brute-force",
            Strategy::ExpandAroundCenter => "expand-around-center",
            Strategy::Manacher => "manacher",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = PalindromeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PalindromeError::InvalidConfigValueError {
                field: "strategy".to_string(),
                value: s.to_string(),
                reason: "Expected one of: brute-force, expand-around-center, manacher".to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
