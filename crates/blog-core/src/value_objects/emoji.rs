//! Emoji reaction tag carried by every entry

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Emoji attached to an entry
///
/// Serialized (and stored) as the upper-case variant name, e.g. `"HAHA"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Emoji {
    Like,
    Love,
    Haha,
    Wow,
    Sad,
    Angry,
}

/// Sentiment an emoji commits its entry to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
}

impl Emoji {
    pub const ALL: [Emoji; 6] = [
        Emoji::Like,
        Emoji::Love,
        Emoji::Haha,
        Emoji::Wow,
        Emoji::Sad,
        Emoji::Angry,
    ];

    /// Polarity this emoji requires of its blog, `None` if unconstrained
    ///
    /// LOVE is deliberately unclassified: it is accepted on any blog.
    pub fn polarity(self) -> Option<Polarity> {
        match self {
            Self::Haha | Self::Like | Self::Wow => Some(Polarity::Positive),
            Self::Sad | Self::Angry => Some(Polarity::Negative),
            Self::Love => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Like => "LIKE",
            Self::Love => "LOVE",
            Self::Haha => "HAHA",
            Self::Wow => "WOW",
            Self::Sad => "SAD",
            Self::Angry => "ANGRY",
        }
    }
}

impl fmt::Display for Emoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing an unknown emoji name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown emoji: {0}")]
pub struct UnknownEmoji(pub String);

impl FromStr for Emoji {
    type Err = UnknownEmoji;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|emoji| emoji.as_str() == s)
            .ok_or_else(|| UnknownEmoji(s.to_string()))
    }
}
