//! GitHub reaction types and the reactions-input parser.

pub mod parse;

pub use parse::{ParsedReactions, parse_reaction_list};

use serde::{Deserialize, Serialize};
use std::fmt;

/// GitHub reaction types.
///
/// These correspond to the reactions available on issues and pull requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reaction {
    /// +1 / thumbs up
    ThumbsUp,
    /// -1 / thumbs down
    ThumbsDown,
    /// Laugh
    Laugh,
    /// Confused
    Confused,
    /// Heart
    Heart,
    /// Hooray / tada
    Hooray,
    /// Rocket
    Rocket,
    /// Eyes
    Eyes,
}

impl Reaction {
    /// Every reaction GitHub accepts, in the order the input enumeration
    /// documents them.
    pub const ALL: [Reaction; 8] = [
        Reaction::ThumbsUp,
        Reaction::ThumbsDown,
        Reaction::Laugh,
        Reaction::Confused,
        Reaction::Heart,
        Reaction::Hooray,
        Reaction::Rocket,
        Reaction::Eyes,
    ];

    /// Returns the GitHub API content string for this reaction.
    pub fn as_api_str(&self) -> &'static str {
        match self {
            Reaction::ThumbsUp => "+1",
            Reaction::ThumbsDown => "-1",
            Reaction::Laugh => "laugh",
            Reaction::Confused => "confused",
            Reaction::Heart => "heart",
            Reaction::Hooray => "hooray",
            Reaction::Rocket => "rocket",
            Reaction::Eyes => "eyes",
        }
    }

    /// Parses a raw input token into a reaction.
    ///
    /// Tokens use the same spelling as the API content strings; anything else
    /// is rejected.
    pub fn from_input(token: &str) -> Option<Self> {
        match token {
            "+1" => Some(Reaction::ThumbsUp),
            "-1" => Some(Reaction::ThumbsDown),
            "laugh" => Some(Reaction::Laugh),
            "confused" => Some(Reaction::Confused),
            "heart" => Some(Reaction::Heart),
            "hooray" => Some(Reaction::Hooray),
            "rocket" => Some(Reaction::Rocket),
            "eyes" => Some(Reaction::Eyes),
            _ => None,
        }
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_api_str())
    }
}
