//! Parser for the comma-separated `reactions` input.
//!
//! This is a pure parser: rejected tokens are reported to the caller rather
//! than logged, so the caller owns all output.

use super::Reaction;

/// The result of parsing a raw reactions list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedReactions {
    /// Valid reactions, deduplicated, in first-occurrence order.
    pub accepted: Vec<Reaction>,
    /// Raw tokens that did not name a known reaction, in input order.
    pub skipped: Vec<String>,
}

/// Parses a comma-separated reactions list.
///
/// All whitespace is stripped before splitting, so `" +1 , heart "` parses the
/// same as `"+1,heart"`. Empty tokens produced by stray commas are dropped
/// without a skip record; unknown tokens are collected in `skipped`; duplicate
/// valid tokens keep their first occurrence only.
pub fn parse_reaction_list(raw: &str) -> ParsedReactions {
    let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    let mut parsed = ParsedReactions::default();
    for token in stripped.split(',') {
        if token.is_empty() {
            continue;
        }
        match Reaction::from_input(token) {
            Some(reaction) if !parsed.accepted.contains(&reaction) => {
                parsed.accepted.push(reaction);
            }
            Some(_) => {}
            None => parsed.skipped.push(token.to_string()),
        }
    }
    parsed
}
