//! Newtype wrappers for domain identifiers.
//!
//! These types prevent accidental mixing of different identifiers (e.g., using
//! a plain string where a repository is expected) and make the code more
//! self-documenting.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// An issue or pull request number within a repository.
///
/// GitHub's reactions endpoint is part of the issues API, which covers pull
/// requests as well, so a single number type serves both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueNumber(pub u64);

impl fmt::Display for IssueNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for IssueNumber {
    fn from(n: u64) -> Self {
        IssueNumber(n)
    }
}

/// A repository identifier (owner/repo format).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        RepoId {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Parses an `"owner/repo"` string.
    ///
    /// Requires exactly one `/` separating two non-empty halves; GitHub owner
    /// and repository names never contain slashes.
    pub fn parse(s: &str) -> Result<Self, InvalidRepoId> {
        let Some((owner, repo)) = s.split_once('/') else {
            return Err(InvalidRepoId(s.to_string()));
        };
        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return Err(InvalidRepoId(s.to_string()));
        }
        Ok(RepoId::new(owner, repo))
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Error returned when a repository string is not in `owner/repo` form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid repository '{0}': expected 'owner/repo'")]
pub struct InvalidRepoId(pub String);
