//! Action input handling.
//!
//! GitHub Actions passes step inputs to the process as `INPUT_<NAME>`
//! environment variables (uppercased, hyphens preserved). The environment is
//! captured once at entry into an [`EnvSnapshot`]; nothing reads the ambient
//! environment mid-run, so the repository fallback is an explicit function of
//! the explicit input and the snapshot.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::types::{InvalidRepoId, IssueNumber, RepoId};

/// Environment variable carrying the `token` input.
const INPUT_TOKEN: &str = "INPUT_TOKEN";
/// Environment variable carrying the `repository` input.
const INPUT_REPOSITORY: &str = "INPUT_REPOSITORY";
/// Environment variable carrying the `issue-number` input.
const INPUT_ISSUE_NUMBER: &str = "INPUT_ISSUE-NUMBER";
/// Environment variable carrying the `reactions` input.
const INPUT_REACTIONS: &str = "INPUT_REACTIONS";
/// Ambient `owner/repo` set by the runner for every workflow run.
const GITHUB_REPOSITORY: &str = "GITHUB_REPOSITORY";

/// An immutable snapshot of the process environment, taken once at entry.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Captures the current process environment.
    pub fn capture() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Builds a snapshot from explicit key/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns the value for `key`.
    ///
    /// Empty and whitespace-only values behave as absent, matching the action
    /// runtime's input semantics.
    fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }
}

/// The raw action inputs, read from the environment but not yet validated.
#[derive(Clone)]
pub struct ActionInputs {
    pub token: Option<String>,
    pub repository: Option<String>,
    pub issue_number: Option<String>,
    pub reactions: Option<String>,
}

impl ActionInputs {
    /// Reads the four recognized inputs from the snapshot.
    pub fn from_env(env: &EnvSnapshot) -> Self {
        Self {
            token: env.get(INPUT_TOKEN).map(str::to_string),
            repository: env.get(INPUT_REPOSITORY).map(str::to_string),
            issue_number: env.get(INPUT_ISSUE_NUMBER).map(str::to_string),
            reactions: env.get(INPUT_REACTIONS).map(str::to_string),
        }
    }

    /// Validates the raw inputs into a run configuration.
    ///
    /// The repository falls back to the runner's ambient `GITHUB_REPOSITORY`
    /// when the input is absent; an explicit input always wins.
    pub fn resolve(self, env: &EnvSnapshot) -> Result<RunConfig, InputError> {
        let repository = self
            .repository
            .or_else(|| env.get(GITHUB_REPOSITORY).map(str::to_string))
            .ok_or(InputError::MissingRepository)?;
        let repo = RepoId::parse(&repository)?;

        let issue_number = self.issue_number.ok_or(InputError::MissingIssueNumber)?;
        let issue = match issue_number.parse::<u64>() {
            Ok(n) => IssueNumber(n),
            Err(_) => return Err(InputError::InvalidIssueNumber(issue_number)),
        };

        let reactions = self.reactions.ok_or(InputError::MissingReactions)?;

        Ok(RunConfig {
            token: self.token,
            repo,
            issue,
            reactions,
        })
    }
}

// The credential never appears in logs.
impl fmt::Debug for ActionInputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionInputs")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("repository", &self.repository)
            .field("issue_number", &self.issue_number)
            .field("reactions", &self.reactions)
            .finish()
    }
}

/// Validated configuration for one invocation. Constructed once, never
/// mutated.
#[derive(Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Credential passed opaquely to the API client; absent means an
    /// unauthenticated client.
    pub token: Option<String>,
    /// The repository holding the target issue.
    pub repo: RepoId,
    /// The target issue or pull request.
    pub issue: IssueNumber,
    /// The raw comma-separated reactions list.
    pub reactions: String,
}

impl fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunConfig")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("repo", &self.repo)
            .field("issue", &self.issue)
            .field("reactions", &self.reactions)
            .finish()
    }
}

/// Errors produced while resolving the action inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The `issue-number` input was not provided.
    #[error("Missing 'issue-number'.")]
    MissingIssueNumber,

    /// The `reactions` input was not provided.
    #[error("Missing 'reactions'.")]
    MissingReactions,

    /// Neither the `repository` input nor `GITHUB_REPOSITORY` was set.
    #[error("no repository given: set the 'repository' input or GITHUB_REPOSITORY")]
    MissingRepository,

    /// The repository string was not in `owner/repo` form.
    #[error(transparent)]
    InvalidRepository(#[from] InvalidRepoId),

    /// The `issue-number` input was not a number.
    #[error("invalid issue number '{0}'")]
    InvalidIssueNumber(String),
}
