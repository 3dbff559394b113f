//! Top-level wiring: resolve inputs, build the client, apply the reactions.

use thiserror::Error;
use tracing::debug;

use crate::applier::{ApplyError, ApplyReport, apply_reactions};
use crate::github::{OctocrabClient, is_resource_not_accessible_message};
use crate::inputs::{ActionInputs, EnvSnapshot, InputError, RunConfig};

/// A fatal error for the whole invocation.
///
/// Per-reaction request failures are not represented here: they are reported
/// in the [`ApplyReport`] and never fail the run.
#[derive(Debug, Error)]
pub enum RunError {
    /// The action inputs were missing or malformed.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The API client could not be constructed.
    #[error("failed to build GitHub client: {0}")]
    Client(#[source] octocrab::Error),

    /// No valid reactions survived input filtering.
    #[error(transparent)]
    Apply(#[from] ApplyError),
}

impl RunError {
    /// True when the failure cause indicates the credential lacks access to
    /// the target resource.
    pub fn is_resource_not_accessible(&self) -> bool {
        is_resource_not_accessible_message(&self.to_string())
    }
}

/// Runs one invocation against the given environment snapshot.
///
/// Resolves the inputs, builds a repo-scoped client, and applies the
/// requested reactions. Returns the per-reaction report on success; any
/// error here means no reactions were applied beyond those already
/// dispatched (configuration and validation errors dispatch nothing).
pub async fn run(env: &EnvSnapshot) -> Result<ApplyReport, RunError> {
    let inputs = ActionInputs::from_env(env);
    debug!(inputs = ?inputs, "action inputs");

    let RunConfig {
        token,
        repo,
        issue,
        reactions,
    } = inputs.resolve(env)?;
    debug!(repository = %repo, issue = %issue, "resolved target");

    let client = OctocrabClient::from_token(token, repo).map_err(RunError::Client)?;
    Ok(apply_reactions(&client, issue, &reactions).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Only the pre-network failure paths are exercised here; the fan-out
    // itself is covered against a mock dispatcher in the applier tests.

    #[tokio::test]
    async fn missing_issue_number_fails_before_any_request() {
        let env = EnvSnapshot::from_pairs([
            ("INPUT_REPOSITORY", "octocat/hello-world"),
            ("INPUT_REACTIONS", "+1"),
        ]);
        let err = run(&env).await.unwrap_err();
        assert_eq!(err.to_string(), "Missing 'issue-number'.");
    }

    #[tokio::test]
    async fn missing_reactions_fails_before_any_request() {
        let env = EnvSnapshot::from_pairs([
            ("INPUT_REPOSITORY", "octocat/hello-world"),
            ("INPUT_ISSUE-NUMBER", "42"),
        ]);
        let err = run(&env).await.unwrap_err();
        assert_eq!(err.to_string(), "Missing 'reactions'.");
    }

    #[tokio::test]
    async fn malformed_repository_fails_before_any_request() {
        let env = EnvSnapshot::from_pairs([
            ("INPUT_REPOSITORY", "no-slash-here"),
            ("INPUT_ISSUE-NUMBER", "42"),
            ("INPUT_REACTIONS", "+1"),
        ]);
        let err = run(&env).await.unwrap_err();
        assert!(matches!(err, RunError::Input(InputError::InvalidRepository(_))));
    }

    #[test]
    fn access_denied_detection_reads_the_rendered_message() {
        // The detection works on the rendered error text, whichever variant
        // carries it.
        let err = RunError::Apply(ApplyError::NoValidReactions {
            input: "Resource not accessible by integration".to_string(),
        });
        assert!(err.is_resource_not_accessible());

        let err = RunError::Input(InputError::MissingReactions);
        assert!(!err.is_resource_not_accessible());
    }
}
