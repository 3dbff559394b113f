//! The create-reaction call and the dispatcher seam.

use std::fmt;
use std::future::Future;

use serde::Serialize;

use crate::reactions::Reaction;
use crate::types::IssueNumber;

use super::client::OctocrabClient;
use super::error::GitHubApiError;

/// Dispatches create-reaction requests against some transport.
///
/// The applier is generic over this trait so tests can observe dispatches
/// without a network.
pub trait ReactionDispatcher {
    /// The error type returned by failed dispatches.
    type Error: fmt::Display;

    /// Creates `reaction` on the issue or pull request `issue`.
    fn create_reaction(
        &self,
        issue: IssueNumber,
        reaction: Reaction,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

impl ReactionDispatcher for OctocrabClient {
    type Error = GitHubApiError;

    async fn create_reaction(
        &self,
        issue: IssueNumber,
        reaction: Reaction,
    ) -> Result<(), GitHubApiError> {
        create_issue_reaction(self, issue, reaction).await
    }
}

/// Creates a reaction on an issue or pull request.
///
/// Reactions on the issue itself (as opposed to one of its comments) go
/// through the issues endpoint, which covers pull requests as well. The call
/// is idempotent upstream: reacting twice with the same user and content is a
/// no-op.
pub async fn create_issue_reaction(
    client: &OctocrabClient,
    issue: IssueNumber,
    reaction: Reaction,
) -> Result<(), GitHubApiError> {
    let url = format!(
        "/repos/{}/{}/issues/{}/reactions",
        client.owner(),
        client.repo_name(),
        issue
    );

    #[derive(Serialize)]
    struct ReactionRequest {
        content: &'static str,
    }

    let result: Result<serde_json::Value, _> = client
        .inner()
        .post(
            &url,
            Some(&ReactionRequest {
                content: reaction.as_api_str(),
            }),
        )
        .await;

    match result {
        Ok(_) => Ok(()),
        Err(e) => Err(GitHubApiError::from_octocrab(e)),
    }
}
