//! Octocrab client wrapper scoped to a specific repository.
//!
//! This module provides `OctocrabClient`, which wraps an `Octocrab` instance
//! and scopes all operations to a specific repository, so call sites only
//! name the issue and the reaction.

use octocrab::Octocrab;

use crate::types::RepoId;

/// A GitHub API client scoped to a specific repository.
#[derive(Clone)]
pub struct OctocrabClient {
    /// The underlying octocrab client.
    client: Octocrab,

    /// The repository this client is scoped to.
    repo: RepoId,
}

impl OctocrabClient {
    /// Creates a new client scoped to the given repository.
    pub fn new(client: Octocrab, repo: RepoId) -> Self {
        Self { client, repo }
    }

    /// Creates a client for the given repository, authenticated with a
    /// personal token when one is provided.
    ///
    /// Without a token the client is anonymous; GitHub then rejects the
    /// reaction requests themselves rather than the client construction.
    pub fn from_token(token: Option<String>, repo: RepoId) -> Result<Self, octocrab::Error> {
        let mut builder = Octocrab::builder();
        if let Some(token) = token {
            builder = builder.personal_token(token);
        }
        Ok(Self::new(builder.build()?, repo))
    }

    /// Returns a reference to the underlying octocrab client.
    pub fn inner(&self) -> &Octocrab {
        &self.client
    }

    /// Returns the repository this client is scoped to.
    pub fn repo(&self) -> &RepoId {
        &self.repo
    }

    /// Returns the repository owner.
    pub fn owner(&self) -> &str {
        &self.repo.owner
    }

    /// Returns the repository name.
    pub fn repo_name(&self) -> &str {
        &self.repo.repo
    }
}

impl std::fmt::Debug for OctocrabClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OctocrabClient")
            .field("repo", &self.repo)
            .finish_non_exhaustive()
    }
}
