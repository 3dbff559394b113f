//! GitHub API client for creating issue reactions.
//!
//! This module provides the octocrab wrapper used to reach the GitHub API,
//! the error type surfaced by failed requests, and the create-reaction call
//! itself behind the `ReactionDispatcher` seam.

mod client;
mod error;
mod reactions;

pub use client::OctocrabClient;
pub use error::{GitHubApiError, is_resource_not_accessible_message};
pub use reactions::{ReactionDispatcher, create_issue_reaction};
