//! The reaction applier: validate, fan out, report.
//!
//! One create-reaction request is dispatched per valid unique name,
//! concurrently, with settle-all semantics: every request runs to completion
//! regardless of sibling failures, and partial success does not fail the
//! batch. An input with no valid reactions fails before anything is
//! dispatched.

use futures::future::join_all;
use thiserror::Error;
use tracing::{info, warn};

use crate::github::{ReactionDispatcher, is_resource_not_accessible_message};
use crate::reactions::{Reaction, parse_reaction_list};
use crate::types::IssueNumber;

/// The outcome of one dispatched reaction request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionOutcome {
    /// The reaction that was dispatched.
    pub reaction: Reaction,
    /// The failure cause, rendered for reporting; `None` on success.
    pub error: Option<String>,
}

impl ReactionOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// The report for one applied batch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApplyReport {
    /// Outcomes in request-set order (first-occurrence order of the input).
    pub outcomes: Vec<ReactionOutcome>,
    /// Input tokens that did not name a known reaction, in input order.
    pub skipped: Vec<String>,
}

impl ApplyReport {
    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(ReactionOutcome::succeeded)
    }
}

/// Errors that stop the batch before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    /// Every token in the input was rejected, or the input was empty.
    #[error("No valid reactions are contained in '{input}'.")]
    NoValidReactions { input: String },
}

/// Applies the reactions named in `raw_list` to `issue`.
///
/// Invalid tokens are skipped with a notice; the surviving names are
/// deduplicated and dispatched concurrently through `dispatcher`. The batch
/// settles in full before the report is returned. Individual failures are
/// logged with their cause and recorded in the report, but only an empty
/// valid set is an error.
pub async fn apply_reactions<D: ReactionDispatcher>(
    dispatcher: &D,
    issue: IssueNumber,
    raw_list: &str,
) -> Result<ApplyReport, ApplyError> {
    let parsed = parse_reaction_list(raw_list);
    for token in &parsed.skipped {
        info!(token = %token, "skipping invalid reaction");
    }
    if parsed.accepted.is_empty() {
        return Err(ApplyError::NoValidReactions {
            input: raw_list.to_string(),
        });
    }

    // Requests are independent and idempotent upstream; dispatch them all at
    // once and wait for every one to settle.
    let results = join_all(parsed.accepted.iter().map(|&reaction| async move {
        (reaction, dispatcher.create_reaction(issue, reaction).await)
    }))
    .await;

    let mut outcomes = Vec::with_capacity(results.len());
    for (reaction, result) in results {
        match result {
            Ok(()) => {
                info!(reaction = %reaction, issue = %issue, "added reaction to issue");
                outcomes.push(ReactionOutcome {
                    reaction,
                    error: None,
                });
            }
            Err(e) => {
                let cause = e.to_string();
                warn!(
                    reaction = %reaction,
                    issue = %issue,
                    cause = %cause,
                    "adding reaction to issue failed"
                );
                if is_resource_not_accessible_message(&cause) {
                    warn!("See this action's readme for details about this error");
                }
                outcomes.push(ReactionOutcome {
                    reaction,
                    error: Some(cause),
                });
            }
        }
    }

    Ok(ApplyReport {
        outcomes,
        skipped: parsed.skipped,
    })
}
