//! issue-reactions - A GitHub Action step that adds reactions to an issue or pull request.
//!
//! This library provides the input handling, domain types, and fan-out logic
//! behind the action binary.

pub mod applier;
pub mod github;
pub mod inputs;
pub mod reactions;
pub mod run;
pub mod types;
