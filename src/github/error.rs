//! GitHub API error type.
//!
//! A failed reaction request is reported with its HTTP status (when it can be
//! determined) and message. The one categorization that matters here is
//! whether the failure means the credential cannot access the target resource,
//! which callers surface with a pointer at the action's readme.

use std::fmt;
use thiserror::Error;

/// A GitHub API error from a reaction request.
#[derive(Debug, Error)]
pub struct GitHubApiError {
    /// The HTTP status code, if available.
    pub status_code: Option<u16>,

    /// A human-readable description of the error.
    pub message: String,

    /// The underlying octocrab error, if available.
    #[source]
    pub source: Option<octocrab::Error>,
}

impl fmt::Display for GitHubApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status_code {
            Some(code) => write!(f, "GitHub API error (HTTP {}): {}", code, self.message),
            None => write!(f, "GitHub API error: {}", self.message),
        }
    }
}

impl GitHubApiError {
    /// Wraps an octocrab error, extracting the HTTP status where possible.
    pub fn from_octocrab(err: octocrab::Error) -> Self {
        let message = err.to_string();
        Self {
            status_code: extract_status_code(&message),
            message,
            source: Some(err),
        }
    }

    /// True when GitHub rejected the request because the credential cannot
    /// access the target resource. This is the classic `GITHUB_TOKEN`
    /// permissions failure for runs triggered from forks.
    pub fn is_resource_not_accessible(&self) -> bool {
        is_resource_not_accessible_message(&self.message)
    }
}

/// Checks if an error message indicates the credential lacks access to the
/// target resource.
pub fn is_resource_not_accessible_message(message: &str) -> bool {
    message
        .to_lowercase()
        .contains("resource not accessible by integration")
}

/// Extracts the HTTP status code from an octocrab error message, if present.
///
/// octocrab's `Error` type doesn't expose a stable status accessor across all
/// of its variants, so this parses the error text. The fallback (`None`) only
/// affects how much detail the failure log carries.
fn extract_status_code(err_str: &str) -> Option<u16> {
    // octocrab formats GitHub errors with a "status: NNN" fragment
    if let Some(idx) = err_str.find("status: ") {
        let rest = &err_str[idx + 8..];
        if let Some(end) = rest.find(|c: char| !c.is_ascii_digit()) {
            if let Ok(code) = rest[..end].parse() {
                return Some(code);
            }
        } else if let Ok(code) = rest.trim().parse() {
            return Some(code);
        }
    }

    // Common patterns when the status isn't labelled
    let lower = err_str.to_lowercase();
    if err_str.contains("404") && lower.contains("not found") {
        return Some(404);
    }
    for code in [401u16, 403, 404, 422, 429] {
        if err_str.contains(&code.to_string()) {
            return Some(code);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn status_code_extracted_from_labelled_message() {
        assert_eq!(extract_status_code("GitHub error, status: 403, ..."), Some(403));
        assert_eq!(extract_status_code("status: 422"), Some(422));
    }

    #[test]
    fn status_code_extracted_from_common_patterns() {
        assert_eq!(extract_status_code("404 Not Found"), Some(404));
        assert_eq!(extract_status_code("got a 401 back"), Some(401));
        assert_eq!(extract_status_code("rate limited: 429"), Some(429));
    }

    #[test]
    fn status_code_absent_when_unrecognized() {
        assert_eq!(extract_status_code("connection reset by peer"), None);
        assert_eq!(extract_status_code(""), None);
    }

    #[test]
    fn display_includes_status_when_known() {
        let err = GitHubApiError {
            status_code: Some(403),
            message: "Forbidden".to_string(),
            source: None,
        };
        assert_eq!(err.to_string(), "GitHub API error (HTTP 403): Forbidden");

        let err = GitHubApiError {
            status_code: None,
            message: "timed out".to_string(),
            source: None,
        };
        assert_eq!(err.to_string(), "GitHub API error: timed out");
    }

    #[test]
    fn resource_not_accessible_detection() {
        let err = GitHubApiError {
            status_code: Some(403),
            message: "Resource not accessible by integration".to_string(),
            source: None,
        };
        assert!(err.is_resource_not_accessible());

        assert!(is_resource_not_accessible_message(
            "Resource not accessible by integration"
        ));
        assert!(is_resource_not_accessible_message(
            "GitHub API error (HTTP 403): Resource not accessible by integration"
        ));
        assert!(!is_resource_not_accessible_message("Forbidden"));
        assert!(!is_resource_not_accessible_message("Not Found"));
    }

    proptest! {
        /// The marker is detected anywhere in the message, case-insensitively.
        #[test]
        fn marker_detected_with_any_surroundings(prefix in ".*", suffix in ".*") {
            let message = format!("{}Resource Not Accessible By Integration{}", prefix, suffix);
            prop_assert!(is_resource_not_accessible_message(&message));
        }

        /// Messages without the marker are never flagged.
        #[test]
        fn no_marker_never_flagged(
            message in ".*"
                .prop_filter("must not contain the marker", |s| {
                    !s.to_lowercase().contains("resource not accessible by integration")
                })
        ) {
            prop_assert!(!is_resource_not_accessible_message(&message));
        }
    }
}
