//! Variant detection from deployment-platform environment signals.
//!
//! Vercel exposes the deployment URL, the production project URL, and the
//! git branch to every build. Which portal to compile is inferred from
//! those strings alone: first-match-wins, case-sensitive substring tests,
//! owner as the fallback. Detection is total — it never fails.

use crate::variant::Variant;

pub const URL_VAR: &str = "VERCEL_URL";
pub const PROJECT_VAR: &str = "VERCEL_PROJECT_PRODUCTION_URL";
pub const BRANCH_VAR: &str = "VERCEL_GIT_COMMIT_REF";

const DEFAULT_BRANCH: &str = "main";

/// The three deployment-platform strings the detector consumes. Read once
/// at startup, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signals {
    pub url: String,
    pub project: String,
    pub branch: String,
}

impl Signals {
    pub fn new(
        url: impl Into<String>,
        project: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            project: project.into(),
            branch: branch.into(),
        }
    }

    /// Read the signals from the ambient environment. Absent variables
    /// become empty strings; an absent branch defaults to `main`.
    pub fn from_env() -> Self {
        Self {
            url: std::env::var(URL_VAR).unwrap_or_default(),
            project: std::env::var(PROJECT_VAR).unwrap_or_default(),
            branch: std::env::var(BRANCH_VAR).unwrap_or_else(|_| DEFAULT_BRANCH.to_string()),
        }
    }

    fn any_contains(&self, needle: &str) -> bool {
        self.url.contains(needle)
            || self.project.contains(needle)
            || self.branch.contains(needle)
    }
}

/// Map signals to a variant.
///
/// Priority: tenant > admin > owner. Signals are checked in url → project →
/// branch order, but priority is by needle, not by signal: a "tenant" match
/// anywhere wins over an "admin" match anywhere.
pub fn detect(signals: &Signals) -> Variant {
    if signals.any_contains("tenant") {
        return Variant::Tenant;
    }
    if signals.any_contains("admin") {
        return Variant::Admin;
    }
    Variant::Owner
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
