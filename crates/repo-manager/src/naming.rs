//! Branch name validation
//!
//! Pure rules mirroring git's ref-name restrictions (`git check-ref-format`).
//! No subprocess is invoked and nothing is cached; all broken rules are
//! collected rather than stopping at the first.

use serde::Serialize;

/// Maximum accepted branch-name length, including any applied prefix.
pub const MAX_BRANCH_NAME_LEN: usize = 100;

/// Outcome of validating (and optionally prefixing) a branch name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchNameValidation {
    /// True when no rule was broken
    pub valid: bool,
    /// Human-readable message per broken rule
    pub errors: Vec<String>,
    /// `prefix + name` when a non-empty prefix was given and the result is
    /// valid; the bare name otherwise
    pub normalized_name: String,
}

/// Validate `name` against git ref-name rules, applying `prefix` first for
/// the length check and the normalized result.
pub fn validate_branch_name(name: &str, prefix: &str) -> BranchNameValidation {
    let mut errors = Vec::new();

    if name.is_empty() {
        errors.push("Branch name cannot be empty".to_string());
    }

    let full_len = prefix.chars().count() + name.chars().count();
    if full_len > MAX_BRANCH_NAME_LEN {
        errors.push(format!(
            "Branch name is too long (max {MAX_BRANCH_NAME_LEN} characters)"
        ));
    }

    if !name.is_empty() && has_invalid_ref_chars(name) {
        errors.push("Branch name contains invalid characters".to_string());
    }

    let valid = errors.is_empty();
    let normalized_name = if valid && !prefix.is_empty() {
        format!("{prefix}{name}")
    } else {
        name.to_string()
    };

    BranchNameValidation {
        valid,
        errors,
        normalized_name,
    }
}

/// Ref-name restrictions from `git-check-ref-format(1)`, reduced to the
/// single-component rules that apply to branch names.
fn has_invalid_ref_chars(name: &str) -> bool {
    if name.starts_with('/') || name.ends_with('/') || name.starts_with('.') || name.ends_with('.')
    {
        return true;
    }
    if name.ends_with(".lock") || name.contains("..") || name.contains("@{") || name.contains("//")
    {
        return true;
    }
    name.chars().any(|c| {
        c.is_whitespace()
            || c.is_control()
            || matches!(c, '~' | '^' | ':' | '?' | '*' | '[' | '\\')
    })
}
