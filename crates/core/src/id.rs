// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Business ID generation.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::issue::IssueDraft;

/// Generate a business ID from prefix, issue content, and timestamp.
/// Format: {prefix}-{hash} where hash is first 16 hex chars of
/// SHA256(assignee + title + timestamp)
pub fn generate_id(prefix: &str, draft: &IssueDraft, created_at: &DateTime<Utc>) -> String {
    let input = format!(
        "{}\0{}\0{}",
        draft.assignee,
        draft.title,
        created_at.to_rfc3339_opts(chrono::SecondsFormat::Nanos, true)
    );
    let hash = Sha256::digest(input.as_bytes());
    let short_hash = hex::encode(&hash[..8]);
    format!("{}-{}", prefix, short_hash)
}

/// Generate a unique ID, handling collisions by appending incrementing suffix.
pub fn generate_unique_id<F>(
    prefix: &str,
    draft: &IssueDraft,
    created_at: &DateTime<Utc>,
    exists: F,
) -> crate::Result<String>
where
    F: Fn(&str) -> crate::Result<bool>,
{
    let base_id = generate_id(prefix, draft, created_at);

    if !exists(&base_id)? {
        return Ok(base_id);
    }

    let mut suffix = 2;
    loop {
        let id = format!("{}-{}", base_id, suffix);
        if !exists(&id)? {
            return Ok(id);
        }
        suffix += 1;
    }
}

/// Validate that a prefix is valid (2+ lowercase alphanumeric with at least one letter)
pub fn validate_prefix(prefix: &str) -> bool {
    prefix.len() >= 2
        && prefix
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        && prefix.chars().any(|c| c.is_ascii_lowercase())
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
