//! Claim text normalization and the novelty filter.
//!
//! Two definitions anchor everything here and in the convergence loop:
//!
//! - *Normalized key*: whitespace-collapsed, lowercased text with every
//!   character that is not alphanumeric (Unicode-aware) or `_` removed.
//!   Two claims with the same key are the same claim.
//! - *Word*: a maximal run of alphanumeric/underscore characters.

use std::collections::HashSet;

use soapbox_core::RawClaim;

/// Collapse runs of whitespace to single spaces and trim.
pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Dedup key for claim text: lowercased, whitespace-collapsed, non-word
/// characters stripped.
pub fn normalized_key(s: &str) -> String {
    normalize_ws(s)
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}

/// Count words as maximal alphanumeric/underscore runs, Unicode-aware.
pub fn word_count(s: &str) -> usize {
    s.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|w| !w.is_empty())
        .count()
}

/// Filter one batch of raw claims against the banned set.
///
/// Survivors have their `claim_text` whitespace-normalized. Dropped:
/// empty text, duplicates within the batch (first occurrence wins),
/// claims whose key is already banned, claims over `max_words`. Order is
/// preserved among survivors.
pub fn filter_novel(
    claims: Vec<RawClaim>,
    banned: &HashSet<String>,
    max_words: usize,
) -> Vec<RawClaim> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();

    for mut claim in claims {
        let text = normalize_ws(&claim.claim_text);
        if text.is_empty() {
            continue;
        }

        let key = normalized_key(&text);
        if seen.contains(&key) || banned.contains(&key) {
            continue;
        }

        if word_count(&text) > max_words {
            continue;
        }

        seen.insert(key);
        claim.claim_text = text;
        out.push(claim);
    }

    out
}
