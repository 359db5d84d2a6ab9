//! Skill string parsing.
//!
//! All boundary inputs carry skills as raw free-text strings; parsing into a
//! [`SkillSet`] happens exactly once at ingestion, and every downstream
//! component only ever sees the parsed form.

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;

/// A canonical set of skill tokens: lowercase, trimmed, non-empty.
///
/// Backed by an ordered set so iteration (and therefore any serialized
/// `matched_skills` output) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    /// Parses a raw skill string into a canonical token set.
    ///
    /// Splits on any run of commas, semicolons, or whitespace, lowercases
    /// each token, and drops empties. There is no error path: any input,
    /// including the empty string, yields a (possibly empty) set.
    pub fn parse(text: &str) -> Self {
        let tokens = text
            .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(str::to_lowercase)
            .collect();

        Self(tokens)
    }

    /// Returns the tokens shared between this set and `other`.
    pub fn intersection(&self, other: &Self) -> Self {
        Self(self.0.intersection(&other.0).cloned().collect())
    }

    /// Number of tokens in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the set holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if `token` is a member (exact match on the canonical
    /// form).
    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    /// Iterates tokens in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Joins the tokens with the canonical `,` separator.
    ///
    /// Re-parsing the joined form yields the same set (parse is idempotent).
    pub fn join(&self) -> String {
        self.0.iter().cloned().collect::<Vec<_>>().join(",")
    }

    /// Tokens as a sorted `Vec<String>` (for response payloads).
    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}
