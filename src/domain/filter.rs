//! Filter engine deriving the deck from the raw catalog.
//!
//! Everything here is pure: the same listings and options always yield
//! the same sequence, and the output is an order-preserving subsequence
//! of the input.

use super::Listing;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Keywords treated as a remote arrangement when no others are configured
pub const DEFAULT_REMOTE_KEYWORDS: [&str; 3] = ["remote", "télétravail", "teletravail"];

/// Inputs of one filter pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Lowercased labels of the active criteria
    pub active_labels: HashSet<String>,
    /// Free-text search, matched against title, company and description
    pub search: String,
    /// Keep only listings the remote matcher accepts
    pub remote_only: bool,
}

/// Decides whether a listing is a remote arrangement.
///
/// `Send + Sync` so a session holding one can move across threads with the
/// runtime that drives its settle timers.
pub trait RemoteMatcher: Send + Sync {
    /// Returns the name of this matcher (for logging)
    fn name(&self) -> &str;

    fn is_remote(&self, listing: &Listing) -> bool;
}

/// Which listing field the keyword matcher inspects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteField {
    #[default]
    Location,
    /// Compensation text; matches the behaviour of earlier releases
    Salary,
}

/// Case-insensitive keyword search over a single listing field
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    field: RemoteField,
    keywords: Vec<String>,
}

impl KeywordMatcher {
    pub fn new(field: RemoteField, keywords: &[String]) -> Self {
        let keywords = keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { field, keywords }
    }

    pub fn field(&self) -> RemoteField {
        self.field
    }
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        let keywords: Vec<String> = DEFAULT_REMOTE_KEYWORDS
            .iter()
            .map(|k| k.to_string())
            .collect();
        Self::new(RemoteField::Location, &keywords)
    }
}

impl RemoteMatcher for KeywordMatcher {
    fn name(&self) -> &str {
        match self.field {
            RemoteField::Location => "location-keywords",
            RemoteField::Salary => "salary-keywords",
        }
    }

    fn is_remote(&self, listing: &Listing) -> bool {
        let haystack = match self.field {
            RemoteField::Location => listing.location.to_lowercase(),
            RemoteField::Salary => listing.salary.to_lowercase(),
        };
        self.keywords.iter().any(|k| haystack.contains(k.as_str()))
    }
}

fn matches_kind(listing: &Listing, active_labels: &HashSet<String>) -> bool {
    active_labels.contains(&listing.kind.label().to_lowercase())
}

fn matches_search(listing: &Listing, needle: &str) -> bool {
    needle.is_empty()
        || listing.title.to_lowercase().contains(needle)
        || listing.company.to_lowercase().contains(needle)
        || listing.description.to_lowercase().contains(needle)
}

/// Applies the kind, search and remote filters in catalog order.
pub fn filter_listings(
    listings: &[Listing],
    options: &FilterOptions,
    remote: &dyn RemoteMatcher,
) -> Vec<Listing> {
    let needle = options.search.to_lowercase();

    listings
        .iter()
        .filter(|listing| matches_kind(listing, &options.active_labels))
        .filter(|listing| matches_search(listing, &needle))
        .filter(|listing| !options.remote_only || remote.is_remote(listing))
        .cloned()
        .collect()
}
