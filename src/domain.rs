pub mod criteria;
pub mod deck;
pub mod filter;
pub mod saved;
pub mod session;

use crate::error::{JobSwipeError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub use criteria::{default_criteria, CriteriaList, Criterion};
pub use deck::{Deck, Transition};
pub use filter::{filter_listings, FilterOptions, KeywordMatcher, RemoteField, RemoteMatcher};
pub use saved::SavedSet;
pub use session::{SessionStats, SwipeSession};

/// Built-in catalog used when no listings file is supplied
const SAMPLE_CATALOG: &str = include_str!("../data/listings.json");

pub type ListingId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentKind {
    Permanent,
    #[serde(rename = "Fixed-term")]
    FixedTerm,
    Temporary,
    Internship,
}

impl EmploymentKind {
    pub const ALL: [EmploymentKind; 4] = [
        EmploymentKind::Permanent,
        EmploymentKind::FixedTerm,
        EmploymentKind::Temporary,
        EmploymentKind::Internship,
    ];

    /// Display label, also used to match criterion labels
    pub fn label(&self) -> &'static str {
        match self {
            EmploymentKind::Permanent => "Permanent",
            EmploymentKind::FixedTerm => "Fixed-term",
            EmploymentKind::Temporary => "Temporary",
            EmploymentKind::Internship => "Internship",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub kind: EmploymentKind,
    pub salary: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub image: String,
    pub posted: NaiveDate,
}

/// Loads a listing catalog from a JSON array on disk.
///
/// Rejects catalogs where two listings share an id, since the saved set
/// and the deck both key on it.
pub fn load_listings(path: &Path) -> Result<Vec<Listing>> {
    let contents = fs::read_to_string(path).map_err(|e| JobSwipeError::CatalogError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let listings: Vec<Listing> =
        serde_json::from_str(&contents).map_err(|e| JobSwipeError::CatalogError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    check_unique_ids(&listings)?;
    tracing::info!(path = %path.display(), count = listings.len(), "loaded listing catalog");
    Ok(listings)
}

/// Returns the built-in sample catalog
pub fn sample_listings() -> Result<Vec<Listing>> {
    let listings: Vec<Listing> =
        serde_json::from_str(SAMPLE_CATALOG).map_err(|e| JobSwipeError::CatalogError {
            path: "<built-in>".into(),
            reason: e.to_string(),
        })?;
    check_unique_ids(&listings)?;
    Ok(listings)
}

fn check_unique_ids(listings: &[Listing]) -> Result<()> {
    let mut seen = HashSet::new();
    for listing in listings {
        if !seen.insert(listing.id) {
            return Err(JobSwipeError::DuplicateListing(listing.id));
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn test_listing(id: ListingId, kind: EmploymentKind) -> Listing {
    Listing {
        id,
        title: format!("Job {}", id),
        company: format!("Company {}", id),
        location: "Lyon".to_string(),
        kind,
        salary: "40k".to_string(),
        description: String::new(),
        requirements: Vec::new(),
        image: String::new(),
        posted: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod employment_kind_tests {
        use super::*;

        #[test]
        fn test_labels() {
            assert_eq!(EmploymentKind::Permanent.label(), "Permanent");
            assert_eq!(EmploymentKind::FixedTerm.label(), "Fixed-term");
            assert_eq!(EmploymentKind::Temporary.label(), "Temporary");
            assert_eq!(EmploymentKind::Internship.label(), "Internship");
        }

        #[test]
        fn test_serde_names_match_labels() {
            for kind in EmploymentKind::ALL {
                let json = serde_json::to_string(&kind).unwrap();
                assert_eq!(json, format!("\"{}\"", kind.label()));
            }
        }
    }

    mod catalog_tests {
        use super::*;
        use std::fs;
        use tempfile::TempDir;

        #[test]
        fn test_sample_catalog_parses() {
            let listings = sample_listings().unwrap();
            assert!(!listings.is_empty());
            for kind in EmploymentKind::ALL {
                assert!(listings.iter().any(|l| l.kind == kind));
            }
        }

        #[test]
        fn test_load_listings_from_file() {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join("listings.json");
            let listings = vec![
                test_listing(1, EmploymentKind::Permanent),
                test_listing(2, EmploymentKind::Internship),
            ];
            fs::write(&path, serde_json::to_string(&listings).unwrap()).unwrap();

            let loaded = load_listings(&path).unwrap();
            assert_eq!(loaded, listings);
        }

        #[test]
        fn test_load_listings_missing_optional_fields() {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join("listings.json");
            fs::write(
                &path,
                r#"[{"id": 7, "title": "Dev", "company": "Acme", "location": "Remote",
                    "kind": "Fixed-term", "salary": "", "description": "",
                    "posted": "2024-01-15"}]"#,
            )
            .unwrap();

            let loaded = load_listings(&path).unwrap();
            assert_eq!(loaded.len(), 1);
            assert_eq!(loaded[0].kind, EmploymentKind::FixedTerm);
            assert!(loaded[0].requirements.is_empty());
        }

        #[test]
        fn test_load_listings_rejects_duplicate_ids() {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join("listings.json");
            let listings = vec![
                test_listing(3, EmploymentKind::Permanent),
                test_listing(3, EmploymentKind::Temporary),
            ];
            fs::write(&path, serde_json::to_string(&listings).unwrap()).unwrap();

            let result = load_listings(&path);
            assert!(matches!(result, Err(JobSwipeError::DuplicateListing(3))));
        }

        #[test]
        fn test_load_listings_nonexistent_file() {
            let result = load_listings(Path::new("/nonexistent/listings.json"));
            assert!(matches!(result, Err(JobSwipeError::CatalogError { .. })));
        }

        #[test]
        fn test_load_listings_invalid_json() {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join("listings.json");
            fs::write(&path, "not json").unwrap();

            assert!(load_listings(&path).is_err());
        }
    }
}
