//! Jobswipe - a terminal swipe deck for job listings
//!
//! This crate provides the deck model behind the Jobswipe application:
//! filtering a listing catalog by contract type, search term and remote
//! preference, walking the result one card at a time, and collecting the
//! listings the user swipes right on.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod settle;
pub mod tui;

// Re-export primary types for convenience
pub use config::UserConfig;
pub use domain::{
    filter_listings, load_listings, sample_listings, CriteriaList, Criterion, Deck,
    EmploymentKind, FilterOptions, KeywordMatcher, Listing, ListingId, RemoteField,
    RemoteMatcher, SavedSet, SessionStats, SwipeDirection, SwipeSession, Transition,
};
pub use error::{JobSwipeError, Result};
pub use settle::{ManualScheduler, SettleScheduler, SettleTicket, TokioSettleScheduler};
