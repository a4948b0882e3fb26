// CLI module for argument parsing and configuration

use crate::config::UserConfig;
use crate::domain::filter::DEFAULT_REMOTE_KEYWORDS;
use crate::domain::{EmploymentKind, RemoteField};
use crate::settle::DEFAULT_SETTLE_DELAY;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

/// Longest settle delay accepted from any source
pub const MAX_SETTLE_MS: u64 = 10_000;

/// jobswipe - browse job listings one card at a time
///
/// Swipe right to save a listing, left to pass on it.
#[derive(Parser, Debug, Clone)]
#[command(name = "jobswipe")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON file with the listing catalog
    ///
    /// If not specified, the built-in sample catalog is used.
    #[arg(short = 'l', long = "listings")]
    pub listings: Option<PathBuf>,

    /// Employment kind(s) active at startup
    ///
    /// Can be specified multiple times. All kinds are active when omitted.
    /// Example: --type permanent --type internship
    #[arg(short = 't', long = "type", value_enum)]
    pub kinds: Vec<KindFilter>,

    /// Initial search term
    #[arg(short = 's', long = "search")]
    pub search: Option<String>,

    /// Only show listings that look remote
    #[arg(
        short = 'r',
        long = "remote-only",
        action = ArgAction::SetTrue,
        overrides_with = "no_remote_only"
    )]
    pub remote_only: bool,

    /// Show every listing even if the config file enables remote only
    #[arg(long = "no-remote-only", action = ArgAction::SetTrue, overrides_with = "remote_only")]
    pub no_remote_only: bool,

    /// Delay in milliseconds before a swiped card leaves the screen
    #[arg(long = "settle-ms")]
    pub settle_ms: Option<u64>,

    /// Listing field inspected by --remote-only
    #[arg(long = "remote-field", value_enum)]
    pub remote_field: Option<RemoteFieldArg>,

    /// Write logs to this file (logging is off otherwise)
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

/// Employment kind filter options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindFilter {
    Permanent,
    FixedTerm,
    Temporary,
    Internship,
}

impl From<KindFilter> for EmploymentKind {
    fn from(filter: KindFilter) -> Self {
        match filter {
            KindFilter::Permanent => EmploymentKind::Permanent,
            KindFilter::FixedTerm => EmploymentKind::FixedTerm,
            KindFilter::Temporary => EmploymentKind::Temporary,
            KindFilter::Internship => EmploymentKind::Internship,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RemoteFieldArg {
    /// Look for remote keywords in the location
    Location,
    /// Look for remote keywords in the salary text
    Salary,
}

impl From<RemoteFieldArg> for RemoteField {
    fn from(arg: RemoteFieldArg) -> Self {
        match arg {
            RemoteFieldArg::Location => RemoteField::Location,
            RemoteFieldArg::Salary => RemoteField::Salary,
        }
    }
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }

    /// Validate the arguments and return any errors
    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref path) = self.listings {
            if !path.exists() {
                return Err(format!("Listings file does not exist: {}", path.display()));
            }
            if !path.is_file() {
                return Err(format!("Listings path is not a file: {}", path.display()));
            }
        }

        if let Some(ms) = self.settle_ms {
            if ms > MAX_SETTLE_MS {
                return Err(format!(
                    "settle-ms ({}) cannot be greater than {}",
                    ms, MAX_SETTLE_MS
                ));
            }
        }

        Ok(())
    }
}

/// Effective configuration: command line over user config over defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub listings: Option<PathBuf>,
    pub active_kinds: Vec<EmploymentKind>,
    pub search: String,
    pub remote_only: bool,
    pub settle_delay: Duration,
    pub remote_field: RemoteField,
    pub remote_keywords: Vec<String>,
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_sources(args: Args, user: UserConfig) -> Self {
        let settle_delay = args
            .settle_ms
            .or(user.settle_ms)
            .map(|ms| {
                if ms > MAX_SETTLE_MS {
                    tracing::warn!(settle_ms = ms, max = MAX_SETTLE_MS, "settle delay clamped");
                }
                Duration::from_millis(ms.min(MAX_SETTLE_MS))
            })
            .unwrap_or(DEFAULT_SETTLE_DELAY);

        let remote_only = if args.remote_only {
            true
        } else if args.no_remote_only {
            false
        } else {
            user.remote_only
        };

        AppConfig {
            listings: args.listings.or(user.listings),
            active_kinds: args.kinds.into_iter().map(Into::into).collect(),
            search: args.search.unwrap_or_default(),
            remote_only,
            settle_delay,
            remote_field: args
                .remote_field
                .map(Into::into)
                .or(user.remote_field)
                .unwrap_or_default(),
            remote_keywords: user.remote_keywords.unwrap_or_else(default_keywords),
            log_file: args.log_file,
        }
    }
}

fn default_keywords() -> Vec<String> {
    DEFAULT_REMOTE_KEYWORDS
        .iter()
        .map(|k| k.to_string())
        .collect()
}

impl From<Args> for AppConfig {
    fn from(args: Args) -> Self {
        AppConfig::from_sources(args, UserConfig::default())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            listings: None,
            active_kinds: Vec::new(),
            search: String::new(),
            remote_only: false,
            settle_delay: DEFAULT_SETTLE_DELAY,
            remote_field: RemoteField::Location,
            remote_keywords: default_keywords(),
            log_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_args() -> Args {
        Args {
            listings: None,
            kinds: vec![],
            search: None,
            remote_only: false,
            no_remote_only: false,
            settle_ms: None,
            remote_field: None,
            log_file: None,
        }
    }

    mod args_tests {
        use super::*;
        use std::fs;
        use tempfile::TempDir;

        #[test]
        fn test_parse_from_command_line() {
            let args = Args::try_parse_from([
                "jobswipe",
                "--type",
                "fixed-term",
                "-t",
                "internship",
                "--search",
                "rust",
                "--remote-only",
                "--settle-ms",
                "120",
                "--remote-field",
                "salary",
            ])
            .unwrap();

            assert_eq!(args.kinds, vec![KindFilter::FixedTerm, KindFilter::Internship]);
            assert_eq!(args.search.as_deref(), Some("rust"));
            assert!(args.remote_only);
            assert_eq!(args.settle_ms, Some(120));
            assert_eq!(args.remote_field, Some(RemoteFieldArg::Salary));
        }

        #[test]
        fn test_kind_filter_conversion() {
            assert_eq!(EmploymentKind::from(KindFilter::Permanent), EmploymentKind::Permanent);
            assert_eq!(EmploymentKind::from(KindFilter::FixedTerm), EmploymentKind::FixedTerm);
            assert_eq!(EmploymentKind::from(KindFilter::Temporary), EmploymentKind::Temporary);
            assert_eq!(EmploymentKind::from(KindFilter::Internship), EmploymentKind::Internship);
        }

        #[test]
        fn test_validate_defaults() {
            assert!(empty_args().validate().is_ok());
        }

        #[test]
        fn test_validate_nonexistent_listings() {
            let args = Args {
                listings: Some(PathBuf::from("/nonexistent/listings-12345.json")),
                ..empty_args()
            };

            let result = args.validate();
            assert!(result.unwrap_err().contains("does not exist"));
        }

        #[test]
        fn test_validate_listings_directory() {
            let temp_dir = TempDir::new().unwrap();
            let args = Args {
                listings: Some(temp_dir.path().to_path_buf()),
                ..empty_args()
            };

            assert!(args.validate().unwrap_err().contains("not a file"));
        }

        #[test]
        fn test_validate_existing_listings() {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join("listings.json");
            fs::write(&path, "[]").unwrap();
            let args = Args {
                listings: Some(path),
                ..empty_args()
            };

            assert!(args.validate().is_ok());
        }

        #[test]
        fn test_validate_settle_too_long() {
            let args = Args {
                settle_ms: Some(60_000),
                ..empty_args()
            };

            assert!(args.validate().unwrap_err().contains("cannot be greater than"));
        }
    }

    mod config_tests {
        use super::*;
        use std::fs;
        use tempfile::TempDir;

        #[test]
        fn test_app_config_default() {
            let config = AppConfig::default();

            assert!(config.listings.is_none());
            assert!(config.active_kinds.is_empty());
            assert_eq!(config.settle_delay, Duration::from_millis(300));
            assert_eq!(config.remote_field, RemoteField::Location);
            assert!(!config.remote_keywords.is_empty());
        }

        #[test]
        fn test_app_config_from_args() {
            let args = Args {
                kinds: vec![KindFilter::Temporary],
                search: Some("warehouse".to_string()),
                settle_ms: Some(10),
                ..empty_args()
            };

            let config: AppConfig = args.into();

            assert_eq!(config.active_kinds, vec![EmploymentKind::Temporary]);
            assert_eq!(config.search, "warehouse");
            assert_eq!(config.settle_delay, Duration::from_millis(10));
        }

        #[test]
        fn test_command_line_overrides_user_config() {
            let user = UserConfig {
                listings: Some(PathBuf::from("/from/config.json")),
                settle_ms: Some(500),
                remote_field: Some(RemoteField::Salary),
                remote_keywords: Some(vec!["homeoffice".to_string()]),
                remote_only: false,
            };
            let args = Args {
                settle_ms: Some(100),
                remote_field: Some(RemoteFieldArg::Location),
                ..empty_args()
            };

            let config = AppConfig::from_sources(args, user);

            assert_eq!(config.listings, Some(PathBuf::from("/from/config.json")));
            assert_eq!(config.settle_delay, Duration::from_millis(100));
            assert_eq!(config.remote_field, RemoteField::Location);
            assert_eq!(config.remote_keywords, vec!["homeoffice".to_string()]);
        }

        #[test]
        fn test_user_config_fills_gaps() {
            let user = UserConfig {
                settle_ms: Some(500),
                remote_only: true,
                ..UserConfig::default()
            };

            let config = AppConfig::from_sources(empty_args(), user);

            assert_eq!(config.settle_delay, Duration::from_millis(500));
            assert!(config.remote_only);
        }

        #[test]
        fn test_no_remote_only_overrides_user_config() {
            let user = UserConfig {
                remote_only: true,
                ..UserConfig::default()
            };
            let args = Args::try_parse_from(["jobswipe", "--no-remote-only"]).unwrap();

            let config = AppConfig::from_sources(args, user);

            assert!(!config.remote_only);
        }

        #[test]
        fn test_last_remote_flag_wins() {
            let args =
                Args::try_parse_from(["jobswipe", "--no-remote-only", "--remote-only"]).unwrap();
            assert!(args.remote_only);
            assert!(!args.no_remote_only);
        }

        #[test]
        fn test_user_config_settle_delay_is_clamped() {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join("config.json");
            fs::write(&path, r#"{"settle_ms": 18446744073709551615}"#).unwrap();
            let user = UserConfig::load_from(&path).unwrap();

            let config = AppConfig::from_sources(empty_args(), user);

            assert_eq!(config.settle_delay, Duration::from_millis(MAX_SETTLE_MS));
        }
    }
}
