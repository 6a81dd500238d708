//! Centralized catalog configuration.
//!
//! Every tunable is read once through this module, either from the process
//! environment or from an injected lookup. Malformed values fall back to the
//! default and are logged. In the browser there is no environment, so the
//! defaults apply.

use std::str::FromStr;
use std::sync::LazyLock;

use tracing::warn;

pub const DEFAULT_PAGE_SIZE: usize = 9;
pub const DEFAULT_MOCK_COUNT: usize = 24;
pub const DEFAULT_MOCK_SEED: u64 = 42;
pub const DEFAULT_FEATURED_COUNT: usize = 3;

/// Where the venue collection comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// Dataset compiled into the crate
    Bundled,
    /// Seeded placeholder records
    Mock,
    /// Bundled dataset, falling back to placeholders when it is empty or broken
    #[default]
    BundledThenMock,
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bundled" => Ok(SourceKind::Bundled),
            "mock" => Ok(SourceKind::Mock),
            "bundled_then_mock" => Ok(SourceKind::BundledThenMock),
            other => Err(format!("unknown venue source '{other}'")),
        }
    }
}

/// Catalog configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Venues per results page (default: 9)
    pub page_size: usize,
    /// Venue source (default: bundled, then mock)
    pub source: SourceKind,
    /// Records produced by the mock source (default: 24)
    pub mock_count: usize,
    /// Seed of the mock source (default: 42)
    pub mock_seed: u64,
    /// Venues showcased on the home page (default: 3)
    pub featured_count: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            source: SourceKind::default(),
            mock_count: DEFAULT_MOCK_COUNT,
            mock_seed: DEFAULT_MOCK_SEED,
            featured_count: DEFAULT_FEATURED_COUNT,
        }
    }
}

impl CatalogConfig {
    /// Load configuration from `VENUELY_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let page_size = parse_or(&lookup, "VENUELY_PAGE_SIZE", defaults.page_size);
        let page_size = if page_size == 0 {
            warn!("VENUELY_PAGE_SIZE must be at least 1, using {}", defaults.page_size);
            defaults.page_size
        } else {
            page_size
        };

        Self {
            page_size,
            source: parse_or(&lookup, "VENUELY_SOURCE", defaults.source),
            mock_count: parse_or(&lookup, "VENUELY_MOCK_COUNT", defaults.mock_count),
            mock_seed: parse_or(&lookup, "VENUELY_MOCK_SEED", defaults.mock_seed),
            featured_count: parse_or(&lookup, "VENUELY_FEATURED", defaults.featured_count),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn featured_count(&self) -> usize {
        self.featured_count
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(e) => {
                warn!("Ignoring {key}={raw:?}: {e}");
                default
            }
        },
    }
}

/// Global catalog configuration, loaded once on first access.
pub static CONFIG: LazyLock<CatalogConfig> = LazyLock::new(CatalogConfig::from_env);
