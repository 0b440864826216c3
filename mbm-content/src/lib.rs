//! MBM Digital content core
//!
//! Platform-agnostic locale state, translation lookup and content pipeline for
//! the MBM Digital site. Nothing in this crate touches the browser; the web
//! crate supplies storage, document hints and fetching through the traits
//! defined here.

pub mod coverage;
pub mod domain;
pub mod error;
pub mod filter;
pub mod loader;
pub mod locale;
pub mod merge;
pub mod migrate;
pub mod resolve;
pub mod state;
pub mod table;
pub mod view;

pub use coverage::{PlaceholderMismatch, missing_keys, placeholder_mismatches};
pub use domain::{
    BlogPost, ContentDomain, ContentRecord, Impact, PlanFeature, PortfolioItem, PricingPlan,
    Service, Testimonial, TranslatableField, record_key,
};
pub use error::ContentError;
pub use filter::{
    ALL_CATEGORIES, HOME_PORTFOLIO_QUOTAS, categories, filter_by_category, find_by_id, related,
    select_by_quota,
};
pub use loader::{
    ContentSource, DirectorySource, StaticSource, load, parse_records, records_or_empty,
};
pub use locale::{DEFAULT_LOCALE, Direction, Locale, LocaleMeta, locales};
pub use merge::{merge_record, merge_translations, untranslated_fields};
pub use migrate::{MigrationReport, migrate_document, migrate_inline_fields};
pub use resolve::{Params, interpolate, resolve, try_resolve};
pub use state::{
    DocumentHints, LEGACY_PREFERENCE_KEY, LocaleState, MemoryPreferences, NoHints, Notification,
    PREFERENCE_KEY, PreferenceStore, SubscriptionId, initial_locale,
};
pub use table::{Catalog, KEY_SEPARATOR, Lookup, StringTable};
pub use view::CollectionView;
