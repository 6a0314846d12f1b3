//! Service Layer
//!
//! Network access and the pure logic that sits between commands and
//! repositories.

pub mod api;
pub mod export;
#[cfg(feature = "scrape")]
pub mod scrape;
pub mod search;

pub use api::{RecipeApi, SearchMode};
pub use search::{CollectionView, SearchOutcome};
