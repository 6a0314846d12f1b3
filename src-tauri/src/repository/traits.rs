//! Repository Layer - Core Traits
//!
//! Abstract interfaces for data access. Implementations keep an in-memory
//! copy and persist through a `JsonFile`.

use async_trait::async_trait;
use crate::domain::{Entity, DomainResult};

/// Core repository trait for reads and deletes
///
/// Generic over any Entity type. Creation differs per store (validated
/// drafts, toggles) and lives on the concrete types.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Find entity by ID
    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// List all entities, in stored order
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Delete entity by ID
    async fn delete(&self, id: T::Id) -> DomainResult<()>;
}

/// Extension for repositories that support text search
#[async_trait]
pub trait SearchableRepository<T: Entity>: Repository<T> {
    /// Case-insensitive substring search on the display title
    async fn search(&self, query: &str) -> DomainResult<Vec<T>>;
}
