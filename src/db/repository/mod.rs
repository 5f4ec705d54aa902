//! Repository trait definitions for database operations.
//!
//! This module provides focused repository traits that abstract database
//! operations. By splitting the plant registry from reading ingestion,
//! implementations stay small and testable.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for repository operations
//! - [`plant`]: CRUD operations for the plant registry
//! - [`reading`]: Append-only moisture reading operations
//!
//! # Convenience Trait Bound
//!
//! For functions that need all repository capabilities, use the
//! [`FullRepository`] trait bound:
//!
//! ```ignore
//! async fn my_service(repo: &dyn FullRepository) -> RepositoryResult<()> {
//!     let plants = repo.list_plants().await?;
//!     for plant in &plants {
//!         let latest = repo.get_latest_reading(plant.id).await?;
//!         // ...
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod plant;
pub mod reading;

// Re-export error types
pub use error::{RepositoryError, RepositoryResult};

// Re-export all traits
pub use plant::PlantRepository;
pub use reading::ReadingRepository;

/// Composite trait bound for a complete repository implementation.
///
/// This trait is automatically implemented for any type that implements
/// both repository traits. Use this as a convenient bound when you need
/// access to all repository operations.
pub trait FullRepository: PlantRepository + ReadingRepository {}

// Blanket implementation: any type implementing both traits automatically implements FullRepository
impl<T> FullRepository for T where T: PlantRepository + ReadingRepository {}
