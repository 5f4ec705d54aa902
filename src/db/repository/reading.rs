//! Moisture reading repository trait.
//!
//! Readings are append-only: they are created, listed, and deleted, never
//! updated. Plant existence is not checked at ingestion time; that decision
//! belongs to the caller (and the database's referential constraint, where
//! one is active).

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{NewReading, PlantId, Reading, ReadingId};

/// Repository trait for moisture reading database operations.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ReadingRepository: Send + Sync {
    /// Store a new moisture reading.
    ///
    /// A missing timestamp is filled with the current UTC instant. The
    /// owning plant is not checked for existence.
    ///
    /// # Arguments
    /// * `reading` - The reading fields to store
    ///
    /// # Returns
    /// * `Ok(Reading)` - The stored reading including its assigned ID and
    ///   effective timestamp
    /// * `Err(RepositoryError)` - If the operation fails
    async fn create_reading(&self, reading: &NewReading) -> RepositoryResult<Reading>;

    /// Get all readings recorded for a plant, ordered by ascending ID.
    ///
    /// Returns an empty list both for a plant without readings and for an
    /// unknown plant ID; existence checks are the caller's concern.
    ///
    /// # Arguments
    /// * `plant_id` - The owning plant's ID
    ///
    /// # Returns
    /// * `Ok(Vec<Reading>)` - The plant's readings
    /// * `Err(RepositoryError)` - If the operation fails
    async fn get_readings_for_plant(&self, plant_id: PlantId) -> RepositoryResult<Vec<Reading>>;

    /// Get the most recent reading for a plant.
    ///
    /// Recency is by timestamp, with the higher ID winning a tie.
    ///
    /// # Arguments
    /// * `plant_id` - The owning plant's ID
    ///
    /// # Returns
    /// * `Ok(Some(Reading))` - The latest reading
    /// * `Ok(None)` - If the plant has no readings
    /// * `Err(RepositoryError)` - If the operation fails
    async fn get_latest_reading(&self, plant_id: PlantId) -> RepositoryResult<Option<Reading>>;

    /// Delete a single reading by ID.
    ///
    /// # Arguments
    /// * `reading_id` - The ID of the reading to delete
    ///
    /// # Returns
    /// * `Ok(())` - The reading was removed
    /// * `Err(RepositoryError::NotFound)` - If the reading doesn't exist
    /// * `Err(RepositoryError)` - If the operation fails
    async fn delete_reading(&self, reading_id: ReadingId) -> RepositoryResult<()>;
}
