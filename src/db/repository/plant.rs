//! Core plant repository trait for CRUD operations.
//!
//! This trait defines the fundamental database operations for the plant
//! registry. Reading ingestion and lookup live in a separate trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{NewPlant, Plant, PlantId};

/// Repository trait for plant registry database operations.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait PlantRepository: Send + Sync {
    // ==================== Health & Connection ====================

    /// Check if the database connection is healthy.
    ///
    /// # Returns
    /// - `Ok(true)` if connection is healthy
    /// - `Ok(false)` if connection is unhealthy but no error occurred
    /// - `Err(RepositoryError)` if an error occurred during the check
    async fn health_check(&self) -> RepositoryResult<bool>;

    // ==================== Plant Operations ====================

    /// Store a new plant in the database.
    ///
    /// # Arguments
    /// * `plant` - The plant fields to store
    ///
    /// # Returns
    /// * `Ok(Plant)` - The stored plant including its assigned ID
    /// * `Err(RepositoryError)` - If the operation fails
    async fn create_plant(&self, plant: &NewPlant) -> RepositoryResult<Plant>;

    /// List all plants, ordered by ascending ID.
    ///
    /// # Returns
    /// * `Ok(Vec<Plant>)` - All registered plants
    /// * `Err(RepositoryError)` - If the operation fails
    async fn list_plants(&self) -> RepositoryResult<Vec<Plant>>;

    /// Retrieve a single plant by ID.
    ///
    /// # Arguments
    /// * `plant_id` - The ID of the plant to retrieve
    ///
    /// # Returns
    /// * `Ok(Plant)` - The plant
    /// * `Err(RepositoryError::NotFound)` - If the plant doesn't exist
    /// * `Err(RepositoryError)` - If the operation fails
    async fn get_plant(&self, plant_id: PlantId) -> RepositoryResult<Plant>;

    /// Replace the mutable fields of an existing plant.
    ///
    /// # Arguments
    /// * `plant_id` - The ID of the plant to update
    /// * `fields` - New values for name, species, and the ideal range
    ///
    /// # Returns
    /// * `Ok(Plant)` - The updated plant
    /// * `Err(RepositoryError::NotFound)` - If the plant doesn't exist
    /// * `Err(RepositoryError)` - If the operation fails
    async fn update_plant(&self, plant_id: PlantId, fields: &NewPlant) -> RepositoryResult<Plant>;

    /// Delete a plant and all readings that belong to it.
    ///
    /// The readings are removed first, then the plant, as two separate
    /// statements; the pair is intentionally not atomic.
    ///
    /// # Arguments
    /// * `plant_id` - The ID of the plant to delete
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of readings removed along with the plant
    /// * `Err(RepositoryError::NotFound)` - If the plant doesn't exist
    /// * `Err(RepositoryError)` - If the operation fails
    async fn delete_plant(&self, plant_id: PlantId) -> RepositoryResult<usize>;
}
