//! In-memory local repository implementation.
//!
//! This module provides a local implementation of all repository traits
//! suitable for unit testing and local development. All data is stored in
//! memory using HashMap structures, providing fast, deterministic, and
//! isolated execution.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::api::{NewPlant, NewReading, Plant, PlantId, Reading, ReadingId};
use crate::db::repository::*;

/// In-memory local repository.
///
/// This implementation stores all data in memory using HashMaps, making it
/// ideal for unit tests and local development that need isolation and speed.
///
/// Unlike the Postgres backend it carries no referential constraint: a
/// reading whose plant id matches no stored plant is accepted as-is.
///
/// # Example
/// ```
/// use spm_rust::db::repositories::LocalRepository;
///
/// let repo = LocalRepository::new();
/// assert_eq!(repo.plant_count(), 0);
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    plants: HashMap<PlantId, Plant>,
    readings: HashMap<ReadingId, Reading>,

    // ID counters
    next_plant_id: PlantId,
    next_reading_id: ReadingId,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            plants: HashMap::new(),
            readings: HashMap::new(),
            next_plant_id: PlantId(1),
            next_reading_id: ReadingId(1),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        let mut data = self.data.write().unwrap();
        data.is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write().unwrap();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    /// Get the number of plants stored.
    pub fn plant_count(&self) -> usize {
        self.data.read().unwrap().plants.len()
    }

    /// Get the number of readings stored.
    pub fn reading_count(&self) -> usize {
        self.data.read().unwrap().readings.len()
    }

    /// Check if a plant exists.
    pub fn has_plant(&self, plant_id: PlantId) -> bool {
        self.data.read().unwrap().plants.contains_key(&plant_id)
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self) -> RepositoryResult<()> {
        let data = self.data.read().unwrap();
        if !data.is_healthy {
            return Err(RepositoryError::ConnectionError(
                "Database is not healthy".to_string(),
            ));
        }
        Ok(())
    }

    /// Helper to get a plant or return NotFound error.
    fn get_plant_impl(&self, plant_id: PlantId) -> RepositoryResult<Plant> {
        let data = self.data.read().unwrap();
        data.plants
            .get(&plant_id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("Plant {} not found", plant_id.0)))
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlantRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        let data = self.data.read().unwrap();
        Ok(data.is_healthy)
    }

    async fn create_plant(&self, plant: &NewPlant) -> RepositoryResult<Plant> {
        self.check_health()?;

        let mut data = self.data.write().unwrap();
        let plant_id = data.next_plant_id;
        data.next_plant_id = PlantId(plant_id.0 + 1);

        let stored = Plant {
            id: plant_id,
            name: plant.name.clone(),
            species: plant.species.clone(),
            ideal_moisture_min: plant.ideal_moisture_min,
            ideal_moisture_max: plant.ideal_moisture_max,
        };
        data.plants.insert(plant_id, stored.clone());

        Ok(stored)
    }

    async fn list_plants(&self) -> RepositoryResult<Vec<Plant>> {
        let data = self.data.read().unwrap();

        let mut plants: Vec<Plant> = data.plants.values().cloned().collect();
        plants.sort_by_key(|p| p.id);
        Ok(plants)
    }

    async fn get_plant(&self, plant_id: PlantId) -> RepositoryResult<Plant> {
        self.get_plant_impl(plant_id)
    }

    async fn update_plant(&self, plant_id: PlantId, fields: &NewPlant) -> RepositoryResult<Plant> {
        let mut data = self.data.write().unwrap();

        let plant = data
            .plants
            .get_mut(&plant_id)
            .ok_or_else(|| RepositoryError::NotFound(format!("Plant {} not found", plant_id.0)))?;

        plant.name = fields.name.clone();
        plant.species = fields.species.clone();
        plant.ideal_moisture_min = fields.ideal_moisture_min;
        plant.ideal_moisture_max = fields.ideal_moisture_max;

        Ok(plant.clone())
    }

    async fn delete_plant(&self, plant_id: PlantId) -> RepositoryResult<usize> {
        let mut data = self.data.write().unwrap();

        if data.plants.remove(&plant_id).is_none() {
            return Err(RepositoryError::NotFound(format!(
                "Plant {} not found",
                plant_id.0
            )));
        }

        // Readings go with the plant; cascade lives here, not in the store.
        let owned: Vec<ReadingId> = data
            .readings
            .values()
            .filter(|r| r.plant_id == plant_id)
            .map(|r| r.id)
            .collect();
        for reading_id in &owned {
            data.readings.remove(reading_id);
        }

        Ok(owned.len())
    }
}

// ==================== Reading Repository ====================

#[async_trait]
impl ReadingRepository for LocalRepository {
    async fn create_reading(&self, reading: &NewReading) -> RepositoryResult<Reading> {
        self.check_health()?;

        let mut data = self.data.write().unwrap();
        let reading_id = data.next_reading_id;
        data.next_reading_id = ReadingId(reading_id.0 + 1);

        let stored = Reading {
            id: reading_id,
            plant_id: reading.plant_id,
            timestamp: reading
                .timestamp
                .unwrap_or_else(|| Utc::now().naive_utc()),
            moisture_percent: reading.moisture_percent,
        };
        data.readings.insert(reading_id, stored.clone());

        Ok(stored)
    }

    async fn get_readings_for_plant(&self, plant_id: PlantId) -> RepositoryResult<Vec<Reading>> {
        let data = self.data.read().unwrap();

        let mut readings: Vec<Reading> = data
            .readings
            .values()
            .filter(|r| r.plant_id == plant_id)
            .cloned()
            .collect();

        readings.sort_by_key(|r| r.id);
        Ok(readings)
    }

    async fn get_latest_reading(&self, plant_id: PlantId) -> RepositoryResult<Option<Reading>> {
        let data = self.data.read().unwrap();

        Ok(data
            .readings
            .values()
            .filter(|r| r.plant_id == plant_id)
            .max_by_key(|r| (r.timestamp, r.id))
            .cloned())
    }

    async fn delete_reading(&self, reading_id: ReadingId) -> RepositoryResult<()> {
        let mut data = self.data.write().unwrap();

        if data.readings.remove(&reading_id).is_none() {
            return Err(RepositoryError::NotFound(format!(
                "Reading {} not found",
                reading_id.0
            )));
        }
        Ok(())
    }
}
