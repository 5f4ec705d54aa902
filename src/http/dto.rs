//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The dashboard types are re-exported from the api module since they
//! already derive Serialize/Deserialize in their wire shape.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::api::{NewPlant, NewReading, Plant, PlantId, Reading};

// Re-export existing DTOs that are already serializable
pub use crate::api::{DashboardEntry, LastReading};
pub use crate::status::WateringStatus;

fn validate_moisture_range(min: i32, max: i32) -> Result<(), String> {
    if !(0..=100).contains(&min) {
        return Err("ideal_moisture_min must be between 0 and 100".to_string());
    }
    if !(0..=100).contains(&max) {
        return Err("ideal_moisture_max must be between 0 and 100".to_string());
    }
    if max < min {
        return Err("ideal_moisture_max must be >= ideal_moisture_min".to_string());
    }
    Ok(())
}

/// Request body for registering a new plant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantCreate {
    /// Display name
    pub name: String,
    /// Species label
    pub species: String,
    /// Lower bound of the ideal moisture range (percent)
    pub ideal_moisture_min: i32,
    /// Upper bound of the ideal moisture range (percent)
    pub ideal_moisture_max: i32,
}

impl PlantCreate {
    /// Check the ideal moisture range before the request reaches the
    /// service layer, so invalid payloads never touch a repository.
    pub fn validate(&self) -> Result<(), String> {
        validate_moisture_range(self.ideal_moisture_min, self.ideal_moisture_max)
    }
}

impl From<PlantCreate> for NewPlant {
    fn from(payload: PlantCreate) -> Self {
        NewPlant::new(
            payload.name,
            payload.species,
            payload.ideal_moisture_min,
            payload.ideal_moisture_max,
        )
    }
}

/// Request body for replacing a plant's fields.
///
/// Updates are full replacements; every field must be present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantUpdate {
    /// Display name
    pub name: String,
    /// Species label
    pub species: String,
    /// Lower bound of the ideal moisture range (percent)
    pub ideal_moisture_min: i32,
    /// Upper bound of the ideal moisture range (percent)
    pub ideal_moisture_max: i32,
}

impl PlantUpdate {
    pub fn validate(&self) -> Result<(), String> {
        validate_moisture_range(self.ideal_moisture_min, self.ideal_moisture_max)
    }
}

impl From<PlantUpdate> for NewPlant {
    fn from(payload: PlantUpdate) -> Self {
        NewPlant::new(
            payload.name,
            payload.species,
            payload.ideal_moisture_min,
            payload.ideal_moisture_max,
        )
    }
}

/// Request body for ingesting a sensor reading.
///
/// The timestamp is always assigned server-side at ingestion time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingCreate {
    /// Owning plant ID
    pub plant_id: i32,
    /// Measured soil moisture (percent)
    pub moisture_percent: f64,
}

impl From<ReadingCreate> for NewReading {
    fn from(payload: ReadingCreate) -> Self {
        NewReading::new(PlantId::new(payload.plant_id), payload.moisture_percent)
    }
}

/// Plant representation in API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantOut {
    /// Plant ID
    pub id: i32,
    /// Display name
    pub name: String,
    /// Species label
    pub species: String,
    /// Lower bound of the ideal moisture range (percent)
    pub ideal_moisture_min: i32,
    /// Upper bound of the ideal moisture range (percent)
    pub ideal_moisture_max: i32,
}

impl From<Plant> for PlantOut {
    fn from(plant: Plant) -> Self {
        Self {
            id: plant.id.value(),
            name: plant.name,
            species: plant.species,
            ideal_moisture_min: plant.ideal_moisture_min,
            ideal_moisture_max: plant.ideal_moisture_max,
        }
    }
}

/// Reading representation in API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingOut {
    /// Reading ID
    pub id: i32,
    /// Owning plant ID
    pub plant_id: i32,
    /// Ingestion timestamp (naive UTC, ISO-8601)
    pub timestamp: NaiveDateTime,
    /// Measured soil moisture (percent)
    pub moisture_percent: f64,
}

impl From<Reading> for ReadingOut {
    fn from(reading: Reading) -> Self {
        Self {
            id: reading.id.value(),
            plant_id: reading.plant_id.value(),
            timestamp: reading.timestamp,
            moisture_percent: reading.moisture_percent,
        }
    }
}

/// Simple message response for deletions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message about the operation
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Database connection status
    pub database: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plant_create_validation() {
        let mut payload = PlantCreate {
            name: "Aloe Vera".to_string(),
            species: "Aloe".to_string(),
            ideal_moisture_min: 20,
            ideal_moisture_max: 50,
        };
        assert!(payload.validate().is_ok());

        payload.ideal_moisture_min = -5;
        assert_eq!(
            payload.validate().unwrap_err(),
            "ideal_moisture_min must be between 0 and 100"
        );

        payload.ideal_moisture_min = 20;
        payload.ideal_moisture_max = 150;
        assert_eq!(
            payload.validate().unwrap_err(),
            "ideal_moisture_max must be between 0 and 100"
        );

        payload.ideal_moisture_max = 10;
        assert_eq!(
            payload.validate().unwrap_err(),
            "ideal_moisture_max must be >= ideal_moisture_min"
        );
    }

    #[test]
    fn test_plant_out_from_domain() {
        let plant = Plant {
            id: PlantId::new(7),
            name: "Aloe Vera".to_string(),
            species: "Aloe".to_string(),
            ideal_moisture_min: 20,
            ideal_moisture_max: 50,
        };

        let out = PlantOut::from(plant);
        assert_eq!(out.id, 7);
        assert_eq!(out.name, "Aloe Vera");
    }
}
