//! Public API surface for the Rust backend.
//!
//! This file consolidates the domain types shared by the persistence layer
//! and the HTTP API. All types derive Serialize/Deserialize for JSON
//! serialization.

pub use crate::status::WateringStatus;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Plant identifier (database primary key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlantId(pub i32);

/// Moisture reading identifier (database primary key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReadingId(pub i32);

impl PlantId {
    pub fn new(value: i32) -> Self {
        PlantId(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl ReadingId {
    pub fn new(value: i32) -> Self {
        ReadingId(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for PlantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for ReadingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PlantId> for i32 {
    fn from(id: PlantId) -> Self {
        id.0
    }
}

/// A monitored plant with its ideal soil-moisture range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plant {
    /// Database ID (server-assigned)
    pub id: PlantId,
    /// Display name (max 100 characters in storage)
    pub name: String,
    /// Botanical or common species name (max 100 characters in storage)
    pub species: String,
    /// Lower bound of the ideal moisture range in percent (0-100)
    pub ideal_moisture_min: i32,
    /// Upper bound of the ideal moisture range in percent (0-100)
    pub ideal_moisture_max: i32,
}

/// Fields for creating a plant or fully replacing one on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPlant {
    pub name: String,
    pub species: String,
    pub ideal_moisture_min: i32,
    pub ideal_moisture_max: i32,
}

impl NewPlant {
    pub fn new(
        name: impl Into<String>,
        species: impl Into<String>,
        ideal_moisture_min: i32,
        ideal_moisture_max: i32,
    ) -> Self {
        Self {
            name: name.into(),
            species: species.into(),
            ideal_moisture_min,
            ideal_moisture_max,
        }
    }
}

/// A single soil-moisture measurement for a plant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reading {
    /// Database ID (server-assigned)
    pub id: ReadingId,
    /// Owning plant
    pub plant_id: PlantId,
    /// Measurement instant, naive UTC
    pub timestamp: NaiveDateTime,
    /// Measured soil moisture in percent
    pub moisture_percent: f64,
}

/// Fields for ingesting a reading.
///
/// The owning plant is not checked for existence at ingestion time; a
/// reading for an unknown plant id is rejected only by the database's
/// referential constraint, if one is active.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReading {
    pub plant_id: PlantId,
    pub moisture_percent: f64,
    /// Measurement instant; assigned by the server when absent
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
}

impl NewReading {
    pub fn new(plant_id: PlantId, moisture_percent: f64) -> Self {
        Self {
            plant_id,
            moisture_percent,
            timestamp: None,
        }
    }

    pub fn with_timestamp(plant_id: PlantId, moisture_percent: f64, timestamp: NaiveDateTime) -> Self {
        Self {
            plant_id,
            moisture_percent,
            timestamp: Some(timestamp),
        }
    }
}

/// Latest measurement embedded in a dashboard entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LastReading {
    pub moisture_percent: f64,
    /// ISO-8601 naive UTC instant with a literal "Z" suffix
    pub timestamp: String,
}

/// One plant's row in the dashboard: registry fields joined with the
/// latest reading and the derived watering status.
///
/// `latest_reading` and `last_reading` serialize as explicit `null` when
/// the plant has no readings; the frontend distinguishes null from absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardEntry {
    pub id: PlantId,
    pub name: String,
    pub species: String,
    pub ideal_moisture_min: i32,
    pub ideal_moisture_max: i32,
    /// Moisture percent of the latest reading, null without readings
    pub latest_reading: Option<f64>,
    /// Latest measurement detail, null without readings
    pub last_reading: Option<LastReading>,
    pub status: WateringStatus,
}
