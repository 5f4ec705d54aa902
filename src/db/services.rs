//! High-level database service layer.
//!
//! This module provides repository-agnostic database operations that work
//! with any implementation of the repository traits. These functions carry
//! the business rules that must hold regardless of the storage backend:
//! moisture range validation, the plant-existence check for reading
//! listings, and dashboard assembly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API)                           │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - Business Logic           │
//! │  - Range validation                                      │
//! │  - Dashboard assembly (join + status derivation)         │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/) - Abstract Interface   │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴────────────────┐
//!     │                                │
//! ┌───▼──────────────┐     ┌──────────▼──────────────┐
//! │ Postgres (Diesel)│     │ Local Repository        │
//! │                  │     │ (in-memory)             │
//! └──────────────────┘     └─────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use spm_rust::api::NewPlant;
//! use spm_rust::db::{services, repositories::LocalRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!
//!     let plant = services::create_plant(&repo, &NewPlant::new("Aloe Vera", "Aloe", 20, 50)).await?;
//!     println!("Created plant {}", plant.id);
//!
//!     Ok(())
//! }
//! ```

use chrono::NaiveDateTime;
use log::{debug, info};

use super::repository::{FullRepository, RepositoryError, RepositoryResult};
use crate::api::{DashboardEntry, LastReading, NewPlant, NewReading, Plant, PlantId, Reading, ReadingId};
use crate::status::compute_status;

// ==================== Health & Connection ====================

/// Check if the database connection is healthy.
///
/// This is a simple pass-through to the repository's health check.
///
/// # Arguments
/// * `repo` - Repository implementation
///
/// # Returns
/// * `Ok(true)` if connection is healthy
/// * `Err` if check fails
pub async fn health_check<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

// ==================== Plant Operations ====================

/// Validate an ideal moisture range.
///
/// Both bounds must lie in 0-100 and the maximum must not be below the
/// minimum. Validation always happens here, before anything reaches a
/// repository; the HTTP boundary applies the same rules a second time.
fn validate_moisture_range(ideal_moisture_min: i32, ideal_moisture_max: i32) -> RepositoryResult<()> {
    if !(0..=100).contains(&ideal_moisture_min) {
        return Err(RepositoryError::ValidationError(
            "ideal_moisture_min must be between 0 and 100".to_string(),
        ));
    }
    if !(0..=100).contains(&ideal_moisture_max) {
        return Err(RepositoryError::ValidationError(
            "ideal_moisture_max must be between 0 and 100".to_string(),
        ));
    }
    if ideal_moisture_max < ideal_moisture_min {
        return Err(RepositoryError::ValidationError(
            "ideal_moisture_max must be >= ideal_moisture_min".to_string(),
        ));
    }
    Ok(())
}

/// Register a new plant.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `plant` - Plant fields to store
///
/// # Returns
/// * `Ok(Plant)` - The stored plant with its assigned ID
/// * `Err(RepositoryError::ValidationError)` - If the moisture range is invalid
/// * `Err` if storage fails
pub async fn create_plant<R: FullRepository + ?Sized>(
    repo: &R,
    plant: &NewPlant,
) -> RepositoryResult<Plant> {
    validate_moisture_range(plant.ideal_moisture_min, plant.ideal_moisture_max)?;

    let stored = repo.create_plant(plant).await?;
    info!("Created plant {} ('{}')", stored.id, stored.name);
    Ok(stored)
}

/// List all registered plants, ordered by ascending ID.
pub async fn list_plants<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<Vec<Plant>> {
    repo.list_plants().await
}

/// Fetch a single plant.
///
/// # Returns
/// * `Ok(Plant)` - The plant
/// * `Err(RepositoryError::NotFound)` - If the plant doesn't exist
pub async fn get_plant<R: FullRepository + ?Sized>(
    repo: &R,
    plant_id: PlantId,
) -> RepositoryResult<Plant> {
    repo.get_plant(plant_id).await
}

/// Replace the mutable fields of an existing plant.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `plant_id` - The plant to update
/// * `fields` - New values for name, species, and the ideal range
///
/// # Returns
/// * `Ok(Plant)` - The updated plant
/// * `Err(RepositoryError::ValidationError)` - If the moisture range is invalid
/// * `Err(RepositoryError::NotFound)` - If the plant doesn't exist
pub async fn update_plant<R: FullRepository + ?Sized>(
    repo: &R,
    plant_id: PlantId,
    fields: &NewPlant,
) -> RepositoryResult<Plant> {
    validate_moisture_range(fields.ideal_moisture_min, fields.ideal_moisture_max)?;

    let updated = repo.update_plant(plant_id, fields).await?;
    info!("Updated plant {}", plant_id);
    Ok(updated)
}

/// Delete a plant together with all of its readings.
///
/// The repository removes the readings first, then the plant; the two
/// statements are not atomic.
///
/// # Returns
/// * `Ok(usize)` - Number of readings removed along with the plant
/// * `Err(RepositoryError::NotFound)` - If the plant doesn't exist
pub async fn delete_plant<R: FullRepository + ?Sized>(
    repo: &R,
    plant_id: PlantId,
) -> RepositoryResult<usize> {
    let readings_deleted = repo.delete_plant(plant_id).await?;
    info!(
        "Deleted plant {} and {} of its readings",
        plant_id, readings_deleted
    );
    Ok(readings_deleted)
}

// ==================== Reading Operations ====================

/// Ingest a moisture reading.
///
/// The owning plant is deliberately not checked for existence: ingestion
/// stays a single insert, and an unknown plant id is caught only by the
/// database's referential constraint where one is active.
///
/// # Returns
/// * `Ok(Reading)` - The stored reading with its assigned ID and effective
///   timestamp
pub async fn create_reading<R: FullRepository + ?Sized>(
    repo: &R,
    reading: &NewReading,
) -> RepositoryResult<Reading> {
    let stored = repo.create_reading(reading).await?;
    debug!(
        "Recorded reading {} for plant {} ({}%)",
        stored.id, stored.plant_id, stored.moisture_percent
    );
    Ok(stored)
}

/// List all readings for a plant, ordered by ascending ID.
///
/// Unlike ingestion, listing verifies the plant exists first.
///
/// # Returns
/// * `Ok(Vec<Reading>)` - The plant's readings (possibly empty)
/// * `Err(RepositoryError::NotFound)` - If the plant doesn't exist
pub async fn list_readings<R: FullRepository + ?Sized>(
    repo: &R,
    plant_id: PlantId,
) -> RepositoryResult<Vec<Reading>> {
    repo.get_plant(plant_id).await?;
    repo.get_readings_for_plant(plant_id).await
}

/// Fetch the most recent reading for a plant, if any.
pub async fn get_latest_reading<R: FullRepository + ?Sized>(
    repo: &R,
    plant_id: PlantId,
) -> RepositoryResult<Option<Reading>> {
    repo.get_latest_reading(plant_id).await
}

/// Delete a single reading.
///
/// # Returns
/// * `Ok(())` - The reading was removed
/// * `Err(RepositoryError::NotFound)` - If the reading doesn't exist
pub async fn delete_reading<R: FullRepository + ?Sized>(
    repo: &R,
    reading_id: ReadingId,
) -> RepositoryResult<()> {
    repo.delete_reading(reading_id).await?;
    info!("Deleted reading {}", reading_id);
    Ok(())
}

// ==================== Dashboard ====================

/// Render a naive UTC instant as ISO-8601 with a literal "Z" suffix.
///
/// The stored timestamps are naive UTC; no timezone conversion happens
/// here, the suffix is appended verbatim for the frontend.
fn format_timestamp_utc(timestamp: NaiveDateTime) -> String {
    format!("{}Z", timestamp.format("%Y-%m-%dT%H:%M:%S%.f"))
}

fn dashboard_entry(plant: Plant, latest: Option<Reading>) -> DashboardEntry {
    let latest_value = latest.as_ref().map(|r| r.moisture_percent);
    let status = compute_status(
        plant.ideal_moisture_min,
        plant.ideal_moisture_max,
        latest_value,
    );

    DashboardEntry {
        id: plant.id,
        name: plant.name,
        species: plant.species,
        ideal_moisture_min: plant.ideal_moisture_min,
        ideal_moisture_max: plant.ideal_moisture_max,
        latest_reading: latest_value,
        last_reading: latest.map(|r| LastReading {
            moisture_percent: r.moisture_percent,
            timestamp: format_timestamp_utc(r.timestamp),
        }),
        status,
    }
}

/// Build the dashboard: every plant joined with its latest reading and the
/// derived watering status, ordered by ascending plant ID.
///
/// The latest reading is fetched with one query per plant and the whole
/// walk is not wrapped in a transaction, so concurrent writers may be
/// observed mid-walk; each entry is consistent with whatever snapshot its
/// own query saw.
pub async fn get_dashboard<R: FullRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<DashboardEntry>> {
    let plants = repo.list_plants().await?;
    debug!("Building dashboard for {} plants", plants.len());

    let mut entries = Vec::with_capacity(plants.len());
    for plant in plants {
        let latest = repo.get_latest_reading(plant.id).await?;
        entries.push(dashboard_entry(plant, latest));
    }

    Ok(entries)
}
