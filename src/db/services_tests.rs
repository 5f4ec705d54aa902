//! Service layer tests, run against the in-memory repository.

use chrono::{NaiveDate, NaiveDateTime};

use super::repositories::LocalRepository;
use super::repository::RepositoryError;
use super::services;
use crate::api::{NewPlant, NewReading, PlantId, ReadingId};
use crate::status::WateringStatus;

fn aloe() -> NewPlant {
    NewPlant::new("Aloe Vera", "Aloe barbadensis", 20, 50)
}

fn ts(hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, 18)
        .unwrap()
        .and_hms_opt(hour, min, sec)
        .unwrap()
}

fn assert_validation(err: RepositoryError, expected: &str) {
    match err {
        RepositoryError::ValidationError(msg) => assert_eq!(msg, expected),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_plant_rejects_min_below_range() {
    let repo = LocalRepository::new();
    let plant = NewPlant::new("Fern", "Nephrolepis", -5, 60);

    let err = services::create_plant(&repo, &plant).await.unwrap_err();
    assert_validation(err, "ideal_moisture_min must be between 0 and 100");
    assert_eq!(repo.plant_count(), 0);
}

#[tokio::test]
async fn test_create_plant_rejects_max_above_range() {
    let repo = LocalRepository::new();
    let plant = NewPlant::new("Fern", "Nephrolepis", 30, 150);

    let err = services::create_plant(&repo, &plant).await.unwrap_err();
    assert_validation(err, "ideal_moisture_max must be between 0 and 100");
}

#[tokio::test]
async fn test_create_plant_rejects_inverted_range() {
    let repo = LocalRepository::new();
    let plant = NewPlant::new("Fern", "Nephrolepis", 60, 30);

    let err = services::create_plant(&repo, &plant).await.unwrap_err();
    assert_validation(err, "ideal_moisture_max must be >= ideal_moisture_min");
}

#[tokio::test]
async fn test_create_plant_stores_and_assigns_id() {
    let repo = LocalRepository::new();

    let stored = services::create_plant(&repo, &aloe()).await.unwrap();
    assert_eq!(stored.id, PlantId::new(1));
    assert_eq!(stored.name, "Aloe Vera");

    let fetched = services::get_plant(&repo, stored.id).await.unwrap();
    assert_eq!(fetched, stored);
}

#[tokio::test]
async fn test_update_plant_validates_before_lookup() {
    let repo = LocalRepository::new();
    let fields = NewPlant::new("Fern", "Nephrolepis", 80, 20);

    // An invalid range is reported even when the plant doesn't exist.
    let err = services::update_plant(&repo, PlantId::new(999), &fields)
        .await
        .unwrap_err();
    assert_validation(err, "ideal_moisture_max must be >= ideal_moisture_min");
}

#[tokio::test]
async fn test_update_plant_missing_plant() {
    let repo = LocalRepository::new();

    let err = services::update_plant(&repo, PlantId::new(999), &aloe())
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound(_)));
}

#[tokio::test]
async fn test_update_plant_replaces_fields() {
    let repo = LocalRepository::new();
    let stored = services::create_plant(&repo, &aloe()).await.unwrap();

    let fields = NewPlant::new("Aloe (kitchen)", "Aloe barbadensis", 25, 55);
    let updated = services::update_plant(&repo, stored.id, &fields)
        .await
        .unwrap();

    assert_eq!(updated.id, stored.id);
    assert_eq!(updated.name, "Aloe (kitchen)");
    assert_eq!(updated.ideal_moisture_min, 25);
    assert_eq!(updated.ideal_moisture_max, 55);
}

#[tokio::test]
async fn test_delete_plant_removes_readings() {
    let repo = LocalRepository::new();
    let plant = services::create_plant(&repo, &aloe()).await.unwrap();

    for moisture in [32.0, 41.5] {
        let reading = NewReading::new(plant.id, moisture);
        services::create_reading(&repo, &reading).await.unwrap();
    }

    let removed = services::delete_plant(&repo, plant.id).await.unwrap();
    assert_eq!(removed, 2);

    let err = services::get_plant(&repo, plant.id).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound(_)));
    assert_eq!(repo.reading_count(), 0);
}

#[tokio::test]
async fn test_create_reading_defaults_timestamp() {
    let repo = LocalRepository::new();
    let plant = services::create_plant(&repo, &aloe()).await.unwrap();

    let before = chrono::Utc::now().naive_utc();
    let stored = services::create_reading(&repo, &NewReading::new(plant.id, 37.0))
        .await
        .unwrap();
    let after = chrono::Utc::now().naive_utc();

    assert!(stored.timestamp >= before && stored.timestamp <= after);

    let explicit = NewReading::with_timestamp(plant.id, 38.0, ts(10, 30, 0));
    let stored = services::create_reading(&repo, &explicit).await.unwrap();
    assert_eq!(stored.timestamp, ts(10, 30, 0));
}

#[tokio::test]
async fn test_create_reading_accepts_unknown_plant() {
    let repo = LocalRepository::new();

    // Ingestion does not verify the owning plant; the in-memory store has
    // no foreign key to object either.
    let stored = services::create_reading(&repo, &NewReading::new(PlantId::new(42), 12.0))
        .await
        .unwrap();
    assert_eq!(stored.plant_id, PlantId::new(42));
}

#[tokio::test]
async fn test_list_readings_requires_plant() {
    let repo = LocalRepository::new();

    let err = services::list_readings(&repo, PlantId::new(1)).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound(_)));
}

#[tokio::test]
async fn test_list_readings_ascending_ids() {
    let repo = LocalRepository::new();
    let plant = services::create_plant(&repo, &aloe()).await.unwrap();

    // Insert out of chronological order; listing follows insertion ids.
    services::create_reading(&repo, &NewReading::with_timestamp(plant.id, 30.0, ts(12, 0, 0)))
        .await
        .unwrap();
    services::create_reading(&repo, &NewReading::with_timestamp(plant.id, 31.0, ts(9, 0, 0)))
        .await
        .unwrap();

    let readings = services::list_readings(&repo, plant.id).await.unwrap();
    assert_eq!(readings.len(), 2);
    assert!(readings[0].id < readings[1].id);
    assert_eq!(readings[0].moisture_percent, 30.0);
}

#[tokio::test]
async fn test_latest_reading_prefers_timestamp_then_id() {
    let repo = LocalRepository::new();
    let plant = services::create_plant(&repo, &aloe()).await.unwrap();

    services::create_reading(&repo, &NewReading::with_timestamp(plant.id, 20.0, ts(9, 0, 0)))
        .await
        .unwrap();
    services::create_reading(&repo, &NewReading::with_timestamp(plant.id, 25.0, ts(11, 0, 0)))
        .await
        .unwrap();
    // Same timestamp as the previous one; the higher id wins the tie.
    services::create_reading(&repo, &NewReading::with_timestamp(plant.id, 28.0, ts(11, 0, 0)))
        .await
        .unwrap();

    let latest = services::get_latest_reading(&repo, plant.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(latest.moisture_percent, 28.0);
}

#[tokio::test]
async fn test_delete_reading_then_missing() {
    let repo = LocalRepository::new();
    let plant = services::create_plant(&repo, &aloe()).await.unwrap();
    let stored = services::create_reading(&repo, &NewReading::new(plant.id, 33.0))
        .await
        .unwrap();

    services::delete_reading(&repo, stored.id).await.unwrap();

    let err = services::delete_reading(&repo, stored.id).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound(_)));

    let err = services::delete_reading(&repo, ReadingId::new(999))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound(_)));
}

#[tokio::test]
async fn test_dashboard_empty() {
    let repo = LocalRepository::new();

    let entries = services::get_dashboard(&repo).await.unwrap();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_dashboard_statuses() {
    let repo = LocalRepository::new();

    let silent = services::create_plant(&repo, &NewPlant::new("Cactus", "Opuntia", 10, 30))
        .await
        .unwrap();
    let thirsty = services::create_plant(&repo, &NewPlant::new("Fern", "Nephrolepis", 40, 70))
        .await
        .unwrap();
    let soaked = services::create_plant(&repo, &NewPlant::new("Basil", "Ocimum", 30, 60))
        .await
        .unwrap();
    let content = services::create_plant(&repo, &aloe()).await.unwrap();

    services::create_reading(&repo, &NewReading::with_timestamp(thirsty.id, 35.0, ts(8, 0, 0)))
        .await
        .unwrap();
    services::create_reading(&repo, &NewReading::with_timestamp(soaked.id, 75.0, ts(8, 0, 0)))
        .await
        .unwrap();
    services::create_reading(&repo, &NewReading::with_timestamp(content.id, 35.0, ts(8, 0, 0)))
        .await
        .unwrap();

    let entries = services::get_dashboard(&repo).await.unwrap();
    assert_eq!(entries.len(), 4);

    // Entries come back in plant id order.
    assert_eq!(entries[0].id, silent.id);
    assert_eq!(entries[0].status, WateringStatus::NoData);
    assert!(entries[0].latest_reading.is_none());
    assert!(entries[0].last_reading.is_none());

    assert_eq!(entries[1].status, WateringStatus::NeedsWater);
    assert_eq!(entries[1].latest_reading, Some(35.0));

    assert_eq!(entries[2].status, WateringStatus::Overwatered);

    assert_eq!(entries[3].status, WateringStatus::Ok);
    let last = entries[3].last_reading.as_ref().unwrap();
    assert_eq!(last.moisture_percent, 35.0);
}

#[tokio::test]
async fn test_dashboard_timestamp_has_z_suffix() {
    let repo = LocalRepository::new();
    let plant = services::create_plant(&repo, &aloe()).await.unwrap();

    services::create_reading(&repo, &NewReading::with_timestamp(plant.id, 35.0, ts(10, 30, 0)))
        .await
        .unwrap();

    let entries = services::get_dashboard(&repo).await.unwrap();
    let last = entries[0].last_reading.as_ref().unwrap();
    assert_eq!(last.timestamp, "2026-08-18T10:30:00Z");

    // Sub-second precision is kept when present.
    let fractional = ts(10, 30, 0) + chrono::Duration::milliseconds(250);
    services::create_reading(&repo, &NewReading::with_timestamp(plant.id, 36.0, fractional))
        .await
        .unwrap();

    let entries = services::get_dashboard(&repo).await.unwrap();
    let last = entries[0].last_reading.as_ref().unwrap();
    assert_eq!(last.timestamp, "2026-08-18T10:30:00.250Z");
}
