//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! existing service layer for business logic.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    DashboardEntry, HealthResponse, MessageResponse, PlantCreate, PlantOut, PlantUpdate,
    ReadingCreate, ReadingOut,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{NewPlant, NewReading, PlantId};
use crate::db::services as db_services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and database is accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Plant CRUD
// =============================================================================

/// POST /plants
///
/// Register a new plant. Returns the stored plant with its assigned ID.
pub async fn create_plant(
    State(state): State<AppState>,
    Json(payload): Json<PlantCreate>,
) -> Result<(StatusCode, Json<PlantOut>), AppError> {
    payload.validate().map_err(AppError::Validation)?;

    let fields = NewPlant::from(payload);
    let plant = db_services::create_plant(state.repository.as_ref(), &fields).await?;

    Ok((StatusCode::CREATED, Json(plant.into())))
}

/// GET /plants
///
/// List all registered plants.
pub async fn list_plants(State(state): State<AppState>) -> HandlerResult<Vec<PlantOut>> {
    let plants = db_services::list_plants(state.repository.as_ref()).await?;

    Ok(Json(plants.into_iter().map(Into::into).collect()))
}

/// GET /plants/{plant_id}
///
/// Fetch a single plant by ID.
pub async fn get_plant(
    State(state): State<AppState>,
    Path(plant_id): Path<i32>,
) -> HandlerResult<PlantOut> {
    let plant = db_services::get_plant(state.repository.as_ref(), PlantId::new(plant_id)).await?;

    Ok(Json(plant.into()))
}

/// PUT /plants/{plant_id}
///
/// Replace a plant's fields. Updates are full replacements.
pub async fn update_plant(
    State(state): State<AppState>,
    Path(plant_id): Path<i32>,
    Json(payload): Json<PlantUpdate>,
) -> HandlerResult<PlantOut> {
    payload.validate().map_err(AppError::Validation)?;

    let fields = NewPlant::from(payload);
    let plant =
        db_services::update_plant(state.repository.as_ref(), PlantId::new(plant_id), &fields)
            .await?;

    Ok(Json(plant.into()))
}

/// DELETE /plants/{plant_id}
///
/// Delete a plant and all of its readings.
pub async fn delete_plant(
    State(state): State<AppState>,
    Path(plant_id): Path<i32>,
) -> HandlerResult<MessageResponse> {
    db_services::delete_plant(state.repository.as_ref(), PlantId::new(plant_id)).await?;

    Ok(Json(MessageResponse {
        message: "Plant deleted".to_string(),
    }))
}

// =============================================================================
// Readings
// =============================================================================

/// POST /readings
///
/// Ingest a sensor reading. The timestamp is assigned server-side.
pub async fn create_reading(
    State(state): State<AppState>,
    Json(payload): Json<ReadingCreate>,
) -> Result<(StatusCode, Json<ReadingOut>), AppError> {
    let reading = NewReading::from(payload);
    let stored = db_services::create_reading(state.repository.as_ref(), &reading).await?;

    Ok((StatusCode::CREATED, Json(stored.into())))
}

/// GET /readings/{plant_id}
///
/// List all readings for a plant.
pub async fn list_readings(
    State(state): State<AppState>,
    Path(plant_id): Path<i32>,
) -> HandlerResult<Vec<ReadingOut>> {
    let readings =
        db_services::list_readings(state.repository.as_ref(), PlantId::new(plant_id)).await?;

    Ok(Json(readings.into_iter().map(Into::into).collect()))
}

// =============================================================================
// Dashboard
// =============================================================================

/// GET /dashboard
///
/// All plants joined with their latest reading and derived watering status.
pub async fn get_dashboard(State(state): State<AppState>) -> HandlerResult<Vec<DashboardEntry>> {
    let entries = db_services::get_dashboard(state.repository.as_ref()).await?;

    Ok(Json(entries))
}
