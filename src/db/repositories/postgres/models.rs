use chrono::NaiveDateTime;
use diesel::prelude::*;

use super::schema::{plants, readings};
use crate::api::{Plant, PlantId, Reading, ReadingId};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = plants)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PlantRow {
    pub id: i32,
    pub name: String,
    pub species: String,
    pub ideal_moisture_min: i32,
    pub ideal_moisture_max: i32,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = plants)]
pub struct NewPlantRow {
    pub name: String,
    pub species: String,
    pub ideal_moisture_min: i32,
    pub ideal_moisture_max: i32,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = readings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ReadingRow {
    pub id: i32,
    pub plant_id: i32,
    pub timestamp: NaiveDateTime,
    pub moisture_percent: f64,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = readings)]
pub struct NewReadingRow {
    pub plant_id: i32,
    pub timestamp: NaiveDateTime,
    pub moisture_percent: f64,
}

impl From<PlantRow> for Plant {
    fn from(row: PlantRow) -> Self {
        Plant {
            id: PlantId(row.id),
            name: row.name,
            species: row.species,
            ideal_moisture_min: row.ideal_moisture_min,
            ideal_moisture_max: row.ideal_moisture_max,
        }
    }
}

impl From<ReadingRow> for Reading {
    fn from(row: ReadingRow) -> Self {
        Reading {
            id: ReadingId(row.id),
            plant_id: PlantId(row.plant_id),
            timestamp: row.timestamp,
            moisture_percent: row.moisture_percent,
        }
    }
}
