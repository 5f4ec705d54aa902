//! # Smart Plant Monitor Backend
//!
//! Storage and status engine for houseplant moisture monitoring.
//!
//! This crate provides a Rust-based backend for the Smart Plant Monitor (SPM)
//! system: it stores plants and their periodic soil-moisture readings, derives
//! a watering status from the most recent reading, and serves a dashboard that
//! joins each plant with its latest measurement. The backend exposes a REST
//! API via Axum for the web frontend.
//!
//! ## Features
//!
//! - **Plant Registry**: Create, read, update, and delete monitored plants
//! - **Reading Ingestion**: Append-only moisture readings with server-assigned
//!   timestamps
//! - **Status Engine**: Pure watering-status derivation from ideal moisture
//!   ranges
//! - **Dashboard**: Per-plant join of registry data and the latest reading
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Domain types and Data Transfer Objects (DTOs)
//! - [`status`]: Watering-status derivation rules
//! - [`db`]: Database operations, repository pattern, and persistence layer
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;

pub mod db;
pub mod status;

#[cfg(feature = "http-server")]
pub mod http;
