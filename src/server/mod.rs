//! Server-side ajax backend for inbound email routes.
//!
//! The backend answers the same `module`/`cmd` pairs the browser client issues
//! against the ajax controller path, backed by an in-memory store seeded at
//! startup.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - Query dispatch, body decoding, DTO conversion
//! - **Service Layer** (`service/`) - Validation and business rules
//! - **Data Layer** (`data/`) - Store access through repositories
//! - **Model Layer** (`model/`) - Domain models, parameters and the seed format
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Seed loading and store construction
//! - **Router** (`router`) - Axum route configuration
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
