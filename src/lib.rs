//! Tahfidz System - setoran hafalan record-keeping backend
//!
//! Actix Web backend for a pesantren Qur'an memorization program: santri
//! records, graded setoran entries, achievement leaderboards and a periodic
//! archival workflow that offloads old setoran to Google Sheets.
//!
//! # Architecture
//! - `config`: configuration management
//! - `entity`: SeaORM database entities
//! - `errors`: unified error handling
//! - `models`: data model definitions
//! - `quran`: verse-count to juz/page/line mapping and surah metadata
//! - `routes`: API route layer
//! - `runtime`: process lifecycle management
//! - `services`: business logic layer
//! - `sheets`: Google Sheets export client (service-account JWT flow)
//! - `storage`: data storage layer (SeaORM)
//! - `utils`: helper functions

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod quran;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod sheets;
pub mod storage;
pub mod utils;
