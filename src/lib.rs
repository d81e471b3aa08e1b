//! Vacation Alert Engine
//!
//! This crate ingests a two-sheet client/vacation workbook and produces the
//! vacation entitlement records whose must-take-by date falls within a
//! configurable alert window from the current date, plus summary metrics.

#![warn(missing_docs)]

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
