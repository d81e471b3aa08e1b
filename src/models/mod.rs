//! Core data models for the Vacation Alert Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod analysis_result;
mod client;
mod vacation;

pub use analysis_result::{AlertMetrics, AnalysisResult, EnrichedVacationRecord};
pub use client::ClientRecord;
pub use vacation::VacationRecord;
