//! Analysis result models.
//!
//! This module defines the enriched output record, the aggregate metrics and
//! the top-level result payload returned by the analysis.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A vacation record that survived the alert window filter, enriched with
/// the joined company name and the derived remaining-days balance.
///
/// Field declaration order is the JSON key order of the serialized record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedVacationRecord {
    /// Identifier of the client this entitlement belongs to.
    pub client_id: i64,
    /// Days of vacation the client is entitled to for this period.
    pub entitlement_days: i64,
    /// Days of vacation already taken in this period.
    pub days_taken: i64,
    /// The date by which the remaining vacation must be taken.
    pub due_by_date: NaiveDate,
    /// Company name resolved from the clients sheet, or `None` when the
    /// client id has no match (lenient join, not an error).
    pub company_name: Option<String>,
    /// `entitlement_days - days_taken`, unclamped (may be negative).
    pub remaining_days: i64,
}

/// Aggregate metrics computed over the filtered record set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertMetrics {
    /// Number of records inside the alert window.
    pub alert_count: usize,
    /// Number of distinct resolved company names among those records.
    pub affected_company_count: usize,
    /// Mean of `remaining_days` rounded to one decimal place, or `None`
    /// (serialized as `null`) when no records fell inside the window.
    pub average_remaining_days: Option<Decimal>,
}

/// The full result of one analysis invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The enriched records, ordered by due date then client id.
    #[serde(rename = "data")]
    pub records: Vec<EnrichedVacationRecord>,
    /// Aggregate metrics over `records`.
    pub metrics: AlertMetrics,
}
