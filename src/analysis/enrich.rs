//! Record enrichment.
//!
//! Joins a vacation record against the client index and derives the
//! remaining-days balance.

use std::collections::HashMap;

use crate::models::{EnrichedVacationRecord, VacationRecord};

/// Enriches a vacation record with the resolved company name and the
/// derived remaining-days balance.
///
/// The join is lenient: a client id with no entry in the index yields
/// `company_name: None` rather than an error. The balance is copied from
/// [`VacationRecord::remaining_days`] without bounds checking.
pub fn enrich_record(
    record: &VacationRecord,
    index: &HashMap<i64, String>,
) -> EnrichedVacationRecord {
    EnrichedVacationRecord {
        client_id: record.client_id,
        entitlement_days: record.entitlement_days,
        days_taken: record.days_taken,
        due_by_date: record.due_by_date,
        company_name: index.get(&record.client_id).cloned(),
        remaining_days: record.remaining_days(),
    }
}
