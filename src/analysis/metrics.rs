//! Aggregate metric computation over the filtered record set.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::models::{AlertMetrics, EnrichedVacationRecord};

/// Computes the aggregate metrics for a filtered, enriched record set.
///
/// `alert_count` is the row count, `affected_company_count` the number of
/// distinct resolved company names (unmatched joins do not count), and
/// `average_remaining_days` the mean balance rounded to one decimal place.
/// An empty set yields `average_remaining_days: None`; the undefined mean is
/// never coerced to zero.
pub fn compute_metrics(records: &[EnrichedVacationRecord]) -> AlertMetrics {
    let affected_company_count = records
        .iter()
        .filter_map(|record| record.company_name.as_deref())
        .collect::<HashSet<_>>()
        .len();

    let average_remaining_days = if records.is_empty() {
        None
    } else {
        let sum: i64 = records.iter().map(|record| record.remaining_days).sum();
        Some((Decimal::from(sum) / Decimal::from(records.len() as i64)).round_dp(1))
    };

    AlertMetrics {
        alert_count: records.len(),
        affected_company_count,
        average_remaining_days,
    }
}
