//! Analysis logic for the Vacation Alert Engine.
//!
//! This module contains the pure transformation at the heart of the engine:
//! building the client lookup index, filtering entitlements by the alert
//! window, enriching the survivors with the joined company name and the
//! derived remaining-days balance, sorting, and computing aggregate metrics.

mod analyze;
mod client_index;
mod enrich;
mod metrics;
mod window;

pub use analyze::analyze;
pub use client_index::build_client_index;
pub use enrich::enrich_record;
pub use metrics::compute_metrics;
pub use window::{AlertWindow, DEFAULT_ALERT_WINDOW_DAYS, MAX_ALERT_WINDOW_DAYS};
