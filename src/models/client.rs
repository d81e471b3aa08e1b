//! Client model.
//!
//! This module defines the ClientRecord struct representing one row of the
//! clients worksheet.

use serde::{Deserialize, Serialize};

/// Represents a client (company) that owns vacation entitlements.
///
/// One row per client; `client_id` is unique within the clients worksheet.
/// If the source data repeats an id, the last occurrence wins when the
/// lookup index is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    /// Unique identifier for the client.
    pub client_id: i64,
    /// The client's company name.
    pub name: String,
}
