//! Freight load record

use serde::{Deserialize, Serialize};

/// A single freight load as it appears in the dataset.
///
/// Values are carried exactly as read. Datetimes stay strings and numeric
/// fields are not range checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Load {
    /// Load identifier (expected unique, not enforced)
    pub load_id: String,
    /// Pickup location
    pub origin: String,
    /// Delivery location
    pub destination: String,
    /// Pickup date and time, unparsed
    pub pickup_datetime: String,
    /// Delivery date and time, unparsed
    pub delivery_datetime: String,
    /// Trailer/equipment type (e.g. "Dry Van")
    pub equipment_type: String,
    /// Posted rate
    pub loadboard_rate: i64,
    /// Free-form annotation; serialized as `null` when absent
    #[serde(default)]
    pub notes: Option<String>,
    /// Weight
    pub weight: i64,
    /// Commodity description
    pub commodity_type: String,
    /// Piece count
    pub num_of_pieces: i64,
    /// Trip distance
    pub miles: i64,
    /// Dimensions, free-form
    pub dimensions: String,
}
