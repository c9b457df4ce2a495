use serde::{Deserialize, Serialize};

/// A single geolocated strike event, already parsed by the data collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Strike {
    /// Event time in epoch milliseconds.
    pub timestamp: i64,
    pub latitude: f32,
    pub longitude: f32,
    /// Number of discharges folded into this event.
    pub multiplicity: i32,
}

impl Strike {
    pub fn position(&self) -> GeoPoint {
        GeoPoint {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Observer position in WGS-84 degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f32,
    pub longitude: f32,
}

/// Snapshot of the closest relevant activity, rebuilt on every evaluation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AlarmResult {
    pub sector_label: &'static str,
    /// Distance in the configured unit.
    pub closest_distance: f32,
    pub unit_name: &'static str,
}

/// Update delivered to subscribers after each evaluation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum AlertUpdate {
    Activity(AlarmResult),
    Cancelled,
}
