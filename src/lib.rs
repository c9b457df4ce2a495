#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
// The ultimate strictness: catches things like missing documentation or overflow risks
#![warn(clippy::restriction)]
pub mod core;

pub use crate::core::config::{AlertConfig, MeasurementSystem};
pub use crate::core::coordinator::{AlertCoordinator, AlertState};
pub use crate::core::effects::AlertEffects;
pub use crate::core::location::LocationFeed;
pub use crate::core::model::{AlarmResult, AlertUpdate, GeoPoint, Strike};
