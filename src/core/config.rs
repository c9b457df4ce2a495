// Alert configuration - received as parsed values, persisted by the host.

use serde::{Deserialize, Serialize};

const KM_TO_MILES: f32 = 0.621_371;

/// Distance unit selection; also scales the range bands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasurementSystem {
    #[default]
    Metric,
    Imperial,
}

impl MeasurementSystem {
    pub fn unit_name(self) -> &'static str {
        match self {
            Self::Metric => "km",
            Self::Imperial => "mi",
        }
    }

    /// Factor applied to raw kilometer distances.
    pub fn unit_factor(self) -> f32 {
        match self {
            Self::Metric => 1.0,
            Self::Imperial => KM_TO_MILES,
        }
    }
}

/// Engine configuration with the recognized alert options.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AlertConfig {
    pub enabled: bool,
    #[serde(default)]
    pub measurement_system: MeasurementSystem,
    /// Distance limit for the vibration/sound channel, in the active unit.
    #[serde(default = "default_signaling_threshold")]
    pub signaling_threshold: f32,
    /// Distance limit for the persistent notification channel, in the active unit.
    #[serde(default = "default_notification_threshold")]
    pub notification_threshold: f32,
    #[serde(default = "default_vibration_duration_ms")]
    pub vibration_duration_ms: i32,
    /// Sound to request on a signaling fire; None keeps the channel silent.
    #[serde(default)]
    pub sound_uri: Option<String>,
    /// Length of the sliding window a strike stays alert-relevant for.
    #[serde(default = "default_window_seconds")]
    pub window_seconds: u32,
}

fn default_signaling_threshold() -> f32 {
    25.0
}

fn default_notification_threshold() -> f32 {
    50.0
}

fn default_vibration_duration_ms() -> i32 {
    1_000
}

fn default_window_seconds() -> u32 {
    600
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            measurement_system: MeasurementSystem::Metric,
            signaling_threshold: default_signaling_threshold(),
            notification_threshold: default_notification_threshold(),
            vibration_duration_ms: default_vibration_duration_ms(),
            sound_uri: None,
            window_seconds: default_window_seconds(),
        }
    }
}

impl AlertConfig {
    pub fn window_millis(&self) -> i64 {
        i64::from(self.window_seconds) * 1_000
    }
}
