// Alert coordinator - drives evaluation per batch and manages the two
// debounced alert channels.

use chrono::Utc;
use tokio::sync::watch;

use super::config::AlertConfig;
use super::effects::AlertEffects;
use super::evaluation;
use super::grid::SectorGrid;
use super::location::LocationFeed;
use super::model::{AlarmResult, AlertUpdate, GeoPoint, Strike};
use super::status::RadarStatus;

/// Lifecycle of the alert session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertState {
    /// Alerts switched off.
    Disabled,
    /// Enabled but nothing valid yet: no location fix or no batch so far.
    Pending,
    /// At least one batch evaluated with a known location.
    Active,
}

/// Top-level state holder for the alert session.
///
/// All entry points must be called from one serialized execution context;
/// the coordinator holds no locks of its own.
pub struct AlertCoordinator {
    config: AlertConfig,
    feed: LocationFeed,
    subscription: Option<watch::Receiver<Option<GeoPoint>>>,
    location: Option<GeoPoint>,
    status: RadarStatus,
    valid: bool,
    last_signal_timestamp: i64,
    last_notification_timestamp: i64,
    updates: watch::Sender<AlertUpdate>,
}

impl AlertCoordinator {
    pub fn new(config: AlertConfig, feed: LocationFeed) -> Self {
        let status = RadarStatus::new(SectorGrid::for_system(config.measurement_system), 0);
        let subscription = config.enabled.then(|| feed.subscribe());
        let (updates, _initial) = watch::channel(AlertUpdate::Cancelled);
        Self {
            config,
            feed,
            subscription,
            location: None,
            status,
            valid: false,
            last_signal_timestamp: 0,
            last_notification_timestamp: 0,
            updates,
        }
    }

    /// Receiver that immediately holds the latest update and observes every
    /// later one.
    pub fn subscribe(&self) -> watch::Receiver<AlertUpdate> {
        self.updates.subscribe()
    }

    pub fn config(&self) -> &AlertConfig {
        &self.config
    }

    pub fn state(&self) -> AlertState {
        if !self.config.enabled {
            AlertState::Disabled
        } else if self.valid {
            AlertState::Active
        } else {
            AlertState::Pending
        }
    }

    pub fn current_location(&self) -> Option<GeoPoint> {
        self.location
    }

    /// Latest-batch activity snapshot; None while invalid or quiet.
    pub fn current_activity(&self) -> Option<AlarmResult> {
        self.status.current_activity()
    }

    /// Sector summary line for activity within `limit`.
    pub fn text_message(&self, limit: f32) -> String {
        self.status.text_message(limit)
    }

    pub fn radar_status(&self) -> &RadarStatus {
        &self.status
    }

    /// Apply a new configuration (hot-reload friendly).
    ///
    /// Enabling subscribes to the location feed; disabling unsubscribes,
    /// drops the last known fix and invalidates the session. A unit change
    /// rebuilds the grid, so the stale picture is invalidated as well.
    pub fn update_config(&mut self, config: AlertConfig) {
        if config.measurement_system != self.config.measurement_system {
            self.status = RadarStatus::new(SectorGrid::for_system(config.measurement_system), 0);
            self.invalidate();
        }

        let was_enabled = self.config.enabled;
        if config.enabled && !was_enabled {
            self.subscription = Some(self.feed.subscribe());
            log::debug!("strike alerts enabled");
        } else if !config.enabled && was_enabled {
            self.subscription = None;
            self.location = None;
            self.invalidate();
            log::debug!("strike alerts disabled");
        }

        self.config = config;
    }

    /// Evaluate one incoming batch. `None` means the upstream poll produced
    /// no data at all; that is not an error, just an invalid picture.
    pub fn on_batch(&mut self, strikes: Option<&[Strike]>, effects: &mut dyn AlertEffects) {
        self.refresh_location();

        let batch = match strikes {
            Some(batch) if self.config.enabled && self.location.is_some() => batch,
            _ => {
                self.invalidate();
                return;
            }
        };

        self.valid = true;
        let threshold_time = Utc::now().timestamp_millis() - self.config.window_millis();
        evaluation::evaluate(&mut self.status, self.location, batch, threshold_time);
        let result = self.status.current_activity();
        self.process_result(result, effects);
    }

    /// Pull the newest fix from the feed; latest wins.
    fn refresh_location(&mut self) {
        if let Some(subscription) = &mut self.subscription {
            self.location = *subscription.borrow_and_update();
        }
    }

    fn process_result(&mut self, result: Option<AlarmResult>, effects: &mut dyn AlertEffects) {
        if let Some(result) = &result {
            if result.closest_distance <= self.config.signaling_threshold {
                let latest =
                    evaluation::latest_timestamp_within(&self.status, self.config.signaling_threshold);
                if latest > self.last_signal_timestamp {
                    effects.vibrate(self.config.vibration_duration_ms);
                    if let Some(uri) = &self.config.sound_uri {
                        effects.play_sound(uri);
                    }
                    self.last_signal_timestamp = latest;
                    log::info!(
                        "signaling alert: {} {:.1}{}",
                        result.sector_label,
                        result.closest_distance,
                        result.unit_name
                    );
                }
            }

            if result.closest_distance <= self.config.notification_threshold {
                let latest = evaluation::latest_timestamp_within(
                    &self.status,
                    self.config.notification_threshold,
                );
                if latest > self.last_notification_timestamp {
                    let text = self.status.text_message(self.config.notification_threshold);
                    effects.show_notification(&text);
                    self.last_notification_timestamp = latest;
                }
            } else {
                effects.clear_notification();
            }
        } else {
            effects.clear_notification();
        }

        let update = match result {
            Some(result) => AlertUpdate::Activity(result),
            None => AlertUpdate::Cancelled,
        };
        self.updates.send_replace(update);
    }

    /// Drop the current picture. Idempotent: while already invalid this is a
    /// no-op and publishes nothing.
    fn invalidate(&mut self) {
        if !self.valid {
            return;
        }
        self.valid = false;
        self.status.reset();
        self.last_signal_timestamp = 0;
        self.last_notification_timestamp = 0;
        self.updates.send_replace(AlertUpdate::Cancelled);
        log::debug!("alert picture invalidated");
    }
}
