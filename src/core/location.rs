// Latest-value location channel shared between the host and the coordinator.

use std::sync::Arc;

use tokio::sync::watch;

use super::model::GeoPoint;

/// Broadcast handle for observer location fixes.
///
/// Stores the most recent fix: new subscribers observe the current value
/// immediately and every later update is broadcast to all of them. The host
/// publishes fixes from the same serialized context that delivers batches.
#[derive(Clone, Debug)]
pub struct LocationFeed {
    shared: Arc<watch::Sender<Option<GeoPoint>>>,
}

impl LocationFeed {
    pub fn new() -> Self {
        let (sender, _receiver) = watch::channel(None);
        Self {
            shared: Arc::new(sender),
        }
    }

    /// Replace the cached fix and notify subscribers. `None` marks the
    /// position as unknown again.
    pub fn publish(&self, fix: Option<GeoPoint>) {
        self.shared.send_replace(fix);
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<GeoPoint>> {
        self.shared.subscribe()
    }

    pub fn latest(&self) -> Option<GeoPoint> {
        *self.shared.borrow()
    }
}

impl Default for LocationFeed {
    fn default() -> Self {
        Self::new()
    }
}
