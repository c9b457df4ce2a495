// Per-sector aggregation of strikes into range bands.

/// Counter slot for one range band.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BandSlot {
    pub count: i32,
    /// Latest strike timestamp seen in this band, epoch milliseconds.
    pub latest_timestamp: i64,
}

/// Running aggregate for one sector: band counters plus the closest distance
/// observed inside the sliding relevance window.
///
/// Rebuilt from scratch on every evaluation pass; nothing is merged across
/// batches.
#[derive(Clone, Debug)]
pub struct SectorStatus {
    bounds: Vec<f32>,
    slots: Vec<BandSlot>,
    closest_within_window: f32,
    threshold_time: i64,
}

impl SectorStatus {
    pub fn new(bounds: &[f32], threshold_time: i64) -> Self {
        assert!(!bounds.is_empty(), "sector needs at least one range band");
        Self {
            bounds: bounds.to_vec(),
            slots: vec![BandSlot::default(); bounds.len()],
            closest_within_window: f32::INFINITY,
            threshold_time,
        }
    }

    /// Fold one strike into the aggregate.
    ///
    /// The strike lands in the smallest band whose bound still covers the
    /// distance; an exact tie belongs to the nearer band. Distances beyond
    /// the last bound are ignored without mutation. Only strikes newer than
    /// the threshold time contribute to the closest-distance tracker.
    pub fn check(&mut self, distance: f32, timestamp: i64, multiplicity: i32) {
        let Some(band) = self.bounds.iter().position(|&bound| distance <= bound) else {
            return;
        };
        let slot = &mut self.slots[band];
        slot.count += multiplicity;
        slot.latest_timestamp = slot.latest_timestamp.max(timestamp);
        if timestamp > self.threshold_time {
            self.closest_within_window = self.closest_within_window.min(distance);
        }
    }

    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            *slot = BandSlot::default();
        }
        self.closest_within_window = f32::INFINITY;
    }

    /// Reset and move the relevance window forward.
    pub fn update_threshold(&mut self, threshold_time: i64) {
        self.reset();
        self.threshold_time = threshold_time;
    }

    pub fn closest_within_window(&self) -> f32 {
        self.closest_within_window
    }

    pub fn threshold_time(&self) -> i64 {
        self.threshold_time
    }

    pub fn slots(&self) -> &[BandSlot] {
        &self.slots
    }

    /// Maximum timestamp across the bands whose bound qualifies under `limit`.
    /// Zero when no band qualifies or nothing was recorded.
    pub fn latest_timestamp_within(&self, limit: f32) -> i64 {
        self.bounds
            .iter()
            .zip(&self.slots)
            .filter(|(bound, _)| **bound <= limit)
            .map(|(_, slot)| slot.latest_timestamp)
            .max()
            .unwrap_or(0)
    }
}
