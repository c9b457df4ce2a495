// Radar status - classifies strike batches into sectors and derives summaries.

use super::geo;
use super::grid::SectorGrid;
use super::model::{AlarmResult, GeoPoint, Strike};
use super::sector::SectorStatus;

/// Full radar picture around the observer: one aggregate per sector.
///
/// One instance lives for the whole alert session and is mutated in place by
/// each evaluation pass.
#[derive(Clone, Debug)]
pub struct RadarStatus {
    grid: SectorGrid,
    sectors: Vec<SectorStatus>,
}

impl RadarStatus {
    pub fn new(grid: SectorGrid, threshold_time: i64) -> Self {
        let sectors = (0..grid.sector_count())
            .map(|_| SectorStatus::new(grid.bands(), threshold_time))
            .collect();
        Self { grid, sectors }
    }

    pub fn grid(&self) -> &SectorGrid {
        &self.grid
    }

    pub fn sectors(&self) -> &[SectorStatus] {
        &self.sectors
    }

    /// Classify a batch of strikes around the observer.
    ///
    /// Bearing selects the sector, distance (converted into the grid's unit)
    /// selects the band inside it. Strikes beyond the outermost band fall out
    /// of the picture entirely.
    pub fn classify(&mut self, observer: GeoPoint, strikes: &[Strike]) {
        for strike in strikes {
            let position = strike.position();
            let bearing = geo::bearing_deg(observer, position);
            let sector_index = self.grid.sector_for_bearing(bearing);
            let distance = geo::distance_km(observer, position) * self.grid.unit_factor();
            self.sectors[sector_index].check(distance, strike.timestamp, strike.multiplicity);
        }
    }

    pub fn reset(&mut self) {
        for sector in &mut self.sectors {
            sector.reset();
        }
    }

    pub fn update_threshold(&mut self, threshold_time: i64) {
        for sector in &mut self.sectors {
            sector.update_threshold(threshold_time);
        }
    }

    /// Index of the sector holding the closest relevant strike, if any.
    pub fn closest_sector(&self) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (index, sector) in self.sectors.iter().enumerate() {
            let distance = sector.closest_within_window();
            if !distance.is_finite() {
                continue;
            }
            if best.map_or(true, |(_, best_distance)| distance < best_distance) {
                best = Some((index, distance));
            }
        }
        best.map(|(index, _)| index)
    }

    /// Snapshot of the closest relevant activity, or None when the picture is
    /// empty.
    pub fn current_activity(&self) -> Option<AlarmResult> {
        self.closest_sector().map(|index| AlarmResult {
            sector_label: self.grid.label(index),
            closest_distance: self.sectors[index].closest_within_window(),
            unit_name: self.grid.unit_name(),
        })
    }

    /// Human-readable summary of all sectors with activity within `limit`,
    /// closest first; ties keep sector index order. Empty when nothing
    /// qualifies.
    pub fn text_message(&self, limit: f32) -> String {
        let mut entries: Vec<(usize, f32)> = self
            .sectors
            .iter()
            .enumerate()
            .filter_map(|(index, sector)| {
                let distance = sector.closest_within_window();
                (distance <= limit).then_some((index, distance))
            })
            .collect();
        entries.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));

        entries
            .iter()
            .map(|(index, distance)| {
                format!("{} {:.0}{}", self.grid.label(*index), distance, self.grid.unit_name())
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
