// Static sector/range geometry shared by all aggregates.

use super::config::MeasurementSystem;

/// Compass labels in ascending bearing order, starting at the sector
/// centered on bearing -180.
pub const DEFAULT_SECTOR_LABELS: [&str; 8] = ["S", "SW", "W", "NW", "N", "NO", "O", "SO"];

/// Range band upper bounds in the active unit.
pub const DEFAULT_RANGE_BANDS: [f32; 6] = [10.0, 25.0, 50.0, 100.0, 250.0, 500.0];

/// Immutable partition of the horizon into N equal sectors and M range bands.
///
/// Sector 0 is centered on bearing -180 degrees, so the wedge straddling the
/// +-180 discontinuity maps onto a single index.
#[derive(Clone, Debug)]
pub struct SectorGrid {
    labels: Vec<&'static str>,
    bands: Vec<f32>,
    unit_name: &'static str,
    unit_factor: f32,
}

impl SectorGrid {
    /// Build a grid over custom labels and band bounds.
    ///
    /// Panics when the geometry is degenerate: no sectors, no bands, or band
    /// bounds that are not strictly increasing. Those are programmer errors,
    /// not runtime conditions.
    pub fn new(labels: &[&'static str], bands: &[f32], system: MeasurementSystem) -> Self {
        assert!(!labels.is_empty(), "sector grid needs at least one sector");
        assert!(!bands.is_empty(), "sector grid needs at least one range band");
        assert!(
            bands.windows(2).all(|pair| pair[0] < pair[1]),
            "range band bounds must be strictly increasing"
        );

        Self {
            labels: labels.to_vec(),
            bands: bands.to_vec(),
            unit_name: system.unit_name(),
            unit_factor: system.unit_factor(),
        }
    }

    /// Default 8-sector, 6-band grid in the given unit.
    pub fn for_system(system: MeasurementSystem) -> Self {
        Self::new(&DEFAULT_SECTOR_LABELS, &DEFAULT_RANGE_BANDS, system)
    }

    pub fn sector_count(&self) -> usize {
        self.labels.len()
    }

    pub fn band_count(&self) -> usize {
        self.bands.len()
    }

    pub fn sector_width(&self) -> f32 {
        360.0 / self.labels.len() as f32
    }

    pub fn label(&self, sector_index: usize) -> &'static str {
        self.labels[sector_index]
    }

    pub fn bands(&self) -> &[f32] {
        &self.bands
    }

    pub fn unit_name(&self) -> &'static str {
        self.unit_name
    }

    pub fn unit_factor(&self) -> f32 {
        self.unit_factor
    }

    /// Map a bearing in `[-180, 180)` onto its sector index.
    ///
    /// Rounds to the nearest sector center (half away from zero); the indices
    /// past either end of the range wrap onto sector 0.
    pub fn sector_for_bearing(&self, bearing_deg: f32) -> usize {
        let count = self.labels.len() as i32;
        let offset = (bearing_deg / self.sector_width()).round() as i32 + count / 2;
        offset.rem_euclid(count) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric_grid() -> SectorGrid {
        SectorGrid::for_system(MeasurementSystem::Metric)
    }

    #[test]
    fn test_default_geometry() {
        let grid = metric_grid();
        assert_eq!(grid.sector_count(), 8);
        assert_eq!(grid.band_count(), 6);
        assert_eq!(grid.sector_width(), 45.0);
        assert_eq!(grid.unit_name(), "km");
        assert_eq!(grid.bands(), &[10.0, 25.0, 50.0, 100.0, 250.0, 500.0]);
    }

    #[test]
    fn test_compass_points_map_to_expected_labels() {
        let grid = metric_grid();
        assert_eq!(grid.label(grid.sector_for_bearing(-180.0)), "S");
        assert_eq!(grid.label(grid.sector_for_bearing(-135.0)), "SW");
        assert_eq!(grid.label(grid.sector_for_bearing(-90.0)), "W");
        assert_eq!(grid.label(grid.sector_for_bearing(-45.0)), "NW");
        assert_eq!(grid.label(grid.sector_for_bearing(0.0)), "N");
        assert_eq!(grid.label(grid.sector_for_bearing(45.0)), "NO");
        assert_eq!(grid.label(grid.sector_for_bearing(90.0)), "O");
        assert_eq!(grid.label(grid.sector_for_bearing(135.0)), "SO");
    }

    #[test]
    fn test_wraparound_sector_straddles_the_discontinuity() {
        let grid = metric_grid();
        // Both edges of the southern wedge land on index 0.
        assert_eq!(grid.sector_for_bearing(-179.9), 0);
        assert_eq!(grid.sector_for_bearing(179.9), 0);
        assert_eq!(grid.sector_for_bearing(-160.0), 0);
        assert_eq!(grid.sector_for_bearing(165.0), 0);
    }

    #[test]
    fn test_classification_is_total_over_the_full_circle() {
        let grid = metric_grid();
        let mut hits = [0_u32; 8];
        let mut bearing = -180.0_f32;
        while bearing < 180.0 {
            hits[grid.sector_for_bearing(bearing)] += 1;
            bearing += 0.1;
        }
        // Every sector receives an equal share of the circle, no gaps.
        for (index, count) in hits.iter().enumerate() {
            assert!(*count > 0, "sector {index} never hit");
            assert!(
                (*count as i64 - 450).abs() <= 2,
                "sector {index} covers {count} tenths of a degree"
            );
        }
    }

    #[test]
    #[should_panic(expected = "at least one sector")]
    fn test_empty_labels_panic() {
        let _ = SectorGrid::new(&[], &DEFAULT_RANGE_BANDS, MeasurementSystem::Metric);
    }

    #[test]
    #[should_panic(expected = "at least one range band")]
    fn test_empty_bands_panic() {
        let _ = SectorGrid::new(&DEFAULT_SECTOR_LABELS, &[], MeasurementSystem::Metric);
    }

    #[test]
    #[should_panic(expected = "strictly increasing")]
    fn test_unsorted_bands_panic() {
        let _ = SectorGrid::new(
            &DEFAULT_SECTOR_LABELS,
            &[10.0, 10.0, 50.0],
            MeasurementSystem::Metric,
        );
    }
}
