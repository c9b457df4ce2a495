// Stateless evaluation pass over a radar status.
//
// Every pass rebuilds the picture from the latest batch alone. Poll windows
// overlap upstream, so accumulating across batches would double-count.

use super::model::{GeoPoint, Strike};
use super::status::RadarStatus;

/// Reset the status onto a fresh relevance window, then classify the batch.
/// Without an observer location the status simply stays empty.
pub fn evaluate(
    status: &mut RadarStatus,
    observer: Option<GeoPoint>,
    strikes: &[Strike],
    threshold_time: i64,
) {
    status.update_threshold(threshold_time);
    if let Some(observer) = observer {
        status.classify(observer, strikes);
    }
}

/// Maximum strike timestamp across all sectors and bands qualifying under
/// `limit`. Zero when nothing qualifies; feeds the debounce comparison.
pub fn latest_timestamp_within(status: &RadarStatus, limit: f32) -> i64 {
    status
        .sectors()
        .iter()
        .map(|sector| sector.latest_timestamp_within(limit))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::MeasurementSystem;
    use crate::core::grid::SectorGrid;

    const OBSERVER: GeoPoint = GeoPoint {
        latitude: 49.0,
        longitude: 11.0,
    };

    fn strike(latitude: f32, longitude: f32, timestamp: i64) -> Strike {
        Strike {
            timestamp,
            latitude,
            longitude,
            multiplicity: 1,
        }
    }

    fn metric_status() -> RadarStatus {
        RadarStatus::new(SectorGrid::for_system(MeasurementSystem::Metric), 0)
    }

    #[test]
    fn test_evaluate_replaces_previous_batch() {
        let mut status = metric_status();

        // ~22 km north of the observer.
        evaluate(&mut status, Some(OBSERVER), &[strike(49.2, 11.0, 100)], 0);
        assert!(status.current_activity().is_some());

        // The next pass starts from scratch; an empty batch leaves nothing.
        evaluate(&mut status, Some(OBSERVER), &[], 0);
        assert!(status.current_activity().is_none());

        // And stays empty on repetition.
        evaluate(&mut status, Some(OBSERVER), &[], 0);
        assert!(status.current_activity().is_none());
    }

    #[test]
    fn test_evaluate_without_location_stays_empty() {
        let mut status = metric_status();
        evaluate(&mut status, None, &[strike(49.2, 11.0, 100)], 0);
        assert!(status.current_activity().is_none());
    }

    #[test]
    fn test_evaluate_moves_threshold_forward() {
        let mut status = metric_status();
        evaluate(&mut status, Some(OBSERVER), &[strike(49.2, 11.0, 100)], 500);

        // The strike predates the window, so it counts but is not relevant.
        assert!(status.current_activity().is_none());
        assert_eq!(latest_timestamp_within(&status, 500.0), 100);
    }

    #[test]
    fn test_latest_timestamp_spans_sectors() {
        let mut status = metric_status();
        let batch = [
            strike(49.2, 11.0, 300),  // north, ~22 km
            strike(48.8, 11.0, 700),  // south, ~22 km
            strike(49.0, 11.25, 900), // east, ~18 km
        ];
        evaluate(&mut status, Some(OBSERVER), &batch, 0);

        assert_eq!(latest_timestamp_within(&status, 25.0), 900);
        assert_eq!(latest_timestamp_within(&status, 5.0), 0);
    }
}
