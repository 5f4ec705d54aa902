//! Watering-status derivation.
//!
//! The status of a plant is a pure function of its ideal moisture range and
//! the moisture value of its most recent reading. No persistence state is
//! consulted here; callers fetch the latest reading and pass its value in.

use serde::{Deserialize, Serialize};

/// Derived watering status of a plant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WateringStatus {
    /// No reading has ever been recorded for the plant
    NoData,
    /// Latest reading is strictly below the ideal minimum
    NeedsWater,
    /// Latest reading is strictly above the ideal maximum
    Overwatered,
    /// Latest reading lies inside the ideal range (bounds inclusive)
    Ok,
}

impl WateringStatus {
    /// Wire representation, matching the JSON serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            WateringStatus::NoData => "no_data",
            WateringStatus::NeedsWater => "needs_water",
            WateringStatus::Overwatered => "overwatered",
            WateringStatus::Ok => "ok",
        }
    }
}

impl std::fmt::Display for WateringStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derive the watering status from an ideal moisture range and the latest
/// reading value, if any.
///
/// Range bounds are inclusive: a reading equal to `ideal_min` or `ideal_max`
/// is [`WateringStatus::Ok`]. The function is total over its inputs; an
/// inverted range never reaches it because range validation happens at the
/// persistence boundary.
///
/// # Arguments
/// * `ideal_min` - Lower bound of the ideal range in percent
/// * `ideal_max` - Upper bound of the ideal range in percent
/// * `latest_reading` - Moisture percent of the most recent reading, or
///   `None` when the plant has no readings
pub fn compute_status(ideal_min: i32, ideal_max: i32, latest_reading: Option<f64>) -> WateringStatus {
    match latest_reading {
        None => WateringStatus::NoData,
        Some(value) if value < ideal_min as f64 => WateringStatus::NeedsWater,
        Some(value) if value > ideal_max as f64 => WateringStatus::Overwatered,
        Some(_) => WateringStatus::Ok,
    }
}

#[cfg(test)]
mod tests {
    use super::{compute_status, WateringStatus};

    #[test]
    fn test_no_reading_is_no_data() {
        assert_eq!(compute_status(30, 60, None), WateringStatus::NoData);
    }

    #[test]
    fn test_below_minimum_needs_water() {
        assert_eq!(compute_status(30, 60, Some(20.0)), WateringStatus::NeedsWater);
    }

    #[test]
    fn test_above_maximum_is_overwatered() {
        assert_eq!(compute_status(30, 60, Some(80.0)), WateringStatus::Overwatered);
    }

    #[test]
    fn test_inside_range_is_ok() {
        assert_eq!(compute_status(30, 60, Some(45.0)), WateringStatus::Ok);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert_eq!(compute_status(30, 60, Some(30.0)), WateringStatus::Ok);
        assert_eq!(compute_status(30, 60, Some(60.0)), WateringStatus::Ok);
    }

    #[test]
    fn test_fractional_reading_just_below_minimum() {
        assert_eq!(compute_status(30, 60, Some(29.9)), WateringStatus::NeedsWater);
    }

    #[test]
    fn test_wire_strings() {
        assert_eq!(WateringStatus::NoData.as_str(), "no_data");
        assert_eq!(WateringStatus::NeedsWater.as_str(), "needs_water");
        assert_eq!(WateringStatus::Overwatered.as_str(), "overwatered");
        assert_eq!(WateringStatus::Ok.as_str(), "ok");

        let json = serde_json::to_string(&WateringStatus::NeedsWater).unwrap();
        assert_eq!(json, "\"needs_water\"");
    }
}
