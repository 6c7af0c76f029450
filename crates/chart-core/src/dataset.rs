// File: crates/chart-core/src/dataset.rs
// Summary: Compiled-in week of Barcelona weather and wave observations.

use crate::error::Result;
use crate::observation::{Observations, RawObservation};

const fn rec(
    date: &'static str,
    temperature: f64,
    wave_height: f64,
    wave_period: f64,
    wave_direction: f64,
) -> RawObservation {
    RawObservation { date, temperature, wave_height, wave_period, wave_direction }
}

/// Sample weather and wave data for Barcelona, one record per day.
pub const BARCELONA_WEEK: [RawObservation; 7] = [
    rec("2023-10-01", 22.0, 1.2, 6.0, 45.0),
    rec("2023-10-02", 24.0, 1.5, 5.0, 90.0),
    rec("2023-10-03", 21.0, 1.8, 7.0, 135.0),
    rec("2023-10-04", 19.0, 1.0, 6.0, 180.0),
    rec("2023-10-05", 23.0, 1.3, 8.0, 225.0),
    rec("2023-10-06", 25.0, 1.7, 4.0, 270.0),
    rec("2023-10-07", 20.0, 1.6, 6.0, 315.0),
];

/// Validated form of [`BARCELONA_WEEK`].
pub fn barcelona_week() -> Result<Observations> {
    Observations::from_raw(&BARCELONA_WEEK)
}
