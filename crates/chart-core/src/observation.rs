// File: crates/chart-core/src/observation.rs
// Summary: Observation record, its literal source form, and load-time validation.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{ChartError, Result};

/// Date format of literal records.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Plausible air temperature bounds in °C.
pub const TEMPERATURE_RANGE: (f64, f64) = (-90.0, 60.0);
/// Compass bearing bounds in degrees.
pub const DIRECTION_RANGE: (f64, f64) = (0.0, 360.0);

/// Record as written in source, before validation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawObservation {
    pub date: &'static str,
    pub temperature: f64,
    pub wave_height: f64,
    pub wave_period: f64,
    pub wave_direction: f64,
}

/// One day of weather and wave conditions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Observation {
    pub date: NaiveDate,
    /// Air temperature, °C.
    pub temperature: f64,
    /// Meters, strictly positive.
    pub wave_height: f64,
    /// Seconds, strictly positive.
    pub wave_period: f64,
    /// Degrees clockwise from north, in [0, 360].
    pub wave_direction: f64,
}

impl Observation {
    /// Validate a single record; `index` is only used for error reporting.
    pub fn try_from_raw(index: usize, raw: &RawObservation) -> Result<Self> {
        let date = NaiveDate::parse_from_str(raw.date, DATE_FORMAT).map_err(|source| {
            ChartError::InvalidDate { index, text: raw.date.to_string(), source }
        })?;

        let temperature = finite(index, "temperature", raw.temperature)?;
        let wave_height = finite(index, "wave height", raw.wave_height)?;
        let wave_period = finite(index, "wave period", raw.wave_period)?;
        let wave_direction = finite(index, "wave direction", raw.wave_direction)?;

        within(index, "temperature", temperature, TEMPERATURE_RANGE)?;
        positive(index, "wave height", wave_height)?;
        positive(index, "wave period", wave_period)?;
        within(index, "wave direction", wave_direction, DIRECTION_RANGE)?;

        Ok(Self { date, temperature, wave_height, wave_period, wave_direction })
    }
}

/// Validated, chronologically ordered, non-empty sequence of observations.
#[derive(Clone, Debug, PartialEq)]
pub struct Observations {
    records: Vec<Observation>,
}

impl Observations {
    /// Validate every record and the ordering between them. Fails on the first problem.
    pub fn from_raw(raw: &[RawObservation]) -> Result<Self> {
        if raw.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        let mut records: Vec<Observation> = Vec::with_capacity(raw.len());
        for (index, r) in raw.iter().enumerate() {
            let obs = Observation::try_from_raw(index, r)?;
            if let Some(prev) = records.last() {
                if obs.date <= prev.date {
                    return Err(ChartError::Unordered { index, date: obs.date, previous: prev.date });
                }
            }
            records.push(obs);
        }
        debug!(count = records.len(), "validated observations");
        Ok(Self { records })
    }

    pub fn as_slice(&self) -> &[Observation] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a validated sequence.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.records.iter()
    }

    pub fn first(&self) -> &Observation {
        &self.records[0]
    }

    pub fn last(&self) -> &Observation {
        &self.records[self.records.len() - 1]
    }

    /// Smallest and largest value of `f` over the sequence.
    pub fn extent(&self, f: impl Fn(&Observation) -> f64) -> (f64, f64) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for o in &self.records {
            let v = f(o);
            lo = lo.min(v);
            hi = hi.max(v);
        }
        (lo, hi)
    }
}

impl<'a> IntoIterator for &'a Observations {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn finite(index: usize, field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() { Ok(value) } else { Err(ChartError::NonFinite { index, field }) }
}

fn positive(index: usize, field: &'static str, value: f64) -> Result<()> {
    if value > 0.0 { Ok(()) } else { Err(ChartError::NotPositive { index, field, value }) }
}

fn within(index: usize, field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<()> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(ChartError::OutOfRange { index, field, value, min, max })
    }
}
