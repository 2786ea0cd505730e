//! Owned result types produced by the decoder.
//!
//! Everything here is copied out of the wire buffer during decode; nothing
//! borrows from it. A sample is `Option<f64>`: `None` marks a slot the server
//! left unset, which keeps "valid zero" and "missing" distinct at the API
//! boundary instead of smuggling a NaN sentinel through.

use crate::variables::{CurrentVariable, DailyVariable, HourlyVariable};
use serde::Serialize;
use std::collections::HashMap;

/// A fully decoded forecast response.
///
/// `hourly`, `daily` and `current` are present exactly when the request named
/// at least one variable for that group *and* the server returned the group.
/// A group requested with an empty variable list is treated as not requested.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    /// Latitude of the grid cell the forecast was computed for.
    pub latitude: f64,
    /// Longitude of the grid cell the forecast was computed for.
    pub longitude: f64,
    /// Elevation of the grid cell, meters.
    pub elevation: f64,
    /// Offset of the response's local timezone from UTC, seconds.
    pub utc_offset_seconds: i32,
    /// IANA timezone name, when the request asked for one.
    pub timezone: Option<String>,
    /// Timezone abbreviation (e.g. `CET`), when the request asked for one.
    pub timezone_abbreviation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly: Option<HourlySeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily: Option<DailySeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<CurrentConditions>,
}

impl Forecast {
    /// Decodes a raw response payload against the variables `request` asked
    /// for, without touching the network. Useful for replaying stored
    /// payload captures.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`](crate::DecodeError) when the buffer is not a
    /// validly framed response or violates the schema's consistency
    /// invariants. No partial result is ever returned.
    pub fn decode(
        buffer: &[u8],
        request: &crate::ForecastRequest,
    ) -> Result<Self, crate::DecodeError> {
        crate::forecast::decoder::decode_forecast(buffer, request)
    }
}

/// Hour-by-hour series sharing one time axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlySeries {
    /// Epoch seconds, strictly increasing by the group's interval.
    pub time: Vec<i64>,
    /// One sample array per requested variable, each aligned with `time`.
    pub values: HashMap<HourlyVariable, Vec<Option<f64>>>,
}

impl HourlySeries {
    /// The sample array for `variable`, if it was requested.
    pub fn get(&self, variable: HourlyVariable) -> Option<&[Option<f64>]> {
        self.values.get(&variable).map(Vec::as_slice)
    }

    /// Number of axis positions in the series.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

/// Day-by-day series sharing one time axis.
///
/// Samples of [`DailyVariable::Sunrise`] and [`DailyVariable::Sunset`] are
/// whole-second epoch timestamps carried as `f64`, matching the numeric shape
/// of every other variable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySeries {
    /// Epoch seconds of each day's local midnight.
    pub time: Vec<i64>,
    /// One sample array per requested variable, each aligned with `time`.
    pub values: HashMap<DailyVariable, Vec<Option<f64>>>,
}

impl DailySeries {
    /// The sample array for `variable`, if it was requested.
    pub fn get(&self, variable: DailyVariable) -> Option<&[Option<f64>]> {
        self.values.get(&variable).map(Vec::as_slice)
    }

    /// Number of axis positions in the series.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

/// Snapshot of current conditions: one timestamp, one scalar per variable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentConditions {
    /// Epoch seconds of the snapshot instant, shared by all variables.
    pub time: i64,
    /// One scalar per requested variable; `None` marks an unset sample.
    pub values: HashMap<CurrentVariable, Option<f64>>,
}

impl CurrentConditions {
    /// The scalar for `variable`: outer `None` when it was not requested,
    /// inner `None` when the server left the sample unset.
    pub fn get(&self, variable: CurrentVariable) -> Option<Option<f64>> {
        self.values.get(&variable).copied()
    }
}
