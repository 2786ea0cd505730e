//! The typed request object and its query-string encoding.
//!
//! A [`ForecastRequest`] holds everything a single forecast call needs: the
//! location, optional window and unit options, and one ordered variable list
//! per record group. The decoder later relies on those lists verbatim, so the
//! request object is the single source of truth for what comes back.

use crate::variables::{CurrentVariable, DailyVariable, HourlyVariable};
use bon::Builder;
use chrono::NaiveDate;
use std::fmt;

/// Grid-cell selection preference for resolving the requested coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellSelection {
    Land,
    Sea,
    Nearest,
}

impl CellSelection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Land => "land",
            Self::Sea => "sea",
            Self::Nearest => "nearest",
        }
    }
}

impl fmt::Display for CellSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit for temperature variables. The server default is Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Celsius => "celsius",
            Self::Fahrenheit => "fahrenheit",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit for wind-speed variables. The server default is km/h.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindSpeedUnit {
    Kmh,
    Ms,
    Mph,
    Kn,
}

impl WindSpeedUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Kmh => "kmh",
            Self::Ms => "ms",
            Self::Mph => "mph",
            Self::Kn => "kn",
        }
    }
}

impl fmt::Display for WindSpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit for precipitation variables. The server default is millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecipitationUnit {
    Mm,
    Inch,
}

impl PrecipitationUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mm => "mm",
            Self::Inch => "inch",
        }
    }
}

impl fmt::Display for PrecipitationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for a single forecast request.
///
/// Build one with the generated builder; only the coordinates are required.
/// The three variable lists are independent: a group with an empty list is
/// not requested at all and will be absent from the decoded [`crate::Forecast`].
///
/// # Examples
///
/// ```
/// use open_meteo_forecast::{DailyVariable, ForecastRequest, HourlyVariable};
///
/// let request = ForecastRequest::builder()
///     .latitude(49.867)
///     .longitude(11.234)
///     .timezone("Europe/Berlin")
///     .forecast_days(7)
///     .hourly(vec![
///         HourlyVariable::Temperature2m,
///         HourlyVariable::WindSpeed10m,
///     ])
///     .daily(vec![DailyVariable::Sunrise, DailyVariable::Sunset])
///     .build();
///
/// assert_eq!(request.hourly.len(), 2);
/// assert!(request.current.is_empty());
/// ```
#[derive(Debug, Clone, Builder)]
pub struct ForecastRequest {
    /// Latitude of the forecast location, WGS84 degrees.
    pub latitude: f64,
    /// Longitude of the forecast location, WGS84 degrees.
    pub longitude: f64,
    /// Overrides the grid-cell elevation used for downscaling, meters.
    pub elevation: Option<f64>,
    /// IANA timezone name (e.g. `Europe/Berlin`). Without it the response
    /// axis is UTC-based and `utc_offset_seconds` is zero.
    #[builder(into)]
    pub timezone: Option<String>,
    /// Number of forecast days (0-10, server default 7).
    pub forecast_days: Option<u8>,
    /// Number of past days to include (0-92, server default 0).
    pub past_days: Option<u8>,
    /// First day of the forecast window, overrides `forecast_days`.
    pub start_date: Option<NaiveDate>,
    /// Last day of the forecast window (inclusive).
    pub end_date: Option<NaiveDate>,
    pub cell_selection: Option<CellSelection>,
    pub temperature_unit: Option<TemperatureUnit>,
    pub wind_speed_unit: Option<WindSpeedUnit>,
    pub precipitation_unit: Option<PrecipitationUnit>,
    /// Hourly variables, in the order the decoded series should carry them.
    #[builder(default)]
    pub hourly: Vec<HourlyVariable>,
    /// Daily variables, in the order the decoded series should carry them.
    #[builder(default)]
    pub daily: Vec<DailyVariable>,
    /// Current-conditions variables.
    #[builder(default)]
    pub current: Vec<CurrentVariable>,
}

impl ForecastRequest {
    /// Flattens the request into query pairs, always ending with the fixed
    /// `format=flatbuffers` selector. Unset options are omitted; variable
    /// lists serialize comma-joined in request order, which the server
    /// contract mirrors in the response block order.
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("latitude", self.latitude.to_string()),
            ("longitude", self.longitude.to_string()),
        ];
        if let Some(elevation) = self.elevation {
            pairs.push(("elevation", elevation.to_string()));
        }
        if let Some(timezone) = &self.timezone {
            pairs.push(("timezone", timezone.clone()));
        }
        if let Some(days) = self.forecast_days {
            pairs.push(("forecast_days", days.to_string()));
        }
        if let Some(days) = self.past_days {
            pairs.push(("past_days", days.to_string()));
        }
        if let Some(date) = self.start_date {
            pairs.push(("start_date", date.format("%Y-%m-%d").to_string()));
        }
        if let Some(date) = self.end_date {
            pairs.push(("end_date", date.format("%Y-%m-%d").to_string()));
        }
        if let Some(cell_selection) = self.cell_selection {
            pairs.push(("cell_selection", cell_selection.to_string()));
        }
        if let Some(unit) = self.temperature_unit {
            pairs.push(("temperature_unit", unit.to_string()));
        }
        if let Some(unit) = self.wind_speed_unit {
            pairs.push(("wind_speed_unit", unit.to_string()));
        }
        if let Some(unit) = self.precipitation_unit {
            pairs.push(("precipitation_unit", unit.to_string()));
        }
        if !self.hourly.is_empty() {
            pairs.push(("hourly", join_names(self.hourly.iter().map(|v| v.as_str()))));
        }
        if !self.daily.is_empty() {
            pairs.push(("daily", join_names(self.daily.iter().map(|v| v.as_str()))));
        }
        if !self.current.is_empty() {
            pairs.push((
                "current",
                join_names(self.current.iter().map(|v| v.as_str())),
            ));
        }
        pairs.push(("format", "flatbuffers".to_string()));
        pairs
    }
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variables::{CurrentVariable, DailyVariable, HourlyVariable};

    fn pair<'a>(pairs: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn encodes_required_fields_and_format_selector() {
        let request = ForecastRequest::builder()
            .latitude(49.867)
            .longitude(11.234)
            .build();
        let pairs = request.query_pairs();

        assert_eq!(pair(&pairs, "latitude"), Some("49.867"));
        assert_eq!(pair(&pairs, "longitude"), Some("11.234"));
        assert_eq!(pairs.last().unwrap(), &("format", "flatbuffers".to_string()));
    }

    #[test]
    fn joins_variable_lists_in_request_order() {
        let request = ForecastRequest::builder()
            .latitude(49.867)
            .longitude(11.234)
            .hourly(vec![
                HourlyVariable::ApparentTemperature,
                HourlyVariable::WindSpeed10m,
                HourlyVariable::Temperature2m,
                HourlyVariable::Temperature120m,
            ])
            .daily(vec![DailyVariable::Sunrise, DailyVariable::Sunset])
            .current(vec![CurrentVariable::Rain])
            .build();
        let pairs = request.query_pairs();

        assert_eq!(
            pair(&pairs, "hourly"),
            Some("apparent_temperature,wind_speed_10m,temperature_2m,temperature_120m")
        );
        assert_eq!(pair(&pairs, "daily"), Some("sunrise,sunset"));
        assert_eq!(pair(&pairs, "current"), Some("rain"));
    }

    #[test]
    fn omits_unset_options_and_empty_groups() {
        let request = ForecastRequest::builder()
            .latitude(52.52)
            .longitude(13.405)
            .timezone("Europe/Berlin")
            .forecast_days(3)
            .build();
        let pairs = request.query_pairs();

        assert_eq!(pair(&pairs, "timezone"), Some("Europe/Berlin"));
        assert_eq!(pair(&pairs, "forecast_days"), Some("3"));
        for absent in [
            "elevation",
            "past_days",
            "start_date",
            "end_date",
            "cell_selection",
            "temperature_unit",
            "hourly",
            "daily",
            "current",
        ] {
            assert_eq!(pair(&pairs, absent), None, "{absent} should be omitted");
        }
    }

    #[test]
    fn encodes_dates_and_units() {
        let request = ForecastRequest::builder()
            .latitude(52.52)
            .longitude(13.405)
            .start_date(NaiveDate::from_ymd_opt(2024, 2, 8).unwrap())
            .end_date(NaiveDate::from_ymd_opt(2024, 2, 14).unwrap())
            .temperature_unit(TemperatureUnit::Fahrenheit)
            .wind_speed_unit(WindSpeedUnit::Ms)
            .precipitation_unit(PrecipitationUnit::Inch)
            .cell_selection(CellSelection::Sea)
            .build();
        let pairs = request.query_pairs();

        assert_eq!(pair(&pairs, "start_date"), Some("2024-02-08"));
        assert_eq!(pair(&pairs, "end_date"), Some("2024-02-14"));
        assert_eq!(pair(&pairs, "temperature_unit"), Some("fahrenheit"));
        assert_eq!(pair(&pairs, "wind_speed_unit"), Some("ms"));
        assert_eq!(pair(&pairs, "precipitation_unit"), Some("inch"));
        assert_eq!(pair(&pairs, "cell_selection"), Some("sea"));
    }
}
