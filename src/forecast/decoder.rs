//! Decodes a complete response buffer into an owned [`Forecast`].
//!
//! Decoding is synchronous, read-only work over the fully received buffer;
//! the flatbuffers verifier runs once when the root is located, so a
//! truncated or misframed buffer fails before any field is touched.

use crate::forecast::error::DecodeError;
use crate::forecast::response::{CurrentConditions, DailySeries, Forecast, HourlySeries};
use crate::forecast::series::{assemble_current, assemble_series};
use crate::request::ForecastRequest;
use crate::wire::size_prefixed_root_as_weather_api_response;
use log::debug;

/// Decodes the payload against the variables the request asked for.
///
/// A group is decoded only when the request named at least one variable for
/// it and the buffer actually carries it; a requested group the server
/// omitted stays `None`. Either the whole buffer decodes or a fatal
/// [`DecodeError`] is returned, never a partial result.
pub(crate) fn decode_forecast(
    buffer: &[u8],
    request: &ForecastRequest,
) -> Result<Forecast, DecodeError> {
    let root = size_prefixed_root_as_weather_api_response(buffer)?;
    debug!(
        "Decoding response for ({}, {}), utc offset {}s",
        root.latitude(),
        root.longitude(),
        root.utc_offset_seconds()
    );

    let mut forecast = Forecast {
        latitude: f64::from(root.latitude()),
        longitude: f64::from(root.longitude()),
        elevation: f64::from(root.elevation()),
        utc_offset_seconds: root.utc_offset_seconds(),
        timezone: root.timezone().map(str::to_owned),
        timezone_abbreviation: root.timezone_abbreviation().map(str::to_owned),
        hourly: None,
        daily: None,
        current: None,
    };

    if !request.hourly.is_empty() {
        if let Some(group) = root.hourly() {
            let (time, values) = assemble_series(group, &request.hourly)?;
            forecast.hourly = Some(HourlySeries { time, values });
        }
    }
    if !request.daily.is_empty() {
        if let Some(group) = root.daily() {
            let (time, values) = assemble_series(group, &request.daily)?;
            forecast.daily = Some(DailySeries { time, values });
        }
    }
    if !request.current.is_empty() {
        if let Some(group) = root.current() {
            let (time, values) = assemble_current(group, &request.current)?;
            forecast.current = Some(CurrentConditions { time, values });
        }
    }
    Ok(forecast)
}
