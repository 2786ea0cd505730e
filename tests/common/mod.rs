//! Synthesizes wire payloads matching real captures of the forecast API for
//! Bamberg (49.867, 11.234) with `timezone=Europe/Berlin&forecast_days=7`,
//! taken on 2024-02-08. The first seven samples of every series reproduce the
//! recorded readings; later positions are filled deterministically.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use flatbuffers::FlatBufferBuilder;
use open_meteo_forecast::wire::{
    finish_size_prefixed_weather_api_response_buffer, VariableWithValues,
    VariableWithValuesArgs, VariablesWithTime, VariablesWithTimeArgs, WeatherApiResponse,
    WeatherApiResponseArgs,
};

pub const LATITUDE: f32 = 49.86;
pub const LONGITUDE: f32 = 11.24;
pub const ELEVATION: f32 = 450.0;
pub const UTC_OFFSET_SECONDS: i32 = 3_600;

/// Epoch of 2024-02-08 00:00 Europe/Berlin (2024-02-07T23:00Z).
pub const CAPTURE_MIDNIGHT: i64 = 1_707_346_800;

pub const HOUR: i64 = 3_600;
pub const DAY: i64 = 86_400;

// Recorded first-seven readings of the hourly capture.
pub const APPARENT_TEMPERATURE: [f32; 7] = [0.2, -0.3, 1.3, 2.2, 2.3, 2.2, 2.6];
pub const WIND_SPEED_10M: [f32; 7] = [2.1, 0.5, 5.5, 9.7, 4.4, 8.6, 8.0];
pub const TEMPERATURE_2M: [f32; 7] = [2.3, 1.7, 3.7, 4.9, 4.3, 4.8, 5.0];
pub const TEMPERATURE_120M: [f32; 7] = [3.4, 3.2, 4.9, 5.6, 5.3, 5.8, 6.1];

// Recorded daily capture: max temperature, sunshine seconds, and local
// second-of-day of sunrise/sunset for each of the seven days.
pub const TEMPERATURE_2M_MAX: [f32; 7] = [9.1, 10.0, 12.3, 7.6, 7.6, 5.9, 5.6];
pub const SUNSHINE_DURATION: [f32; 7] =
    [0.0, 720.0, 21_240.0, 720.0, 29_160.0, 6_120.0, 30_240.0];
pub const SUNRISE_SECOND_OF_DAY: [i64; 7] =
    [27_485, 27_385, 27_284, 27_181, 27_076, 26_970, 26_863];
pub const SUNSET_SECOND_OF_DAY: [i64; 7] =
    [62_411, 62_515, 62_619, 62_723, 62_827, 62_931, 63_035];

// Recorded current-conditions capture at 2024-02-08 21:45 local time.
pub const CURRENT_TIME: i64 = CAPTURE_MIDNIGHT + 21 * HOUR + 45 * 60;
pub const CURRENT_TEMPERATURE_2M: f32 = 8.5;
pub const CURRENT_WEATHER_CODE: f32 = 61.0;
pub const CURRENT_RAIN: f32 = 0.3;

/// Sample payload of one variable block.
pub enum Block {
    Floats(Vec<f32>),
    Timestamps(Vec<i64>),
    Scalar(f32),
}

pub struct Group {
    pub time: i64,
    pub time_end: i64,
    pub interval: i32,
    pub blocks: Vec<Block>,
}

/// Builds a size-prefixed response buffer with the capture's metadata and the
/// given groups.
pub fn build_response(
    hourly: Option<Group>,
    daily: Option<Group>,
    current: Option<Group>,
) -> Vec<u8> {
    let mut fbb = FlatBufferBuilder::new();

    let hourly = hourly.map(|group| build_group(&mut fbb, &group));
    let daily = daily.map(|group| build_group(&mut fbb, &group));
    let current = current.map(|group| build_group(&mut fbb, &group));
    let timezone = fbb.create_string("Europe/Berlin");
    let timezone_abbreviation = fbb.create_string("CET");

    let root = WeatherApiResponse::create(
        &mut fbb,
        &WeatherApiResponseArgs {
            latitude: LATITUDE,
            longitude: LONGITUDE,
            elevation: ELEVATION,
            utc_offset_seconds: UTC_OFFSET_SECONDS,
            timezone: Some(timezone),
            timezone_abbreviation: Some(timezone_abbreviation),
            hourly,
            daily,
            current,
            ..Default::default()
        },
    );
    finish_size_prefixed_weather_api_response_buffer(&mut fbb, root);
    fbb.finished_data().to_vec()
}

fn build_group<'a>(
    fbb: &mut FlatBufferBuilder<'a>,
    group: &Group,
) -> flatbuffers::WIPOffset<VariablesWithTime<'a>> {
    let blocks: Vec<_> = group
        .blocks
        .iter()
        .map(|block| {
            let mut args = VariableWithValuesArgs::default();
            match block {
                Block::Floats(values) => args.values = Some(fbb.create_vector(values)),
                Block::Timestamps(values) => {
                    args.values_int64 = Some(fbb.create_vector(values))
                }
                Block::Scalar(value) => args.value = *value,
            }
            VariableWithValues::create(fbb, &args)
        })
        .collect();
    let variables = fbb.create_vector(&blocks);
    VariablesWithTime::create(
        fbb,
        &VariablesWithTimeArgs {
            time: group.time,
            time_end: group.time_end,
            interval: group.interval,
            variables: Some(variables),
        },
    )
}

/// Extends the recorded first week of readings to a full 7x24 hourly series.
fn hourly_series(first_seven: [f32; 7]) -> Vec<f32> {
    (0..7 * 24)
        .map(|i| {
            first_seven
                .get(i)
                .copied()
                .unwrap_or(((i % 24) as f32) * 0.3 - 1.5)
        })
        .collect()
}

/// Hourly scenario: `[apparent_temperature, wind_speed_10m, temperature_2m,
/// temperature_120m]` over seven days.
pub fn hourly_group() -> Group {
    Group {
        time: CAPTURE_MIDNIGHT,
        time_end: CAPTURE_MIDNIGHT + 7 * DAY,
        interval: HOUR as i32,
        blocks: vec![
            Block::Floats(hourly_series(APPARENT_TEMPERATURE)),
            Block::Floats(hourly_series(WIND_SPEED_10M)),
            Block::Floats(hourly_series(TEMPERATURE_2M)),
            Block::Floats(hourly_series(TEMPERATURE_120M)),
        ],
    }
}

/// Daily scenario: `[temperature_2m_max, sunshine_duration, sunrise, sunset]`
/// over seven days.
pub fn daily_group() -> Group {
    let sunrise = SUNRISE_SECOND_OF_DAY
        .iter()
        .enumerate()
        .map(|(i, s)| CAPTURE_MIDNIGHT + i as i64 * DAY + s)
        .collect();
    let sunset = SUNSET_SECOND_OF_DAY
        .iter()
        .enumerate()
        .map(|(i, s)| CAPTURE_MIDNIGHT + i as i64 * DAY + s)
        .collect();
    Group {
        time: CAPTURE_MIDNIGHT,
        time_end: CAPTURE_MIDNIGHT + 7 * DAY,
        interval: DAY as i32,
        blocks: vec![
            Block::Floats(TEMPERATURE_2M_MAX.to_vec()),
            Block::Floats(SUNSHINE_DURATION.to_vec()),
            Block::Timestamps(sunrise),
            Block::Timestamps(sunset),
        ],
    }
}

/// Current scenario: `[temperature_2m, weather_code, rain]`.
pub fn current_group() -> Group {
    Group {
        time: CURRENT_TIME,
        time_end: CURRENT_TIME,
        interval: 900,
        blocks: vec![
            Block::Scalar(CURRENT_TEMPERATURE_2M),
            Block::Scalar(CURRENT_WEATHER_CODE),
            Block::Scalar(CURRENT_RAIN),
        ],
    }
}

/// Formats an epoch as local wall-clock time, the way the captures were
/// recorded (offset applied, then rendered as UTC).
pub fn local_time(utc_offset_seconds: i32, epoch: i64) -> String {
    let shifted = DateTime::<Utc>::from_timestamp(epoch + i64::from(utc_offset_seconds), 0)
        .expect("epoch in range");
    shifted.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Rounds to one decimal, matching the recorded readings' precision.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// First seven samples of a series, rounded to one decimal.
pub fn take7_rounded(samples: &[Option<f64>]) -> Vec<f64> {
    samples
        .iter()
        .take(7)
        .map(|sample| round1(sample.expect("recorded sample present")))
        .collect()
}
