mod common;

use common::*;
use open_meteo_forecast::{
    CurrentVariable, DailyVariable, DecodeError, Forecast, ForecastRequest, HourlyVariable,
};

fn hourly_request() -> ForecastRequest {
    ForecastRequest::builder()
        .latitude(49.867)
        .longitude(11.234)
        .timezone("Europe/Berlin")
        .forecast_days(7)
        .hourly(vec![
            HourlyVariable::ApparentTemperature,
            HourlyVariable::WindSpeed10m,
            HourlyVariable::Temperature2m,
            HourlyVariable::Temperature120m,
        ])
        .build()
}

fn daily_request() -> ForecastRequest {
    ForecastRequest::builder()
        .latitude(49.867)
        .longitude(11.234)
        .timezone("Europe/Berlin")
        .forecast_days(7)
        .daily(vec![
            DailyVariable::Temperature2mMax,
            DailyVariable::SunshineDuration,
            DailyVariable::Sunrise,
            DailyVariable::Sunset,
        ])
        .build()
}

fn current_request() -> ForecastRequest {
    ForecastRequest::builder()
        .latitude(49.867)
        .longitude(11.234)
        .timezone("Europe/Berlin")
        .current(vec![
            CurrentVariable::Temperature2m,
            CurrentVariable::WeatherCode,
            CurrentVariable::Rain,
        ])
        .build()
}

#[test]
fn parses_common_metadata_for_every_scenario() {
    let scenarios = [
        (build_response(Some(hourly_group()), None, None), hourly_request()),
        (build_response(None, Some(daily_group()), None), daily_request()),
        (build_response(None, None, Some(current_group())), current_request()),
    ];
    for (buffer, request) in scenarios {
        let forecast = Forecast::decode(&buffer, &request).unwrap();
        assert_eq!(forecast.latitude, f64::from(LATITUDE));
        assert_eq!(forecast.longitude, f64::from(LONGITUDE));
        assert_eq!(forecast.elevation, 450.0);
        assert_eq!(forecast.utc_offset_seconds, 3_600);
        assert_eq!(forecast.timezone.as_deref(), Some("Europe/Berlin"));
        assert_eq!(forecast.timezone_abbreviation.as_deref(), Some("CET"));
    }
}

#[test]
fn parses_hourly_time_series() {
    let buffer = build_response(Some(hourly_group()), None, None);
    let forecast = Forecast::decode(&buffer, &hourly_request()).unwrap();

    assert!(forecast.daily.is_none());
    assert!(forecast.current.is_none());

    let hourly = forecast.hourly.expect("hourly series requested");
    assert_eq!(hourly.len(), 7 * 24);
    let offset = forecast.utc_offset_seconds;
    assert_eq!(local_time(offset, hourly.time[0]), "2024-02-08 00:00:00");
    assert_eq!(local_time(offset, hourly.time[1]), "2024-02-08 01:00:00");
    assert_eq!(
        local_time(offset, hourly.time[7 * 24 - 1]),
        "2024-02-14 23:00:00"
    );

    let temperature = hourly.get(HourlyVariable::Temperature2m).unwrap();
    assert_eq!(temperature.len(), 7 * 24);
    assert_eq!(
        take7_rounded(temperature),
        vec![2.3, 1.7, 3.7, 4.9, 4.3, 4.8, 5.0]
    );
    assert_eq!(
        take7_rounded(hourly.get(HourlyVariable::WindSpeed10m).unwrap()),
        vec![2.1, 0.5, 5.5, 9.7, 4.4, 8.6, 8.0]
    );
    assert_eq!(
        take7_rounded(hourly.get(HourlyVariable::ApparentTemperature).unwrap()),
        vec![0.2, -0.3, 1.3, 2.2, 2.3, 2.2, 2.6]
    );
}

#[test]
fn parses_daily_time_series() {
    let buffer = build_response(None, Some(daily_group()), None);
    let forecast = Forecast::decode(&buffer, &daily_request()).unwrap();

    assert!(forecast.hourly.is_none());
    assert!(forecast.current.is_none());

    let daily = forecast.daily.expect("daily series requested");
    assert_eq!(daily.len(), 7);
    let offset = forecast.utc_offset_seconds;
    assert_eq!(local_time(offset, daily.time[0]), "2024-02-08 00:00:00");
    assert_eq!(local_time(offset, daily.time[1]), "2024-02-09 00:00:00");
    assert_eq!(local_time(offset, daily.time[6]), "2024-02-14 00:00:00");

    assert_eq!(
        take7_rounded(daily.get(DailyVariable::Temperature2mMax).unwrap()),
        vec![9.1, 10.0, 12.3, 7.6, 7.6, 5.9, 5.6]
    );
    // sunshine duration arrives in seconds
    let sunshine: Vec<f64> = daily
        .get(DailyVariable::SunshineDuration)
        .unwrap()
        .iter()
        .map(|sample| round1(sample.unwrap() / 3_600.0))
        .collect();
    assert_eq!(sunshine, vec![0.0, 0.2, 5.9, 0.2, 8.1, 1.7, 8.4]);

    let sunrise = daily.get(DailyVariable::Sunrise).unwrap();
    let sunset = daily.get(DailyVariable::Sunset).unwrap();
    assert_eq!(local_time(offset, sunrise[0].unwrap() as i64), "2024-02-08 07:38:05");
    assert_eq!(local_time(offset, sunset[6].unwrap() as i64), "2024-02-14 17:30:35");
    for day in 0..7 {
        let rise = sunrise[day].expect("sunrise present");
        let set = sunset[day].expect("sunset present");
        // whole-second epoch timestamps, not floating-point measurements
        assert_eq!(rise.fract(), 0.0);
        assert_eq!(set.fract(), 0.0);
        assert!(rise < set, "day {day}: sunrise must precede sunset");
        let midnight = daily.time[day] as f64;
        assert!(rise > midnight && set < midnight + DAY as f64);
    }
}

#[test]
fn parses_current_conditions() {
    let buffer = build_response(None, None, Some(current_group()));
    let forecast = Forecast::decode(&buffer, &current_request()).unwrap();

    assert!(forecast.hourly.is_none());
    assert!(forecast.daily.is_none());

    let current = forecast.current.expect("current conditions requested");
    assert_eq!(
        local_time(forecast.utc_offset_seconds, current.time),
        "2024-02-08 21:45:00"
    );
    assert_eq!(
        current.get(CurrentVariable::Temperature2m).unwrap().map(round1),
        Some(8.5)
    );
    assert_eq!(
        current.get(CurrentVariable::WeatherCode).unwrap(),
        Some(61.0)
    );
    assert_eq!(
        current.get(CurrentVariable::Rain).unwrap().map(round1),
        Some(0.3)
    );
    // variables that were not requested are absent, not null
    assert_eq!(current.get(CurrentVariable::WindSpeed10m), None);
}

#[test]
fn assembles_one_aligned_array_per_requested_variable() {
    let buffer = build_response(Some(hourly_group()), Some(daily_group()), Some(current_group()));
    let request = ForecastRequest::builder()
        .latitude(49.867)
        .longitude(11.234)
        .hourly(hourly_request().hourly)
        .daily(daily_request().daily)
        .current(current_request().current)
        .build();

    let forecast = Forecast::decode(&buffer, &request).unwrap();
    let hourly = forecast.hourly.unwrap();
    assert_eq!(hourly.values.len(), request.hourly.len());
    for variable in &request.hourly {
        assert_eq!(hourly.get(*variable).unwrap().len(), hourly.time.len());
    }
    let daily = forecast.daily.unwrap();
    assert_eq!(daily.values.len(), request.daily.len());
    for variable in &request.daily {
        assert_eq!(daily.get(*variable).unwrap().len(), daily.time.len());
    }
    assert_eq!(forecast.current.unwrap().values.len(), request.current.len());
}

#[test]
fn groups_present_in_the_buffer_but_not_requested_are_absent() {
    let buffer = build_response(Some(hourly_group()), Some(daily_group()), Some(current_group()));

    let forecast = Forecast::decode(&buffer, &daily_request()).unwrap();
    assert!(forecast.hourly.is_none());
    assert!(forecast.daily.is_some());
    assert!(forecast.current.is_none());

    // zero requested variables behaves exactly like not requested
    let empty_request = ForecastRequest::builder()
        .latitude(49.867)
        .longitude(11.234)
        .hourly(vec![])
        .daily(vec![])
        .current(vec![])
        .build();
    let forecast = Forecast::decode(&buffer, &empty_request).unwrap();
    assert!(forecast.hourly.is_none());
    assert!(forecast.daily.is_none());
    assert!(forecast.current.is_none());
}

#[test]
fn requested_group_missing_from_the_buffer_is_absent_not_an_error() {
    let buffer = build_response(Some(hourly_group()), None, None);
    let forecast = Forecast::decode(&buffer, &daily_request()).unwrap();
    assert!(forecast.daily.is_none());
    assert!(forecast.hourly.is_none());
}

#[test]
fn truncated_or_empty_buffers_are_malformed() {
    let request = hourly_request();

    for buffer in [Vec::new(), vec![0u8; 3], vec![0xFF; 64]] {
        let result = Forecast::decode(&buffer, &request);
        assert!(matches!(result, Err(DecodeError::MalformedBuffer(_))));
    }

    let mut truncated = build_response(Some(hourly_group()), None, None);
    truncated.truncate(truncated.len() / 2);
    assert!(matches!(
        Forecast::decode(&truncated, &request),
        Err(DecodeError::MalformedBuffer(_))
    ));
}

#[test]
fn fewer_variable_blocks_than_requested_is_malformed() {
    let mut group = hourly_group();
    group.blocks.truncate(2);
    let buffer = build_response(Some(group), None, None);

    let result = Forecast::decode(&buffer, &hourly_request());
    assert!(matches!(
        result,
        Err(DecodeError::VariableCount {
            requested: 4,
            available: 2
        })
    ));
}

#[test]
fn serializes_with_query_parameter_spellings() {
    let buffer = build_response(None, None, Some(current_group()));
    let forecast = Forecast::decode(&buffer, &current_request()).unwrap();

    let json = serde_json::to_value(&forecast).unwrap();
    assert_eq!(json["timezone"], "Europe/Berlin");
    assert!(json.get("hourly").is_none());
    assert_eq!(json["current"]["values"]["weather_code"], 61.0);
    assert_eq!(json["current"]["time"], CURRENT_TIME);
}
