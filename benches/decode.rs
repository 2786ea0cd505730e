use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flatbuffers::FlatBufferBuilder;
use open_meteo_forecast::wire::{
    finish_size_prefixed_weather_api_response_buffer, VariableWithValues,
    VariableWithValuesArgs, VariablesWithTime, VariablesWithTimeArgs, WeatherApiResponse,
    WeatherApiResponseArgs,
};
use open_meteo_forecast::{Forecast, ForecastRequest, HourlyVariable};

const START: i64 = 1_707_346_800;
const HOURS: usize = 7 * 24;

fn seven_day_hourly_payload(variables: usize) -> Vec<u8> {
    let mut fbb = FlatBufferBuilder::new();
    let blocks: Vec<_> = (0..variables)
        .map(|v| {
            let samples: Vec<f32> = (0..HOURS).map(|i| (v * HOURS + i) as f32 * 0.1).collect();
            let values = fbb.create_vector(&samples);
            VariableWithValues::create(
                &mut fbb,
                &VariableWithValuesArgs {
                    values: Some(values),
                    ..Default::default()
                },
            )
        })
        .collect();
    let blocks = fbb.create_vector(&blocks);
    let hourly = VariablesWithTime::create(
        &mut fbb,
        &VariablesWithTimeArgs {
            time: START,
            time_end: START + (HOURS as i64) * 3_600,
            interval: 3_600,
            variables: Some(blocks),
        },
    );
    let timezone = fbb.create_string("Europe/Berlin");
    let root = WeatherApiResponse::create(
        &mut fbb,
        &WeatherApiResponseArgs {
            latitude: 49.86,
            longitude: 11.24,
            elevation: 450.0,
            utc_offset_seconds: 3_600,
            timezone: Some(timezone),
            hourly: Some(hourly),
            ..Default::default()
        },
    );
    finish_size_prefixed_weather_api_response_buffer(&mut fbb, root);
    fbb.finished_data().to_vec()
}

fn bench_decode(c: &mut Criterion) {
    let payload = seven_day_hourly_payload(4);
    let request = ForecastRequest::builder()
        .latitude(49.867)
        .longitude(11.234)
        .hourly(vec![
            HourlyVariable::ApparentTemperature,
            HourlyVariable::WindSpeed10m,
            HourlyVariable::Temperature2m,
            HourlyVariable::Temperature120m,
        ])
        .build();

    c.bench_function("decode_seven_day_hourly", |b| {
        b.iter(|| Forecast::decode(black_box(&payload), black_box(&request)))
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
