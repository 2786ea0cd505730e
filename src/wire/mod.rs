//! Zero-copy flatbuffers accessors for the Open-Meteo wire format.
//!
//! `weather_api_generated.rs` is produced by `flatc --rust` from
//! `schema/weather_api.fbs` and committed, so builds do not need the
//! flatbuffers compiler. The builder half is exercised by the tests and
//! benches to synthesize response buffers.

#[allow(unused_imports, dead_code, clippy::all)]
#[rustfmt::skip]
mod weather_api_generated;

pub use weather_api_generated::openmeteo::*;
