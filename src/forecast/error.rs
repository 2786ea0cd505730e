use thiserror::Error;

/// Errors raised while decoding a response buffer.
///
/// Every variant is fatal: the buffer disagrees with the schema contract the
/// client was built against, so reissuing the request cannot help and no
/// partial result is returned.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The buffer is not a validly framed, size-prefixed `WeatherApiResponse`.
    #[error("Malformed response buffer: {0}")]
    MalformedBuffer(#[from] flatbuffers::InvalidFlatbuffer),

    /// The group's time span is not a whole number of interval steps.
    #[error("Invalid time axis: start {start}, end {end}, interval {interval}")]
    InvalidTimeAxis { start: i64, end: i64, interval: i32 },

    /// The group carries fewer variable blocks than the request named, so
    /// positional correspondence would silently misattribute values.
    #[error("Response carries {available} variable blocks, {requested} were requested")]
    VariableCount { requested: usize, available: usize },
}
