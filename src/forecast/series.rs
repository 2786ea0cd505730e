//! Time-series assembly: turns a decoded variable group into an axis plus one
//! aligned sample array per requested variable.
//!
//! Correspondence between requested variables and wire blocks is strictly
//! positional; the server guarantees response blocks in request order. The
//! assembler still checks the block count up front and fails fast instead of
//! silently misattributing values when the server sends fewer blocks.

use crate::forecast::error::DecodeError;
use crate::variables::{CurrentVariable, DailyVariable, HourlyVariable};
use crate::wire::{VariableWithValues, VariablesWithTime};
use flatbuffers::{ForwardsUOffset, Vector};
use std::collections::HashMap;
use std::hash::Hash;

/// A variable key that knows which of the two wire encodings its samples use.
pub(crate) trait SeriesVariable: Copy {
    /// Whether samples decode from the `values_int64` timestamp vector
    /// instead of the floating-point `values` vector.
    fn is_timestamp(self) -> bool {
        false
    }
}

impl SeriesVariable for HourlyVariable {}

impl SeriesVariable for DailyVariable {
    fn is_timestamp(self) -> bool {
        DailyVariable::is_timestamp(self)
    }
}

/// Generates the shared axis `time[i] = start + i * interval` for
/// `i in [0, (end - start) / interval)`. The span must be a non-negative
/// whole multiple of a positive interval.
pub(crate) fn expand_time_axis(
    start: i64,
    end: i64,
    interval: i32,
) -> Result<Vec<i64>, DecodeError> {
    let step = i64::from(interval);
    if step <= 0 || end < start || (end - start) % step != 0 {
        return Err(DecodeError::InvalidTimeAxis {
            start,
            end,
            interval,
        });
    }
    let length = (end - start) / step;
    Ok((0..length).map(|i| start + i * step).collect())
}

/// Assembles the hourly or daily record group for the requested variables.
pub(crate) fn assemble_series<V>(
    group: VariablesWithTime,
    requested: &[V],
) -> Result<(Vec<i64>, HashMap<V, Vec<Option<f64>>>), DecodeError>
where
    V: SeriesVariable + Eq + Hash,
{
    let time = expand_time_axis(group.time(), group.time_end(), group.interval())?;
    let blocks = variable_blocks(group, requested.len())?;

    let mut values = HashMap::with_capacity(requested.len());
    for (position, &variable) in requested.iter().enumerate() {
        let block = blocks.get(position);
        let samples = if variable.is_timestamp() {
            (0..time.len()).map(|j| timestamp_sample(block, j)).collect()
        } else {
            (0..time.len()).map(|j| float_sample(block, j)).collect()
        };
        values.insert(variable, samples);
    }
    Ok((time, values))
}

/// Assembles the current-conditions group: the shared snapshot timestamp and
/// one scalar per requested variable.
pub(crate) fn assemble_current(
    group: VariablesWithTime,
    requested: &[CurrentVariable],
) -> Result<(i64, HashMap<CurrentVariable, Option<f64>>), DecodeError> {
    let blocks = variable_blocks(group, requested.len())?;

    let mut values = HashMap::with_capacity(requested.len());
    for (position, &variable) in requested.iter().enumerate() {
        let value = blocks.get(position).value();
        values.insert(variable, (!value.is_nan()).then(|| f64::from(value)));
    }
    Ok((group.time(), values))
}

fn variable_blocks<'a>(
    group: VariablesWithTime<'a>,
    requested: usize,
) -> Result<Vector<'a, ForwardsUOffset<VariableWithValues<'a>>>, DecodeError> {
    match group.variables() {
        Some(blocks) if blocks.len() >= requested => Ok(blocks),
        other => Err(DecodeError::VariableCount {
            requested,
            available: other.map(|blocks| blocks.len()).unwrap_or(0),
        }),
    }
}

/// Floating-point sample at `index`. A missing vector, a short vector, or a
/// NaN payload all mean "unset" and never abort the series.
fn float_sample(block: VariableWithValues, index: usize) -> Option<f64> {
    let values = block.values()?;
    if index >= values.len() {
        return None;
    }
    let value = values.get(index);
    (!value.is_nan()).then(|| f64::from(value))
}

/// 64-bit epoch-timestamp sample at `index` (sunrise/sunset encoding).
fn timestamp_sample(block: VariableWithValues, index: usize) -> Option<f64> {
    let values = block.values_int64()?;
    if index >= values.len() {
        return None;
    }
    Some(values.get(index) as f64)
}
