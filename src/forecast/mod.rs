//! The decoding core: binary response interpretation and time-series
//! assembly.

pub(crate) mod decoder;
pub(crate) mod error;
pub(crate) mod response;
mod series;
