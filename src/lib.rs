mod client;
mod error;
mod forecast;
mod request;
mod transport;
mod variables;
pub mod wire;

pub use client::OpenMeteo;
pub use error::OpenMeteoError;

pub use request::{
    CellSelection, ForecastRequest, PrecipitationUnit, TemperatureUnit, WindSpeedUnit,
};
pub use variables::{CurrentVariable, DailyVariable, HourlyVariable};

pub use forecast::error::DecodeError;
pub use forecast::response::{CurrentConditions, DailySeries, Forecast, HourlySeries};

pub use transport::{TransportError, DEFAULT_BASE_URL};
