//! This module provides the main entry point for fetching weather forecasts
//! from the Open-Meteo API. One call performs the whole pipeline: encode the
//! request as query parameters, issue a single GET for the flatbuffers
//! payload, and decode it into aligned time series.

use crate::error::OpenMeteoError;
use crate::forecast::decoder::decode_forecast;
use crate::forecast::response::Forecast;
use crate::request::ForecastRequest;
use crate::transport::{fetch_payload, DEFAULT_BASE_URL};
use bon::bon;
use reqwest::Client;

/// Client for the Open-Meteo forecast API.
///
/// The client is stateless apart from its connection pool: every call to
/// [`OpenMeteo::forecast`] fetches and decodes its own buffer, so concurrent
/// calls on one client (or a cheap `Clone`) are independent and safe.
///
/// Create an instance with [`OpenMeteo::default()`], or use the builder to
/// point it at another deployment or supply a preconfigured
/// [`reqwest::Client`] (timeouts and proxies are a transport concern and
/// belong there).
///
/// # Examples
///
/// ```no_run
/// # use open_meteo_forecast::{ForecastRequest, HourlyVariable, OpenMeteo, OpenMeteoError};
/// # async fn run() -> Result<(), OpenMeteoError> {
/// let client = OpenMeteo::default();
/// let request = ForecastRequest::builder()
///     .latitude(49.867)
///     .longitude(11.234)
///     .timezone("Europe/Berlin")
///     .hourly(vec![HourlyVariable::Temperature2m])
///     .build();
///
/// let forecast = client.forecast(&request).await?;
/// let hourly = forecast.hourly.expect("hourly variables were requested");
/// println!("first hour: {:?}", hourly.get(HourlyVariable::Temperature2m));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct OpenMeteo {
    http: Client,
    base_url: String,
}

#[bon]
impl OpenMeteo {
    /// Creates a client via the builder.
    ///
    /// # Arguments
    ///
    /// * `.base_url(impl Into<String>)`: Optional. Endpoint to query.
    ///   Defaults to [`DEFAULT_BASE_URL`].
    /// * `.http(reqwest::Client)`: Optional. A preconfigured HTTP client,
    ///   e.g. with a request timeout. Defaults to `reqwest::Client::new()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use open_meteo_forecast::OpenMeteo;
    ///
    /// let client = OpenMeteo::builder()
    ///     .base_url("https://customer-api.open-meteo.com/v1/forecast")
    ///     .build();
    /// ```
    #[builder]
    pub fn new(#[builder(into)] base_url: Option<String>, http: Option<Client>) -> Self {
        Self {
            http: http.unwrap_or_default(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    /// Fetches and decodes one forecast.
    ///
    /// The returned [`Forecast`] carries a group exactly when `request` named
    /// at least one variable for it and the server returned data for it. The
    /// call either yields a fully populated result or exactly one
    /// [`OpenMeteoError`]; a partially decoded response is never returned.
    ///
    /// # Errors
    ///
    /// * [`OpenMeteoError::Transport`]: network failure, unexpected status
    ///   (both retryable), or a 4xx rejection with the server's reason.
    /// * [`OpenMeteoError::Decode`]: the payload does not match the expected
    ///   wire schema. Fatal; see [`OpenMeteoError::is_retryable`].
    pub async fn forecast(&self, request: &ForecastRequest) -> Result<Forecast, OpenMeteoError> {
        let payload = fetch_payload(&self.http, &self.base_url, &request.query_pairs()).await?;
        Ok(decode_forecast(&payload, request)?)
    }
}

impl Default for OpenMeteo {
    fn default() -> Self {
        Self::builder().build()
    }
}
