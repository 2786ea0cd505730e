//! Typed weather variables for the three forecast record groups.
//!
//! Each enum is the closed set of variable names the Open-Meteo DWD forecast
//! endpoint accepts for its group, spelled exactly as the query parameter
//! expects. Keeping them as enums (rather than free strings) makes an invalid
//! request unrepresentable and gives the decoder a typed key for its output
//! maps.

use serde::{Serialize, Serializer};
use std::fmt;

/// A variable that can be requested in the `hourly` group.
///
/// See the [Open-Meteo DWD documentation](https://open-meteo.com/en/docs/dwd-api)
/// for the meaning and unit of each variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HourlyVariable {
    ApparentTemperature,
    Cape,
    CloudCover,
    CloudCoverHigh,
    CloudCoverLow,
    CloudCoverMid,
    DewPoint2m,
    DiffuseRadiation,
    DiffuseRadiationInstant,
    DirectNormalIrradiance,
    DirectNormalIrradianceInstant,
    DirectRadiation,
    DirectRadiationInstant,
    Et0FaoEvapotranspiration,
    Evapotranspiration,
    FreezingLevelHeight,
    GlobalTiltedIrradiance,
    GlobalTiltedIrradianceInstant,
    IsDay,
    LightningPotential,
    Precipitation,
    PressureMsl,
    Rain,
    RelativeHumidity2m,
    ShortwaveRadiation,
    ShortwaveRadiationInstant,
    Showers,
    SnowDepth,
    Snowfall,
    SnowfallHeight,
    SoilMoisture0To1cm,
    SoilMoisture1To3cm,
    SoilMoisture27To81cm,
    SoilMoisture3To9cm,
    SoilMoisture9To27cm,
    SoilTemperature0cm,
    SoilTemperature18cm,
    SoilTemperature54cm,
    SoilTemperature6cm,
    SunshineDuration,
    SurfacePressure,
    Temperature120m,
    Temperature180m,
    Temperature2m,
    Temperature80m,
    TerrestrialRadiation,
    TerrestrialRadiationInstant,
    Updraft,
    VapourPressureDeficit,
    WeatherCode,
    WindDirection10m,
    WindDirection120m,
    WindDirection180m,
    WindDirection80m,
    WindGusts10m,
    WindSpeed10m,
    WindSpeed120m,
    WindSpeed180m,
    WindSpeed80m,
}

impl HourlyVariable {
    /// The query-parameter spelling of this variable.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ApparentTemperature => "apparent_temperature",
            Self::Cape => "cape",
            Self::CloudCover => "cloud_cover",
            Self::CloudCoverHigh => "cloud_cover_high",
            Self::CloudCoverLow => "cloud_cover_low",
            Self::CloudCoverMid => "cloud_cover_mid",
            Self::DewPoint2m => "dew_point_2m",
            Self::DiffuseRadiation => "diffuse_radiation",
            Self::DiffuseRadiationInstant => "diffuse_radiation_instant",
            Self::DirectNormalIrradiance => "direct_normal_irradiance",
            Self::DirectNormalIrradianceInstant => "direct_normal_irradiance_instant",
            Self::DirectRadiation => "direct_radiation",
            Self::DirectRadiationInstant => "direct_radiation_instant",
            Self::Et0FaoEvapotranspiration => "et0_fao_evapotranspiration",
            Self::Evapotranspiration => "evapotranspiration",
            Self::FreezingLevelHeight => "freezing_level_height",
            Self::GlobalTiltedIrradiance => "global_tilted_irradiance",
            Self::GlobalTiltedIrradianceInstant => "global_tilted_irradiance_instant",
            Self::IsDay => "is_day",
            Self::LightningPotential => "lightning_potential",
            Self::Precipitation => "precipitation",
            Self::PressureMsl => "pressure_msl",
            Self::Rain => "rain",
            Self::RelativeHumidity2m => "relative_humidity_2m",
            Self::ShortwaveRadiation => "shortwave_radiation",
            Self::ShortwaveRadiationInstant => "shortwave_radiation_instant",
            Self::Showers => "showers",
            Self::SnowDepth => "snow_depth",
            Self::Snowfall => "snowfall",
            Self::SnowfallHeight => "snowfall_height",
            Self::SoilMoisture0To1cm => "soil_moisture_0_to_1cm",
            Self::SoilMoisture1To3cm => "soil_moisture_1_to_3cm",
            Self::SoilMoisture27To81cm => "soil_moisture_27_to_81cm",
            Self::SoilMoisture3To9cm => "soil_moisture_3_to_9cm",
            Self::SoilMoisture9To27cm => "soil_moisture_9_to_27cm",
            Self::SoilTemperature0cm => "soil_temperature_0cm",
            Self::SoilTemperature18cm => "soil_temperature_18cm",
            Self::SoilTemperature54cm => "soil_temperature_54cm",
            Self::SoilTemperature6cm => "soil_temperature_6cm",
            Self::SunshineDuration => "sunshine_duration",
            Self::SurfacePressure => "surface_pressure",
            Self::Temperature120m => "temperature_120m",
            Self::Temperature180m => "temperature_180m",
            Self::Temperature2m => "temperature_2m",
            Self::Temperature80m => "temperature_80m",
            Self::TerrestrialRadiation => "terrestrial_radiation",
            Self::TerrestrialRadiationInstant => "terrestrial_radiation_instant",
            Self::Updraft => "updraft",
            Self::VapourPressureDeficit => "vapour_pressure_deficit",
            Self::WeatherCode => "weather_code",
            Self::WindDirection10m => "wind_direction_10m",
            Self::WindDirection120m => "wind_direction_120m",
            Self::WindDirection180m => "wind_direction_180m",
            Self::WindDirection80m => "wind_direction_80m",
            Self::WindGusts10m => "wind_gusts_10m",
            Self::WindSpeed10m => "wind_speed_10m",
            Self::WindSpeed120m => "wind_speed_120m",
            Self::WindSpeed180m => "wind_speed_180m",
            Self::WindSpeed80m => "wind_speed_80m",
        }
    }
}

impl fmt::Display for HourlyVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Serialized as the query-parameter spelling, so maps keyed by the enum come
// out as plain JSON objects.
impl Serialize for HourlyVariable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A variable that can be requested in the `daily` group.
///
/// [`DailyVariable::Sunrise`] and [`DailyVariable::Sunset`] are encoded on the
/// wire as 64-bit epoch timestamps instead of floating-point measurements; the
/// decoder selects the sample encoding with [`DailyVariable::is_timestamp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DailyVariable {
    ApparentTemperatureMax,
    ApparentTemperatureMin,
    DaylightDuration,
    Et0FaoEvapotranspiration,
    PrecipitationHours,
    PrecipitationProbabilityMax,
    PrecipitationSum,
    RainSum,
    ShortwaveRadiationSum,
    ShowersSum,
    SnowfallSum,
    Sunrise,
    Sunset,
    SunshineDuration,
    Temperature2mMax,
    Temperature2mMin,
    WeatherCode,
    WindDirection10mDominant,
    WindGusts10mMax,
    WindSpeed10mMax,
}

impl DailyVariable {
    /// The query-parameter spelling of this variable.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ApparentTemperatureMax => "apparent_temperature_max",
            Self::ApparentTemperatureMin => "apparent_temperature_min",
            Self::DaylightDuration => "daylight_duration",
            Self::Et0FaoEvapotranspiration => "et0_fao_evapotranspiration",
            Self::PrecipitationHours => "precipitation_hours",
            Self::PrecipitationProbabilityMax => "precipitation_probability_max",
            Self::PrecipitationSum => "precipitation_sum",
            Self::RainSum => "rain_sum",
            Self::ShortwaveRadiationSum => "shortwave_radiation_sum",
            Self::ShowersSum => "showers_sum",
            Self::SnowfallSum => "snowfall_sum",
            Self::Sunrise => "sunrise",
            Self::Sunset => "sunset",
            Self::SunshineDuration => "sunshine_duration",
            Self::Temperature2mMax => "temperature_2m_max",
            Self::Temperature2mMin => "temperature_2m_min",
            Self::WeatherCode => "weather_code",
            Self::WindDirection10mDominant => "wind_direction_10m_dominant",
            Self::WindGusts10mMax => "wind_gusts_10m_max",
            Self::WindSpeed10mMax => "wind_speed_10m_max",
        }
    }

    /// Whether samples of this variable are 64-bit epoch timestamps on the
    /// wire (`values_int64`) rather than floating-point measurements.
    pub fn is_timestamp(self) -> bool {
        matches!(self, Self::Sunrise | Self::Sunset)
    }
}

impl fmt::Display for DailyVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Serialized as the query-parameter spelling, so maps keyed by the enum come
// out as plain JSON objects.
impl Serialize for DailyVariable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A variable that can be requested in the `current` group.
///
/// Current-conditions variables carry a single sample instead of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurrentVariable {
    ApparentTemperature,
    CloudCover,
    IsDay,
    Precipitation,
    PressureMsl,
    Rain,
    RelativeHumidity2m,
    Showers,
    Snowfall,
    SurfacePressure,
    Temperature2m,
    WeatherCode,
    WindDirection10m,
    WindGusts10m,
    WindSpeed10m,
}

impl CurrentVariable {
    /// The query-parameter spelling of this variable.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ApparentTemperature => "apparent_temperature",
            Self::CloudCover => "cloud_cover",
            Self::IsDay => "is_day",
            Self::Precipitation => "precipitation",
            Self::PressureMsl => "pressure_msl",
            Self::Rain => "rain",
            Self::RelativeHumidity2m => "relative_humidity_2m",
            Self::Showers => "showers",
            Self::Snowfall => "snowfall",
            Self::SurfacePressure => "surface_pressure",
            Self::Temperature2m => "temperature_2m",
            Self::WeatherCode => "weather_code",
            Self::WindDirection10m => "wind_direction_10m",
            Self::WindGusts10m => "wind_gusts_10m",
            Self::WindSpeed10m => "wind_speed_10m",
        }
    }
}

impl fmt::Display for CurrentVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Serialized as the query-parameter spelling, so maps keyed by the enum come
// out as plain JSON objects.
impl Serialize for CurrentVariable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
