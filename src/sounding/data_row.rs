use metfor::{Celsius, HectoPascal, Knots, Meters, WindSpdDir, WindUV};
use optional::Optioned;

/// A copy of a row of the sounding data.
#[derive(Clone, Default, Copy, Debug, PartialEq)]
pub struct DataRow {
    /// Pressure in hPa
    pub pressure: Optioned<HectoPascal>,
    /// Geopotential Height in meters
    pub height: Optioned<Meters>,
    /// Temperature in C
    pub temperature: Optioned<Celsius>,
    /// Dew point in C
    pub dew_point: Optioned<Celsius>,
    /// Wind as speed and direction
    pub wind: Optioned<WindSpdDir<Knots>>,
    /// Wind as eastward and northward components in knots
    pub wind_uv: Optioned<WindUV<Knots>>,
}
