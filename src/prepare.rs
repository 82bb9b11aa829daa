//! Validate a raw sounding record and promote it to a unit tagged sounding.

use crate::{
    error::{PrepareError, Result},
    sounding::{Sounding, StationInfo},
};
use chrono::NaiveDateTime;
use itertools::izip;
use metfor::{Celsius, HectoPascal, Knots, Meters, Mm, WindSpdDir};
use optional::{none, some, Optioned};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// A raw sounding record as decoded from an upper air archive.
///
/// All values are bare numbers in the archive's canonical units: pressure in hectopascals,
/// heights and elevation in meters, temperatures in Celsius, wind direction in degrees, wind
/// speed in knots, and precipitable water in millimeters. An individual missing reading is a
/// `none`. A profile variable the archive did not report at all is a vector with length 0.
///
/// Decoding the archive's wire format into this record is the data source's job, this crate picks
/// up from here.
#[derive(Clone, Debug, Default)]
pub struct RawSounding {
    /// Pressure profile (hPa).
    pub pressure: Vec<Optioned<f64>>,
    /// Geopotential height profile (m).
    pub height: Vec<Optioned<f64>>,
    /// Temperature profile (C).
    pub temperature: Vec<Optioned<f64>>,
    /// Dew point profile (C).
    pub dew_point: Vec<Optioned<f64>>,
    /// Wind direction profile (degrees clockwise from true north, blowing from).
    pub direction: Vec<Optioned<f64>>,
    /// Wind speed profile (knots).
    pub speed: Vec<Optioned<f64>>,

    /// Station identifier, eg "OUN".
    pub station_id: Option<String>,
    /// Station number, USAF number.
    pub station_num: Optioned<i32>,
    /// Latitude and longitude.
    pub location: Option<(f64, f64)>,
    /// Station elevation (m).
    pub elevation: Optioned<f64>,
    /// Precipitable water for the whole sounding (mm).
    pub precipitable_water: Optioned<f64>,
    /// Observation valid time.
    pub valid_time: Option<NaiveDateTime>,
}

impl RawSounding {
    /// Borrow the per-level array for a field.
    #[inline]
    pub fn profile(&self, field: Field) -> &[Optioned<f64>] {
        match field {
            Field::Pressure => &self.pressure,
            Field::Height => &self.height,
            Field::Temperature => &self.temperature,
            Field::DewPoint => &self.dew_point,
            Field::WindDirection => &self.direction,
            Field::WindSpeed => &self.speed,
        }
    }
}

/// The per-level variables of a raw sounding record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter)]
pub enum Field {
    /// Pressure (hPa)
    Pressure,
    /// Geopotential height (m)
    Height,
    /// Temperature (C)
    Temperature,
    /// Dew point (C)
    DewPoint,
    /// Wind direction (degrees)
    WindDirection,
    /// Wind speed (knots)
    WindSpeed,
}

impl Field {
    /// The name used for this field in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Field::Pressure => "pressure",
            Field::Height => "height",
            Field::Temperature => "temperature",
            Field::DewPoint => "dew point",
            Field::WindDirection => "wind direction",
            Field::WindSpeed => "wind speed",
        }
    }

    // Height is the only per-level variable the archive is allowed to omit.
    fn required(self) -> bool {
        match self {
            Field::Height => false,
            _ => true,
        }
    }
}

/// Promote a raw record to a fully unit tagged sounding.
///
/// Tagging never alters a magnitude, it only attaches the archive's canonical unit to it, so the
/// output profiles have the same lengths and index order as the input arrays. The eastward and
/// northward wind components are derived per level from the speed and direction pairs, a level
/// missing either one has a missing component pair.
///
/// # Errors
///
/// `MissingField` if a required per-level array (pressure, temperature, dew point, wind
/// direction, wind speed) is absent or empty. `MalformedRecord` if any non-empty per-level array
/// has a length different from the pressure array, a mismatched record fails fast rather than
/// being truncated to the shortest array.
///
/// # Examples
///
/// ```rust
/// use metfor::HectoPascal;
/// use sounding_prep::prepare;
/// # use sounding_prep::doctest::make_test_raw_sounding;
///
/// let raw = make_test_raw_sounding();
/// let snd = prepare(raw).unwrap();
///
/// assert_eq!(snd.pressure_profile()[0].unwrap(), HectoPascal(1000.0));
/// assert_eq!(snd.station_info().station_id().unwrap(), "OUN");
/// ```
pub fn prepare(raw: RawSounding) -> Result<Sounding> {
    validate(&raw)?;

    let RawSounding {
        pressure,
        height,
        temperature,
        dew_point,
        direction,
        speed,
        station_id,
        station_num,
        location,
        elevation,
        precipitable_water,
        valid_time,
    } = raw;

    let station = StationInfo::new()
        .with_station_id(station_id)
        .with_station(station_num)
        .with_lat_lon(location)
        .with_elevation(elevation.map_t(Meters));

    let wind: Vec<Optioned<WindSpdDir<Knots>>> = izip!(&speed, &direction)
        .map(|(spd, dir)| {
            if let (Some(speed), Some(direction)) = (spd.into_option(), dir.into_option()) {
                some(WindSpdDir {
                    speed: Knots(speed),
                    direction,
                })
            } else {
                none()
            }
        })
        .collect();

    Ok(Sounding::new()
        .with_station_info(station)
        .with_valid_time(valid_time)
        .with_pressure_profile(pressure.into_iter().map(|v| v.map_t(HectoPascal)).collect())
        .with_height_profile(height.into_iter().map(|v| v.map_t(Meters)).collect())
        .with_temperature_profile(temperature.into_iter().map(|v| v.map_t(Celsius)).collect())
        .with_dew_point_profile(dew_point.into_iter().map(|v| v.map_t(Celsius)).collect())
        .with_wind_profile(wind)
        .with_precipitable_water(precipitable_water.map_t(Mm)))
}

// Check that required fields are present and that all present fields are index aligned with the
// pressure array.
fn validate(raw: &RawSounding) -> Result<()> {
    let expected = raw.profile(Field::Pressure).len();

    for field in Field::iter() {
        let found = raw.profile(field).len();

        if found == 0 {
            if field.required() {
                return Err(PrepareError::MissingField(field));
            }
            continue;
        }

        if found != expected {
            return Err(PrepareError::MalformedRecord {
                field,
                expected,
                found,
            });
        }
    }

    Ok(())
}
