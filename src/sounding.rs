//! Data type and methods to store a prepared atmospheric sounding.

use crate::wind::uv_components;
use chrono::NaiveDateTime;
use metfor::{Celsius, HectoPascal, Knots, Meters, Mm, WindSpdDir, WindUV};
use optional::Optioned;

pub use self::{data_row::DataRow, station_info::StationInfo};

/// A sounding with all variables promoted to unit tagged values.
///
/// The upper air profile variables are stored in parallel vectors with the lowest level first. If
/// a profile lacks a certain variable, e.g. height, that whole vector has length 0 instead of
/// being full of missing values. All non-empty profile vectors have the same length, and index i
/// refers to the same atmospheric level in each of them.
///
/// Values are never modified after construction, the builder methods all consume and return the
/// sounding by value.
#[derive(Clone, Debug, Default)]
pub struct Sounding {
    // Description of the source of the sounding.
    source: Option<String>,

    // Station info
    station: StationInfo,

    // Valid time of sounding
    valid_time: Option<NaiveDateTime>,

    // Profiles
    pressure: Vec<Optioned<HectoPascal>>,
    height: Vec<Optioned<Meters>>,
    temperature: Vec<Optioned<Celsius>>,
    dew_point: Vec<Optioned<Celsius>>,
    wind: Vec<Optioned<WindSpdDir<Knots>>>,
    wind_uv: Vec<Optioned<WindUV<Knots>>>,

    // Scalar variables
    precipitable_water: Optioned<Mm>,
}

impl Sounding {
    /// Create a new sounding with default values. This is a proxy for default with a clearer name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sounding_prep::Sounding;
    ///
    /// let snd = Sounding::new();
    /// println!("{:?}", snd);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Sounding::default()
    }

    /// Add a source description to this sounding.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sounding_prep::Sounding;
    ///
    /// let snd = Sounding::new().with_source_description("University of Wyoming archive".to_owned());
    /// let _snd = snd.with_source_description(None);
    /// ```
    #[inline]
    pub fn with_source_description<S>(mut self, desc: S) -> Self
    where
        Option<String>: From<S>,
    {
        self.source = Option::from(desc);
        self
    }

    /// Retrieve the source description for this sounding.
    #[inline]
    pub fn source_description(&self) -> Option<&str> {
        self.source.as_ref().map(|s| s.as_ref())
    }

    /// Builder function for setting the station info.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sounding_prep::{Sounding, StationInfo};
    ///
    /// let stn = StationInfo::new();
    /// let _snd = Sounding::new().with_station_info(stn);
    /// ```
    #[inline]
    pub fn with_station_info(mut self, new_value: StationInfo) -> Self {
        self.station = new_value;
        self
    }

    /// Get the station info.
    #[inline]
    pub fn station_info(&self) -> &StationInfo {
        &self.station
    }

    /// Builder method to set the valid time of the sounding.
    ///
    /// # Examples
    /// ```rust
    /// use chrono::NaiveDate;
    /// use sounding_prep::Sounding;
    ///
    /// let vtime = NaiveDate::from_ymd(2017, 5, 18).and_hms(12, 0, 0);
    /// let _snd = Sounding::new().with_valid_time(vtime);
    /// let _snd = Sounding::new().with_valid_time(Some(vtime));
    /// ```
    #[inline]
    pub fn with_valid_time<T>(mut self, valid_time: T) -> Self
    where
        Option<NaiveDateTime>: From<T>,
    {
        self.valid_time = Option::from(valid_time);
        self
    }

    /// Valid time of the sounding.
    #[inline]
    pub fn valid_time(&self) -> Option<NaiveDateTime> {
        self.valid_time
    }

    /// Builder method for the pressure profile.
    ///
    /// # Examples
    /// ```rust
    /// use metfor::HectoPascal;
    /// use optional::{some, Optioned};
    /// use sounding_prep::Sounding;
    ///
    /// let data = vec![1000.0, 925.0, 850.0, 700.0, 500.0, 300.0, 250.0, 200.0, 150.0, 100.0];
    /// let pressure_data: Vec<Optioned<HectoPascal>> = data.into_iter()
    ///     .map(HectoPascal)
    ///     .map(some)
    ///     .collect();
    ///
    /// let _snd = Sounding::new()
    ///     .with_pressure_profile(pressure_data);
    /// ```
    #[inline]
    pub fn with_pressure_profile(self, profile: Vec<Optioned<HectoPascal>>) -> Self {
        Self {
            pressure: profile,
            ..self
        }
    }

    /// Get the pressure profile.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sounding_prep::Sounding;
    /// # use sounding_prep::doctest::make_test_sounding;
    ///
    /// let snd = make_test_sounding();
    /// for p in snd.pressure_profile() {
    ///     if let Some(p) = p.into_option() {
    ///         println!("{:?}", p);
    ///     } else {
    ///         println!("missing value!");
    ///     }
    /// }
    ///
    /// // Uninitialized profiles just return an empty vector.
    /// let snd = Sounding::new();
    /// assert!(snd.pressure_profile().is_empty());
    /// ```
    #[inline]
    pub fn pressure_profile(&self) -> &[Optioned<HectoPascal>] {
        &self.pressure
    }

    /// Builder method for the geopotential height profile.
    ///
    /// See `with_pressure_profile` for an example of usage, keeping in mind the units type may
    /// be different.
    #[inline]
    pub fn with_height_profile(self, profile: Vec<Optioned<Meters>>) -> Self {
        Self {
            height: profile,
            ..self
        }
    }

    /// Get the geopotential height profile.
    ///
    /// See `pressure_profile` for an example of using getters, keeping in mind the units type may
    /// be different.
    #[inline]
    pub fn height_profile(&self) -> &[Optioned<Meters>] {
        &self.height
    }

    /// Builder method for the temperature profile.
    ///
    /// See `with_pressure_profile` for an example of usage, keeping in mind the units type may
    /// be different.
    #[inline]
    pub fn with_temperature_profile(self, profile: Vec<Optioned<Celsius>>) -> Self {
        Self {
            temperature: profile,
            ..self
        }
    }

    /// Get the temperature profile.
    ///
    /// See `pressure_profile` for an example of using getters, keeping in mind the units type may
    /// be different.
    #[inline]
    pub fn temperature_profile(&self) -> &[Optioned<Celsius>] {
        &self.temperature
    }

    /// Builder method for the dew point profile.
    ///
    /// See `with_pressure_profile` for an example of usage, keeping in mind the units type may
    /// be different.
    #[inline]
    pub fn with_dew_point_profile(self, profile: Vec<Optioned<Celsius>>) -> Self {
        Self {
            dew_point: profile,
            ..self
        }
    }

    /// Get the dew point profile.
    ///
    /// See `pressure_profile` for an example of using getters, keeping in mind the units type may
    /// be different.
    #[inline]
    pub fn dew_point_profile(&self) -> &[Optioned<Celsius>] {
        &self.dew_point
    }

    /// Builder method for the wind profile.
    ///
    /// The eastward and northward component profile is derived here as well, so the two stay
    /// index aligned.
    ///
    /// # Examples
    /// ```rust
    /// use metfor::{Knots, WindSpdDir};
    /// use optional::{none, some};
    /// use sounding_prep::Sounding;
    ///
    /// let wind = vec![
    ///     some(WindSpdDir {
    ///         speed: Knots(10.0),
    ///         direction: 180.0,
    ///     }),
    ///     none(),
    /// ];
    ///
    /// let snd = Sounding::new().with_wind_profile(wind);
    /// assert_eq!(snd.wind_uv_profile().len(), 2);
    /// assert!(snd.wind_uv_profile()[1].is_none());
    /// ```
    #[inline]
    pub fn with_wind_profile(self, profile: Vec<Optioned<WindSpdDir<Knots>>>) -> Self {
        let wind_uv = uv_components(&profile);
        Self {
            wind: profile,
            wind_uv,
            ..self
        }
    }

    /// Get the wind profile.
    ///
    /// See `pressure_profile` for an example of using getters, keeping in mind the units type may
    /// be different.
    #[inline]
    pub fn wind_profile(&self) -> &[Optioned<WindSpdDir<Knots>>] {
        &self.wind
    }

    /// Get the derived eastward and northward wind component profile.
    #[inline]
    pub fn wind_uv_profile(&self) -> &[Optioned<WindUV<Knots>>] {
        &self.wind_uv
    }

    /// Builder method for the precipitable water.
    ///
    /// # Examples
    ///```rust
    /// use metfor::Mm;
    /// use optional::{none, some};
    /// use sounding_prep::Sounding;
    ///
    /// let _snd = Sounding::new().with_precipitable_water(Mm(32.5));
    /// let _snd = Sounding::new().with_precipitable_water(some(Mm(32.5)));
    /// let _snd = Sounding::new().with_precipitable_water(none::<Mm>());
    ///```
    #[inline]
    pub fn with_precipitable_water<T, U>(self, value: T) -> Self
    where
        Optioned<U>: From<T>,
        U: optional::Noned + metfor::Length,
        Mm: From<U>,
    {
        let pw: Optioned<U> = Optioned::from(value);
        let precipitable_water: Optioned<Mm> = pw.map_t(Mm::from);

        Self {
            precipitable_water,
            ..self
        }
    }

    /// Get the precipitable water.
    #[inline]
    pub fn precipitable_water(&self) -> Optioned<Mm> {
        self.precipitable_water
    }

    /// Get a bottom up iterator over the data rows. The first value returned is the lowest level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use metfor::HectoPascal;
    /// # use sounding_prep::doctest::make_test_sounding;
    ///
    /// let snd = make_test_sounding();
    /// let mut iter = snd.bottom_up();
    ///
    /// let row = iter.next().unwrap();
    /// assert_eq!(row.pressure.unwrap(), HectoPascal(1000.0));
    /// ```
    #[inline]
    pub fn bottom_up<'a>(&'a self) -> impl Iterator<Item = DataRow> + 'a {
        ProfileIterator {
            next_idx: 0,
            direction: 1,
            src: self,
        }
    }

    /// Get a top down iterator over the data rows. The last value returned is the lowest level.
    #[inline]
    pub fn top_down<'a>(&'a self) -> impl Iterator<Item = DataRow> + 'a {
        ProfileIterator {
            next_idx: self.pressure.len() as isize - 1,
            direction: -1,
            src: self,
        }
    }

    /// Get a row of data values from this sounding.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use metfor::{Celsius, HectoPascal};
    /// # use sounding_prep::doctest::make_test_sounding;
    ///
    /// let snd = make_test_sounding();
    ///
    /// let row = snd.data_row(1).unwrap();
    /// assert_eq!(row.pressure.unwrap(), HectoPascal(925.0));
    /// assert_eq!(row.temperature.unwrap(), Celsius(16.0));
    ///
    /// assert!(snd.data_row(1000).is_none()); // There aren't that many rows!
    /// ```
    #[inline]
    pub fn data_row(&self, idx: usize) -> Option<DataRow> {
        macro_rules! copy_to_result {
            ($result:ident, $profile:ident, $idx:ident) => {
                match self.$profile.get($idx) {
                    None => {}
                    Some(opt_val) => $result.$profile = *opt_val,
                }
            };
        }

        if idx >= self.pressure.len() {
            return None;
        }

        let mut result = DataRow::default();

        copy_to_result!(result, pressure, idx);
        copy_to_result!(result, height, idx);
        copy_to_result!(result, temperature, idx);
        copy_to_result!(result, dew_point, idx);
        copy_to_result!(result, wind, idx);
        copy_to_result!(result, wind_uv, idx);

        Some(result)
    }
}

/// Iterator over the data rows of a sounding. This may be a top down or bottom up iterator.
struct ProfileIterator<'a> {
    next_idx: isize,
    direction: isize, // +1 for bottom up, -1 for top down
    src: &'a Sounding,
}

impl<'a> Iterator for ProfileIterator<'a> {
    type Item = DataRow;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next_idx < 0 {
            return None;
        }

        let result = self.src.data_row(self.next_idx as usize);
        self.next_idx += self.direction;
        result
    }
}

// FIXME: only configure for test and doc tests, not possible as of 1.41
#[doc(hidden)]
pub mod doctest {
    use super::*;
    use crate::prepare::{prepare, RawSounding};
    use optional::some;

    pub fn make_test_raw_sounding() -> RawSounding {
        let to_profile = |vals: &[f64]| vals.iter().copied().map(some).collect();

        RawSounding {
            pressure: to_profile(&[1000.0, 925.0, 850.0, 700.0, 500.0, 300.0]),
            height: to_profile(&[110.0, 780.0, 1500.0, 3100.0, 5800.0, 9600.0]),
            temperature: to_profile(&[20.0, 16.0, 10.0, 2.0, -12.0, -40.0]),
            dew_point: to_profile(&[15.0, 12.0, 8.0, -4.0, -20.0, -55.0]),
            direction: to_profile(&[180.0, 190.0, 210.0, 230.0, 250.0, 260.0]),
            speed: to_profile(&[10.0, 15.0, 22.0, 30.0, 45.0, 60.0]),
            station_id: Some("OUN".to_owned()),
            station_num: some(72357),
            location: Some((35.18, -97.44)),
            elevation: some(345.0),
            precipitable_water: some(32.5),
            valid_time: chrono::NaiveDate::from_ymd_opt(2017, 5, 18)
                .and_then(|d| d.and_hms_opt(12, 0, 0)),
        }
    }

    pub fn make_test_sounding() -> Sounding {
        prepare(make_test_raw_sounding()).expect("error preparing test sounding")
    }
}


mod data_row;
mod station_info;
