//! Parcel selection and lifted parcel calculations for plotting.
//!
//! The thermodynamic formulas all live in the metfor crate, this module only picks the parcel
//! and orchestrates the calls level by level.

use crate::{
    error::{PrepareError, Result},
    sounding::Sounding,
};
use metfor::{self, Celsius, HectoPascal, Kelvin};
use optional::Optioned;

/// Variables defining a parcel as used in parcel analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parcel {
    /// Temperature in C
    pub temperature: Celsius,
    /// Pressure in hPa
    pub pressure: HectoPascal,
    /// Dew point in C
    pub dew_point: Celsius,
}

impl Parcel {
    /// Get the potential temperature of the parcel
    #[inline]
    pub fn theta(&self) -> Kelvin {
        metfor::potential_temperature(self.pressure, self.temperature)
    }

    /// Get the equivalent potential temperature of the parcel
    #[inline]
    pub fn theta_e(&self) -> Result<Kelvin> {
        metfor::equiv_pot_temperature(self.temperature, self.dew_point, self.pressure)
            .ok_or(PrepareError::MetForError)
    }
}

/// Get a surface parcel.
///
/// This is the lowest level of the sounding with pressure, temperature, and dew point all
/// present.
pub fn surface_parcel(snd: &Sounding) -> Result<Parcel> {
    snd.bottom_up()
        .find(|row| row.pressure.is_some() && row.temperature.is_some() && row.dew_point.is_some())
        .map(|row| Parcel {
            temperature: row.temperature.unpack(),
            pressure: row.pressure.unpack(),
            dew_point: row.dew_point.unpack(),
        })
        .ok_or(PrepareError::MissingValue)
}

/// Find the lifting condensation level of a parcel.
///
/// Returns the pressure and temperature at the LCL.
pub fn lcl(parcel: &Parcel) -> Result<(HectoPascal, Celsius)> {
    metfor::pressure_and_temperature_at_lcl(parcel.temperature, parcel.dew_point, parcel.pressure)
        .map(|(p, t)| (p, Celsius::from(t)))
        .ok_or(PrepareError::MetForError)
}

/// Calculate the temperature profile of a lifted parcel.
///
/// The parcel is lifted dry adiabatically up to its lifting condensation level and then moist
/// adiabatically, at constant equivalent potential temperature, above it. The result has one
/// entry per level of the pressure profile and is index aligned with it. Levels with a missing
/// pressure stay missing.
pub fn parcel_profile(parcel: &Parcel, snd: &Sounding) -> Result<Vec<Optioned<Celsius>>> {
    let (lcl_pressure, _lcl_temperature) = lcl(parcel)?;

    let theta = parcel.theta();
    let theta_e = parcel.theta_e()?;

    let profile = snd
        .pressure_profile()
        .iter()
        .map(|p_opt| {
            p_opt
                .into_option()
                .and_then(|tgt_pres| {
                    if tgt_pres > lcl_pressure {
                        // Dry adiabatic lifting
                        Some(Celsius::from(metfor::temperature_from_pot_temp(
                            theta, tgt_pres,
                        )))
                    } else {
                        // Moist adiabatic lifting
                        metfor::temperature_from_equiv_pot_temp_saturated_and_pressure(
                            tgt_pres, theta_e,
                        )
                    }
                })
                .into()
        })
        .collect();

    Ok(profile)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::sounding::doctest::make_test_sounding;
    use metfor::Quantity;

    #[test]
    fn surface_parcel_is_the_lowest_level() {
        let snd = make_test_sounding();
        let parcel = surface_parcel(&snd).unwrap();

        assert_eq!(parcel.pressure, HectoPascal(1000.0));
        assert_eq!(parcel.temperature, Celsius(20.0));
        assert_eq!(parcel.dew_point, Celsius(15.0));
    }

    #[test]
    fn no_usable_level_is_an_error() {
        let snd = Sounding::new();
        assert_eq!(surface_parcel(&snd).unwrap_err(), PrepareError::MissingValue);
    }

    #[test]
    fn lcl_is_above_the_parcel() {
        let snd = make_test_sounding();
        let parcel = surface_parcel(&snd).unwrap();

        let (lcl_pressure, lcl_temperature) = lcl(&parcel).unwrap();

        // Above means lower pressure, and lifting cools the parcel.
        assert!(lcl_pressure < parcel.pressure);
        assert!(lcl_temperature < parcel.temperature);
    }

    #[test]
    fn saturated_parcel_condenses_where_it_starts() {
        let parcel = Parcel {
            temperature: Celsius(10.0),
            pressure: HectoPascal(900.0),
            dew_point: Celsius(10.0),
        };

        let (lcl_pressure, _) = lcl(&parcel).unwrap();
        assert!((lcl_pressure - parcel.pressure).unpack().abs() < 5.0);
    }

    #[test]
    fn profile_is_aligned_and_starts_at_the_parcel_temperature() {
        let snd = make_test_sounding();
        let parcel = surface_parcel(&snd).unwrap();

        let profile = parcel_profile(&parcel, &snd).unwrap();

        assert_eq!(profile.len(), snd.pressure_profile().len());
        assert!(profile.iter().all(|t| t.is_some()));

        let sfc_t = profile[0].unwrap();
        assert!((sfc_t - parcel.temperature).unpack().abs() < 0.01);
    }

    #[test]
    fn lifted_parcel_cools_monotonically() {
        let snd = make_test_sounding();
        let parcel = surface_parcel(&snd).unwrap();

        let profile = parcel_profile(&parcel, &snd).unwrap();

        for pair in profile.windows(2) {
            assert!(pair[1].unwrap() < pair[0].unwrap());
        }
    }
}
