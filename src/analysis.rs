//! Data type and methods for packaging a sounding with its derived quantities.

use crate::{
    error::Result,
    parcel::{self, Parcel},
    sounding::Sounding,
};
use metfor::{Celsius, HectoPascal};
use optional::Optioned;

/// Convenient package of a prepared sounding and the quantities derived from it.
///
/// This is the complete input set for drawing a skew-T log-P diagram: the unit tagged profiles,
/// the lifting condensation level of the surface parcel, and the lifted parcel temperature
/// profile. Immutable once created, the plotting side only reads from it.
#[derive(Debug, Clone)]
pub struct Analysis {
    // Sounding used to make the analysis
    sounding: Sounding,

    // The parcel that was lifted
    parcel: Parcel,

    // Derived values
    lcl_pressure: HectoPascal,
    lcl_temperature: Celsius,
    parcel_profile: Vec<Optioned<Celsius>>,
}

impl Analysis {
    /// Borrow the sounding used to make the analysis.
    #[inline]
    pub fn sounding(&self) -> &Sounding {
        &self.sounding
    }

    /// The parcel that was lifted.
    #[inline]
    pub fn parcel(&self) -> Parcel {
        self.parcel
    }

    /// Pressure at the lifting condensation level.
    #[inline]
    pub fn lcl_pressure(&self) -> HectoPascal {
        self.lcl_pressure
    }

    /// Temperature at the lifting condensation level.
    #[inline]
    pub fn lcl_temperature(&self) -> Celsius {
        self.lcl_temperature
    }

    /// The lifted parcel temperature profile, index aligned with the pressure profile.
    #[inline]
    pub fn parcel_profile(&self) -> &[Optioned<Celsius>] {
        &self.parcel_profile
    }
}

/// Derive the plotting quantities from a prepared sounding.
///
/// Lifts the surface parcel: the lifting condensation level and the parcel temperature profile
/// both come from the thermodynamic routines in the metfor crate. Any failure aborts the whole
/// analysis, there are no partial results.
///
/// # Examples
///
/// ```rust
/// use sounding_prep::analyze;
/// # use sounding_prep::doctest::make_test_sounding;
///
/// let snd = make_test_sounding();
/// let anal = analyze(snd).unwrap();
///
/// assert!(anal.lcl_pressure() < anal.parcel().pressure);
/// assert_eq!(
///     anal.parcel_profile().len(),
///     anal.sounding().pressure_profile().len()
/// );
/// ```
pub fn analyze(snd: Sounding) -> Result<Analysis> {
    let parcel = parcel::surface_parcel(&snd)?;
    let (lcl_pressure, lcl_temperature) = parcel::lcl(&parcel)?;
    let parcel_profile = parcel::parcel_profile(&parcel, &snd)?;

    Ok(Analysis {
        sounding: snd,
        parcel,
        lcl_pressure,
        lcl_temperature,
        parcel_profile,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{error::PrepareError, sounding::doctest::make_test_sounding};

    #[test]
    fn analysis_packages_everything_for_plotting() {
        let snd = make_test_sounding();
        let anal = analyze(snd).unwrap();

        assert_eq!(
            anal.parcel_profile().len(),
            anal.sounding().pressure_profile().len()
        );
        assert!(anal.lcl_pressure() < anal.parcel().pressure);
        assert!(anal.lcl_temperature() < anal.parcel().temperature);
        assert!(anal.sounding().precipitable_water().is_some());
    }

    #[test]
    fn empty_sounding_cannot_be_analyzed() {
        assert_eq!(
            analyze(Sounding::new()).unwrap_err(),
            PrepareError::MissingValue
        );
    }
}
