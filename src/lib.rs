#![warn(missing_docs)]
//! Types and functions for preparing upper air soundings for skew-T log-P analysis and plotting.
//!
//! An upper air archive hands back a [`RawSounding`]: parallel arrays of bare numbers plus some
//! station metadata. [`prepare`] validates the record, attaches the canonical physical unit to
//! every value, and derives the eastward and northward wind components per level. [`analyze`]
//! then lifts the surface parcel to get the lifting condensation level and a parcel temperature
//! profile. The resulting [`Analysis`] is everything a skew-T plotting library needs to draw
//! temperature and dew point traces, wind barbs, the LCL marker, and the parcel curve.
//!
//! Fetching records from a remote archive and rendering the diagram itself both belong to the
//! callers on either side of this crate. All thermodynamic and unit conversion formulas are
//! delegated to the [metfor](https://crates.io/crates/metfor) crate.
//!
//! # Examples
//!
//! ```rust
//! use sounding_prep::{analyze, prepare};
//! # use sounding_prep::doctest::make_test_raw_sounding;
//!
//! // A data source decoded this record from the archive.
//! let raw = make_test_raw_sounding();
//!
//! let snd = prepare(raw)?;
//! let anal = analyze(snd)?;
//!
//! // Hand anal to the plotting side.
//! println!(
//!     "{} LCL at {:?}",
//!     anal.sounding().station_info().station_id().unwrap_or("????"),
//!     anal.lcl_pressure(),
//! );
//! # Ok::<(), sounding_prep::PrepareError>(())
//! ```

//
// API
//
pub use crate::{
    analysis::{analyze, Analysis},
    error::{PrepareError, Result},
    parcel::{lcl, parcel_profile, surface_parcel, Parcel},
    prepare::{prepare, Field, RawSounding},
    sounding::{DataRow, Sounding, StationInfo},
    wind::uv_components,
};

#[doc(hidden)]
pub use crate::sounding::doctest;

//
// Internal use only
//

// Modules
mod analysis;
mod error;
mod parcel;
mod prepare;
mod sounding;
mod wind;
