//! Derived wind quantities.
use metfor::{Knots, WindSpdDir, WindUV};
use optional::Optioned;

/// Decompose winds given as speed and direction pairs into their eastward and northward
/// components.
///
/// Directions follow the standard meteorological convention, degrees clockwise from true north
/// naming where the wind blows from. The trigonometry itself is delegated to the conversions in
/// the metfor crate. The result is index aligned with the input, and a level with a missing wind
/// stays missing.
///
/// # Examples
///
/// ```rust
/// use metfor::{Knots, Quantity, WindSpdDir, WindUV};
/// use optional::{none, some};
/// use sounding_prep::uv_components;
///
/// let wind = vec![
///     some(WindSpdDir {
///         speed: Knots(10.0),
///         direction: 180.0,
///     }),
///     none(),
/// ];
///
/// let components = uv_components(&wind);
///
/// // Wind from due south blows toward the north.
/// let WindUV { u, v } = components[0].unwrap();
/// assert!(u.unpack().abs() < 1.0e-9);
/// assert!((v - Knots(10.0)).unpack().abs() < 1.0e-9);
///
/// assert!(components[1].is_none());
/// ```
#[inline]
pub fn uv_components(wind: &[Optioned<WindSpdDir<Knots>>]) -> Vec<Optioned<WindUV<Knots>>> {
    wind.iter().map(|wnd| wnd.map_t(WindUV::from)).collect()
}
