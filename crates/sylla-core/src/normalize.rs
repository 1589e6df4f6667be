//! Coordinate normalization
//!
//! Latitude is unified onto `[0, 180]` (0 = 90°S, 90 = equator, 180 = 90°N)
//! and longitude onto `[0, 360]` (east as-is, west mapped to `360 - degrees`).
//! Dividing by the range yields a fraction in `[0, 1]`.

use serde::{Deserialize, Serialize};

use crate::coordinate::{Axis, Coordinate, Hemisphere};
use crate::errors::Result;

/// Default tolerance for snapping a decoded fraction to 1.0
pub const SNAP_EPSILON: f64 = 1e-9;

/// A coordinate projected onto its unified range and onto `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Normalized {
    /// Value on the unified range of the axis
    pub unified: f64,
    /// `unified / range`
    pub fraction: f64,
}

/// Project a validated coordinate onto its unified range
pub fn unify(coordinate: &Coordinate) -> Result<f64> {
    coordinate.validate()?;
    let degrees = coordinate.degrees;
    let unified = match coordinate.hemisphere {
        Hemisphere::S => 90.0 - degrees,
        Hemisphere::N => degrees + 90.0,
        Hemisphere::W => 360.0 - degrees,
        Hemisphere::E => degrees,
    };
    Ok(unified)
}

/// Project a coordinate onto `[0, 1]`
pub fn normalize(coordinate: &Coordinate) -> Result<Normalized> {
    let unified = unify(coordinate)?;
    Ok(Normalized {
        unified,
        fraction: unified / coordinate.axis().unified_range(),
    })
}

/// Scale a decoded fraction back onto the unified range.
///
/// Fractions within `epsilon` of 1.0 snap to the range maximum so that
/// truncation just below the pole or antimeridian cannot flip hemispheres.
pub fn unified_from_fraction(axis: Axis, fraction: f64, epsilon: f64) -> f64 {
    let range = axis.unified_range();
    if (1.0 - fraction).abs() < epsilon {
        range
    } else {
        fraction * range
    }
}

/// Map a unified value back to degrees and hemisphere
pub fn coordinate_from_unified(axis: Axis, unified: f64) -> Coordinate {
    let (degrees, hemisphere) = match axis {
        Axis::Latitude if unified < 90.0 => (90.0 - unified, Hemisphere::S),
        Axis::Latitude => (unified - 90.0, Hemisphere::N),
        Axis::Longitude if unified > 180.0 && unified < 360.0 => (360.0 - unified, Hemisphere::W),
        // 360 is the same meridian as 0
        Axis::Longitude if unified >= 360.0 => (0.0, Hemisphere::E),
        Axis::Longitude => (unified, Hemisphere::E),
    };
    Coordinate::new(degrees.abs(), hemisphere)
}

/// Inverse of [`normalize`] for a decoded fraction
pub fn denormalize(axis: Axis, fraction: f64, epsilon: f64) -> (f64, Coordinate) {
    let unified = unified_from_fraction(axis, fraction, epsilon);
    (unified, coordinate_from_unified(axis, unified))
}
