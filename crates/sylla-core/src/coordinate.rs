//! Coordinate value types
//!
//! A [`Coordinate`] is an unsigned degree magnitude paired with a hemisphere
//! letter. Signed values only appear at the map boundary ([`MapCoordinates`]).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{CodecError, Result};

/// The two coordinate axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// North/south axis, magnitude 0..=90
    Latitude,
    /// East/west axis, magnitude 0..=180
    Longitude,
}

impl Axis {
    /// Largest legal degree magnitude
    pub fn max_degrees(self) -> u16 {
        match self {
            Axis::Latitude => 90,
            Axis::Longitude => 180,
        }
    }

    /// Hemisphere letters legal on this axis, for messages
    pub fn hemisphere_letters(self) -> &'static str {
        match self {
            Axis::Latitude => "N or S",
            Axis::Longitude => "E or W",
        }
    }

    /// Width of the unified unsigned range (180 or 360)
    pub fn unified_range(self) -> f64 {
        f64::from(self.max_degrees()) * 2.0
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => write!(f, "Latitude"),
            Axis::Longitude => write!(f, "Longitude"),
        }
    }
}

/// Hemisphere letter attached to a degree magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hemisphere {
    /// North
    N,
    /// South
    S,
    /// East
    E,
    /// West
    W,
}

impl Hemisphere {
    /// Axis this hemisphere belongs to
    pub fn axis(self) -> Axis {
        match self {
            Hemisphere::N | Hemisphere::S => Axis::Latitude,
            Hemisphere::E | Hemisphere::W => Axis::Longitude,
        }
    }

    /// Whether magnitudes in this hemisphere are negative on a map
    pub fn is_negative(self) -> bool {
        matches!(self, Hemisphere::S | Hemisphere::W)
    }

    /// Single-letter form
    pub fn as_char(self) -> char {
        match self {
            Hemisphere::N => 'N',
            Hemisphere::S => 'S',
            Hemisphere::E => 'E',
            Hemisphere::W => 'W',
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Hemisphere {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "N" => Ok(Hemisphere::N),
            "S" => Ok(Hemisphere::S),
            "E" => Ok(Hemisphere::E),
            "W" => Ok(Hemisphere::W),
            _ => Err(CodecError::invalid_format(s)),
        }
    }
}

/// Unsigned degree magnitude with its hemisphere
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Magnitude in decimal degrees
    pub degrees: f64,
    /// Hemisphere letter
    pub hemisphere: Hemisphere,
}

impl Coordinate {
    /// Create a coordinate without validation
    pub fn new(degrees: f64, hemisphere: Hemisphere) -> Self {
        Self {
            degrees,
            hemisphere,
        }
    }

    /// Axis of this coordinate
    pub fn axis(&self) -> Axis {
        self.hemisphere.axis()
    }

    /// Check the magnitude against the legal range of the axis
    pub fn validate(&self) -> Result<()> {
        let axis = self.axis();
        let max = f64::from(axis.max_degrees());
        if !self.degrees.is_finite() || self.degrees < 0.0 || self.degrees > max {
            return Err(CodecError::out_of_range(axis, self.degrees));
        }
        Ok(())
    }

    /// Signed value, south and west negative; zero is always `+0.0`
    pub fn signed(&self) -> f64 {
        if self.degrees == 0.0 {
            0.0
        } else if self.hemisphere.is_negative() {
            -self.degrees
        } else {
            self.degrees
        }
    }
}

/// A latitude and a longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinatePair {
    /// North/south component
    pub latitude: Coordinate,
    /// East/west component
    pub longitude: Coordinate,
}

impl CoordinatePair {
    /// Build a pair, checking that each hemisphere sits on the right axis.
    ///
    /// Magnitudes are not range-checked here; that happens during
    /// normalization so the error names the offending value.
    pub fn new(latitude: Coordinate, longitude: Coordinate) -> Result<Self> {
        if latitude.axis() != Axis::Latitude {
            return Err(CodecError::wrong_hemisphere(Axis::Latitude, latitude.hemisphere));
        }
        if longitude.axis() != Axis::Longitude {
            return Err(CodecError::wrong_hemisphere(
                Axis::Longitude,
                longitude.hemisphere,
            ));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Convenience constructor from raw parts
    pub fn from_parts(
        lat: f64,
        lat_hemisphere: Hemisphere,
        lng: f64,
        lng_hemisphere: Hemisphere,
    ) -> Result<Self> {
        Self::new(
            Coordinate::new(lat, lat_hemisphere),
            Coordinate::new(lng, lng_hemisphere),
        )
    }

    /// Signed map representation
    pub fn to_map(&self) -> MapCoordinates {
        MapCoordinates {
            lat: self.latitude.signed(),
            lng: self.longitude.signed(),
        }
    }

    /// Decimal-degree string, `"{lat:.7}° {H} {lng:.7}° {H}"`
    pub fn to_dd_string(&self) -> String {
        format!(
            "{:.7}° {} {:.7}° {}",
            self.latitude.degrees,
            self.latitude.hemisphere,
            self.longitude.degrees,
            self.longitude.hemisphere
        )
    }
}

/// Signed coordinates for map-display collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapCoordinates {
    /// Latitude, south negative
    pub lat: f64,
    /// Longitude, west negative
    pub lng: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hemisphere_parse_case_insensitive() {
        assert_eq!("n".parse::<Hemisphere>().unwrap(), Hemisphere::N);
        assert_eq!(" W ".parse::<Hemisphere>().unwrap(), Hemisphere::W);
        assert!("X".parse::<Hemisphere>().is_err());
    }

    #[test]
    fn test_validate_ranges() {
        assert!(Coordinate::new(90.0, Hemisphere::N).validate().is_ok());
        assert!(Coordinate::new(180.0, Hemisphere::W).validate().is_ok());
        assert!(Coordinate::new(90.5, Hemisphere::S).validate().is_err());
        assert!(Coordinate::new(-1.0, Hemisphere::E).validate().is_err());
        assert!(Coordinate::new(f64::NAN, Hemisphere::E).validate().is_err());
    }

    #[test]
    fn test_pair_rejects_swapped_axes() {
        let result = CoordinatePair::from_parts(10.0, Hemisphere::E, 10.0, Hemisphere::N);
        let err = result.unwrap_err();
        assert_eq!(err, CodecError::wrong_hemisphere(Axis::Latitude, Hemisphere::E));
        assert_eq!(err.to_string(), "Latitude hemisphere must be N or S (got E)");
    }

    #[test]
    fn test_zero_magnitude_is_never_negative() {
        let pair = CoordinatePair::from_parts(0.0, Hemisphere::S, 0.0, Hemisphere::W).unwrap();
        let map = pair.to_map();
        assert!(map.lat.is_sign_positive());
        assert!(map.lng.is_sign_positive());
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"lat":0.0,"lng":0.0}"#);
    }

    #[test]
    fn test_signed_map_coordinates() {
        let pair = CoordinatePair::from_parts(12.5, Hemisphere::S, 45.25, Hemisphere::W).unwrap();
        let map = pair.to_map();
        assert_eq!(map.lat, -12.5);
        assert_eq!(map.lng, -45.25);
    }

    #[test]
    fn test_dd_string_format() {
        let pair = CoordinatePair::from_parts(1.5, Hemisphere::N, 2.25, Hemisphere::E).unwrap();
        assert_eq!(pair.to_dd_string(), "1.5000000° N 2.2500000° E");
    }
}
