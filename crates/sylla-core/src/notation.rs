//! Coordinate notation parser
//!
//! Recognises three textual notations, tried in priority order:
//!
//! 1. DMS: `49° 47' 51.92" N 18° 15' 24.30" E` (seconds marker `"` or `''`)
//! 2. DM:  `49° 47.865258' N 18° 15.405042' E` (minutes must carry a fraction)
//! 3. DD:  `49.7977543° N 18.2567507° E`
//!
//! The first axis carries N/S and the second E/W; the two are separated by a
//! comma or whitespace. Hemisphere letters are case-insensitive.
//!
//! Minutes without a fraction are neither DMS nor DM, so `49°30' N ...` falls
//! through to DD and is rejected there.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::coordinate::{CoordinatePair, Hemisphere};
use crate::errors::{CodecError, Result};

const LATITUDE_LETTERS: &str = "[NnSs]";
const LONGITUDE_LETTERS: &str = "[EeWw]";
const AXIS_SEPARATOR: &str = r"(?:\s*,\s*|\s+)";

fn dms_axis(letters: &str) -> String {
    format!(r#"([0-9]{{1,3}})\s*°\s*([0-9]{{1,2}})\s*'\s*([0-9]{{1,2}}(?:\.[0-9]*)?)\s*(?:"|'')\s*({letters})"#)
}

fn dm_axis(letters: &str) -> String {
    format!(r"([0-9]{{1,3}})\s*°\s*([0-9]{{1,2}}\.[0-9]+)\s*'\s*({letters})")
}

fn dd_axis(letters: &str) -> String {
    format!(r"([0-9]+(?:\.[0-9]*)?)\s*°\s*({letters})")
}

#[allow(clippy::expect_used)]
fn compile(axis: fn(&str) -> String) -> Regex {
    let pattern = format!(
        r"^\s*{}{AXIS_SEPARATOR}{}\s*$",
        axis(LATITUDE_LETTERS),
        axis(LONGITUDE_LETTERS)
    );
    Regex::new(&pattern).expect("notation pattern is a valid regex")
}

static DMS_PATTERN: Lazy<Regex> = Lazy::new(|| compile(dms_axis));
static DM_PATTERN: Lazy<Regex> = Lazy::new(|| compile(dm_axis));
static DD_PATTERN: Lazy<Regex> = Lazy::new(|| compile(dd_axis));

/// Notation an input was recognised as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoordinateFormat {
    /// Degrees, minutes, seconds
    Dms,
    /// Degrees, decimal minutes
    Dm,
    /// Decimal degrees
    Dd,
    /// Numeric degree/hemisphere pairs supplied by a program
    Numeric,
}

impl fmt::Display for CoordinateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateFormat::Dms => write!(f, "DMS"),
            CoordinateFormat::Dm => write!(f, "DM"),
            CoordinateFormat::Dd => write!(f, "DD"),
            CoordinateFormat::Numeric => write!(f, "numeric"),
        }
    }
}

/// Fields extracted for one axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParsedAxis {
    /// Degree field as written (whole degrees for DM/DMS)
    pub degrees: f64,
    /// Minutes field, DM and DMS only
    pub minutes: Option<f64>,
    /// Seconds field, DMS only
    pub seconds: Option<f64>,
    /// Hemisphere letter
    pub hemisphere: Hemisphere,
}

impl ParsedAxis {
    /// Combined decimal-degree value
    pub fn decimal_degrees(&self) -> f64 {
        self.degrees + self.minutes.unwrap_or(0.0) / 60.0 + self.seconds.unwrap_or(0.0) / 3600.0
    }
}

/// Result of parsing one coordinate string
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParsedCoordinates {
    /// Notation that matched
    pub format: CoordinateFormat,
    /// Latitude fields
    pub latitude: ParsedAxis,
    /// Longitude fields
    pub longitude: ParsedAxis,
}

impl ParsedCoordinates {
    /// Collapse the parsed fields into a decimal-degree pair
    pub fn to_pair(&self) -> Result<CoordinatePair> {
        CoordinatePair::from_parts(
            self.latitude.decimal_degrees(),
            self.latitude.hemisphere,
            self.longitude.decimal_degrees(),
            self.longitude.hemisphere,
        )
    }
}

/// Parse a coordinate string, trying DMS, then DM, then DD.
///
/// Range checks are left to normalization; this only establishes that the
/// text is well-formed.
pub fn parse_coordinates(input: &str) -> Result<ParsedCoordinates> {
    let parsed = if let Some(caps) = DMS_PATTERN.captures(input) {
        ParsedCoordinates {
            format: CoordinateFormat::Dms,
            latitude: dms_fields(&caps, 1, input)?,
            longitude: dms_fields(&caps, 5, input)?,
        }
    } else if let Some(caps) = DM_PATTERN.captures(input) {
        ParsedCoordinates {
            format: CoordinateFormat::Dm,
            latitude: dm_fields(&caps, 1, input)?,
            longitude: dm_fields(&caps, 4, input)?,
        }
    } else if let Some(caps) = DD_PATTERN.captures(input) {
        ParsedCoordinates {
            format: CoordinateFormat::Dd,
            latitude: dd_fields(&caps, 1, input)?,
            longitude: dd_fields(&caps, 3, input)?,
        }
    } else {
        return Err(CodecError::invalid_format(input));
    };

    tracing::trace!(format = %parsed.format, "recognised coordinate notation");
    Ok(parsed)
}

fn dms_fields(caps: &Captures<'_>, first: usize, input: &str) -> Result<ParsedAxis> {
    Ok(ParsedAxis {
        degrees: number(caps, first, input)?,
        minutes: Some(number(caps, first + 1, input)?),
        seconds: Some(number(caps, first + 2, input)?),
        hemisphere: hemisphere(caps, first + 3, input)?,
    })
}

fn dm_fields(caps: &Captures<'_>, first: usize, input: &str) -> Result<ParsedAxis> {
    Ok(ParsedAxis {
        degrees: number(caps, first, input)?,
        minutes: Some(number(caps, first + 1, input)?),
        seconds: None,
        hemisphere: hemisphere(caps, first + 2, input)?,
    })
}

fn dd_fields(caps: &Captures<'_>, first: usize, input: &str) -> Result<ParsedAxis> {
    Ok(ParsedAxis {
        degrees: number(caps, first, input)?,
        minutes: None,
        seconds: None,
        hemisphere: hemisphere(caps, first + 1, input)?,
    })
}

fn number(caps: &Captures<'_>, index: usize, input: &str) -> Result<f64> {
    caps.get(index)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .ok_or_else(|| CodecError::invalid_format(input))
}

fn hemisphere(caps: &Captures<'_>, index: usize, input: &str) -> Result<Hemisphere> {
    caps.get(index)
        .ok_or_else(|| CodecError::invalid_format(input))?
        .as_str()
        .parse()
}
