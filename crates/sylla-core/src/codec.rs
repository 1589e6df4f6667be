//! Word-address codec
//!
//! [`WordCodec`] wires the pipeline together:
//!
//! ```text
//! text -> notation -> (degrees, hemisphere) -> normalize -> [0, 1)
//!      -> base-50 digits -> syllables -> words
//! ```
//!
//! Decoding walks the same chain backwards. Every call is independent; the
//! only shared state is the immutable syllable table.

use serde::{Deserialize, Serialize};

use crate::config::CodecConfig;
use crate::coordinate::{Axis, CoordinatePair, Hemisphere, MapCoordinates};
use crate::digits::{cell_size, decode_digits, encode_fraction, BASE};
use crate::errors::{CodecError, Result};
use crate::normalize::{denormalize, normalize};
use crate::notation::{parse_coordinates, CoordinateFormat};
use crate::syllables::syllables_for;
use crate::trace::{AxisPair, ProcessingTrace, TraceDirection, TraceSink};
use crate::words::{format_words, split_words};

/// Successful encode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedAddress {
    /// Space-separated words
    pub words: String,
    /// Signed input coordinates
    pub map_coordinates: MapCoordinates,
}

/// Successful decode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodedAddress {
    /// `"{lat:.7}° {H} {lng:.7}° {H}"`
    pub dd_string: String,
    /// Signed decoded coordinates
    pub map_coordinates: MapCoordinates,
    /// Decoded magnitudes with hemispheres
    pub pair: CoordinatePair,
}

/// Encode outcome in the shape handed to display collaborators.
///
/// Exactly one of the result fields or `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodeResponse {
    /// Word address on success
    pub words: Option<String>,
    /// Signed coordinates on success
    pub map_coordinates: Option<MapCoordinates>,
    /// Error message on failure
    pub error: Option<String>,
}

impl From<Result<EncodedAddress>> for EncodeResponse {
    fn from(result: Result<EncodedAddress>) -> Self {
        match result {
            Ok(encoded) => Self {
                words: Some(encoded.words),
                map_coordinates: Some(encoded.map_coordinates),
                error: None,
            },
            Err(err) => Self {
                words: None,
                map_coordinates: None,
                error: Some(err.to_string()),
            },
        }
    }
}

/// Decode outcome in the shape handed to display collaborators.
///
/// Exactly one of the result fields or `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodeResponse {
    /// Decimal-degree string on success
    pub dd_string: Option<String>,
    /// Signed coordinates on success
    pub map_coordinates: Option<MapCoordinates>,
    /// Error message on failure
    pub error: Option<String>,
}

impl From<Result<DecodedAddress>> for DecodeResponse {
    fn from(result: Result<DecodedAddress>) -> Self {
        match result {
            Ok(decoded) => Self {
                dd_string: Some(decoded.dd_string),
                map_coordinates: Some(decoded.map_coordinates),
                error: None,
            },
            Err(err) => Self {
                dd_string: None,
                map_coordinates: None,
                error: Some(err.to_string()),
            },
        }
    }
}

/// Encoder/decoder for a fixed configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WordCodec {
    config: CodecConfig,
}

impl WordCodec {
    /// Build a codec from a validated configuration
    pub fn new(config: CodecConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Codec with default settings and the given precision
    pub fn with_precision(precision: usize) -> Result<Self> {
        Self::new(CodecConfig::with_precision(precision))
    }

    /// Active configuration
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Number of words per address
    pub fn precision(&self) -> usize {
        self.config.precision
    }

    /// Width in degrees of one address cell along `axis`
    pub fn resolution(&self, axis: Axis) -> f64 {
        cell_size(axis.unified_range(), BASE, self.config.precision)
    }

    /// Encode a coordinate string in DMS, DM or DD notation
    pub fn coordinates_to_words(
        &self,
        input: &str,
        trace: Option<&mut ProcessingTrace>,
    ) -> Result<EncodedAddress> {
        let mut sink = TraceSink::new(trace);
        sink.record(|t| {
            t.direction = Some(TraceDirection::Encode);
            t.raw_input = Some(input.to_string());
        });

        let parsed = match parse_coordinates(input) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::debug!(error = %err, "coordinate text rejected");
                return Err(sink.fail(err));
            }
        };
        sink.record(|t| {
            t.detected_format = Some(parsed.format);
            t.parsed = Some(AxisPair {
                lat: parsed.latitude,
                lng: parsed.longitude,
            });
        });

        let pair = parsed.to_pair().map_err(|err| sink.fail(err))?;
        self.encode_pair(pair, &mut sink)
    }

    /// Encode already-numeric degree and hemisphere pairs
    pub fn coordinates_to_words_from(
        &self,
        pair: CoordinatePair,
        trace: Option<&mut ProcessingTrace>,
    ) -> Result<EncodedAddress> {
        let mut sink = TraceSink::new(trace);
        sink.record(|t| {
            t.direction = Some(TraceDirection::Encode);
            t.raw_input = Some(pair.to_dd_string());
            t.detected_format = Some(CoordinateFormat::Numeric);
        });
        self.encode_pair(pair, &mut sink)
    }

    /// Encode numeric degrees with explicit hemispheres.
    ///
    /// Unlike [`Self::coordinates_to_words_from`], a hemisphere supplied for
    /// the wrong axis is reported through the trace like any other failure.
    pub fn coordinates_to_words_numeric(
        &self,
        lat: f64,
        lat_hemisphere: Hemisphere,
        lng: f64,
        lng_hemisphere: Hemisphere,
        trace: Option<&mut ProcessingTrace>,
    ) -> Result<EncodedAddress> {
        let mut sink = TraceSink::new(trace);
        sink.record(|t| {
            t.direction = Some(TraceDirection::Encode);
            t.raw_input = Some(format!("{lat} {lat_hemisphere} {lng} {lng_hemisphere}"));
            t.detected_format = Some(CoordinateFormat::Numeric);
        });

        let pair = match CoordinatePair::from_parts(lat, lat_hemisphere, lng, lng_hemisphere) {
            Ok(pair) => pair,
            Err(err) => {
                tracing::debug!(error = %err, "numeric coordinates rejected");
                return Err(sink.fail(err));
            }
        };
        self.encode_pair(pair, &mut sink)
    }

    fn encode_pair(&self, pair: CoordinatePair, sink: &mut TraceSink<'_>) -> Result<EncodedAddress> {
        sink.record(|t| t.coordinates = Some(pair));

        let result = self.encode_validated(pair, sink);
        match result {
            Ok(encoded) => {
                tracing::debug!(words = %encoded.words, "encoded coordinates");
                Ok(encoded)
            }
            Err(err) => {
                tracing::debug!(error = %err, "encode failed");
                Err(sink.fail(err))
            }
        }
    }

    fn encode_validated(&self, pair: CoordinatePair, sink: &mut TraceSink<'_>) -> Result<EncodedAddress> {
        let precision = self.config.precision;
        let lat = normalize(&pair.latitude)?;
        let lng = normalize(&pair.longitude)?;
        tracing::trace!(
            lat_unified = lat.unified,
            lng_unified = lng.unified,
            "normalized coordinates"
        );
        sink.record(|t| {
            t.unified = Some(AxisPair {
                lat: lat.unified,
                lng: lng.unified,
            });
            t.normalized = Some(AxisPair {
                lat: lat.fraction,
                lng: lng.fraction,
            });
        });

        let lat_digits = encode_fraction(lat.fraction, BASE, precision);
        let lng_digits = encode_fraction(lng.fraction, BASE, precision);
        let lat_syllables = syllables_for(&lat_digits)?;
        let lng_syllables = syllables_for(&lng_digits)?;
        let words = format_words(&lat_digits, &lng_digits, precision)?;

        sink.record(|t| {
            t.syllables = Some(AxisPair {
                lat: lat_syllables.iter().map(|s| s.to_string()).collect(),
                lng: lng_syllables.iter().map(|s| s.to_string()).collect(),
            });
            t.digits = Some(AxisPair {
                lat: lat_digits,
                lng: lng_digits,
            });
            t.words = Some(words.clone());
        });

        Ok(EncodedAddress {
            words: words.join(" "),
            map_coordinates: pair.to_map(),
        })
    }

    /// Decode a word address back to coordinates
    pub fn words_to_coordinates(
        &self,
        input: &str,
        trace: Option<&mut ProcessingTrace>,
    ) -> Result<DecodedAddress> {
        let mut sink = TraceSink::new(trace);
        sink.record(|t| {
            t.direction = Some(TraceDirection::Decode);
            t.raw_input = Some(input.to_string());
        });

        match self.decode_words(input, &mut sink) {
            Ok(decoded) => {
                tracing::debug!(dd = %decoded.dd_string, "decoded word address");
                Ok(decoded)
            }
            Err(err) => {
                tracing::debug!(error = %err, "decode failed");
                Err(sink.fail(err))
            }
        }
    }

    fn decode_words(&self, input: &str, sink: &mut TraceSink<'_>) -> Result<DecodedAddress> {
        let split = split_words(input, self.config.precision)?;
        let lat_fraction = decode_digits(&split.lat_digits, BASE);
        let lng_fraction = decode_digits(&split.lng_digits, BASE);

        let epsilon = self.config.snap_epsilon;
        let (lat_unified, latitude) = denormalize(Axis::Latitude, lat_fraction, epsilon);
        let (lng_unified, longitude) = denormalize(Axis::Longitude, lng_fraction, epsilon);
        let pair = CoordinatePair::new(latitude, longitude)?;
        tracing::trace!(lat_unified, lng_unified, "denormalized word address");

        let decoded = DecodedAddress {
            dd_string: pair.to_dd_string(),
            map_coordinates: pair.to_map(),
            pair,
        };

        sink.record(|t| {
            t.normalized = Some(AxisPair {
                lat: lat_fraction,
                lng: lng_fraction,
            });
            t.unified = Some(AxisPair {
                lat: lat_unified,
                lng: lng_unified,
            });
            t.coordinates = Some(pair);
            t.map_coordinates = Some(decoded.map_coordinates);
            t.dd_string = Some(decoded.dd_string.clone());
            t.words = Some(split.words);
            t.syllables = Some(AxisPair {
                lat: split.lat_syllables,
                lng: split.lng_syllables,
            });
            t.digits = Some(AxisPair {
                lat: split.lat_digits,
                lng: split.lng_digits,
            });
        });

        Ok(decoded)
    }
}

/// Encode with the default four-word codec
pub fn coordinates_to_words(
    input: &str,
    trace: Option<&mut ProcessingTrace>,
) -> Result<EncodedAddress> {
    WordCodec::default().coordinates_to_words(input, trace)
}

/// Encode numeric pairs with the default four-word codec
pub fn coordinates_to_words_from(
    pair: CoordinatePair,
    trace: Option<&mut ProcessingTrace>,
) -> Result<EncodedAddress> {
    WordCodec::default().coordinates_to_words_from(pair, trace)
}

/// Encode numeric degrees and hemispheres with the default four-word codec
pub fn coordinates_to_words_numeric(
    lat: f64,
    lat_hemisphere: Hemisphere,
    lng: f64,
    lng_hemisphere: Hemisphere,
    trace: Option<&mut ProcessingTrace>,
) -> Result<EncodedAddress> {
    WordCodec::default().coordinates_to_words_numeric(
        lat,
        lat_hemisphere,
        lng,
        lng_hemisphere,
        trace,
    )
}

/// Decode with the default four-word codec
pub fn words_to_coordinates(
    input: &str,
    trace: Option<&mut ProcessingTrace>,
) -> Result<DecodedAddress> {
    WordCodec::default().words_to_coordinates(input, trace)
}

impl From<CodecError> for EncodeResponse {
    fn from(err: CodecError) -> Self {
        Self::from(Err::<EncodedAddress, _>(err))
    }
}

impl From<CodecError> for DecodeResponse {
    fn from(err: CodecError) -> Self {
        Self::from(Err::<DecodedAddress, _>(err))
    }
}
