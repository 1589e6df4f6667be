//! Processing trace
//!
//! A caller-owned record of every intermediate value produced by one encode or
//! decode call. Codec operations take `Option<&mut ProcessingTrace>` and only
//! write into it; nothing in the codec reads it back.

use serde::{Deserialize, Serialize};

use crate::coordinate::{CoordinatePair, MapCoordinates};
use crate::errors::{CodecError, Result};
use crate::notation::{CoordinateFormat, ParsedAxis};

/// Per-axis pair of values recorded in a trace
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisPair<T> {
    /// Latitude value
    pub lat: T,
    /// Longitude value
    pub lng: T,
}

/// Direction of the traced call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceDirection {
    /// Coordinates to words
    Encode,
    /// Words to coordinates
    Decode,
}

/// Intermediate values of a single codec call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingTrace {
    /// Which way the call went
    pub direction: Option<TraceDirection>,
    /// Input as received
    pub raw_input: Option<String>,
    /// Notation the input was recognised as
    pub detected_format: Option<CoordinateFormat>,
    /// Fields parsed from the notation
    pub parsed: Option<AxisPair<ParsedAxis>>,
    /// Decimal-degree coordinates fed to, or recovered from, normalization
    pub coordinates: Option<CoordinatePair>,
    /// Values on the unified ranges
    pub unified: Option<AxisPair<f64>>,
    /// Values on `[0, 1]`
    pub normalized: Option<AxisPair<f64>>,
    /// Base-50 digits per axis
    pub digits: Option<AxisPair<Vec<u8>>>,
    /// Syllables per axis
    pub syllables: Option<AxisPair<Vec<String>>>,
    /// Words of the address
    pub words: Option<Vec<String>>,
    /// Decoded signed coordinates
    pub map_coordinates: Option<MapCoordinates>,
    /// Decoded decimal-degree string
    pub dd_string: Option<String>,
    /// Error message if the call failed
    pub error: Option<String>,
}

impl ProcessingTrace {
    /// Create an empty trace
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the traced call failed
    pub fn failed(&self) -> bool {
        self.error.is_some()
    }

    /// Render the trace as pretty JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CodecError::internal(format!("Failed to serialize trace: {e}")))
    }
}

/// Write-only handle over an optional trace.
///
/// Every recording method is a no-op when no trace was supplied.
pub(crate) struct TraceSink<'a> {
    inner: Option<&'a mut ProcessingTrace>,
}

impl<'a> TraceSink<'a> {
    pub(crate) fn new(inner: Option<&'a mut ProcessingTrace>) -> Self {
        Self { inner }
    }

    pub(crate) fn record(&mut self, write: impl FnOnce(&mut ProcessingTrace)) {
        if let Some(trace) = self.inner.as_deref_mut() {
            write(trace);
        }
    }

    /// Record the error of a failed call and hand it back
    pub(crate) fn fail(&mut self, error: CodecError) -> CodecError {
        let message = error.to_string();
        self.record(|t| t.error = Some(message));
        error
    }
}
