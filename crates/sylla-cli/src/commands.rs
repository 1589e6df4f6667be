//! Encode and decode command handlers

use anyhow::Result;
use sylla_core::{
    CodecError, CodecResult, DecodeResponse, EncodeResponse, EncodedAddress, Hemisphere,
    ProcessingTrace, WordCodec,
};

/// How results are written to stdout
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    /// Print the boundary response as JSON instead of plain text
    pub json: bool,
    /// Print the processing trace to stderr
    pub trace: bool,
}

/// Encode a coordinate string
pub fn encode(codec: &WordCodec, input: &str, output: OutputOptions) -> Result<bool> {
    let mut trace = ProcessingTrace::new();
    let result = codec.coordinates_to_words(input, Some(&mut trace));
    emit_trace(&trace, output)?;
    emit_encode(result, output)
}

/// Encode numeric degree/hemisphere pairs
pub fn encode_numeric(
    codec: &WordCodec,
    lat: f64,
    lat_hem: Hemisphere,
    lng: f64,
    lng_hem: Hemisphere,
    output: OutputOptions,
) -> Result<bool> {
    let mut trace = ProcessingTrace::new();
    let result =
        codec.coordinates_to_words_numeric(lat, lat_hem, lng, lng_hem, Some(&mut trace));
    emit_trace(&trace, output)?;
    emit_encode(result, output)
}

/// Decode a word address
pub fn decode(codec: &WordCodec, input: &str, output: OutputOptions) -> Result<bool> {
    let mut trace = ProcessingTrace::new();
    let result = codec.words_to_coordinates(input, Some(&mut trace));
    emit_trace(&trace, output)?;

    let ok = result.is_ok();
    if output.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&DecodeResponse::from(result))?
        );
    } else {
        match result {
            Ok(decoded) => println!("{}", decoded.dd_string),
            Err(err) => report(&err),
        }
    }
    Ok(ok)
}

fn emit_encode(result: CodecResult<EncodedAddress>, output: OutputOptions) -> Result<bool> {
    let ok = result.is_ok();
    if output.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&EncodeResponse::from(result))?
        );
    } else {
        match result {
            Ok(encoded) => println!("{}", encoded.words),
            Err(err) => report(&err),
        }
    }
    Ok(ok)
}

fn emit_trace(trace: &ProcessingTrace, output: OutputOptions) -> Result<()> {
    if output.trace {
        eprintln!("{}", trace.to_json_pretty()?);
    }
    Ok(())
}

fn report(err: &CodecError) {
    tracing::debug!(kind = err.kind(), "codec call failed");
    eprintln!("error: {err}");
}
