//! Known addresses, boundary cells and user-facing error cases.

use assert_matches::assert_matches;
use sylla_core::{
    coordinates_to_words, words_to_coordinates, Axis, CodecError, CoordinateFormat, DecodeResponse,
    EncodeResponse, Hemisphere, ProcessingTrace, WordCodec,
};

#[test]
fn decimal_degrees_reference_address() {
    let encoded = coordinates_to_words("49.7977543° N 18.2567507° E", None).unwrap();
    assert_eq!(encoded.words, "ROBI SEME NERU RODI");
}

#[test]
fn dms_notation_lands_in_same_cell() {
    let mut trace = ProcessingTrace::new();
    let encoded =
        coordinates_to_words(r#"49° 47' 51.92" N 18° 15' 24.30" E"#, Some(&mut trace)).unwrap();
    assert_eq!(encoded.words, "ROBI SEME NERU RODI");
    assert_eq!(trace.detected_format, Some(CoordinateFormat::Dms));
}

#[test]
fn southern_and_western_hemispheres() {
    let sydney = coordinates_to_words("33.8688° S 151.2093° E", None).unwrap();
    assert_eq!(sydney.words, "KALE MUBA NABO BAGE");
    assert_eq!(sydney.map_coordinates.lat, -33.8688);

    let new_york = coordinates_to_words("40.7128° N, 74.0060° W", None).unwrap();
    assert_eq!(new_york.words, "RERU KARE LIBO ROLO");
    assert_eq!(new_york.map_coordinates.lng, -74.006);
}

#[test]
fn north_pole_uses_maximum_latitude_digits() {
    let encoded = coordinates_to_words("90° N 0° E", None).unwrap();
    assert_eq!(encoded.words, "TUBA TUBA TUBA TUBA");
}

#[test]
fn equator_sits_at_midpoint_digit() {
    let encoded = coordinates_to_words("0° N 0° E", None).unwrap();
    assert_eq!(encoded.words, "MABA BABA BABA BABA");

    let decoded = words_to_coordinates("MABA BABA BABA BABA", None).unwrap();
    assert_eq!(decoded.dd_string, "0.0000000° N 0.0000000° E");
    assert_eq!(decoded.pair.longitude.hemisphere, Hemisphere::E);
}

#[test]
fn fractions_near_one_snap_to_pole_and_prime_meridian() {
    // Six all-maximum digits are within the snap tolerance of 1.0.
    let codec = WordCodec::with_precision(6).unwrap();
    let decoded = codec
        .words_to_coordinates("TUTU TUTU TUTU TUTU TUTU TUTU", None)
        .unwrap();
    assert_eq!(decoded.dd_string, "90.0000000° N 0.0000000° E");
    assert_eq!(decoded.pair.longitude.hemisphere, Hemisphere::E);
}

#[test]
fn antimeridian_decodes_east() {
    let encoded = coordinates_to_words("0° N 180° W", None).unwrap();
    let decoded = words_to_coordinates(&encoded.words, None).unwrap();
    assert_eq!(decoded.pair.longitude.hemisphere, Hemisphere::E);
    assert_eq!(decoded.pair.longitude.degrees, 180.0);
}

#[test]
fn missing_degree_marks_are_a_format_error() {
    let err = coordinates_to_words("49,7977543 N 18,2567 E", None).unwrap_err();
    assert_matches!(err, CodecError::InvalidFormat { .. });
    let message = err.to_string();
    assert!(message.contains("Accepted formats"));
    assert!(message.contains("DMS"));
}

#[test]
fn latitude_out_of_range_names_axis_and_value() {
    let err = coordinates_to_words("95.0° N 10.0° E", None).unwrap_err();
    assert_matches!(
        err,
        CodecError::OutOfRangeCoordinate {
            axis: Axis::Latitude,
            ..
        }
    );
    let message = err.to_string();
    assert!(message.contains("Latitude"));
    assert!(message.contains("95.00000"));
}

#[test]
fn longitude_out_of_range_from_dms() {
    let err = coordinates_to_words(r#"10° 0' 0" N 181° 30' 0" E"#, None).unwrap_err();
    assert!(err.to_string().contains("181.50000"));
}

#[test]
fn three_words_is_a_count_error() {
    let err = words_to_coordinates("ROBI SEME NER", None).unwrap_err();
    assert_matches!(
        err,
        CodecError::WrongWordCount {
            expected: 4,
            found: 3
        }
    );
}

#[test]
fn unknown_syllable_is_named() {
    let err = words_to_coordinates("ROXI SEME NERU RODI", None).unwrap_err();
    assert_matches!(err, CodecError::InvalidSyllable { ref syllable, .. } if syllable == "XI");
    assert!(err.to_string().contains("'XI'"));
    assert!(err.to_string().contains("'ROXI'"));
}

#[test]
fn five_letter_word_is_a_length_error() {
    let err = words_to_coordinates("ROBIX SEME NERU RODI", None).unwrap_err();
    assert_matches!(err, CodecError::WrongWordLength { length: 5, .. });
}

#[test]
fn decode_is_case_insensitive() {
    let upper = words_to_coordinates("ROBI SEME NERU RODI", None).unwrap();
    let lower = words_to_coordinates("robi seme neru rodi", None).unwrap();
    assert_eq!(upper, lower);
    assert_eq!(upper.dd_string, "49.7977344° N 18.2567232° E");
}

#[test]
fn responses_set_exactly_one_side() {
    let inputs = ["49.7977543° N 18.2567507° E", "95.0° N 10.0° E", "garbage"];
    for input in inputs {
        let response = EncodeResponse::from(coordinates_to_words(input, None));
        assert_ne!(response.words.is_some(), response.error.is_some());
        assert_eq!(response.words.is_some(), response.map_coordinates.is_some());
    }

    let inputs = ["ROBI SEME NERU RODI", "ROBI", "ROXI SEME NERU RODI"];
    for input in inputs {
        let response = DecodeResponse::from(words_to_coordinates(input, None));
        assert_ne!(response.dd_string.is_some(), response.error.is_some());
        assert_eq!(response.dd_string.is_some(), response.map_coordinates.is_some());
    }
}

#[test]
fn response_json_uses_camel_case() {
    let response = DecodeResponse::from(words_to_coordinates("ROBI SEME NERU RODI", None));
    let json = serde_json::to_value(&response).unwrap();
    assert!(json["ddString"].is_string());
    assert!(json["mapCoordinates"]["lat"].is_number());
    assert!(json["error"].is_null());
}
