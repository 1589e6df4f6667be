//! Positional base-N expansion of fractions in [0, 1)

/// Digit base used by the word codec
pub const BASE: u32 = 50;

/// Expand `value` into `digit_count` base-`base` digits.
///
/// Each step multiplies the remainder by `base` and takes the floor as the
/// next digit. The digit is clamped to `[0, base - 1]` because floating-point
/// multiplication can overshoot at digit boundaries (or at `value == 1.0`).
pub fn encode_fraction(value: f64, base: u32, digit_count: usize) -> Vec<u8> {
    let base_f = f64::from(base);
    let max_digit = f64::from(base.saturating_sub(1));
    let mut remainder = value;
    let mut digits = Vec::with_capacity(digit_count);

    for _ in 0..digit_count {
        remainder *= base_f;
        let digit = remainder.floor().clamp(0.0, max_digit);
        digits.push(digit as u8);
        remainder -= digit;
    }

    digits
}

/// Collapse digits back into a fraction: `Σ digit[i] / base^(i+1)`
pub fn decode_digits(digits: &[u8], base: u32) -> f64 {
    let base_f = f64::from(base);
    let mut scale = 1.0;
    digits.iter().fold(0.0, |acc, &digit| {
        scale /= base_f;
        acc + f64::from(digit) * scale
    })
}

/// Angular width of one cell when `range` degrees are addressed with
/// `digit_count` digits.
pub fn cell_size(range: f64, base: u32, digit_count: usize) -> f64 {
    let exponent = i32::try_from(digit_count).unwrap_or(i32::MAX);
    range / f64::from(base).powi(exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_fraction() {
        // 0.5 = 25/50
        assert_eq!(encode_fraction(0.5, BASE, 4), vec![25, 0, 0, 0]);
        // 12/50 + 25/2500
        assert_eq!(encode_fraction(0.25, BASE, 3), vec![12, 25, 0]);
    }

    #[test]
    fn test_encode_clamps_at_one() {
        assert_eq!(encode_fraction(1.0, BASE, 4), vec![49, 49, 49, 49]);
    }

    #[test]
    fn test_encode_clamps_negative_noise() {
        assert_eq!(encode_fraction(-1e-12, BASE, 3), vec![0, 0, 0]);
    }

    #[test]
    fn test_decode_inverts_encode_within_cell() {
        for value in [0.0, 0.123_456_789, 0.5, 0.776_654_19, 0.999_999] {
            let digits = encode_fraction(value, BASE, 4);
            let decoded = decode_digits(&digits, BASE);
            assert!(decoded <= value + 1e-12);
            assert!(value - decoded < 1.0 / 50f64.powi(4));
        }
    }

    #[test]
    fn test_decode_empty_is_zero() {
        assert_eq!(decode_digits(&[], BASE), 0.0);
    }

    #[test]
    fn test_cell_size_shrinks_by_base() {
        let three = cell_size(360.0, BASE, 3);
        let four = cell_size(360.0, BASE, 4);
        assert!((three / four - 50.0).abs() < 1e-9);
    }
}
