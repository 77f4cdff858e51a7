//! Display formatting for computed values.

use ti_turbulence::{Quantity, Reported};

/// Significant digits used for display.
pub const DISPLAY_DIGITS: usize = 4;

/// General format with [`DISPLAY_DIGITS`] significant digits.
///
/// Scientific notation is used when the decimal exponent is below -4 or
/// at least the number of significant digits; trailing zeros are removed.
pub fn format_general(value: f64) -> String {
    format_significant(value, DISPLAY_DIGITS)
}

pub fn format_significant(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let digits = digits.max(1);
    let sci = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= digits as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exp.abs())
    } else {
        let decimals = (digits as i32 - 1 - exp).max(0) as usize;
        trim_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Intensity as fraction and percentage, e.g. `0.0500 (5.00 %)`.
pub fn format_intensity(intensity: f64) -> String {
    format!("{:.4} ({:.2} %)", intensity, intensity * 100.0)
}

/// Value with its unit, intensity in its own style.
pub fn format_reported(reported: &Reported) -> String {
    if reported.quantity == Quantity::Intensity {
        return format_intensity(reported.value);
    }
    let unit = reported.quantity.unit();
    let value = format_general(reported.value);
    if unit.is_empty() {
        value
    } else {
        format!("{value} {unit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_fixed_range() {
        assert_eq!(format_general(10.0), "10");
        assert_eq!(format_general(0.07), "0.07");
        assert_eq!(format_general(0.7854), "0.7854");
        assert_eq!(format_general(1.0), "1");
        assert_eq!(format_general(123.456), "123.5");
        assert_eq!(format_general(0.0001234), "0.0001234");
    }

    #[test]
    fn general_scientific_range() {
        assert_eq!(format_general(676_795.58), "6.768e+05");
        assert_eq!(format_general(1.81e-5), "1.81e-05");
        assert_eq!(format_general(12_346.0), "1.235e+04");
        assert_eq!(format_general(-2.5e-7), "-2.5e-07");
    }

    #[test]
    fn general_rounding_bumps_exponent() {
        assert_eq!(format_general(9999.9), "1e+04");
        assert_eq!(format_general(0.99999), "1");
    }

    #[test]
    fn general_special_values() {
        assert_eq!(format_general(0.0), "0");
        assert_eq!(format_general(f64::INFINITY), "inf");
        assert_eq!(format_general(f64::NAN), "nan");
    }

    #[test]
    fn intensity_style() {
        assert_eq!(format_intensity(0.05), "0.0500 (5.00 %)");
        assert_eq!(format_intensity(0.029878), "0.0299 (2.99 %)");
    }

    #[test]
    fn reported_with_units() {
        let r = Reported {
            quantity: Quantity::LengthScale,
            value: 0.07,
        };
        assert_eq!(format_reported(&r), "0.07 m");
        let r = Reported {
            quantity: Quantity::ViscosityRatio,
            value: 5.0,
        };
        assert_eq!(format_reported(&r), "5");
    }
}
