/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of circular-motion-lab.
 *
 * circular-motion-lab is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * circular-motion-lab is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with circular-motion-lab. If not, see <https://www.gnu.org/licenses/>.
 */

/// Text shown in place of a value that can't be displayed, e.g. the period of
/// something that isn't rotating.
pub const PLACEHOLDER: &str = "-";

const SCIENTIFIC_UPPER_BOUND: f64 = 1e6;
const SCIENTIFIC_LOWER_BOUND: f64 = 1e-3;

pub fn round_float_to(float: f64, decimal_places: u32) -> f64 {
    let precision_base: u64 = 10;
    let precision_factor = precision_base.pow(decimal_places) as f64;
    (float * precision_factor).round() / precision_factor
}

/// Formats a physical quantity for display with 2 decimal places.
///
/// See [format_quantity_to] for the rules that apply.
pub fn format_quantity(value: f64) -> String {
    format_quantity_to(value, 2)
}

/// Formats a physical quantity for display with the given number of decimal places.
///
/// Values with a magnitude of at least 1,000,000, or strictly between 0 and 0.001, are
/// written in scientific notation (e.g. `1.23e6`, `4.00e-4`) so they stay readable.
/// Non-finite values (`NaN`, `±∞`) are rendered as [PLACEHOLDER].
pub fn format_quantity_to(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let magnitude = value.abs();
    if magnitude >= SCIENTIFIC_UPPER_BOUND || (magnitude > 0.0 && magnitude < SCIENTIFIC_LOWER_BOUND) {
        return format!("{:.*e}", digits, value);
    }
    // avoid printing "-0.00"
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.*}", digits, value)
}

/// Returns `100 * part / whole` rounded to the nearest integer with halves rounded up.
///
/// Worked in integer arithmetic so the .5 boundary is exact. A `whole` of 0 gives 0.
pub fn percentage_half_up(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((200 * part + whole) / (2 * whole)) as u32
}

#[cfg(test)]
mod tests {
    use crate::numeric::{format_quantity, format_quantity_to, percentage_half_up, round_float_to, PLACEHOLDER};

    #[test]
    fn round_float_tests() {
        assert_eq!(round_float_to(0.534999, 2), 0.53);
        assert_eq!(round_float_to(0.535001, 2), 0.54);
        assert_eq!(round_float_to(1.0, 2), 1.0);
        assert_eq!(round_float_to(12.566370614359172, 1), 12.6);
    }

    #[test]
    fn fixed_point_formatting() {
        assert_eq!(format_quantity(12.566370614359172), "12.57");
        assert_eq!(format_quantity(0.5), "0.50");
        assert_eq!(format_quantity(0.0), "0.00");
        assert_eq!(format_quantity(-0.0), "0.00");
        assert_eq!(format_quantity(-3.14159), "-3.14");
        assert_eq!(format_quantity(0.001), "0.00");
        assert_eq!(format_quantity(999999.0), "999999.00");
        assert_eq!(format_quantity_to(2.5, 1), "2.5");
    }

    #[test]
    fn scientific_formatting() {
        assert_eq!(format_quantity(1_000_000.0), "1.00e6");
        assert_eq!(format_quantity(1_234_567.0), "1.23e6");
        assert_eq!(format_quantity(-2_500_000.0), "-2.50e6");
        assert_eq!(format_quantity(0.0004), "4.00e-4");
        assert_eq!(format_quantity(0.00099), "9.90e-4");
        assert_eq!(format_quantity(-0.0005), "-5.00e-4");
    }

    #[test]
    fn non_finite_formatting() {
        assert_eq!(format_quantity(f64::INFINITY), PLACEHOLDER);
        assert_eq!(format_quantity(f64::NEG_INFINITY), PLACEHOLDER);
        assert_eq!(format_quantity(f64::NAN), PLACEHOLDER);
    }

    #[test]
    fn formatted_values_parse_back() {
        let samples = [0.001, 0.0125, 0.1, 0.5, 1.0, 2.0 * std::f64::consts::PI, 19.739, 123.456, 98765.4321, 999_999.99];
        for value in samples {
            for signed in [value, -value] {
                let parsed: f64 = format_quantity(signed).parse().unwrap();
                assert!((parsed - signed).abs() <= 0.005 + 1e-9, "{} formatted as {}", signed, parsed);
            }
        }
    }

    #[test]
    fn percentage_tests() {
        assert_eq!(percentage_half_up(0, 5), 0);
        assert_eq!(percentage_half_up(3, 5), 60);
        assert_eq!(percentage_half_up(5, 5), 100);
        assert_eq!(percentage_half_up(1, 3), 33);
        assert_eq!(percentage_half_up(2, 3), 67);
        assert_eq!(percentage_half_up(0, 0), 0);
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(percentage_half_up(1, 8), 13);
        assert_eq!(percentage_half_up(3, 8), 38);
        assert_eq!(percentage_half_up(5, 8), 63);
        assert_eq!(percentage_half_up(1, 200), 1);
    }
}
