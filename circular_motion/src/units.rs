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

use std::f64::consts::PI;

pub fn hz_to_rpm(frequency_hz: f64) -> f64 {
    frequency_hz * 60.0
}

pub fn rpm_to_hz(rpm: f64) -> f64 {
    rpm / 60.0
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

#[cfg(test)]
mod tests {
    use crate::units::{degrees_to_radians, hz_to_rpm, rpm_to_hz};

    #[test]
    fn rpm_conversions() {
        assert_eq!(hz_to_rpm(1.0), 60.0);
        assert_eq!(hz_to_rpm(0.0), 0.0);
        assert_eq!(rpm_to_hz(150.0), 2.5);
    }

    #[test]
    fn angle_conversions() {
        assert!((degrees_to_radians(180.0) - std::f64::consts::PI).abs() < 1e-12);
        assert!((degrees_to_radians(30.0) - std::f64::consts::FRAC_PI_6).abs() < 1e-12);
    }
}
