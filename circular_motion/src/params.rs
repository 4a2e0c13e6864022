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

use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;
use crate::derived::{compute, DerivedQuantities};

/// The range a learner is allowed to move a parameter through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
    pub step: f64
}

impl ParameterRange {
    pub const fn new(min: f64, max: f64, step: f64) -> ParameterRange {
        ParameterRange { min, max, step }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn as_range(&self) -> RangeInclusive<f64> {
        self.min..=self.max
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Parameter {
    Radius,
    Frequency,
    Mass
}

impl Parameter {
    pub const RADIUS_RANGE: ParameterRange = ParameterRange::new(0.1, 2.0, 0.01);
    pub const FREQUENCY_RANGE: ParameterRange = ParameterRange::new(0.2, 5.0, 0.01);
    pub const MASS_RANGE: ParameterRange = ParameterRange::new(0.1, 5.0, 0.01);

    pub fn all() -> [Parameter; 3] {
        [Parameter::Radius, Parameter::Frequency, Parameter::Mass]
    }

    pub fn range(&self) -> ParameterRange {
        match self {
            Parameter::Radius => Parameter::RADIUS_RANGE,
            Parameter::Frequency => Parameter::FREQUENCY_RANGE,
            Parameter::Mass => Parameter::MASS_RANGE
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Parameter::Radius => "r",
            Parameter::Frequency => "f",
            Parameter::Mass => "m"
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Parameter::Radius => "m",
            Parameter::Frequency => "Hz",
            Parameter::Mass => "kg"
        }
    }

    pub fn friendly_name(&self) -> &'static str {
        match self {
            Parameter::Radius => "Radius",
            Parameter::Frequency => "Frequency",
            Parameter::Mass => "Mass"
        }
    }
}

impl Display for Parameter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.symbol(), self.unit())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    /// metres
    pub radius: f64,
    /// Hz
    pub frequency: f64,
    /// kg
    pub mass: f64
}

impl SimulationParameters {
    pub const DEFAULT_RADIUS: f64 = 0.5;
    pub const DEFAULT_FREQUENCY: f64 = 1.0;
    pub const DEFAULT_MASS: f64 = 1.0;

    pub fn new(radius: f64, frequency: f64, mass: f64) -> SimulationParameters {
        SimulationParameters { radius, frequency, mass }
    }

    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Radius => self.radius,
            Parameter::Frequency => self.frequency,
            Parameter::Mass => self.mass
        }
    }

    /// Returns a copy with `parameter` set to `value` clamped into the allowed range.
    /// A non-finite `value` leaves the parameters unchanged.
    pub fn with(&self, parameter: Parameter, value: f64) -> SimulationParameters {
        if !value.is_finite() {
            return *self;
        }
        let value = parameter.range().clamp(value);
        let mut updated = *self;
        match parameter {
            Parameter::Radius => updated.radius = value,
            Parameter::Frequency => updated.frequency = value,
            Parameter::Mass => updated.mass = value
        }
        updated
    }

    pub fn derive(&self) -> DerivedQuantities {
        compute(self.radius, self.frequency, self.mass)
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        SimulationParameters::new(
            SimulationParameters::DEFAULT_RADIUS,
            SimulationParameters::DEFAULT_FREQUENCY,
            SimulationParameters::DEFAULT_MASS
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::params::{Parameter, SimulationParameters};

    #[test]
    fn defaults() {
        let params = SimulationParameters::default();
        assert_eq!(params.radius, 0.5);
        assert_eq!(params.frequency, 1.0);
        assert_eq!(params.mass, 1.0);
        for parameter in Parameter::all() {
            assert!(parameter.range().contains(params.get(parameter)));
        }
    }

    #[test]
    fn updates_are_clamped() {
        let params = SimulationParameters::default();
        assert_eq!(params.with(Parameter::Radius, 1.25).radius, 1.25);
        assert_eq!(params.with(Parameter::Radius, 0.0).radius, 0.1);
        assert_eq!(params.with(Parameter::Frequency, 9.0).frequency, 5.0);
        assert_eq!(params.with(Parameter::Mass, -1.0).mass, 0.1);
    }

    #[test]
    fn non_finite_updates_are_ignored() {
        let params = SimulationParameters::default();
        assert_eq!(params.with(Parameter::Mass, f64::NAN), params);
        assert_eq!(params.with(Parameter::Radius, f64::INFINITY), params);
    }

    #[test]
    fn updates_only_touch_one_parameter() {
        let params = SimulationParameters::default().with(Parameter::Frequency, 2.0);
        assert_eq!(params, SimulationParameters::new(0.5, 2.0, 1.0));
    }

    #[test]
    fn display() {
        assert_eq!(Parameter::Radius.to_string(), "r (m)");
        assert_eq!(Parameter::Frequency.to_string(), "f (Hz)");
        assert_eq!(Parameter::Mass.to_string(), "m (kg)");
    }
}
