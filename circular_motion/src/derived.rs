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
use crate::units::hz_to_rpm;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedQuantities {
    /// ω in rad/s
    pub angular_velocity: f64,
    /// T in s. [f64::INFINITY] when the frequency is 0
    pub period: f64,
    /// v in m/s
    pub linear_velocity: f64,
    /// aₙ in m/s²
    pub normal_acceleration: f64,
    /// F in N
    pub centripetal_force: f64,
    rotation_rate_rpm: f64
}

impl DerivedQuantities {
    /// `false` when the object isn't rotating and the period is undefined
    pub fn has_period(&self) -> bool {
        self.period.is_finite()
    }

    pub fn rotation_rate_rpm(&self) -> f64 {
        self.rotation_rate_rpm
    }

    pub fn get(&self, quantity: Quantity) -> f64 {
        match quantity {
            Quantity::AngularVelocity => self.angular_velocity,
            Quantity::Period => self.period,
            Quantity::LinearVelocity => self.linear_velocity,
            Quantity::NormalAcceleration => self.normal_acceleration,
            Quantity::CentripetalForce => self.centripetal_force
        }
    }
}

/// Evaluates the uniform circular motion relations for an object of mass `mass` (kg)
/// travelling around a circle of radius `radius` (m) `frequency` times per second.
///
/// Never fails: a zero frequency gives an infinite period and a zero radius gives zero
/// normal acceleration (and so zero force).
pub fn compute(radius: f64, frequency: f64, mass: f64) -> DerivedQuantities {
    let angular_velocity = 2.0 * PI * frequency;
    let period = if frequency > 0.0 { 1.0 / frequency } else { f64::INFINITY };
    let linear_velocity = angular_velocity * radius;
    let normal_acceleration = if radius > 0.0 {
        linear_velocity * linear_velocity / radius
    } else {
        0.0
    };
    DerivedQuantities {
        angular_velocity,
        period,
        linear_velocity,
        normal_acceleration,
        centripetal_force: mass * normal_acceleration,
        rotation_rate_rpm: hz_to_rpm(frequency)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Quantity {
    AngularVelocity,
    Period,
    LinearVelocity,
    NormalAcceleration,
    CentripetalForce
}

impl Quantity {
    pub fn all() -> [Quantity; 5] {
        [
            Quantity::AngularVelocity,
            Quantity::Period,
            Quantity::LinearVelocity,
            Quantity::NormalAcceleration,
            Quantity::CentripetalForce
        ]
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Quantity::AngularVelocity => "ω",
            Quantity::Period => "T",
            Quantity::LinearVelocity => "v",
            Quantity::NormalAcceleration => "aₙ",
            Quantity::CentripetalForce => "F"
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Quantity::AngularVelocity => "rad/s",
            Quantity::Period => "s",
            Quantity::LinearVelocity => "m/s",
            Quantity::NormalAcceleration => "m/s²",
            Quantity::CentripetalForce => "N"
        }
    }

    pub fn label(&self) -> String {
        format!("{} ({})", self.symbol(), self.unit())
    }
}
