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

//! Closed-form quantities of uniform circular motion.
//!
//! Everything in here is a pure function of a [SimulationParameters]; nothing is cached,
//! so a [DerivedQuantities] is always consistent with the parameters it came from.

mod derived;
mod params;
pub mod units;

pub use derived::{compute, DerivedQuantities, Quantity};
pub use params::{Parameter, ParameterRange, SimulationParameters};
