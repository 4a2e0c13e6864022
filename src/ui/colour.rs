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

use iced::Color;

pub fn success_green() -> Color {
    Color::from_rgb8(75, 181, 67)
}

pub fn fail_red() -> Color {
    Color::from_rgb8(237, 67, 55)
}

pub fn muted_brown() -> Color {
    Color::from_rgb8(0x7a, 0x6a, 0x53)
}

pub fn earth_tone_accent() -> Color {
    Color::from_rgb8(0xd4, 0xc2, 0xa8)
}

pub fn earth_tone_card() -> Color {
    Color::from_rgb8(0xfa, 0xf7, 0xf2)
}

/// `#rrggbb` for embedding a colour in SVG markup
pub fn to_hex(colour: Color) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("#{:02x}{:02x}{:02x}", channel(colour.r), channel(colour.g), channel(colour.b))
}

#[cfg(test)]
mod tests {
    use iced::Color;
    use crate::ui::colour::{muted_brown, to_hex};

    #[test]
    fn hex() {
        assert_eq!(to_hex(muted_brown()), "#7a6a53");
        assert_eq!(to_hex(Color::BLACK), "#000000");
        assert_eq!(to_hex(Color::WHITE), "#ffffff");
    }
}
