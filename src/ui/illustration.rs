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

use iced::{Element, Length};
use iced::widget::Svg;
use iced_native::svg::Handle;
use circular_motion::units::degrees_to_radians;
use crate::ui::colour::{earth_tone_accent, muted_brown, to_hex};

/// Where the moving body is drawn on its orbit
const BODY_ANGLE_DEGREES: f64 = 30.0;
/// Arrow length in pixels per m/s
const ARROW_SCALE: f64 = 0.6;
const MIN_ARROW_LENGTH: f64 = 12.0;
const MIN_ORBIT_RADIUS: f64 = 80.0;
const MAX_ORBIT_RADIUS: f64 = 140.0;
const PIXELS_PER_METRE: f64 = 40.0;

pub const SKETCH_SIZE: f64 = 320.0;

/// Maps a simulation radius in metres onto a drawable orbit radius in pixels.
pub fn orbit_radius_for(radius_m: f64) -> f64 {
    (MIN_ORBIT_RADIUS + radius_m * PIXELS_PER_METRE).min(MAX_ORBIT_RADIUS)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SketchPoint {
    pub x: f64,
    pub y: f64
}

impl SketchPoint {
    fn offset(&self, length: f64, angle: f64) -> SketchPoint {
        SketchPoint {
            x: self.x + length * angle.cos(),
            y: self.y + length * angle.sin()
        }
    }
}

/// Geometry of the circular motion diagram: a body on a circle with its tangential
/// velocity arrow and its centre-pointing acceleration arrow.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitSketch {
    pub size: f64,
    pub centre: SketchPoint,
    pub orbit_radius: f64,
    pub body: SketchPoint,
    pub velocity_tip: SketchPoint,
    pub acceleration_tip: SketchPoint
}

impl OrbitSketch {
    pub fn new(orbit_radius: f64, speed: f64, size: f64) -> OrbitSketch {
        let theta = degrees_to_radians(BODY_ANGLE_DEGREES);
        let centre = SketchPoint { x: size / 2.0, y: size / 2.0 };
        let body = centre.offset(orbit_radius, theta);
        let arrow_length = (ARROW_SCALE * speed.abs()).max(MIN_ARROW_LENGTH);
        OrbitSketch {
            size,
            centre,
            orbit_radius,
            body,
            velocity_tip: body.offset(arrow_length, theta + std::f64::consts::FRAC_PI_2),
            acceleration_tip: body.offset(arrow_length, theta + std::f64::consts::PI)
        }
    }

    pub fn to_svg(&self) -> String {
        let line = to_hex(muted_brown());
        let orbit = to_hex(earth_tone_accent());
        format!(r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {size} {size}" width="{size}" height="{size}">
<defs>
<marker id="arrow" viewBox="0 0 10 10" refX="10" refY="5" markerWidth="6" markerHeight="6" orient="auto-start-reverse">
<path d="M 0 0 L 10 5 L 0 10 z" fill="{line}"/>
</marker>
</defs>
<circle cx="{cx:.1}" cy="{cy:.1}" r="{r:.1}" fill="none" stroke="{orbit}" stroke-width="3"/>
<circle cx="{cx:.1}" cy="{cy:.1}" r="4" fill="{line}"/>
<circle cx="{px:.1}" cy="{py:.1}" r="8" fill="{line}"/>
<line x1="{px:.1}" y1="{py:.1}" x2="{tx:.1}" y2="{ty:.1}" stroke="{line}" stroke-width="3" marker-end="url(#arrow)"/>
<line x1="{px:.1}" y1="{py:.1}" x2="{ax:.1}" y2="{ay:.1}" stroke="{orbit}" stroke-width="3" marker-end="url(#arrow)"/>
</svg>"##,
                size = self.size,
                line = line,
                orbit = orbit,
                cx = self.centre.x,
                cy = self.centre.y,
                r = self.orbit_radius,
                px = self.body.x,
                py = self.body.y,
                tx = self.velocity_tip.x,
                ty = self.velocity_tip.y,
                ax = self.acceleration_tip.x,
                ay = self.acceleration_tip.y)
    }
}

pub fn create_illustration<'a, Message: 'a>(sketch: &OrbitSketch, side: u16) -> Element<'a, Message> {
    Svg::new(Handle::from_memory(sketch.to_svg().into_bytes()))
        .width(Length::Units(side))
        .height(Length::Units(side))
        .into()
}

#[cfg(test)]
mod tests {
    use crate::ui::illustration::{orbit_radius_for, OrbitSketch, SKETCH_SIZE};

    const EPSILON: f64 = 1e-9;

    #[test]
    fn orbit_radius_is_capped() {
        assert!((orbit_radius_for(0.1) - 84.0).abs() < EPSILON);
        assert!((orbit_radius_for(0.5) - 100.0).abs() < EPSILON);
        assert_eq!(orbit_radius_for(1.5), 140.0);
        assert_eq!(orbit_radius_for(2.0), 140.0);
    }

    #[test]
    fn body_sits_on_orbit() {
        let sketch = OrbitSketch::new(120.0, 40.0, SKETCH_SIZE);
        let dx = sketch.body.x - sketch.centre.x;
        let dy = sketch.body.y - sketch.centre.y;
        assert!(((dx * dx + dy * dy).sqrt() - 120.0).abs() < EPSILON);
    }

    #[test]
    fn velocity_is_tangential() {
        let sketch = OrbitSketch::new(120.0, 40.0, SKETCH_SIZE);
        let radial = (sketch.body.x - sketch.centre.x, sketch.body.y - sketch.centre.y);
        let velocity = (sketch.velocity_tip.x - sketch.body.x, sketch.velocity_tip.y - sketch.body.y);
        assert!((radial.0 * velocity.0 + radial.1 * velocity.1).abs() < 1e-6);
        assert!(((velocity.0.powi(2) + velocity.1.powi(2)).sqrt() - 24.0).abs() < 1e-6);
    }

    #[test]
    fn acceleration_points_at_centre() {
        let sketch = OrbitSketch::new(120.0, 40.0, SKETCH_SIZE);
        let inward = (sketch.centre.x - sketch.body.x, sketch.centre.y - sketch.body.y);
        let acceleration = (sketch.acceleration_tip.x - sketch.body.x, sketch.acceleration_tip.y - sketch.body.y);
        let cross = inward.0 * acceleration.1 - inward.1 * acceleration.0;
        let dot = inward.0 * acceleration.0 + inward.1 * acceleration.1;
        assert!(cross.abs() < 1e-6);
        assert!(dot > 0.0);
    }

    #[test]
    fn slow_bodies_still_get_visible_arrows() {
        let sketch = OrbitSketch::new(100.0, 0.0, SKETCH_SIZE);
        let dx = sketch.velocity_tip.x - sketch.body.x;
        let dy = sketch.velocity_tip.y - sketch.body.y;
        assert!(((dx * dx + dy * dy).sqrt() - 12.0).abs() < 1e-6);
    }

    #[test]
    fn svg_markup() {
        let svg = OrbitSketch::new(100.0, 20.0, SKETCH_SIZE).to_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("r=\"100.0\""));
        assert!(svg.contains("cx=\"160.0\""));
        assert_eq!(svg.matches("<line").count(), 2);
    }
}
