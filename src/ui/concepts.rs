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

use iced::{Alignment, Element, Length};
use iced::widget::{Column, Row, Text};
use iced_aw::TabLabel;
use super::{Message, Tab};
use crate::ui::ApplicationData;
use crate::ui::elements::{create_bullet_list, create_card, create_titled_card, SECTION_TITLE_SIZE, SMALL_TEXT_SIZE};
use crate::ui::illustration::{create_illustration, OrbitSketch, SKETCH_SIZE};

const CONCEPT_SUMMARY: [&str; 5] = [
    "Uniform circular motion: constant angular velocity (ω) and constant |v|, but the direction of v keeps changing.",
    "Basic relations: ω = 2πf, T = 1/f, v = ωr = 2πrf.",
    "Acceleration towards the centre (normal): aₙ = v²/r = ω²r.",
    "Centripetal force: F = mv²/r = mω²r.",
    "Examples: a car on a circular bend, an orbiting satellite, a spinning wheel."
];

const SI_UNITS: &str = "SI units: r (m), f (Hz), T (s), ω (rad/s), v (m/s), aₙ (m/s²), F (N), m (kg).";

const ILLUSTRATION_CAPTION: &str = "v is tangent to the path and aₙ points to the centre. In uniform circular \
motion the size of v stays the same but its direction changes, so there is an aₙ and a centripetal force is needed.";

const TOPIC_CARDS: [(&str, &str); 3] = [
    ("Relating ω, f and T", "ω = 2πf and T = 1/f. If f doubles, ω doubles too and T halves."),
    ("Linear velocity v", "v = ωr. For fixed r, v is proportional to ω; for fixed ω, v ∝ r."),
    ("Acceleration & force", "aₙ = v²/r; F = mv²/r. The faster the motion or the smaller r, the larger aₙ and F.")
];

const ILLUSTRATION_RADIUS: f64 = 120.0;
const ILLUSTRATION_SPEED: f64 = 8.0;

pub struct ConceptsTab {
    sketch: OrbitSketch
}

impl ConceptsTab {
    pub(crate) fn new() -> Self {
        ConceptsTab {
            sketch: OrbitSketch::new(ILLUSTRATION_RADIUS, ILLUSTRATION_SPEED, SKETCH_SIZE)
        }
    }
}

impl Tab for ConceptsTab {
    type Message = Message;

    fn title(&self) -> String {
        String::from("Concepts")
    }

    fn tab_label(&self) -> TabLabel {
        TabLabel::Text(self.title())
    }

    fn content<'a, 'b>(
        &'a self,
        _app_data: &'b ApplicationData
    ) -> Element<'_, Self::Message>
    where 'b: 'a
    {
        let summary = create_card(
            Column::new()
                .spacing(10)
                .push(Text::new("Concept summary").size(SECTION_TITLE_SIZE))
                .push(create_bullet_list(&CONCEPT_SUMMARY))
                .push(Text::new(SI_UNITS).size(SMALL_TEXT_SIZE))
        );

        let illustration = create_card(
            Column::new()
                .spacing(10)
                .align_items(Alignment::Center)
                .push(create_illustration(&self.sketch, 220))
                .push(Text::new(ILLUSTRATION_CAPTION).size(SMALL_TEXT_SIZE))
        );

        let topics = TOPIC_CARDS.iter().fold(Row::new().spacing(16), |row, (title, body)| {
            row.push(create_titled_card(title, body))
        });

        Column::new()
            .spacing(16)
            .width(Length::Fill)
            .push(Row::new().spacing(16).push(summary).push(illustration))
            .push(topics)
            .into()
    }
}
