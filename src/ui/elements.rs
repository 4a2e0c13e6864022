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

use iced::{theme, Alignment, Element, Length};
use iced::widget::{Column, Container, Row, Slider, Text};
use circular_motion::Parameter;
use utils::numeric::format_quantity;
use crate::ui::Message;
use crate::ui::simulation::SimulationMessage;

pub const SECTION_TITLE_SIZE: u16 = 22;
pub const BODY_TEXT_SIZE: u16 = 16;
pub const SMALL_TEXT_SIZE: u16 = 14;

pub fn create_parameter_slider<'a>(parameter: Parameter, value: f64) -> Column<'a, Message> {
    let range = parameter.range();
    let slider = Slider::new(
        range.as_range(),
        value,
        move |new_value| Message::Simulation(SimulationMessage::ParameterChanged(parameter, new_value))
    ).step(range.step).width(Length::Fill);
    Column::new()
        .align_items(Alignment::Start)
        .spacing(4)
        .push(Text::new(format!("{} - {}", parameter.friendly_name(), parameter)))
        .push(slider)
        .push(Text::new(format!("{} {}", format_quantity(value), parameter.unit())).size(SMALL_TEXT_SIZE))
}

pub fn create_quantity_row<'a>(label: String, value: f64) -> Row<'a, Message> {
    Row::new()
        .spacing(12)
        .align_items(Alignment::Center)
        .push(Text::new(label).width(Length::Units(110)))
        .push(Text::new(format_quantity(value)))
}

pub fn create_bullet_list<'a>(items: &[&str]) -> Column<'a, Message> {
    items.iter().fold(Column::new().spacing(6), |column, item| {
        column.push(Text::new(format!("• {}", item)).size(BODY_TEXT_SIZE))
    })
}

pub fn create_card<'a>(content: impl Into<Element<'a, Message>>) -> Container<'a, Message> {
    Container::new(content)
        .padding(16)
        .width(Length::Fill)
        .style(theme::Container::Box)
}

pub fn create_titled_card<'a>(title: &str, body: &str) -> Container<'a, Message> {
    create_card(
        Column::new()
            .spacing(8)
            .push(Text::new(title.to_string()).size(SECTION_TITLE_SIZE))
            .push(Text::new(body.to_string()).size(BODY_TEXT_SIZE))
    )
}
