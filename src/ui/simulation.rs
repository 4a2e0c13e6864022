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
use iced::widget::{Button, Column, Row, Text};
use iced_aw::TabLabel;
use circular_motion::{Parameter, Quantity};
use super::{Message, Tab};
use crate::session::SessionEvent;
use crate::ui::ApplicationData;
use crate::ui::elements::{create_card, create_parameter_slider, create_quantity_row, SECTION_TITLE_SIZE, SMALL_TEXT_SIZE};
use crate::ui::illustration::{create_illustration, orbit_radius_for, OrbitSketch, SKETCH_SIZE};

const ACCELERATION_NOTE: &str = "Note: aₙ increases as v grows or as r shrinks.";
const LEGEND: &str = "Dark arrow: v (tangent)    Light arrow: aₙ (towards the centre)";

#[derive(Debug, Clone)]
pub enum SimulationMessage {
    ParameterChanged(Parameter, f64),
    ResetPressed
}

impl SimulationMessage {
    fn into_session_event(self) -> SessionEvent {
        match self {
            SimulationMessage::ParameterChanged(parameter, value) => SessionEvent::ParameterChanged(parameter, value),
            SimulationMessage::ResetPressed => SessionEvent::ParametersReset
        }
    }
}

#[derive(Default)]
pub struct SimulationTab {}

impl SimulationTab {
    pub(crate) fn new() -> Self {
        SimulationTab {}
    }

    pub fn update(&mut self, message: SimulationMessage, app_data: &mut ApplicationData) {
        app_data.apply(message.into_session_event());
    }
}

impl Tab for SimulationTab {
    type Message = Message;

    fn title(&self) -> String {
        String::from("Simulation")
    }

    fn tab_label(&self) -> TabLabel {
        TabLabel::Text(self.title())
    }

    fn content<'a, 'b>(
        &'a self,
        app_data: &'b ApplicationData
    ) -> Element<'_, Self::Message>
    where 'b: 'a
    {
        let parameters = app_data.session.parameters();
        let derived = app_data.session.derived();

        let controls = Parameter::all().into_iter().fold(
            Column::new()
                .spacing(14)
                .push(Text::new("Controls").size(SECTION_TITLE_SIZE)),
            |column, parameter| column.push(create_parameter_slider(parameter, parameters.get(parameter)))
        ).push(
            Button::new(Text::new("Reset"))
                .style(theme::Button::Secondary)
                .on_press(Message::Simulation(SimulationMessage::ResetPressed))
        );

        let quantities = Quantity::all().into_iter().fold(
            Column::new().spacing(8),
            |column, quantity| column.push(create_quantity_row(quantity.label(), derived.get(quantity)))
        ).push(create_quantity_row("rpm".to_string(), derived.rotation_rate_rpm()));

        let sketch = OrbitSketch::new(orbit_radius_for(parameters.radius), derived.linear_velocity, SKETCH_SIZE);
        let output = Column::new()
            .spacing(12)
            .push(
                Row::new()
                    .spacing(16)
                    .align_items(Alignment::Center)
                    .push(create_illustration(&sketch, 240))
                    .push(quantities)
            )
            .push(Text::new(LEGEND).size(SMALL_TEXT_SIZE))
            .push(Text::new(ACCELERATION_NOTE).size(SMALL_TEXT_SIZE));

        Row::new()
            .spacing(16)
            .width(Length::Fill)
            .push(create_card(controls))
            .push(create_card(output))
            .into()
    }
}
