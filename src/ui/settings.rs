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
use super::{Message, Tab};
use iced::{Alignment, Element, Padding, theme};
use iced::widget::{Button, Column, Container, Row, Text};
use iced_aw::{TabLabel};
use crate::settings::Setting;
use crate::ui::{ApplicationData};
use crate::ui::colour::{fail_red, success_green};

#[derive(Default)]
pub struct SettingsTab {

}

impl Setting {
    fn create_path_select<'a>(&self, app_data: &ApplicationData) -> Column<'a, Message> {
        let (value, state) = match &self {
            Setting::WorksheetExportPath => {
                match app_data.get_worksheet_export_path() {
                    Some(path) => (format!("{}", path.display()), PathState::Ok),
                    None => (app_data.settings.raw_value(*self).to_string(), PathState::Missing)
                }
            }
            Setting::QuestionBankPath => {
                match app_data.get_question_bank_path() {
                    None => ("Built-in".to_string(), PathState::Ok),
                    Some(path) if path.is_file() => (format!("{}", path.display()), PathState::Ok),
                    Some(path) => (format!("{}", path.display()), PathState::Missing)
                }
            }
        };
        let aux_text = match self {
            Setting::QuestionBankPath => Some(app_data.bank_status.clone()),
            Setting::WorksheetExportPath => None
        };
        create_path_select(*self, self.friendly_name(), value, state, aux_text)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum PathState {
    Ok,
    Missing
}

impl SettingsTab {
    pub(crate) fn new() -> Self {
        SettingsTab {
            ..Default::default()
        }
    }
}

impl Tab for SettingsTab {
    type Message = Message;

    fn title(&self) -> String {
        String::from("Settings")
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
        let selectors = Setting::all().into_iter().fold(Column::new().spacing(25), |column, setting| {
            column.push(setting.create_path_select(app_data).padding(Padding::from([0, 3, 0, 3])))
        });
        let container : Container<'_, Message> = Container::new(selectors.padding(Padding::from([15, 0, 0, 0])));
        container.into()
    }
}

fn create_path_select<'a>(setting: Setting,
                          title: &str,
                          current_val: String,
                          state: PathState,
                          aux_text: Option<String>) -> Column<'a, Message> {
    let select =
        Button::new( Text::new("Browse"))
            .on_press(Message::RequestPathSelect(setting));
    let copy =
        Button::new(Text::new("Copy"))
            .on_press(Message::CopySettingToClipboard(setting));
    let default=
        Button::new( Text::new("Revert to default")).style(theme::Button::Destructive)
            .on_press(Message::RevertSettingToDefault(setting));

    let marker = match state {
        PathState::Ok => Text::new("(ok)").style(success_green()),
        PathState::Missing => Text::new("(not found)").style(fail_red())
    };

    let val_row = Row::new()
        .align_items(Alignment::Center)
        .spacing(6)
        .push(Text::new(current_val))
        .push(marker);

    let mut column = Column::new()
        .align_items(Alignment::Start)
        .spacing(5)
        .push(Text::new(title.to_string()).size(24))
        .push(val_row);
    if let Some(text) = aux_text {
        column = column.push(Text::new(text).size(14));
    }
    column.push(Row::new().spacing(5).push(select).push(copy).push(default))
}
