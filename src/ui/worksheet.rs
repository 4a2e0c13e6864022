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
use iced::widget::{Button, Column, Container, Row, Scrollable, Text};
use iced_aw::TabLabel;
use rfd::FileDialog;
use tracing::error;
use super::{Message, Tab};
use crate::settings::get_default_worksheet_export_path;
use crate::ui::ApplicationData;
use crate::ui::elements::{create_card, BODY_TEXT_SIZE, SECTION_TITLE_SIZE};
use crate::worksheet::{copy_to_clipboard, export_to_folder, worksheet_filename, write_worksheet, WORKSHEET_FILE_EXTENSION, WORKSHEET_TEXT};

#[derive(Debug, Clone)]
pub enum WorksheetMessage {
    SavePressed,
    QuickSavePressed,
    CopyPressed
}

#[derive(Default)]
pub struct WorksheetTab {
    status_message: String
}

impl WorksheetTab {
    pub(crate) fn new() -> Self {
        WorksheetTab {
            status_message: String::new()
        }
    }

    pub fn update(&mut self, message: WorksheetMessage, app_data: &ApplicationData) {
        match message {
            WorksheetMessage::SavePressed => {
                let start_dir = app_data.get_worksheet_export_path().unwrap_or_else(get_default_worksheet_export_path);
                let chosen = FileDialog::new()
                    .set_directory(&start_dir)
                    .set_file_name(worksheet_filename())
                    .add_filter("Text", &[WORKSHEET_FILE_EXTENSION])
                    .save_file();
                let path = match chosen {
                    None => return,
                    Some(path) => path
                };
                match write_worksheet(&path) {
                    Ok(_) => self.update_status(format!("Saved worksheet to {}", path.display())),
                    Err(e) => {
                        error!("Failed to save worksheet to {}. {}", path.display(), e.to_string());
                        self.update_status(format!("Save failed: {}", e.to_string()));
                    }
                }
            }
            WorksheetMessage::QuickSavePressed => {
                let folder = match app_data.get_worksheet_export_path() {
                    None => {
                        self.update_status(String::from("Please set the worksheet export folder in the settings tab"));
                        return;
                    }
                    Some(folder) => folder
                };
                match export_to_folder(&folder) {
                    Ok(path) => self.update_status(format!("Saved worksheet to {}", path.display())),
                    Err(e) => {
                        error!("Failed to export worksheet to {}. {}", folder.display(), e.to_string());
                        self.update_status(format!("Save failed: {}", e.to_string()));
                    }
                }
            }
            WorksheetMessage::CopyPressed => {
                match copy_to_clipboard() {
                    Ok(_) => self.update_status(String::from("Worksheet copied to the clipboard")),
                    Err(e) => {
                        error!("Failed to copy worksheet. {}", e.to_string());
                        self.update_status(format!("Copy failed: {}", e.to_string()));
                    }
                }
            }
        }
    }

    pub fn app_data_update(&mut self, _app_data: &ApplicationData, update_event: &Message) {
        match update_event {
            Message::RequestPathSelect(_) | Message::RevertSettingToDefault(_) => self.status_message.clear(),
            _ => {}
        }
    }

    pub fn update_status(&mut self, status: String) {
        self.status_message = status;
    }
}

impl Tab for WorksheetTab {
    type Message = Message;

    fn title(&self) -> String {
        String::from("Worksheet")
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
        let document = Container::new(
            Scrollable::new(Text::new(WORKSHEET_TEXT).size(BODY_TEXT_SIZE)).height(Length::Fill)
        ).padding(12).width(Length::Fill).height(Length::Fill).style(theme::Container::Box);

        let actions = Row::new()
            .spacing(8)
            .align_items(Alignment::Center)
            .push(
                Button::new(Text::new("Save worksheet (TXT)"))
                    .style(theme::Button::Primary)
                    .on_press(Message::Worksheet(WorksheetMessage::SavePressed))
            )
            .push(
                Button::new(Text::new("Quick save to export folder"))
                    .style(theme::Button::Secondary)
                    .on_press(Message::Worksheet(WorksheetMessage::QuickSavePressed))
            )
            .push(
                Button::new(Text::new("Copy to clipboard"))
                    .style(theme::Button::Secondary)
                    .on_press(Message::Worksheet(WorksheetMessage::CopyPressed))
            );

        create_card(
            Column::new()
                .spacing(12)
                .push(Text::new("Student worksheet - Circular motion").size(SECTION_TITLE_SIZE))
                .push(document)
                .push(actions)
                .push(Text::new(self.status_message.as_str()))
        ).height(Length::Fill).into()
    }
}
