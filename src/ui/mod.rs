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

mod colour;
mod concepts;
mod data;
mod elements;
mod illustration;
mod quiz;
mod settings;
mod simulation;
mod worksheet;

use std::path::PathBuf;
use concepts::ConceptsTab;
use quiz::{QuizMessage, QuizTab};
use settings::SettingsTab;
use simulation::{SimulationMessage, SimulationTab};
use worksheet::{WorksheetMessage, WorksheetTab};

use iced::{Element, Sandbox, Error, Settings, Background, Color, Padding, window};
use iced::widget::{Column, Text, Container};
use iced_aw::{TabLabel, Tabs};
use iced::alignment::{Horizontal, Vertical};
use iced::Theme;
use iced_aw::style::tab_bar::Appearance;
use iced_aw::style::TabBarStyles;
use iced_aw::tab_bar::StyleSheet;
use tracing::{span, Level, info, error};
use rfd::FileDialog;
use crate::settings::{get_default_worksheet_export_path, Setting};
use crate::ui::colour::{earth_tone_accent, earth_tone_card, muted_brown};
use crate::ui::data::ApplicationData;

const HEADER_SIZE: u16 = 32;
const TAB_PADDING: u16 = 16;

pub fn launch() -> Result<(), Error> {
    UIMain::run(Settings {
        window: window::Settings {
            size: (1200, 820),
            ..window::Settings::default()
        },
        ..Settings::default()
    })
}

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(usize),
    Simulation(SimulationMessage),
    Quiz(QuizMessage),
    Worksheet(WorksheetMessage),
    RequestPathSelect(Setting),
    CopySettingToClipboard(Setting),
    RevertSettingToDefault(Setting)
}

/// The default appearance of a [`TabBar`](crate::native::TabBar).
#[derive(Clone, Copy, Debug)]
pub struct CustomStyleSheet;

impl StyleSheet for CustomStyleSheet {
    type Style = Theme;

    fn active(&self, _style: &Self::Style, is_active: bool) -> Appearance {
        Appearance {
            background: Some(Background::Color(earth_tone_accent())),
            border_color: None,
            border_width: 0.0,
            tab_label_background: if is_active {
                Background::Color(earth_tone_card())
            } else {
                Background::Color(earth_tone_accent())
            },
            tab_label_border_color: muted_brown(),
            tab_label_border_width: 1.0,
            icon_color: if is_active {
                Color::BLACK
            } else {
                muted_brown()
            },
            text_color: if is_active {
                Color::BLACK
            } else {
                muted_brown()
            },
        }
    }

    fn hovered(&self, style: &Self::Style, is_active: bool) -> Appearance {
        Appearance {
            tab_label_background: Background::Color(muted_brown()),
            text_color: Color::WHITE,
            ..self.active(style, is_active)
        }
    }
}

pub struct UIMain {
    app_data: ApplicationData,
    active_tab: usize,
    concepts_tab: ConceptsTab,
    simulation_tab: SimulationTab,
    worksheet_tab: WorksheetTab,
    quiz_tab: QuizTab,
    settings_tab: SettingsTab
}

impl UIMain {
    pub fn notify_app_data_update(&mut self, update_event: &Message) {
        match self.app_data.settings.write() {
            Ok(_) => { info!("Wrote settings successfully"); }
            Err(e) => { error!("Failed to write settings. {}", e.to_string()); }
        }
        self.worksheet_tab.app_data_update(&self.app_data, update_event);
    }

    fn select_path(&self, setting: Setting) -> Option<PathBuf> {
        match setting {
            Setting::WorksheetExportPath => {
                let start = self.app_data.get_worksheet_export_path().unwrap_or_else(get_default_worksheet_export_path);
                FileDialog::new()
                    .set_directory(&start)
                    .pick_folder()
            }
            Setting::QuestionBankPath => {
                let start = self.app_data.get_question_bank_path()
                    .and_then(|path| path.parent().map(|p| p.to_path_buf()))
                    .unwrap_or_else(get_default_worksheet_export_path);
                FileDialog::new()
                    .set_directory(&start)
                    .add_filter("Question bank", &["toml"])
                    .pick_file()
            }
        }
    }
}

impl Sandbox for UIMain {
    type Message = Message;

    fn new() -> Self {
        span!(Level::INFO, "Creating UIMain");
        let app_data = ApplicationData::new();
        info!("Initialised application data successfully");
        let concepts_tab = ConceptsTab::new();
        info!("Created concepts tab");
        let simulation_tab = SimulationTab::new();
        info!("Created simulation tab");
        let worksheet_tab = WorksheetTab::new();
        info!("Created worksheet tab");
        let quiz_tab = QuizTab::new();
        info!("Created quiz tab");
        let settings_tab = SettingsTab::new();
        info!("Created settings tab");
        UIMain {
            app_data,
            active_tab: 0,
            concepts_tab,
            simulation_tab,
            worksheet_tab,
            quiz_tab,
            settings_tab
        }
    }

    fn title(&self) -> String {
        String::from("Circular Motion Lab")
    }

    fn update(&mut self, message: Self::Message) {
        match message {
            Message::TabSelected(selected) => self.active_tab = selected,
            Message::Simulation(message) => self.simulation_tab.update(message, &mut self.app_data),
            Message::Quiz(message) => self.quiz_tab.update(message, &mut self.app_data),
            Message::Worksheet(message) => self.worksheet_tab.update(message, &self.app_data),
            Message::RequestPathSelect(setting) => {
                if let Some(path) = self.select_path(setting) {
                    match setting {
                        Setting::WorksheetExportPath => self.app_data.update_worksheet_export_path(path),
                        Setting::QuestionBankPath => self.app_data.update_question_bank_path(path)
                    }
                    self.notify_app_data_update(&message);
                }
            }
            Message::CopySettingToClipboard(setting) => {
                let value = self.app_data.settings.raw_value(setting).to_string();
                match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(value)) {
                    Ok(_) => info!("Copied {} to clipboard", setting.friendly_name()),
                    Err(e) => error!("Failed to copy {} to clipboard. {}", setting.friendly_name(), e.to_string())
                }
            }
            Message::RevertSettingToDefault(setting) => {
                self.app_data.revert_setting_to_default(setting);
                self.notify_app_data_update(&message);
            }
        }
    }

    fn view(&self) -> Element<'_, Self::Message> {
        Tabs::new(self.active_tab, Message::TabSelected)
            .push(
                self.concepts_tab.tab_label(),
                self.concepts_tab.view(&self.app_data)
            )
            .push(
                self.simulation_tab.tab_label(),
                self.simulation_tab.view(&self.app_data)
            )
            .push(
                self.worksheet_tab.tab_label(),
                self.worksheet_tab.view(&self.app_data)
            )
            .push(
                self.quiz_tab.tab_label(),
                self.quiz_tab.view(&self.app_data)
            )
            .push(
                self.settings_tab.tab_label(),
                self.settings_tab.view(&self.app_data)
            )
            .tab_bar_style(TabBarStyles::Custom(Box::new(CustomStyleSheet)))
            .tab_bar_position(iced_aw::TabBarPosition::Top)
            .into()
    }
}


trait Tab {
    type Message;

    fn title(&self) -> String;

    fn tab_label(&self) -> TabLabel;

    fn view<'a, 'b>(
        &'a self,
        app_data: &'b ApplicationData
    ) -> Element<'_, Self::Message>
    where 'b: 'a
    {
        let column = Column::new()
            .spacing(5)
            .push(Text::new(self.title()).size(HEADER_SIZE))
            .push(self.content(app_data));

        Container::new(column)
            .align_x(Horizontal::Left)
            .align_y(Vertical::Top)
            .padding(Padding::from([TAB_PADDING*2, TAB_PADDING, TAB_PADDING, TAB_PADDING]))
            .into()
    }

    fn content<'a, 'b>(
        &'a self,
        app_data: &'b ApplicationData
    ) -> Element<'_, Self::Message>
    where 'b: 'a;
}
