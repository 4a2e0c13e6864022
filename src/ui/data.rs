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

use std::path::PathBuf;
use quiz::QuestionBank;
use tracing::{error, info, warn};
use crate::session::{Session, SessionEvent};
use crate::settings::{GlobalSettings, Setting};

/// Loads the configured question bank, falling back to the built-in one. Also returns a
/// line describing which bank is in use.
fn load_question_bank(settings: &GlobalSettings) -> (QuestionBank, String) {
    match settings.question_bank_path() {
        None => {
            info!("Using built-in question bank");
            (QuestionBank::standard(), "Using the built-in question bank".to_string())
        }
        Some(path) => match QuestionBank::load(&path) {
            Ok(bank) => {
                let status = format!("Loaded {} questions from {}", bank.len(), path.display());
                (bank, status)
            }
            Err(e) => {
                error!("Failed to load question bank {}. {}", path.display(), e.to_string());
                (QuestionBank::standard(),
                 format!("Couldn't load {}: {}. Using the built-in question bank", path.display(), e))
            }
        }
    }
}

pub struct ApplicationData {
    pub(crate) settings: GlobalSettings,
    pub(crate) session: Session,
    pub(crate) bank_status: String
}

impl ApplicationData {
    pub(crate) fn new() -> ApplicationData {
        let settings = GlobalSettings::load().unwrap_or_else(|e| {
            warn!("Failed to load settings. {}", e.to_string());
            GlobalSettings::default()
        });
        match settings.worksheet_export_path() {
            None => { info!("Worksheet export path not set") }
            Some(path) => { info!("Worksheet export path set to {}", path.display()) }
        }
        let (bank, bank_status) = load_question_bank(&settings);
        ApplicationData {
            settings,
            session: Session::new(bank),
            bank_status
        }
    }

    pub(crate) fn apply(&mut self, event: SessionEvent) {
        self.session = std::mem::take(&mut self.session).apply(event);
    }

    pub(crate) fn get_worksheet_export_path(&self) -> Option<PathBuf> {
        self.settings.worksheet_export_path()
    }

    pub(crate) fn update_worksheet_export_path(&mut self, new_path: PathBuf) {
        self.settings.set_worksheet_export_path(&new_path);
    }

    pub(crate) fn get_question_bank_path(&self) -> Option<PathBuf> {
        self.settings.question_bank_path()
    }

    pub(crate) fn update_question_bank_path(&mut self, new_path: PathBuf) {
        self.settings.set_question_bank_path(&new_path);
        self.reload_question_bank();
    }

    pub(crate) fn revert_setting_to_default(&mut self, setting: Setting) {
        self.settings.revert_to_default(setting);
        if setting == Setting::QuestionBankPath {
            self.reload_question_bank();
        }
    }

    fn reload_question_bank(&mut self) {
        let (bank, status) = load_question_bank(&self.settings);
        self.session = std::mem::take(&mut self.session).with_bank(bank);
        self.bank_status = status;
    }
}
