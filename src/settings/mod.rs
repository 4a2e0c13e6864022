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

use std::{env, fs};
use std::path::{Path, PathBuf};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Setting {
    WorksheetExportPath,
    QuestionBankPath
}

impl Setting {
    pub fn all() -> [Setting; 2] {
        [Setting::WorksheetExportPath, Setting::QuestionBankPath]
    }

    pub fn friendly_name(&self) -> &'static str {
        match self {
            Setting::WorksheetExportPath => "Worksheet export folder",
            Setting::QuestionBankPath => "Quiz question bank"
        }
    }
}

pub fn get_default_worksheet_export_path() -> PathBuf {
    UserDirs::new()
        .and_then(|dirs| dirs.document_dir().map(Path::to_path_buf))
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GlobalSettings {
    worksheet_export_path: String,
    /// Empty means the built-in question bank
    question_bank_path: String
}

impl GlobalSettings {
    const WORKSHEET_EXPORT_PATH: &'static str = "worksheet_export_path";
    const QUESTION_BANK_PATH: &'static str = "question_bank_path";
    const CONFIG_FILENAME: &'static str = "circular-motion-lab-conf";

    fn with_defaults(builder: ConfigBuilder<DefaultState>) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        builder
            .set_default(GlobalSettings::WORKSHEET_EXPORT_PATH, get_default_worksheet_export_path().to_string_lossy().into_owned())?
            .set_default(GlobalSettings::QUESTION_BANK_PATH, String::new())
    }

    pub fn load() -> Result<Self, ConfigError> {
        let builder = GlobalSettings::with_defaults(Config::builder())?;
        return match builder
            .add_source(config::File::with_name(GlobalSettings::CONFIG_FILENAME))
            .add_source(config::Environment::with_prefix("APP"))
            .build() {
            Ok(settings) => {
                settings.try_deserialize()
            }
            Err(e) => {
                warn!("Failed to load settings. {}", e.to_string());
                let settings = GlobalSettings::with_defaults(Config::builder())?.build()?;
                let ret: GlobalSettings = settings.try_deserialize()?;
                ret.write().unwrap_or_else(|e| { error!("Failed to write settings. {}", e.to_string())});
                Ok(ret)
            }
        }
    }

    pub fn worksheet_export_path(&self) -> Option<PathBuf> {
        let path = PathBuf::from(&self.worksheet_export_path);
        if path.is_dir() {
            return Some(path);
        }
        None
    }

    pub fn set_worksheet_export_path(&mut self, new_path: &Path) {
        self.worksheet_export_path = new_path.to_string_lossy().into_owned();
    }

    /// The configured bank file, or `None` to use the built-in bank
    pub fn question_bank_path(&self) -> Option<PathBuf> {
        if self.question_bank_path.trim().is_empty() {
            return None;
        }
        Some(PathBuf::from(&self.question_bank_path))
    }

    pub fn set_question_bank_path(&mut self, new_path: &Path) {
        self.question_bank_path = new_path.to_string_lossy().into_owned();
    }

    pub fn raw_value(&self, setting: Setting) -> &str {
        match setting {
            Setting::WorksheetExportPath => &self.worksheet_export_path,
            Setting::QuestionBankPath => &self.question_bank_path
        }
    }

    pub fn revert_to_default(&mut self, setting: Setting) {
        match setting {
            Setting::WorksheetExportPath => {
                self.worksheet_export_path = get_default_worksheet_export_path().to_string_lossy().into_owned()
            }
            Setting::QuestionBankPath => self.question_bank_path.clear()
        }
    }

    pub fn write(&self) -> std::io::Result<()> {
        fs::write(format!("{}.toml", GlobalSettings::CONFIG_FILENAME), toml::to_string(&self).map_err(|_e|{
            std::io::Error::new(std::io::ErrorKind::Other, "Failed to encode settings to toml")
        })?)
    }
}

impl Default for GlobalSettings {
    fn default() -> Self {
        GlobalSettings {
            worksheet_export_path: get_default_worksheet_export_path().to_string_lossy().into_owned(),
            question_bank_path: String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use config::{Config, FileFormat};
    use crate::settings::{get_default_worksheet_export_path, GlobalSettings, Setting};

    fn from_toml(toml_str: &str) -> GlobalSettings {
        GlobalSettings::with_defaults(Config::builder())
            .unwrap()
            .add_source(config::File::from_str(toml_str, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn defaults_fill_missing_values() {
        let settings = from_toml("");
        assert_eq!(settings, GlobalSettings::default());
        assert_eq!(settings.question_bank_path(), None);
        assert_eq!(settings.raw_value(Setting::WorksheetExportPath),
                   get_default_worksheet_export_path().to_string_lossy());
    }

    #[test]
    fn file_values_override_defaults() {
        let settings = from_toml("question_bank_path = \"banks/extra.toml\"");
        assert_eq!(settings.question_bank_path(), Some(PathBuf::from("banks/extra.toml")));
    }

    #[test]
    fn round_trips_through_toml() {
        let mut settings = GlobalSettings::default();
        settings.set_question_bank_path(Path::new("bank.toml"));
        let encoded = toml::to_string(&settings).unwrap();
        assert_eq!(from_toml(&encoded), settings);
    }

    #[test]
    fn revert() {
        let mut settings = GlobalSettings::default();
        settings.set_question_bank_path(Path::new("bank.toml"));
        settings.set_worksheet_export_path(Path::new("somewhere/else"));
        for setting in Setting::all() {
            settings.revert_to_default(setting);
        }
        assert_eq!(settings, GlobalSettings::default());
    }

    #[test]
    fn missing_export_folder_is_not_valid() {
        let mut settings = GlobalSettings::default();
        settings.set_worksheet_export_path(Path::new("/this/folder/does/not/exist"));
        assert_eq!(settings.worksheet_export_path(), None);
    }
}
