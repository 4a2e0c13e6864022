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

mod session;
mod settings;
mod ui;
mod worksheet;

use std::env;
use tracing_subscriber;
use tracing_appender;
use tracing::{info};


fn main() -> Result<(), iced::Error> {
    match env::current_dir() {
        Ok(current_dir) => {
            let file_appender = tracing_appender::rolling::never(current_dir, "circular_motion_lab.log");
            let subscriber = tracing_subscriber::fmt()
                .with_writer(file_appender)
                .with_ansi(false)
                .compact()
                .finish();
            match tracing::subscriber::set_global_default(subscriber) {
                Ok(_) => {
                    info!("Logging initialised");
                }
                Err(e) => {
                    eprintln!("Failed to init logging. {}", e.to_string());
                }
            }
        }
        Err(e) => {
            eprintln!("Failed to init logging. Couldn't determine current dir {}", e.to_string());
        }
    }

    info!("Launching UI");
    ui::launch()
}
