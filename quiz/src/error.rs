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

use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuizError>;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("io error")]
    IoError(#[from] io::Error),
    #[error("question bank decode error. {0}")]
    DecodeError(#[from] toml::de::Error),
    #[error("question bank contains no questions")]
    EmptyBank,
    #[error("question id `{0}` is used more than once")]
    DuplicateId(u32),
    #[error("invalid question `{id}`. {reason}")]
    InvalidQuestion {
        id: u32,
        reason: String
    }
}
