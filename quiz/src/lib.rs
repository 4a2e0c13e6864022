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

mod answer;
mod bank;
mod error;
mod grade;
mod question;

pub use answer::{Answer, AnswerSet};
pub use bank::QuestionBank;
pub use error::{QuizError, Result};
pub use grade::{grade, QuestionOutcome, ScoreResult};
pub use question::{MultipleChoiceQuestion, NumericEntryQuestion, Question};
