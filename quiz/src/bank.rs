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

use std::fs;
use std::path::Path;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::error::{QuizError, Result};
use crate::question::{MultipleChoiceQuestion, NumericEntryQuestion, Question};

#[derive(Debug, Serialize, Deserialize)]
struct BankFile {
    questions: Vec<Question>
}

/// An ordered, validated set of questions with unique ids.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionBank {
    questions: Vec<Question>
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<QuestionBank> {
        if questions.is_empty() {
            return Err(QuizError::EmptyBank);
        }
        if let Some(id) = questions.iter().map(Question::id).duplicates().next() {
            return Err(QuizError::DuplicateId(id));
        }
        for question in &questions {
            question.validate()?;
        }
        Ok(QuestionBank { questions })
    }

    /// The formative quiz that ships with the application.
    pub fn standard() -> QuestionBank {
        QuestionBank {
            questions: vec![
                Question::MultipleChoice(MultipleChoiceQuestion {
                    id: 1,
                    prompt: "An object moves in uniform circular motion with r = 0.5 m and f = 2 Hz. Its linear velocity v is...".to_string(),
                    options: ["π m/s", "2π m/s", "4π m/s", "8π m/s"].iter().map(|s| s.to_string()).collect(),
                    correct_option: 1,
                    explanation: "ω = 2πf = 2π × 2 = 4π rad/s, so v = ωr = 4π × 0.5 = 2π m/s.".to_string()
                }),
                Question::NumericEntry(NumericEntryQuestion {
                    id: 2,
                    prompt: "The period is T = 0.4 s. The frequency f = ____ Hz.".to_string(),
                    expected: 2.5,
                    tolerance: Some(0.01),
                    explanation: "f = 1/T = 1/0.4 = 2.5 Hz.".to_string()
                }),
                Question::MultipleChoice(MultipleChoiceQuestion {
                    id: 3,
                    prompt: "The normal acceleration aₙ for v = 10 m/s and r = 5 m is...".to_string(),
                    options: ["5 m/s²", "10 m/s²", "20 m/s²", "25 m/s²"].iter().map(|s| s.to_string()).collect(),
                    correct_option: 2,
                    explanation: "aₙ = v²/r = 100/5 = 20 m/s².".to_string()
                }),
                Question::MultipleChoice(MultipleChoiceQuestion {
                    id: 4,
                    prompt: "The centripetal force F for m = 2 kg, v = 6 m/s and r = 3 m is...".to_string(),
                    options: ["8 N", "12 N", "24 N", "36 N"].iter().map(|s| s.to_string()).collect(),
                    correct_option: 2,
                    explanation: "F = m v²/r = 2 × 36/3 = 24 N.".to_string()
                }),
                Question::NumericEntry(NumericEntryQuestion {
                    id: 5,
                    prompt: "A wheel has ω = 12 rad/s and r = 0.25 m. Its linear velocity v = ____ m/s.".to_string(),
                    expected: 3.0,
                    tolerance: Some(0.02),
                    explanation: "v = ωr = 12 × 0.25 = 3 m/s.".to_string()
                }),
            ]
        }
    }

    /// Parses a bank from TOML made up of `[[questions]]` tables, each tagged with
    /// `type = "multiple_choice"` or `type = "numeric_entry"`.
    pub fn from_toml_str(toml_str: &str) -> Result<QuestionBank> {
        let file: BankFile = toml::from_str(toml_str)?;
        QuestionBank::new(file.questions)
    }

    pub fn load(path: &Path) -> Result<QuestionBank> {
        let contents = fs::read_to_string(path)?;
        let bank = QuestionBank::from_toml_str(&contents)?;
        info!("Loaded {} questions from {}", bank.len(), path.display());
        Ok(bank)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        QuestionBank::standard()
    }
}
