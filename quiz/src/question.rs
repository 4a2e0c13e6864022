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

use serde::{Deserialize, Serialize};
use crate::answer::Answer;
use crate::error::{QuizError, Result};

/// Slack added to numeric tolerances so that answers exactly on the boundary, like 2.49
/// for 2.5 ± 0.01, aren't rejected because of binary rounding of the decimal input.
const TOLERANCE_SLACK: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Question {
    MultipleChoice(MultipleChoiceQuestion),
    NumericEntry(NumericEntryQuestion)
}

impl Question {
    pub fn id(&self) -> u32 {
        match self {
            Question::MultipleChoice(q) => q.id,
            Question::NumericEntry(q) => q.id
        }
    }

    pub fn prompt(&self) -> &str {
        match self {
            Question::MultipleChoice(q) => &q.prompt,
            Question::NumericEntry(q) => &q.prompt
        }
    }

    pub fn explanation(&self) -> &str {
        match self {
            Question::MultipleChoice(q) => &q.explanation,
            Question::NumericEntry(q) => &q.explanation
        }
    }

    /// Whether `answer` is a correct response to this question. A missing answer, or one of
    /// the wrong kind, is never correct.
    pub fn is_correct(&self, answer: Option<&Answer>) -> bool {
        match self {
            Question::MultipleChoice(q) => q.accepts(answer),
            Question::NumericEntry(q) => q.accepts(answer)
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| QuizError::InvalidQuestion { id: self.id(), reason: reason.to_string() };
        if self.prompt().trim().is_empty() {
            return Err(invalid("prompt is empty"));
        }
        match self {
            Question::MultipleChoice(q) => {
                if q.options.len() < 2 {
                    return Err(invalid("needs at least 2 options"));
                }
                if q.correct_option >= q.options.len() {
                    return Err(invalid(&format!("correct option {} is out of range for {} options",
                                                q.correct_option, q.options.len())));
                }
            }
            Question::NumericEntry(q) => {
                if !q.expected.is_finite() {
                    return Err(invalid("expected answer must be a finite number"));
                }
                if let Some(tolerance) = q.tolerance {
                    if !tolerance.is_finite() || tolerance < 0.0 {
                        return Err(invalid("tolerance must be a finite, non-negative number"));
                    }
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultipleChoiceQuestion {
    pub id: u32,
    pub prompt: String,
    pub options: Vec<String>,
    /// Index into `options`
    pub correct_option: usize,
    pub explanation: String
}

impl MultipleChoiceQuestion {
    pub fn correct_option_text(&self) -> Option<&str> {
        self.options.get(self.correct_option).map(String::as_str)
    }

    fn accepts(&self, answer: Option<&Answer>) -> bool {
        match answer {
            Some(Answer::Choice(choice)) => *choice == self.correct_option,
            _ => false
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericEntryQuestion {
    pub id: u32,
    pub prompt: String,
    pub expected: f64,
    #[serde(default)]
    pub tolerance: Option<f64>,
    pub explanation: String
}

impl NumericEntryQuestion {
    pub const DEFAULT_TOLERANCE: f64 = 0.01;

    pub fn effective_tolerance(&self) -> f64 {
        self.tolerance.unwrap_or(NumericEntryQuestion::DEFAULT_TOLERANCE)
    }

    fn accepts(&self, answer: Option<&Answer>) -> bool {
        let text = match answer {
            Some(Answer::Text(text)) => text,
            _ => return false
        };
        match text.trim().parse::<f64>() {
            Ok(value) => (value - self.expected).abs() <= self.effective_tolerance() + TOLERANCE_SLACK,
            Err(_) => false
        }
    }
}
