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

use std::collections::BTreeMap;

/// A learner's response to a single question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Index of the selected option of a multiple-choice question
    Choice(usize),
    /// Raw text typed into a numeric-entry question
    Text(String)
}

/// The learner's current answers keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    answers: BTreeMap<u32, Answer>
}

impl AnswerSet {
    pub fn new() -> AnswerSet {
        AnswerSet::default()
    }

    pub fn record(&mut self, question_id: u32, answer: Answer) {
        self.answers.insert(question_id, answer);
    }

    pub fn get(&self, question_id: u32) -> Option<&Answer> {
        self.answers.get(&question_id)
    }

    pub fn choice(&self, question_id: u32) -> Option<usize> {
        match self.get(question_id) {
            Some(Answer::Choice(choice)) => Some(*choice),
            _ => None
        }
    }

    pub fn text(&self, question_id: u32) -> Option<&str> {
        match self.get(question_id) {
            Some(Answer::Text(text)) => Some(text.as_str()),
            _ => None
        }
    }

    pub fn clear(&mut self) {
        self.answers.clear()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::answer::{Answer, AnswerSet};

    #[test]
    fn record_and_replace() {
        let mut answers = AnswerSet::new();
        answers.record(1, Answer::Choice(2));
        answers.record(2, Answer::Text("2.5".to_string()));
        assert_eq!(answers.len(), 2);
        assert_eq!(answers.choice(1), Some(2));
        assert_eq!(answers.text(2), Some("2.5"));

        answers.record(1, Answer::Choice(0));
        assert_eq!(answers.choice(1), Some(0));
        assert_eq!(answers.len(), 2);
    }

    #[test]
    fn typed_accessors_dont_cross_kinds() {
        let mut answers = AnswerSet::new();
        answers.record(1, Answer::Choice(2));
        answers.record(2, Answer::Text("3".to_string()));
        assert_eq!(answers.text(1), None);
        assert_eq!(answers.choice(2), None);
        assert_eq!(answers.choice(99), None);
    }

    #[test]
    fn clear() {
        let mut answers = AnswerSet::new();
        answers.record(4, Answer::Choice(1));
        answers.clear();
        assert!(answers.is_empty());
        assert_eq!(answers.get(4), None);
    }
}
