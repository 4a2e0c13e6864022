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

use utils::numeric::percentage_half_up;
use crate::answer::AnswerSet;
use crate::question::Question;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionOutcome {
    pub question_id: u32,
    pub correct: bool
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub correct: usize,
    pub total: usize,
    /// `100 * correct / total` rounded half-up
    pub percent: u32,
    /// One entry per question in bank order
    pub outcomes: Vec<QuestionOutcome>
}

impl ScoreResult {
    pub fn outcome_for(&self, question_id: u32) -> Option<bool> {
        self.outcomes.iter().find(|o| o.question_id == question_id).map(|o| o.correct)
    }

    pub fn summary(&self) -> String {
        format!("{}/{} ({}%)", self.correct, self.total, self.percent)
    }
}

/// Scores `answers` against `questions`. Unanswered and malformed answers count as
/// incorrect; grading never fails and has no side effects.
pub fn grade(questions: &[Question], answers: &AnswerSet) -> ScoreResult {
    let outcomes: Vec<QuestionOutcome> = questions.iter().map(|question| {
        QuestionOutcome {
            question_id: question.id(),
            correct: question.is_correct(answers.get(question.id()))
        }
    }).collect();
    let correct = outcomes.iter().filter(|o| o.correct).count();
    let total = questions.len();
    ScoreResult {
        correct,
        total,
        percent: percentage_half_up(correct, total),
        outcomes
    }
}

#[cfg(test)]
mod tests {
    use crate::answer::{Answer, AnswerSet};
    use crate::bank::QuestionBank;
    use crate::grade::grade;
    use crate::question::{NumericEntryQuestion, Question};

    fn text(s: &str) -> Answer {
        Answer::Text(s.to_string())
    }

    fn all_correct() -> AnswerSet {
        let mut answers = AnswerSet::new();
        answers.record(1, Answer::Choice(1));
        answers.record(2, text("2.5"));
        answers.record(3, Answer::Choice(2));
        answers.record(4, Answer::Choice(2));
        answers.record(5, text("3"));
        answers
    }

    #[test]
    fn no_answers_scores_zero() {
        let bank = QuestionBank::standard();
        let score = grade(bank.questions(), &AnswerSet::new());
        assert_eq!(score.correct, 0);
        assert_eq!(score.total, 5);
        assert_eq!(score.percent, 0);
        assert!(score.outcomes.iter().all(|o| !o.correct));
    }

    #[test]
    fn perfect_score() {
        let bank = QuestionBank::standard();
        let score = grade(bank.questions(), &all_correct());
        assert_eq!(score.correct, 5);
        assert_eq!(score.percent, 100);
        assert_eq!(score.summary(), "5/5 (100%)");
    }

    #[test]
    fn frequency_from_period() {
        let bank = QuestionBank::standard();
        let mut answers = AnswerSet::new();
        answers.record(2, text("2.5"));
        let score = grade(bank.questions(), &answers);
        assert_eq!(score.outcome_for(2), Some(true));
        assert_eq!(score.correct, 1);
        assert_eq!(score.percent, 20);

        answers.record(2, text("2.3"));
        let score = grade(bank.questions(), &answers);
        assert_eq!(score.outcome_for(2), Some(false));
        assert_eq!(score.correct, 0);
    }

    #[test]
    fn linear_velocity_from_angular_velocity() {
        let bank = QuestionBank::standard();
        let mut answers = AnswerSet::new();
        answers.record(5, text("3"));
        assert_eq!(grade(bank.questions(), &answers).outcome_for(5), Some(true));
        answers.record(5, text("3.02"));
        assert_eq!(grade(bank.questions(), &answers).outcome_for(5), Some(true));
        answers.record(5, text("3.05"));
        assert_eq!(grade(bank.questions(), &answers).outcome_for(5), Some(false));
        answers.record(5, text("abc"));
        assert_eq!(grade(bank.questions(), &answers).outcome_for(5), Some(false));
    }

    #[test]
    fn wrong_choices_score_incorrect() {
        let bank = QuestionBank::standard();
        let mut answers = all_correct();
        answers.record(1, Answer::Choice(2));
        answers.record(3, Answer::Choice(3));
        let score = grade(bank.questions(), &answers);
        assert_eq!(score.correct, 3);
        assert_eq!(score.percent, 60);
        assert_eq!(score.outcome_for(1), Some(false));
        assert_eq!(score.outcome_for(3), Some(false));
        assert_eq!(score.outcome_for(4), Some(true));
    }

    #[test]
    fn answers_for_unknown_questions_are_ignored() {
        let bank = QuestionBank::standard();
        let mut answers = all_correct();
        answers.record(42, Answer::Choice(0));
        let score = grade(bank.questions(), &answers);
        assert_eq!(score.correct, 5);
        assert_eq!(score.total, 5);
        assert_eq!(score.outcome_for(42), None);
    }

    #[test]
    fn grading_is_idempotent() {
        let bank = QuestionBank::standard();
        let mut answers = all_correct();
        answers.record(2, text("nope"));
        let before = answers.clone();
        let first = grade(bank.questions(), &answers);
        let second = grade(bank.questions(), &answers);
        assert_eq!(first, second);
        assert_eq!(answers, before);
    }

    #[test]
    fn outcomes_follow_bank_order() {
        let bank = QuestionBank::standard();
        let score = grade(bank.questions(), &all_correct());
        let ids: Vec<u32> = score.outcomes.iter().map(|o| o.question_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn percent_rounds_half_up() {
        let questions: Vec<Question> = (1..=8).map(|id| {
            Question::NumericEntry(NumericEntryQuestion {
                id,
                prompt: format!("Type {}", id),
                expected: id as f64,
                tolerance: None,
                explanation: String::new()
            })
        }).collect();
        let mut answers = AnswerSet::new();
        answers.record(1, text("1"));
        let score = grade(&questions, &answers);
        assert_eq!(score.correct, 1);
        assert_eq!(score.percent, 13);

        answers.record(2, text("2"));
        answers.record(3, text("3"));
        let score = grade(&questions, &answers);
        assert_eq!(score.correct, 3);
        assert_eq!(score.percent, 38);
    }

    #[test]
    fn empty_question_list() {
        let score = grade(&[], &AnswerSet::new());
        assert_eq!(score.total, 0);
        assert_eq!(score.percent, 0);
    }
}
