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

use circular_motion::{DerivedQuantities, Parameter, SimulationParameters};
use quiz::{grade, Answer, AnswerSet, Question, QuestionBank, ScoreResult};
use tracing::{info, span, warn, Level};
use utils::numeric::round_float_to;

/// Decimal places slider values are snapped to, matching the 0.01 slider step
const PARAMETER_DECIMAL_PLACES: u32 = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    ParameterChanged(Parameter, f64),
    ParametersReset,
    OptionSelected { question_id: u32, option: usize },
    NumericEntered { question_id: u32, text: String },
    QuizGraded,
    QuizReset
}

/// Everything a learner has done in this run of the application. The only way to change
/// it is [Session::apply].
#[derive(Debug, Clone, Default)]
pub struct Session {
    parameters: SimulationParameters,
    bank: QuestionBank,
    answers: AnswerSet,
    score: Option<ScoreResult>
}

impl Session {
    pub fn new(bank: QuestionBank) -> Session {
        Session {
            parameters: SimulationParameters::default(),
            bank,
            answers: AnswerSet::new(),
            score: None
        }
    }

    /// Swaps the question bank. Quiz progress belongs to the old bank so it is dropped;
    /// the simulation parameters are kept.
    pub fn with_bank(self, bank: QuestionBank) -> Session {
        Session {
            parameters: self.parameters,
            ..Session::new(bank)
        }
    }

    pub fn apply(mut self, event: SessionEvent) -> Session {
        match event {
            SessionEvent::ParameterChanged(parameter, value) => {
                let value = round_float_to(value, PARAMETER_DECIMAL_PLACES);
                self.parameters = self.parameters.with(parameter, value);
            }
            SessionEvent::ParametersReset => {
                self.parameters = SimulationParameters::default();
            }
            SessionEvent::OptionSelected { question_id, option } => {
                match self.bank.get(question_id) {
                    Some(Question::MultipleChoice(q)) if option < q.options.len() => {
                        self.answers.record(question_id, Answer::Choice(option));
                    }
                    _ => warn!("Ignoring option {} for question {}", option, question_id)
                }
            }
            SessionEvent::NumericEntered { question_id, text } => {
                match self.bank.get(question_id) {
                    Some(Question::NumericEntry(_)) => self.answers.record(question_id, Answer::Text(text)),
                    _ => warn!("Ignoring numeric entry for question {}", question_id)
                }
            }
            SessionEvent::QuizGraded => {
                let span = span!(Level::INFO, "Grading quiz");
                let _enter = span.enter();
                let score = grade(self.bank.questions(), &self.answers);
                info!("Scored {}", score.summary());
                self.score = Some(score);
            }
            SessionEvent::QuizReset => {
                self.answers.clear();
                self.score = None;
            }
        }
        self
    }

    pub fn parameters(&self) -> &SimulationParameters {
        &self.parameters
    }

    /// Always computed from the current parameters
    pub fn derived(&self) -> DerivedQuantities {
        self.parameters.derive()
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn score(&self) -> Option<&ScoreResult> {
        self.score.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use circular_motion::{compute, Parameter, SimulationParameters};
    use quiz::{Question, QuestionBank};
    use crate::session::{Session, SessionEvent};

    fn apply_all(session: Session, events: Vec<SessionEvent>) -> Session {
        events.into_iter().fold(session, Session::apply)
    }

    fn numeric(question_id: u32, text: &str) -> SessionEvent {
        SessionEvent::NumericEntered { question_id, text: text.to_string() }
    }

    #[test]
    fn starts_with_defaults() {
        let session = Session::default();
        assert_eq!(*session.parameters(), SimulationParameters::new(0.5, 1.0, 1.0));
        assert!(session.answers().is_empty());
        assert!(session.score().is_none());
        assert_eq!(session.bank().len(), 5);
    }

    #[test]
    fn derived_quantities_follow_parameters() {
        let session = apply_all(Session::default(), vec![
            SessionEvent::ParameterChanged(Parameter::Radius, 0.5),
            SessionEvent::ParameterChanged(Parameter::Frequency, 2.0),
        ]);
        let derived = session.derived();
        assert!((derived.angular_velocity - 4.0 * PI).abs() < 1e-9);
        assert!((derived.period - 0.5).abs() < 1e-9);
        assert!((derived.linear_velocity - 2.0 * PI).abs() < 1e-9);

        let session = session.apply(SessionEvent::ParameterChanged(Parameter::Mass, 3.0));
        assert_eq!(session.derived(), compute(0.5, 2.0, 3.0));
    }

    #[test]
    fn parameters_snap_and_clamp() {
        let session = apply_all(Session::default(), vec![
            SessionEvent::ParameterChanged(Parameter::Radius, 1.234567),
            SessionEvent::ParameterChanged(Parameter::Frequency, 50.0),
            SessionEvent::ParameterChanged(Parameter::Mass, f64::NAN),
        ]);
        assert_eq!(*session.parameters(), SimulationParameters::new(1.23, 5.0, 1.0));
    }

    #[test]
    fn parameter_reset_restores_defaults_only() {
        let session = apply_all(Session::default(), vec![
            SessionEvent::ParameterChanged(Parameter::Radius, 1.5),
            SessionEvent::OptionSelected { question_id: 1, option: 1 },
            SessionEvent::ParametersReset,
        ]);
        assert_eq!(*session.parameters(), SimulationParameters::default());
        assert_eq!(session.answers().choice(1), Some(1));
    }

    #[test]
    fn grading_scenarios() {
        let session = apply_all(Session::default(), vec![
            SessionEvent::OptionSelected { question_id: 1, option: 1 },
            numeric(2, "2.5"),
            SessionEvent::OptionSelected { question_id: 3, option: 2 },
            SessionEvent::OptionSelected { question_id: 4, option: 0 },
            numeric(5, "abc"),
            SessionEvent::QuizGraded,
        ]);
        let score = session.score().unwrap();
        assert_eq!(score.correct, 3);
        assert_eq!(score.total, 5);
        assert_eq!(score.percent, 60);
    }

    #[test]
    fn grading_without_answers() {
        let session = Session::default().apply(SessionEvent::QuizGraded);
        let score = session.score().unwrap();
        assert_eq!(score.correct, 0);
        assert_eq!(score.percent, 0);
    }

    #[test]
    fn regrading_is_stable() {
        let session = apply_all(Session::default(), vec![
            numeric(2, "2.5"),
            SessionEvent::QuizGraded,
        ]);
        let first = session.score().cloned();
        let session = session.apply(SessionEvent::QuizGraded);
        assert_eq!(session.score().cloned(), first);
    }

    #[test]
    fn score_is_kept_until_regraded_or_reset() {
        let session = apply_all(Session::default(), vec![
            numeric(2, "2.5"),
            SessionEvent::QuizGraded,
            numeric(2, "2.3"),
        ]);
        assert_eq!(session.score().unwrap().correct, 1);
        let session = session.apply(SessionEvent::QuizGraded);
        assert_eq!(session.score().unwrap().correct, 0);
    }

    #[test]
    fn quiz_reset_clears_answers_and_score() {
        let session = apply_all(Session::default(), vec![
            SessionEvent::ParameterChanged(Parameter::Mass, 2.0),
            SessionEvent::OptionSelected { question_id: 1, option: 1 },
            SessionEvent::QuizGraded,
            SessionEvent::QuizReset,
        ]);
        assert!(session.answers().is_empty());
        assert!(session.score().is_none());
        assert_eq!(session.parameters().mass, 2.0);
    }

    #[test]
    fn mismatched_answers_are_ignored() {
        let session = apply_all(Session::default(), vec![
            SessionEvent::OptionSelected { question_id: 2, option: 0 },
            SessionEvent::OptionSelected { question_id: 1, option: 9 },
            numeric(1, "2"),
            numeric(99, "2"),
        ]);
        assert!(session.answers().is_empty());
    }

    #[test]
    fn swapping_bank_drops_quiz_progress() {
        let session = apply_all(Session::default(), vec![
            SessionEvent::ParameterChanged(Parameter::Radius, 1.0),
            SessionEvent::OptionSelected { question_id: 1, option: 1 },
            SessionEvent::QuizGraded,
        ]);
        let session = session.with_bank(QuestionBank::standard());
        assert!(session.answers().is_empty());
        assert!(session.score().is_none());
        assert_eq!(session.parameters().radius, 1.0);
    }

    #[test]
    fn standard_bank_agrees_with_calculator() {
        let bank = QuestionBank::standard();
        let key_value = |id: u32| -> f64 {
            match bank.get(id).unwrap() {
                Question::MultipleChoice(q) => {
                    let key = q.correct_option_text().unwrap();
                    key.split(' ').next().unwrap().parse().unwrap()
                }
                Question::NumericEntry(q) => q.expected
            }
        };

        // v = 10 m/s, r = 5 m
        let derived = compute(5.0, 10.0 / (2.0 * PI * 5.0), 1.0);
        assert!((derived.normal_acceleration - key_value(3)).abs() < 1e-9);

        // m = 2 kg, v = 6 m/s, r = 3 m
        let derived = compute(3.0, 6.0 / (2.0 * PI * 3.0), 2.0);
        assert!((derived.centripetal_force - key_value(4)).abs() < 1e-9);

        // T = 0.4 s
        assert!((1.0 / 0.4 - key_value(2)).abs() < 1e-9);

        // ω = 12 rad/s, r = 0.25 m
        let derived = compute(0.25, 12.0 / (2.0 * PI), 1.0);
        assert!((derived.linear_velocity - key_value(5)).abs() < 1e-9);
    }
}
