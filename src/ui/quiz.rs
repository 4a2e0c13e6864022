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

use iced::{theme, Alignment, Element, Length};
use iced::widget::{Button, Column, Container, Radio, Row, Scrollable, Text, TextInput};
use iced_aw::TabLabel;
use quiz::{Question, ScoreResult};
use super::{Message, Tab};
use crate::session::{Session, SessionEvent};
use crate::ui::ApplicationData;
use crate::ui::colour::{fail_red, success_green};
use crate::ui::elements::{create_bullet_list, create_card, BODY_TEXT_SIZE, SECTION_TITLE_SIZE, SMALL_TEXT_SIZE};

const LEARNING_OBJECTIVES: [&str; 3] = [
    "Relate ω, f, T, r, v, aₙ and F in uniform circular motion.",
    "Measure these quantities in a simple experiment with a rotating object.",
    "Solve contextual problems involving centripetal force."
];

const ASSESSMENT: [&str; 2] = [
    "Formative: the automatically graded quiz in this application.",
    "Short summative: the worksheet report with calculations and reflection."
];

#[derive(Debug, Clone)]
pub enum QuizMessage {
    OptionSelected(u32, usize),
    NumericEntered(u32, String),
    GradePressed,
    ResetPressed
}

impl QuizMessage {
    fn into_session_event(self) -> SessionEvent {
        match self {
            QuizMessage::OptionSelected(question_id, option) => SessionEvent::OptionSelected { question_id, option },
            QuizMessage::NumericEntered(question_id, text) => SessionEvent::NumericEntered { question_id, text },
            QuizMessage::GradePressed => SessionEvent::QuizGraded,
            QuizMessage::ResetPressed => SessionEvent::QuizReset
        }
    }
}

#[derive(Default)]
pub struct QuizTab {}

impl QuizTab {
    pub(crate) fn new() -> Self {
        QuizTab {}
    }

    pub fn update(&mut self, message: QuizMessage, app_data: &mut ApplicationData) {
        app_data.apply(message.into_session_event());
    }
}

fn create_answer_input<'a>(question: &Question, session: &Session) -> Element<'a, Message> {
    let id = question.id();
    match question {
        Question::MultipleChoice(q) => {
            let selected = session.answers().choice(id);
            q.options.iter().enumerate().fold(Column::new().spacing(6), |column, (index, option)| {
                column.push(
                    Radio::new(index, option.clone(), selected, move |choice| {
                        Message::Quiz(QuizMessage::OptionSelected(id, choice))
                    }).size(16).text_size(BODY_TEXT_SIZE)
                )
            }).into()
        }
        Question::NumericEntry(_) => {
            let input = TextInput::new(
                "Answer",
                session.answers().text(id).unwrap_or(""),
                move |text| Message::Quiz(QuizMessage::NumericEntered(id, text))
            ).width(Length::Units(160)).padding(5);
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(input)
                .push(Text::new("Use SI units").size(SMALL_TEXT_SIZE))
                .into()
        }
    }
}

fn create_feedback<'a>(question: &Question, score: &ScoreResult) -> Column<'a, Message> {
    let verdict = match score.outcome_for(question.id()) {
        Some(true) => Text::new("Correct").style(success_green()),
        _ => Text::new("Incorrect").style(fail_red())
    };
    Column::new()
        .spacing(4)
        .push(verdict.size(SMALL_TEXT_SIZE))
        .push(Text::new(format!("Explanation: {}", question.explanation())).size(SMALL_TEXT_SIZE))
}

fn create_question<'a>(number: usize, question: &Question, session: &Session) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(8)
        .push(Text::new(format!("{}. {}", number, question.prompt())).size(BODY_TEXT_SIZE))
        .push(create_answer_input(question, session));
    if let Some(score) = session.score() {
        column = column.push(create_feedback(question, score));
    }
    Container::new(column)
        .padding(10)
        .width(Length::Fill)
        .style(theme::Container::Box)
        .into()
}

impl Tab for QuizTab {
    type Message = Message;

    fn title(&self) -> String {
        String::from("Quiz")
    }

    fn tab_label(&self) -> TabLabel {
        TabLabel::Text(self.title())
    }

    fn content<'a, 'b>(
        &'a self,
        app_data: &'b ApplicationData
    ) -> Element<'_, Self::Message>
    where 'b: 'a
    {
        let session = &app_data.session;
        let questions = session.bank().questions().iter().enumerate().fold(
            Column::new().spacing(14),
            |column, (index, question)| column.push(create_question(index + 1, question, session))
        );

        let mut actions = Row::new()
            .spacing(8)
            .align_items(Alignment::Center)
            .push(
                Button::new(Text::new("Grade"))
                    .style(theme::Button::Primary)
                    .on_press(Message::Quiz(QuizMessage::GradePressed))
            )
            .push(
                Button::new(Text::new("Reset"))
                    .style(theme::Button::Secondary)
                    .on_press(Message::Quiz(QuizMessage::ResetPressed))
            );
        if let Some(score) = session.score() {
            actions = actions.push(Text::new(format!("Score: {}", score.summary())));
        }

        let quiz = Column::new()
            .spacing(12)
            .push(Text::new("Formative quiz").size(SECTION_TITLE_SIZE))
            .push(Scrollable::new(questions).height(Length::Fill))
            .push(actions);

        let objectives = Column::new()
            .spacing(10)
            .push(Text::new("Learning objectives").size(SECTION_TITLE_SIZE))
            .push(create_bullet_list(&LEARNING_OBJECTIVES))
            .push(Text::new("Assessment").size(SECTION_TITLE_SIZE))
            .push(create_bullet_list(&ASSESSMENT))
            .push(Text::new(app_data.bank_status.clone()).size(SMALL_TEXT_SIZE));

        Row::new()
            .spacing(16)
            .push(create_card(quiz).width(Length::FillPortion(3)))
            .push(create_card(objectives).width(Length::FillPortion(2)))
            .into()
    }
}
