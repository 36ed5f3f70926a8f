//! Question preview and solution panels.
//!
//! The preview shows exactly one question: the hovered one, else the first
//! of the list. Content and solution payloads pass through opaquely — math
//! markup and solution HTML are rendered by external renderers; this view
//! only decides *whether* they may render. A failed question fetch blanks
//! both panels.

use iced::widget::{column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use qbs_model::Question;

use crate::error::GuiError;
use crate::message::Message;
use crate::state::{AppState, LoadPhase};
use crate::theme::{
    DANGER, GRAY_500, GRAY_700, GRAY_900, SPACING_MD, SPACING_SM, panel_card,
};

/// Render the preview + solution column for the current question state.
pub fn view_preview(state: &AppState) -> Element<'_, Message> {
    let (preview, solution): (Element<'_, Message>, Element<'_, Message>) =
        match state.questions.phase() {
            LoadPhase::Idle => (
                status_line("Apply filters to load questions."),
                solution_placeholder(),
            ),
            LoadPhase::Loading => (status_line("Loading questions…"), solution_placeholder()),
            LoadPhase::Failed => {
                let error = state.questions.error();
                let message = error
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "Failed to load questions".to_string());
                let suggestion = error.map(GuiError::suggestion).unwrap_or_default();
                (
                    row![
                        lucide::circle_alert().size(14).color(DANGER),
                        text(message).size(14).color(DANGER),
                        text(suggestion).size(13).color(GRAY_500),
                    ]
                    .spacing(SPACING_SM)
                    .align_y(Alignment::Center)
                    .into(),
                    solution_placeholder(),
                )
            }
            LoadPhase::Ready => match state.browse.current(state.questions.items()) {
                Some(question) => (view_question(question), view_solution(question)),
                None => (
                    status_line("No questions match the current filters."),
                    solution_placeholder(),
                ),
            },
        };

    column![
        container(scrollable(preview).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::FillPortion(3))
            .padding(SPACING_MD)
            .style(panel_card),
        container(scrollable(solution).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::FillPortion(2))
            .padding(SPACING_MD)
            .style(panel_card),
    ]
    .spacing(SPACING_SM)
    .width(Length::Fill)
    .into()
}

fn view_question(question: &Question) -> Element<'_, Message> {
    column![
        text(format!("Question {}", question.id))
            .size(16)
            .color(GRAY_900),
        // Raw body; math markup is typeset by the external renderer.
        text(question.content.clone()).size(14).color(GRAY_700),
    ]
    .spacing(SPACING_SM)
    .into()
}

fn view_solution(question: &Question) -> Element<'_, Message> {
    match question.solution_html.as_deref() {
        Some(html) if question.has_solution() => column![
            text("Solution").size(14).color(GRAY_900),
            // Raw payload; HTML is rendered by the external solution renderer.
            text(html.to_owned()).size(13).color(GRAY_700),
        ]
        .spacing(SPACING_SM)
        .into(),
        _ => solution_placeholder(),
    }
}

fn solution_placeholder() -> Element<'static, Message> {
    text("No solution available.").size(13).color(GRAY_500).into()
}

fn status_line(message: &str) -> Element<'_, Message> {
    text(message.to_owned()).size(14).color(GRAY_500).into()
}
