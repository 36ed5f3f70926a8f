//! Question list sidebar.
//!
//! One row per fetched question, in endpoint order: a selection checkbox
//! plus an id/content snippet. Hover is tracked per row with a mouse area
//! and carries the full question item, so the preview can keep showing it
//! even if a later fetch drops it from the list.

use iced::widget::{Space, button, checkbox, column, container, mouse_area, row, scrollable, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use qbs_model::Question;

use crate::message::{BrowseMessage, Message};
use crate::state::{AppState, LoadPhase};
use crate::theme::{
    GRAY_500, GRAY_700, SPACING_SM, SPACING_XS, button_secondary, sidebar_row,
};

/// Render the sidebar for the current question list state.
pub fn view_sidebar(state: &AppState) -> Element<'_, Message> {
    let body: Element<'_, Message> = match state.questions.phase() {
        LoadPhase::Idle => status_line("Apply filters to load questions."),
        LoadPhase::Loading => status_line("Loading questions…"),
        LoadPhase::Failed => status_line("Question list unavailable."),
        LoadPhase::Ready if state.questions.items().is_empty() => {
            status_line("No questions match the current filters.")
        }
        LoadPhase::Ready => {
            let rows = state
                .questions
                .items()
                .iter()
                .map(|question| view_row(state, question))
                .collect::<Vec<_>>();
            scrollable(column(rows).spacing(SPACING_XS))
                .height(Length::Fill)
                .into()
        }
    };

    column![view_header(state), body]
        .spacing(SPACING_SM)
        .width(Length::Fill)
        .into()
}

fn view_header(state: &AppState) -> Element<'_, Message> {
    let count = state.questions.items().len();
    let selected = state.browse.selected_ids().len();

    let mut header = row![
        lucide::list().size(14).color(GRAY_700),
        text(format!("{count} questions")).size(13).color(GRAY_700),
        Space::new().width(Length::Fill),
    ]
    .spacing(SPACING_XS)
    .align_y(Alignment::Center);

    if selected > 0 {
        header = header.push(text(format!("{selected} selected")).size(12).color(GRAY_500));
        header = header.push(
            button(text("Clear").size(12))
                .on_press(Message::Browse(BrowseMessage::SelectionCleared))
                .padding([2.0, 8.0])
                .style(button_secondary),
        );
    }

    header.into()
}

fn view_row<'a>(state: &'a AppState, question: &'a Question) -> Element<'a, Message> {
    let id = question.id;
    let is_hovered = state.browse.hovered().is_some_and(|h| h.id == id);
    let is_selected = state.browse.is_selected(id);

    let content = row![
        checkbox("", is_selected)
            .on_toggle(move |_| Message::Browse(BrowseMessage::SelectionToggled(id))),
        column![
            text(format!("Q{id}")).size(13).color(GRAY_700),
            text(snippet(&question.content)).size(12).color(GRAY_500),
        ]
        .spacing(2.0),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    mouse_area(
        container(content)
            .width(Length::Fill)
            .padding([SPACING_XS, SPACING_SM])
            .style(sidebar_row(is_hovered || is_selected)),
    )
    .on_enter(Message::Browse(BrowseMessage::QuestionHovered(
        question.clone(),
    )))
    .on_exit(Message::Browse(BrowseMessage::QuestionUnhovered))
    .into()
}

fn status_line(message: &str) -> Element<'_, Message> {
    text(message.to_owned()).size(13).color(GRAY_500).into()
}

/// First line of the question body, shortened for the sidebar.
fn snippet(content: &str) -> String {
    const MAX_CHARS: usize = 60;
    let first_line = content.lines().next().unwrap_or_default();
    let mut short: String = first_line.chars().take(MAX_CHARS).collect();
    if first_line.chars().count() > MAX_CHARS {
        short.push('…');
    }
    if short.is_empty() {
        "(no content)".to_string()
    } else {
        short
    }
}

#[cfg(test)]
mod tests {
    use super::snippet;

    #[test]
    fn snippet_shortens_long_first_lines() {
        let long = "x".repeat(100);
        let short = snippet(&long);
        assert!(short.chars().count() <= 61);
        assert!(short.ends_with('…'));
    }

    #[test]
    fn snippet_labels_empty_content() {
        assert_eq!(snippet(""), "(no content)");
    }
}
