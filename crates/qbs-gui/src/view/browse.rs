//! The browsing screen: filters bar over a sidebar/preview split.
//!
//! The filters region carries a stable container id so its rendered height
//! can be queried with `container::visible_bounds`; the row below it is
//! sized to the remaining window height from the last measurement.

use iced::widget::{column, container, row};
use iced::{Element, Length};

use crate::message::Message;
use crate::state::AppState;
use crate::theme::{SIDEBAR_WIDTH, SPACING_MD, SPACING_SM};

use super::filters::view_filters;
use super::preview::view_preview;
use super::sidebar::view_sidebar;

/// Stable id of the measured filters region.
pub fn filters_region_id() -> container::Id {
    container::Id::new("filters-region")
}

/// Render the whole browsing screen.
pub fn view_browse(state: &AppState) -> Element<'_, Message> {
    let filters_region = container(view_filters(state))
        .id(filters_region_id())
        .width(Length::Fill)
        .padding([SPACING_SM, SPACING_MD]);

    let content = row![
        container(view_sidebar(state))
            .width(Length::Fixed(SIDEBAR_WIDTH))
            .height(Length::Fill)
            .padding(SPACING_SM),
        view_preview(state),
    ]
    .spacing(SPACING_MD)
    .padding([0.0, SPACING_MD])
    .height(Length::Fixed(state.layout.content_height()));

    column![filters_region, content].into()
}
