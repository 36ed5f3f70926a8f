//! Study Light theme for Question Bank Studio.
//!
//! A single light theme: neutral grays for chrome, one accent for actions,
//! plus the widget style functions the browsing screen uses. Style
//! functions receive `&Theme` per Iced's style API even when they only use
//! the constants below.

use iced::theme::Palette;
use iced::widget::{button, container};
use iced::{Border, Color, Shadow, Theme, Vector};

// =============================================================================
// COLORS
// =============================================================================

pub const WHITE: Color = Color::WHITE;
pub const GRAY_50: Color = Color::from_rgb8(0xf9, 0xfa, 0xfb);
pub const GRAY_100: Color = Color::from_rgb8(0xf3, 0xf4, 0xf6);
pub const GRAY_200: Color = Color::from_rgb8(0xe5, 0xe7, 0xeb);
pub const GRAY_500: Color = Color::from_rgb8(0x6b, 0x72, 0x80);
pub const GRAY_700: Color = Color::from_rgb8(0x37, 0x41, 0x51);
pub const GRAY_900: Color = Color::from_rgb8(0x11, 0x18, 0x27);

pub const PRIMARY_500: Color = Color::from_rgb8(0x4f, 0x46, 0xe5);
pub const PRIMARY_600: Color = Color::from_rgb8(0x43, 0x38, 0xca);

pub const DANGER: Color = Color::from_rgb8(0xdc, 0x26, 0x26);

// =============================================================================
// SPACING
// =============================================================================

pub const SPACING_XS: f32 = 4.0;
pub const SPACING_SM: f32 = 8.0;
pub const SPACING_MD: f32 = 16.0;

pub const BORDER_RADIUS_SM: f32 = 4.0;
pub const BORDER_RADIUS_MD: f32 = 6.0;

/// Width of the question list sidebar.
pub const SIDEBAR_WIDTH: f32 = 280.0;

// =============================================================================
// THEME CREATION
// =============================================================================

/// Creates the Study Light theme.
pub fn studio_theme() -> Theme {
    Theme::custom(
        "Study Light".to_string(),
        Palette {
            background: GRAY_50,
            text: GRAY_900,
            primary: PRIMARY_500,
            ..Palette::LIGHT
        },
    )
}

// =============================================================================
// WIDGET STYLES
// =============================================================================

/// Primary button style - main actions (Apply).
pub fn button_primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => PRIMARY_600,
        button::Status::Disabled => GRAY_200,
        _ => PRIMARY_500,
    };
    let text_color = match status {
        button::Status::Disabled => GRAY_500,
        _ => WHITE,
    };
    button::Style {
        background: Some(background.into()),
        text_color,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.12),
            offset: Vector::new(0.0, 1.0),
            blur_radius: 2.0,
        },
        ..Default::default()
    }
}

/// Secondary button style - quiet actions (Clear selection).
pub fn button_secondary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => GRAY_100,
        _ => WHITE,
    };
    button::Style {
        background: Some(background.into()),
        text_color: GRAY_700,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 1.0,
            color: GRAY_200,
        },
        shadow: Shadow::default(),
        ..Default::default()
    }
}

/// White card panel with a soft border.
pub fn panel_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(WHITE.into()),
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            width: 1.0,
            color: GRAY_200,
        },
        ..Default::default()
    }
}

/// Sidebar row background, highlighted when hovered or selected.
pub fn sidebar_row(highlighted: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(if highlighted { GRAY_100 } else { WHITE }.into()),
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    }
}
