// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{palette::WHITE, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled button in the color of a message type.
pub fn accent(accent_color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => lighten(accent_color, 0.1),
            button::Status::Disabled => Color {
                a: 0.4,
                ..accent_color
            },
            button::Status::Active | button::Status::Pressed => accent_color,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: WHITE,
            border: Border {
                color: accent_color,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: if status == button::Status::Hovered {
                shadow::MD
            } else {
                shadow::NONE
            },
            snap: true,
        }
    }
}

fn lighten(color: Color, amount: f32) -> Color {
    Color {
        r: (color.r + amount).min(1.0),
        g: (color.g + amount).min(1.0),
        b: (color.b + amount).min(1.0),
        a: color.a,
    }
}
