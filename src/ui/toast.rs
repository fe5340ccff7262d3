// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the message flow.
//!
//! Each shown message becomes a fixed-height card with a type-colored
//! border, its buttons and a close control. Cards are layered in a single
//! stack and pushed away from their anchor edge by the offset the flow
//! computed, so stacking, repositioning and fades follow the flow exactly.

use crate::flow::{Action, Edge, Flow, Message, Position};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, mouse_area, text, Container, Row, Stack, Text};
use iced::{alignment, Color, Element, Length, Padding, Theme};
use std::time::Instant;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast at the given point of its transitions.
    pub fn view(message: &Message, now: Instant, height: f32) -> Element<'_, Action> {
        let id = message.id();
        let accent_color = message.kind().color();
        let alpha = message.opacity(now);

        let message_widget = Text::new(message.text())
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(Color {
                    a: alpha,
                    ..theme.palette().text
                }),
            });

        let mut content = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            );

        for (index, action) in message.buttons().iter().enumerate() {
            content = content.push(
                button(Text::new(action.label()).size(typography::BODY_SM))
                    .on_press(Action::Pressed { id, index })
                    .padding(spacing::XXS)
                    .style(move |theme: &Theme, status| {
                        action_button_style(theme, status, accent_color, alpha)
                    }),
            );
        }

        let dismiss_button = button(Text::new("×").size(typography::BODY))
            .on_press(Action::Dismiss(id))
            .padding(spacing::XXS)
            .style(dismiss_button_style);
        content = content.push(dismiss_button);

        let card = Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .height(Length::Fixed(height))
            .padding(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color, alpha));

        // Without buttons the whole card dismisses on click.
        if message.buttons().is_empty() {
            mouse_area(card).on_press(Action::Dismiss(id)).into()
        } else {
            card.into()
        }
    }

    /// Renders every slot of the flow as one overlay.
    pub fn view_overlay(flow: &Flow) -> Element<'_, Action> {
        let now = flow.now();
        let height = flow.settings().toast_height;

        let toasts: Vec<Element<'_, Action>> = flow
            .positions()
            .flat_map(|position| {
                flow.visible(position).map(move |message| {
                    Self::place(
                        Self::view(message, now, height),
                        position,
                        message.offset(now),
                    )
                })
            })
            .collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            Stack::with_children(toasts)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        }
    }

    /// Anchors a toast to its position, `offset` pixels away from the edge.
    fn place(toast: Element<'_, Action>, position: Position, offset: f32) -> Element<'_, Action> {
        let horizontal = match position.edge() {
            Edge::Left => alignment::Horizontal::Left,
            Edge::Center => alignment::Horizontal::Center,
            Edge::Right => alignment::Horizontal::Right,
        };
        let vertical = if position.is_top() {
            alignment::Vertical::Top
        } else {
            alignment::Vertical::Bottom
        };

        Container::new(toast)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(horizontal)
            .align_y(vertical)
            .padding(anchor_padding(position, offset))
            .into()
    }
}

/// Padding that pushes a toast `offset` pixels away from its anchor edge.
fn anchor_padding(position: Position, offset: f32) -> Padding {
    let (top, bottom) = if position.is_top() {
        (spacing::MD + offset, 0.0)
    } else {
        (0.0, spacing::MD + offset)
    };

    Padding {
        top,
        right: spacing::MD,
        bottom,
        left: spacing::MD,
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: alpha,
            ..bg_color
        })),
        border: iced::Border {
            color: Color {
                a: alpha,
                ..accent_color
            },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: Color {
                a: shadow::MD.color.a * alpha * opacity::OVERLAY_MEDIUM,
                ..shadow::MD.color
            },
            ..shadow::MD
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the action buttons, tinted with the message color.
fn action_button_style(
    theme: &Theme,
    status: button::Status,
    accent_color: Color,
    alpha: f32,
) -> button::Style {
    let text_color = Color {
        a: alpha,
        ..theme.palette().text
    };
    let fill = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_MEDIUM,
        button::Status::Active | button::Status::Disabled => opacity::OVERLAY_SUBTLE,
    };

    button::Style {
        background: Some(iced::Background::Color(Color {
            a: fill * alpha,
            ..accent_color
        })),
        text_color,
        border: iced::Border {
            color: Color {
                a: alpha,
                ..accent_color
            },
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: if status == button::Status::Hovered {
                    opacity::OVERLAY_SUBTLE
                } else {
                    opacity::OVERLAY_MEDIUM
                },
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
