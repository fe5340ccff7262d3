// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window shows a control panel for the flow settings, with the toast
//! overlay stacked on top of it.

use super::message::DelayPreset;
use super::Message;
use crate::flow::{Flow, MessageType, Position};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::Toast;
use iced::widget::{button, pick_list, text, toggler, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Element, Length};

/// Renders the control panel and the toast overlay.
pub fn view(flow: &Flow) -> Element<'_, Message> {
    let panel = Container::new(control_panel(flow))
        .width(Length::Fixed(sizing::CONTROL_PANEL_WIDTH))
        .padding(spacing::MD)
        .style(styles::container::panel);

    let centered = Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    Stack::new()
        .push(centered)
        .push(Toast::view_overlay(flow).map(Message::Flow))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn control_panel(flow: &Flow) -> Element<'_, Message> {
    let settings = flow.settings();

    let spawn_row = MessageType::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::XXS), |row, kind| {
            row.push(
                button(Text::new(kind.as_str()).size(typography::BODY_SM))
                    .on_press(Message::Spawn(kind))
                    .padding(spacing::XXS)
                    .style(styles::button::accent(kind.color())),
            )
        });

    let with_buttons = button(Text::new("With buttons").size(typography::BODY_SM))
        .on_press(Message::SpawnWithButtons)
        .padding(spacing::XXS)
        .style(styles::button::accent(MessageType::Info.color()));

    let position_row = labeled(
        "Position",
        pick_list(Position::ALL, Some(settings.position), Message::PositionSelected).into(),
    );

    let flow_row = labeled(
        "Stack messages",
        toggler(settings.flow)
            .on_toggle(Message::FlowToggled)
            .size(20.0)
            .into(),
    );

    let max_label = match settings.max {
        Some(max) => max.to_string(),
        None => "unlimited".to_string(),
    };
    let max_row = labeled(
        "Max per position",
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(button(text("-")).on_press(Message::DecreaseMax))
            .push(text(max_label).size(typography::BODY))
            .push(button(text("+")).on_press(Message::IncreaseMax))
            .into(),
    );

    let delay_row = labeled(
        "Auto-hide",
        pick_list(
            DelayPreset::ALL,
            Some(DelayPreset::from_millis(settings.delay)),
            Message::DelaySelected,
        )
        .into(),
    );

    let commands = Row::new()
        .spacing(spacing::XS)
        .push(button(text("Clean")).on_press(Message::Clean))
        .push(button(text("Reposition")).on_press(Message::Reposition))
        .push(button(text("Save")).on_press(Message::SaveSettings));

    let (shown, queued) = Position::ALL.into_iter().fold((0, 0), |(shown, queued), position| {
        (
            shown + flow.visible_count(position),
            queued + flow.deferred_count(position),
        )
    });

    Column::new()
        .spacing(spacing::SM)
        .push(Text::new("messg").size(typography::TITLE_MD))
        .push(spawn_row)
        .push(with_buttons)
        .push(position_row)
        .push(flow_row)
        .push(max_row)
        .push(delay_row)
        .push(commands)
        .push(text(format!("{shown} shown, {queued} queued")).size(typography::BODY_SM))
        .into()
}

/// A settings row: label on the left, control pushed to the right.
fn labeled<'a>(label: &'a str, control: Element<'a, Message>) -> Element<'a, Message> {
    Row::new()
        .align_y(alignment::Vertical::Center)
        .push(Text::new(label).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(control)
        .into()
}
