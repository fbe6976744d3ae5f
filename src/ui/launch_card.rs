//! One launch in the list: header line with badge and VIEW/HIDE toggle,
//! plus the details panel when expanded

use iced::widget::image::{Handle, Image};
use iced::widget::{button, column, container, horizontal_space, row, text, Column};
use iced::{Alignment, Background, Border, Color, Element, Length};

use crate::state::data::{Launch, StatusBadge};
use crate::Message;

const DETAILS_FALLBACK: &str = "No details available.";

pub fn view<'a>(launch: &'a Launch, expanded: bool, patch: Option<&Handle>) -> Element<'a, Message> {
    let title = row![
        text(&launch.mission_name).size(22),
        text(format!("({})", launch.launch_year))
            .size(22)
            .color(Color::from_rgb8(156, 163, 175)),
    ]
    .spacing(8);

    let toggle = button(if expanded { "HIDE" } else { "VIEW" })
        .on_press(Message::LaunchToggled(launch.flight_number))
        .padding([4, 12]);

    let summary = row![
        column![title, badge(launch.status_badge())].spacing(6),
        horizontal_space(),
        toggle,
    ]
    .align_y(Alignment::Center);

    let mut card = column![summary].spacing(8);
    if expanded {
        card = card.push(details(launch, patch));
    }

    container(card)
        .padding(12)
        .width(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(Color::from_rgba8(31, 41, 55, 0.9))),
            text_color: Some(Color::WHITE),
            border: Border {
                radius: 6.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

fn badge<'a>(status: StatusBadge) -> Element<'a, Message> {
    let color = match status {
        StatusBadge::Upcoming => Color::from_rgb8(59, 130, 246),
        StatusBadge::Success => Color::from_rgb8(34, 197, 94),
        StatusBadge::Failed => Color::from_rgb8(239, 68, 68),
    };

    container(text(status.label()).size(14))
        .padding([2, 8])
        .style(move |_theme| container::Style {
            background: Some(Background::Color(color)),
            text_color: Some(Color::WHITE),
            border: Border {
                radius: 4.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

fn details<'a>(launch: &'a Launch, patch: Option<&Handle>) -> Element<'a, Message> {
    let description = launch.details.as_deref().unwrap_or(DETAILS_FALLBACK);
    let mut panel: Column<'a, Message> = column![text(description).color(Color::from_rgb8(229, 231, 235))].spacing(8);

    // Patch shows up once its download finishes
    if let Some(handle) = patch {
        panel = panel.push(Image::<Handle>::new(handle.clone()).width(96));
    }

    let buttons = links(launch).into_iter().map(|(label, url)| -> Element<'a, Message> {
        button(text(label).size(14).color(Color::from_rgb8(147, 197, 253)))
            .on_press(Message::OpenLink(url.to_string()))
            .style(button::text)
            .padding(0)
            .into()
    });
    panel = panel.push(row(buttons).spacing(16));

    panel.into()
}

/// External links of a launch that are actually present, labelled
fn links(launch: &Launch) -> Vec<(&'static str, &str)> {
    [
        ("Article", launch.links.article_link.as_deref()),
        ("Video", launch.links.video_link.as_deref()),
    ]
    .into_iter()
    .filter_map(|(label, url)| url.map(|url| (label, url)))
    .collect()
}
