//! Page header, search box, sort button and status radios

use iced::widget::{button, column, container, radio, row, text, text_input, Row};
use iced::{Alignment, Background, Color, Element, Length};

use crate::state::controls::{StatusFilter, ViewControls};
use crate::Message;

/// Translucent title bar across the top of the page
pub fn header<'a>() -> Element<'a, Message> {
    container(text("SpaceX Launches").size(28))
        .padding(16)
        .center_x(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(Color::from_rgba8(59, 130, 246, 0.5))),
            text_color: Some(Color::WHITE),
            ..container::Style::default()
        })
        .into()
}

/// Search box + sort toggle on one line, status radios below
pub fn view(controls: &ViewControls) -> Element<'_, Message> {
    let search = text_input("Search launches...", &controls.search_text)
        .on_input(Message::SearchChanged)
        .padding(8)
        .width(Length::Fill);

    let sort = button(text(format!("Sort by Year: {}", controls.sort_order.label())))
        .on_press(Message::SortOrderToggled)
        .padding([8, 16])
        .style(button::secondary);

    let radios = StatusFilter::ALL
        .into_iter()
        .fold(Row::new().spacing(16), |radios, filter| {
            radios.push(radio(
                filter.to_string(),
                filter,
                Some(controls.status_filter),
                Message::StatusFilterSelected,
            ))
        });

    column![
        row![search, sort].spacing(16).align_y(Alignment::Center),
        container(radios).center_x(Length::Fill),
    ]
    .spacing(16)
    .into()
}
