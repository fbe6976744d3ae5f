//! Background image feed with the infinite-scroll sentinel at its end

use iced::widget::image::{Handle, Image};
use iced::widget::{scrollable, Column, Space};
use iced::{ContentFit, Element, Length};

use super::images::HandleCache;
use crate::state::feed::ImageFeed;
use crate::Message;

/// Height of the sentinel marker after the last tile
pub const SENTINEL_HEIGHT: f32 = 1.0;

/// Scrollable id of the background, so it can be moved programmatically
pub fn background_id() -> scrollable::Id {
    scrollable::Id::new("background-feed")
}

/// Total height of the background content, sentinel included
pub fn content_height(feed: &ImageFeed, tile_height: f32) -> f32 {
    feed.len() as f32 * tile_height + SENTINEL_HEIGHT
}

/// One full-width tile per feed entry, then the sentinel.
///
/// Tiles whose bytes have not arrived (or never will) keep their slot
/// as empty space so the layout does not jump.
pub fn view<'a>(feed: &ImageFeed, tiles: &HandleCache<usize>, tile_height: f32) -> Element<'a, Message> {
    let mut column = Column::new();

    for (index, _url) in feed.urls().iter().enumerate() {
        let tile: Element<'a, Message> = match tiles.get(&index) {
            Some(handle) => Image::<Handle>::new(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(tile_height))
                .content_fit(ContentFit::Cover)
                .into(),
            None => Space::new(Length::Fill, Length::Fixed(tile_height)).into(),
        };
        column = column.push(tile);
    }

    column = column.push(Space::new(Length::Fill, Length::Fixed(SENTINEL_HEIGHT)));

    // Driven by the launch list; no scrollbar of its own
    let hidden = scrollable::Scrollbar::new().width(0.0).scroller_width(0.0);

    scrollable(column)
        .id(background_id())
        .direction(scrollable::Direction::Vertical(hidden))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
