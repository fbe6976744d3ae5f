use iced::widget::{column, container, scrollable, stack, text, Column};
use iced::{Element, Length, Subscription, Task, Theme};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod loader;
mod sentinel;
mod sources;
mod state;
mod ui;

use config::AppConfig;
use error::FetchError;
use sentinel::{ScrollSentinel, ViewportMetrics};
use sources::{ApodClient, SpaceXClient};
use state::browser::{LaunchBrowser, ViewChange};
use state::catalog::Catalog;
use state::controls::StatusFilter;
use state::feed::ImageFeed;
use ui::images::HandleCache;

/// Main application state
struct LaunchDeck {
    config: AppConfig,
    /// Launch catalog source
    spacex: SpaceXClient,
    /// Background imagery source
    apod: ApodClient,
    /// Canonical dataset, controls, expansion and the derived list
    browser: LaunchBrowser,
    /// Background image URLs in fetch order
    feed: ImageFeed,
    /// Downloaded background tiles, keyed by feed index
    tiles: HandleCache<usize>,
    /// Downloaded mission patches, keyed by flight number
    patches: HandleCache<u32>,
    /// Fires a new feed batch when the end of the background shows up
    sentinel: ScrollSentinel,
    /// Last scroll fraction of the launch list (0 = top, 1 = bottom)
    scroll_fraction: f32,
    /// Last known height of the visible area
    viewport_height: f32,
    /// Image batches requested so far
    batch_requests: usize,
}

/// Window height assumed until the first scroll event reports the real one
const INITIAL_VIEWPORT_HEIGHT: f32 = 768.0;

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// The launch catalog request finished
    LaunchesLoaded(Result<Catalog, FetchError>),
    /// A batch of background image URLs arrived
    ImageBatchLoaded(Result<Vec<String>, FetchError>),
    /// Bytes for one background tile arrived
    TileLoaded {
        index: usize,
        result: Result<Vec<u8>, FetchError>,
    },
    /// Bytes for a mission patch arrived
    PatchLoaded {
        flight_number: u32,
        result: Result<Vec<u8>, FetchError>,
    },
    SearchChanged(String),
    StatusFilterSelected(StatusFilter),
    SortOrderToggled,
    /// User clicked VIEW/HIDE on a card
    LaunchToggled(u32),
    /// The launch list scrolled
    Scrolled(scrollable::Viewport),
    /// User clicked an article or video link
    OpenLink(String),
    /// The window is about to close
    CloseRequested,
}

impl LaunchDeck {
    /// Create a new instance of the application and kick off both fetch families
    fn new(config: AppConfig) -> (Self, Task<Message>) {
        let http = reqwest::Client::new();
        let spacex = SpaceXClient::with_client(http.clone(), config.launches_url.clone());
        let apod = ApodClient::with_client(http, config.apod_url.clone(), config.apod_api_key.clone());

        let mut sentinel = ScrollSentinel::new(ui::background::SENTINEL_HEIGHT);
        sentinel.attach();

        tracing::info!("🚀 Launch deck starting (batch size {})", config.image_batch_size);

        let mut app = LaunchDeck {
            config,
            spacex,
            apod,
            browser: LaunchBrowser::new(),
            feed: ImageFeed::new(),
            tiles: HandleCache::new(),
            patches: HandleCache::new(),
            sentinel,
            scroll_fraction: 0.0,
            viewport_height: INITIAL_VIEWPORT_HEIGHT,
            batch_requests: 0,
        };

        // An empty background shows its sentinel right away
        let startup = Task::batch([
            app.fetch_launches(),
            app.fetch_image_batch(),
            app.check_sentinel(),
        ]);
        (app, startup)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::LaunchesLoaded(Ok(catalog)) => {
                if catalog.is_empty() {
                    tracing::warn!("Launch catalog came back empty");
                }
                self.browser.apply(ViewChange::DatasetLoaded(catalog));
                tracing::info!("🛰️  Loaded {} unique launches", self.browser.catalog().len());
                Task::none()
            }
            Message::LaunchesLoaded(Err(err)) => {
                // Best effort: the list just stays empty
                tracing::warn!(%err, "Failed to fetch launch catalog");
                Task::none()
            }
            Message::ImageBatchLoaded(Ok(urls)) => {
                let range = self.feed.append(urls);
                tracing::debug!(added = range.len(), total = self.feed.len(), "Image feed grew");

                let mut downloads = Vec::with_capacity(range.len());
                for index in range {
                    let Some(url) = self.feed.get(index).map(str::to_string) else {
                        continue;
                    };
                    if self.tiles.request(index) {
                        downloads.push(self.fetch_tile(index, url));
                    }
                }

                // The feed may still be shorter than the window
                downloads.push(self.check_sentinel());
                Task::batch(downloads)
            }
            Message::ImageBatchLoaded(Err(err)) => {
                tracing::warn!(%err, "Failed to fetch background images");
                self.check_sentinel()
            }
            Message::TileLoaded { index, result } => {
                match result {
                    Ok(bytes) => self.tiles.insert(index, bytes),
                    Err(err) => tracing::debug!(index, %err, "Skipping background tile"),
                }
                Task::none()
            }
            Message::PatchLoaded { flight_number, result } => {
                match result {
                    Ok(bytes) => self.patches.insert(flight_number, bytes),
                    Err(err) => tracing::debug!(flight_number, %err, "Mission patch unavailable"),
                }
                Task::none()
            }
            Message::SearchChanged(text) => {
                self.browser.apply(ViewChange::SearchText(text));
                Task::none()
            }
            Message::StatusFilterSelected(filter) => {
                self.browser.apply(ViewChange::StatusFilter(filter));
                Task::none()
            }
            Message::SortOrderToggled => {
                self.browser.apply(ViewChange::ToggleSortOrder);
                Task::none()
            }
            Message::LaunchToggled(flight_number) => {
                self.browser.toggle_expanded(flight_number);
                match self.browser.expanded() {
                    Some(open) => self.fetch_patch(open),
                    None => Task::none(),
                }
            }
            Message::Scrolled(viewport) => {
                let relative = viewport.relative_offset();

                // Background follows the list proportionally
                let follow = scrollable::snap_to(ui::background::background_id(), relative);
                Task::batch([follow, self.scroll_to(relative.y, viewport.bounds().height)])
            }
            Message::OpenLink(url) => {
                if let Err(err) = open::that_detached(&url) {
                    tracing::warn!(%err, %url, "Failed to open link");
                }
                Task::none()
            }
            Message::CloseRequested => {
                self.sentinel.detach();
                tracing::info!(
                    "👋 Closing ({} background images loaded over {} batches)",
                    self.tiles.len(),
                    self.batch_requests
                );
                iced::exit()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let background = ui::background::view(
            &self.feed,
            &self.tiles,
            self.config.background_tile_height,
        );

        let displayed = self.browser.displayed();
        let list: Element<'_, Message> = if displayed.is_empty() {
            container(text("No launches found."))
                .center_x(Length::Fill)
                .into()
        } else {
            Column::with_children(displayed.iter().map(|launch| {
                ui::launch_card::view(
                    launch,
                    self.browser.is_expanded(launch.flight_number),
                    self.patches.get(&launch.flight_number),
                )
            }))
            .spacing(16)
            .into()
        };

        let body = column![ui::toolbar::view(self.browser.controls()), list]
            .spacing(16)
            .padding(16)
            .max_width(672);

        let page = column![ui::toolbar::header(), container(body).center_x(Length::Fill)];

        let foreground = scrollable(page)
            .on_scroll(Message::Scrolled)
            .width(Length::Fill)
            .height(Length::Fill);

        stack![background, foreground].into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        iced::window::close_requests().map(|_| Message::CloseRequested)
    }

    /// Record the list's scroll position and check the sentinel against it
    fn scroll_to(&mut self, relative_y: f32, viewport_height: f32) -> Task<Message> {
        self.scroll_fraction = relative_y;
        self.viewport_height = viewport_height;
        self.check_sentinel()
    }

    /// Request another batch if the sentinel just came into view
    fn check_sentinel(&mut self) -> Task<Message> {
        let metrics = ViewportMetrics::follower(
            self.scroll_fraction,
            self.viewport_height,
            ui::background::content_height(&self.feed, self.config.background_tile_height),
        );

        if !self.sentinel.observe(metrics) {
            return Task::none();
        }

        tracing::debug!(feed = self.feed.len(), "Sentinel visible, loading more images");
        self.fetch_image_batch()
    }

    fn fetch_launches(&self) -> Task<Message> {
        let spacex = self.spacex.clone();
        Task::perform(
            async move { loader::load_launch_catalog(&spacex).await },
            Message::LaunchesLoaded,
        )
    }

    fn fetch_image_batch(&mut self) -> Task<Message> {
        self.batch_requests += 1;
        let apod = self.apod.clone();
        let batch_size = self.config.image_batch_size;
        Task::perform(
            async move { loader::load_image_batch(&apod, batch_size).await },
            Message::ImageBatchLoaded,
        )
    }

    fn fetch_tile(&self, index: usize, url: String) -> Task<Message> {
        let apod = self.apod.clone();
        Task::perform(
            async move { loader::load_image_bytes(&apod, &url).await },
            move |result| Message::TileLoaded { index, result },
        )
    }

    /// Download the mission patch of an expanded launch, once
    fn fetch_patch(&mut self, flight_number: u32) -> Task<Message> {
        let Some(url) = self
            .browser
            .launch(flight_number)
            .and_then(|launch| launch.links.mission_patch.clone())
        else {
            return Task::none();
        };

        if !self.patches.request(flight_number) {
            return Task::none();
        }

        let spacex = self.spacex.clone();
        Task::perform(
            async move { loader::load_image_bytes(&spacex, &url).await },
            move |result| Message::PatchLoaded { flight_number, result },
        )
    }
}

fn main() -> iced::Result {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "launch_deck=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(%err, "Invalid configuration");
            std::process::exit(2);
        }
    };

    iced::application("SpaceX Launches", LaunchDeck::update, LaunchDeck::view)
        .theme(LaunchDeck::theme)
        .subscription(LaunchDeck::subscription)
        .exit_on_close_request(false)
        .centered()
        .run_with(move || LaunchDeck::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::sample_launch;

    fn app() -> LaunchDeck {
        LaunchDeck::new(AppConfig::default()).0
    }

    fn urls(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("https://apod.nasa.gov/{i}.jpg")).collect()
    }

    #[test]
    fn test_sentinel_checked_on_attach_and_after_batches() {
        let mut deck = app();
        // Initial batch plus the sentinel of the empty background
        assert_eq!(deck.batch_requests, 2);

        // Sentinel is still on screen; no new transition
        let _ = deck.update(Message::ImageBatchLoaded(Err(FetchError::Network("timeout".into()))));
        assert_eq!(deck.batch_requests, 2);

        // Five tall tiles push the sentinel below the window
        let _ = deck.update(Message::ImageBatchLoaded(Ok(urls(5))));
        assert_eq!(deck.feed.len(), 5);
        assert_eq!(deck.batch_requests, 2);

        let _ = deck.scroll_to(1.0, INITIAL_VIEWPORT_HEIGHT);
        assert_eq!(deck.batch_requests, 3);
    }

    #[test]
    fn test_taller_window_reveals_sentinel() {
        let mut deck = app();
        let _ = deck.update(Message::ImageBatchLoaded(Ok(urls(5))));
        let _ = deck.update(Message::ImageBatchLoaded(Ok(Vec::new())));
        assert_eq!(deck.batch_requests, 2);

        // Whole background fits in the window
        let _ = deck.scroll_to(0.0, 10_000.0);
        assert_eq!(deck.batch_requests, 3);
    }

    #[test]
    fn test_failed_catalog_leaves_list_empty() {
        let mut deck = app();
        let _ = deck.update(Message::LaunchesLoaded(Err(FetchError::Status {
            status: 500,
            body: String::new(),
        })));
        assert!(deck.browser.displayed().is_empty());
    }

    #[test]
    fn test_toggling_a_card_twice_collapses_it() {
        let mut deck = app();
        let catalog = Catalog::from_records(vec![sample_launch(1, "FalconSat", "2006-03-24")]);
        let _ = deck.update(Message::LaunchesLoaded(Ok(catalog)));
        assert_eq!(deck.browser.displayed().len(), 1);

        let _ = deck.update(Message::LaunchToggled(1));
        assert!(deck.browser.is_expanded(1));

        let _ = deck.update(Message::LaunchToggled(1));
        assert!(!deck.browser.is_expanded(1));
    }
}
