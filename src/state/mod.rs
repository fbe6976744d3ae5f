/// State management module
///
/// This module handles all application state, including:
/// - Launch records and badges (data.rs)
/// - The deduplicated canonical dataset (catalog.rs)
/// - Search, status filter and sort controls (controls.rs)
/// - Filter-then-sort view derivation (derive.rs)
/// - The browser state that ties them together (browser.rs)
/// - The background image feed (feed.rs)

pub mod data;
pub mod catalog;
pub mod controls;
pub mod derive;
pub mod browser;
pub mod feed;
