/// User interface module
///
/// - Header, search box, sort button and status radios (toolbar.rs)
/// - Launch cards with expandable details (launch_card.rs)
/// - Scrolling background feed and its sentinel (background.rs)
/// - Downloaded image handles (images.rs)

pub mod toolbar;
pub mod launch_card;
pub mod background;
pub mod images;
