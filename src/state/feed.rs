//! Append-only background image feed

/// Ordered list of image URLs, grown one batch at a time.
///
/// Display order is fetch order. Nothing is ever removed or deduplicated.
#[derive(Debug, Clone, Default)]
pub struct ImageFeed {
    urls: Vec<String>,
}

impl ImageFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a batch in returned order.
    ///
    /// Returns the index range the batch now occupies.
    pub fn append(&mut self, batch: Vec<String>) -> std::ops::Range<usize> {
        let start = self.urls.len();
        self.urls.extend(batch);
        start..self.urls.len()
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.urls.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }
}
