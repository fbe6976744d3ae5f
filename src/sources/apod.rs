//! HTTP client for NASA's Astronomy Picture of the Day API
//!
//! `GET {apod_url}?count=N&api_key=KEY` returns N random entries.
//! Repeats across calls are possible and accepted.

use serde::Deserialize;

use super::{check_status, download_bytes, ImageHost, ImagerySource};
use crate::error::FetchError;

/// One APOD entry; only the fields the feed needs
#[derive(Debug, Clone, Deserialize)]
pub struct ApodEntry {
    /// Displayable URL (image, or a video embed page)
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ApodClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl ApodClient {
    pub fn with_client(client: reqwest::Client, api_url: String, api_key: String) -> Self {
        Self {
            client,
            api_url,
            api_key,
        }
    }
}

impl ImagerySource for ApodClient {
    async fn fetch_batch(&self, count: usize) -> Result<Vec<String>, FetchError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("count", count.to_string()), ("api_key", self.api_key.clone())])
            .send()
            .await?;

        let body = check_status(response).await?.bytes().await?;
        parse_batch(&body)
    }
}

impl ImageHost for ApodClient {
    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        download_bytes(&self.client, url).await
    }
}

/// Decode a batch body into image URLs, in returned order.
///
/// Entries without a `url` are skipped.
pub fn parse_batch(body: &[u8]) -> Result<Vec<String>, FetchError> {
    let entries: Vec<ApodEntry> = serde_json::from_slice(body)?;
    Ok(entries.into_iter().filter_map(|entry| entry.url).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_parse_batch_keeps_order() {
        let body = br#"[
            {"date": "2011-05-02", "media_type": "image", "title": "M101",
             "url": "https://apod.nasa.gov/apod/image/1105/m101_hst.jpg"},
            {"date": "2019-07-20", "media_type": "video", "title": "Apollo 11",
             "url": "https://www.youtube.com/embed/S9HdPi9Ikhk"},
            {"date": "2003-01-01", "media_type": "image", "title": "No URL"},
            {"date": "2015-12-24", "media_type": "image", "title": "Comet",
             "url": "https://apod.nasa.gov/apod/image/1512/catalina.jpg"}
        ]"#;

        let urls = parse_batch(body).unwrap();

        assert_eq!(
            urls,
            [
                "https://apod.nasa.gov/apod/image/1105/m101_hst.jpg",
                "https://www.youtube.com/embed/S9HdPi9Ikhk",
                "https://apod.nasa.gov/apod/image/1512/catalina.jpg",
            ]
        );
    }

    #[test]
    fn test_error_object_is_malformed() {
        let body = br#"{"error": {"code": "API_KEY_INVALID"}}"#;
        assert_matches!(parse_batch(body), Err(FetchError::Malformed(_)));
    }
}
