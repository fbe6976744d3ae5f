/// Remote data sources
///
/// - The SpaceX launch catalog (spacex.rs)
/// - NASA's Astronomy Picture of the Day feed (apod.rs)
///
/// The traits below are the seam between the loaders and HTTP, so the
/// loaders can be exercised against in-memory sources.

pub mod spacex;
pub mod apod;

use std::future::Future;

use crate::error::FetchError;
use crate::state::data::Launch;

pub use apod::ApodClient;
pub use spacex::SpaceXClient;

/// Something that can hand over the full launch catalog
pub trait LaunchSource {
    /// Fetch every launch record, duplicates included
    fn fetch_launches(&self) -> impl Future<Output = Result<Vec<Launch>, FetchError>> + Send;
}

/// Something that can hand over batches of displayable image URLs
pub trait ImagerySource {
    /// Fetch up to `count` image URLs, in source order
    fn fetch_batch(&self, count: usize) -> impl Future<Output = Result<Vec<String>, FetchError>> + Send;
}

/// Something that can download the pictures its own records point at
/// (APOD tiles for the imagery source, mission patches for the catalog)
pub trait ImageHost {
    /// Download the raw bytes behind an image URL
    fn fetch_image(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send;
}

/// Plain `GET` returning the body bytes
pub(crate) async fn download_bytes(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, FetchError> {
    let response = client.get(url).send().await?;
    let bytes = check_status(response).await?.bytes().await?;
    Ok(bytes.to_vec())
}

/// Turn a non-2xx response into [`FetchError::Status`]
pub(crate) async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(FetchError::Status {
        status: status.as_u16(),
        body,
    })
}
