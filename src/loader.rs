//! Best-effort loaders for the launch catalog and the image feed
//!
//! Both run as independent background tasks. Errors are returned to the
//! caller, which logs them and leaves its state untouched.

use crate::error::FetchError;
use crate::sources::{ImageHost, ImagerySource, LaunchSource};
use crate::state::catalog::Catalog;

/// Fetch the full launch catalog once and collapse duplicate flight numbers
pub async fn load_launch_catalog<S>(source: &S) -> Result<Catalog, FetchError>
where
    S: LaunchSource + Sync,
{
    let records = source.fetch_launches().await?;
    let fetched = records.len();
    let catalog = Catalog::from_records(records);

    if catalog.len() != fetched {
        tracing::debug!(
            fetched,
            unique = catalog.len(),
            "Collapsed duplicate flight numbers"
        );
    }

    Ok(catalog)
}

/// Fetch one batch of background image URLs
pub async fn load_image_batch<S>(source: &S, batch_size: usize) -> Result<Vec<String>, FetchError>
where
    S: ImagerySource + Sync,
{
    source.fetch_batch(batch_size).await
}

/// Download the bytes for one image and check they really are an image.
///
/// The imagery source sometimes points at video pages; those come back
/// as [`FetchError::Malformed`].
pub async fn load_image_bytes<H>(host: &H, url: &str) -> Result<Vec<u8>, FetchError>
where
    H: ImageHost + Sync,
{
    let bytes = host.fetch_image(url).await?;

    match image::guess_format(&bytes) {
        Ok(_) => Ok(bytes),
        Err(_) => Err(FetchError::Malformed(format!("not an image: {url}"))),
    }
}
