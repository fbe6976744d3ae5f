//! HTTP client for the SpaceX v3 launch catalog

use super::{check_status, download_bytes, ImageHost, LaunchSource};
use crate::error::FetchError;
use crate::state::data::Launch;

/// Read-only client for `GET /v3/launches`
#[derive(Debug, Clone)]
pub struct SpaceXClient {
    client: reqwest::Client,
    launches_url: String,
}

impl SpaceXClient {
    /// Reuse an existing [`reqwest::Client`] (shared connection pool)
    pub fn with_client(client: reqwest::Client, launches_url: String) -> Self {
        Self { client, launches_url }
    }
}

impl LaunchSource for SpaceXClient {
    async fn fetch_launches(&self) -> Result<Vec<Launch>, FetchError> {
        let response = self.client.get(&self.launches_url).send().await?;
        let body = check_status(response).await?.bytes().await?;
        parse_launches(&body)
    }
}

/// Mission patches are hosted alongside the catalog records
impl ImageHost for SpaceXClient {
    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        download_bytes(&self.client, url).await
    }
}

/// Decode the catalog body (a JSON array of launch records)
pub fn parse_launches(body: &[u8]) -> Result<Vec<Launch>, FetchError> {
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_parse_catalog_array() {
        let body = br#"[
            {"flight_number": 1, "mission_name": "FalconSat", "launch_year": "2006",
             "launch_success": false, "details": null, "upcoming": false,
             "launch_date_utc": "2006-03-24T22:30:00.000Z",
             "links": {"mission_patch": null, "article_link": null, "video_link": null}},
            {"flight_number": 2, "mission_name": "DemoSat", "launch_year": "2007",
             "launch_success": false, "details": null, "upcoming": false,
             "launch_date_utc": "2007-03-21T01:10:00.000Z",
             "links": {"mission_patch": null, "article_link": null, "video_link": null}}
        ]"#;

        let launches = parse_launches(body).unwrap();
        assert_eq!(launches.len(), 2);
        assert_eq!(launches[1].mission_name, "DemoSat");
    }

    #[test]
    fn test_missing_fields_are_malformed() {
        let body = br#"[{"flight_number": 1}]"#;
        assert_matches!(parse_launches(body), Err(FetchError::Malformed(_)));
    }

    #[test]
    fn test_non_array_is_malformed() {
        assert_matches!(parse_launches(b"{\"error\": \"down\"}"), Err(FetchError::Malformed(_)));
    }
}
