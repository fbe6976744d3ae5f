//! Application configuration loaded from environment variables

use crate::error::ConfigError;

const DEFAULT_LAUNCHES_URL: &str = "https://api.spacexdata.com/v3/launches";
const DEFAULT_APOD_URL: &str = "https://api.nasa.gov/planetary/apod";
const DEFAULT_APOD_API_KEY: &str = "DEMO_KEY";
const DEFAULT_IMAGE_BATCH_SIZE: usize = 5;
const DEFAULT_BACKGROUND_TILE_HEIGHT: f32 = 900.0;

/// Runtime configuration.
///
/// All fields have defaults that work against the public APIs; the
/// NASA demo key is heavily rate limited, so set `APOD_API_KEY` for
/// real use.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Launch catalog endpoint (SpaceX v3 launches)
    pub launches_url: String,
    /// Astronomy Picture of the Day endpoint
    pub apod_url: String,
    /// Access credential for the imagery source
    pub apod_api_key: String,
    /// Images requested per feed batch
    pub image_batch_size: usize,
    /// Height of one background tile in logical pixels
    pub background_tile_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            launches_url: DEFAULT_LAUNCHES_URL.to_string(),
            apod_url: DEFAULT_APOD_URL.to_string(),
            apod_api_key: DEFAULT_APOD_API_KEY.to_string(),
            image_batch_size: DEFAULT_IMAGE_BATCH_SIZE,
            background_tile_height: DEFAULT_BACKGROUND_TILE_HEIGHT,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                                  |
    /// |--------------------------|------------------------------------------|
    /// | `LAUNCHES_URL`           | `https://api.spacexdata.com/v3/launches` |
    /// | `APOD_URL`               | `https://api.nasa.gov/planetary/apod`    |
    /// | `APOD_API_KEY`           | `DEMO_KEY`                               |
    /// | `IMAGE_BATCH_SIZE`       | `5`                                      |
    /// | `BACKGROUND_TILE_HEIGHT` | `900`                                    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let launches_url = lookup("LAUNCHES_URL").unwrap_or(defaults.launches_url);
        let apod_url = lookup("APOD_URL").unwrap_or(defaults.apod_url);
        let apod_api_key = lookup("APOD_API_KEY").unwrap_or(defaults.apod_api_key);

        let image_batch_size = match lookup("IMAGE_BATCH_SIZE") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n >= 1 => n,
                _ => return Err(invalid("IMAGE_BATCH_SIZE", "a positive integer", raw)),
            },
            None => defaults.image_batch_size,
        };

        let background_tile_height = match lookup("BACKGROUND_TILE_HEIGHT") {
            Some(raw) => match raw.trim().parse::<f32>() {
                Ok(h) if h.is_finite() && h > 0.0 => h,
                _ => return Err(invalid("BACKGROUND_TILE_HEIGHT", "a positive number", raw)),
            },
            None => defaults.background_tile_height,
        };

        Ok(Self {
            launches_url,
            apod_url,
            apod_api_key,
            image_batch_size,
            background_tile_height,
        })
    }
}

fn invalid(key: &'static str, expected: &'static str, value: String) -> ConfigError {
    ConfigError::Invalid { key, expected, value }
}
