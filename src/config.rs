/// Connection settings for the actor-execution API.
///
/// The timeout is reused as both the server-side `waitForFinish`
/// window and the transport timeout of the underlying HTTP client.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_token: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Config {
    /// Actor running the places/businesses scraper.
    pub const PLACES_ACTOR_ID: &'static str = "zen-studio/yandex-places-scraper";

    /// Actor running the reviews scraper.
    pub const REVIEWS_ACTOR_ID: &'static str = "zen-studio/yandex-reviews-scraper";

    /// Actor running the market product scraper.
    pub const MARKET_ACTOR_ID: &'static str = "zen-studio/yandex-market-scraper-parser";

    /// Actor running the realty scraper. The realty option types and
    /// [`crate::models::Listing`] exist, but no scrape operation is
    /// wired to this actor yet (the upstream feature is incomplete).
    pub const REALTY_ACTOR_ID: &'static str = "zen-studio/yandex-realty-scraper";

    pub const DEFAULT_BASE_URL: &'static str = "https://api.apify.com/v2";

    pub const DEFAULT_TIMEOUT_SECS: u64 = 900;

    /// Create a config with the default endpoint and timeout.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout_secs: Self::DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = Config::new("test_api_token");

        assert_eq!(config.api_token, "test_api_token");
        assert_eq!(config.base_url, "https://api.apify.com/v2");
        assert_eq!(config.timeout_secs, 900);
    }

    #[test]
    fn custom_values() {
        let config = Config::new("custom_token")
            .base_url("https://custom.api.com/v2")
            .timeout_secs(600);

        assert_eq!(config.api_token, "custom_token");
        assert_eq!(config.base_url, "https://custom.api.com/v2");
        assert_eq!(config.timeout_secs, 600);
    }

    #[test]
    fn fixed_actor_ids() {
        assert_eq!(Config::PLACES_ACTOR_ID, "zen-studio/yandex-places-scraper");
        assert_eq!(Config::REVIEWS_ACTOR_ID, "zen-studio/yandex-reviews-scraper");
        assert_eq!(Config::MARKET_ACTOR_ID, "zen-studio/yandex-market-scraper-parser");
        assert_eq!(Config::REALTY_ACTOR_ID, "zen-studio/yandex-realty-scraper");
    }
}
