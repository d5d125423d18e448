//! The actor-execution API client.
//!
//! Every scrape is two sequential HTTP calls: submit a run with
//! `waitForFinish` set to the configured timeout, then fetch the run's
//! default dataset in one unpaginated request. The raw items are mapped
//! into typed models in dataset order.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, RETRY_AFTER};
use reqwest::StatusCode;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{Place, Product, Review};
use crate::types::{Language, MarketSort, PlacesParams, ProductsParams, ReviewsParams};

const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Client for the remote scraper actors.
pub struct Client {
    http: reqwest::Client,
    config: Config,
}

impl Client {
    /// Create a client with the default endpoint and timeout.
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        Self::with_config(Config::new(api_token))
    }

    /// Create a client from an explicit config.
    pub fn with_config(config: Config) -> Result<Self> {
        let bearer = format!("Bearer {}", config.api_token);
        let bearer = HeaderValue::from_str(&bearer)
            .map_err(|e| Error::InvalidInput(format!("API token is not a valid header value: {e}")))?;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self { http, config })
    }

    /// Scrape places/businesses from Yandex Maps.
    ///
    /// Returns one [`Place`] per dataset item, in dataset order.
    pub async fn scrape_places(&self, params: &PlacesParams) -> Result<Vec<Place>> {
        let items = self
            .run_actor(Config::PLACES_ACTOR_ID, places_input(params))
            .await?;

        Ok(items.iter().map(Place::from_value).collect())
    }

    /// Scrape reviews of Yandex Maps businesses.
    ///
    /// Fails with [`Error::InvalidInput`] before any network call when
    /// both `start_urls` and `business_ids` are empty.
    pub async fn scrape_reviews(&self, params: &ReviewsParams) -> Result<Vec<Review>> {
        if params.start_urls.is_empty() && params.business_ids.is_empty() {
            return Err(Error::InvalidInput(
                "at least one of start_urls or business_ids must be provided".to_string(),
            ));
        }

        let items = self
            .run_actor(Config::REVIEWS_ACTOR_ID, reviews_input(params))
            .await?;

        Ok(items.iter().map(Review::from_value).collect())
    }

    /// Scrape products from Yandex Market.
    pub async fn scrape_products(&self, params: &ProductsParams) -> Result<Vec<Product>> {
        let items = self
            .run_actor(Config::MARKET_ACTOR_ID, products_input(params))
            .await?;

        Ok(items.iter().map(Product::from_value).collect())
    }

    /// Submit an actor run, wait for it server-side and fetch the
    /// resulting dataset items.
    async fn run_actor(&self, actor_id: &str, input: Map<String, Value>) -> Result<Vec<Value>> {
        let url = format!("{}/acts/{}/runs", self.config.base_url, actor_id);
        debug!(actor = actor_id, "submitting actor run");

        let response = self
            .http
            .post(&url)
            .query(&[("waitForFinish", self.config.timeout_secs)])
            .json(&Value::Object(input))
            .send()
            .await?;
        let response = check_status(response)?;

        let body: Value = response
            .json()
            .await
            .map_err(|e| Error::InvalidResponse(format!("run response is not valid JSON: {e}")))?;

        let dataset_id = body
            .pointer("/data/defaultDatasetId")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::InvalidResponse("missing dataset id in run response".to_string()))?;

        self.fetch_dataset(dataset_id).await
    }

    /// Fetch all items of a dataset in one call.
    async fn fetch_dataset(&self, dataset_id: &str) -> Result<Vec<Value>> {
        let url = format!("{}/datasets/{}/items", self.config.base_url, dataset_id);

        let response = self.http.get(&url).send().await?;
        let response = check_status(response)?;

        let items: Vec<Value> = response
            .json()
            .await
            .map_err(|e| Error::InvalidResponse(format!("dataset items are not a JSON array: {e}")))?;

        debug!(dataset = dataset_id, count = items.len(), "fetched dataset items");
        Ok(items)
    }
}

/// Classify a response status: 429 becomes a rate-limit error with the
/// advertised retry delay, any other non-2xx becomes a transport error.
fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    if response.status() == StatusCode::TOO_MANY_REQUESTS {
        let retry_after_secs = retry_after_secs(response.headers());
        warn!(retry_after_secs, "rate limited by the API");
        return Err(Error::RateLimited { retry_after_secs });
    }

    Ok(response.error_for_status()?)
}

/// `Retry-After` in seconds; 60 when the header is absent or not an
/// integer (date-form values are not supported by the API).
fn retry_after_secs(headers: &HeaderMap) -> u64 {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

fn places_input(params: &PlacesParams) -> Map<String, Value> {
    let mut input = Map::new();
    input.insert("query".to_string(), Value::from(params.query.clone()));
    input.insert("location".to_string(), Value::from(params.location.clone()));
    input.insert("maxResults".to_string(), Value::from(params.max_results));

    // "auto" is the actor's own default; sending it literally is
    // rejected by older actor versions, so it is simply omitted.
    if params.language != Language::Auto {
        input.insert("language".to_string(), Value::from(params.language.as_str()));
    }

    merge_options(&mut input, &params.options);
    input
}

fn reviews_input(params: &ReviewsParams) -> Map<String, Value> {
    let mut input = Map::new();

    if !params.start_urls.is_empty() {
        input.insert("startUrls".to_string(), Value::from(params.start_urls.clone()));
    }
    if !params.business_ids.is_empty() {
        input.insert("businessIds".to_string(), Value::from(params.business_ids.clone()));
    }
    if params.max_reviews_per_place > 0 {
        input.insert(
            "maxReviewsPerPlace".to_string(),
            Value::from(params.max_reviews_per_place),
        );
    }

    input.insert("reviewSort".to_string(), Value::from(params.sort.as_str()));

    if params.min_rating > 0 {
        input.insert("minRating".to_string(), Value::from(params.min_rating));
    }
    if params.max_rating > 0 {
        input.insert("maxRating".to_string(), Value::from(params.max_rating));
    }

    input.insert("language".to_string(), Value::from(params.language.as_str()));

    merge_options(&mut input, &params.options);
    input
}

fn products_input(params: &ProductsParams) -> Map<String, Value> {
    let mut input = Map::new();
    input.insert("query".to_string(), Value::from(params.query.clone()));
    input.insert("maxItems".to_string(), Value::from(params.max_items));
    input.insert("region".to_string(), Value::from(params.region.as_str()));

    if params.sort != MarketSort::Default {
        input.insert("sortBy".to_string(), Value::from(params.sort.as_str()));
    }

    merge_options(&mut input, &params.options);
    input
}

/// Shallow merge of caller options over the built payload; caller keys
/// win on collision.
fn merge_options(input: &mut Map<String, Value>, options: &Map<String, Value>) {
    for (key, value) in options {
        input.insert(key.clone(), value.clone());
    }
}
