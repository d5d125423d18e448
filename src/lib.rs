//! Typed client for the Apify-hosted Yandex scraper actors.
//!
//! Submits a scraping run (places, reviews or market products) to the
//! remote actor, waits for it to finish, fetches the result dataset and
//! maps every raw record into a typed model. All crawling, pagination
//! and anti-bot handling happens server-side; this crate only talks to
//! the actor-execution API.
//!
//! ```no_run
//! use yandex_scraper::{Client, PlacesParams};
//!
//! # async fn run() -> Result<(), yandex_scraper::Error> {
//! let client = Client::new("apify_api_token")?;
//! let places = client.scrape_places(&PlacesParams::default()).await?;
//! for place in &places {
//!     println!("{} ({:?})", place.title, place.rating);
//! }
//! # Ok(())
//! # }
//! ```

// The larger json! fixture literals overflow the default macro
// recursion limit when expanding tests.
#![cfg_attr(test, recursion_limit = "256")]

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod types;

pub use client::Client;
pub use config::Config;
pub use error::{Error, Result};
pub use models::{Coordinates, Listing, Place, PredictedPrice, Product, Review};
pub use types::{
    DealType, Language, MarketRegion, MarketSort, PlacesParams, ProductsParams, PropertyCategory,
    RealtySort, ReviewSort, ReviewsParams,
};
