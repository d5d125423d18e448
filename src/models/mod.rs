//! Typed records mapped from raw dataset items.
//!
//! Every model is built once by a `from_value` factory that never
//! fails: missing, null or wrongly-typed fields fall back to empty
//! strings, `None`, `false` or empty collections. Highly variable
//! sub-objects stay as opaque JSON and are read through accessors that
//! return `None` rather than panic on missing keys.

mod listing;
mod place;
mod product;
pub(crate) mod raw;
mod review;

pub use listing::{Listing, PredictedPrice};
pub use place::Place;
pub use product::Product;
pub use review::Review;

use serde::{Deserialize, Serialize};

/// Geographic point, latitude first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}
