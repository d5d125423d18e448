use serde::Serialize;
use serde_json::Value;

use super::raw;
use super::Coordinates;

/// A business profile scraped from Yandex Maps.
///
/// Only `business_id` and `title` are guaranteed (defaulting to empty
/// strings); everything else is whatever the actor managed to extract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    // Identity
    pub business_id: String,
    pub title: String,
    pub description: Option<String>,
    pub place_type: Option<String>,
    pub url: Option<String>,
    pub search_query: Option<String>,

    // Location
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub address: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    pub street: Option<String>,
    pub house: Option<String>,
    pub postal_code: Option<String>,

    // Status
    pub status: Option<String>,
    pub is_open_now: bool,
    pub is_verified_owner: bool,

    // Rating & reviews
    pub rating: Option<f64>,
    pub ratings_count: Option<i64>,
    pub review_count: Option<i64>,
    pub review_aspects: Option<Value>,

    // Categories
    pub categories: Vec<String>,

    // Contact
    pub phones: Vec<String>,
    pub website: Option<String>,
    pub email: Option<String>,
    pub social_links: Value,

    // Working hours
    pub working_hours_text: Option<String>,
    pub schedule: Value,

    // Features
    pub features: Value,

    // Media
    pub photo_count: Option<i64>,
    pub photo_url_template: Option<String>,
    pub video_count: i64,
    pub videos: Value,
    pub logo_url: Option<String>,

    // Chain
    pub chain_name: Option<String>,
    pub chain_id: Option<String>,

    // Booking
    pub booking_links: Value,
    pub booking_partner: Option<Value>,
    pub booking_availability: Option<Value>,

    // Nearby transit
    pub nearby_metro: Value,
    pub nearby_stops: Value,

    // Badges & awards
    pub badges: Vec<String>,
    pub awards: Option<Value>,

    // Snippet
    pub snippet: Option<Value>,

    // Geo & region
    pub region_id: Option<i64>,
    pub geo_id: Option<i64>,
    pub short_title: Option<String>,
    pub timezone_offset: Option<i64>,
    pub panorama: Option<Value>,
    pub bounds: Option<Value>,
    pub entrances: Value,
    pub popularity_histogram: Option<Value>,

    // External data
    pub sources: Value,
    pub feature_groups: Value,

    // Menu, legal, promo
    pub menu: Option<Value>,
    pub additional_address: Option<String>,
    pub legal_info: Option<Value>,
    pub action_buttons: Option<Value>,
    pub promo: Option<Value>,

    // Enrichment
    pub neurosummary: Option<String>,
    pub related_places: Option<Value>,
    pub visits_histogram: Option<Value>,
    pub trust_features: Option<Value>,
    pub discovery_collections: Option<Value>,
    pub mobile_videos: Option<Value>,
    pub mobile_posts: Option<Value>,

    // User-generated content
    pub reviews: Vec<Value>,
    pub photos: Vec<Value>,
    pub posts: Vec<Value>,
}

impl Place {
    /// Build a place from a raw dataset record. Never fails; absent
    /// fields take their documented defaults.
    pub fn from_value(value: &Value) -> Self {
        let empty = serde_json::Map::new();
        let data = value.as_object().unwrap_or(&empty);

        Self {
            // Identity
            business_id: raw::string(data, "businessId"),
            title: raw::string(data, "title"),
            description: raw::opt_string(data, "description"),
            place_type: raw::opt_string(data, "type"),
            url: raw::opt_string(data, "url"),
            search_query: raw::opt_string(data, "searchQuery"),

            // Location
            longitude: raw::opt_f64(data, "longitude"),
            latitude: raw::opt_f64(data, "latitude"),
            address: raw::opt_string(data, "address"),
            country: raw::opt_string(data, "country"),
            region: raw::opt_string(data, "region"),
            city: raw::opt_string(data, "city"),
            street: raw::opt_string(data, "street"),
            house: raw::opt_string(data, "house"),
            postal_code: raw::opt_string(data, "postalCode"),

            // Status
            status: raw::opt_string(data, "status"),
            is_open_now: raw::flag(data, "isOpenNow"),
            is_verified_owner: raw::flag(data, "isVerifiedOwner"),

            // Rating & reviews
            rating: raw::opt_f64(data, "rating"),
            ratings_count: raw::opt_i64(data, "ratingsCount"),
            review_count: raw::opt_i64(data, "reviewCount"),
            review_aspects: raw::opt_value(data, "reviewAspects"),

            // Categories
            categories: raw::string_list(data, "categories"),

            // Contact
            phones: raw::string_list(data, "phones"),
            website: raw::opt_string(data, "website"),
            email: raw::opt_string(data, "email"),
            social_links: raw::collection(data, "socialLinks"),

            // Working hours
            working_hours_text: raw::opt_string(data, "workingHoursText"),
            schedule: raw::collection(data, "schedule"),

            // Features
            features: raw::collection(data, "features"),

            // Media
            photo_count: raw::opt_i64(data, "photoCount"),
            photo_url_template: raw::opt_string(data, "photoUrlTemplate"),
            video_count: raw::opt_i64(data, "videoCount").unwrap_or(0),
            videos: raw::collection(data, "videos"),
            logo_url: raw::opt_string(data, "logoUrl"),

            // Chain
            chain_name: raw::opt_string(data, "chainName"),
            chain_id: raw::opt_string(data, "chainId"),

            // Booking
            booking_links: raw::collection(data, "bookingLinks"),
            booking_partner: raw::opt_value(data, "bookingPartner"),
            booking_availability: raw::opt_value(data, "bookingAvailability"),

            // Nearby transit
            nearby_metro: raw::collection(data, "nearbyMetro"),
            nearby_stops: raw::collection(data, "nearbyStops"),

            // Badges & awards
            badges: raw::string_list(data, "badges"),
            awards: raw::opt_value(data, "awards"),

            // Snippet
            snippet: raw::opt_value(data, "snippet"),

            // Geo & region
            region_id: raw::opt_i64(data, "regionId"),
            geo_id: raw::opt_i64(data, "geoId"),
            short_title: raw::opt_string(data, "shortTitle"),
            timezone_offset: raw::opt_i64(data, "timezoneOffset"),
            panorama: raw::opt_value(data, "panorama"),
            bounds: raw::opt_value(data, "bounds"),
            entrances: raw::collection(data, "entrances"),
            popularity_histogram: raw::opt_value(data, "popularityHistogram"),

            // External data
            sources: raw::collection(data, "sources"),
            feature_groups: raw::collection(data, "featureGroups"),

            // Menu, legal, promo
            menu: raw::opt_value(data, "menu"),
            additional_address: raw::opt_string(data, "additionalAddress"),
            legal_info: raw::opt_value(data, "legalInfo"),
            action_buttons: raw::opt_value(data, "actionButtons"),
            promo: raw::opt_value(data, "promo"),

            // Enrichment
            neurosummary: raw::opt_string(data, "neurosummary"),
            related_places: raw::opt_value(data, "relatedPlaces"),
            visits_histogram: raw::opt_value(data, "visitsHistogram"),
            trust_features: raw::opt_value(data, "trustFeatures"),
            discovery_collections: raw::opt_value(data, "discoveryCollections"),
            mobile_videos: raw::opt_value(data, "mobileVideos"),
            mobile_posts: raw::opt_value(data, "mobilePosts"),

            // User-generated content
            reviews: raw::value_list(data, "reviews"),
            photos: raw::value_list(data, "photos"),
            posts: raw::value_list(data, "posts"),
        }
    }

    /// Whether any contact channel (phone or email) is known.
    pub fn has_contact_info(&self) -> bool {
        !self.phones.is_empty() || self.email.as_deref().is_some_and(|e| !e.is_empty())
    }

    /// First phone number, if any.
    pub fn first_phone(&self) -> Option<&str> {
        self.phones.first().map(String::as_str)
    }

    pub fn has_website(&self) -> bool {
        self.website.as_deref().is_some_and(|w| !w.is_empty())
    }

    /// Coordinates when both latitude and longitude are present.
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
            _ => None,
        }
    }

    pub fn is_verified(&self) -> bool {
        self.is_verified_owner
    }

    pub fn has_videos(&self) -> bool {
        self.video_count > 0
    }

    pub fn has_menu(&self) -> bool {
        self.menu.is_some()
    }
}
