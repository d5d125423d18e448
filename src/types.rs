//! Enumerated actor options and per-operation request parameters.
//!
//! Each enum is a closed set of wire values understood by the remote
//! actors. The values are irregular provider codes, so they are exposed
//! through explicit `as_str`/`from_wire` pairs instead of serde renames.

use serde_json::{Map, Value};

/// Result language for places and reviews scrapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Auto,
    Russian,
    English,
    Turkish,
    Ukrainian,
    Kazakh,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Auto => "auto",
            Language::Russian => "ru",
            Language::English => "en",
            Language::Turkish => "tr",
            Language::Ukrainian => "uk",
            Language::Kazakh => "kk",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(Language::Auto),
            "ru" => Some(Language::Russian),
            "en" => Some(Language::English),
            "tr" => Some(Language::Turkish),
            "uk" => Some(Language::Ukrainian),
            "kk" => Some(Language::Kazakh),
            _ => None,
        }
    }
}

/// Ordering of scraped reviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewSort {
    #[default]
    Relevance,
    Newest,
    Highest,
    Lowest,
}

impl ReviewSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewSort::Relevance => "relevance",
            ReviewSort::Newest => "newest",
            ReviewSort::Highest => "highest",
            ReviewSort::Lowest => "lowest",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "relevance" => Some(ReviewSort::Relevance),
            "newest" => Some(ReviewSort::Newest),
            "highest" => Some(ReviewSort::Highest),
            "lowest" => Some(ReviewSort::Lowest),
            _ => None,
        }
    }
}

/// Ordering of market search results. `Default` maps to an empty wire
/// value and is omitted from request payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarketSort {
    #[default]
    Default,
    Popular,
    PriceAsc,
    PriceDesc,
    Rating,
}

impl MarketSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketSort::Default => "",
            MarketSort::Popular => "dpop",
            MarketSort::PriceAsc => "aprice",
            MarketSort::PriceDesc => "dprice",
            MarketSort::Rating => "rating",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "" => Some(MarketSort::Default),
            "dpop" => Some(MarketSort::Popular),
            "aprice" => Some(MarketSort::PriceAsc),
            "dprice" => Some(MarketSort::PriceDesc),
            "rating" => Some(MarketSort::Rating),
            _ => None,
        }
    }
}

/// Yandex Market delivery region. Wire values are numeric geo ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarketRegion {
    #[default]
    Moscow,
    SaintPetersburg,
    Yekaterinburg,
    Kazan,
    Novosibirsk,
    NizhnyNovgorod,
    Samara,
    RostovOnDon,
    Krasnodar,
    Chelyabinsk,
    Ufa,
    Perm,
    Voronezh,
    Volgograd,
    Krasnoyarsk,
    Omsk,
}

impl MarketRegion {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketRegion::Moscow => "213",
            MarketRegion::SaintPetersburg => "2",
            MarketRegion::Yekaterinburg => "54",
            MarketRegion::Kazan => "43",
            MarketRegion::Novosibirsk => "65",
            MarketRegion::NizhnyNovgorod => "69",
            MarketRegion::Samara => "51",
            MarketRegion::RostovOnDon => "39",
            MarketRegion::Krasnodar => "35",
            MarketRegion::Chelyabinsk => "56",
            MarketRegion::Ufa => "61",
            MarketRegion::Perm => "47",
            MarketRegion::Voronezh => "62",
            MarketRegion::Volgograd => "63",
            MarketRegion::Krasnoyarsk => "66",
            MarketRegion::Omsk => "68",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "213" => Some(MarketRegion::Moscow),
            "2" => Some(MarketRegion::SaintPetersburg),
            "54" => Some(MarketRegion::Yekaterinburg),
            "43" => Some(MarketRegion::Kazan),
            "65" => Some(MarketRegion::Novosibirsk),
            "69" => Some(MarketRegion::NizhnyNovgorod),
            "51" => Some(MarketRegion::Samara),
            "39" => Some(MarketRegion::RostovOnDon),
            "35" => Some(MarketRegion::Krasnodar),
            "56" => Some(MarketRegion::Chelyabinsk),
            "61" => Some(MarketRegion::Ufa),
            "47" => Some(MarketRegion::Perm),
            "62" => Some(MarketRegion::Voronezh),
            "63" => Some(MarketRegion::Volgograd),
            "66" => Some(MarketRegion::Krasnoyarsk),
            "68" => Some(MarketRegion::Omsk),
            _ => None,
        }
    }
}

/// Ordering of realty search results. Defined for the realty actor,
/// which has no scrape operation wired up yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RealtySort {
    #[default]
    Relevance,
    Newest,
    PriceAsc,
    PriceDesc,
    AreaAsc,
    AreaDesc,
    CommissioningDate,
}

impl RealtySort {
    pub fn as_str(&self) -> &'static str {
        match self {
            RealtySort::Relevance => "RELEVANCE",
            RealtySort::Newest => "DATE_DESC",
            RealtySort::PriceAsc => "PRICE",
            RealtySort::PriceDesc => "PRICE_DESC",
            RealtySort::AreaAsc => "AREA",
            RealtySort::AreaDesc => "AREA_DESC",
            RealtySort::CommissioningDate => "COMMISSIONING_DATE",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "RELEVANCE" => Some(RealtySort::Relevance),
            "DATE_DESC" => Some(RealtySort::Newest),
            "PRICE" => Some(RealtySort::PriceAsc),
            "PRICE_DESC" => Some(RealtySort::PriceDesc),
            "AREA" => Some(RealtySort::AreaAsc),
            "AREA_DESC" => Some(RealtySort::AreaDesc),
            "COMMISSIONING_DATE" => Some(RealtySort::CommissioningDate),
            _ => None,
        }
    }
}

/// Sale vs rent, for realty searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealType {
    Sell,
    Rent,
}

impl DealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DealType::Sell => "SELL",
            DealType::Rent => "RENT",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "SELL" => Some(DealType::Sell),
            "RENT" => Some(DealType::Rent),
            _ => None,
        }
    }
}

/// Realty property category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyCategory {
    Apartment,
    Rooms,
    House,
    Lot,
    Commercial,
    Garage,
}

impl PropertyCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyCategory::Apartment => "APARTMENT",
            PropertyCategory::Rooms => "ROOMS",
            PropertyCategory::House => "HOUSE",
            PropertyCategory::Lot => "LOT",
            PropertyCategory::Commercial => "COMMERCIAL",
            PropertyCategory::Garage => "GARAGE",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "APARTMENT" => Some(PropertyCategory::Apartment),
            "ROOMS" => Some(PropertyCategory::Rooms),
            "HOUSE" => Some(PropertyCategory::House),
            "LOT" => Some(PropertyCategory::Lot),
            "COMMERCIAL" => Some(PropertyCategory::Commercial),
            "GARAGE" => Some(PropertyCategory::Garage),
            _ => None,
        }
    }
}

/// Parameters for a places scrape.
///
/// `options` is a free-form map of provider-specific filters
/// (filterRating, filterOpenNow, filterCuisine, sortBy, startUrls,
/// coordinates, ...) merged over the built payload; caller-supplied
/// keys win on collision.
#[derive(Debug, Clone)]
pub struct PlacesParams {
    pub query: Vec<String>,
    pub location: String,
    pub max_results: u32,
    pub language: Language,
    pub options: Map<String, Value>,
}

impl Default for PlacesParams {
    fn default() -> Self {
        Self {
            query: vec!["restaurant".to_string()],
            location: "Moscow".to_string(),
            max_results: 100,
            language: Language::Russian,
            options: Map::new(),
        }
    }
}

/// Parameters for a reviews scrape.
///
/// At least one of `start_urls` (Yandex Maps business URLs) or
/// `business_ids` (direct numeric ids) must be non-empty. Zero-valued
/// limits and rating bounds are treated as unset and omitted from the
/// payload.
#[derive(Debug, Clone)]
pub struct ReviewsParams {
    pub start_urls: Vec<String>,
    pub business_ids: Vec<String>,
    pub max_reviews_per_place: u32,
    pub sort: ReviewSort,
    pub min_rating: u32,
    pub max_rating: u32,
    pub language: Language,
    pub options: Map<String, Value>,
}

impl Default for ReviewsParams {
    fn default() -> Self {
        Self {
            start_urls: Vec::new(),
            business_ids: Vec::new(),
            max_reviews_per_place: 0,
            sort: ReviewSort::Relevance,
            min_rating: 0,
            max_rating: 0,
            language: Language::English,
            options: Map::new(),
        }
    }
}

/// Parameters for a market products scrape.
#[derive(Debug, Clone)]
pub struct ProductsParams {
    pub query: String,
    pub max_items: u32,
    pub region: MarketRegion,
    pub sort: MarketSort,
    pub options: Map<String, Value>,
}

impl Default for ProductsParams {
    fn default() -> Self {
        Self {
            query: "ноутбук".to_string(),
            max_items: 100,
            region: MarketRegion::Moscow,
            sort: MarketSort::Default,
            options: Map::new(),
        }
    }
}
