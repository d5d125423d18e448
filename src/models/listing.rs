use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::raw;
use super::Coordinates;

/// Predicted price range for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictedPrice {
    pub min: i64,
    pub max: i64,
    pub value: i64,
}

/// A real-estate offer from Yandex Realty.
///
/// The upstream schema for price/location/building/apartment/house/lot
/// varies too much to type usefully, so those sub-objects stay as raw
/// JSON and are reached through accessors that tolerate missing keys.
/// Mapped from realty dataset items; note there is no scrape operation
/// for the realty actor yet (see [`crate::Config::REALTY_ACTOR_ID`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    // Identity
    pub offer_id: String,
    pub offer_type: String,
    pub offer_category: String,
    pub url: Option<String>,
    pub share_url: Option<String>,
    pub description: Option<String>,

    // Price
    pub price: Map<String, Value>,

    // Property details
    pub area: Option<Value>,
    pub rooms_total: Option<i64>,
    pub floors_offered: Vec<i64>,
    pub floors_total: Option<i64>,
    pub ceiling_height: Option<f64>,
    pub flat_type: Option<String>,
    pub open_plan: bool,

    // Spaces
    pub kitchen_space: Option<Value>,
    pub living_space: Option<Value>,
    pub room_space: Option<Value>,

    // Location
    pub location: Map<String, Value>,

    // Seller / author
    pub author: Option<Value>,
    pub phones: Option<Value>,

    // Dates
    pub creation_date: Option<String>,
    pub update_date: Option<String>,

    // Property structures
    pub apartment: Option<Value>,
    pub building: Option<Value>,
    pub house: Option<Value>,
    pub lot: Option<Value>,

    // Media
    pub full_images: Vec<String>,
    pub total_images: Option<i64>,

    // Price history & predictions
    pub history: Option<Value>,
    pub predictions: Option<Value>,

    // Status & flags
    pub active: bool,
    pub deal_status: Option<String>,
    pub exclusive: bool,
    pub premium: bool,
    pub promoted: bool,
    pub raised: bool,
    pub new_building: bool,
    pub not_for_agents: bool,
    pub suspicious: Option<bool>,
    pub trust: Option<String>,

    // Metadata
    pub tags: Vec<String>,
    pub views: Option<i64>,
    pub uid: Option<String>,
    pub platform: Option<String>,
    pub partner_id: Option<String>,
    pub partner_name: Option<String>,

    // Clustering
    pub cluster_id: Option<String>,
    pub cluster_header: Option<bool>,
    pub cluster_size: Option<i64>,

    // Conditions & supply
    pub supply_map: Option<Value>,
    pub transaction_conditions_map: Option<Value>,
    pub agent_fee: Option<String>,
    pub min_rent_period: Option<String>,
    pub rent_conditions_map: Option<Value>,
    pub utilities_included: Option<bool>,

    // Links & channels
    pub offer_links: Option<Value>,
    pub allowed_communication_channels: Option<Value>,

    // Promotions & trust
    pub tuz_info: Option<Value>,
    pub trusted_offer_info: Option<Value>,
    pub remote_review: Option<Value>,

    // Enriched fields
    pub enriched_fields: Option<Value>,

    // Other
    pub has_paid_calls: Option<bool>,
    pub new_flat_sale: Option<bool>,
    pub primary_sale_v2: Option<bool>,
    pub yandex_rent: Option<bool>,
    pub yandex_prodaja: Option<bool>,
    pub cashback_yandex_plus: Option<bool>,
    pub with_excerpt: Option<bool>,
    pub sales_departments: Option<Value>,
    pub site_info: Option<Value>,
}

impl Listing {
    /// Build a listing from a raw dataset record. Never fails.
    pub fn from_value(value: &Value) -> Self {
        let empty = Map::new();
        let data = value.as_object().unwrap_or(&empty);

        // The actor emits shareUrl or shareURL depending on version.
        let share_url =
            raw::opt_string(data, "shareUrl").or_else(|| raw::opt_string(data, "shareURL"));
        let url = raw::opt_string(data, "url").or_else(|| share_url.clone());

        Self {
            // Identity
            offer_id: raw::string(data, "offerId"),
            offer_type: raw::string(data, "offerType"),
            offer_category: raw::string(data, "offerCategory"),
            url,
            share_url,
            description: raw::opt_string(data, "description"),

            // Price
            price: raw::object(data, "price"),

            // Property details
            area: raw::opt_value(data, "area"),
            rooms_total: raw::opt_i64(data, "roomsTotal"),
            floors_offered: raw::i64_list(data, "floorsOffered"),
            floors_total: raw::opt_i64(data, "floorsTotal"),
            ceiling_height: raw::opt_f64(data, "ceilingHeight"),
            flat_type: raw::opt_string(data, "flatType"),
            open_plan: raw::flag(data, "openPlan"),

            // Spaces
            kitchen_space: raw::opt_value(data, "kitchenSpace"),
            living_space: raw::opt_value(data, "livingSpace"),
            room_space: raw::opt_value(data, "roomSpace"),

            // Location
            location: raw::object(data, "location"),

            // Seller / author
            author: raw::opt_value(data, "author"),
            phones: raw::opt_value(data, "phones"),

            // Dates
            creation_date: raw::opt_string(data, "creationDate"),
            update_date: raw::opt_string(data, "updateDate"),

            // Property structures
            apartment: raw::opt_value(data, "apartment"),
            building: raw::opt_value(data, "building"),
            house: raw::opt_value(data, "house"),
            lot: raw::opt_value(data, "lot"),

            // Media
            full_images: raw::string_list(data, "fullImages"),
            total_images: raw::opt_i64(data, "totalImages"),

            // Price history & predictions
            history: raw::opt_value(data, "history"),
            predictions: raw::opt_value(data, "predictions"),

            // Status & flags
            active: raw::flag_or(data, "active", true),
            deal_status: raw::opt_string(data, "dealStatus"),
            exclusive: raw::flag(data, "exclusive"),
            premium: raw::flag(data, "premium"),
            promoted: raw::flag(data, "promoted"),
            raised: raw::flag(data, "raised"),
            new_building: raw::flag(data, "newBuilding"),
            not_for_agents: raw::flag(data, "notForAgents"),
            suspicious: raw::opt_bool(data, "suspicious"),
            trust: raw::opt_string(data, "trust"),

            // Metadata
            tags: raw::string_list(data, "tags"),
            views: raw::opt_i64(data, "views"),
            uid: raw::opt_string(data, "uid"),
            platform: raw::opt_string(data, "platform"),
            partner_id: raw::opt_string(data, "partnerId"),
            partner_name: raw::opt_string(data, "partnerName"),

            // Clustering
            cluster_id: raw::opt_string(data, "clusterId"),
            cluster_header: raw::opt_bool(data, "clusterHeader"),
            cluster_size: raw::opt_i64(data, "clusterSize"),

            // Conditions & supply
            supply_map: raw::opt_value(data, "supplyMap"),
            transaction_conditions_map: raw::opt_value(data, "transactionConditionsMap"),
            agent_fee: raw::opt_string(data, "agentFee"),
            min_rent_period: raw::opt_string(data, "minRentPeriod"),
            rent_conditions_map: raw::opt_value(data, "rentConditionsMap"),
            utilities_included: raw::opt_bool(data, "utilitiesIncluded"),

            // Links & channels
            offer_links: raw::opt_value(data, "offerLinks"),
            allowed_communication_channels: raw::opt_value(data, "allowedCommunicationChannels"),

            // Promotions & trust
            tuz_info: raw::opt_value(data, "tuzInfo"),
            trusted_offer_info: raw::opt_value(data, "trustedOfferInfo"),
            remote_review: raw::opt_value(data, "remoteReview"),

            // Enriched fields
            enriched_fields: raw::opt_value(data, "enrichedFields"),

            // Other
            has_paid_calls: raw::opt_bool(data, "hasPaidCalls"),
            new_flat_sale: raw::opt_bool(data, "newFlatSale"),
            primary_sale_v2: raw::opt_bool(data, "primarySaleV2"),
            yandex_rent: raw::opt_bool(data, "yandexRent"),
            yandex_prodaja: raw::opt_bool(data, "yandexProdaja"),
            cashback_yandex_plus: raw::opt_bool(data, "cashbackYandexPlus"),
            with_excerpt: raw::opt_bool(data, "withExcerpt"),
            sales_departments: raw::opt_value(data, "salesDepartments"),
            site_info: raw::opt_value(data, "siteInfo"),
        }
    }

    /// Listing price in whole currency units.
    pub fn price_value(&self) -> Option<i64> {
        self.price.get("value").and_then(raw::to_i64)
    }

    /// Price currency code (typically "RUR").
    pub fn price_currency(&self) -> Option<&str> {
        self.price.get("currency").and_then(Value::as_str)
    }

    /// Price trend: INCREASED, DECREASED or UNCHANGED.
    pub fn price_trend(&self) -> Option<&str> {
        self.price.get("trend").and_then(Value::as_str)
    }

    /// Previous price, set only after a price change.
    pub fn previous_price(&self) -> Option<i64> {
        self.price.get("previous").and_then(raw::to_i64)
    }

    /// Full address string.
    pub fn address(&self) -> Option<&str> {
        self.location.get("address").and_then(Value::as_str)
    }

    /// Coordinates from `location.point`, when both axes are present.
    pub fn coordinates(&self) -> Option<Coordinates> {
        let point = self.location.get("point")?.as_object()?;
        let lat = point.get("latitude").and_then(raw::to_f64)?;
        let lng = point.get("longitude").and_then(raw::to_f64)?;
        Some(Coordinates { lat, lng })
    }

    /// Locality (city) name.
    pub fn city(&self) -> Option<&str> {
        self.location.get("localityName").and_then(Value::as_str)
    }

    /// Federation subject (region) name.
    pub fn region(&self) -> Option<&str> {
        self.location.get("subjectFederationName").and_then(Value::as_str)
    }

    /// Total area in square meters.
    pub fn area_value(&self) -> Option<f64> {
        self.area.as_ref()?.get("value").and_then(raw::to_f64)
    }

    /// Whether the phone block carries at least one number.
    pub fn has_phones(&self) -> bool {
        self.phones
            .as_ref()
            .and_then(|p| p.get("phones"))
            .and_then(Value::as_array)
            .is_some_and(|phones| !phones.is_empty())
    }

    /// First phone number, either a bare string/number or the
    /// `phoneNumber` field of a contact object. Entries of any other
    /// shape cannot be a phone number and yield `None`.
    pub fn first_phone(&self) -> Option<String> {
        let first = self
            .phones
            .as_ref()?
            .get("phones")?
            .as_array()?
            .first()?;

        match first {
            Value::Object(contact) => contact.get("phoneNumber").and_then(raw::to_string),
            other => raw::to_string(other),
        }
    }

    /// WhatsApp numbers published by the author.
    pub fn whatsapp_phones(&self) -> Vec<String> {
        self.author
            .as_ref()
            .and_then(|a| a.get("whatsappPhones"))
            .and_then(Value::as_array)
            .map(|phones| phones.iter().filter_map(raw::to_string).collect())
            .unwrap_or_default()
    }

    pub fn has_images(&self) -> bool {
        !self.full_images.is_empty()
    }

    /// Whether the price change history has any entries.
    pub fn has_price_history(&self) -> bool {
        self.history
            .as_ref()
            .and_then(Value::as_array)
            .is_some_and(|history| !history.is_empty())
    }

    /// Seller display name: organization, then agent name, then plain
    /// name, whichever the author block carries first.
    pub fn seller_name(&self) -> Option<&str> {
        let author = self.author.as_ref()?;
        ["organization", "agentName", "name"]
            .iter()
            .find_map(|key| author.get(*key).and_then(Value::as_str))
    }

    /// Whether the offer comes from the owner rather than an agency.
    pub fn is_from_owner(&self) -> bool {
        self.author
            .as_ref()
            .and_then(|a| a.get("category"))
            .and_then(Value::as_str)
            == Some("OWNER")
    }

    /// Construction year from the building block.
    pub fn building_year(&self) -> Option<i64> {
        self.building.as_ref()?.get("builtYear").and_then(raw::to_i64)
    }

    /// Predicted price range; requires at least the predicted value,
    /// min/max default to 0.
    pub fn predicted_price(&self) -> Option<PredictedPrice> {
        let predicted = self
            .predictions
            .as_ref()?
            .get("predictedPrice")?
            .as_object()?;
        let value = predicted.get("value").and_then(raw::to_i64)?;

        Some(PredictedPrice {
            min: predicted.get("min").and_then(raw::to_i64).unwrap_or(0),
            max: predicted.get("max").and_then(raw::to_i64).unwrap_or(0),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_listing() -> Value {
        json!({
            "offerId": "6352161035621587728",
            "offerType": "SELL",
            "offerCategory": "APARTMENT",
            "url": "https://realty.yandex.ru/offer/6352161035621587728/",
            "shareUrl": "https://realty.yandex.ru/offer/6352161035621587728/",
            "description": "Bright three-room apartment in the center of Sochi, five minutes from the sea.",
            "price": {
                "value": 16000000,
                "currency": "RUR",
                "period": "WHOLE_LIFE",
                "trend": "DECREASED",
                "previous": 16900000,
                "hasPriceHistory": true,
            },
            "area": {"value": 74.3, "unit": "SQUARE_METER"},
            "roomsTotal": 3,
            "floorsOffered": [3],
            "floorsTotal": 5,
            "ceilingHeight": 2.6,
            "flatType": "SECONDARY",
            "openPlan": false,
            "location": {
                "address": "Сочи, улица Войкова, 45",
                "point": {"latitude": 43.584198, "longitude": 39.723051},
                "localityName": "Сочи",
                "subjectFederationName": "Краснодарский край",
            },
            "author": {
                "id": "ag_7710",
                "category": "AGENCY",
                "organization": "Этажи Сочи",
                "agentName": "Anna K.",
                "whatsappPhones": ["+79180000000"],
            },
            "phones": {
                "phones": [{"phoneNumber": "+78620000000"}],
            },
            "building": {"builtYear": 1966, "buildingType": "BRICK"},
            "apartment": {"renovation": "EURO"},
            "house": {"bathroomUnit": "MATCHED"},
            "fullImages": [
                "https://avatars.mds.yandex.net/realty/offer-1.jpg",
                "https://avatars.mds.yandex.net/realty/offer-2.jpg",
            ],
            "totalImages": 24,
            "history": [
                {"price": 16900000, "date": "2026-01-05"},
            ],
            "predictions": {
                "predictedPrice": {"min": 15000000, "max": 17000000, "value": 16100000},
            },
            "active": true,
            "exclusive": false,
            "premium": true,
            "promoted": true,
            "raised": false,
            "newBuilding": false,
            "notForAgents": false,
            "trust": "NORMAL",
            "views": 1523,
            "uid": 45721,
            "partnerId": "1035218734",
            "partnerName": "Этажи",
            "clusterId": "c1",
            "clusterSize": 2,
        })
    }

    #[test]
    fn builds_from_full_record() {
        let listing = Listing::from_value(&sample_listing());

        assert_eq!(listing.offer_id, "6352161035621587728");
        assert_eq!(listing.offer_type, "SELL");
        assert_eq!(listing.offer_category, "APARTMENT");
        assert!(listing.url.as_deref().unwrap().contains("realty.yandex.ru"));
        assert_eq!(listing.rooms_total, Some(3));
        assert_eq!(listing.floors_offered, vec![3]);
        assert_eq!(listing.floors_total, Some(5));
        assert_eq!(listing.ceiling_height, Some(2.6));
        assert_eq!(listing.flat_type.as_deref(), Some("SECONDARY"));
        assert!(!listing.open_plan);
        assert!(listing.active);
        assert!(listing.premium);
        assert!(listing.promoted);
        assert!(!listing.new_building);
        assert_eq!(listing.trust.as_deref(), Some("NORMAL"));
        assert_eq!(listing.views, Some(1523));
        // Numeric uid is coerced to a string.
        assert_eq!(listing.uid.as_deref(), Some("45721"));
        assert_eq!(listing.total_images, Some(24));
    }

    #[test]
    fn nested_objects_pass_through() {
        let listing = Listing::from_value(&sample_listing());

        assert_eq!(listing.price["value"], json!(16000000));
        assert_eq!(listing.price["currency"], json!("RUR"));
        assert_eq!(listing.price["trend"], json!("DECREASED"));
        assert_eq!(listing.location["address"], json!("Сочи, улица Войкова, 45"));
        assert_eq!(listing.location["point"]["latitude"], json!(43.584198));
        assert_eq!(listing.building.as_ref().unwrap()["builtYear"], json!(1966));
        assert_eq!(listing.apartment.as_ref().unwrap()["renovation"], json!("EURO"));
        assert_eq!(listing.house.as_ref().unwrap()["bathroomUnit"], json!("MATCHED"));
    }

    #[test]
    fn url_falls_back_to_share_url() {
        let listing = Listing::from_value(&json!({
            "shareURL": "https://realty.yandex.ru/offer/1/",
        }));

        assert_eq!(listing.url.as_deref(), Some("https://realty.yandex.ru/offer/1/"));
        assert_eq!(listing.share_url.as_deref(), Some("https://realty.yandex.ru/offer/1/"));
    }

    #[test]
    fn empty_record_takes_defaults() {
        let listing = Listing::from_value(&json!({}));

        assert_eq!(listing.offer_id, "");
        assert_eq!(listing.offer_type, "");
        assert_eq!(listing.offer_category, "");
        assert_eq!(listing.url, None);
        assert!(listing.price.is_empty());
        assert!(listing.location.is_empty());
        assert_eq!(listing.author, None);
        assert_eq!(listing.building, None);
        assert!(listing.full_images.is_empty());
        // `active` is the one flag defaulting to true.
        assert!(listing.active);
        assert!(!listing.premium);
        assert_eq!(listing.suspicious, None);
        assert!(listing.tags.is_empty());
    }

    #[test]
    fn price_accessors() {
        let listing = Listing::from_value(&sample_listing());
        assert_eq!(listing.price_value(), Some(16000000));
        assert_eq!(listing.price_currency(), Some("RUR"));
        assert_eq!(listing.price_trend(), Some("DECREASED"));
        assert_eq!(listing.previous_price(), Some(16900000));

        let empty = Listing::from_value(&json!({}));
        assert_eq!(empty.price_value(), None);
        assert_eq!(empty.price_currency(), None);
        assert_eq!(empty.price_trend(), None);
        assert_eq!(empty.previous_price(), None);
    }

    #[test]
    fn location_accessors() {
        let listing = Listing::from_value(&sample_listing());
        let coords = listing.coordinates().unwrap();
        assert_eq!(coords.lat, 43.584198);
        assert_eq!(coords.lng, 39.723051);
        assert_eq!(listing.city(), Some("Сочи"));
        assert_eq!(listing.region(), Some("Краснодарский край"));
        assert!(listing.address().unwrap().contains("Войкова"));

        // Empty location: every accessor degrades to None.
        let bare = Listing::from_value(&json!({"location": {}}));
        assert_eq!(bare.coordinates(), None);
        assert_eq!(bare.city(), None);
        assert_eq!(bare.region(), None);
        assert_eq!(bare.address(), None);

        let no_point = Listing::from_value(&json!({"location": {"point": {"latitude": 43.58}}}));
        assert_eq!(no_point.coordinates(), None);
    }

    #[test]
    fn phone_accessors() {
        let listing = Listing::from_value(&sample_listing());
        assert!(listing.has_phones());
        assert_eq!(listing.first_phone().as_deref(), Some("+78620000000"));
        assert_eq!(listing.whatsapp_phones(), vec!["+79180000000".to_string()]);

        // Presence of the block is not enough; the list must be non-empty.
        let empty_block = Listing::from_value(&json!({"phones": {"phones": []}}));
        assert!(!empty_block.has_phones());
        assert_eq!(empty_block.first_phone(), None);

        let bare_strings = Listing::from_value(&json!({"phones": {"phones": ["+70001112233"]}}));
        assert!(bare_strings.has_phones());
        assert_eq!(bare_strings.first_phone().as_deref(), Some("+70001112233"));

        // Bare numbers coerce; anything else is not a phone number.
        let bare_number = Listing::from_value(&json!({"phones": {"phones": [78620000000i64]}}));
        assert_eq!(bare_number.first_phone().as_deref(), Some("78620000000"));

        let odd_entry = Listing::from_value(&json!({"phones": {"phones": [true]}}));
        assert!(odd_entry.has_phones());
        assert_eq!(odd_entry.first_phone(), None);

        let none = Listing::from_value(&json!({}));
        assert!(!none.has_phones());
        assert!(none.whatsapp_phones().is_empty());
    }

    #[test]
    fn seller_accessors() {
        let listing = Listing::from_value(&sample_listing());
        assert_eq!(listing.seller_name(), Some("Этажи Сочи"));
        assert!(!listing.is_from_owner());

        let agent_only = Listing::from_value(&json!({"author": {"agentName": "Anna K."}}));
        assert_eq!(agent_only.seller_name(), Some("Anna K."));

        let owner = Listing::from_value(&json!({"author": {"category": "OWNER", "name": "Ivan"}}));
        assert!(owner.is_from_owner());
        assert_eq!(owner.seller_name(), Some("Ivan"));

        let anonymous = Listing::from_value(&json!({}));
        assert_eq!(anonymous.seller_name(), None);
        assert!(!anonymous.is_from_owner());
    }

    #[test]
    fn history_and_predictions() {
        let listing = Listing::from_value(&sample_listing());
        assert!(listing.has_price_history());
        assert_eq!(
            listing.predicted_price(),
            Some(PredictedPrice { min: 15000000, max: 17000000, value: 16100000 })
        );
        assert_eq!(listing.building_year(), Some(1966));

        let empty_history = Listing::from_value(&json!({"history": []}));
        assert!(!empty_history.has_price_history());

        let no_value = Listing::from_value(&json!({
            "predictions": {"predictedPrice": {"min": 1, "max": 2}},
        }));
        assert_eq!(no_value.predicted_price(), None);

        let bare = Listing::from_value(&json!({}));
        assert!(!bare.has_price_history());
        assert_eq!(bare.predicted_price(), None);
        assert_eq!(bare.building_year(), None);
    }

    #[test]
    fn area_accessor() {
        let listing = Listing::from_value(&sample_listing());
        assert_eq!(listing.area_value(), Some(74.3));

        let bare = Listing::from_value(&json!({}));
        assert_eq!(bare.area_value(), None);
    }
}
