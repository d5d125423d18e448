use serde::Serialize;
use serde_json::Value;

use super::raw;

/// A marketplace offer snapshot from Yandex Market.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    // Identity
    pub title: Option<String>,
    pub model_id: Option<i64>,
    pub market_sku: Option<String>,
    pub ware_id: Option<String>,
    pub osku_id: Option<i64>,
    pub article_number: Option<String>,
    pub business_id: Option<i64>,
    pub feed_id: Option<i64>,

    // Product info
    pub model_name: Option<String>,
    pub brand: Option<String>,
    pub description: Option<String>,
    pub product_url: Option<String>,
    pub canonical_url: Option<String>,
    pub product_slug: Option<String>,
    pub osku_slug: Option<String>,

    // Pricing
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub price_ya_bank: Option<f64>,
    pub price_without_vat: Option<f64>,

    // Rating & reviews
    pub rating: Option<f64>,
    pub rating_count: Option<i64>,
    pub review_count: Option<i64>,
    pub purchase_count: Option<i64>,
    pub rating_distribution: Option<Value>,

    // Seller
    pub shop_id: Option<i64>,
    pub vendor_id: Option<i64>,
    pub supplier_id: Option<i64>,
    pub seller_name: Option<String>,
    pub seller_rating: Option<f64>,
    pub seller_rating_count: Option<i64>,
    pub seller_logo: Option<String>,
    pub seller_slug: Option<String>,
    pub placement_type: Option<String>,

    // Category
    pub hid: Option<i64>,
    pub navnode_id: Option<i64>,
    pub department_id: Option<i64>,
    pub category_name: Option<String>,
    pub breadcrumbs: Option<Value>,

    // Availability & stock
    pub is_available: bool,
    pub stock_count: Option<i64>,
    pub min_order_quantity: Option<i64>,
    pub max_order_quantity: Option<i64>,
    pub is_cross_border: Option<bool>,

    // Offer flags
    pub is_express: bool,
    pub is_on_demand: Option<bool>,
    pub is_ultima: Option<bool>,
    pub sponsored: bool,
    pub supplier_type: Option<i64>,
    pub vat: Option<String>,
    pub payment_type: Option<String>,
    pub payment_methods: Option<Value>,
    pub is_bnpl: bool,
    pub offer_flags: Option<Value>,
    pub is_installments: Option<bool>,
    pub is_digital: Option<bool>,
    pub delivery_partner_types: Option<Value>,
    pub has_variants: Option<bool>,

    // Delivery
    pub delivery: Option<Value>,
    pub delivery_alternatives: Option<Value>,

    // Media
    pub images: Vec<String>,
    pub ugc_images: Vec<String>,
    pub videos: Vec<Value>,

    // Specifications
    pub specifications: Option<Value>,

    // Promos & badges
    pub promos: Option<Value>,
    pub feature_badges: Option<Value>,
    pub benefit_badge: Option<String>,

    // Internals
    pub shop_sku: Option<String>,
    pub feed_offer_id: Option<String>,
    pub warehouse_id: Option<String>,
    pub search_position: Option<i64>,
    pub scraped_at: Option<String>,

    // Embedded reviews, present only with the includeReviews option
    pub reviews: Vec<Value>,
}

impl Product {
    /// Build a product from a raw dataset record. Never fails.
    pub fn from_value(value: &Value) -> Self {
        let empty = serde_json::Map::new();
        let data = value.as_object().unwrap_or(&empty);

        Self {
            // Identity
            title: raw::opt_string(data, "title"),
            model_id: raw::opt_i64(data, "modelId"),
            market_sku: raw::opt_string(data, "marketSku"),
            ware_id: raw::opt_string(data, "wareId"),
            osku_id: raw::opt_i64(data, "oskuId"),
            article_number: raw::opt_string(data, "articleNumber"),
            business_id: raw::opt_i64(data, "businessId"),
            feed_id: raw::opt_i64(data, "feedId"),

            // Product info
            model_name: raw::opt_string(data, "modelName"),
            brand: raw::opt_string(data, "brand"),
            description: raw::opt_string(data, "description"),
            product_url: raw::opt_string(data, "productUrl"),
            canonical_url: raw::opt_string(data, "canonicalUrl"),
            product_slug: raw::opt_string(data, "productSlug"),
            osku_slug: raw::opt_string(data, "oskuSlug"),

            // Pricing
            price: raw::opt_f64(data, "price"),
            currency: raw::opt_string(data, "currency"),
            price_ya_bank: raw::opt_f64(data, "priceYaBank"),
            price_without_vat: raw::opt_f64(data, "priceWithoutVat"),

            // Rating & reviews
            rating: raw::opt_f64(data, "rating"),
            rating_count: raw::opt_i64(data, "ratingCount"),
            review_count: raw::opt_i64(data, "reviewCount"),
            purchase_count: raw::opt_i64(data, "purchaseCount"),
            rating_distribution: raw::opt_value(data, "ratingDistribution"),

            // Seller
            shop_id: raw::opt_i64(data, "shopId"),
            vendor_id: raw::opt_i64(data, "vendorId"),
            supplier_id: raw::opt_i64(data, "supplierId"),
            seller_name: raw::opt_string(data, "sellerName"),
            seller_rating: raw::opt_f64(data, "sellerRating"),
            seller_rating_count: raw::opt_i64(data, "sellerRatingCount"),
            seller_logo: raw::opt_string(data, "sellerLogo"),
            seller_slug: raw::opt_string(data, "sellerSlug"),
            placement_type: raw::opt_string(data, "placementType"),

            // Category
            hid: raw::opt_i64(data, "hid"),
            navnode_id: raw::opt_i64(data, "navnodeId"),
            department_id: raw::opt_i64(data, "departmentId"),
            category_name: raw::opt_string(data, "categoryName"),
            breadcrumbs: raw::opt_value(data, "breadcrumbs"),

            // Availability & stock
            is_available: raw::flag(data, "isAvailable"),
            stock_count: raw::opt_i64(data, "stockCount"),
            min_order_quantity: raw::opt_i64(data, "minOrderQuantity"),
            max_order_quantity: raw::opt_i64(data, "maxOrderQuantity"),
            is_cross_border: raw::opt_bool(data, "isCrossBorder"),

            // Offer flags
            is_express: raw::flag(data, "isExpress"),
            is_on_demand: raw::opt_bool(data, "isOnDemand"),
            is_ultima: raw::opt_bool(data, "isUltima"),
            sponsored: raw::flag(data, "sponsored"),
            supplier_type: raw::opt_i64(data, "supplierType"),
            vat: raw::opt_string(data, "vat"),
            payment_type: raw::opt_string(data, "paymentType"),
            payment_methods: raw::opt_value(data, "paymentMethods"),
            is_bnpl: raw::flag(data, "isBnpl"),
            offer_flags: raw::opt_value(data, "offerFlags"),
            is_installments: raw::opt_bool(data, "isInstallments"),
            is_digital: raw::opt_bool(data, "isDigital"),
            delivery_partner_types: raw::opt_value(data, "deliveryPartnerTypes"),
            has_variants: raw::opt_bool(data, "hasVariants"),

            // Delivery
            delivery: raw::opt_value(data, "delivery"),
            delivery_alternatives: raw::opt_value(data, "deliveryAlternatives"),

            // Media
            images: raw::string_list(data, "images"),
            ugc_images: raw::string_list(data, "ugcImages"),
            videos: raw::value_list(data, "videos"),

            // Specifications
            specifications: raw::opt_value(data, "specifications"),

            // Promos & badges
            promos: raw::opt_value(data, "promos"),
            feature_badges: raw::opt_value(data, "featureBadges"),
            benefit_badge: raw::opt_string(data, "benefitBadge"),

            // Internals
            shop_sku: raw::opt_string(data, "shopSku"),
            feed_offer_id: raw::opt_string(data, "feedOfferId"),
            warehouse_id: raw::opt_string(data, "warehouseId"),
            search_position: raw::opt_i64(data, "searchPosition"),
            scraped_at: raw::opt_string(data, "scrapedAt"),

            // Reviews
            reviews: raw::value_list(data, "reviews"),
        }
    }

    pub fn has_reviews(&self) -> bool {
        !self.reviews.is_empty()
    }

    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }

    pub fn is_in_stock(&self) -> bool {
        self.is_available
    }

    /// Price rounded to whole units with thousands grouping, plus the
    /// currency code when one is known ("54,990 RUB").
    pub fn price_formatted(&self) -> Option<String> {
        let price = self.price?;
        let formatted = group_thousands(price.round() as i64);

        Some(match &self.currency {
            Some(currency) => format!("{formatted} {currency}"),
            None => formatted,
        })
    }

    /// Percentage saved when paying with a YaBank card, rounded to one
    /// decimal place. `None` unless both prices are known and the base
    /// price is positive.
    pub fn ya_bank_discount(&self) -> Option<f64> {
        let price = self.price?;
        let price_ya_bank = self.price_ya_bank?;
        if price <= 0.0 {
            return None;
        }

        Some(((1.0 - price_ya_bank / price) * 1000.0).round() / 10.0)
    }

    pub fn has_ugc_images(&self) -> bool {
        !self.ugc_images.is_empty()
    }

    pub fn has_videos(&self) -> bool {
        !self.videos.is_empty()
    }
}

/// "54990" -> "54,990".
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    let lead = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && i % 3 == lead % 3 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_product() -> Value {
        json!({
            "title": "ASUS VivoBook 15 X1504VA-BQ613",
            "modelId": 1971655847u64,
            "marketSku": "101946073291",
            "productUrl": "https://market.yandex.ru/product--asus-vivobook-15/1971655847",
            "price": 54990.0,
            "currency": "RUB",
            "priceYaBank": 49491.0,
            "rating": 4.7,
            "ratingCount": 856,
            "reviewCount": 234,
            "purchaseCount": 5600,
            "brand": "ASUS",
            "categoryName": "Laptops",
            "description": "Laptop ASUS VivoBook 15 with Intel Core i5, 16GB RAM, 512GB SSD, 15.6\" FHD display.",
            "specifications": [
                {"name": "Processor", "value": "Intel Core i5-1335U"},
                {"name": "RAM", "value": "16 GB"},
                {"name": "Storage", "value": "512 GB SSD"},
            ],
            "isAvailable": true,
            "stockCount": 42,
            "sellerName": "TechStore",
            "sellerRating": 4.8,
            "sellerRatingCount": 12500,
            "sellerLogo": "https://avatars.mds.yandex.net/sellers/techstore.png",
            "businessId": 987654,
            "shopId": 123456,
            "images": [
                "https://avatars.mds.yandex.net/products/asus-1.jpg",
                "https://avatars.mds.yandex.net/products/asus-2.jpg",
                "https://avatars.mds.yandex.net/products/asus-3.jpg",
            ],
            "reviews": [
                {"rating": 5, "text": "Great laptop for the price"},
            ],
            "ratingDistribution": {"5": 450, "4": 250, "3": 100, "2": 36, "1": 20},
            "breadcrumbs": [
                {"name": "Electronics", "url": "/catalog/electronics"},
                {"name": "Laptops", "url": "/catalog/laptops"},
            ],
            "isExpress": true,
            "isBnpl": true,
            "sponsored": false,
            "searchPosition": 3,
            "scrapedAt": "2026-02-15T14:22:00Z",
        })
    }

    #[test]
    fn builds_from_full_record() {
        let product = Product::from_value(&sample_product());

        assert_eq!(product.title.as_deref(), Some("ASUS VivoBook 15 X1504VA-BQ613"));
        assert_eq!(product.model_id, Some(1971655847));
        assert_eq!(product.market_sku.as_deref(), Some("101946073291"));
        assert_eq!(product.price, Some(54990.0));
        assert_eq!(product.currency.as_deref(), Some("RUB"));
        assert_eq!(product.price_ya_bank, Some(49491.0));
        assert_eq!(product.rating, Some(4.7));
        assert_eq!(product.rating_count, Some(856));
        assert_eq!(product.review_count, Some(234));
        assert_eq!(product.purchase_count, Some(5600));
        assert_eq!(product.brand.as_deref(), Some("ASUS"));
        assert_eq!(product.category_name.as_deref(), Some("Laptops"));
        assert!(product.is_available);
        assert_eq!(product.stock_count, Some(42));
        assert_eq!(product.seller_name.as_deref(), Some("TechStore"));
        assert_eq!(product.seller_rating, Some(4.8));
        assert_eq!(product.business_id, Some(987654));
        assert_eq!(product.shop_id, Some(123456));
        assert!(product.is_express);
        assert!(product.is_bnpl);
        assert!(!product.sponsored);
        assert_eq!(product.search_position, Some(3));
        assert_eq!(product.scraped_at.as_deref(), Some("2026-02-15T14:22:00Z"));
        assert_eq!(product.images.len(), 3);
        assert!(product.has_reviews());
        assert!(product.has_images());
        assert!(product.is_in_stock());
    }

    #[test]
    fn empty_record_takes_defaults() {
        let product = Product::from_value(&json!({}));

        assert_eq!(product.title, None);
        assert_eq!(product.model_id, None);
        assert_eq!(product.price, None);
        assert_eq!(product.currency, None);
        assert_eq!(product.price_ya_bank, None);
        assert_eq!(product.rating, None);
        assert_eq!(product.brand, None);
        assert!(!product.is_available);
        assert_eq!(product.stock_count, None);
        assert_eq!(product.seller_name, None);
        assert!(!product.is_express);
        assert!(!product.is_bnpl);
        assert!(!product.sponsored);
        assert_eq!(product.search_position, None);
        assert_eq!(product.scraped_at, None);
        assert!(product.images.is_empty());
        assert!(product.reviews.is_empty());
        assert!(!product.has_reviews());
        assert!(!product.has_images());
        assert!(!product.is_in_stock());
    }

    #[test]
    fn price_formatting() {
        let product = Product::from_value(&sample_product());
        assert_eq!(product.price_formatted().as_deref(), Some("54,990 RUB"));

        let no_currency = Product::from_value(&json!({"price": 54990.0}));
        assert_eq!(no_currency.price_formatted().as_deref(), Some("54,990"));

        let no_price = Product::from_value(&json!({}));
        assert_eq!(no_price.price_formatted(), None);

        let small = Product::from_value(&json!({"price": 999, "currency": "RUB"}));
        assert_eq!(small.price_formatted().as_deref(), Some("999 RUB"));

        let large = Product::from_value(&json!({"price": 1234567.8}));
        assert_eq!(large.price_formatted().as_deref(), Some("1,234,568"));
    }

    #[test]
    fn ya_bank_discount() {
        let product = Product::from_value(&sample_product());
        assert_eq!(product.ya_bank_discount(), Some(10.0));

        let no_price = Product::from_value(&json!({"priceYaBank": 49491.0}));
        assert_eq!(no_price.ya_bank_discount(), None);

        let no_alt = Product::from_value(&json!({"price": 54990.0}));
        assert_eq!(no_alt.ya_bank_discount(), None);

        let zero_base = Product::from_value(&json!({"price": 0, "priceYaBank": 100}));
        assert_eq!(zero_base.ya_bank_discount(), None);

        let third = Product::from_value(&json!({"price": 300.0, "priceYaBank": 200.0}));
        assert_eq!(third.ya_bank_discount(), Some(33.3));
    }

    #[test]
    fn group_thousands_cases() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(54990), "54,990");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-54990), "-54,990");
    }
}
