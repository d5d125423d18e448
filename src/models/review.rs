use serde::Serialize;
use serde_json::Value;

use super::raw;

/// A single review of a business, with a denormalized snapshot of the
/// business and the author. `business_id` references a [`super::Place`]
/// but no integrity is enforced; the snapshot is all there is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    // Review identification
    pub review_id: String,
    pub rating: i64,
    pub text: Option<String>,
    pub date: Option<String>,

    // Business context
    pub business_id: String,
    pub business_title: Option<String>,
    pub business_url: Option<String>,
    pub business_address: Option<String>,
    pub business_city: Option<String>,
    pub business_rating: Option<f64>,
    pub business_ratings_count: Option<i64>,
    pub business_categories: Vec<String>,
    pub neurosummary: Option<String>,
    pub review_aspects: Option<Value>,

    // Author info
    pub author_name: Option<String>,
    pub author_id: Option<String>,
    pub author_avatar_url: Option<String>,
    pub author_profile_url: Option<String>,
    pub author_level: Option<String>,
    pub is_anonymous: bool,
    pub author_achievements: Vec<String>,
    pub author_professions: Vec<String>,

    // Engagement
    pub like_count: Option<i64>,
    pub dislike_count: Option<i64>,
    pub comment_count: Option<i64>,

    // Business reply
    pub business_comment: Option<String>,
    pub business_comment_date: Option<String>,

    // Media
    pub photos: Vec<String>,
    pub videos: Vec<String>,

    // Language & translations
    pub text_language: Option<String>,
    pub text_translations: Vec<String>,

    // Metadata
    pub is_public_rating: Option<bool>,
    pub bold: Option<bool>,
    pub key_phrases: Option<Value>,
}

impl Review {
    /// Build a review from a raw dataset record. Never fails.
    pub fn from_value(value: &Value) -> Self {
        let empty = serde_json::Map::new();
        let data = value.as_object().unwrap_or(&empty);

        Self {
            // Review identification
            review_id: raw::string(data, "reviewId"),
            rating: raw::opt_i64(data, "rating").unwrap_or(0),
            text: raw::opt_string(data, "text"),
            date: raw::opt_string(data, "date"),

            // Business context
            business_id: raw::string(data, "businessId"),
            business_title: raw::opt_string(data, "businessTitle"),
            business_url: raw::opt_string(data, "businessUrl"),
            business_address: raw::opt_string(data, "businessAddress"),
            business_city: raw::opt_string(data, "businessCity"),
            business_rating: raw::opt_f64(data, "businessRating"),
            business_ratings_count: raw::opt_i64(data, "businessRatingsCount"),
            business_categories: raw::string_list(data, "businessCategories"),
            neurosummary: raw::opt_string(data, "neurosummary"),
            review_aspects: raw::opt_value(data, "reviewAspects"),

            // Author info
            author_name: raw::opt_string(data, "authorName"),
            author_id: raw::opt_string(data, "authorId"),
            author_avatar_url: raw::opt_string(data, "authorAvatarUrl"),
            author_profile_url: raw::opt_string(data, "authorProfileUrl"),
            author_level: raw::opt_string(data, "authorLevel"),
            is_anonymous: raw::flag(data, "isAnonymous"),
            author_achievements: raw::string_list(data, "authorAchievements"),
            author_professions: raw::string_list(data, "authorProfessions"),

            // Engagement
            like_count: raw::opt_i64(data, "likeCount"),
            dislike_count: raw::opt_i64(data, "dislikeCount"),
            comment_count: raw::opt_i64(data, "commentCount"),

            // Business reply
            business_comment: raw::opt_string(data, "businessComment"),
            business_comment_date: raw::opt_string(data, "businessCommentDate"),

            // Media
            photos: raw::string_list(data, "photos"),
            videos: raw::string_list(data, "videos"),

            // Language & translations
            text_language: raw::opt_string(data, "textLanguage"),
            text_translations: raw::string_list(data, "textTranslations"),

            // Metadata
            is_public_rating: raw::opt_bool(data, "isPublicRating"),
            bold: raw::opt_bool(data, "bold"),
            key_phrases: raw::opt_value(data, "keyPhrases"),
        }
    }

    /// Whether the business posted a non-empty reply.
    pub fn has_business_reply(&self) -> bool {
        self.business_comment.as_deref().is_some_and(|c| !c.is_empty())
    }

    /// The business reply text, if a non-empty one exists.
    pub fn business_reply_text(&self) -> Option<&str> {
        if !self.has_business_reply() {
            return None;
        }
        self.business_comment.as_deref()
    }

    pub fn has_photos(&self) -> bool {
        !self.photos.is_empty()
    }

    pub fn has_videos(&self) -> bool {
        !self.videos.is_empty()
    }

    /// 4-5 stars. A 3-star review is neither positive nor negative.
    pub fn is_positive(&self) -> bool {
        self.rating >= 4
    }

    /// 1-2 stars.
    pub fn is_negative(&self) -> bool {
        self.rating <= 2
    }

    pub fn has_translation(&self) -> bool {
        !self.text_translations.is_empty()
    }
}
