//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use crate::storage::{BlogPost, Category, Language, Lead, Service, SiteConfig, StoreStats};
use serde::{Deserialize, Serialize};

// ============================================
// CONTENT DTOs
// ============================================

/// Query parameters shared by public content endpoints
#[derive(Debug, Default, Deserialize)]
pub struct ContentQuery {
    /// Language tag (`de`, `zh-HK`, ...)
    #[serde(default)]
    pub lang: Option<String>,
    /// Restrict services to one category
    #[serde(default)]
    pub category: Option<String>,
}

/// A service rendered in one language
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub details: Vec<String>,
    pub icon: String,
    pub category: Category,
}

impl ServiceView {
    pub fn localize(service: &Service, lang: Language) -> Self {
        Self {
            id: service.id.clone(),
            title: service.title.resolve(lang).to_string(),
            description: service.description.resolve(lang).to_string(),
            details: service.details.resolve(lang).to_vec(),
            icon: service.icon.clone(),
            category: service.category,
        }
    }
}

/// Service list response
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceListResponse {
    pub language: Language,
    pub total: usize,
    pub services: Vec<ServiceView>,
}

/// One category block of the services page
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceGroup {
    pub category: Category,
    pub services: Vec<ServiceView>,
}

/// Grouped services response
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceGroupsResponse {
    pub language: Language,
    pub groups: Vec<ServiceGroup>,
}

/// A blog post rendered in one language
#[derive(Debug, Serialize, Deserialize)]
pub struct PostView {
    pub id: String,
    pub title: String,
    pub content: String,
    pub date: String,
    pub image: String,
}

impl PostView {
    pub fn localize(post: &BlogPost, lang: Language) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.resolve(lang).to_string(),
            content: post.content.resolve(lang).to_string(),
            date: post.date.clone(),
            image: post.image.clone(),
        }
    }
}

/// Post list response
#[derive(Debug, Serialize, Deserialize)]
pub struct PostListResponse {
    pub language: Language,
    pub total: usize,
    pub posts: Vec<PostView>,
}

/// About page, resolved for one language
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutResponse {
    pub language: Language,
    pub title: String,
    pub subtitle: String,
    pub content: String,
    pub phone_number: String,
    pub contact_email: String,
    pub address: String,
}

impl AboutResponse {
    pub fn localize(config: &SiteConfig, lang: Language) -> Self {
        Self {
            language: lang,
            title: config.about_title.resolve(lang).to_string(),
            subtitle: config.about_subtitle.resolve(lang).to_string(),
            content: config.about_content.resolve(lang).to_string(),
            phone_number: config.phone_number.clone(),
            contact_email: config.contact_email.clone(),
            address: config.address.clone(),
        }
    }
}

/// Language preference request/response
#[derive(Debug, Serialize, Deserialize)]
pub struct LanguageBody {
    pub language: String,
}

/// Supported language entry
#[derive(Debug, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub code: String,
    pub name: String,
}

/// Current and available languages
#[derive(Debug, Serialize, Deserialize)]
pub struct LanguageResponse {
    pub language: Language,
    pub available: Vec<LanguageInfo>,
}

// ============================================
// LEAD DTOs
// ============================================

/// Response to a contact-form submission
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitLeadResponse {
    pub status: String,
    pub lead: Lead,
}

/// Lead list response
#[derive(Debug, Serialize, Deserialize)]
pub struct LeadListResponse {
    pub total: usize,
    pub leads: Vec<Lead>,
}

// ============================================
// ADMIN DTOs
// ============================================

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Session state
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub authenticated: bool,
}

/// Admin overview counters
#[derive(Debug, Serialize, Deserialize)]
pub struct OverviewResponse {
    pub leads: usize,
    pub services: usize,
    pub posts: usize,
}

impl From<StoreStats> for OverviewResponse {
    fn from(stats: StoreStats) -> Self {
        Self {
            leads: stats.leads,
            services: stats.services,
            posts: stats.posts,
        }
    }
}

/// Edit one language of an about field
#[derive(Debug, Deserialize)]
pub struct AboutEditRequest {
    /// `title`, `subtitle` or `content`
    pub field: String,
    pub lang: String,
    pub value: String,
}

/// Edit one contact field
#[derive(Debug, Deserialize)]
pub struct ContactEditRequest {
    /// `phoneNumber`, `contactEmail` or `address`
    pub field: String,
    pub value: String,
}

/// Working copy of the site configuration
#[derive(Debug, Serialize, Deserialize)]
pub struct DraftResponse {
    pub dirty: bool,
    pub config: SiteConfig,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub storage: String,
    pub medium: String,
    pub uptime_seconds: u64,
    pub version: String,
}
