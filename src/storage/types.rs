//! Core data types for the MPS content store
//!
//! This module defines the records persisted by the store:
//! - `Service`, `BlogPost`: seeded site content, read-only at runtime
//! - `Lead`, `NewLead`: visitor inquiries captured from the contact form
//! - `SiteConfig`: singleton site configuration edited from the admin panel
//! - `Language`, `LocalizedText`, `LocalizedList`: typed per-language maps
//!
//! Field names are camelCase on the wire to match the persisted layout.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Supported site languages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Language {
    #[serde(rename = "sr")]
    Sr,
    #[serde(rename = "hr")]
    Hr,
    #[serde(rename = "me")]
    Me,
    #[serde(rename = "en")]
    En,
    #[serde(rename = "ru")]
    Ru,
    #[serde(rename = "de")]
    De,
    #[serde(rename = "uk")]
    Uk,
    #[serde(rename = "tr")]
    Tr,
    #[serde(rename = "es")]
    Es,
    #[serde(rename = "zh-HK")]
    ZhHk,
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "ja")]
    Ja,
    #[serde(rename = "hi")]
    Hi,
}

impl Language {
    /// Language every localized map falls back to
    pub const DEFAULT: Language = Language::En;

    /// All supported languages, in picker order
    pub fn all() -> &'static [Language] {
        &[
            Language::Sr,
            Language::Hr,
            Language::Me,
            Language::En,
            Language::Ru,
            Language::De,
            Language::Uk,
            Language::Tr,
            Language::Es,
            Language::ZhHk,
            Language::ZhCn,
            Language::Ja,
            Language::Hi,
        ]
    }

    /// Wire tag (`en`, `zh-HK`, ...)
    pub fn code(&self) -> &'static str {
        match self {
            Language::Sr => "sr",
            Language::Hr => "hr",
            Language::Me => "me",
            Language::En => "en",
            Language::Ru => "ru",
            Language::De => "de",
            Language::Uk => "uk",
            Language::Tr => "tr",
            Language::Es => "es",
            Language::ZhHk => "zh-HK",
            Language::ZhCn => "zh-CN",
            Language::Ja => "ja",
            Language::Hi => "hi",
        }
    }

    /// Human-readable name for language pickers
    pub fn name(&self) -> &'static str {
        match self {
            Language::Sr => "Srpski",
            Language::Hr => "Hrvatski",
            Language::Me => "Crnogorski",
            Language::En => "English",
            Language::Ru => "Русский",
            Language::De => "Deutsch",
            Language::Uk => "Українська",
            Language::Tr => "Türkçe",
            Language::Es => "Español",
            Language::ZhHk => "繁體中文",
            Language::ZhCn => "简体中文",
            Language::Ja => "日本語",
            Language::Hi => "हिन्दी",
        }
    }

    /// Match a browser locale tag against the supported set.
    ///
    /// Only the primary subtag is considered: the first supported code equal
    /// to it or starting with it wins (`de-AT` -> `de`, `zh-TW` -> `zh-HK`).
    pub fn detect(tag: &str) -> Option<Language> {
        let primary = tag.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        if primary.is_empty() {
            return None;
        }
        Language::all().iter().copied().find(|lang| {
            let code = lang.code().to_ascii_lowercase();
            code == primary || code.starts_with(&primary)
        })
    }

    /// Pick the first detectable language from an `Accept-Language` header
    pub fn from_accept_language(header: &str) -> Option<Language> {
        header
            .split(',')
            .filter_map(|part| part.split(';').next())
            .find_map(Language::detect)
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::DEFAULT
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::all()
            .iter()
            .copied()
            .find(|lang| lang.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unsupported language: {}", s))
    }
}

/// Sparse per-language string map with default-language fallback
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<Language, String>);

impl LocalizedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(language, text)` pairs
    pub fn from_pairs<S: Into<String>>(pairs: impl IntoIterator<Item = (Language, S)>) -> Self {
        Self(pairs.into_iter().map(|(l, s)| (l, s.into())).collect())
    }

    /// Exact entry for `lang`, no fallback
    pub fn get(&self, lang: Language) -> Option<&str> {
        self.0.get(&lang).map(String::as_str)
    }

    /// Entry for `lang`, else the default language's entry, else empty
    pub fn resolve(&self, lang: Language) -> &str {
        self.get(lang)
            .filter(|s| !s.is_empty())
            .or_else(|| self.get(Language::DEFAULT))
            .unwrap_or("")
    }

    /// Replace a single language entry, leaving the others untouched
    pub fn set(&mut self, lang: Language, value: impl Into<String>) {
        self.0.insert(lang, value.into());
    }

    /// Languages that carry an entry
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Sparse per-language list map (service bullet points)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct LocalizedList(BTreeMap<Language, Vec<String>>);

impl LocalizedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (Language, Vec<&'static str>)>) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(l, items)| (l, items.into_iter().map(String::from).collect()))
                .collect(),
        )
    }

    pub fn get(&self, lang: Language) -> Option<&[String]> {
        self.0.get(&lang).map(Vec::as_slice)
    }

    /// Entry for `lang`, else the default language's entry, else empty
    pub fn resolve(&self, lang: Language) -> &[String] {
        self.get(lang)
            .filter(|items| !items.is_empty())
            .or_else(|| self.get(Language::DEFAULT))
            .unwrap_or(&[])
    }
}

/// Service category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Cleaning, pool care, repairs
    Maintenance,
    /// Property management and rentals
    Assets,
    /// Inspections, key holding, monitoring
    Security,
    /// Concierge, boat and car care
    Lifestyle,
}

impl Category {
    /// Get all categories for iteration
    pub fn all() -> &'static [Category] {
        &[
            Category::Maintenance,
            Category::Assets,
            Category::Security,
            Category::Lifestyle,
        ]
    }

    /// Order used when the services page groups by category
    pub fn display_order() -> &'static [Category] {
        &[
            Category::Maintenance,
            Category::Security,
            Category::Assets,
            Category::Lifestyle,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Maintenance => write!(f, "maintenance"),
            Category::Assets => write!(f, "assets"),
            Category::Security => write!(f, "security"),
            Category::Lifestyle => write!(f, "lifestyle"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "maintenance" => Ok(Category::Maintenance),
            "assets" => Ok(Category::Assets),
            "security" => Ok(Category::Security),
            "lifestyle" => Ok(Category::Lifestyle),
            other => Err(format!("Unknown category: {}", other)),
        }
    }
}

/// An offered service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Service {
    pub id: String,
    pub title: LocalizedText,
    pub description: LocalizedText,
    #[serde(default)]
    pub details: LocalizedList,
    /// Symbolic icon name, resolved by the front end
    pub icon: String,
    pub category: Category,
}

/// A blog post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlogPost {
    pub id: String,
    pub title: LocalizedText,
    pub content: LocalizedText,
    pub date: String,
    pub image: String,
}

/// Lead follow-up status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Closed,
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeadStatus::New => write!(f, "new"),
            LeadStatus::Contacted => write!(f, "contacted"),
            LeadStatus::Closed => write!(f, "closed"),
        }
    }
}

/// Contact-form submission, before the store stamps it
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub property_location: String,
    #[serde(default)]
    pub property_types: Vec<String>,
    #[serde(default)]
    pub service_types: Vec<String>,
}

/// A stored visitor inquiry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub property_location: String,
    pub property_types: Vec<String>,
    pub service_types: Vec<String>,
    pub status: LeadStatus,
    /// Creation instant, RFC 3339 UTC
    pub date: String,
}

impl Lead {
    /// Stamp a submission with identity, date and the initial status
    pub fn from_new(new: NewLead, id: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            full_name: new.full_name,
            email: new.email,
            phone: new.phone,
            message: new.message,
            property_location: new.property_location,
            property_types: new.property_types,
            service_types: new.service_types,
            status: LeadStatus::New,
            date: date.into(),
        }
    }
}

/// Site-wide configuration (singleton)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub primary_color: String,
    pub accent_color: String,
    pub contact_email: String,
    pub phone_number: String,
    pub address: String,
    pub about_title: LocalizedText,
    pub about_subtitle: LocalizedText,
    pub about_content: LocalizedText,
}
