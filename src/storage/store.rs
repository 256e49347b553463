//! MPS Content Store
//!
//! Typed access to the four persisted collections plus the small session
//! and preference records:
//! - Read path: medium.get → JSON decode → value (or default on any failure)
//! - Write path: value → JSON encode → medium.set (immediately durable)
//!
//! There is no in-memory cache. Every read decodes from the medium, so a
//! write from any component is visible to every other one straight away.
//! Writers are assumed to be a single process; two concurrent lead appends
//! can overwrite each other (last full-list write wins).

use crate::storage::error::StorageResult;
use crate::storage::medium::{FileMedium, KeyValueMedium, MemoryMedium};
use crate::storage::seed;
use crate::storage::types::{BlogPost, Category, Language, Lead, NewLead, Service, SiteConfig};
use chrono::{SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Fixed storage keys
pub mod keys {
    pub const SERVICES: &str = "mps_services";
    pub const POSTS: &str = "mps_posts";
    pub const LEADS: &str = "mps_leads";
    pub const CONFIG: &str = "mps_config";
    pub const AUTH: &str = "mps_auth_token";
    pub const LANGUAGE: &str = "mps_lang";
}

/// Configuration for the content store
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory holding one JSON file per key
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("mps_data"),
        }
    }
}

impl StorageConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

/// The content store
#[derive(Clone)]
pub struct ContentStore {
    medium: Arc<dyn KeyValueMedium>,
}

impl ContentStore {
    /// Create a store over any medium
    pub fn new(medium: Arc<dyn KeyValueMedium>) -> Self {
        Self { medium }
    }

    /// Open a file-backed store
    pub fn open(config: &StorageConfig) -> StorageResult<Self> {
        let medium = FileMedium::open(&config.data_dir)?;
        Ok(Self::new(Arc::new(medium)))
    }

    /// Create an ephemeral in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryMedium::new()))
    }

    /// Kind of the underlying medium (`file`, `memory`)
    pub fn medium_kind(&self) -> &'static str {
        self.medium.kind()
    }

    /// Seed every absent collection with its compiled-in default.
    ///
    /// Existing values are never touched, corrupt ones included, so this is
    /// safe to call on every start.
    pub fn initialize(&self) -> StorageResult<()> {
        let mut seeded = Vec::new();

        if self.seed_if_absent(keys::SERVICES, &seed::default_services())? {
            seeded.push(keys::SERVICES);
        }
        if self.seed_if_absent(keys::POSTS, &seed::default_posts())? {
            seeded.push(keys::POSTS);
        }
        if self.seed_if_absent(keys::CONFIG, &seed::default_config())? {
            seeded.push(keys::CONFIG);
        }
        if self.seed_if_absent(keys::LEADS, &Vec::<Lead>::new())? {
            seeded.push(keys::LEADS);
        }

        if seeded.is_empty() {
            tracing::debug!(medium = self.medium.kind(), "Content store already initialized");
        } else {
            tracing::info!(medium = self.medium.kind(), keys = ?seeded, "Seeded content store");
        }
        Ok(())
    }

    fn seed_if_absent<T: Serialize>(&self, key: &str, value: &T) -> StorageResult<bool> {
        let present = self
            .medium
            .get(key)?
            .map(|raw| !raw.is_empty())
            .unwrap_or(false);
        if present {
            return Ok(false);
        }
        self.write(key, value)?;
        Ok(true)
    }

    /// All services (empty if never seeded or unreadable)
    pub fn get_services(&self) -> Vec<Service> {
        self.read_or(keys::SERVICES, Vec::new)
    }

    /// Services in one category, catalogue order preserved
    pub fn services_by_category(&self, category: Category) -> Vec<Service> {
        self.get_services()
            .into_iter()
            .filter(|s| s.category == category)
            .collect()
    }

    /// Services grouped in the services-page display order, empty groups skipped
    pub fn services_grouped(&self) -> Vec<(Category, Vec<Service>)> {
        let services = self.get_services();
        Category::display_order()
            .iter()
            .map(|&category| {
                let group: Vec<Service> = services
                    .iter()
                    .filter(|s| s.category == category)
                    .cloned()
                    .collect();
                (category, group)
            })
            .filter(|(_, group)| !group.is_empty())
            .collect()
    }

    /// All blog posts
    pub fn get_posts(&self) -> Vec<BlogPost> {
        self.read_or(keys::POSTS, Vec::new)
    }

    /// All leads, newest first
    pub fn get_leads(&self) -> Vec<Lead> {
        self.read_or(keys::LEADS, Vec::new)
    }

    /// Look up a single lead
    pub fn get_lead(&self, id: &str) -> Option<Lead> {
        self.get_leads().into_iter().find(|l| l.id == id)
    }

    /// Stored site configuration, or the compiled-in default
    pub fn get_config(&self) -> SiteConfig {
        self.read_or(keys::CONFIG, seed::default_config)
    }

    /// Overwrite the stored configuration with `config`
    pub fn save_config(&self, config: &SiteConfig) -> StorageResult<()> {
        self.write(keys::CONFIG, config)?;
        tracing::info!("Saved site configuration");
        Ok(())
    }

    /// Stamp a submission and prepend it to the stored leads.
    ///
    /// Unlike [`get_leads`](Self::get_leads), an unreadable or corrupt list
    /// fails the insert; the stored list is never replaced by a partial one.
    pub fn insert_lead(&self, new: NewLead) -> StorageResult<Lead> {
        let mut leads: Vec<Lead> = self.read_strict(keys::LEADS)?.unwrap_or_default();
        let now = Utc::now();

        let mut id = now.timestamp_millis();
        if let Some(newest) = leads.first().and_then(|l| l.id.parse::<i64>().ok()) {
            if newest >= id {
                id = newest + 1;
            }
        }

        let lead = Lead::from_new(
            new,
            id.to_string(),
            now.to_rfc3339_opts(SecondsFormat::Millis, true),
        );
        leads.insert(0, lead.clone());
        self.write(keys::LEADS, &leads)?;

        tracing::info!(lead_id = %lead.id, total = leads.len(), "Stored new lead");
        Ok(lead)
    }

    /// Collection sizes for the admin overview
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            leads: self.get_leads().len(),
            services: self.get_services().len(),
            posts: self.get_posts().len(),
        }
    }

    /// Saved visitor language, if any
    pub fn get_language(&self) -> Option<Language> {
        let raw = self.read_raw(keys::LANGUAGE)?;
        raw.trim().trim_matches('"').parse().ok()
    }

    /// Remember the visitor's language choice
    pub fn set_language(&self, lang: Language) -> StorageResult<()> {
        self.medium.set(keys::LANGUAGE, lang.code())
    }

    /// Raw session sentinel, if present
    pub fn session_token(&self) -> Option<String> {
        self.read_raw(keys::AUTH).filter(|t| !t.is_empty())
    }

    pub fn set_session_token(&self, token: &str) -> StorageResult<()> {
        self.medium.set(keys::AUTH, token)
    }

    pub fn clear_session_token(&self) -> StorageResult<()> {
        self.medium.remove(keys::AUTH)
    }

    /// Check that the medium answers reads
    pub fn ping(&self) -> StorageResult<()> {
        self.medium.get(keys::CONFIG).map(|_| ())
    }

    fn read_raw(&self, key: &str) -> Option<String> {
        match self.medium.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "Storage read failed, treating as absent");
                None
            }
        }
    }

    fn read_or<T: DeserializeOwned>(&self, key: &str, default: impl FnOnce() -> T) -> T {
        let Some(raw) = self.read_raw(key) else {
            return default();
        };
        if raw.is_empty() {
            return default();
        }
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "Corrupt stored value, using default");
                default()
            }
        }
    }

    /// Read for a read-modify-write: medium and decode errors propagate,
    /// only an absent or empty value is `None`
    fn read_strict<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        match self.medium.get(key)? {
            Some(raw) if !raw.is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
            _ => Ok(None),
        }
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StorageResult<()> {
        let raw = serde_json::to_string(value)?;
        self.medium.set(key, &raw)
    }
}

/// Collection counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub leads: usize,
    pub services: usize,
    pub posts: usize,
}

impl std::fmt::Display for StoreStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Leads: {}, Services: {}, Posts: {}",
            self.leads, self.services, self.posts
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::error::StorageError;
    use crate::storage::types::{LeadStatus, LocalizedText};
    use chrono::DateTime;
    use std::collections::HashSet;
    use tempfile::tempdir;

    fn jane() -> NewLead {
        NewLead {
            full_name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: "+382600000".to_string(),
            message: "Need cleaning".to_string(),
            property_location: "Budva".to_string(),
            property_types: vec!["Villa".to_string()],
            service_types: vec!["Cleaning".to_string()],
        }
    }

    fn named(name: &str) -> NewLead {
        NewLead {
            full_name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            ..Default::default()
        }
    }

    /// Medium whose every call fails
    struct BrokenMedium;

    impl KeyValueMedium for BrokenMedium {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Unavailable("broken".into()))
        }
        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Unavailable("broken".into()))
        }
        fn remove(&self, _key: &str) -> StorageResult<()> {
            Err(StorageError::Unavailable("broken".into()))
        }
        fn kind(&self) -> &'static str {
            "broken"
        }
    }

    #[test]
    fn test_initialize_seeds_defaults() {
        let store = ContentStore::in_memory();
        store.initialize().unwrap();

        let services = store.get_services();
        let expected = seed::default_services();
        assert_eq!(services.len(), expected.len());
        let ids: Vec<_> = services.iter().map(|s| s.id.clone()).collect();
        let expected_ids: Vec<_> = expected.iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids, expected_ids);

        assert_eq!(store.get_posts(), seed::default_posts());
        assert_eq!(store.get_config(), seed::default_config());
        assert!(store.get_leads().is_empty());
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let store = ContentStore::in_memory();
        store.initialize().unwrap();
        let services = store.get_services();
        let config = store.get_config();

        store.initialize().unwrap();
        assert_eq!(store.get_services(), services);
        assert_eq!(store.get_config(), config);
        assert!(store.get_leads().is_empty());
    }

    #[test]
    fn test_initialize_never_reverts_saved_data() {
        let store = ContentStore::in_memory();
        store.initialize().unwrap();

        let mut config = store.get_config();
        config.phone_number = "+382 69 999 999".to_string();
        store.save_config(&config).unwrap();
        store.insert_lead(named("Ana")).unwrap();

        store.initialize().unwrap();
        assert_eq!(store.get_config().phone_number, "+382 69 999 999");
        assert_eq!(store.get_leads().len(), 1);
    }

    #[test]
    fn test_reads_before_initialize() {
        let store = ContentStore::in_memory();
        assert!(store.get_services().is_empty());
        assert!(store.get_posts().is_empty());
        assert!(store.get_leads().is_empty());
        assert_eq!(store.get_config(), seed::default_config());
    }

    #[test]
    fn test_corrupt_values_degrade_to_defaults() {
        let medium = Arc::new(MemoryMedium::new());
        medium.set(keys::CONFIG, "{not json").unwrap();
        medium.set(keys::LEADS, "42").unwrap();
        let store = ContentStore::new(medium.clone());

        assert_eq!(store.get_config(), seed::default_config());
        assert!(store.get_leads().is_empty());

        // initialize leaves present values alone, even unreadable ones
        store.initialize().unwrap();
        assert_eq!(medium.get(keys::CONFIG).unwrap().as_deref(), Some("{not json"));
    }

    #[test]
    fn test_broken_medium_reads_degrade_writes_fail() {
        let store = ContentStore::new(Arc::new(BrokenMedium));
        assert!(store.get_services().is_empty());
        assert_eq!(store.get_config(), seed::default_config());
        assert!(store.session_token().is_none());

        assert!(store.initialize().is_err());
        assert!(store.save_config(&seed::default_config()).is_err());
        assert!(store.insert_lead(named("Ana")).is_err());
        assert!(store.ping().is_err());
    }

    #[test]
    fn test_save_config_roundtrip() {
        let store = ContentStore::in_memory();
        let mut config = seed::default_config();
        config.primary_color = "#000000".to_string();
        config.about_title = LocalizedText::from_pairs([(Language::Ja, "私たちについて")]);

        store.save_config(&config).unwrap();
        assert_eq!(store.get_config(), config);
    }

    #[test]
    fn test_lead_stamping() {
        let store = ContentStore::in_memory();
        store.initialize().unwrap();
        let before = Utc::now().timestamp_millis();

        let lead = store.insert_lead(jane()).unwrap();

        let stored = &store.get_leads()[0];
        assert_eq!(stored, &lead);
        assert_eq!(stored.full_name, "Jane Doe");
        assert_eq!(stored.email, "jane@x.com");
        assert_eq!(stored.phone, "+382600000");
        assert_eq!(stored.message, "Need cleaning");
        assert_eq!(stored.property_location, "Budva");
        assert_eq!(stored.property_types, vec!["Villa".to_string()]);
        assert_eq!(stored.service_types, vec!["Cleaning".to_string()]);
        assert_eq!(stored.status, LeadStatus::New);
        assert!(!stored.id.is_empty());

        let date = DateTime::parse_from_rfc3339(&stored.date).unwrap();
        assert!(date.timestamp_millis() >= before);
        assert!(stored.date.ends_with('Z'));
    }

    #[test]
    fn test_leads_newest_first() {
        let store = ContentStore::in_memory();
        store.initialize().unwrap();

        store.insert_lead(named("A")).unwrap();
        store.insert_lead(named("B")).unwrap();

        let leads = store.get_leads();
        assert_eq!(leads.len(), 2);
        assert_eq!(leads[0].full_name, "B");
        assert_eq!(leads[1].full_name, "A");
    }

    #[test]
    fn test_lead_ids_unique_and_increasing() {
        let store = ContentStore::in_memory();
        for i in 0..50 {
            store.insert_lead(named(&format!("L{}", i))).unwrap();
        }
        let leads = store.get_leads();
        let ids: HashSet<_> = leads.iter().map(|l| l.id.clone()).collect();
        assert_eq!(ids.len(), 50);

        let numeric: Vec<i64> = leads.iter().map(|l| l.id.parse().unwrap()).collect();
        assert!(numeric.windows(2).all(|w| w[0] > w[1]));
    }

    /// Fails the first read of the leads key, then behaves normally
    struct FlakyLeadsMedium {
        inner: MemoryMedium,
        fail_next: std::sync::atomic::AtomicBool,
    }

    impl KeyValueMedium for FlakyLeadsMedium {
        fn get(&self, key: &str) -> StorageResult<Option<String>> {
            use std::sync::atomic::Ordering;
            if key == keys::LEADS && self.fail_next.swap(false, Ordering::SeqCst) {
                return Err(StorageError::Io(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "transient read failure",
                )));
            }
            self.inner.get(key)
        }
        fn set(&self, key: &str, value: &str) -> StorageResult<()> {
            self.inner.set(key, value)
        }
        fn remove(&self, key: &str) -> StorageResult<()> {
            self.inner.remove(key)
        }
        fn kind(&self) -> &'static str {
            "flaky"
        }
    }

    #[test]
    fn test_insert_lead_read_error_keeps_existing_leads() {
        let medium = Arc::new(FlakyLeadsMedium {
            inner: MemoryMedium::new(),
            fail_next: std::sync::atomic::AtomicBool::new(false),
        });
        let store = ContentStore::new(medium.clone());
        for name in ["A", "B", "C"] {
            store.insert_lead(named(name)).unwrap();
        }

        medium
            .fail_next
            .store(true, std::sync::atomic::Ordering::SeqCst);
        assert!(matches!(
            store.insert_lead(named("New")),
            Err(StorageError::Io(_))
        ));

        let names: Vec<_> = store.get_leads().into_iter().map(|l| l.full_name).collect();
        assert_eq!(names, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_insert_lead_refuses_to_overwrite_corrupt_list() {
        let medium = Arc::new(MemoryMedium::new());
        let corrupt = r#"[{"id":"1","fullName":"Old"#;
        medium.set(keys::LEADS, corrupt).unwrap();
        let store = ContentStore::new(medium.clone());

        assert!(matches!(
            store.insert_lead(jane()),
            Err(StorageError::Serialization(_))
        ));
        assert_eq!(medium.get(keys::LEADS).unwrap().as_deref(), Some(corrupt));
    }

    #[test]
    fn test_insert_lead_into_empty_value() {
        let medium = Arc::new(MemoryMedium::new());
        medium.set(keys::LEADS, "").unwrap();
        let store = ContentStore::new(medium);
        store.insert_lead(jane()).unwrap();
        assert_eq!(store.get_leads().len(), 1);
    }

    #[test]
    fn test_get_lead_by_id() {
        let store = ContentStore::in_memory();
        let lead = store.insert_lead(jane()).unwrap();
        assert_eq!(store.get_lead(&lead.id), Some(lead));
        assert!(store.get_lead("missing").is_none());
    }

    #[test]
    fn test_services_grouped_in_display_order() {
        let store = ContentStore::in_memory();
        store.initialize().unwrap();

        let groups = store.services_grouped();
        let order: Vec<Category> = groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(order, Category::display_order().to_vec());

        let total: usize = groups.iter().map(|(_, g)| g.len()).sum();
        assert_eq!(total, store.get_services().len());

        let security = store.services_by_category(Category::Security);
        assert!(security.iter().all(|s| s.category == Category::Security));
    }

    #[test]
    fn test_stats() {
        let store = ContentStore::in_memory();
        store.initialize().unwrap();
        store.insert_lead(named("A")).unwrap();

        let stats = store.stats();
        assert_eq!(stats.leads, 1);
        assert_eq!(stats.services, seed::default_services().len());
        assert_eq!(stats.posts, seed::default_posts().len());
    }

    #[test]
    fn test_language_preference() {
        let store = ContentStore::in_memory();
        assert!(store.get_language().is_none());

        store.set_language(Language::ZhHk).unwrap();
        assert_eq!(store.get_language(), Some(Language::ZhHk));
    }

    #[test]
    fn test_file_store_persists() {
        let dir = tempdir().unwrap();
        let config = StorageConfig::new(dir.path());

        {
            let store = ContentStore::open(&config).unwrap();
            store.initialize().unwrap();
            store.insert_lead(jane()).unwrap();
        }

        let store = ContentStore::open(&config).unwrap();
        assert_eq!(store.medium_kind(), "file");
        assert_eq!(store.get_leads()[0].full_name, "Jane Doe");
        assert_eq!(store.get_services().len(), seed::default_services().len());
    }
}
