//! # MPS Site
//!
//! Persistence and admin backend for the MPS property-services website.
//!
//! ## Features
//!
//! - **Content store**: services, blog posts, leads and site configuration
//!   in a key-value medium, seeded on first run
//! - **Localization**: thirteen languages with English fallback
//! - **Lead capture**: contact-form submissions with a best-effort owner notification
//! - **Config editing**: per-language edits merged into a working copy before saving
//! - **Admin gate**: a single compiled-in credential pair with a persisted session
//!
//! ## Modules
//!
//! - [`storage`]: Key-value medium, content store, data model and seed content
//! - [`leads`]: Contact-form write path
//! - [`notify`]: Notification sinks (log, webhook)
//! - [`editor`]: Site configuration editor
//! - [`auth`]: Admin session gate
//! - [`api`]: REST API server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mps_site::leads::LeadCapture;
//! use mps_site::notify::LogSink;
//! use mps_site::storage::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(ContentStore::open(&StorageConfig::new("mps_data"))?);
//!     store.initialize()?;
//!
//!     for service in store.get_services() {
//!         println!("{}", service.title.resolve(Language::De));
//!     }
//!
//!     let capture = LeadCapture::new(Arc::clone(&store), Arc::new(LogSink));
//!     let submission = capture.submit(NewLead {
//!         full_name: "Jane Doe".into(),
//!         email: "jane@example.com".into(),
//!         ..Default::default()
//!     });
//!     submission.finished().await;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod editor;
pub mod leads;
pub mod logging;
pub mod notify;
pub mod storage;

// Re-export top-level types for convenience
pub use storage::{
    BlogPost, Category, ContentStore, KeyValueMedium, Language, Lead, LeadStatus, LocalizedList,
    LocalizedText, NewLead, Service, SiteConfig, StorageConfig, StorageError, StorageResult,
    StoreStats,
};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use auth::{Authenticator, SessionGate};

pub use editor::{AboutField, ConfigDraft, ConfigEditor, ContactField};

pub use leads::{LeadCapture, Submission};

pub use notify::{LeadNotification, LogSink, NotificationSink, NotifyError, WebhookSink};

pub use config::{
    ApiConfig as ConfigApiConfig, Config, ConfigError, LoggingConfig, NotifyConfig,
    StorageConfig as ConfigStorageConfig,
};
