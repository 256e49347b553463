//! MPS Content Store
//!
//! This module provides the persistence layer of the site:
//!
//! - **types**: Data model (Service, BlogPost, Lead, SiteConfig, Language)
//! - **medium**: Key-value substrate (in-memory or one file per key)
//! - **seed**: Compiled-in default content
//! - **store**: Typed store over a medium, including first-run seeding
//! - **error**: Error types
//!
//! # Architecture
//!
//! ```text
//! Write Path:
//!   Record → JSON → medium.set(key)
//!
//! Read Path:
//!   medium.get(key) → JSON → Record   (absent/corrupt → default)
//! ```
//!
//! # Example
//!
//! ```rust
//! use mps_site::storage::{ContentStore, NewLead};
//!
//! let store = ContentStore::in_memory();
//! store.initialize().unwrap();
//!
//! let lead = store
//!     .insert_lead(NewLead {
//!         full_name: "Jane Doe".into(),
//!         email: "jane@example.com".into(),
//!         ..Default::default()
//!     })
//!     .unwrap();
//!
//! assert_eq!(store.get_leads()[0].id, lead.id);
//! ```

pub mod error;
pub mod medium;
pub mod seed;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{StorageError, StorageResult};
pub use medium::{FileMedium, KeyValueMedium, MemoryMedium};
pub use store::{keys, ContentStore, StorageConfig, StoreStats};
pub use types::{
    BlogPost, Category, Language, Lead, LeadStatus, LocalizedList, LocalizedText, NewLead,
    Service, SiteConfig,
};
