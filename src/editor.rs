//! Config Editor
//!
//! Field-level edits of [`SiteConfig`] for the admin panel. Edits are pure
//! value transformations; nothing is persisted until [`ConfigEditor::commit`]
//! writes the whole record at once.
//!
//! Translated fields merge per language: changing the German about title
//! leaves every other language of that field, and every other field, as it
//! was.

use crate::storage::{ContentStore, Language, SiteConfig, StorageResult};
use std::str::FromStr;
use std::sync::Arc;

/// Translated about-page fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AboutField {
    Title,
    Subtitle,
    Content,
}

impl FromStr for AboutField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" | "abouttitle" => Ok(AboutField::Title),
            "subtitle" | "aboutsubtitle" => Ok(AboutField::Subtitle),
            "content" | "aboutcontent" => Ok(AboutField::Content),
            other => Err(format!("Unknown about field: {}", other)),
        }
    }
}

/// Untranslated contact fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    PhoneNumber,
    ContactEmail,
    Address,
}

impl FromStr for ContactField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_'], "").as_str() {
            "phone" | "phonenumber" => Ok(ContactField::PhoneNumber),
            "email" | "contactemail" => Ok(ContactField::ContactEmail),
            "address" => Ok(ContactField::Address),
            other => Err(format!("Unknown contact field: {}", other)),
        }
    }
}

/// Copy of `config` with one language entry of one about field replaced
pub fn with_about_text(
    config: &SiteConfig,
    field: AboutField,
    lang: Language,
    value: &str,
) -> SiteConfig {
    let mut updated = config.clone();
    let target = match field {
        AboutField::Title => &mut updated.about_title,
        AboutField::Subtitle => &mut updated.about_subtitle,
        AboutField::Content => &mut updated.about_content,
    };
    target.set(lang, value);
    updated
}

/// Copy of `config` with one scalar contact field replaced
pub fn with_contact_field(config: &SiteConfig, field: ContactField, value: &str) -> SiteConfig {
    let mut updated = config.clone();
    let target = match field {
        ContactField::PhoneNumber => &mut updated.phone_number,
        ContactField::ContactEmail => &mut updated.contact_email,
        ContactField::Address => &mut updated.address,
    };
    *target = value.to_string();
    updated
}

/// Loads and commits site configuration
#[derive(Clone)]
pub struct ConfigEditor {
    store: Arc<ContentStore>,
}

impl ConfigEditor {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self { store }
    }

    /// Current stored configuration
    pub fn load(&self) -> SiteConfig {
        self.store.get_config()
    }

    /// Start an edit session from the stored configuration
    pub fn draft(&self) -> ConfigDraft {
        ConfigDraft::new(self.load())
    }

    /// Persist the full record
    pub fn commit(&self, config: &SiteConfig) -> StorageResult<()> {
        self.store.save_config(config)
    }
}

/// In-memory edit buffer
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDraft {
    config: SiteConfig,
    dirty: bool,
}

impl ConfigDraft {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            dirty: false,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Whether there are uncommitted edits
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_about(&mut self, field: AboutField, lang: Language, value: &str) {
        self.config = with_about_text(&self.config, field, lang, value);
        self.dirty = true;
    }

    pub fn set_contact(&mut self, field: ContactField, value: &str) {
        self.config = with_contact_field(&self.config, field, value);
        self.dirty = true;
    }

    /// Persist the working copy and mark it clean
    pub fn commit(&mut self, editor: &ConfigEditor) -> StorageResult<()> {
        editor.commit(&self.config)?;
        self.dirty = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::seed;

    #[test]
    fn test_about_edit_is_isolated() {
        let config = seed::default_config();
        let updated = with_about_text(&config, AboutField::Title, Language::De, "Wer wir sind");

        assert_eq!(updated.about_title.get(Language::De), Some("Wer wir sind"));
        for lang in Language::all().iter().filter(|l| **l != Language::De) {
            assert_eq!(updated.about_title.get(*lang), config.about_title.get(*lang));
        }
        assert_eq!(updated.about_subtitle, config.about_subtitle);
        assert_eq!(updated.about_content, config.about_content);
        assert_eq!(updated.phone_number, config.phone_number);
        assert_eq!(updated.contact_email, config.contact_email);
        // Input untouched
        assert_eq!(config, seed::default_config());
    }

    #[test]
    fn test_about_edit_adds_missing_language() {
        let config = seed::default_config();
        assert!(config.about_content.get(Language::Ja).is_none());

        let updated = with_about_text(&config, AboutField::Content, Language::Ja, "私たちは");
        assert_eq!(updated.about_content.get(Language::Ja), Some("私たちは"));
        assert_eq!(updated.about_content.len(), config.about_content.len() + 1);
    }

    #[test]
    fn test_contact_edit_is_isolated() {
        let config = seed::default_config();
        let updated = with_contact_field(&config, ContactField::PhoneNumber, "+382 69 000 000");

        assert_eq!(updated.phone_number, "+382 69 000 000");
        assert_eq!(updated.contact_email, config.contact_email);
        assert_eq!(updated.address, config.address);
        assert_eq!(updated.about_title, config.about_title);
    }

    #[test]
    fn test_field_parsing() {
        assert_eq!("title".parse::<AboutField>().unwrap(), AboutField::Title);
        assert_eq!("aboutContent".parse::<AboutField>().unwrap(), AboutField::Content);
        assert!("body".parse::<AboutField>().is_err());

        assert_eq!("phone".parse::<ContactField>().unwrap(), ContactField::PhoneNumber);
        assert_eq!("contact_email".parse::<ContactField>().unwrap(), ContactField::ContactEmail);
        assert_eq!("Address".parse::<ContactField>().unwrap(), ContactField::Address);
        assert!("fax".parse::<ContactField>().is_err());
    }

    #[test]
    fn test_draft_is_not_persisted_until_commit() {
        let store = Arc::new(ContentStore::in_memory());
        store.initialize().unwrap();
        let editor = ConfigEditor::new(Arc::clone(&store));

        let mut draft = editor.draft();
        assert!(!draft.is_dirty());
        draft.set_about(AboutField::Title, Language::De, "Wer wir sind");
        draft.set_contact(ContactField::Address, "Kotor, Montenegro");
        assert!(draft.is_dirty());
        assert_eq!(store.get_config(), seed::default_config());

        draft.commit(&editor).unwrap();
        assert!(!draft.is_dirty());

        let saved = store.get_config();
        assert_eq!(saved.about_title.get(Language::De), Some("Wer wir sind"));
        assert_eq!(saved.address, "Kotor, Montenegro");
        assert_eq!(&saved, draft.config());
    }
}
