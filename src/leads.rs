//! Lead Capture
//!
//! Write path for contact-form submissions:
//!
//! ```text
//! NewLead → ContentStore::insert_lead (stamp, prepend, persist)
//!         → spawn NotificationSink::send   (best effort, never awaited for success)
//! ```
//!
//! The two steps are independent. A failed write means no notification; a
//! failed notification never undoes or hides a successful write.

use crate::notify::{LeadNotification, NotificationSink};
use crate::storage::{ContentStore, Lead, NewLead};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Outcome of a submission
#[derive(Debug)]
pub struct Submission {
    /// The stored lead, `None` if the write failed
    pub lead: Option<Lead>,
    /// Background notification task, if one was started
    pub notification: Option<JoinHandle<()>>,
}

impl Submission {
    /// Whether the lead was persisted
    pub fn is_saved(&self) -> bool {
        self.lead.is_some()
    }

    /// Wait until the notification attempt is over.
    ///
    /// Only useful for "sending..." indicators; the outcome of the attempt is
    /// not reported.
    pub async fn finished(self) -> Option<Lead> {
        if let Some(handle) = self.notification {
            if let Err(e) = handle.await {
                tracing::warn!(error = %e, "Notification task aborted");
            }
        }
        self.lead
    }
}

/// Lead capture service
#[derive(Clone)]
pub struct LeadCapture {
    store: Arc<ContentStore>,
    sink: Arc<dyn NotificationSink>,
}

impl LeadCapture {
    pub fn new(store: Arc<ContentStore>, sink: Arc<dyn NotificationSink>) -> Self {
        Self { store, sink }
    }

    /// Store a submission and fire off its notification; `true` if stored
    pub fn add_lead(&self, new: NewLead) -> bool {
        self.submit(new).is_saved()
    }

    /// Store a submission, then start the notification in the background
    pub fn submit(&self, new: NewLead) -> Submission {
        let lead = match self.store.insert_lead(new) {
            Ok(lead) => lead,
            Err(e) => {
                tracing::error!(error = %e, "Failed to store lead");
                return Submission {
                    lead: None,
                    notification: None,
                };
            }
        };

        let notification = self.spawn_notification(&lead);
        Submission {
            lead: Some(lead),
            notification,
        }
    }

    fn spawn_notification(&self, lead: &Lead) -> Option<JoinHandle<()>> {
        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                tracing::warn!(lead_id = %lead.id, "No async runtime, skipping lead notification");
                return None;
            }
        };

        let notification = LeadNotification::for_lead(lead, &self.store.get_config());
        let sink = Arc::clone(&self.sink);

        Some(runtime.spawn(async move {
            match sink.send(&notification).await {
                Ok(()) => tracing::info!(
                    sink = sink.name(),
                    lead_id = %notification.lead_id,
                    "Lead notification sent"
                ),
                Err(e) => tracing::warn!(
                    sink = sink.name(),
                    lead_id = %notification.lead_id,
                    error = %e,
                    "Lead notification failed"
                ),
            }
        }))
    }
}
