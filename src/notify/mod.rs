//! Lead Notifications
//!
//! Best-effort delivery of "new lead" messages to the site owner. Delivery is
//! independent of persistence: a lead is already stored by the time a sink is
//! called, and sink errors are only ever logged.
//!
//! Sinks:
//! - [`LogSink`]: writes the message to the log (mock email)
//! - [`WebhookSink`]: POSTs a form-service JSON payload over HTTP

mod webhook;

pub use webhook::{WebhookConfig, WebhookSink};

use crate::storage::{Lead, SiteConfig};
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Subject line used for lead notifications
pub const DEFAULT_SUBJECT: &str = "New Request - MPS Website";

/// Destination for lead notifications
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Deliver one notification
    async fn send(&self, notification: &LeadNotification) -> Result<(), NotifyError>;
}

/// Payload sent for a new lead
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadNotification {
    #[serde(rename = "_subject")]
    pub subject: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(serialize_with = "join_list")]
    pub property_types: Vec<String>,
    #[serde(rename = "services", serialize_with = "join_list")]
    pub service_types: Vec<String>,
    pub message: String,
    /// Address the notification is meant for (site contact email)
    pub destination: String,
    /// Where replies to the notification go (the submitter)
    #[serde(rename = "_replyto")]
    pub reply_to: String,
    pub lead_id: String,
}

impl LeadNotification {
    /// Build the notification for `lead`, addressed to the site's contact email
    pub fn for_lead(lead: &Lead, config: &SiteConfig) -> Self {
        Self {
            subject: DEFAULT_SUBJECT.to_string(),
            name: lead.full_name.clone(),
            email: lead.email.clone(),
            phone: lead.phone.clone(),
            location: lead.property_location.clone(),
            property_types: lead.property_types.clone(),
            service_types: lead.service_types.clone(),
            message: lead.message.clone(),
            destination: config.contact_email.clone(),
            reply_to: lead.email.clone(),
            lead_id: lead.id.clone(),
        }
    }
}

fn join_list<S: serde::Serializer>(items: &[String], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&items.join(", "))
}

/// Sink that only logs (mock email)
#[derive(Debug, Default, Clone)]
pub struct LogSink;

#[async_trait]
impl NotificationSink for LogSink {
    fn name(&self) -> &str {
        "log"
    }

    async fn send(&self, notification: &LeadNotification) -> Result<(), NotifyError> {
        tracing::info!(
            to = %notification.destination,
            subject = %notification.subject,
            lead_id = %notification.lead_id,
            from = %notification.email,
            "[MOCK EMAIL] New lead from {}",
            notification.name
        );
        Ok(())
    }
}

/// Errors that can occur while delivering a notification
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Notification endpoint unavailable")]
    Unavailable,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Endpoint error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Request timeout")]
    Timeout,

    #[error("Rate limited")]
    RateLimited,

    #[error("Invalid sink configuration: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{seed, NewLead};

    fn lead() -> Lead {
        Lead::from_new(
            NewLead {
                full_name: "Jane Doe".into(),
                email: "jane@x.com".into(),
                phone: "+382600000".into(),
                message: "Need cleaning".into(),
                property_location: "Budva".into(),
                property_types: vec!["Villa".into(), "House".into()],
                service_types: vec!["Cleaning".into()],
            },
            "1700000000000",
            "2023-11-14T22:13:20.000Z",
        )
    }

    #[test]
    fn test_notification_addressed_to_contact_email() {
        let config = seed::default_config();
        let n = LeadNotification::for_lead(&lead(), &config);
        assert_eq!(n.destination, config.contact_email);
        assert_eq!(n.subject, DEFAULT_SUBJECT);
        assert_eq!(n.lead_id, "1700000000000");
    }

    #[test]
    fn test_notification_wire_format() {
        let n = LeadNotification::for_lead(&lead(), &seed::default_config());
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["_subject"], DEFAULT_SUBJECT);
        assert_eq!(json["name"], "Jane Doe");
        assert_eq!(json["location"], "Budva");
        assert_eq!(json["property_types"], "Villa, House");
        assert_eq!(json["services"], "Cleaning");
        assert_eq!(json["_replyto"], "jane@x.com");
        assert_eq!(json["destination"], "info@mps-montenegro.com");
        assert_eq!(json["lead_id"], "1700000000000");
    }

    #[tokio::test]
    async fn test_log_sink_always_succeeds() {
        let n = LeadNotification::for_lead(&lead(), &seed::default_config());
        assert!(LogSink.send(&n).await.is_ok());
        assert_eq!(LogSink.name(), "log");
    }
}
