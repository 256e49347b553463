//! Lead Routes
//!
//! - POST /api/v1/leads - Contact-form submission

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::SubmitLeadResponse;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::storage::NewLead;

/// POST /api/v1/leads
///
/// Stores the inquiry and starts the owner notification in the background.
/// The response does not wait for the notification.
pub async fn submit_lead(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewLead>,
) -> ApiResult<(StatusCode, Json<SubmitLeadResponse>)> {
    validate_submission(&req)?;

    let submission = state.capture.submit(req);
    let lead = submission
        .lead
        .ok_or_else(|| ApiError::Internal("Failed to store lead".to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitLeadResponse {
            status: "ok".to_string(),
            lead,
        }),
    ))
}

/// Form-level checks; the store itself accepts anything
fn validate_submission(req: &NewLead) -> ApiResult<()> {
    if req.full_name.trim().is_empty() {
        return Err(ApiError::Validation("fullName is required".to_string()));
    }
    if req.email.trim().is_empty() || !req.email.contains('@') {
        return Err(ApiError::Validation("a valid email is required".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_submission() {
        let mut req = NewLead {
            full_name: "Jane".into(),
            email: "jane@x.com".into(),
            ..Default::default()
        };
        assert!(validate_submission(&req).is_ok());

        req.email = "jane".into();
        assert!(validate_submission(&req).is_err());

        req.email = "jane@x.com".into();
        req.full_name = "  ".into();
        assert!(validate_submission(&req).is_err());
    }
}
