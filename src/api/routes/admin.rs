//! Admin Routes
//!
//! Session endpoints are open; everything else needs an active admin session.
//!
//! - POST /api/v1/admin/login - Log in with the admin credentials
//! - POST /api/v1/admin/logout - End the session
//! - GET /api/v1/admin/session - Session state
//! - GET /api/v1/admin/overview - Lead/service/post counters
//! - GET /api/v1/admin/leads - All leads, newest first
//! - GET /api/v1/admin/leads/:id - One lead
//! - GET /api/v1/admin/config/draft - Working copy (created from the store on first use)
//! - DELETE /api/v1/admin/config/draft - Discard uncommitted edits
//! - PATCH /api/v1/admin/config/draft/about - Edit one language of an about field
//! - PATCH /api/v1/admin/config/draft/contact - Edit a contact field
//! - POST /api/v1/admin/config/draft/commit - Persist the working copy
//! - PUT /api/v1/admin/config - Replace the configuration outright

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{
    AboutEditRequest, ContactEditRequest, DraftResponse, LeadListResponse, LoginRequest,
    OverviewResponse, SessionResponse,
};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::editor::{AboutField, ConfigDraft, ContactField};
use crate::storage::{Language, Lead, SiteConfig};

fn require_admin(state: &AppState) -> ApiResult<()> {
    if state.auth.is_authenticated() {
        Ok(())
    } else {
        Err(ApiError::Unauthorized("admin session required".to_string()))
    }
}

/// POST /api/v1/admin/login
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<SessionResponse>> {
    if !state.auth.login(&req.username, &req.password) {
        return Err(ApiError::Unauthorized("invalid credentials".to_string()));
    }
    Ok(Json(SessionResponse {
        authenticated: true,
    }))
}

/// POST /api/v1/admin/logout
pub async fn logout(State(state): State<Arc<AppState>>) -> StatusCode {
    state.auth.logout();
    *state.draft.write().await = None;
    StatusCode::NO_CONTENT
}

/// GET /api/v1/admin/session
pub async fn session(State(state): State<Arc<AppState>>) -> Json<SessionResponse> {
    Json(SessionResponse {
        authenticated: state.auth.is_authenticated(),
    })
}

/// GET /api/v1/admin/overview
pub async fn overview(State(state): State<Arc<AppState>>) -> ApiResult<Json<OverviewResponse>> {
    require_admin(&state)?;
    Ok(Json(state.store.stats().into()))
}

/// GET /api/v1/admin/leads
pub async fn list_leads(State(state): State<Arc<AppState>>) -> ApiResult<Json<LeadListResponse>> {
    require_admin(&state)?;
    let leads = state.store.get_leads();
    Ok(Json(LeadListResponse {
        total: leads.len(),
        leads,
    }))
}

/// GET /api/v1/admin/leads/:id
pub async fn get_lead(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Lead>> {
    require_admin(&state)?;
    state
        .store
        .get_lead(&id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Lead with id {} not found", id)))
}

/// GET /api/v1/admin/config/draft
pub async fn get_draft(State(state): State<Arc<AppState>>) -> ApiResult<Json<DraftResponse>> {
    require_admin(&state)?;
    let mut draft = state.draft.write().await;
    let draft = draft.get_or_insert_with(|| state.editor.draft());
    Ok(Json(draft_response(draft)))
}

/// DELETE /api/v1/admin/config/draft
pub async fn discard_draft(State(state): State<Arc<AppState>>) -> ApiResult<StatusCode> {
    require_admin(&state)?;
    *state.draft.write().await = None;
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/v1/admin/config/draft/about
pub async fn edit_about(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AboutEditRequest>,
) -> ApiResult<Json<DraftResponse>> {
    require_admin(&state)?;
    let field: AboutField = req.field.parse().map_err(ApiError::Validation)?;
    let lang: Language = req.lang.parse().map_err(ApiError::Validation)?;

    let mut draft = state.draft.write().await;
    let draft = draft.get_or_insert_with(|| state.editor.draft());
    draft.set_about(field, lang, &req.value);
    Ok(Json(draft_response(draft)))
}

/// PATCH /api/v1/admin/config/draft/contact
pub async fn edit_contact(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ContactEditRequest>,
) -> ApiResult<Json<DraftResponse>> {
    require_admin(&state)?;
    let field: ContactField = req.field.parse().map_err(ApiError::Validation)?;

    let mut draft = state.draft.write().await;
    let draft = draft.get_or_insert_with(|| state.editor.draft());
    draft.set_contact(field, &req.value);
    Ok(Json(draft_response(draft)))
}

/// POST /api/v1/admin/config/draft/commit
pub async fn commit_draft(State(state): State<Arc<AppState>>) -> ApiResult<Json<DraftResponse>> {
    require_admin(&state)?;
    let mut guard = state.draft.write().await;
    let draft = guard
        .as_mut()
        .ok_or_else(|| ApiError::NotFound("no configuration draft in progress".to_string()))?;

    draft.commit(&state.editor)?;
    tracing::info!("Committed configuration draft");
    Ok(Json(draft_response(draft)))
}

/// PUT /api/v1/admin/config
pub async fn replace_config(
    State(state): State<Arc<AppState>>,
    Json(config): Json<SiteConfig>,
) -> ApiResult<Json<SiteConfig>> {
    require_admin(&state)?;
    state.editor.commit(&config)?;
    *state.draft.write().await = None;
    Ok(Json(config))
}

fn draft_response(draft: &ConfigDraft) -> DraftResponse {
    DraftResponse {
        dirty: draft.is_dirty(),
        config: draft.config().clone(),
    }
}
