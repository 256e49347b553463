//! Public Content Routes
//!
//! Read-only endpoints consumed by the public pages, plus the visitor's
//! language preference.
//!
//! - GET /api/v1/services - Services in one language (optional category filter)
//! - GET /api/v1/services/grouped - Services grouped for the services page
//! - GET /api/v1/posts - Blog posts in one language
//! - GET /api/v1/config - Raw site configuration
//! - GET /api/v1/about - About page resolved for one language
//! - GET /api/v1/language - Current and available languages
//! - PUT /api/v1/language - Save a language preference

use axum::{
    extract::{Query, State},
    http::{header::ACCEPT_LANGUAGE, HeaderMap},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{
    AboutResponse, ContentQuery, LanguageBody, LanguageInfo, LanguageResponse, PostListResponse,
    PostView, ServiceGroup, ServiceGroupsResponse, ServiceListResponse, ServiceView,
};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::storage::{Category, Language, SiteConfig};

/// Pick the language for a public read.
///
/// Precedence: explicit `lang` parameter, saved preference, `Accept-Language`,
/// then the default language.
pub fn request_language(
    state: &AppState,
    lang: Option<&str>,
    headers: &HeaderMap,
) -> ApiResult<Language> {
    if let Some(tag) = lang.filter(|t| !t.trim().is_empty()) {
        return tag.parse().map_err(ApiError::Validation);
    }

    if let Some(saved) = state.store.get_language() {
        return Ok(saved);
    }

    let detected = headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
        .and_then(Language::from_accept_language);

    Ok(detected.unwrap_or_default())
}

/// GET /api/v1/services
pub async fn list_services(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ContentQuery>,
    headers: HeaderMap,
) -> ApiResult<Json<ServiceListResponse>> {
    let lang = request_language(&state, query.lang.as_deref(), &headers)?;

    let services = match query.category.as_deref() {
        Some(raw) => {
            let category: Category = raw.parse().map_err(ApiError::Validation)?;
            state.store.services_by_category(category)
        }
        None => state.store.get_services(),
    };

    let views: Vec<ServiceView> = services
        .iter()
        .map(|s| ServiceView::localize(s, lang))
        .collect();

    Ok(Json(ServiceListResponse {
        language: lang,
        total: views.len(),
        services: views,
    }))
}

/// GET /api/v1/services/grouped
pub async fn grouped_services(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ContentQuery>,
    headers: HeaderMap,
) -> ApiResult<Json<ServiceGroupsResponse>> {
    let lang = request_language(&state, query.lang.as_deref(), &headers)?;

    let groups = state
        .store
        .services_grouped()
        .into_iter()
        .map(|(category, services)| ServiceGroup {
            category,
            services: services
                .iter()
                .map(|s| ServiceView::localize(s, lang))
                .collect(),
        })
        .collect();

    Ok(Json(ServiceGroupsResponse {
        language: lang,
        groups,
    }))
}

/// GET /api/v1/posts
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ContentQuery>,
    headers: HeaderMap,
) -> ApiResult<Json<PostListResponse>> {
    let lang = request_language(&state, query.lang.as_deref(), &headers)?;

    let posts: Vec<PostView> = state
        .store
        .get_posts()
        .iter()
        .map(|p| PostView::localize(p, lang))
        .collect();

    Ok(Json(PostListResponse {
        language: lang,
        total: posts.len(),
        posts,
    }))
}

/// GET /api/v1/config
pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<SiteConfig> {
    Json(state.store.get_config())
}

/// GET /api/v1/about
pub async fn about(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ContentQuery>,
    headers: HeaderMap,
) -> ApiResult<Json<AboutResponse>> {
    let lang = request_language(&state, query.lang.as_deref(), &headers)?;
    Ok(Json(AboutResponse::localize(&state.store.get_config(), lang)))
}

/// GET /api/v1/language
pub async fn get_language(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<LanguageResponse>> {
    let lang = request_language(&state, None, &headers)?;
    Ok(Json(language_response(lang)))
}

/// PUT /api/v1/language
pub async fn set_language(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LanguageBody>,
) -> ApiResult<Json<LanguageResponse>> {
    let lang: Language = body.language.parse().map_err(ApiError::Validation)?;
    state.store.set_language(lang)?;
    tracing::debug!(language = %lang, "Saved language preference");
    Ok(Json(language_response(lang)))
}

fn language_response(lang: Language) -> LanguageResponse {
    LanguageResponse {
        language: lang,
        available: Language::all()
            .iter()
            .map(|l| LanguageInfo {
                code: l.code().to_string(),
                name: l.name().to_string(),
            })
            .collect(),
    }
}
