//! API routes and their OpenAPI document.
//!
//! Handlers are registered through `utoipa_axum::routes!` so the generated document
//! always matches the mounted routes. The document is served by Swagger UI at
//! `/api/docs`.

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{
        appeal::{self, APPEAL_TAG},
        auth::{self, AUTH_TAG},
        economy::{self, ECONOMY_TAG},
        loa::{self, LOA_TAG},
        staff::{self, STAFF_TAG},
        stats::{self, STATS_TAG},
        updates::{self, UPDATES_TAG},
    },
    error::{config::ConfigError, AppError},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Staffboard API", description = "Staff management dashboard"),
    tags(
        (name = AUTH_TAG, description = "Discord login"),
        (name = STAFF_TAG, description = "Roster, staff actions and action logs"),
        (name = LOA_TAG, description = "Leave of absence requests"),
        (name = APPEAL_TAG, description = "Warning appeals"),
        (name = ECONOMY_TAG, description = "Staff wallets"),
        (name = STATS_TAG, description = "Moderation statistics"),
        (name = UPDATES_TAG, description = "Dashboard polling counters"),
    )
)]
struct ApiDoc;

/// Builds the API router, including Swagger UI and the optional CORS layer.
///
/// # Returns
/// - `Ok(Router)` - Router awaiting its `AppState`
/// - `Err(ConfigError::InvalidEnvVar)` - `CORS_ORIGIN` is not a valid header value
pub fn router(config: &Config) -> Result<Router<AppState>, AppError> {
    let (router, api) = api_routes().split_for_parts();

    let router = router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    let Some(origin) = &config.cors_origin else {
        return Ok(router);
    };

    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "CORS_ORIGIN".to_string(),
            reason: e.to_string(),
        })?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    Ok(router.layer(cors))
}

fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::callback))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(staff::get_staff))
        .routes(routes!(staff::get_staff_member))
        .routes(routes!(staff::update_profile))
        .routes(routes!(staff::perform_action))
        .routes(routes!(staff::get_logs))
        .routes(routes!(loa::toggle_loa))
        .routes(routes!(loa::get_loa_requests))
        .routes(routes!(loa::approve_loa_request))
        .routes(routes!(loa::reject_loa_request))
        .routes(routes!(appeal::create_appeal, appeal::get_appeals))
        .routes(routes!(appeal::get_my_appeals))
        .routes(routes!(appeal::approve_appeal))
        .routes(routes!(appeal::reject_appeal))
        .routes(routes!(economy::get_wallet))
        .routes(routes!(economy::withdraw))
        .routes(routes!(economy::adjust_balance))
        .routes(routes!(stats::get_stats))
        .routes(routes!(updates::get_updates))
}

#[cfg(test)]
mod tests {
    use utoipa::openapi::{path::Operation, OpenApi as OpenApiDoc};

    use super::*;

    fn operation<'a>(api: &'a OpenApiDoc, path: &str, method: &str) -> &'a Operation {
        let item = api
            .paths
            .paths
            .get(path)
            .unwrap_or_else(|| panic!("{path} is not documented"));
        let operation = match method {
            "get" => item.get.as_ref(),
            "post" => item.post.as_ref(),
            "put" => item.put.as_ref(),
            _ => None,
        };

        operation.unwrap_or_else(|| panic!("{method} {path} is not documented"))
    }

    #[test]
    fn guarded_routes_document_forbidden() {
        let (_, api) = api_routes().split_for_parts();

        for (method, path) in [
            ("post", "/api/staff/{id}/action"),
            ("get", "/api/loa/requests"),
            ("post", "/api/loa/requests/{id}/approve"),
            ("post", "/api/loa/requests/{id}/reject"),
            ("post", "/api/appeals"),
            ("get", "/api/appeals"),
            ("post", "/api/appeals/{id}/approve"),
            ("post", "/api/appeals/{id}/reject"),
            ("get", "/api/economy/history/{id}"),
            ("post", "/api/economy/{id}/adjust"),
        ] {
            let responses = &operation(&api, path, method).responses.responses;

            assert!(responses.contains_key("401"), "{method} {path} lacks 401");
            assert!(responses.contains_key("403"), "{method} {path} lacks 403");
        }
    }

    #[test]
    fn login_only_routes_do_not_document_forbidden() {
        let (_, api) = api_routes().split_for_parts();

        for (method, path) in [
            ("get", "/api/staff"),
            ("post", "/api/economy/withdraw"),
            ("get", "/api/stats/{ign}"),
        ] {
            let responses = &operation(&api, path, method).responses.responses;

            assert!(responses.contains_key("401"), "{method} {path} lacks 401");
            assert!(!responses.contains_key("403"), "{method} {path} documents 403");
        }
    }
}
