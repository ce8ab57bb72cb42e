//! HTTP API routes
//!
//! Proxies `/search`, `/event` and `/venue` to the ticketing API and
//! serves static files for everything else.

use crate::constants::search::{DEFAULT_RADIUS, UNIT};
use crate::server::state::AppState;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tracing::{debug, warn};

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/search", get(search_handler))
        .route("/event", get(event_handler))
        .route("/venue", get(venue_handler))
        .fallback_service(ServeDir::new(static_path()).append_index_html_on_directories(true))
        .with_state(state)
}

/// Static files directory: `static/` under the cwd, else next to the binary
fn static_path() -> String {
    if std::path::Path::new("static").exists() {
        return "static".to_string();
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("static")))
        .filter(|path| path.exists())
        .map(|path| path.to_string_lossy().to_string())
        .unwrap_or_else(|| "static".to_string())
}

/// JSON error body with a status
fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

/// Forward one GET to the upstream API
///
/// The API key is appended to `params`. Upstream 5xx bodies are wrapped;
/// other statuses pass through with the upstream body.
async fn forward(state: &AppState, path: &str, params: Vec<(&str, String)>) -> Response {
    let upstream = &state.upstream;
    let Some(key) = upstream.api_key.as_deref() else {
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server misconfigured: TM_API_KEY missing",
        );
    };

    let mut query = vec![("apikey", key.to_string())];
    query.extend(params);

    let url = upstream.url(path);
    debug!("Proxying {}", url);

    let result = async {
        let response = upstream.client.get(&url).query(&query).send().await?;
        let status = response.status().as_u16();
        let body: Value = response.json().await?;
        Ok::<_, reqwest::Error>((status, body))
    }
    .await;

    match result {
        Ok((status, body)) => {
            let code = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            if status >= 500 {
                warn!("Upstream responded {} for {}", status, path);
                (
                    code,
                    Json(json!({ "error": "Upstream Ticketmaster error", "upstream": body })),
                )
                    .into_response()
            } else {
                (code, Json(body)).into_response()
            }
        }
        Err(e) if e.is_timeout() => {
            warn!("Upstream request timed out: {}", path);
            error_response(StatusCode::GATEWAY_TIMEOUT, "Ticketmaster request timed out")
        }
        Err(e) => {
            warn!("Upstream request failed: {}", e);
            error_response(
                StatusCode::BAD_GATEWAY,
                format!("Ticketmaster request failed: {}", e),
            )
        }
    }
}

/// Search query parameters
#[derive(Debug, Deserialize)]
pub struct SearchArgs {
    #[serde(default)]
    pub keyword: String,
    #[serde(rename = "geoPoint")]
    pub geo_point: Option<String>,
    pub radius: Option<String>,
    #[serde(rename = "segmentId")]
    pub segment_id: Option<String>,
}

/// Event search
///
/// GET /search?keyword=&geoPoint=&radius=&segmentId=
async fn search_handler(
    State(state): State<Arc<AppState>>,
    Query(args): Query<SearchArgs>,
) -> Response {
    let mut params = vec![("keyword", args.keyword)];
    if let Some(geo_point) = args.geo_point {
        params.push(("geoPoint", geo_point));
    }
    params.push((
        "radius",
        args.radius.unwrap_or_else(|| DEFAULT_RADIUS.to_string()),
    ));
    params.push(("unit", UNIT.to_string()));
    if let Some(segment) = args.segment_id.filter(|s| !s.is_empty()) {
        params.push(("segmentId", segment));
    }

    forward(&state, "/events.json", params).await
}

/// Event lookup query parameters
#[derive(Debug, Deserialize)]
pub struct EventArgs {
    pub id: Option<String>,
}

/// Single event
///
/// GET /event?id=
async fn event_handler(
    State(state): State<Arc<AppState>>,
    Query(args): Query<EventArgs>,
) -> Response {
    let Some(id) = args.id.filter(|id| !id.is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "Missing event id");
    };

    let path = format!("/events/{}.json", urlencoding::encode(&id));
    forward(&state, &path, Vec::new()).await
}

/// Venue lookup query parameters
#[derive(Debug, Deserialize)]
pub struct VenueArgs {
    #[serde(default)]
    pub keyword: String,
}

/// Venue search by name
///
/// GET /venue?keyword=
async fn venue_handler(
    State(state): State<Arc<AppState>>,
    Query(args): Query<VenueArgs>,
) -> Response {
    forward(&state, "/venues.json", vec![("keyword", args.keyword)]).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::server::state::Upstream;
    use axum::body::Body;
    use axum::extract::Path;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use std::collections::HashMap;
    use std::time::Duration;
    use tokio::net::TcpListener;
    use tower::ServiceExt;

    /// Fake ticketing API that echoes the query it received
    async fn spawn_upstream() -> String {
        let app = Router::new()
            .route(
                "/events.json",
                get(|Query(q): Query<HashMap<String, String>>| async move {
                    Json(json!({ "echo": q }))
                }),
            )
            .route(
                "/events/:file",
                get(|Path(file): Path<String>| async move {
                    match file.as_str() {
                        "broken.json" => (
                            StatusCode::SERVICE_UNAVAILABLE,
                            Json(json!({ "fault": "maintenance" })),
                        ),
                        "missing.json" => {
                            (StatusCode::NOT_FOUND, Json(json!({ "fault": "not found" })))
                        }
                        _ => (StatusCode::OK, Json(json!({ "file": file }))),
                    }
                }),
            )
            .route(
                "/venues.json",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(2)).await;
                    Json(json!({}))
                }),
            );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn create_test_app(base_url: &str, key: Option<&str>) -> Router {
        let upstream = Upstream::new(
            base_url,
            key.map(String::from),
            Duration::from_millis(300),
        )
        .unwrap();
        create_router(Arc::new(AppState::with_upstream(Config::default(), upstream)))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_search_forwards_params_with_key() {
        let base = spawn_upstream().await;
        let app = create_test_app(&base, Some("secret"));

        let (status, body) = get_json(
            app,
            "/search?keyword=jazz&geoPoint=dr5regw&radius=25&segmentId=KZFzniwnSyZfZ7v7nJ",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let echo = &body["echo"];
        assert_eq!(echo["apikey"], "secret");
        assert_eq!(echo["keyword"], "jazz");
        assert_eq!(echo["geoPoint"], "dr5regw");
        assert_eq!(echo["radius"], "25");
        assert_eq!(echo["unit"], "miles");
        assert_eq!(echo["segmentId"], "KZFzniwnSyZfZ7v7nJ");
    }

    #[tokio::test]
    async fn test_search_defaults() {
        let base = spawn_upstream().await;
        let app = create_test_app(&base, Some("secret"));

        let (status, body) = get_json(app, "/search").await;

        assert_eq!(status, StatusCode::OK);
        let echo = &body["echo"];
        assert_eq!(echo["keyword"], "");
        assert_eq!(echo["radius"], "10");
        assert!(echo.get("geoPoint").is_none());
        assert!(echo.get("segmentId").is_none());
    }

    #[tokio::test]
    async fn test_missing_key() {
        let base = spawn_upstream().await;
        let app = create_test_app(&base, None);

        let (status, body) = get_json(app, "/search?keyword=x").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Server misconfigured: TM_API_KEY missing");
    }

    #[tokio::test]
    async fn test_event_missing_id() {
        let base = spawn_upstream().await;
        let app = create_test_app(&base, Some("secret"));

        let (status, body) = get_json(app, "/event").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing event id");
    }

    #[tokio::test]
    async fn test_event_path() {
        let base = spawn_upstream().await;
        let app = create_test_app(&base, Some("secret"));

        let (status, body) = get_json(app, "/event?id=G5abc").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["file"], "G5abc.json");
    }

    #[tokio::test]
    async fn test_upstream_client_error_passes_through() {
        let base = spawn_upstream().await;
        let app = create_test_app(&base, Some("secret"));

        let (status, body) = get_json(app, "/event?id=missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["fault"], "not found");
    }

    #[tokio::test]
    async fn test_upstream_server_error_is_wrapped() {
        let base = spawn_upstream().await;
        let app = create_test_app(&base, Some("secret"));

        let (status, body) = get_json(app, "/event?id=broken").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "Upstream Ticketmaster error");
        assert_eq!(body["upstream"]["fault"], "maintenance");
    }

    #[tokio::test]
    async fn test_upstream_timeout() {
        let base = spawn_upstream().await;
        let app = create_test_app(&base, Some("secret"));

        let (status, body) = get_json(app, "/venue?keyword=arena").await;
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(body["error"], "Ticketmaster request timed out");
    }

    #[tokio::test]
    async fn test_upstream_unreachable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let app = create_test_app(&format!("http://{}", addr), Some("secret"));

        let (status, body) = get_json(app, "/venue?keyword=arena").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Ticketmaster request failed: "));
    }
}
