//! HTTP API and browse page.
//!
//! Routes:
//! - `GET  /launches?region=X`          filtered records
//! - `POST /launches`                   validate + append
//! - `GET  /launches/grouped?region=X`  per-year groups for the region view
//! - `GET  /timeline?product=X`         bucketed chart points for one product
//! - `GET  /`                           browse page, `GET /health` liveness

use std::env;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::models::{LaunchRecord, LaunchSubmission, Region, ValidationError};
use crate::store::LaunchStore;
use crate::timeline::{build_timeline, group_by_year, TimelineError, TimelinePoint, YearGroup};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<LaunchStore>,
}

/// Maps handler failures onto the wire `{error}` envelope.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(serde_json::json!({ "error": self.message })),
        )
            .into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<TimelineError> for ApiError {
    fn from(err: TimelineError) -> Self {
        // A record the submission validator never saw; not a client problem.
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Timeline error: {err}"),
        }
    }
}

#[derive(Deserialize)]
struct RegionQuery {
    region: Option<String>,
}

#[derive(Deserialize)]
struct TimelineQuery {
    product: Option<String>,
}

#[derive(Serialize)]
struct LaunchListResponse {
    launches: Vec<LaunchRecord>,
}

#[derive(Serialize)]
struct GroupedResponse {
    years: Vec<YearGroup>,
}

#[derive(Serialize)]
struct TimelineResponse {
    points: Vec<TimelinePoint>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(browse_page))
        .route("/health", get(|| async { "OK" }))
        .route(
            "/launches",
            get(list_launches)
                .post(create_launch)
                .fallback(method_not_allowed),
        )
        .route("/launches/grouped", get(grouped_launches))
        .route("/timeline", get(product_timeline))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(state: AppState) -> Result<()> {
    let app = router(state);

    let addr = env::var("LAUNCHBOARD_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    info!("🚀 Launchboard listening at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn parse_region_param(raw: Option<String>) -> Result<Region, ApiError> {
    let raw = raw.ok_or_else(|| ApiError::bad_request("Region parameter is required"))?;
    Region::parse(&raw)
        .ok_or_else(|| ApiError::bad_request("Invalid region. Must be one of: US, EU, CN, JP"))
}

async fn list_launches(
    State(state): State<AppState>,
    Query(query): Query<RegionQuery>,
) -> Result<Json<LaunchListResponse>, ApiError> {
    let region = parse_region_param(query.region)?;
    let launches = state.store.by_region(region).await;
    debug!("Listing {} launches for {}", launches.len(), region);
    Ok(Json(LaunchListResponse { launches }))
}

async fn create_launch(
    State(state): State<AppState>,
    Json(payload): Json<LaunchSubmission>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let launch = payload.validate()?;
    let record = state.store.append(launch).await;
    info!("Added launch {} for {}", record.id, record.region);
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "message": "Product added successfully" })),
    ))
}

async fn grouped_launches(
    State(state): State<AppState>,
    Query(query): Query<RegionQuery>,
) -> Result<Json<GroupedResponse>, ApiError> {
    let region = parse_region_param(query.region)?;
    let launches = state.store.by_region(region).await;
    Ok(Json(GroupedResponse {
        years: group_by_year(&launches),
    }))
}

async fn product_timeline(
    State(state): State<AppState>,
    Query(query): Query<TimelineQuery>,
) -> Result<Json<TimelineResponse>, ApiError> {
    let product = query
        .product
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Product parameter is required"))?;
    let launches = state.store.by_base_product(&product).await;
    let points = build_timeline(&launches)?;
    debug!("Timeline for {}: {} points", product, points.len());
    Ok(Json(TimelineResponse { points }))
}

async fn method_not_allowed() -> ApiError {
    ApiError {
        status: StatusCode::METHOD_NOT_ALLOWED,
        message: "Method not allowed".into(),
    }
}

async fn browse_page() -> Html<&'static str> {
    Html(BROWSE_PAGE)
}

// Thin consumer of the JSON API; grouping and bucketing stay server-side.
const BROWSE_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Launchboard</title>
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, sans-serif; margin: 0; background: #f7f7f9; color: #222; }
        header { background: #111; color: #fff; padding: 16px 24px; }
        main { max-width: 900px; margin: 0 auto; padding: 24px; }
        .regions button { margin-right: 8px; padding: 6px 14px; border: 1px solid #ccc; border-radius: 4px; background: #fff; cursor: pointer; }
        .regions button.active { background: #111; color: #fff; }
        .year-group h3 { border-bottom: 1px solid #ddd; padding-bottom: 4px; }
        .card { background: #fff; border: 1px solid #e0e0e0; border-radius: 6px; padding: 12px 16px; margin: 8px 0; cursor: pointer; }
        .card .category { float: right; font-size: 12px; color: #777; }
        .timeline { background: #fff; border: 1px solid #e0e0e0; border-radius: 6px; padding: 12px 16px; margin-top: 20px; }
        .point b { display: inline-block; min-width: 70px; }
        .empty { color: #888; margin-top: 20px; }
    </style>
</head>
<body>
    <header><strong>Launchboard</strong> &middot; product launch tracker</header>
    <main>
        <div class="regions" id="regions"></div>
        <div id="groups"></div>
        <div id="timeline"></div>
    </main>
    <script>
        const REGIONS = ["US", "EU", "CN", "JP"];
        let current = "US";

        function renderButtons() {
            const bar = document.getElementById("regions");
            bar.innerHTML = "";
            for (const region of REGIONS) {
                const btn = document.createElement("button");
                btn.textContent = region;
                btn.className = region === current ? "active" : "";
                btn.onclick = () => { current = region; load(); };
                bar.appendChild(btn);
            }
        }

        async function load() {
            renderButtons();
            document.getElementById("timeline").innerHTML = "";
            const groups = document.getElementById("groups");
            try {
                const res = await fetch(`/launches/grouped?region=${current}`);
                const data = await res.json();
                if (!res.ok) throw new Error(data.error);
                groups.innerHTML = "";
                if (data.years.length === 0) {
                    groups.innerHTML = '<p class="empty">No launches found for this region.</p>';
                    return;
                }
                for (const year of data.years) {
                    const section = document.createElement("div");
                    section.className = "year-group";
                    section.innerHTML = `<h3>${year.label}</h3>`;
                    for (const launch of year.launches) {
                        const card = document.createElement("div");
                        card.className = "card";
                        card.innerHTML = `<span class="category">${launch.category}</span>` +
                            `<strong>${launch.productName}</strong><br>${launch.description || ""}`;
                        card.onclick = () => showTimeline(launch.baseProductName);
                        section.appendChild(card);
                    }
                    groups.appendChild(section);
                }
            } catch (err) {
                groups.innerHTML = `<p class="empty">Failed to load launches: ${err.message}</p>`;
            }
        }

        async function showTimeline(product) {
            const el = document.getElementById("timeline");
            try {
                const res = await fetch(`/timeline?product=${encodeURIComponent(product)}`);
                const data = await res.json();
                if (!res.ok) throw new Error(data.error);
                const rows = data.points.map(p =>
                    `<div class="point"><b>${p.displayDate}</b> ` +
                    p.events.map(e => `${e.dateType} (${e.region})`).join(", ") + "</div>");
                el.innerHTML = `<div class="timeline"><h3>${product}: global timeline</h3>${rows.join("")}</div>`;
            } catch (err) {
                el.innerHTML = `<p class="empty">Failed to load timeline: ${err.message}</p>`;
            }
        }

        load();
    </script>
</body>
</html>
"#;
