use std::net::SocketAddr;

use axum::extract::{DefaultBodyLimit, Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::controllers::paste;
use crate::extract::PasteBody;
use crate::types::api::{NewPaste, SearchQuery};
use crate::types::Paste;
use crate::App;

/// Usage notes served at the root.
const USAGE: &str = include_str!("../../assets/usage.txt");

pub async fn run(app: App) -> anyhow::Result<()> {
    let addr = SocketAddr::new(app.config.address, app.config.port);
    let router = router(app);

    info!("listening on http://{addr}");

    axum::Server::bind(&addr)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}

pub fn router(app: App) -> Router {
    let max_body_size = app.config.limits.max_body_size;

    Router::new()
        .route("/", get(index))
        .route("/paste", post(create_paste))
        .route("/paste/all", get(all_pastes))
        .route("/paste/:id", get(get_paste))
        .route("/paste/:id/:property", get(get_property))
        .route("/search", get(search))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(TraceLayer::new_for_http())
        .with_state(app)
}

async fn index() -> &'static str {
    USAGE
}

async fn create_paste(
    State(app): State<App>,
    Query(query): Query<Vec<(String, String)>>,
    PasteBody(body): PasteBody,
) -> crate::ApiResult<impl IntoResponse> {
    // fields may come from the query string, the body, or both
    let fields = body.or(NewPaste::from_pairs(query));

    let id = paste::create(&app, fields).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/paste/{id}"))],
    ))
}

async fn all_pastes(State(app): State<App>) -> Json<Vec<Paste>> {
    Json(paste::list_all(&app).await)
}

async fn get_paste(
    State(app): State<App>,
    Path(id): Path<String>,
) -> crate::ApiResult<Json<Paste>> {
    Ok(Json(paste::get(&app, &id).await?))
}

async fn get_property(
    State(app): State<App>,
    Path((id, property)): Path<(String, String)>,
) -> crate::ApiResult<String> {
    paste::get_property(&app, &id, &property).await
}

async fn search(
    State(app): State<App>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Paste>> {
    Json(paste::search(&app, &query.q).await)
}
