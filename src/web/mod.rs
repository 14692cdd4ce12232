//! HTTP front end for the field search.
//!
//! `GET /` renders the search box, `GET /search/?q=` the results. Each search
//! runs as one blocking read against the shared database handle.

mod views;

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tokio::net::TcpListener;

use crate::db::DatabaseBackend;
use crate::queries::search::{search_fields, FieldSearchResult};

pub use views::html_escape;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn DatabaseBackend>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

pub fn router(db: Arc<dyn DatabaseBackend>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/search/", get(search))
        .with_state(AppState { db })
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(db: Arc<dyn DatabaseBackend>, addr: &str) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, backend = db.backend_name(), "serving field search");
    axum::serve(listener, router(db)).await
}

async fn home() -> Html<String> {
    Html(views::home_page())
}

async fn search(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Html<String> {
    let query = params.q;

    let lookup = tokio::task::spawn_blocking({
        let db = state.db.clone();
        let query = query.clone();
        move || search_fields(db.as_ref(), &query).map_err(|e| e.to_string())
    });

    let result = match lookup.await {
        Ok(Ok(result)) => result,
        Ok(Err(message)) => {
            tracing::warn!(%query, %message, "field search failed");
            FieldSearchResult {
                query,
                ..FieldSearchResult::default()
            }
        }
        Err(err) => {
            tracing::error!(%query, error = %err, "field search task failed");
            FieldSearchResult {
                query,
                ..FieldSearchResult::default()
            }
        }
    };

    tracing::debug!(query = %result.query, matched = result.fields.len(), "search request");
    Html(views::search_page(&result))
}
