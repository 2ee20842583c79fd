//! Episode routes.

use axum::{
    extract::{OriginalUri, Path, Query, State},
    Json,
};

use crate::data::{self, Resource};
use crate::errors::AppError;
use crate::middleware::origin::RequestOrigin;
use crate::models::episode::Episode;
use crate::models::pagination::{Envelope, PageRequest};
use crate::routes::one_or_many;
use crate::services::episodes::{self, EpisodeFilters};
use crate::services::lookup;
use crate::AppState;

/// GET /episodes — list episodes with filters and pagination.
pub async fn list(
    State(state): State<AppState>,
    Query(filters): Query<EpisodeFilters>,
    RequestOrigin(origin): RequestOrigin,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<Envelope<Episode>>, AppError> {
    let items = data::load::<Episode>(&state.config.data_dir, Resource::Episodes)?;
    let items = episodes::apply(&filters, items);
    let request = PageRequest::new(
        origin,
        uri.path().to_string(),
        uri.query(),
        state.config.page_size,
    );
    Ok(Json(Envelope::build(&request, items)))
}

/// GET /episodes/{ids} — single episode, or an array for multi-ID lookups.
pub async fn get_by_ids(
    State(state): State<AppState>,
    Path(ids): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let items = data::load::<Episode>(&state.config.data_dir, Resource::Episodes)?;
    let matched = lookup::filter_by_ids(items, &ids);
    Ok(Json(one_or_many(matched)?))
}
