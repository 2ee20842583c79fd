//! Character routes.

use axum::{
    extract::{OriginalUri, Path, Query, State},
    Json,
};

use crate::data::{self, Resource};
use crate::errors::AppError;
use crate::middleware::origin::RequestOrigin;
use crate::models::character::Character;
use crate::models::pagination::{Envelope, PageRequest};
use crate::routes::one_or_many;
use crate::services::characters::{self, CharacterFilters};
use crate::services::lookup;
use crate::AppState;

/// GET /characters — list characters with filters and pagination.
pub async fn list(
    State(state): State<AppState>,
    Query(filters): Query<CharacterFilters>,
    RequestOrigin(origin): RequestOrigin,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<Envelope<Character>>, AppError> {
    let items = data::load::<Character>(&state.config.data_dir, Resource::Characters)?;
    let items = characters::apply(&filters, items);
    let request = PageRequest::new(
        origin,
        uri.path().to_string(),
        uri.query(),
        state.config.page_size,
    );
    Ok(Json(Envelope::build(&request, items)))
}

/// GET /characters/{ids} — single character, or an array for multi-ID lookups.
pub async fn get_by_ids(
    State(state): State<AppState>,
    Path(ids): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let items = data::load::<Character>(&state.config.data_dir, Resource::Characters)?;
    let matched = lookup::filter_by_ids(items, &ids);
    Ok(Json(one_or_many(matched)?))
}
