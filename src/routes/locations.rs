//! Location routes.

use axum::{
    extract::{OriginalUri, Path, Query, State},
    Json,
};

use crate::data::{self, Resource};
use crate::errors::AppError;
use crate::middleware::origin::RequestOrigin;
use crate::models::location::Location;
use crate::models::pagination::{Envelope, PageRequest};
use crate::routes::one_or_many;
use crate::services::locations::{self, LocationFilters};
use crate::services::lookup;
use crate::AppState;

/// GET /locations — list locations with filters and pagination.
pub async fn list(
    State(state): State<AppState>,
    Query(filters): Query<LocationFilters>,
    RequestOrigin(origin): RequestOrigin,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<Envelope<Location>>, AppError> {
    let items = data::load::<Location>(&state.config.data_dir, Resource::Locations)?;
    let items = locations::apply(&filters, items);
    let request = PageRequest::new(
        origin,
        uri.path().to_string(),
        uri.query(),
        state.config.page_size,
    );
    Ok(Json(Envelope::build(&request, items)))
}

/// GET /locations/{ids} — single location, or an array for multi-ID lookups.
pub async fn get_by_ids(
    State(state): State<AppState>,
    Path(ids): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let items = data::load::<Location>(&state.config.data_dir, Resource::Locations)?;
    let matched = lookup::filter_by_ids(items, &ids);
    Ok(Json(one_or_many(matched)?))
}
