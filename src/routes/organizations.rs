//! Organization routes.

use axum::{
    extract::{OriginalUri, Path, Query, State},
    Json,
};

use crate::data::{self, Resource};
use crate::errors::AppError;
use crate::middleware::origin::RequestOrigin;
use crate::models::organization::Organization;
use crate::models::pagination::{Envelope, PageRequest};
use crate::routes::one_or_many;
use crate::services::lookup;
use crate::services::organizations::{self, OrganizationFilters};
use crate::AppState;

/// GET /organizations — list organizations with filters and pagination.
pub async fn list(
    State(state): State<AppState>,
    Query(filters): Query<OrganizationFilters>,
    RequestOrigin(origin): RequestOrigin,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<Envelope<Organization>>, AppError> {
    let items = data::load::<Organization>(&state.config.data_dir, Resource::Organizations)?;
    let items = organizations::apply(&filters, items);
    let request = PageRequest::new(
        origin,
        uri.path().to_string(),
        uri.query(),
        state.config.page_size,
    );
    Ok(Json(Envelope::build(&request, items)))
}

/// GET /organizations/{ids} — single organization, or an array for multi-ID lookups.
pub async fn get_by_ids(
    State(state): State<AppState>,
    Path(ids): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let items = data::load::<Organization>(&state.config.data_dir, Resource::Organizations)?;
    let matched = lookup::filter_by_ids(items, &ids);
    Ok(Json(one_or_many(matched)?))
}
