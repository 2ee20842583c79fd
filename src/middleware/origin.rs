//! Link-origin resolution extractor for Axum handlers.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::Host;

use crate::AppState;

/// The origin used to fully qualify generated links (pagination URLs, the
/// discovery document).
///
/// The configured `DNS` base origin wins when set; otherwise the origin is
/// derived from the inbound request: `x-forwarded-proto` (default `http`)
/// plus the host the client addressed.
#[derive(Debug, Clone)]
pub struct RequestOrigin(pub String);

impl FromRequestParts<AppState> for RequestOrigin {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(base) = &state.config.base_url {
            return Ok(RequestOrigin(base.clone()));
        }

        let scheme = parts
            .headers
            .get("x-forwarded-proto")
            .and_then(|value| value.to_str().ok())
            .unwrap_or("http")
            .to_string();

        let host = match Host::from_request_parts(parts, state).await {
            Ok(Host(host)) => host,
            Err(_) => "localhost".to_string(),
        };

        Ok(RequestOrigin(format!("{scheme}://{host}")))
    }
}
