//! API root: resource discovery document.

use axum::Json;

use crate::data::Resource;
use crate::middleware::origin::RequestOrigin;

/// GET / — maps each resource name to its absolute collection URL.
pub async fn discovery(RequestOrigin(origin): RequestOrigin) -> Json<serde_json::Value> {
    let mut doc = serde_json::Map::new();
    for resource in Resource::ALL {
        doc.insert(
            resource.name().to_string(),
            serde_json::Value::String(format!("{origin}/{}", resource.name())),
        );
    }
    Json(serde_json::Value::Object(doc))
}
