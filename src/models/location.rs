//! Location entity.

use serde::{Deserialize, Serialize};

use crate::models::Identified;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub territory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notable_places: Option<Vec<String>>,
    /// Absolute URLs to the character resources who live or lived here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notable_inhabitants: Option<Vec<String>>,
}

impl Identified for Location {
    fn id(&self) -> i64 {
        self.id
    }
}
