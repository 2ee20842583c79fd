//! Titan entity.

use serde::{Deserialize, Serialize};

use crate::models::Identified;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Titan {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abilities: Option<Vec<String>>,
    /// Absolute URL to the character resource currently holding this titan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_inheritor: Option<String>,
    /// Absolute URLs to the character resources who previously held it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_inheritors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allegiance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Identified for Titan {
    fn id(&self) -> i64 {
        self.id
    }
}
