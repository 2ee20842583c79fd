//! Character entity.

use serde::{Deserialize, Serialize};

use crate::models::Identified;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterGroup {
    pub name: String,
    #[serde(default)]
    pub subgroup: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relative {
    pub name: String,
    pub relation: String,
}

/// A character record. Only `id` and `name` are guaranteed; everything else
/// varies per character in the source data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Number or string in the source data ("Unknown", "850+", ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthplace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<CharacterGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<Vec<String>>,
    /// Absolute URLs to the episode resources this character appears in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episodes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relatives: Option<Vec<Relative>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_actor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub titan_shifter: Option<bool>,
    /// Absolute URLs to the titan resources this character has inherited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub titans: Option<Vec<String>>,
}

impl Identified for Character {
    fn id(&self) -> i64 {
        self.id
    }
}
