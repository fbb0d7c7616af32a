use serde::{Deserialize, Serialize};

/// One row of the personal watch log, served as a static JSON array.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LocalEntry {
    pub id: String,
    pub rating: u8,
    #[serde(rename = "view_time")]
    pub watched_at: String,
    pub comment: String,
}

/// Talk metadata as returned by the remote catalog for a single id.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RemoteDetail {
    #[serde(rename = "guid")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "persons", default)]
    pub speakers: Vec<String>,
    // Used as a denominator when mapping pointer positions, so absent means 0.
    #[serde(rename = "duration", default)]
    pub duration_seconds: u64,
    #[serde(rename = "thumb_url", default)]
    pub thumbnail_url: Option<String>,
    #[serde(rename = "timeline_url", default)]
    pub timeline_preview_url: Option<String>,
    #[serde(rename = "frontend_link")]
    pub canonical_url: String,
    #[serde(rename = "conference_title")]
    pub series_title: String,
}
