//! Argument shapes for the Typefully draft operations. These are the only
//! typed payloads in the gateway; upstream responses stay opaque JSON.

use serde::{Deserialize, Serialize};

/// Body of a create-draft request. Optional fields are omitted from the wire
/// when absent, so the upstream sees exactly what the caller supplied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DraftParams {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threadify: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_retweet_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_plug_enabled: Option<bool>,
}

/// Query for recently-scheduled drafts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScheduledDraftsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_filter: Option<String>,
}
