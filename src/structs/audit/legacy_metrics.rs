use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegacyMetrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h1_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images_without_alt: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broken_links: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_time: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility_score: Option<f64>,
}
