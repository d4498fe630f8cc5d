use serde::{Deserialize, Serialize};
use crate::enums::crawler_mode::CrawlerMode;

/// Body of `POST /api/audits`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRequest {
    pub urls: Vec<String>,
    pub crawler_mode: CrawlerMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generate_pdf: Option<bool>,
}

impl AuditRequest {
    pub fn new(urls: Vec<String>) -> Self {
        Self {
            urls,
            crawler_mode: CrawlerMode::Standard,
            custom_prompt: None,
            generate_pdf: None,
        }
    }

    pub fn with_crawler_mode(mut self, crawler_mode: CrawlerMode) -> Self {
        self.crawler_mode = crawler_mode;
        self
    }

    pub fn with_custom_prompt(mut self, custom_prompt: Option<String>) -> Self {
        self.custom_prompt = custom_prompt;
        self
    }

    pub fn with_generate_pdf(mut self, generate_pdf: bool) -> Self {
        self.generate_pdf = Some(generate_pdf);
        self
    }
}
