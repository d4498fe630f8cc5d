use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CrawlerMode {
    /// Plain HTTP fetch of the page
    #[default]
    Standard,
    /// Render the page with JavaScript before analysis
    Js,
}
