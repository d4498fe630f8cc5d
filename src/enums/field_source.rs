use serde::Serialize;

/// Where a dual-schema value was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldSource {
    /// Flat field of the current response schema (`seoScore`, `pageLoadTimeMs`, ...)
    Flat,
    /// Nested field of the legacy schema (`seo_score`, `metrics.load_time`, ...)
    Legacy,
    /// Neither location was populated; a display default was used.
    Fallback,
}
