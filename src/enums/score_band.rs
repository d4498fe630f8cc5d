use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsWork,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreBand::Excellent
        } else if score >= 60.0 {
            ScoreBand::Good
        } else {
            ScoreBand::NeedsWork
        }
    }

    /// Headline shown when the report carries no summary of its own.
    pub fn headline(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent! Website is well optimized for search engines.",
            ScoreBand::Good => "Website has good SEO foundations, but there's room for improvement.",
            ScoreBand::NeedsWork => "Website needs significant optimization to rank better.",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "🟢",
            ScoreBand::Good => "🟡",
            ScoreBand::NeedsWork => "🔴",
        }
    }
}
