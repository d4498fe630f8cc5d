use crate::config::constants::MAX_URLS_PER_SUBMISSION;
use crate::enums::crawler_mode::CrawlerMode;
use crate::errors::{SiteSageError, SiteSageResult};
use crate::structs::audit::audit_request::AuditRequest;

/// Raw input gathered from the command line before it becomes an
/// [`AuditRequest`].
#[derive(Debug, Clone, Default)]
pub struct SubmissionForm {
    pub urls: Vec<String>,
    pub crawler_mode: CrawlerMode,
    /// `Some` selects a custom analysis; the prompt must then be non-blank.
    pub custom_prompt: Option<String>,
    pub generate_pdf: bool,
}

impl SubmissionForm {
    pub fn into_request(self) -> SiteSageResult<AuditRequest> {
        let urls: Vec<String> = self.urls
            .iter()
            .map(|u| u.trim())
            .filter(|u| !u.is_empty())
            .map(String::from)
            .collect();

        if urls.is_empty() {
            return Err(SiteSageError::validation_error(
                "urls",
                "",
                "at least one URL is required",
                Some("Please enter at least one URL to analyze."),
            ));
        }

        if urls.len() > MAX_URLS_PER_SUBMISSION {
            return Err(SiteSageError::validation_error(
                "urls",
                &urls.len().to_string(),
                &format!("at most {} URLs per submission", MAX_URLS_PER_SUBMISSION),
                Some("Split the list into several submissions."),
            ));
        }

        if let Some(invalid) = urls.iter().find(|u| !is_absolute_web_url(u)) {
            return Err(SiteSageError::validation_error(
                "urls",
                invalid,
                "must be an absolute URL",
                Some("Please enter valid URLs (e.g., https://example.com)"),
            ));
        }

        let custom_prompt = match self.custom_prompt {
            Some(prompt) if prompt.trim().is_empty() => {
                return Err(SiteSageError::validation_error(
                    "custom_prompt",
                    "",
                    "custom analysis needs a prompt",
                    Some("Please provide a custom AI prompt for analysis."),
                ));
            }
            Some(prompt) => Some(prompt.trim().to_string()),
            None => None,
        };

        Ok(AuditRequest::new(urls)
            .with_crawler_mode(self.crawler_mode)
            .with_custom_prompt(custom_prompt)
            .with_generate_pdf(self.generate_pdf))
    }
}

fn is_absolute_web_url(value: &str) -> bool {
    match url::Url::parse(value) {
        Ok(url) => url.has_host(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(urls: &[&str]) -> SubmissionForm {
        SubmissionForm {
            urls: urls.iter().map(|u| u.to_string()).collect(),
            ..SubmissionForm::default()
        }
    }

    #[test]
    fn blank_entries_are_dropped() {
        let request = form(&["  https://example.com ", "", "   "]).into_request().unwrap();
        assert_eq!(request.urls, vec!["https://example.com".to_string()]);
        assert_eq!(request.generate_pdf, Some(false));
        assert_eq!(request.crawler_mode, CrawlerMode::Standard);
    }

    #[test]
    fn only_blank_entries_is_rejected() {
        let error = form(&["", " "]).into_request().unwrap_err();
        assert!(matches!(error, SiteSageError::ValidationError { ref field, .. } if field == "urls"));
    }

    #[test]
    fn more_than_five_urls_is_rejected() {
        let urls: Vec<String> = (0..6).map(|i| format!("https://site{}.com", i)).collect();
        let refs: Vec<&str> = urls.iter().map(|u| u.as_str()).collect();
        assert!(form(&refs).into_request().is_err());
        assert!(form(&refs[..5]).into_request().is_ok());
    }

    #[test]
    fn relative_or_garbage_urls_are_rejected() {
        assert!(form(&["example.com"]).into_request().is_err());
        assert!(form(&["/just/a/path"]).into_request().is_err());
        assert!(form(&["mailto:someone@example.com"]).into_request().is_err());
    }

    #[test]
    fn custom_analysis_requires_prompt() {
        let mut blank = form(&["https://example.com"]);
        blank.custom_prompt = Some("   ".to_string());
        assert!(blank.into_request().is_err());

        let mut filled = form(&["https://example.com"]);
        filled.custom_prompt = Some(" Focus on local SEO ".to_string());
        filled.crawler_mode = CrawlerMode::Js;
        let request = filled.into_request().unwrap();
        assert_eq!(request.custom_prompt.as_deref(), Some("Focus on local SEO"));
        assert_eq!(request.crawler_mode, CrawlerMode::Js);
    }
}
