use std::fmt::Write;
use chrono::{DateTime, Utc};
use crate::enums::audit_status::AuditStatus;
use crate::structs::audit::canonical_audit_view::CanonicalAuditView;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

pub struct AuditReportLogger {}

impl AuditReportLogger {
    pub fn print_audit_list(views: &[CanonicalAuditView]) {
        if views.is_empty() {
            println!("📭 No audits yet. Run 'sitesage submit <url>' to start one.");
            return;
        }

        let now = Utc::now();
        println!("\n📊 {} audit(s)", views.len());
        for view in views {
            println!("{}", Self::render_card(view, now));
        }
    }

    pub fn print_report(view: &CanonicalAuditView) {
        println!("{}", Self::render_report(view));
    }

    /// Short summary of one audit, as shown in the list.
    pub fn render_card(view: &CanonicalAuditView, now: DateTime<Utc>) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", RULE);
        let _ = writeln!(out, "{} {}  [{}]", view.status.emoji(), view.url, view.status_label());

        let _ = writeln!(out, "   🕒 {}   id: {}", view.created_ago(now), view.id);

        match view.status {
            AuditStatus::Completed => {
                if let (Some(score), Some(band)) = (view.score_value(), view.score_band()) {
                    let _ = writeln!(out, "   {} SEO Health Score: {}", band.emoji(), score);
                }
                let _ = writeln!(out, "   ⚡ Speed: {}", view.speed_label());
                let _ = writeln!(out, "   🖼️  Alt tags: {} missing", view.images_without_alt.value);
                let _ = writeln!(
                    out,
                    "   🔗 Links: {} internal, {} external",
                    view.internal_links, view.external_links
                );
            }
            AuditStatus::Failed => {
                let message = view.error_message.as_deref().unwrap_or_default();
                let _ = writeln!(out, "   ❌ {}", message);
            }
            AuditStatus::Pending => {
                let _ = writeln!(out, "   ⏳ Analyzing... results will appear when ready");
            }
        }

        out
    }

    /// Full report for one audit.
    pub fn render_report(view: &CanonicalAuditView) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\n📄 Audit Report for {}", view.url);
        let _ = writeln!(out, "{}", RULE);
        let _ = writeln!(out, "Status: {} {}", view.status.emoji(), view.status_label());
        let _ = writeln!(out, "Created: {}", view.created_at);
        if let Some(completed_at) = &view.completed_at {
            let _ = writeln!(out, "Completed: {}", completed_at);
        }

        if let Some(message) = &view.error_message {
            let _ = writeln!(out, "\n❌ {}", message);
        }

        if !view.has_results() {
            return out;
        }

        let score = view.score_value().unwrap_or(0.0);
        let _ = writeln!(out, "\n🏆 SEO Health Score: {}/100", score);
        let _ = writeln!(out, "   {}", view.headline());

        let _ = writeln!(out, "\n📈 Quick Stats");
        let _ = writeln!(out, "   Load time:        {}", view.speed_label());
        let _ = writeln!(out, "   Images:           {}", view.images_total);
        let _ = writeln!(out, "   Total links:      {}", view.total_links());
        let _ = writeln!(out, "   Missing alt text: {}", view.images_without_alt.value);

        let _ = writeln!(out, "\n⚠️  Issues");
        if view.issues.is_empty() {
            let _ = writeln!(out, "   No critical issues found");
        } else {
            for issue in &view.issues {
                let _ = writeln!(out, "   • {}", issue);
            }
        }

        let _ = writeln!(out, "\n💡 Recommendations");
        if view.recommendations.value.is_empty() {
            let _ = writeln!(out, "   No recommendations available");
        } else {
            for tip in &view.recommendations.value {
                let _ = writeln!(out, "   • {}", tip);
            }
        }

        let _ = writeln!(out, "\n🔎 Search Preview");
        let _ = writeln!(out, "   Title:            {}", view.title.value);
        let _ = writeln!(out, "   Meta description: {}", view.meta_description.value);

        let _ = writeln!(out, "\n🧱 Headings");
        let _ = writeln!(out, "   Main headings ({})", view.h1_tags.len());
        for tag in &view.h1_tags {
            let _ = writeln!(out, "     H1 {}", tag);
        }
        let _ = writeln!(out, "   Subheadings ({})", view.h2_tags.len());
        for tag in &view.h2_tags {
            let _ = writeln!(out, "     H2 {}", tag);
        }

        let _ = writeln!(out, "\n🔗 Links");
        let _ = writeln!(out, "   Internal: {}", view.internal_links);
        let _ = writeln!(out, "   External: {}", view.external_links);
        if let Some(broken) = view.broken_links {
            let _ = writeln!(out, "   Broken:   {}", broken);
        }

        if let Some(pdf_url) = &view.pdf_url {
            let _ = writeln!(out, "\n📥 PDF report: {}", pdf_url);
        }

        let _ = writeln!(out, "{}", RULE);
        out
    }
}
