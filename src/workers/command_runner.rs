use std::io::{self, Write};
use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::sleep_duration_millis;
use crate::enums::commands::Commands;
use crate::enums::crawler_mode::CrawlerMode;
use crate::enums::watch_outcome::WatchOutcome;
use crate::errors::{SiteSageError, SiteSageResult};
use crate::helpers::submission_form::SubmissionForm;
use crate::logger::animated_logger::AnimatedLogger;
use crate::logger::audit_report_logger::AuditReportLogger;
use crate::services::api_client::SiteSageClient;
use crate::services::audit_normalizer::{normalize, normalize_all};
use crate::services::dashboard_session::DashboardSession;
use crate::services::token_stores::file_token_store::FileTokenStore;
use crate::structs::config::config::Config;
use crate::traits::audit_service::AuditService;
use crate::traits::token_store::TokenStore;

pub struct CommandRunner {
    config: Config,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> SiteSageResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Signup { email, password } => self.signup_command(&email, password).await,
            Commands::Login { email, password } => self.login_command(&email, password).await,
            Commands::Logout => self.logout_command(),
            Commands::Whoami => self.whoami_command(),
            Commands::Submit { urls, crawler, prompt, pdf, watch } => {
                self.submit_command(urls, crawler, prompt, pdf, watch).await
            }
            Commands::List { json } => self.list_command(json).await,
            Commands::Show { id, json } => self.show_command(&id, json).await,
            Commands::Watch { interval_ms } => self.watch_command(interval_ms).await,
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn token_store(&self) -> Arc<dyn TokenStore> {
        Arc::new(FileTokenStore::new(ConfigManager::token_path(&self.config)))
    }

    fn client(&self) -> SiteSageResult<SiteSageClient> {
        if let Err(errors) = ConfigManager::validate_config(&self.config) {
            return Err(SiteSageError::config_error(
                &errors.join("; "),
                None,
                Some("Fix ~/sitesage/config.toml or set SITESAGE_API_URL"),
            ));
        }
        Ok(SiteSageClient::new(&self.config.api.base_url, self.token_store()))
    }

    fn init_command(&self) -> SiteSageResult<()> {
        log::info!("🚀 Initializing sitesage configuration...");
        let path = ConfigManager::create_sample_config()?;
        log::info!("📝 Edit {} to point at your audit service.", path.display());
        Ok(())
    }

    async fn signup_command(&self, email: &str, password: Option<String>) -> SiteSageResult<()> {
        let password = Self::password_or_prompt(password)?;
        let session = self.client()?.signup(email, &password).await?;
        println!("🎉 Account created for {}", session.user.email);
        Ok(())
    }

    async fn login_command(&self, email: &str, password: Option<String>) -> SiteSageResult<()> {
        let password = Self::password_or_prompt(password)?;
        let session = self.client()?.login(email, &password).await?;
        println!("👋 Welcome back, {}", session.user.email);
        Ok(())
    }

    fn logout_command(&self) -> SiteSageResult<()> {
        self.token_store().clear()?;
        println!("👋 Signed out");
        Ok(())
    }

    fn whoami_command(&self) -> SiteSageResult<()> {
        let client = self.client()?;
        match (client.is_logged_in(), client.current_user()) {
            (true, Some(user)) => println!("👤 {} ({}) on {}", user.email, user.id, client.base_url()),
            (true, None) => println!("👤 Signed in on {}", client.base_url()),
            _ => println!("🔒 Not signed in. Run 'sitesage login <email>'."),
        }
        Ok(())
    }

    async fn submit_command(
        &self,
        urls: Vec<String>,
        crawler: CrawlerMode,
        prompt: Option<String>,
        pdf: bool,
        watch: bool,
    ) -> SiteSageResult<()> {
        let request = SubmissionForm {
            urls,
            crawler_mode: crawler,
            custom_prompt: prompt,
            generate_pdf: pdf,
        }
        .into_request()?;
        let count = request.urls.len();

        let mut session = self.session()?;
        let created = session.submit(request).await?;

        log::info!(
            "✅ Analysis started! Processing {} URL{}. Results will appear below.",
            count,
            if count > 1 { "s" } else { "" }
        );
        AuditReportLogger::print_audit_list(&normalize_all(&created));

        if watch {
            if let Err(e) = session.refresh().await {
                log::warn!("⚠️ Could not load existing audits: {}", e);
            }
            self.watch_session(&mut session).await;
        }

        Ok(())
    }

    async fn list_command(&self, json: bool) -> SiteSageResult<()> {
        let audits = self.client()?.list().await?;

        if json {
            println!("{}", serde_json::to_string_pretty(&audits)?);
        } else {
            AuditReportLogger::print_audit_list(&normalize_all(&audits));
        }
        Ok(())
    }

    async fn show_command(&self, id: &str, json: bool) -> SiteSageResult<()> {
        let audit = self.client()?.get(id).await?;

        if json {
            println!("{}", serde_json::to_string_pretty(&normalize(&audit))?);
        } else {
            AuditReportLogger::print_report(&normalize(&audit));
        }
        Ok(())
    }

    async fn watch_command(&self, interval_ms: Option<u64>) -> SiteSageResult<()> {
        let interval = interval_ms
            .filter(|ms| *ms > 0)
            .map(sleep_duration_millis)
            .unwrap_or_else(|| self.config.polling.interval());

        let mut session = DashboardSession::new(Arc::new(self.client()?), interval);
        // the first load must succeed; later failures are retried on the interval
        session.fetch().await?;
        AuditReportLogger::print_audit_list(&session.views());

        self.watch_session(&mut session).await;
        Ok(())
    }

    fn session(&self) -> SiteSageResult<DashboardSession> {
        Ok(DashboardSession::new(Arc::new(self.client()?), self.config.polling.interval()))
    }

    async fn watch_session(&self, session: &mut DashboardSession) {
        if !session.store().has_pending() {
            log::info!("✅ No pending audits");
            return;
        }

        let mut spinner = AnimatedLogger::new(Self::pending_message(session.store().pending_count()));
        spinner.start();

        let shutdown = async {
            if tokio::signal::ctrl_c().await.is_err() {
                std::future::pending::<()>().await;
            }
        };

        let outcome = session
            .watch(shutdown, |audits, report| {
                let pending = audits.iter().filter(|a| a.is_pending()).count();
                spinner.set_message(Self::pending_message(pending));
                if report.finished() > 0 {
                    log::debug!("{} audit(s) finished this cycle", report.finished());
                }
            })
            .await;

        match outcome {
            WatchOutcome::Settled => {
                spinner.stop("All audits finished").await;
                AuditReportLogger::print_audit_list(&session.views());
            }
            WatchOutcome::Cancelled => {
                spinner.error("Stopped watching; audits keep running on the server").await;
            }
        }
    }

    fn pending_message(pending: usize) -> String {
        format!("⏳ Waiting for {} pending audit(s)", pending)
    }

    fn password_or_prompt(password: Option<String>) -> SiteSageResult<String> {
        if let Some(password) = password.filter(|p| !p.is_empty()) {
            return Ok(password);
        }

        print!("Password: ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let password = input.trim_end_matches(['\r', '\n']).to_string();

        if password.is_empty() {
            return Err(SiteSageError::validation_error(
                "password",
                "",
                "must not be empty",
                Some("Pass --password or set SITESAGE_PASSWORD"),
            ));
        }
        Ok(password)
    }
}
