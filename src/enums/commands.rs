use clap::Subcommand;
use crate::enums::crawler_mode::CrawlerMode;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a sample ~/sitesage/config.toml
    Init,
    /// Create an account and sign in
    Signup {
        email: String,
        #[clap(long, env = "SITESAGE_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Sign in with an existing account
    Login {
        email: String,
        #[clap(long, env = "SITESAGE_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Forget the stored session
    Logout,
    /// Show the signed-in account
    Whoami,
    /// Start audits for up to five URLs
    Submit {
        #[clap(required = true)]
        urls: Vec<String>,
        #[clap(short, long, value_enum, default_value_t = CrawlerMode::Standard)]
        crawler: CrawlerMode,
        /// Run a custom analysis with this prompt
        #[clap(short, long)]
        prompt: Option<String>,
        /// Ask the service to produce a PDF report
        #[clap(long)]
        pdf: bool,
        /// Keep polling until the new audits finish
        #[clap(short, long)]
        watch: bool,
    },
    /// List your audits
    List {
        #[clap(long)]
        json: bool,
    },
    /// Show the full report for one audit
    Show {
        id: String,
        #[clap(long)]
        json: bool,
    },
    /// Poll until no audit is pending
    Watch {
        #[clap(short, long)]
        interval_ms: Option<u64>,
    },
}
