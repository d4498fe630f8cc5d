use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "sitesage")]
#[clap(about = "Submit websites for SEO audits and follow them to completion", long_about = None)]
pub struct Cli {
    /// Show debug logging
    #[clap(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
