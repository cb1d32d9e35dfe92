use clap::{Parser, Subcommand};
use repo_miner::commits;
use repo_miner::config::{AppConfig, RepoId};
use repo_miner::export;
use repo_miner::github::GitHubClient;
use repo_miner::issues::{self, StateFilter};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "repo-miner",
    version,
    about = "Fetch GitHub commits and issues and normalize them into CSV tables"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch commits and save them to a CSV file
    FetchCommits {
        /// Repository in owner/name form
        #[arg(long)]
        repo: RepoId,

        /// Max number of commits to fetch
        #[arg(long)]
        max: Option<NonZeroUsize>,

        /// Path to the output commits CSV
        #[arg(long)]
        out: PathBuf,
    },

    /// Fetch issues (excluding pull requests) and save them to a CSV file
    FetchIssues {
        /// Repository in owner/name form
        #[arg(long)]
        repo: RepoId,

        /// Filter issues by state
        #[arg(long, value_enum, default_value_t)]
        state: StateFilter,

        /// Max number of issues to fetch
        #[arg(long)]
        max: Option<NonZeroUsize>,

        /// Path to the output issues CSV
        #[arg(long)]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing (logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "repo_miner=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;
    let client = GitHubClient::new(&config)?;

    match cli.command {
        Command::FetchCommits { repo, max, out } => {
            let records = client
                .fetch_commits(&repo, max.map(NonZeroUsize::get))
                .await?;
            let written = export::write_table(&out, &commits::COLUMNS, &records)?;
            println!("Saved {} commits to {}", written, out.display());
        }
        Command::FetchIssues {
            repo,
            state,
            max,
            out,
        } => {
            let records = client
                .fetch_issues(&repo, state, max.map(NonZeroUsize::get))
                .await?;
            let written = export::write_table(&out, &issues::COLUMNS, &records)?;
            println!("Saved {} issues to {}", written, out.display());
        }
    }

    Ok(())
}
