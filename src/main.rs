use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use til_index::{Config, TilClient, TilError};
use tracing_subscriber::EnvFilter;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("TIL_INDEX_COMMIT"),
    ", built ",
    env!("TIL_INDEX_BUILD_DATE"),
    ")"
);

#[derive(Debug, Parser)]
#[command(
    name = "til-index",
    version = VERSION,
    about = "Keep a TIL repository's table of contents and index up to date"
)]
struct Cli {
    /// Root of the notes repository
    #[arg(long, env = "TIL_ROOT", global = true, default_value = ".")]
    root: PathBuf,

    /// Config file (defaults to <root>/til-index.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rebuild the table of contents and index in the root document
    #[command(name = "build-readme")]
    BuildReadme {
        /// Branch or commit the creation dates are read from
        #[arg(long = "ref")]
        reference: Option<String>,

        /// File name of the root document
        #[arg(long)]
        readme: Option<String>,
    },
    /// Announce the notes added between two commits to an MS Teams channel
    Notify {
        /// Earlier commit
        from: String,

        /// Later commit
        to: String,

        /// Incoming webhook URL (falls back to TEAMS_WEBHOOK_URL)
        #[arg(long)]
        webhook_url: Option<String>,

        /// Web URL of the repository (falls back to GITHUB_SERVER_URL/GITHUB_REPOSITORY)
        #[arg(long)]
        repo_url: Option<String>,
    },
    /// Write a config file with default values to <root>/til-index.toml
    #[command(name = "init-config")]
    InitConfig {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            // Bad input or configuration exits with 2, everything else with 1
            if e.downcast_ref::<TilError>().is_some_and(TilError::is_user_error) {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let Cli {
        root,
        config: config_path,
        json,
        command,
    } = cli;

    match command {
        Command::BuildReadme { reference, readme } => {
            let mut config = load_config(&root, config_path.as_deref())?;
            if let Some(reference) = reference {
                config.readme.branch = reference;
            }
            if let Some(readme) = readme {
                config.readme.file_name = readme;
            }

            let client = TilClient::with_config(&root, config)?;
            let response = client
                .build_readme_from_git()
                .with_context(|| format!("Failed to build {}", client.readme_path().display()))?;

            if json {
                print_json(&response)?;
            } else if response.document_changed {
                println!(
                    "Updated {} ({} notes, {} topics)",
                    response.readme_path, response.notes_indexed, response.topics
                );
            } else {
                println!("{} is already up to date", response.readme_path);
            }
        }
        Command::Notify {
            from,
            to,
            webhook_url,
            repo_url,
        } => {
            let mut config = load_config(&root, config_path.as_deref())?;
            if let Some(url) = webhook_url {
                config.notify.webhook_url = url;
            }
            if let Some(url) = repo_url {
                config.notify.repo_url = url;
            }

            let client = TilClient::with_config(&root, config)?;
            let response = client
                .notify(&from, &to)
                .await
                .with_context(|| format!("Failed to notify new notes between {} and {}", from, to))?;

            if json {
                print_json(&response)?;
            } else {
                println!("{}", response.summary());
            }
        }
        Command::InitConfig { force } => {
            let path = config_path.unwrap_or_else(|| Config::default_path(&root));
            if path.exists() && !force {
                anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
            }
            Config::default().save(&path)?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}

fn load_config(root: &Path, explicit: Option<&Path>) -> Result<Config> {
    Config::new(root, explicit).context("Failed to load configuration")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize response")?;
    println!("{}", json);
    Ok(())
}
