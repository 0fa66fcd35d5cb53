//! Commands that talk to GitHub

use clap::{Args, Subcommand};
use maintainerd_core::{build_with_selection, suggest_semver, Config};
use maintainerd_github::{GitHubClient, RepoPath};

/// GitHub commands
#[derive(Args, Debug)]
pub struct RemoteArgs {
    /// GitHub App installation id to act as
    #[arg(short, long, env = "MAINTAINERD_INSTALLATION_ID")]
    pub installation: u64,

    #[command(subcommand)]
    pub command: RemoteCommand,
}

#[derive(Subcommand, Debug)]
pub enum RemoteCommand {
    /// Show a repository's `.maintainerd` configuration
    Config {
        /// Repository (owner/repo or GitHub URL)
        repo: String,
    },

    /// List a pull request's commits and the semver they suggest
    Commits {
        /// Repository (owner/repo or GitHub URL)
        repo: String,

        /// Pull request number
        number: u64,

        /// Also print the checklist rendered with the suggestion applied
        #[arg(long)]
        preview: bool,
    },
}

impl RemoteArgs {
    /// Execute the remote command
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let client = GitHubClient::from_config(self.installation, config)?;

        match &self.command {
            RemoteCommand::Config { repo } => {
                let repo: RepoPath = repo.parse()?;
                let repo_config = client.get_config(&repo).await?;
                let checklist = &repo_config.pull_request;

                println!("{}", repo);
                println!("Preamble: {}", checklist.preamble);
                println!("Items:");
                for item in &checklist.items {
                    let mut flags = Vec::new();
                    if item.required {
                        flags.push("required");
                    }
                    if item.default {
                        flags.push("checked by default");
                    }
                    println!("  -{} [{}]", item.prompt, flags.join(", "));
                }
                println!(
                    "Semver: enabled={} required={} autodetect={}",
                    checklist.semver.enabled, checklist.semver.required, checklist.semver.autodetect
                );
            }
            RemoteCommand::Commits {
                repo,
                number,
                preview,
            } => {
                let repo: RepoPath = repo.parse()?;
                let commits = client.get_pull_request_commits(&repo, *number).await?;

                for commit in &commits {
                    let short = commit.sha.get(..7).unwrap_or(commit.sha.as_str());
                    println!("{} {}", short, commit.summary());
                }

                let messages: Vec<&str> = commits.iter().map(|c| c.message()).collect();
                let suggestion = suggest_semver(&messages);
                println!();
                match suggestion {
                    Some(level) => println!("Suggested semver: {}", level),
                    None => println!("Suggested semver: (none)"),
                }

                if *preview {
                    let repo_config = client.get_config(&repo).await?;
                    let selection = suggestion.filter(|_| repo_config.pull_request.semver.autodetect);
                    println!();
                    print!(
                        "{}",
                        build_with_selection("", &repo_config.pull_request, selection)
                    );
                }
            }
        }

        Ok(())
    }
}
