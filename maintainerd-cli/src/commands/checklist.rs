//! Offline checklist commands operating on local files

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, ValueEnum};
use maintainerd_core::{
    build_with_selection, check_entries, check_semver, get_log_entry, RepoConfig, SemverLevel,
};

/// Semver option to pre-select when rendering
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SemverChoice {
    Major,
    Minor,
    Patch,
    Docs,
}

impl From<SemverChoice> for SemverLevel {
    fn from(choice: SemverChoice) -> Self {
        match choice {
            SemverChoice::Major => SemverLevel::Major,
            SemverChoice::Minor => SemverLevel::Minor,
            SemverChoice::Patch => SemverLevel::Patch,
            SemverChoice::Docs => SemverLevel::DocumentationOnly,
        }
    }
}

/// Arguments for the render command
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Path to a `.maintainerd` file
    #[arg(short, long, default_value = ".maintainerd")]
    pub config: PathBuf,

    /// File holding the current pull request body (empty if omitted)
    #[arg(short, long)]
    pub body: Option<PathBuf>,

    /// Pre-select a semantic version
    #[arg(long)]
    pub semver: Option<SemverChoice>,
}

impl RenderArgs {
    /// Execute the render command
    pub fn execute(&self) -> anyhow::Result<()> {
        let config = load_repo_config(&self.config)?;
        let body = match &self.body {
            Some(path) => read(path)?,
            None => String::new(),
        };

        let rendered = build_with_selection(
            &body,
            &config.pull_request,
            self.semver.map(SemverLevel::from),
        );
        print!("{}", rendered);

        Ok(())
    }
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to a `.maintainerd` file
    #[arg(short, long, default_value = ".maintainerd")]
    pub config: PathBuf,

    /// File holding the pull request body
    #[arg(short, long)]
    pub body: PathBuf,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> anyhow::Result<()> {
        let config = load_repo_config(&self.config)?;
        let body = read(&self.body)?;

        let entries = check_entries(&body)?;
        let semver = check_semver(&body, &config.pull_request)?;

        println!("Checklist: {}", entries.as_deref().unwrap_or("complete"));
        println!(
            "Semver:    {}",
            semver.as_deref().unwrap_or(if config.pull_request.semver.required {
                "selected"
            } else {
                "not required"
            })
        );

        if entries.is_some() || semver.is_some() {
            anyhow::bail!("pull request checklist is incomplete");
        }

        Ok(())
    }
}

/// Arguments for the log command
#[derive(Args, Debug)]
pub struct LogArgs {
    /// Body before the edit
    #[arg(long)]
    pub old: PathBuf,

    /// Body after the edit
    #[arg(long)]
    pub new: PathBuf,

    /// GitHub login of the editor
    #[arg(short, long)]
    pub user: String,
}

impl LogArgs {
    /// Execute the log command
    pub fn execute(&self) -> anyhow::Result<()> {
        let old = read(&self.old)?;
        let new = read(&self.new)?;

        match get_log_entry(&old, &new, &self.user) {
            Some(entry) => println!("{}", entry),
            None => println!("No checkbox change detected"),
        }

        Ok(())
    }
}

fn read(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn load_repo_config(path: &Path) -> anyhow::Result<RepoConfig> {
    let yaml = read(path)?;
    RepoConfig::from_yaml(&yaml).with_context(|| format!("Invalid config in {}", path.display()))
}
