//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod fmt;
pub(crate) mod toc;

pub(crate) use check::CheckArgs;
pub(crate) use fmt::FmtArgs;
pub(crate) use toc::TocArgs;

use std::path::{Path, PathBuf};

use clap::Args;
use sidebar_config::{CliSettings, Config};
use sidebar_tree::{NavigationTree, SidebarFormat};

use crate::error::CliError;

/// Arguments shared by every command that reads a sidebars file.
#[derive(Args)]
pub(crate) struct SourceArgs {
    /// Path to configuration file (default: auto-discover sidebar.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sidebars definition file, JSON or YAML (overrides config).
    #[arg(long, env = "SIDEBAR_FILE")]
    sidebars: Option<PathBuf>,
}

impl SourceArgs {
    /// Load configuration, applying `settings` on top of these arguments.
    pub(crate) fn load_config(&self, settings: CliSettings) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            sidebars: self.sidebars.clone(),
            ..settings
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}

/// Read and parse a sidebars file, picking the format from its extension.
pub(crate) fn load_tree(path: &Path) -> Result<NavigationTree, CliError> {
    let format = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(SidebarFormat::from_extension)
        .ok_or_else(|| {
            CliError::Validation(format!(
                "Unsupported sidebars file (expected .json, .yaml or .yml): {}",
                path.display()
            ))
        })?;
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let tree = NavigationTree::parse(&content, format)?;
    tracing::info!(
        path = %path.display(),
        sidebars = tree.len(),
        "Loaded sidebars"
    );
    Ok(tree)
}
