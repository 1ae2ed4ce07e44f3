//! `sidebar toc` command implementation.

use std::io::{self, Write};

use clap::{Args, ValueEnum};
use sidebar_config::CliSettings;
use sidebar_tree::{FlatEntry, NavigationTree};

use super::{SourceArgs, load_tree};
use crate::error::CliError;

/// Output format for the table of contents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum TocFormat {
    /// Indented outline.
    #[default]
    Text,
    /// One JSON object per entry.
    Json,
}

/// Arguments for the toc command.
#[derive(Args)]
pub(crate) struct TocArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    format: TocFormat,

    /// Only print this sidebar.
    #[arg(long)]
    sidebar: Option<String>,
}

impl TocArgs {
    /// Execute the toc command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or the requested sidebar is unknown.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.source.load_config(CliSettings::default())?;
        let tree = load_tree(&config.docs_resolved.sidebars)?;
        let tree = match &self.sidebar {
            Some(name) => tree.select(name).ok_or_else(|| {
                CliError::Validation(format!(
                    "Unknown sidebar '{name}' (available: {})",
                    tree.names().collect::<Vec<_>>().join(", ")
                ))
            })?,
            None => tree,
        };

        let mut stdout = io::stdout().lock();
        write_toc(&mut stdout, &tree, self.format)?;
        stdout.flush()?;
        Ok(())
    }
}

/// Write the flattened tree in display order.
fn write_toc(
    out: &mut impl Write,
    tree: &NavigationTree,
    format: TocFormat,
) -> Result<(), CliError> {
    let mut sidebar = None;
    for entry in tree.flatten() {
        match format {
            TocFormat::Text => {
                if sidebar != Some(entry.sidebar) {
                    sidebar = Some(entry.sidebar);
                    writeln!(out, "{}", entry.sidebar)?;
                }
                writeln!(out, "{}", text_line(&entry))?;
            }
            TocFormat::Json => {
                serde_json::to_writer(&mut *out, &entry.to_summary())?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

/// Indented label, followed by the document id when it differs.
fn text_line(entry: &FlatEntry<'_>) -> String {
    let indent = "  ".repeat(entry.depth + 1);
    let label = entry.label();
    match entry.node.doc_id() {
        Some(id) if id != label => format!("{indent}{label} ({id})"),
        _ => format!("{indent}{label}"),
    }
}
