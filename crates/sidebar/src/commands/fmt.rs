//! `sidebar fmt` command implementation.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use sidebar_config::CliSettings;
use sidebar_tree::NavigationTree;

use super::{SourceArgs, load_tree};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the fmt command.
#[derive(Args)]
pub(crate) struct FmtArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl FmtArgs {
    /// Execute the fmt command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or the output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.source.load_config(CliSettings::default())?;
        let tree = load_tree(&config.docs_resolved.sidebars)?;
        let json = canonical_json(&tree)?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, json)?;
                Output::new().success(&format!("Wrote {}", path.display()));
            }
            None => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(json.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

/// Pretty-printed canonical JSON with a trailing newline.
fn canonical_json(tree: &NavigationTree) -> Result<String, CliError> {
    let mut json = serde_json::to_string_pretty(tree)?;
    json.push('\n');
    Ok(json)
}
