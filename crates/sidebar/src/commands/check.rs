//! `sidebar check` command implementation.

use std::path::PathBuf;

use clap::Args;
use sidebar_config::CliSettings;
use sidebar_content::{ContentStore, FsContentStore};
use sidebar_shell::App;
use sidebar_tree::{CheckOptions, NavigationTree, ReferenceError, ValidationReport, check};

use super::{SourceArgs, load_tree};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Report unresolved references without failing.
    #[arg(long)]
    allow_missing: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails, or if unresolved references exist
    /// and `validation.fail_on_missing` is set.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.source.load_config(CliSettings {
            source_dir: self.source_dir,
            fail_on_missing: self.allow_missing.then_some(false),
            ..Default::default()
        })?;

        let app = App::bootstrap(&config.site)?;
        tracing::info!(
            languages = app.highlighter().len(),
            "Page shell configuration is valid"
        );

        let tree = load_tree(&config.docs_resolved.sidebars)?;
        let store = FsContentStore::new(config.docs_resolved.source_dir.clone());
        let options = CheckOptions {
            max_depth: config.validation.max_depth,
        };
        let (report, documents) = check_against(&tree, &store, &options)?;

        output.highlight(&format!(
            "Checked {} sidebars against {documents} documents in {}",
            tree.len(),
            store.source_dir().display()
        ));
        print_report(&output, &report);

        if report.errors.is_empty() {
            output.success("All document references resolve");
            return Ok(());
        }

        let summary = format!("{} unresolved document references", report.errors.len());
        if config.validation.fail_on_missing {
            return Err(CliError::Validation(summary));
        }
        output.warning(&format!("{summary} (allowed)"));
        Ok(())
    }
}

/// Check `tree` against the ids in `store`, returning the report and the
/// number of known documents.
fn check_against(
    tree: &NavigationTree,
    store: &dyn ContentStore,
    options: &CheckOptions,
) -> Result<(ValidationReport, usize), CliError> {
    let known = store.document_ids()?;
    Ok((check(tree, &known, options), known.len()))
}

/// Print errors grouped by sidebar, then warnings.
fn print_report(output: &Output, report: &ValidationReport) {
    let mut current: Option<&str> = None;
    for error in &report.errors {
        if current != Some(error.sidebar()) {
            current = Some(error.sidebar());
            output.info(error.sidebar());
        }
        output.error(&format!("  {}", describe(error)));
    }

    for warning in &report.warnings {
        output.warning(&format!("warning: {warning}"));
    }
    if !report.warnings.is_empty() {
        output.detail(&format!("{} warnings", report.warnings.len()));
    }
}

fn describe(error: &ReferenceError) -> String {
    format!("{} ({} at {})", error.id, error.kind, error.path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sidebar_content::MockContentStore;
    use sidebar_tree::{NodeKind, NodePath};

    fn tree() -> NavigationTree {
        NavigationTree::from_json_str(
            r#"{
                "earnSidebar": { "Earn": [
                    "Earn/bridge",
                    { "type": "category", "label": "Liquid Staking",
                      "link": { "type": "doc", "id": "Earn/liquid-staking/overview" },
                      "items": ["Earn/liquid-staking/eth"] }
                ]}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_check_against_reports_missing_documents() {
        let store = MockContentStore::new().with_document("Earn/bridge");

        let (report, documents) =
            check_against(&tree(), &store, &CheckOptions::default()).unwrap();

        assert_eq!(documents, 1);
        let ids: Vec<_> = report.errors.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["Earn/liquid-staking/overview", "Earn/liquid-staking/eth"]
        );
        assert_eq!(report.errors[0].kind, NodeKind::Category);
    }

    #[test]
    fn test_check_against_all_known() {
        let store = MockContentStore::new().with_documents([
            "Earn/bridge",
            "Earn/liquid-staking/overview",
            "Earn/liquid-staking/eth",
        ]);

        let (report, documents) =
            check_against(&tree(), &store, &CheckOptions::default()).unwrap();

        assert_eq!(documents, 3);
        assert!(report.is_valid());
    }

    #[test]
    fn test_describe() {
        let error = ReferenceError {
            id: "Build/Guides/rpc".to_owned(),
            kind: NodeKind::DocRef,
            path: NodePath {
                sidebar: "buildSidebar".to_owned(),
                indices: vec![0, 1],
            },
        };

        assert_eq!(
            describe(&error),
            format!("Build/Guides/rpc (doc_ref at {})", error.path)
        );
    }
}
