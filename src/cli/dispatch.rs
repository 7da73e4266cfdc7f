use anyhow::Result;
use std::io;

use ghar::cleanup::{GoneBranchRemover, Outcome, RemoveOptions};
use ghar::config::YamlConfigLoader;
use ghar::git::{DeleteMode, ProcessRunner};

use super::types::Cli;

/// Run ghar against the repository in the current directory.
pub fn dispatch(cli: Cli) -> Result<()> {
    let runner = ProcessRunner::new();
    let loader = YamlConfigLoader::new(".");
    let options = RemoveOptions::new(cli.force, DeleteMode::from_flag(cli.merged));

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    let outcome =
        GoneBranchRemover::new(&runner, &loader, options).run(&mut input, &mut out, &mut err)?;

    if let Outcome::Completed(report) = &outcome {
        tracing::info!(
            deleted = report.deleted.len(),
            failed = report.failed.len(),
            "cleanup finished"
        );
    }

    Ok(())
}
