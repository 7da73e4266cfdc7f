//! Gone branch removal
//!
//! Sequences one run: load config, check the repository, prune, list gone
//! branches, drop protected ones, confirm, and delete. Everything up to the
//! deletion phase is fatal on failure; deletions are independent and a
//! failed one does not stop the rest.

use colored::Colorize;
use std::io::{BufRead, Write};

use crate::config::{Config, ConfigLoader};
use crate::error::{GharError, Result};
use crate::git::{delete_branch, fetch_prune, gone_branches, repository_root};
use crate::git::{CommandRunner, DeleteMode};

use super::filter::filter_protected;
use super::prompt::confirm;
use super::report::{BranchFailure, Outcome, RemovalReport};

/// Per-invocation switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemoveOptions {
    /// Skip the confirmation prompt
    pub force: bool,
    /// Deletion mode for the whole batch
    pub mode: DeleteMode,
}

impl RemoveOptions {
    pub fn new(force: bool, mode: DeleteMode) -> Self {
        Self { force, mode }
    }
}

pub struct GoneBranchRemover<'a> {
    runner: &'a dyn CommandRunner,
    loader: &'a dyn ConfigLoader,
    options: RemoveOptions,
}

impl<'a> GoneBranchRemover<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        loader: &'a dyn ConfigLoader,
        options: RemoveOptions,
    ) -> Self {
        Self {
            runner,
            loader,
            options,
        }
    }

    /// Execute a full run.
    ///
    /// `input` is only read when confirmation is required. Progress goes to
    /// `out`, per-branch failures to `err`.
    pub fn run<R, O, E>(&self, input: &mut R, out: &mut O, err: &mut E) -> Result<Outcome>
    where
        R: BufRead,
        O: Write,
        E: Write,
    {
        let config = self.loader.load()?;
        let candidates = self.find_candidates(&config)?;

        if candidates.is_empty() {
            writeln!(out, "{}", "No branches to remove.".yellow())?;
            return Ok(Outcome::NothingToRemove);
        }

        print_candidates(&candidates, out)?;

        if self.options.force {
            tracing::debug!("--force given, skipping confirmation");
        } else if !confirm(input, out)? {
            writeln!(out, "{}", "Aborted.".yellow())?;
            return Ok(Outcome::Aborted { candidates });
        }

        let report = self.delete_all(&candidates, out, err)?;
        Ok(Outcome::Completed(report))
    }

    /// Gone branches eligible for deletion under `config`.
    ///
    /// Checks the repository and prunes remote refs before listing.
    pub fn find_candidates(&self, config: &Config) -> Result<Vec<String>> {
        let root = repository_root(self.runner).map_err(GharError::Environment)?;
        tracing::debug!(root = %root, "repository found");

        fetch_prune(self.runner).map_err(GharError::RemoteSync)?;

        let gone = gone_branches(self.runner).map_err(GharError::Listing)?;
        let candidates = filter_protected(&gone, &config.protected_branches);
        tracing::debug!(
            gone = gone.len(),
            protected_skipped = gone.len() - candidates.len(),
            "filtered gone branches"
        );

        Ok(candidates)
    }

    fn delete_all<O: Write, E: Write>(
        &self,
        candidates: &[String],
        out: &mut O,
        err: &mut E,
    ) -> Result<RemovalReport> {
        let mode = self.options.mode;
        tracing::debug!(%mode, count = candidates.len(), "deleting branches");

        let mut report = RemovalReport::default();
        for branch in candidates {
            match delete_branch(self.runner, branch, mode) {
                Ok(_) => {
                    writeln!(out, "{}", format!("Deleted branch {branch}").green())?;
                    report.deleted.push(branch.clone());
                }
                Err(error) => {
                    tracing::debug!(branch = %branch, error = %error, "failed to delete branch");
                    writeln!(
                        err,
                        "{}",
                        format!("Failed to delete branch {branch}: {error}").red()
                    )?;
                    report.failed.push(BranchFailure {
                        branch: branch.clone(),
                        error,
                    });
                }
            }
        }

        Ok(report)
    }
}

fn print_candidates<O: Write>(candidates: &[String], out: &mut O) -> std::io::Result<()> {
    writeln!(
        out,
        "{}",
        "The following branches are gone from the remote and can be removed:".yellow()
    )?;
    for branch in candidates {
        writeln!(out, "- {}", branch.green())?;
    }
    Ok(())
}
