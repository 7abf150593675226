//! Plan execution and exit-status mapping.

use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};

use super::plan::{Action, ActionPlan, Effect};
use crate::cli::ExitStatus;
use crate::report::{print_error, print_notice, print_report};

/// Executes a plan against the filesystem, narrating each step to stdout.
pub fn run(plan: &ActionPlan) -> ExitStatus {
    run_to(plan, &mut io::stdout().lock(), &mut io::stderr().lock())
}

/// Executes a plan with injected writers. Tests use this to capture output.
///
/// Actions run strictly in plan order so reports interleave with the
/// effects they describe. A fatal plan flushes its narration and runs no
/// effect at all; an I/O error aborts immediately with no rollback.
pub fn run_to<O: Write, E: Write>(plan: &ActionPlan, out: &mut O, err: &mut E) -> ExitStatus {
    if plan.is_fatal() {
        // Flush the full narration so the user sees the context for the
        // refusal, but leave the filesystem untouched.
        for action in &plan.actions {
            match action {
                Action::Report(report) => print_report(report, false, out),
                Action::FatalReport(report) => print_report(report, true, out),
                Action::Effect(_) => {}
            }
        }
        return ExitStatus::Failure;
    }

    if !plan.has_effects() {
        print_error("No .env*.local files found", err);
        return ExitStatus::Failure;
    }

    for action in &plan.actions {
        match action {
            Action::Report(report) => print_report(report, false, out),
            Action::FatalReport(report) => print_report(report, true, out),
            Action::Effect(effect) => {
                if plan.dry_run {
                    continue;
                }
                if let Err(error) = apply(effect) {
                    print_error(&format!("{error:#}"), err);
                    return ExitStatus::Failure;
                }
            }
        }
    }

    if plan.dry_run {
        print_notice("Dry run, no changes made", out);
    }
    ExitStatus::Success
}

fn apply(effect: &Effect) -> Result<()> {
    match effect {
        Effect::Backup { from, to } => {
            fs::copy(from, to).with_context(|| {
                format!("Failed to back up {} to {}", from.display(), to.display())
            })?;
        }
        Effect::Write { path, contents } => {
            fs::write(path, contents)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
    }
    Ok(())
}
