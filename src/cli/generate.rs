//! The `generate` command: scan, plan, execute.

use anyhow::Result;

use super::args::GenerateCommand;
use super::exit_status::ExitStatus;
use crate::config::Config;
use crate::engine::{self, Policy, RunContext};

pub fn generate(cmd: GenerateCommand) -> Result<ExitStatus> {
    let ctx = RunContext::from_current_dir()?;
    let config = Config::load(&ctx)?;

    let search_dirs = if cmd.args.search_dirs.is_empty() {
        config.search_dirs.clone()
    } else {
        cmd.args.search_dirs.clone()
    };

    // --backup without an explicit suffix falls back to the configured one.
    let backup_suffix = cmd
        .args
        .backup
        .map(|suffix| suffix.unwrap_or_else(|| config.backup_suffix.clone()));

    let policy = Policy {
        dry_run: cmd.args.dry_run,
        backup_suffix,
        force: cmd.args.force,
    };

    let batches = search_dirs
        .iter()
        .map(|dir| engine::scan(&ctx, dir))
        .collect::<Result<Vec<_>>>()?;

    let plan = engine::plan(&ctx, &policy, batches)?;
    Ok(engine::run(&plan))
}
