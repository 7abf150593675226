//! Collision resolution and action planning.
//!
//! The planner turns directory batches into an ordered list of report and
//! effect actions without mutating anything; it only reads destination
//! files for the ownership check. Insertion order is the contract: every
//! effect is preceded by the report line that narrates it, so console
//! output stays an accurate real-time narration when the plan runs.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

use super::scan::{DirectoryBatch, SourceFile};
use super::{RunContext, header, transform};

/// Captures the `<suffix>` in `.env<suffix>.local`.
static LOCAL_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\.env(.*)\.local$").unwrap());

/// Write/backup policy supplied by the CLI layer.
///
/// `backup_suffix` and `force` are mutually exclusive; the argument parser
/// rejects the combination before a policy is ever constructed, so the
/// planner does not re-check it.
#[derive(Debug, Clone, Default)]
pub struct Policy {
    pub dry_run: bool,
    pub backup_suffix: Option<String>,
    pub force: bool,
}

/// A generated file together with the source it was derived from.
#[derive(Debug, Clone)]
pub struct GeneratedArtifact {
    pub source_path: PathBuf,
    pub destination_path: PathBuf,
    pub generated_text: String,
}

/// A console line attributed to the search directory it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub dir: String,
    pub text: String,
}

/// A filesystem mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Backup { from: PathBuf, to: PathBuf },
    Write { path: PathBuf, contents: String },
}

/// One planned step. Reports narrate, effects mutate, and a fatal report
/// marks a collision that aborts the run before any effect executes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Report(Report),
    FatalReport(Report),
    Effect(Effect),
}

/// The ordered list of steps for a whole run.
#[derive(Debug, Clone)]
pub struct ActionPlan {
    pub actions: Vec<Action>,
    pub dry_run: bool,
}

impl ActionPlan {
    pub fn is_fatal(&self) -> bool {
        self.actions
            .iter()
            .any(|action| matches!(action, Action::FatalReport(_)))
    }

    pub fn has_effects(&self) -> bool {
        self.actions
            .iter()
            .any(|action| matches!(action, Action::Effect(_)))
    }
}

/// Derives the destination path by stripping the trailing `.local` segment:
/// `.env<suffix>.local` becomes `.env<suffix>`. Returns `None` for names
/// that do not match the source pattern.
pub fn derive_destination(source_path: &Path) -> Option<PathBuf> {
    let name = source_path.file_name()?.to_str()?;
    let captures = LOCAL_SUFFIX.captures(name)?;
    Some(source_path.with_file_name(format!(".env{}", &captures[1])))
}

/// Builds the plan for all batches, in order.
///
/// Planning stops at the first batch that produced a fatal collision;
/// later batches never contribute actions. The caller consumes the batches,
/// nothing retains them afterwards.
pub fn plan(ctx: &RunContext, policy: &Policy, batches: Vec<DirectoryBatch>) -> Result<ActionPlan> {
    let mut actions = Vec::new();

    for batch in batches {
        plan_batch(ctx, policy, &batch, &mut actions)?;

        // One irreconcilable collision fails the whole run; directories
        // after this one are never planned.
        if actions
            .iter()
            .any(|action| matches!(action, Action::FatalReport(_)))
        {
            break;
        }
    }

    Ok(ActionPlan {
        actions,
        dry_run: policy.dry_run,
    })
}

fn plan_batch(
    ctx: &RunContext,
    policy: &Policy,
    batch: &DirectoryBatch,
    actions: &mut Vec<Action>,
) -> Result<()> {
    let dir = batch.relative_dir.as_str();

    let found = if batch.files.is_empty() {
        "No .env*.local files found".to_string()
    } else {
        format!("Found {} .env*.local file(s)", batch.files.len())
    };
    actions.push(report(dir, found));

    for source in &batch.files {
        let artifact = generate(ctx, source)?;
        plan_file(policy, dir, artifact, actions)?;
    }

    Ok(())
}

fn generate(ctx: &RunContext, source: &SourceFile) -> Result<GeneratedArtifact> {
    let body = transform(&source.contents);
    let generated_text = header::tag(ctx, &source.path, &body);
    let destination_path = derive_destination(&source.path).with_context(|| {
        format!(
            "Source file name does not match .env*.local: {}",
            source.path.display()
        )
    })?;

    Ok(GeneratedArtifact {
        source_path: source.path.clone(),
        destination_path,
        generated_text,
    })
}

fn plan_file(
    policy: &Policy,
    dir: &str,
    artifact: GeneratedArtifact,
    actions: &mut Vec<Action>,
) -> Result<()> {
    let destination = artifact.destination_path;
    let name = file_name(&destination);

    let write = Action::Effect(Effect::Write {
        path: destination.clone(),
        contents: artifact.generated_text,
    });
    let writing = report(
        dir,
        format!("Writing {name} with platform-specific public variables..."),
    );

    if !destination.exists() {
        actions.push(writing);
        actions.push(write);
        return Ok(());
    }

    let existing = fs::read_to_string(&destination).with_context(|| {
        format!(
            "Failed to read existing destination: {}",
            destination.display()
        )
    })?;

    actions.push(report(dir, format!("{name} already exists")));

    if header::is_generated(&existing) {
        actions.push(report(
            dir,
            format!("{name} was previously generated by hotenv"),
        ));
        actions.push(write);
    } else if let Some(suffix) = &policy.backup_suffix {
        let backup = backup_path(&destination, suffix);
        actions.push(report(
            dir,
            format!("Backing up {name} to {}...", file_name(&backup)),
        ));
        actions.push(Action::Effect(Effect::Backup {
            from: destination.clone(),
            to: backup,
        }));
        actions.push(writing);
        actions.push(write);
    } else if policy.force {
        actions.push(report(dir, format!("Overwriting {name}...")));
        actions.push(write);
    } else {
        actions.push(Action::FatalReport(Report {
            dir: dir.to_string(),
            text: format!("{name} already exists, use --force to overwrite or --backup to keep a copy"),
        }));
    }

    Ok(())
}

fn report(dir: &str, text: impl Into<String>) -> Action {
    Action::Report(Report {
        dir: dir.to_string(),
        text: text.into(),
    })
}

fn backup_path(destination: &Path, suffix: &str) -> PathBuf {
    let mut name = file_name(destination);
    name.push_str(suffix);
    destination.with_file_name(name)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
