//! The environment-file generation engine.
//!
//! Data flows strictly forward: scan loads `.env*.local` sources, transform
//! filters them down to public variables, tag stamps the provenance header,
//! plan turns the batches into an ordered list of report and effect actions,
//! and execute runs that list. Nothing mutates the filesystem before execute.

use std::path::PathBuf;

use anyhow::{Context, Result};

mod classify;
mod execute;
mod header;
mod plan;
mod scan;
mod transform;

pub use classify::{PUBLIC_PREFIXES, is_public};
pub use execute::{run, run_to};
pub use header::{WATERMARK, is_generated, tag};
pub use plan::{
    Action, ActionPlan, Effect, GeneratedArtifact, Policy, Report, derive_destination, plan,
};
pub use scan::{DirectoryBatch, SourceFile, scan};
pub use transform::transform;

/// Execution context passed into every stage that resolves paths.
///
/// Carrying the working directory explicitly keeps the engine free of
/// hidden `std::env::current_dir()` reads and lets tests point a run at a
/// temporary directory.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub working_dir: PathBuf,
}

impl RunContext {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }

    pub fn from_current_dir() -> Result<Self> {
        let working_dir =
            std::env::current_dir().context("Failed to resolve the current working directory")?;
        Ok(Self { working_dir })
    }
}
