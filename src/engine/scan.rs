//! Discovery and loading of `.env*.local` source files.

use std::fs;
use std::path::PathBuf;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

use super::RunContext;

/// Matches file names like `.env.local` or `.env.production.local`.
static LOCAL_ENV_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\.env.*\.local$").unwrap());

/// A loaded `.env*.local` source file.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub contents: String,
}

/// All source files discovered under one requested search directory.
#[derive(Debug, Clone)]
pub struct DirectoryBatch {
    pub relative_dir: String,
    pub files: Vec<SourceFile>,
}

/// Lists `.env*.local` files directly inside `relative_dir` (non-recursive,
/// resolved against the context's working directory) and loads each one as
/// UTF-8 text.
///
/// File names are sorted so batches are deterministic regardless of the
/// filesystem's listing order. A missing or unreadable directory yields an
/// empty batch rather than an error; the run then reports it as having no
/// candidate files. An unreadable matching file is still an error.
pub fn scan(ctx: &RunContext, relative_dir: &str) -> Result<DirectoryBatch> {
    let absolute_dir = ctx.working_dir.join(relative_dir);
    let mut files = Vec::new();

    let Ok(entries) = fs::read_dir(&absolute_dir) else {
        return Ok(DirectoryBatch {
            relative_dir: relative_dir.to_string(),
            files,
        });
    };

    let mut names: Vec<String> = entries
        .filter_map(|entry| Some(entry.ok()?.file_name().to_str()?.to_string()))
        .filter(|name| LOCAL_ENV_NAME.is_match(name))
        .collect();
    names.sort();

    for name in names {
        let path = absolute_dir.join(&name);
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read source file: {}", path.display()))?;
        files.push(SourceFile { path, contents });
    }

    Ok(DirectoryBatch {
        relative_dir: relative_dir.to_string(),
        files,
    })
}
