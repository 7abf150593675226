//! Provenance tagging of generated files.

use std::path::Path;

use super::RunContext;

/// Marker embedded verbatim at the top of every generated file.
///
/// Ownership detection relies on this exact string: a destination file that
/// contains it is considered hotenv-owned and safe to regenerate silently.
/// It must stay stable across versions, or files written by older runs
/// would be orphaned.
pub const WATERMARK: &str = "# 🔥 This file was generated by hotenv 🔥";

/// Returns true if `contents` carries the provenance marker.
pub fn is_generated(contents: &str) -> bool {
    contents.contains(WATERMARK.trim())
}

/// Prepends the watermark and an explanatory header naming the editable
/// source file (relative to the working directory). The result is trimmed
/// of leading and trailing whitespace as a unit.
pub fn tag(ctx: &RunContext, source_path: &Path, generated: &str) -> String {
    let editable = source_path
        .strip_prefix(&ctx.working_dir)
        .unwrap_or(source_path);

    format!(
        "{WATERMARK}\n\
         # Do not edit this file directly - it is regenerated from {editable}.\n\
         # To change these values, edit the \"_PUBLIC_\"-prefixed variables there.\n\
         # Variables prefixed with _PUBLIC_ are inlined into both the native and web bundles.\n\
         # Secrets (without \"_PUBLIC_\") are only available to the Next.js server and to Expo at build time.\n\
         # Secrets are never available to native clients at runtime.\n\n\
         {generated}",
        editable = editable.display()
    )
    .trim()
    .to_string()
}
