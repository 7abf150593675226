//! Classification of environment variable keys as public or secret.

/// Key prefixes that mark a variable as safe to publish.
///
/// Only variables carrying one of these prefixes ever reach a generated
/// file; everything else in a `.env*.local` source is treated as a secret
/// and dropped.
pub const PUBLIC_PREFIXES: &[&str] = &["NEXT_PUBLIC_", "EXPO_PUBLIC_", "_PUBLIC_"];

/// Returns true if `key` names a public variable.
pub fn is_public(key: &str) -> bool {
    let key = key.trim();
    PUBLIC_PREFIXES.iter().any(|prefix| key.starts_with(prefix))
}
