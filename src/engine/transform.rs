//! Conversion of source text into the generated file body.

use super::classify::is_public;

/// Converts the text of a `.env*.local` source into the generated body.
///
/// Works line by line: everything from the first `#` onward is stripped,
/// secrets are dropped, and `_PUBLIC_`-prefixed keys fan out into a
/// `NEXT`- and an `EXPO`-prefixed copy so each runtime picks the variable
/// up under its own convention. Values keep any `=` characters after the
/// first one. Every emitted line carries a trailing newline; empty input
/// yields an empty string.
pub fn transform(contents: &str) -> String {
    let mut generated = String::new();

    for raw in contents.split('\n') {
        let line = raw.split('#').next().unwrap_or("").trim();
        let (key, value) = match line.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (line, None),
        };

        if !is_public(key) {
            continue;
        }

        if key.starts_with('_') {
            // The `_PUBLIC_` form is the single source of truth; it fans
            // out into both runtime-specific prefixes.
            push_line(&mut generated, &format!("NEXT{key}"), value);
            push_line(&mut generated, &format!("EXPO{key}"), value);
        } else {
            push_line(&mut generated, key, value);
        }
    }

    generated
}

fn push_line(out: &mut String, key: &str, value: Option<&str>) {
    out.push_str(key);
    if let Some(value) = value {
        out.push('=');
        out.push_str(value);
    }
    out.push('\n');
}
