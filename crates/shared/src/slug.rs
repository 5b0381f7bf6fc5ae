//! URL slug normalization.

use lazy_static::lazy_static;

lazy_static! {
    static ref NON_SLUG_CHARS: regex::Regex = regex::Regex::new(r"[^a-z0-9]+").unwrap();
}

/// Normalizes a company display name into a URL-safe slug.
///
/// Lowercases the input, collapses every run of characters outside
/// `[a-z0-9]` into a single hyphen, and strips leading/trailing hyphens.
/// Idempotent: normalizing an already-normalized slug is a no-op.
///
/// Empty or all-symbol input yields an empty string. Callers must treat an
/// empty slug as invalid before deriving portal URLs or credentials from it.
pub fn normalize_slug(name: &str) -> String {
    let lowered = name.to_lowercase();
    NON_SLUG_CHARS
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
