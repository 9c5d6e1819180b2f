//! Synthesis and merging of `<meta name="viewport">` content directives.
//!
//! A content attribute is a comma-separated list of `key=value` directives.
//! This module owns exactly two of them, `width` and `maximum-scale`; every
//! other directive an author has put on the tag passes through untouched.

/// Directive keys managed by this crate. Matching tokens are stripped before
/// the freshly synthesized ones are appended, which keeps repeated syncs
/// idempotent and guarantees a single `width=` directive in the output.
const MANAGED_PREFIXES: [&str; 2] = ["width=", "maximum-scale="];

/// Directives the viewport should carry for the given widths.
///
/// While the viewport is at least `min_width` wide the page can use the
/// device width as-is. Below that, the layout width is pinned to `min_width`
/// and `maximum-scale` is set to `width / min_width` so the pinned layout
/// still fits on screen without horizontal scrolling.
pub(crate) fn desired_directives(width: f64, min_width: f64) -> Vec<String> {
    if width > min_width {
        vec!["width=device-width".to_owned()]
    } else {
        vec![
            format!("width={min_width}"),
            format!("maximum-scale={}", width / min_width),
        ]
    }
}

/// Merges the desired directives into an existing content attribute value.
///
/// Existing tokens are trimmed, empties dropped, managed directives replaced,
/// and the relative order of foreign directives preserved.
pub(crate) fn merge_content(existing: Option<&str>, desired: &[String]) -> String {
    let Some(existing) = existing else {
        return desired.join(",");
    };

    existing
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty() && !is_managed(token))
        .map(str::to_owned)
        .chain(desired.iter().cloned())
        .collect::<Vec<_>>()
        .join(",")
}

fn is_managed(token: &str) -> bool {
    MANAGED_PREFIXES.iter().any(|prefix| token.starts_with(prefix))
}
