//! Display formatting for BibTeX author lists.

/// How many authors to show before truncating to `et al.`.
pub const DEFAULT_MAX_AUTHORS: usize = 3;

/// Format a BibTeX author string (names joined by `" and "`) for display.
///
/// Names in "Last, First" form are flipped to "First Last"; comma-free names
/// pass through as-is. When more than `max_authors` names are present, the
/// surplus is collapsed into `et al. (<n> more)`.
///
/// Names carrying several commas (generational suffixes, say) have all their
/// parts reversed, which can scramble the suffix position. Known limitation.
pub fn format_authors(authors: &str, max_authors: usize) -> String {
    let formatted: Vec<String> = authors
        .split(" and ")
        .map(str::trim)
        .map(|author| {
            if author.contains(',') {
                let mut parts: Vec<&str> = author.split(',').map(str::trim).collect();
                parts.reverse();
                parts.join(" ")
            } else {
                author.to_string()
            }
        })
        .collect();

    if formatted.len() <= max_authors {
        return formatted.join(", ");
    }

    let remaining = formatted.len() - max_authors;
    format!(
        "{}, et al. ({} more)",
        formatted[..max_authors].join(", "),
        remaining
    )
}
