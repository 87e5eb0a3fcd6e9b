use std::cmp::Ordering;

/// Try to read a cell as a number for sorting purposes.
///
/// Formatting characters that show up in rendered amounts (grouping
/// commas, currency signs, percent, inner whitespace) are stripped
/// before parsing, so "1,500" and "$90" sort numerically. Anything
/// containing letters fails the parse and falls back to string
/// ordering, so "b10" stays lexical.
pub fn numeric_key(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }

    let cleaned: String = trimmed
        .chars()
        .filter(|c| !matches!(c, ',' | '_' | '$' | '€' | '£' | '¥' | '%') && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok()
}

/// Compare two cell values the way a sorted column orders them:
/// numerically when both sides parse as numbers, otherwise as
/// case-sensitive strings. Total and deterministic for mixed pairs.
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    let a = a.trim();
    let b = b.trim();

    match (numeric_key(a), numeric_key(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.cmp(b),
    }
}
