//! Typo-tolerant matching for course names.
//!
//! Matching runs in three stages: both sides are reduced to a lowercase
//! alphanumeric form, substring containment is tried first (the cheap path),
//! and only then does the edit-distance fallback run against the whole field
//! and against each of its words.

/// Lowercase `text`, drop every character outside `[a-z0-9]` and whitespace,
/// and trim the ends. Pure and total; there is no failure mode.
#[must_use]
pub fn normalize(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect();
    kept.trim().to_string()
}

/// Minimum number of single-character insertions, deletions, or
/// substitutions that turn `a` into `b` (classic Levenshtein distance).
///
/// Operates on `char`s, so multi-byte input is counted per character. Uses
/// a single rolling row of the (len+1)x(len+1) table.
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, &ca) in a.iter().enumerate() {
        // diag holds table[i][j] while row is being overwritten in place.
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitute = diag + usize::from(ca != cb);
            let delete = row[j + 1] + 1;
            let insert = row[j] + 1;
            diag = row[j + 1];
            row[j + 1] = substitute.min(delete).min(insert);
        }
    }
    row[b.len()]
}

/// Edit budget for a normalized query: at least two edits, plus one more
/// for every five characters of query.
fn tolerance(query_len: usize) -> usize {
    2.max(query_len / 5)
}

/// Decide whether `query` matches `text`, tolerating small typos.
///
/// An empty query matches everything. Otherwise both sides are normalized;
/// containment wins immediately, and failing that the query must be within
/// the edit budget of either the whole text or one of its words. The
/// per-word fallback lets "enginering" find "Software Engineering" even
/// though the full field is far away.
#[must_use]
pub fn matches_with_tolerance(query: &str, text: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = normalize(query);
    let text = normalize(text);
    if text.contains(&query) {
        return true;
    }
    let max_edits = tolerance(query.chars().count());
    if edit_distance(&query, &text) <= max_edits {
        return true;
    }
    text.split_whitespace()
        .any(|word| edit_distance(&query, word) <= max_edits)
}
