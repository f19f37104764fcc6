use std::collections::HashMap;

/// Reduces a finished word-frequency table into an ordered top-K result
///
/// Entries are ordered by count descending; ties are broken by ascending
/// lexicographic order of the word, so the result is deterministic regardless
/// of the iteration order of the source map. If the table has fewer than `k`
/// distinct words, all of them are returned.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use topwords::words::top_k;
///
/// let table = HashMap::from([
///     ("a".to_string(), 3),
///     ("b".to_string(), 5),
///     ("c".to_string(), 3),
/// ]);
/// assert_eq!(
///     top_k(table, 2),
///     vec![("b".to_string(), 5), ("a".to_string(), 3)]
/// );
/// ```
pub fn top_k(table: HashMap<String, u64>, k: usize) -> Vec<(String, u64)> {
    let mut entries: Vec<(String, u64)> = table.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(k);
    entries
}
