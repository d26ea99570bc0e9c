//! Glob matching for cache keys.
//!
//! Used by the in-memory backend and by tests to expand invalidation
//! patterns. `*` matches any run of characters, including an empty one;
//! everything else matches literally.

/// Returns `true` if `key` matches the glob `pattern`.
///
/// # Examples
///
/// ```
/// use folio_core::cache::pattern_matches;
///
/// assert!(pattern_matches("books:list:*", "books:list:0:100"));
/// assert!(pattern_matches("reviews:book:7:*", "reviews:book:7:20:10"));
/// assert!(!pattern_matches("reviews:book:7:*", "reviews:book:8:0:100"));
/// assert!(pattern_matches("books:list:0:100", "books:list:0:100"));
/// ```
pub fn pattern_matches(pattern: &str, key: &str) -> bool {
    let p = pattern.as_bytes();
    let k = key.as_bytes();

    // Iterative wildcard match with single-level backtracking: remember the
    // most recent `*` and how much of the key it has consumed so far.
    let mut pi = 0;
    let mut ki = 0;
    let mut star: Option<usize> = None;
    let mut star_ki = 0;

    while ki < k.len() {
        if pi < p.len() && p[pi] == b'*' {
            star = Some(pi);
            star_ki = ki;
            pi += 1;
        } else if pi < p.len() && p[pi] == k[ki] {
            pi += 1;
            ki += 1;
        } else if let Some(s) = star {
            // Let the last `*` swallow one more key byte and retry.
            star_ki += 1;
            pi = s + 1;
            ki = star_ki;
        } else {
            return false;
        }
    }

    // Only trailing wildcards may remain in the pattern.
    while pi < p.len() && p[pi] == b'*' {
        pi += 1;
    }
    pi == p.len()
}
