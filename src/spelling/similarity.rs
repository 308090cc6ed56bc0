//! String similarity metrics for candidate scoring.

use ahash::AHashSet;

/// Calculate a normalized sequence similarity ratio between 0.0 and 1.0.
///
/// This is the classic Ratcliff/Obershelp metric: `2 * M / (len(a) + len(b))`,
/// where `M` is the total length of matching contiguous blocks found by
/// greedily taking the longest common substring and recursing on the pieces
/// to its left and right.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let total = a_chars.len() + b_chars.len();

    if total == 0 {
        return 1.0;
    }

    let matched = matching_block_total(&a_chars, &b_chars);
    2.0 * matched as f64 / total as f64
}

/// Total length of matching blocks between two character slices.
fn matching_block_total(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let (a_start, b_start, len) = longest_common_substring(a, b);
    if len == 0 {
        return 0;
    }

    len + matching_block_total(&a[..a_start], &b[..b_start])
        + matching_block_total(&a[a_start + len..], &b[b_start + len..])
}

/// Find the longest common substring of two character slices.
///
/// Returns `(start_in_a, start_in_b, length)`. Ties are broken by the
/// earliest position in `a`, then in `b`.
fn longest_common_substring(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);

    // Dynamic programming over suffix match lengths, two rows at a time.
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for i in 0..a.len() {
        for j in 0..b.len() {
            if a[i] == b[j] {
                let len = prev[j] + 1;
                curr[j + 1] = len;
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            } else {
                curr[j + 1] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}

/// Calculate the character-set overlap ratio between two strings.
///
/// This is `|charset(a) ∩ charset(b)| / max(|charset(a)|, |charset(b)|)`,
/// in [0.0, 1.0]. Order and repetition are ignored.
pub fn charset_overlap(a: &str, b: &str) -> f64 {
    let a_set: AHashSet<char> = a.chars().collect();
    let b_set: AHashSet<char> = b.chars().collect();

    let max_len = a_set.len().max(b_set.len());
    if max_len == 0 {
        return 0.0;
    }

    let overlap = a_set.intersection(&b_set).count();
    overlap as f64 / max_len as f64
}
