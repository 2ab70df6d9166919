//! Ratcliff/Obershelp string similarity
//!
//! The score is `2·M / T`, where `T` is the combined length of both strings
//! and `M` is the number of characters covered by matching blocks: the longest
//! common substring, then recursively the longest ones left and right of it.
//! Lengths are counted in `char`s and the comparison is case-sensitive.

/// Similarity of `a` and `b` in `0.0..=1.0`.
///
/// # Examples
///
/// ```
/// use cinepulse::search::similarity::ratio;
///
/// assert_eq!(ratio("abcd", "bcde"), 0.75);
/// assert_eq!(ratio("Dark", "Dark"), 1.0);
/// ```
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

/// Cheap upper bound on [`ratio`], from lengths alone
pub fn ratio_upper_bound(a_len: usize, b_len: usize) -> f64 {
    let total = a_len + b_len;
    if total == 0 {
        return 1.0;
    }
    2.0 * a_len.min(b_len) as f64 / total as f64
}

fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, b, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }

        matched += size;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }

    matched
}

/// Longest common block of `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Returns `(i, j, size)`; among equally long blocks the one starting
/// earliest in `a` wins.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let width = bhi - blo;
    // run[j + 1] = length of the match ending at a[i - 1], b[blo + j]
    let mut prev = vec![0usize; width + 1];
    let mut cur = vec![0usize; width + 1];
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);

    for i in alo..ahi {
        for j in 0..width {
            cur[j + 1] = if a[i] == b[blo + j] { prev[j] + 1 } else { 0 };

            let size = cur[j + 1];
            if size > best_size {
                best_i = i + 1 - size;
                best_j = blo + j + 1 - size;
                best_size = size;
            }
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    (best_i, best_j, best_size)
}
