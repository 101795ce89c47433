//! Distances over arbitrary sequences of comparable items.

use serde::{Deserialize, Serialize};

use crate::error::{DistanceError, DistanceResult};

/// Best alignment of a short sequence inside a longer one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubMatch {
    /// Minimum Hamming distance over all windows.
    pub distance: usize,
    /// Offset of the leftmost window reaching `distance`.
    pub offset: usize,
    /// Window length, i.e. the length of the short sequence.
    pub length: usize,
}

/// Number of index-wise mismatches between two equal-length sequences.
pub fn hamming<T: PartialEq>(a: &[T], b: &[T]) -> DistanceResult<usize> {
    if a.len() != b.len() {
        return Err(DistanceError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(mismatches(a, b))
}

fn mismatches<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

/// Slide `b` over `a` and keep the window with the fewest mismatches.
///
/// Ties keep the smallest offset. `a` must be at least as long as `b`.
pub fn subhamming<T: PartialEq>(a: &[T], b: &[T]) -> DistanceResult<SubMatch> {
    if a.len() < b.len() {
        return Err(DistanceError::NeedleLongerThanHaystack {
            haystack: a.len(),
            needle: b.len(),
        });
    }

    let length = b.len();
    let mut best = SubMatch {
        distance: length,
        offset: 0,
        length,
    };
    if length == 0 {
        return Ok(best);
    }
    for (offset, window) in a.windows(length).enumerate() {
        let distance = mismatches(window, b);
        if offset == 0 || distance < best.distance {
            best.distance = distance;
            best.offset = offset;
            if distance == 0 {
                break;
            }
        }
    }
    Ok(best)
}

/// Classic edit distance (insertions, deletions, substitutions all cost 1).
///
/// Runs in `O(len(a) * len(b))` time and keeps a single row of
/// `min(len(a), len(b)) + 1` cells.
pub fn levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    let mut row: Vec<usize> = (0..=short.len()).collect();
    for (i, x) in long.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, y) in short.iter().enumerate() {
            let cost = if x == y { 0 } else { 1 };
            let next = (row[j + 1] + 1) // deletion
                .min(row[j] + 1) // insertion
                .min(diagonal + cost); // substitution
            diagonal = row[j + 1];
            row[j + 1] = next;
        }
    }
    row[short.len()]
}
