//! Word-level distances between two token sequences.
//!
//! Each word counts as one symbol: two sequences differing in one word are at
//! distance 1 regardless of how many characters that word has.

use crate::error::DistanceResult;
use crate::seq::{self, SubMatch};

fn words<S: AsRef<str>>(s: &[S]) -> Vec<&str> {
    s.iter().map(AsRef::as_ref).collect()
}

pub fn hamming<S: AsRef<str>>(a: &[S], b: &[S]) -> DistanceResult<usize> {
    seq::hamming(&words(a), &words(b))
}

pub fn subhamming<S: AsRef<str>>(a: &[S], b: &[S]) -> DistanceResult<SubMatch> {
    seq::subhamming(&words(a), &words(b))
}

pub fn levenshtein<S: AsRef<str>>(a: &[S], b: &[S]) -> usize {
    seq::levenshtein(&words(a), &words(b))
}

/// Indices where two equal-length word sequences differ.
pub fn differing_positions<S: AsRef<str>>(a: &[S], b: &[S]) -> DistanceResult<Vec<usize>> {
    let (a, b) = (words(a), words(b));
    seq::hamming(&a, &b)?;
    Ok(a.iter()
        .zip(&b)
        .enumerate()
        .filter(|(_, (x, y))| x != y)
        .map(|(i, _)| i)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_word_subhamming_aligns_substring() {
        let source = split("it is the containing part of the deal");
        let destination = split("the other part");
        let m = subhamming(&source, &destination).unwrap();
        assert_eq!((m.distance, m.offset, m.length), (1, 2, 3));
    }

    #[test]
    fn test_word_subhamming_self_match() {
        let s = split("it is the containing part");
        let m = subhamming(&s, &s).unwrap();
        assert_eq!((m.distance, m.offset, m.length), (0, 0, 5));
    }

    #[test]
    fn test_word_levenshtein_counts_words() {
        let a = split("yes we can");
        let b = split("yes we really can");
        assert_eq!(levenshtein(&a, &b), 1);
        assert_eq!(hamming(&a, &split("no we cannot")).unwrap(), 2);
    }

    #[test]
    fn test_differing_positions() {
        let a = split("it is the containing part");
        let b = split("it is the other part");
        assert_eq!(differing_positions(&a, &b).unwrap(), vec![3]);
        assert!(differing_positions(&a, &split("it is")).is_err());
    }

    #[test]
    fn test_str_slices_work_too() {
        let a = ["a", "b", "c"];
        let b = ["b", "x"];
        assert_eq!(subhamming(&a, &b).unwrap().offset, 1);
    }
}
