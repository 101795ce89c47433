//! Character-level distances between two strings.
//!
//! Strings are compared by Unicode scalar value, not by byte.

use crate::error::DistanceResult;
use crate::seq::{self, SubMatch};

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

pub fn hamming(a: &str, b: &str) -> DistanceResult<usize> {
    seq::hamming(&chars(a), &chars(b))
}

pub fn subhamming(a: &str, b: &str) -> DistanceResult<SubMatch> {
    seq::subhamming(&chars(a), &chars(b))
}

pub fn levenshtein(a: &str, b: &str) -> usize {
    seq::levenshtein(&chars(a), &chars(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_distances() {
        assert_eq!(hamming("karolin", "kathrin").unwrap(), 3);
        assert!(hamming("abc", "ab").is_err());

        let m = subhamming("the yellow cat", "yellow").unwrap();
        assert_eq!((m.distance, m.offset, m.length), (0, 4, 6));

        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("cat", "cats"), 1);
        assert_eq!(levenshtein("centre", "center"), 2);
    }

    #[test]
    fn test_multibyte_characters_count_once() {
        assert_eq!(levenshtein("café", "cafe"), 1);
        assert_eq!(hamming("naïve", "naive").unwrap(), 1);
    }
}
