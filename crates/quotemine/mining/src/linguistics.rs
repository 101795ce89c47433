//! Word-level linguistic resources used to reject spurious substitutions.

/// English stopwords.
pub const STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// Word endings that only differ between British and American spelling, UK first.
pub const US_UK_ENDINGS: &[(&str, &str)] = &[
    ("re", "er"),
    ("our", "or"),
    ("ise", "ize"),
    ("ised", "ized"),
    ("ising", "izing"),
    ("isation", "ization"),
    ("yse", "yze"),
    ("ogue", "og"),
    ("ence", "ense"),
];

/// Shortest stem kept in front of a US/UK ending.
const MIN_STEM_CHARS: usize = 2;

/// Whether the word starts with a digit ("21st", "2008", ...).
pub fn starts_with_digit(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// The first `n` characters of a word, or the whole word if it is shorter.
pub fn prefix(word: &str, n: usize) -> &str {
    match word.char_indices().nth(n) {
        Some((i, _)) => &word[..i],
        None => word,
    }
}

/// The word without its last `n` characters, empty if it is not longer than `n`.
pub fn drop_last(word: &str, n: usize) -> &str {
    let len = word.chars().count();
    if len <= n {
        return "";
    }
    prefix(word, len - n)
}

/// Whether `short` is the three-letter abbreviation of `long` ("sen"/"senator").
pub fn is_abbreviation(short: &str, long: &str) -> bool {
    short == prefix(long, 3)
}

/// Whether `long` is `short` plus two trailing characters ("program"/"programme").
pub fn is_two_char_extension(short: &str, long: &str) -> bool {
    drop_last(long, 2) == short
}

/// Whether the two words are the same stem with a UK and a US ending ("centre"/"center").
pub fn is_same_ending_us_uk_spelling(w1: &str, w2: &str) -> bool {
    US_UK_ENDINGS.iter().any(|(uk, us)| {
        same_stem_with_endings(w1, w2, uk, us) || same_stem_with_endings(w2, w1, uk, us)
    })
}

fn same_stem_with_endings(w1: &str, w2: &str, e1: &str, e2: &str) -> bool {
    match (w1.strip_suffix(e1), w2.strip_suffix(e2)) {
        (Some(s1), Some(s2)) => s1 == s2 && s1.chars().count() >= MIN_STEM_CHARS,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        assert!(starts_with_digit("21st"));
        assert!(starts_with_digit("2008"));
        assert!(!starts_with_digit("twenty-first"));
        assert!(!starts_with_digit(""));
    }

    #[test]
    fn test_prefix_and_drop_last() {
        assert_eq!(prefix("senator", 3), "sen");
        assert_eq!(prefix("go", 3), "go");
        assert_eq!(prefix("élysée", 3), "ély");
        assert_eq!(drop_last("programme", 2), "program");
        assert_eq!(drop_last("ab", 2), "");
        assert_eq!(drop_last("a", 2), "");
    }

    #[test]
    fn test_abbreviation_and_extension() {
        assert!(is_abbreviation("sen", "senator"));
        assert!(is_abbreviation("gov", "governor"));
        assert!(!is_abbreviation("senator", "sen"));
        assert!(is_two_char_extension("program", "programme"));
        assert!(!is_two_char_extension("programme", "program"));
    }

    #[test]
    fn test_us_uk_spelling() {
        assert!(is_same_ending_us_uk_spelling("centre", "center"));
        assert!(is_same_ending_us_uk_spelling("center", "centre"));
        assert!(is_same_ending_us_uk_spelling("colour", "color"));
        assert!(is_same_ending_us_uk_spelling("organise", "organize"));
        assert!(is_same_ending_us_uk_spelling("defence", "defense"));
        assert!(!is_same_ending_us_uk_spelling("happy", "sad"));
        assert!(!is_same_ending_us_uk_spelling("re", "er"));
    }

    #[test]
    fn test_stopword_list() {
        assert!(STOPWORDS.contains(&"the"));
        assert!(STOPWORDS.contains(&"wouldn't"));
        assert!(!STOPWORDS.contains(&"happy"));
    }
}
