//! Normalized string similarity in [0, 1].
//!
//! Comparison is case-insensitive on trimmed input. Containment gets a
//! length-ratio score; everything else falls back to Levenshtein distance
//! normalized by the longer length. Lengths count Unicode scalar values.

/// Similarity of two strings.
///
/// - identical after normalization: 1.0
/// - either empty after trimming: 0.0
/// - one contains the other: `shorter / longer * 0.9 + 0.1`
/// - otherwise: `1 - levenshtein / max_len`
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a_len = a.chars().count();
    let b_len = b.chars().count();
    let longer = a_len.max(b_len) as f64;

    if a.contains(b.as_str()) || b.contains(a.as_str()) {
        let shorter = a_len.min(b_len) as f64;
        return (shorter / longer) * 0.9 + 0.1;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    1.0 - levenshtein(&a, &b) as f64 / longer
}

/// Best similarity between any whitespace-separated token of `query` and any tag.
///
/// Returns 0.0 when the query has no tokens or there are no tags.
pub fn token_similarity<S: AsRef<str>>(query: &str, tags: &[S]) -> f64 {
    let query = query.to_lowercase();
    let mut best = 0.0_f64;
    for token in query.split_whitespace() {
        for tag in tags {
            let score = similarity(token, tag.as_ref());
            if score > best {
                best = score;
            }
        }
    }
    best
}

/// Levenshtein edit distance with unit costs, over two rolling DP rows.
pub fn levenshtein(a: &[char], b: &[char]) -> usize {
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j]
            } else {
                1 + prev[j + 1].min(curr[j]).min(prev[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn identical_is_one() {
        assert_eq!(similarity("love", "love"), 1.0);
        assert_eq!(similarity("  love ", "love"), 1.0);
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(similarity("", "love"), 0.0);
        assert_eq!(similarity("love", ""), 0.0);
        assert_eq!(similarity("   ", "love"), 0.0);
    }

    #[test]
    fn both_empty_are_identical() {
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(similarity("LOVE", "love"), 1.0);
    }

    #[test]
    fn containment_bonus() {
        assert!((similarity("love", "loves") - 0.82).abs() < 1e-12);
        // 4/7 * 0.9 + 0.1
        assert!((similarity("healing", "heal") - 0.614_285_714_285_714_2).abs() < 1e-12);
    }

    #[test]
    fn unrelated_scores_low() {
        assert_eq!(similarity("love", "xyz"), 0.0);
        assert!(similarity("love", "xyz") < similarity("love", "loves"));
    }

    #[test]
    fn edit_distance_score() {
        // kitten -> sitting: 3 edits over 7 chars
        assert!((similarity("kitten", "sitting") - (1.0 - 3.0 / 7.0)).abs() < 1e-12);
        assert!((similarity("flaw", "lawn") - 0.5).abs() < 1e-12);
    }

    #[test]
    fn symmetric() {
        let pairs = [("kitten", "sitting"), ("love", "loves"), ("hermes", "greek")];
        for (a, b) in pairs {
            assert_eq!(similarity(a, b), similarity(b, a), "{a} / {b}");
        }
    }

    #[test]
    fn levenshtein_known() {
        assert_eq!(levenshtein(&chars("kitten"), &chars("sitting")), 3);
        assert_eq!(levenshtein(&chars(""), &chars("abc")), 3);
        assert_eq!(levenshtein(&chars("abc"), &chars("")), 3);
        assert_eq!(levenshtein(&chars("abc"), &chars("abc")), 0);
        assert_eq!(levenshtein(&chars("flaw"), &chars("lawn")), 2);
    }

    #[test]
    fn unicode_counts_chars() {
        // "é" is one char: one substitution over four chars.
        assert!((similarity("café", "cafe") - 0.75).abs() < 1e-12);
    }

    #[test]
    fn token_similarity_picks_best_pair() {
        let tags = ["love", "romance", "heart"];
        assert_eq!(token_similarity("a romance ritual", &tags), 1.0);
        assert_eq!(token_similarity("", &tags), 0.0);
        assert_eq!(token_similarity("love", &[] as &[&str]), 0.0);
    }
}
