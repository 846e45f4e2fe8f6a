/// Returns every index at which `term` occurs in the token sequence.
///
/// Exact match against already-normalized tokens; no stemming, no fuzzing.
/// An absent term yields an empty list, which is a normal outcome.
pub fn find_occurrences(tokens: &[String], term: &str) -> Vec<usize> {
    tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| token.as_str() == term)
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn finds_all_occurrences_in_order() {
        let tokens = seq(&["emma", "x", "emma"]);
        assert_eq!(find_occurrences(&tokens, "emma"), vec![0, 2]);
    }

    #[test]
    fn absent_term_returns_empty() {
        let tokens = seq(&["emma", "x", "emma"]);
        assert!(find_occurrences(&tokens, "knightley").is_empty());
    }

    #[test]
    fn match_is_exact_not_prefix() {
        let tokens = seq(&["emma", "emmas", "emma's"]);
        assert_eq!(find_occurrences(&tokens, "emma"), vec![0]);
    }

    #[test]
    fn empty_sequence_returns_empty() {
        assert!(find_occurrences(&[], "emma").is_empty());
    }
}
