/// Splits source text into lowercase word tokens.
///
/// Periods are stripped first so sentence boundaries don't glue onto words,
/// then the text is lowercased and split on every maximal run of characters
/// that are neither alphanumeric nor apostrophes. Empty fragments from
/// leading/trailing separators are dropped, so an empty or all-separator
/// input yields an empty sequence.
pub fn tokenize(text: &str) -> Vec<String> {
    text.replace('.', "")
        .to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_periods_and_lowercases() {
        let tokens = tokenize("Emma. Knightley churchill");
        assert_eq!(tokens, vec!["emma", "knightley", "churchill"]);
    }

    #[test]
    fn preserves_source_order() {
        let tokens = tokenize("the quick brown fox");
        assert_eq!(tokens, vec!["the", "quick", "brown", "fox"]);
    }

    #[test]
    fn splits_on_separator_runs() {
        let tokens = tokenize("one -- two,,three");
        assert_eq!(tokens, vec!["one", "two", "three"]);
    }

    #[test]
    fn keeps_apostrophes_inside_words() {
        let tokens = tokenize("Emma's friend wasn't there");
        assert_eq!(tokens, vec!["emma's", "friend", "wasn't", "there"]);
    }

    #[test]
    fn period_stripping_joins_abbreviations() {
        // "Mr." loses its period before splitting, not after
        let tokens = tokenize("Mr. Knightley");
        assert_eq!(tokens, vec!["mr", "knightley"]);
    }

    #[test]
    fn empty_input_yields_empty_sequence() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ... , ;  ").is_empty());
    }

    #[test]
    fn leading_and_trailing_separators_produce_no_empty_tokens() {
        let tokens = tokenize("  emma  ");
        assert_eq!(tokens, vec!["emma"]);
        assert!(tokens.iter().all(|t| !t.is_empty()));
    }
}
