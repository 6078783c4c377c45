//! Tokenizer collaborator - splits free text into word tokens.

/// A single token borrowed from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
}

impl Token<'_> {
    /// Whether every character in the token is alphabetic.
    pub fn is_alphabetic(&self) -> bool {
        self.text.chars().all(char::is_alphabetic)
    }
}

/// Split text into maximal alphanumeric runs; punctuation and whitespace
/// separate tokens and are never part of one.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|run| !run.is_empty())
        .map(|text| Token { text })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_words() {
        let tokens = tokenize("pikachu vs charizard?");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["pikachu", "vs", "charizard"]);
        assert!(tokens.iter().all(Token::is_alphabetic));
    }

    #[test]
    fn test_numeric_tokens_are_not_alphabetic() {
        let tokens = tokenize("level 5 pikachu");
        assert_eq!(tokens.len(), 3);
        assert!(!tokens[1].is_alphabetic());
        assert!(tokens[2].is_alphabetic());
    }

    #[test]
    fn test_punctuation_only_input() {
        assert!(tokenize("?!... ,,").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_apostrophes_split_tokens() {
        let tokens = tokenize("what's farfetch'd like");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["what", "s", "farfetch", "d", "like"]);
    }
}
