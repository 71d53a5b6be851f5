/// Check if a character is a letter or digit.
///
/// # Examples
///
/// ```
/// use dsa_util::strings::is_letter;
///
/// assert!(is_letter('a'));
/// assert!(is_letter('5'));
/// assert!(!is_letter('!'));
/// ```
pub fn is_letter(ch: char) -> bool {
    ch.is_alphanumeric()
}

pub fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace()
}

/// Check if a character is punctuation (neither a letter nor whitespace).
pub fn is_punctuation(ch: char) -> bool {
    !is_letter(ch) && !is_whitespace(ch)
}

/// Strips punctuation from `word` and lowercases what is left.
///
/// ```
/// use dsa_util::normalize_word;
///
/// assert_eq!(normalize_word("Hello,"), "hello");
/// assert_eq!(normalize_word("don't"), "dont");
/// assert_eq!(normalize_word("--"), "");
/// ```
pub fn normalize_word(word: &str) -> String {
    word.chars()
        .filter(|&ch| !is_punctuation(ch))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Whitespace-separated words of `text`, normalized, empty results dropped.
pub fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(normalize_word)
        .filter(|w| !w.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_words_skip_pure_punctuation() {
        let got: Vec<String> = words("It was -- the BEST of times!").collect();
        assert_eq!(got, vec!["it", "was", "the", "best", "of", "times"]);
    }

    proptest! {
        #[test]
        fn normalized_words_have_no_punctuation(s in "[ -~]*") {
            let w = normalize_word(&s);
            prop_assert!(!w.chars().any(is_punctuation));
            prop_assert_eq!(normalize_word(&w), w.clone());
        }
    }
}
