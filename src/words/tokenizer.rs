/// Extended Latin letters accepted in addition to ASCII and Cyrillic,
/// matching the letter classes that occur in the target content
const EXTENDED_LATIN: &[char] = &['Å', 'Ä', 'Ö', 'å', 'ä', 'ö'];

/// Returns true if the character counts as part of a word
///
/// The allowed set is ASCII letters, the Cyrillic range `А`–`я`, and a small
/// set of extended Latin vowels. Everything else is a separator.
pub fn is_word_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || ('А'..='я').contains(&c) || EXTENDED_LATIN.contains(&c)
}

/// Splits page text into a sequence of words
///
/// Any run of non-letter characters acts as a single separator; empty tokens
/// are dropped. Case is preserved, so `Hello` and `hello` count as distinct
/// words.
///
/// # Examples
///
/// ```
/// use topwords::words::tokenize;
///
/// let words: Vec<&str> = tokenize("Hello, world!").collect();
/// assert_eq!(words, vec!["Hello", "world"]);
/// ```
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_letter(c))
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(text: &str) -> Vec<&str> {
        tokenize(text).collect()
    }

    #[test]
    fn test_punctuation_and_hyphen_are_separators() {
        assert_eq!(
            collect("Hello, world! Hello-world"),
            vec!["Hello", "world", "Hello", "world"]
        );
    }

    #[test]
    fn test_consecutive_separators_collapse() {
        assert_eq!(collect("one -- , two"), vec!["one", "two"]);
    }

    #[test]
    fn test_digits_split_words() {
        assert_eq!(collect("abc123def"), vec!["abc", "def"]);
    }

    #[test]
    fn test_case_is_preserved() {
        assert_eq!(collect("Word word WORD"), vec!["Word", "word", "WORD"]);
    }

    #[test]
    fn test_cyrillic_words_kept() {
        assert_eq!(collect("привет мир"), vec!["привет", "мир"]);
    }

    #[test]
    fn test_extended_latin_kept() {
        assert_eq!(collect("smörgåsbord"), vec!["smörgåsbord"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(collect("").is_empty());
    }

    #[test]
    fn test_only_separators() {
        assert!(collect(" .,!?\t\n123 ").is_empty());
    }

    #[test]
    fn test_newlines_are_separators() {
        assert_eq!(collect("line\nbreak"), vec!["line", "break"]);
    }
}
