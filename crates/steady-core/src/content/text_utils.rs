use unicode_general_category::{GeneralCategory, get_general_category};

/// Whether `c` is a punctuation mark that closes a frame line.
///
/// Any character in a Unicode punctuation category counts. Math, currency
/// and other symbols do not.
pub fn is_punctuation(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}

/// Whether `c` marks the end of a sentence: `.`, `?` or `!`.
pub fn is_sentence_end(c: char) -> bool {
    matches!(c, '.' | '?' | '!')
}

/// Whether `text` ends with a punctuation mark.
pub fn ends_with_punctuation(text: &str) -> bool {
    text.chars().next_back().is_some_and(is_punctuation)
}

/// Whether the trailing punctuation run of `text` contains a sentence end.
///
/// `"end.)"` and `"really?!"` qualify, `"so,"` and `"word"` do not.
pub fn ends_sentence(text: &str) -> bool {
    text.chars()
        .rev()
        .take_while(|c| is_punctuation(*c))
        .any(is_sentence_end)
}

/// Number of non-whitespace characters in `text`.
pub fn visible_len(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Number of characters in `text`, spaces included.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
