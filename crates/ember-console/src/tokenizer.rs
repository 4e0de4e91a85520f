//! Line tokenizer with a single quoting convention.
//!
//! Splits an input line on spaces into at most [`MAX_TOKENS`] stored spans.
//! A token whose first character is the quote delimiter runs across embedded
//! spaces until a space directly preceded by the delimiter. Tokens past the
//! third are counted but not stored, so an over-long argument list is still
//! detectable as an arity error.

/// Maximum number of stored token spans per line (command name + two
/// arguments).
pub const MAX_TOKENS: usize = 3;

/// Token spans produced from one input line.
///
/// Spans borrow from the caller's line and are valid only as long as it is.
/// `count` keeps counting past [`MAX_TOKENS`].
#[derive(Debug, Clone, Copy)]
pub struct TokenSet<'a> {
    tokens: [Option<&'a str>; MAX_TOKENS],
    count: usize,
}

impl<'a> TokenSet<'a> {
    /// Total number of tokens found, including unstored ones.
    pub fn count(&self) -> usize {
        self.count
    }

    /// `true` if the line held no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The `index`-th stored token span.
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.tokens.get(index).copied().flatten()
    }
}

/// Tokenize `line`, honoring `delimiter` quoting and scanning at most
/// `max_row_length` bytes plus one guard byte.
///
/// Only the space character separates tokens. A token opened by `delimiter`
/// stays open across spaces until a space directly preceded by a delimiter
/// character; the opening delimiter itself never closes the token, so a
/// lone leading delimiter runs to the next proper close or end of input.
/// An input longer than the scan bound is truncated at the bound.
pub fn find_tokens<'a>(line: &'a str, delimiter: char, max_row_length: usize) -> TokenSet<'a> {
    let mut tokens = [None; MAX_TOKENS];
    let mut count = 0usize;
    let mut in_token = false;
    let mut quoted = false;
    let mut token_start = 0usize;
    let mut prev: Option<char> = None;
    let mut stop = line.len();

    for (idx, ch) in line.char_indices() {
        if idx > max_row_length {
            stop = idx;
            break;
        }
        if !in_token {
            if ch != ' ' {
                in_token = true;
                quoted = ch == delimiter;
                token_start = idx;
                count += 1;
            }
        } else if ch == ' ' {
            // A quoted token closes only at a space directly preceded by the
            // delimiter, and that delimiter must not be the opening one.
            let close = if quoted {
                prev == Some(delimiter) && idx - delimiter.len_utf8() != token_start
            } else {
                true
            };
            if close {
                if count <= MAX_TOKENS {
                    tokens[count - 1] = Some(&line[token_start..idx]);
                }
                in_token = false;
            }
        }
        prev = Some(ch);
    }

    if in_token && count <= MAX_TOKENS {
        tokens[count - 1] = Some(&line[token_start..stop]);
    }

    TokenSet { tokens, count }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tokens(line: &str) -> TokenSet<'_> {
        find_tokens(line, '"', 80)
    }

    #[test]
    fn splits_on_single_spaces() {
        let set = tokens("led 5 on");
        assert_eq!(set.count(), 3);
        assert_eq!(set.get(0), Some("led"));
        assert_eq!(set.get(1), Some("5"));
        assert_eq!(set.get(2), Some("on"));
    }

    #[test]
    fn collapses_space_runs() {
        let set = tokens("  relay   off  ");
        assert_eq!(set.count(), 2);
        assert_eq!(set.get(0), Some("relay"));
        assert_eq!(set.get(1), Some("off"));
    }

    #[test]
    fn empty_line_has_no_tokens() {
        assert!(tokens("").is_empty());
        assert!(tokens("     ").is_empty());
    }

    #[test]
    fn counts_excess_tokens_beyond_three() {
        let set = tokens("a b c d e");
        assert_eq!(set.count(), 5);
        assert_eq!(set.get(2), Some("c"));
        assert_eq!(set.get(3), None);
    }

    #[test]
    fn quoted_token_spans_spaces() {
        let set = tokens("echo \"hi there\"");
        assert_eq!(set.count(), 2);
        assert_eq!(set.get(1), Some("\"hi there\""));
    }

    #[test]
    fn quoted_token_closes_midline() {
        let set = tokens("set \"a b\" next");
        assert_eq!(set.count(), 3);
        assert_eq!(set.get(1), Some("\"a b\""));
        assert_eq!(set.get(2), Some("next"));
    }

    #[test]
    fn opening_delimiter_does_not_close_its_own_token() {
        // The space after a lone opening delimiter does not end the token.
        let set = tokens("\" b\"");
        assert_eq!(set.count(), 1);
        assert_eq!(set.get(0), Some("\" b\""));
    }

    #[test]
    fn empty_quoted_token() {
        let set = tokens("tag \"\" x");
        assert_eq!(set.count(), 3);
        assert_eq!(set.get(1), Some("\"\""));
        assert_eq!(set.get(2), Some("x"));
    }

    #[test]
    fn delimiter_inside_unquoted_token_is_literal() {
        // Quoted mode is only entered by the token's first character.
        let set = tokens("ab\"cd ef");
        assert_eq!(set.count(), 2);
        assert_eq!(set.get(0), Some("ab\"cd"));
        assert_eq!(set.get(1), Some("ef"));
    }

    #[test]
    fn quoted_run_continues_past_inner_close_without_space() {
        // A delimiter not followed by a space does not close the token.
        let set = tokens("\"ab\"cd ef");
        assert_eq!(set.count(), 2);
        assert_eq!(set.get(0), Some("\"ab\"cd"));
    }

    #[test]
    fn unterminated_quote_runs_to_end_of_input() {
        let set = tokens("echo \"half open");
        assert_eq!(set.count(), 2);
        assert_eq!(set.get(1), Some("\"half open"));
    }

    #[test]
    fn scan_stops_at_row_limit() {
        let set = find_tokens("abcdefgh", '"', 4);
        assert_eq!(set.count(), 1);
        assert_eq!(set.get(0), Some("abcde"));
    }

    #[test]
    fn alternate_delimiter() {
        let set = find_tokens("echo 'hi there'", '\'', 80);
        assert_eq!(set.count(), 2);
        assert_eq!(set.get(1), Some("'hi there'"));
    }

    proptest! {
        /// Without the delimiter in play, tokenization agrees with a plain
        /// space split.
        #[test]
        fn plain_words_match_space_split(words in proptest::collection::vec("[a-z]{1,8}", 0..5)) {
            let line = words.join("  ");
            let set = find_tokens(&line, '"', 256);
            prop_assert_eq!(set.count(), words.len());
            for (i, word) in words.iter().take(MAX_TOKENS).enumerate() {
                prop_assert_eq!(set.get(i), Some(word.as_str()));
            }
        }
    }
}
