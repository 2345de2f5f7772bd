use std::collections::TryReserveError;
use std::fmt;

/// Initial token capacity, and the step by which it grows.
pub const TOKEN_BUFSIZE: usize = 64;

const TOKEN_DELIM: [char; 5] = [' ', '\t', '\r', '\n', '\x07'];

#[derive(Debug)]
pub enum TokenizeError {
    Allocation(TryReserveError),
}

impl From<TryReserveError> for TokenizeError {
    fn from(err: TryReserveError) -> Self {
        TokenizeError::Allocation(err)
    }
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenizeError::Allocation(e) => write!(f, "allocation error: {}", e),
        }
    }
}

impl std::error::Error for TokenizeError {}

/// The argument vector built from one input line.
///
/// Tokens are owned copies, so the vector stays valid after the line it came
/// from is dropped. Positional access past the last token yields `None`,
/// which plays the role of the end-of-arguments sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgVec {
    tokens: Vec<String>,
}

impl ArgVec {
    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// The command name, or `None` when the line held no tokens at all.
    pub fn command(&self) -> Option<&str> {
        self.get(0)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.tokens.capacity()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

pub(crate) fn is_delim(c: char) -> bool {
    TOKEN_DELIM.contains(&c)
}

/// Splits `line` on the delimiter set, collapsing runs of delimiters.
///
/// Storage starts at [`TOKEN_BUFSIZE`] slots and grows by the same amount
/// each time it fills. Every allocation is fallible; on failure nothing is
/// returned but the error.
pub fn tokenize(line: &str) -> Result<ArgVec, TokenizeError> {
    let mut tokens: Vec<String> = Vec::new();
    tokens.try_reserve_exact(TOKEN_BUFSIZE)?;

    for token in line.split(is_delim).filter(|t| !t.is_empty()) {
        if tokens.len() >= tokens.capacity() {
            tokens.try_reserve_exact(TOKEN_BUFSIZE)?;
        }

        let mut owned = String::new();
        owned.try_reserve_exact(token.len())?;
        owned.push_str(token);
        tokens.push(owned);
    }

    Ok(ArgVec { tokens })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn words(args: &ArgVec) -> Vec<&str> {
        args.iter().collect()
    }

    #[test]
    fn test_collapses_delimiters() -> Result<(), TokenizeError> {
        let args = tokenize("  a   b\tc\n")?;
        assert_eq!(words(&args), ["a", "b", "c"]);
        assert_eq!(args.get(3), None);
        Ok(())
    }

    #[test]
    fn test_empty_and_blank_lines() -> Result<(), TokenizeError> {
        for line in ["", "   \t\n", "\r\n", "\x07\x07 "] {
            let args = tokenize(line)?;
            assert!(args.is_empty(), "{:?} produced tokens", line);
            assert_eq!(args.command(), None);
        }
        Ok(())
    }

    #[test]
    fn test_bell_and_carriage_return_split() -> Result<(), TokenizeError> {
        let args = tokenize("ls\x07-la\r/tmp")?;
        assert_eq!(words(&args), ["ls", "-la", "/tmp"]);
        Ok(())
    }

    #[test]
    fn test_other_whitespace_is_not_a_delimiter() -> Result<(), TokenizeError> {
        let args = tokenize("a\u{a0}b\x0bc d")?;
        assert_eq!(words(&args), ["a\u{a0}b\x0bc", "d"]);
        Ok(())
    }

    #[test]
    fn test_tokens_are_verbatim() -> Result<(), TokenizeError> {
        let args = tokenize("echo \"a b\" $HOME ~ *.rs")?;
        assert_eq!(words(&args), ["echo", "\"a", "b\"", "$HOME", "~", "*.rs"]);
        Ok(())
    }

    #[test]
    fn test_initial_capacity() -> Result<(), TokenizeError> {
        let args = tokenize("one two")?;
        assert!(args.capacity() >= TOKEN_BUFSIZE);
        Ok(())
    }

    #[test]
    fn test_grows_past_initial_capacity() -> Result<(), TokenizeError> {
        let count = TOKEN_BUFSIZE * 4 + 7;
        let expected: Vec<String> = (0..count).map(|i| format!("w{}", i)).collect();
        let line = expected.join(" \t ");

        let args = tokenize(&line)?;
        assert_eq!(args.len(), count);
        assert!(args.capacity() >= count);
        assert_eq!(args.as_slice(), expected.as_slice());
        assert_eq!(args.get(count), None);
        Ok(())
    }

    #[test]
    fn test_capacity_grows_by_fixed_step() -> Result<(), TokenizeError> {
        let line = |count: usize| vec!["t"; count].join(" ");

        assert_eq!(tokenize(&line(TOKEN_BUFSIZE))?.capacity(), TOKEN_BUFSIZE);
        assert_eq!(tokenize(&line(TOKEN_BUFSIZE + 1))?.capacity(), 2 * TOKEN_BUFSIZE);
        assert_eq!(tokenize(&line(2 * TOKEN_BUFSIZE))?.capacity(), 2 * TOKEN_BUFSIZE);
        assert_eq!(tokenize(&line(2 * TOKEN_BUFSIZE + 1))?.capacity(), 3 * TOKEN_BUFSIZE);
        assert_eq!(tokenize(&line(3 * TOKEN_BUFSIZE + 1))?.capacity(), 4 * TOKEN_BUFSIZE);
        Ok(())
    }

    #[test]
    fn test_exactly_full_buffer() -> Result<(), TokenizeError> {
        let line = vec!["x"; TOKEN_BUFSIZE].join(" ");
        let args = tokenize(&line)?;
        assert_eq!(args.len(), TOKEN_BUFSIZE);
        assert_eq!(args.get(TOKEN_BUFSIZE), None);
        Ok(())
    }

    proptest! {
        #[test]
        fn prop_tokenize_recovers_words(
            words in prop::collection::vec("[a-zA-Z0-9_./=-]{1,8}", 0..300),
            seps in prop::collection::vec("[ \t\r\n\x07]{1,4}", 301),
        ) {
            let mut line = seps[0].clone();
            for (word, sep) in words.iter().zip(seps.iter().skip(1)) {
                line.push_str(word);
                line.push_str(sep);
            }

            let args = tokenize(&line).expect("tokenize");
            prop_assert_eq!(args.as_slice(), words.as_slice());
            prop_assert_eq!(args.get(words.len()), None);
        }
    }
}
