//! Reference substring search used as the oracle for the verifier

use std::fmt;

/// Output literal of the external program when the pattern is absent
pub const NO_MATCH: &str = "No match.";

/// Byte offset of the first occurrence of `pattern` in `text`.
///
/// An empty pattern matches at offset 0.
///
/// # Examples
/// ```
/// use maze_match_tools::matching::find_first;
///
/// assert_eq!(find_first(b"abcabc", b"bca"), Some(1));
/// assert_eq!(find_first(b"hello", b"xyz"), None);
/// ```
pub fn find_first(text: &[u8], pattern: &[u8]) -> Option<usize> {
    if pattern.is_empty() {
        return Some(0);
    }
    text.windows(pattern.len()).position(|window| window == pattern)
}

/// Expected result of a single search
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum MatchOutcome {
    Found(usize),
    NoMatch,
}

impl MatchOutcome {
    pub fn of(text: &[u8], pattern: &[u8]) -> Self {
        match find_first(text, pattern) {
            Some(pos) => MatchOutcome::Found(pos),
            None => MatchOutcome::NoMatch,
        }
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchOutcome::Found(pos) => write!(f, "{}", pos),
            MatchOutcome::NoMatch => write!(f, "{}", NO_MATCH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_occurrence() {
        assert_eq!(find_first(b"abcd", b"cd"), Some(2));
        assert_eq!(find_first(b"abcd", b"abcd"), Some(0));
        assert_eq!(find_first(b"spam, egg and spam", b"spam"), Some(0));
        assert_eq!(find_first(b"spam, egg and spam", b"egg"), Some(6));
        assert_eq!(find_first(b"spam, egg and spam", b"bacon"), None);
    }

    #[test]
    fn offsets_are_in_bytes() {
        assert_eq!(
            find_first("My name is 小明.".as_bytes(), "小明".as_bytes()),
            Some(11)
        );
    }

    #[test]
    fn edge_lengths() {
        assert_eq!(find_first(b"", b""), Some(0));
        assert_eq!(find_first(b"abc", b""), Some(0));
        assert_eq!(find_first(b"", b"a"), None);
        assert_eq!(find_first(b"ab", b"abc"), None);
    }

    #[test]
    fn outcome_display_matches_program_output() {
        assert_eq!(MatchOutcome::of(b"abcabc", b"bca").to_string(), "1");
        assert_eq!(MatchOutcome::of(b"hello", b"xyz").to_string(), "No match.");
    }
}
