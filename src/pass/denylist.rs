//! Known-weak substrings a generated password must not contain.

use zeroize::Zeroize;

pub const WEAK_PATTERNS: &[&str] = &[
    "password", "123456", "qwerty", "abc123", "letmein", "admin", "welcome", "monkey", "dragon",
    "baseball", "football",
];

/// Case-insensitive substring denylist. Patterns are stored lowercase.
#[derive(Debug, Clone)]
pub struct Denylist {
    patterns: Vec<String>,
}

impl Denylist {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(|p| p.as_ref().to_ascii_lowercase())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// First pattern found in `candidate`, if any.
    pub fn find(&self, candidate: &[u8]) -> Option<&str> {
        let mut lowered = candidate.to_ascii_lowercase();
        let hit = self
            .patterns
            .iter()
            .find(|p| contains(&lowered, p.as_bytes()))
            .map(String::as_str);
        lowered.zeroize();
        hit
    }
}

impl Default for Denylist {
    fn default() -> Self {
        Self::new(WEAK_PATTERNS)
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_case_insensitively() {
        let list = Denylist::default();
        assert_eq!(list.find(b"xxPaSsWoRdxx"), Some("password"));
        assert_eq!(list.find(b"QWERTY!!"), Some("qwerty"));
        assert_eq!(list.find(b"9ABC123z"), Some("abc123"));
    }

    #[test]
    fn clean_candidates_pass() {
        let list = Denylist::default();
        assert_eq!(list.find(b"Xk9!mQ2#vL7p"), None);
        assert_eq!(list.find(b"12345"), None);
        assert_eq!(list.find(b""), None);
    }

    #[test]
    fn custom_patterns_are_lowercased() {
        assert_eq!(Denylist::new(["ZZ"]).find(b"aazzaa"), Some("zz"));
        assert_eq!(Denylist::new([""]).find(b"anything"), None);
    }
}
