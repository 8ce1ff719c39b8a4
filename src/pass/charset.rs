//! Character classes and the active alphabet.

use crate::pass::Policy;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{};:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Upper,
    Lower,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Fixed order used to build the active alphabet.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Upper,
        CharacterClass::Lower,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharacterClass::Upper => UPPERCASE,
            CharacterClass::Lower => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    pub fn contains(self, c: u8) -> bool {
        self.alphabet().contains(&c)
    }
}

/// Enabled classes in alphabet order.
pub fn enabled(policy: &Policy) -> Vec<CharacterClass> {
    CharacterClass::ALL
        .into_iter()
        .filter(|&class| policy.includes(class))
        .collect()
}

/// Concatenation of every enabled class alphabet.
pub fn build(policy: &Policy) -> Vec<u8> {
    let mut chars = Vec::with_capacity(size(policy));
    for class in enabled(policy) {
        chars.extend_from_slice(class.alphabet());
    }
    chars
}

/// Size of the active alphabet.
pub fn size(policy: &Policy) -> usize {
    enabled(policy).iter().map(|c| c.alphabet().len()).sum()
}
